use std::collections::HashSet;

use biblioteca_digital::{filter_books, Book, BookId, Catalog, LibraryState, Selection};
use pretty_assertions::assert_eq;

fn ids<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<BookId> {
    books.map(|b| b.id).collect()
}

#[test]
fn every_valid_add_grows_catalog_by_one_with_unique_id() {
    let mut state = LibraryState::default();
    let mut seen: HashSet<BookId> = ids(state.catalog().books().iter()).into_iter().collect();

    let inputs = [
        ("Ficciones", "Jorge Luis Borges"),
        ("  Pedro Páramo", "Juan Rulfo  "),
        ("Ficciones", "Jorge Luis Borges"),
        ("x", "y"),
    ];
    for (title, author) in inputs {
        let before = state.total_count();
        state.set_title_input(title);
        state.set_author_input(author);
        let id = state.add_book().expect("non-blank input is accepted");
        assert_eq!(state.total_count(), before + 1);
        assert!(seen.insert(id));
    }
}

#[test]
fn blank_inputs_leave_catalog_unchanged() {
    let mut state = LibraryState::default();
    let before = ids(state.catalog().books().iter());
    for (title, author) in [("", "X"), ("X", ""), ("   ", "   "), ("\t", "Autor")] {
        state.set_title_input(title);
        state.set_author_input(author);
        assert_eq!(state.add_book(), None);
    }
    assert_eq!(ids(state.catalog().books().iter()), before);
}

#[test]
fn filter_matches_exactly_title_or_author_hits() {
    let catalog = Catalog::seeded();
    for term in ["", "a", "GABRIEL", "quijote", "zafón", "1984", "xyz", " "] {
        let needle = term.to_lowercase();
        let expected: Vec<BookId> = catalog
            .books()
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&needle)
                    || b.author.to_lowercase().contains(&needle)
            })
            .map(|b| b.id)
            .collect();
        assert_eq!(ids(filter_books(catalog.books(), term)), expected, "term {term:?}");

        let once: Vec<Book> = filter_books(catalog.books(), term).cloned().collect();
        assert_eq!(ids(filter_books(&once, term)), expected, "term {term:?} twice");
    }
}

#[test]
fn selecting_twice_or_switching_keeps_one_selection() {
    let mut state = LibraryState::default();
    state.select(4);
    state.select(4);
    assert_eq!(state.selection(), Selection::Selected(4));
    state.select(6);
    assert_eq!(state.selection(), Selection::Selected(6));
}

#[test]
fn removing_selected_book_resets_selection() {
    let mut state = LibraryState::default();
    assert!(state.remove_selected().is_none());
    assert_eq!(state.total_count(), 8);

    state.select(5);
    let removed = state.remove_selected().expect("selection was active");
    assert_eq!(removed.title, "Rayuela");
    assert_eq!(state.total_count(), 7);
    assert_eq!(state.selection(), Selection::None);
    assert!(!state.can_remove());
}

#[test]
fn garcia_search_then_remove_end_to_end() {
    let mut state = LibraryState::default();
    assert_eq!(state.total_count(), 8);

    state.set_search("garcía");
    let authors: Vec<&str> = state.visible_books().map(|b| b.author.as_str()).collect();
    assert_eq!(authors, vec!["Gabriel García Márquez"; 3]);

    let first = state.visible_ids()[0];
    assert!(state.select(first));
    state.remove_selected();

    assert_eq!(state.total_count(), 7);
    assert_eq!(state.filtered_count(), 2);
}
