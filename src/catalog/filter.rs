//! The filtered view. It is a pure function of the book list and the search
//! term, recomputed from scratch whenever either changes.

use crate::models::{Book, BookId};

/// Books whose title or author contains `term`, ignoring case, in catalog
/// order. An empty term keeps every book.
pub fn filter_books<'a>(books: &'a [Book], term: &str) -> impl Iterator<Item = &'a Book> + 'a {
    let needle = term.to_lowercase();
    books
        .iter()
        .filter(move |book| book.matches_lowercase(&needle))
}

/// Ids of the books [`filter_books`] would yield.
pub fn filter_ids(books: &[Book], term: &str) -> Vec<BookId> {
    filter_books(books, term).map(|b| b.id).collect()
}
