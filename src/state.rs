//! Controller that owns every piece of session state: the catalog, the two
//! form inputs, the search term, the selection, and the derived view. Each
//! mutating method finishes with [`LibraryState::recompute_view`], so readers
//! never observe a stale projection.

use tracing::debug;

use crate::catalog::{filter_ids, Catalog};
use crate::models::{Book, BookId};

/// At most one chosen record, tracked by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Selected(BookId),
}

impl Selection {
    /// The selected id, if any.
    pub fn id(&self) -> Option<BookId> {
        match self {
            Selection::None => None,
            Selection::Selected(id) => Some(*id),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LibraryState {
    /// Every book in the session; the only place records live.
    catalog: Catalog,
    /// Pending title typed into the add form.
    title_input: String,
    /// Pending author typed into the add form.
    author_input: String,
    /// Live search term; empty matches everything.
    search: String,
    /// Chosen record. Kept while hidden by the search, dropped on removal.
    selection: Selection,
    /// Ids of the books matching `search`, in catalog order.
    view: Vec<BookId>,
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new(Catalog::seeded())
    }
}

impl LibraryState {
    /// Start a session over `catalog` with empty inputs and no selection.
    pub fn new(catalog: Catalog) -> Self {
        let mut state = Self {
            catalog,
            title_input: String::new(),
            author_input: String::new(),
            search: String::new(),
            selection: Selection::None,
            view: Vec::new(),
        };
        state.recompute_view();
        state
    }

    /// Rebuild the filtered view from the catalog and the search term.
    pub fn recompute_view(&mut self) {
        self.view = filter_ids(self.catalog.books(), &self.search);
    }

    /// Replace the pending title.
    pub fn set_title_input(&mut self, value: impl Into<String>) {
        self.title_input = value.into();
    }

    /// Replace the pending author.
    pub fn set_author_input(&mut self, value: impl Into<String>) {
        self.author_input = value.into();
    }

    /// Pending title as typed, untrimmed.
    pub fn title_input(&self) -> &str {
        &self.title_input
    }

    /// Pending author as typed, untrimmed.
    pub fn author_input(&self) -> &str {
        &self.author_input
    }

    pub(crate) fn title_input_mut(&mut self) -> &mut String {
        &mut self.title_input
    }

    pub(crate) fn author_input_mut(&mut self) -> &mut String {
        &mut self.author_input
    }

    /// Replace the search term and refresh the view. Selection is left alone
    /// even when the selected book drops out of the results.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        debug!(search = %self.search, "search changed");
        self.recompute_view();
    }

    /// Current search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Add a book from the current form inputs. On success the inputs are
    /// cleared and the new id returned; blank input changes nothing.
    pub fn add_book(&mut self) -> Option<BookId> {
        let id = self
            .catalog
            .add(&self.title_input, &self.author_input)
            .map(|b| b.id)?;
        self.title_input.clear();
        self.author_input.clear();
        self.recompute_view();
        Some(id)
    }

    /// Select a book that is currently visible. Returns whether the selection
    /// now points at `id`.
    pub fn select(&mut self, id: BookId) -> bool {
        if !self.view.contains(&id) {
            return false;
        }
        self.selection = Selection::Selected(id);
        debug!(id, "book selected");
        self.recompute_view();
        true
    }

    /// Remove the selected book and clear the selection. No-op without a
    /// selection.
    pub fn remove_selected(&mut self) -> Option<Book> {
        let id = self.selection.id()?;
        let removed = self.catalog.remove(id);
        self.selection = Selection::None;
        self.recompute_view();
        removed
    }

    /// Current selection state.
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected record, whether or not the search currently shows it.
    pub fn selected_book(&self) -> Option<&Book> {
        self.selection.id().and_then(|id| self.catalog.get(id))
    }

    /// Whether `id` is the selected record.
    pub fn is_selected(&self, id: BookId) -> bool {
        self.selection == Selection::Selected(id)
    }

    /// Whether the remove action should be offered.
    pub fn can_remove(&self) -> bool {
        self.selected_book().is_some()
    }

    /// The full catalog, ignoring the search.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of books in the catalog.
    pub fn total_count(&self) -> usize {
        self.catalog.len()
    }

    /// Number of books matching the search.
    pub fn filtered_count(&self) -> usize {
        self.view.len()
    }

    /// Ids in the filtered view, in catalog order.
    pub fn visible_ids(&self) -> &[BookId] {
        &self.view
    }

    /// Books in the filtered view, in catalog order.
    pub fn visible_books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.view.iter().filter_map(|id| self.catalog.get(*id))
    }
}
