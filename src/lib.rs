//! Core library surface for the Biblioteca Digital terminal catalog.
//!
//! The binary only wires these pieces together; tests and other tooling can
//! drive the same controller without a terminal.
pub mod catalog;
pub mod cli;
pub mod logging;
pub mod models;
pub mod state;
pub mod ui;

/// The catalog store and its seed loaders.
pub use catalog::{filter_books, load_seed_file, parse_seed, Catalog, SeedError};

/// Domain types that every layer passes around.
pub use models::{Book, BookId};

/// The controller holding all session state.
pub use state::{LibraryState, Selection};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
