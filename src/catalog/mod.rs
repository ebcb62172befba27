//! In-memory catalog split across logical submodules.

mod filter;
mod seed;
mod store;

pub use filter::{filter_books, filter_ids};
pub use seed::{load_seed_file, parse_seed, SeedError};
pub use store::Catalog;
