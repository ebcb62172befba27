//! Startup data for the catalog: the built-in record set and the optional
//! JSON seed file. Seed files are validated up front so the running session
//! only ever sees non-blank, uniquely identified books.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Book, BookId};

use super::store::Catalog;

/// Records loaded on startup when no seed file is given.
pub(crate) const DEFAULT_SEED: &[(BookId, &str, &str)] = &[
    (1, "Cien años de soledad", "Gabriel García Márquez"),
    (2, "Don Quijote de la Mancha", "Miguel de Cervantes"),
    (3, "1984", "George Orwell"),
    (4, "El principito", "Antoine de Saint-Exupéry"),
    (5, "Rayuela", "Julio Cortázar"),
    (6, "La sombra del viento", "Carlos Ruiz Zafón"),
    (7, "Crónica de una muerte anunciada", "Gabriel García Márquez"),
    (8, "El amor en los tiempos del cólera", "Gabriel García Márquez"),
];

/// One element of the JSON seed array. Ids are optional; missing ones are
/// assigned after every explicit id has been placed.
#[derive(Debug, Clone, Deserialize)]
struct SeedEntry {
    #[serde(default)]
    id: Option<BookId>,
    title: String,
    author: String,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("seed file is not a valid JSON book list")]
    Parse(#[from] serde_json::Error),
    #[error("seed entry {index} has a blank {field}")]
    BlankField { index: usize, field: &'static str },
    #[error("seed id {0} appears more than once")]
    DuplicateId(BookId),
    #[error("no id left to assign to seed entry {index}")]
    IdOverflow { index: usize },
}

/// Read and validate a JSON seed file.
pub fn load_seed_file(path: &Path) -> Result<Catalog, SeedError> {
    let raw = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_seed(&raw)
}

/// Parse a JSON array of seed entries into a catalog, keeping file order.
pub fn parse_seed(raw: &str) -> Result<Catalog, SeedError> {
    let entries: Vec<SeedEntry> = serde_json::from_str(raw)?;

    let mut taken = HashSet::new();
    for (index, entry) in entries.iter().enumerate() {
        if entry.title.trim().is_empty() {
            return Err(SeedError::BlankField {
                index,
                field: "title",
            });
        }
        if entry.author.trim().is_empty() {
            return Err(SeedError::BlankField {
                index,
                field: "author",
            });
        }
        if let Some(id) = entry.id {
            if !taken.insert(id) {
                return Err(SeedError::DuplicateId(id));
            }
        }
    }

    // `None` once the id space above the largest explicit id is used up.
    let mut next_id = taken.iter().max().map_or(Some(1), |max| max.checked_add(1));
    let mut books = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let id = match entry.id {
            Some(id) => id,
            None => {
                let id = next_id.ok_or(SeedError::IdOverflow { index })?;
                next_id = id.checked_add(1);
                id
            }
        };
        books.push(Book {
            id,
            title: entry.title.trim().to_string(),
            author: entry.author.trim().to_string(),
        });
    }

    Ok(Catalog::from_books(books))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_and_implicit_ids_mix() {
        let catalog = parse_seed(
            r#"[
                {"title": "Ficciones", "author": "Jorge Luis Borges"},
                {"id": 10, "title": "Pedro Páramo", "author": "Juan Rulfo"}
            ]"#,
        )
        .unwrap();
        let ids: Vec<BookId> = catalog.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![11, 10]);
    }

    #[test]
    fn blank_author_is_rejected() {
        let err = parse_seed(r#"[{"title": "x", "author": "  "}]"#).unwrap_err();
        assert!(matches!(
            err,
            SeedError::BlankField {
                index: 0,
                field: "author"
            }
        ));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = parse_seed(
            r#"[{"id": 2, "title": "a", "author": "b"}, {"id": 2, "title": "c", "author": "d"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::DuplicateId(2)));
    }

    #[test]
    fn max_id_seed_loads_without_overflow() {
        let catalog = parse_seed(r#"[{"id": 18446744073709551615, "title": "a", "author": "b"}]"#)
            .unwrap();
        assert_eq!(catalog.books()[0].id, BookId::MAX);
    }

    #[test]
    fn implicit_id_after_max_id_is_rejected() {
        let err = parse_seed(
            r#"[{"id": 18446744073709551615, "title": "a", "author": "b"},
                {"title": "c", "author": "d"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::IdOverflow { index: 1 }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(parse_seed("{"), Err(SeedError::Parse(_))));
    }
}
