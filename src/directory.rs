//! Guest directory
//!
//! Loads the seating plan (`Name,Table` CSV) once at startup and answers
//! case- and whitespace-insensitive lookups against it. The directory is
//! immutable after load and shared read-only between handlers.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// Errors raised while reading the guest list from disk
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to read guest list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Reduce a name to its lookup key: trimmed and lowercased.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A guest resolved from the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatAssignment {
    /// Name exactly as listed in the guest source
    pub name: String,
    pub table_number: i32,
}

/// Canonical name → table, plus a normalized-key index over the names
#[derive(Debug, Default, Clone)]
pub struct GuestDirectory {
    tables: HashMap<String, i32>,
    index: HashMap<String, String>,
}

impl GuestDirectory {
    /// Parse guest list text. The first non-blank line is a header.
    ///
    /// Rows missing a name or table are skipped. Rows whose table does not
    /// parse as an integer are skipped with a warning. Later rows overwrite
    /// earlier ones with the same name or the same normalized key.
    pub fn parse(source: &str) -> Self {
        let mut directory = Self::default();

        let rows = source
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .skip(1);

        for (line_idx, line) in rows {
            let mut fields = line.split(',');
            let (Some(name_raw), Some(table_raw)) = (fields.next(), fields.next()) else {
                continue;
            };

            let name = name_raw.trim();
            let table_raw = table_raw.trim();
            if name.is_empty() || table_raw.is_empty() {
                continue;
            }

            let table_number = match table_raw.parse::<i32>() {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!(
                        "Skipping guest list line {}: invalid table '{}' for '{}': {}",
                        line_idx + 1,
                        table_raw,
                        name,
                        e
                    );
                    continue;
                }
            };

            directory.insert(name, table_number);
        }

        directory
    }

    /// Load the guest list from `path`.
    ///
    /// A missing file is not an error: the directory comes back empty and a
    /// warning is logged so the server can still start.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!(
                "Guest list {} not found. Upload it to the server; no guests can check in until then.",
                path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let directory = Self::parse(&contents);
        tracing::info!("Loaded {} guest entries.", directory.len());

        Ok(directory)
    }

    fn insert(&mut self, name: &str, table_number: i32) {
        self.tables.insert(name.to_string(), table_number);
        self.index.insert(normalize_name(name), name.to_string());
    }

    /// Resolve an already-normalized key to its seat assignment.
    pub fn resolve(&self, normalized: &str) -> Option<SeatAssignment> {
        let name = self.index.get(normalized)?;
        let table_number = *self.tables.get(name)?;
        Some(SeatAssignment {
            name: name.clone(),
            table_number,
        })
    }

    /// Number of canonical guest names
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
