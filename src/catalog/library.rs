use crate::catalog::rating_table::*;
use crate::types::*;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Error types for catalog library operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Unit error: {0}")]
    UnitError(#[from] UnitError),

    #[error("No rating table loaded for {0:?}")]
    TableNotFound(EquipmentKind),

    #[error("Invalid table format: {0}")]
    InvalidFormat(String),
}

/// Library of rating tables, one per equipment kind
///
/// Read-only after startup; the calculator only ever looks capacities up.
#[derive(Debug, Default)]
pub struct CatalogLibrary {
    tables: HashMap<EquipmentKind, RatingTable>,

    /// Base directory the tables were loaded from, if any
    base_path: Option<PathBuf>,
}

impl CatalogLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            base_path: None,
        }
    }

    /// Create a library pre-loaded with the built-in reference catalogs
    pub fn with_defaults() -> Self {
        let mut library = Self::new();
        library.add_table(RatingTable::sling_belt_default());
        library.add_table(RatingTable::wire_rope_default());
        library.add_table(RatingTable::shackle_default());
        library
    }

    /// Create a library and load all JSON tables from a directory
    pub fn from_directory(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let mut library = Self::new();
        library.base_path = Some(path.as_ref().to_path_buf());
        library.load_all_from_directory(path)?;
        Ok(library)
    }

    /// Load all JSON table files from a directory
    pub fn load_all_from_directory(&mut self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let dir = fs::read_dir(path)?;

        for entry in dir {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                match self.load_table_from_json(&path) {
                    Ok(_) => println!("Loaded: {}", path.display()),
                    Err(e) => eprintln!("Skipped {}: {}", path.display(), e),
                }
            }
        }
        Ok(())
    }

    /// Load a rating table from a JSON file
    pub fn load_table_from_json(&mut self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        let json = fs::read_to_string(path.as_ref())?;
        let table: RatingTable = serde_json::from_str(&json)?;

        if let Err(errors) = table.validate() {
            return Err(CatalogError::InvalidFormat(errors.join("; ")));
        }

        self.tables.insert(table.kind, table);
        Ok(())
    }

    /// Load a rating table from a CSV file with `size,capacity` columns.
    ///
    /// CSV carries no kind or unit metadata, so the caller supplies both.
    pub fn load_table_from_csv(
        &mut self,
        path: impl AsRef<Path>,
        kind: EquipmentKind,
        size_unit: &str,
    ) -> Result<(), CatalogError> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let mut entries = Vec::new();

        for record in reader.deserialize() {
            let entry: RatingEntry = record?;
            entries.push(entry);
        }

        let table = RatingTable::new(
            kind,
            format!("CSV catalog: {}", path.as_ref().display()),
            size_unit,
            entries,
        );

        if let Err(errors) = table.validate() {
            return Err(CatalogError::InvalidFormat(errors.join("; ")));
        }

        self.tables.insert(kind, table);
        Ok(())
    }

    /// Add a rating table directly, replacing any existing one for its kind
    pub fn add_table(&mut self, table: RatingTable) {
        self.tables.insert(table.kind, table);
    }

    /// Get the table for an equipment kind
    pub fn get(&self, kind: EquipmentKind) -> Option<&RatingTable> {
        self.tables.get(&kind)
    }

    /// Rated capacity for one unit of the given kind at the given size.
    ///
    /// A missing table degrades to zero capacity, the same as an
    /// unrecognized size within a table.
    pub fn rated_capacity(
        &self,
        kind: EquipmentKind,
        size: NominalSize,
    ) -> Result<Load, UnitError> {
        match self.tables.get(&kind) {
            Some(table) => table.rated_capacity(size),
            None => Ok(Load::new::<ton>(0.0)),
        }
    }

    /// Validate every loaded table
    pub fn validate_all(&self) -> Result<(), HashMap<EquipmentKind, Vec<String>>> {
        let mut failures = HashMap::new();

        for (kind, table) in &self.tables {
            if let Err(errors) = table.validate() {
                failures.insert(*kind, errors);
            }
        }

        if failures.is_empty() { Ok(()) } else { Err(failures) }
    }

    /// Remove a table from the library
    pub fn remove(&mut self, kind: EquipmentKind) -> Option<RatingTable> {
        self.tables.remove(&kind)
    }

    /// Clear all tables
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Check if library is empty
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Get number of loaded tables
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Base directory the tables were loaded from, if any
    pub fn base_path(&self) -> Option<&Path> {
        self.base_path.as_deref()
    }
}
