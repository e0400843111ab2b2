use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::phospho::records::{Column, PhosphoRecord};

#[derive(Error, Debug)]
pub enum PhosphoError {
    #[error("error reading phosphosite dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("no rows match the query")]
    NotFound,
}

/// The flat phosphosite table. Loaded once at startup and never mutated,
/// so it can be shared freely between concurrent readers.
pub struct PhosphoTable {
    records: Vec<PhosphoRecord>,
}

impl PhosphoTable {
    /// Builds the table from pre-parsed rows, dropping full-row duplicates
    /// and keeping the first occurrence of each.
    pub fn new(rows: Vec<PhosphoRecord>) -> Self {
        let mut seen: HashSet<PhosphoRecord> = HashSet::new();
        let records: Vec<PhosphoRecord> = rows
            .into_iter()
            .filter(|record| seen.insert(record.clone()))
            .collect();

        PhosphoTable { records }
    }

    pub fn from_csv(path: &Path) -> Result<Self, PhosphoError> {
        let mut reader = csv::Reader::from_path(path)?;

        let mut rows: Vec<PhosphoRecord> = Vec::new();
        for result in reader.deserialize() {
            let record: PhosphoRecord = result?;
            rows.push(record);
        }

        let table = PhosphoTable::new(rows);
        info!("Loaded {} phosphosite rows", table.len());

        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Selects the rows whose value in `column` equals `value` exactly, in
    /// load order. The caller upper-cases user input before filtering. A
    /// query with no matching rows is an error, not an empty result, so
    /// callers route misses to their no-matches path.
    pub fn filter(
        &self,
        column: Column,
        value: &str,
    ) -> Result<Vec<PhosphoRecord>, PhosphoError> {
        let rows: Vec<PhosphoRecord> = self
            .records
            .iter()
            .filter(|record| record.get(column) == value)
            .cloned()
            .collect();

        if rows.is_empty() {
            return Err(PhosphoError::NotFound);
        }

        Ok(rows)
    }
}
