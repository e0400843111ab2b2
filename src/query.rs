//! Resolves user queries against the phosphosite table or the
//! kinase/inhibitor store. Matching is done on the upper-cased query, but
//! a miss always reports the query as the user typed it.

use std::str::FromStr;

use diesel::SqliteConnection;
use thiserror::Error;

use crate::phospho::records::{Column, PhosphoRecord};
use crate::phospho::table::{PhosphoError, PhosphoTable};
use crate::store::entity::{self, StoreError};
use crate::store::models::{Inhibitor, Kinase};

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("no matches for {query}")]
    NoMatches { query: String },

    #[error("not a phosphosite column: {0}")]
    InvalidColumn(String),

    #[error("store error: {0}")]
    Store(StoreError),

    #[error("dataset error: {0}")]
    Dataset(PhosphoError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowseResult {
    /// The normalized query the rows were matched against.
    pub query: String,
    pub count: usize,
    pub rows: Vec<PhosphoRecord>,
}

/// The flattened kinase detail view.
#[derive(Debug, Clone, PartialEq)]
pub struct KinaseView {
    pub name: String,
    pub gene: String,
    pub family: String,
    pub location: String,
}

/// Inhibitors acting on one kinase. The listing is keyed by the kinase
/// gene symbol: an "inhibitor search" resolves the gene first and then
/// walks its associations.
#[derive(Debug, Clone, PartialEq)]
pub struct InhibitorListing {
    pub gene: String,
    pub inh_number: usize,
    pub inhibitors: Vec<Inhibitor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InhibitorSummary {
    pub name: String,
    pub structure: String,
    pub weight: i32,
    pub image: String,
    pub kinases: Vec<Kinase>,
}

/// Browse mode: filter the phosphosite table on one column.
pub fn browse(
    table: &PhosphoTable,
    column: &str,
    raw_query: &str,
) -> Result<BrowseResult, QueryError> {
    let column = Column::from_str(column)
        .map_err(|_| QueryError::InvalidColumn(column.to_string()))?;

    let normalized = raw_query.to_uppercase();

    match table.filter(column, &normalized) {
        Ok(rows) => Ok(BrowseResult {
            query: normalized,
            count: rows.len(),
            rows,
        }),
        Err(PhosphoError::NotFound) => Err(QueryError::NoMatches {
            query: raw_query.to_string(),
        }),
        Err(other) => Err(QueryError::Dataset(other)),
    }
}

/// Search mode, kinase kind: primary-key lookup by gene symbol.
pub fn search_kinase(
    connection: &mut SqliteConnection,
    raw_query: &str,
) -> Result<KinaseView, QueryError> {
    let normalized = raw_query.to_uppercase();

    match entity::get_kinase(connection, &normalized) {
        Ok(kinase) => Ok(KinaseView {
            name: kinase.full_name,
            gene: kinase.gene_symbol,
            family: kinase.family,
            location: kinase.cell_location,
        }),
        Err(StoreError::NotFound) => Err(QueryError::NoMatches {
            query: raw_query.to_string(),
        }),
        Err(other) => Err(QueryError::Store(other)),
    }
}

/// Search mode, inhibitor kind. The search term is a kinase gene symbol,
/// not an inhibitor name; the result lists the inhibitors of that kinase.
pub fn search_inhibitors(
    connection: &mut SqliteConnection,
    raw_query: &str,
) -> Result<InhibitorListing, QueryError> {
    let normalized = raw_query.to_uppercase();

    match entity::inhibitors_of(connection, &normalized) {
        Ok(inhibitors) => Ok(InhibitorListing {
            gene: normalized,
            inh_number: inhibitors.len(),
            inhibitors,
        }),
        Err(StoreError::NotFound) => Err(QueryError::NoMatches {
            query: raw_query.to_string(),
        }),
        Err(other) => Err(QueryError::Store(other)),
    }
}

/// Detail entry point: resolve one inhibitor by name, with the kinases it
/// targets. Names are matched as stored, without case folding.
pub fn inhibitor_summary(
    connection: &mut SqliteConnection,
    name: &str,
) -> Result<InhibitorSummary, QueryError> {
    let inhibitor = match entity::get_inhibitor(connection, name) {
        Ok(inhibitor) => inhibitor,
        Err(StoreError::NotFound) => {
            return Err(QueryError::NoMatches {
                query: name.to_string(),
            })
        }
        Err(other) => return Err(QueryError::Store(other)),
    };

    let kinases =
        entity::kinases_of(connection, &inhibitor.name).map_err(QueryError::Store)?;

    Ok(InhibitorSummary {
        name: inhibitor.name,
        structure: inhibitor.chemical_structure,
        weight: inhibitor.molecular_weight,
        image: inhibitor.chemical_image,
        kinases,
    })
}
