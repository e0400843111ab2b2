use diesel::prelude::*;
use thiserror::Error;

use crate::schema::{inhibitors, kinase_inhibitors, kinases};
use crate::store::models::{Inhibitor, Kinase};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no record for the requested key")]
    NotFound,

    #[error("database error: {0}")]
    Database(diesel::result::Error),
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::NotFound => StoreError::NotFound,
            other => StoreError::Database(other),
        }
    }
}

/// Looks up a kinase by its gene symbol. The key is matched exactly, so
/// callers are expected to upper-case user input beforehand. The kinase
/// family is stored with inconsistent trailing punctuation in the seed
/// data and is returned with trailing periods stripped.
pub fn get_kinase(
    connection: &mut SqliteConnection,
    gene_symbol: &str,
) -> Result<Kinase, StoreError> {
    let mut kinase: Kinase = kinases::table
        .find(gene_symbol)
        .select(Kinase::as_select())
        .first(connection)?;

    kinase.family = kinase.family.trim_end_matches('.').to_string();

    Ok(kinase)
}

/// Looks up an inhibitor by its name. Inhibitor names are mixed case and
/// matched exactly as stored.
pub fn get_inhibitor(
    connection: &mut SqliteConnection,
    name: &str,
) -> Result<Inhibitor, StoreError> {
    let inhibitor: Inhibitor = inhibitors::table
        .find(name)
        .select(Inhibitor::as_select())
        .first(connection)?;

    Ok(inhibitor)
}

/// Returns the inhibitors associated with a kinase, in name order. A
/// kinase with no associations yields an empty list; an unknown gene
/// symbol is an error.
pub fn inhibitors_of(
    connection: &mut SqliteConnection,
    gene_symbol: &str,
) -> Result<Vec<Inhibitor>, StoreError> {
    // An empty association set and a missing kinase are different outcomes.
    kinases::table
        .find(gene_symbol)
        .select(kinases::gene_symbol)
        .first::<String>(connection)?;

    let associated = kinase_inhibitors::table
        .inner_join(inhibitors::table)
        .filter(kinase_inhibitors::gene_symbol.eq(gene_symbol))
        .select(Inhibitor::as_select())
        .order(inhibitors::name.asc())
        .load(connection)?;

    Ok(associated)
}

/// Inverse traversal: the kinases targeted by an inhibitor, in gene
/// symbol order.
pub fn kinases_of(
    connection: &mut SqliteConnection,
    name: &str,
) -> Result<Vec<Kinase>, StoreError> {
    inhibitors::table
        .find(name)
        .select(inhibitors::name)
        .first::<String>(connection)?;

    let mut associated: Vec<Kinase> = kinase_inhibitors::table
        .inner_join(kinases::table)
        .filter(kinase_inhibitors::inhibitor.eq(name))
        .select(Kinase::as_select())
        .order(kinases::gene_symbol.asc())
        .load(connection)?;

    for kinase in &mut associated {
        kinase.family = kinase.family.trim_end_matches('.').to_string();
    }

    Ok(associated)
}
