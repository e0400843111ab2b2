use std::path::Path;

use diesel::prelude::*;
use diesel::sql_query;
use log::info;
use thiserror::Error;

use crate::schema::{inhibitors, kinase_inhibitors, kinases};
use crate::store::models::{Inhibitor, Kinase, KinaseInhibitor};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("error reading seed file: {0}")]
    Csv(#[from] csv::Error),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

pub fn create_tables(connection: &mut SqliteConnection) -> Result<(), SeedError> {
    // SQLite leaves foreign keys off unless the connection opts in;
    // without this the REFERENCES clauses below are inert.
    sql_query("PRAGMA foreign_keys = ON").execute(connection)?;

    sql_query(
        "CREATE TABLE IF NOT EXISTS kinases (
            gene_symbol TEXT PRIMARY KEY NOT NULL,
            full_name TEXT NOT NULL,
            uniprot_code TEXT NOT NULL,
            family TEXT NOT NULL,
            cell_location TEXT NOT NULL
        )",
    )
    .execute(connection)?;

    sql_query(
        "CREATE TABLE IF NOT EXISTS inhibitors (
            name TEXT PRIMARY KEY NOT NULL,
            chemical_structure TEXT NOT NULL,
            molecular_weight INTEGER NOT NULL,
            chemical_image TEXT NOT NULL
        )",
    )
    .execute(connection)?;

    sql_query(
        "CREATE TABLE IF NOT EXISTS kinase_inhibitors (
            gene_symbol TEXT NOT NULL REFERENCES kinases (gene_symbol),
            inhibitor TEXT NOT NULL REFERENCES inhibitors (name),
            PRIMARY KEY (gene_symbol, inhibitor)
        )",
    )
    .execute(connection)?;

    Ok(())
}

pub fn load_kinases(path: &Path) -> Result<Vec<Kinase>, SeedError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let entry: Kinase = result?;
        entries.push(entry);
    }
    Ok(entries)
}

pub fn load_inhibitors(path: &Path) -> Result<Vec<Inhibitor>, SeedError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let entry: Inhibitor = result?;
        entries.push(entry);
    }
    Ok(entries)
}

pub fn load_associations(path: &Path) -> Result<Vec<KinaseInhibitor>, SeedError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries = Vec::new();
    for result in reader.deserialize() {
        let entry: KinaseInhibitor = result?;
        entries.push(entry);
    }
    Ok(entries)
}

pub fn insert_kinases(
    entries: &[Kinase],
    connection: &mut SqliteConnection,
) -> Result<(), SeedError> {
    info!("Starting to insert {} kinases", entries.len());

    for entry in entries {
        diesel::insert_into(kinases::table)
            .values(entry)
            .on_conflict(kinases::gene_symbol)
            .do_update()
            .set((
                kinases::full_name.eq(entry.full_name.clone()),
                kinases::uniprot_code.eq(entry.uniprot_code.clone()),
                kinases::family.eq(entry.family.clone()),
                kinases::cell_location.eq(entry.cell_location.clone()),
            ))
            .execute(connection)?;
    }

    info!("Finished inserting kinases");
    Ok(())
}

pub fn insert_inhibitors(
    entries: &[Inhibitor],
    connection: &mut SqliteConnection,
) -> Result<(), SeedError> {
    info!("Starting to insert {} inhibitors", entries.len());

    for entry in entries {
        diesel::insert_into(inhibitors::table)
            .values(entry)
            .on_conflict(inhibitors::name)
            .do_update()
            .set((
                inhibitors::chemical_structure.eq(entry.chemical_structure.clone()),
                inhibitors::molecular_weight.eq(entry.molecular_weight),
                inhibitors::chemical_image.eq(entry.chemical_image.clone()),
            ))
            .execute(connection)?;
    }

    info!("Finished inserting inhibitors");
    Ok(())
}

pub fn insert_associations(
    entries: &[KinaseInhibitor],
    connection: &mut SqliteConnection,
) -> Result<(), SeedError> {
    info!("Starting to insert {} associations", entries.len());

    for entry in entries {
        diesel::insert_into(kinase_inhibitors::table)
            .values(entry)
            .on_conflict((
                kinase_inhibitors::gene_symbol,
                kinase_inhibitors::inhibitor,
            ))
            .do_nothing()
            .execute(connection)?;
    }

    info!("Finished inserting associations");
    Ok(())
}
