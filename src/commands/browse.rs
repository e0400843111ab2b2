use clap::Parser;
use std::path::{Path, PathBuf};
use strum::IntoEnumIterator;
use tracing_subscriber;

use crate::commands::load_settings;
use crate::phospho::records::Column;
use crate::phospho::table::PhosphoTable;
use crate::query::{self, BrowseResult, QueryError};

#[derive(Parser, Debug, Clone)]
pub struct Args {
    // Column to filter on and the search term
    #[arg()]
    column: String,
    #[arg()]
    query: String,

    #[arg(long, short, default_value = "assets/config")]
    config: PathBuf,
}

pub fn command(args: Args) {
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(tracing::Level::INFO)
        .init();

    if let Err(error) = run(&args) {
        eprintln!("browse failed: {}", error);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(&args.config)?;
    let dataset_path: String = settings.get("phospho.dataset")?;
    let table = PhosphoTable::from_csv(Path::new(&dataset_path))?;

    match query::browse(&table, &args.column, &args.query) {
        Ok(result) => {
            print_rows(&result);
            Ok(())
        }
        Err(QueryError::NoMatches { query }) => {
            println!("No matches for {}", query);
            Ok(())
        }
        Err(QueryError::InvalidColumn(column)) => {
            let valid: Vec<String> = Column::iter().map(|c| c.to_string()).collect();
            Err(format!(
                "{} is not a phosphosite column (expected one of: {})",
                column,
                valid.join(", ")
            )
            .into())
        }
        Err(error) => Err(error.into()),
    }
}

fn print_rows(result: &BrowseResult) {
    println!("{} phosphosites match {}", result.count, result.query);
    println!("Substrate\tKinase\tSequence(-)\tSequence(+)\tLocus");

    for row in &result.rows {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            row.substrate, row.kinase, row.sequence_minus, row.sequence_plus, row.locus
        );
    }
}
