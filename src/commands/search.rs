use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber;

use crate::commands::{establish_connection, load_settings};
use crate::query::{self, QueryError};

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Look up a kinase by gene symbol
    Kinase(TermArgs),
    /// List the inhibitors of a kinase, by gene symbol
    Inhibitor(TermArgs),
    /// Show one inhibitor's details, by inhibitor name
    Summary(TermArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct TermArgs {
    #[arg()]
    term: String,

    #[arg(long, short, default_value = "assets/config")]
    config: PathBuf,
}

pub fn command(cmds: Commands) {
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(tracing::Level::INFO)
        .init();

    let result = match cmds {
        Commands::Kinase(args) => run_kinase(&args),
        Commands::Inhibitor(args) => run_inhibitors(&args),
        Commands::Summary(args) => run_summary(&args),
    };

    if let Err(error) = result {
        eprintln!("search failed: {}", error);
        std::process::exit(1);
    }
}

fn run_kinase(args: &TermArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(&args.config)?;
    let mut connection = establish_connection(&settings)?;

    match query::search_kinase(&mut connection, &args.term) {
        Ok(view) => {
            println!("Name:     {}", view.name);
            println!("Gene:     {}", view.gene);
            println!("Family:   {}", view.family);
            println!("Location: {}", view.location);
            Ok(())
        }
        Err(QueryError::NoMatches { query }) => {
            println!("No matches for {}", query);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn run_inhibitors(args: &TermArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(&args.config)?;
    let mut connection = establish_connection(&settings)?;

    match query::search_inhibitors(&mut connection, &args.term) {
        Ok(listing) => {
            println!(
                "{} inhibitor(s) found for {}",
                listing.inh_number, listing.gene
            );
            for inhibitor in &listing.inhibitors {
                println!("{}", inhibitor.name);
            }
            Ok(())
        }
        Err(QueryError::NoMatches { query }) => {
            println!("No matches for {}", query);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}

fn run_summary(args: &TermArgs) -> Result<(), Box<dyn std::error::Error>> {
    let settings = load_settings(&args.config)?;
    let mut connection = establish_connection(&settings)?;

    match query::inhibitor_summary(&mut connection, &args.term) {
        Ok(summary) => {
            println!("Inhibitor: {}", summary.name);
            println!("Structure: {}", summary.structure);
            println!("Weight:    {}", summary.weight);
            println!("Image:     {}", summary.image);
            println!("Targets:");
            for kinase in &summary.kinases {
                println!("{}\t{}", kinase.gene_symbol, kinase.full_name);
            }
            Ok(())
        }
        Err(QueryError::NoMatches { query }) => {
            println!("No matches for {}", query);
            Ok(())
        }
        Err(error) => Err(error.into()),
    }
}
