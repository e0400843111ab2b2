use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(name = "build-db")]
    BuildDb(commands::db::Args),
    Browse(commands::browse::Args),
    #[command(subcommand)]
    Search(commands::search::Commands),
}

#[derive(Parser)]
#[command(
    name = "kinasedb",
    color = clap::ColorChoice::Always,
    author = "KinaseDB",
    version = "1.0.0",
    about = "Lookup tool for kinases, inhibitors and phosphorylation sites",
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}
