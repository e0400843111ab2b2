use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

use crate::commands::{establish_connection, load_settings};
use crate::store::seed;

///////////////////////////////////////////////////////////////////////////////

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "assets/config")]
    config: PathBuf,
}

///////////////////////////////////////////////////////////////////////////////

pub fn command(args: Args) {
    env_logger::init();

    if let Err(error) = run(&args) {
        eprintln!("build-db failed: {}", error);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // Configuration
    let settings = load_settings(&args.config)?;
    let kinases_path: String = settings.get("seed.kinases")?;
    let inhibitors_path: String = settings.get("seed.inhibitors")?;
    let associations_path: String = settings.get("seed.associations")?;
    let mut connection = establish_connection(&settings)?;

    // Schema, then entities, then the join rows so the FKs resolve
    seed::create_tables(&mut connection)?;

    let kinases = seed::load_kinases(Path::new(&kinases_path))?;
    seed::insert_kinases(&kinases, &mut connection)?;

    let inhibitors = seed::load_inhibitors(Path::new(&inhibitors_path))?;
    seed::insert_inhibitors(&inhibitors, &mut connection)?;

    let associations = seed::load_associations(Path::new(&associations_path))?;
    seed::insert_associations(&associations, &mut connection)?;

    info!(
        "Database built: {} kinases, {} inhibitors, {} associations",
        kinases.len(),
        inhibitors.len(),
        associations.len()
    );

    Ok(())
}
