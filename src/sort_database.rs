/*
cargo run --bin sort_database

cargo run --bin sort_database -- \
    --input-file public/data/database.json \
    --output-file public/data/sorted_database.json
*/

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config as LogConfig, LevelFilter, TermLogger, TerminalMode,
    WriteLogger,
};

use descholars_tools::database::Database;
use descholars_tools::sort::{sort_database, write_sorted};

// Command-line parameters
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Regroup the student database by admit year and major, name-sorted within each bucket"
)]
struct Args {
    // Path to the JSON database
    #[arg(long, default_value = "public/data/database.json")]
    input_file: PathBuf,

    // Output file (created or overwritten)
    #[arg(long, default_value = "public/data/sorted_database.json")]
    output_file: PathBuf,

    // Directory for the run log
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging: warnings to the terminal, everything to a timestamped file
    create_dir_all(&args.log_dir).context("could not create log directory")?;
    let log_path = args.log_dir.join(format!(
        "sort_database_{}.log",
        Local::now().format("%Y-%m-%d_%H-%M-%S")
    ));
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Warn,
            LogConfig::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Info,
            LogConfig::default(),
            File::create(&log_path)
                .with_context(|| format!("creating {}", log_path.display()))?,
        ),
    ])?;

    info!("Reading database from {}", args.input_file.display());
    let db = Database::from_path(&args.input_file)?;
    info!("Loaded {} entries", db.len());

    // Validation happened at load time, so nothing below can leave a
    // half-written output behind for a bad entry.
    let sorted = sort_database(&db);
    let majors: usize = sorted.values().map(|m| m.len()).sum();
    info!(
        "Grouped {} entries into {} admit year(s) and {} (year, major) bucket(s)",
        db.len(),
        sorted.len(),
        majors
    );

    write_sorted(&sorted, &args.output_file)?;
    info!("Wrote {}", args.output_file.display());
    println!("JSON data has been sorted and saved!");
    Ok(())
}
