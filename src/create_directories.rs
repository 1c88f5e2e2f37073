/*
cargo run --bin create_directories

cargo run --bin create_directories -- \
    --json-file public/data/database.json \
    --template-dir src/app/humans-of-descholars/template \
    --parent-dir src/app/humans-of-descholars
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
use descholars_tools::scaffold::scaffold_directories;

// Command-line parameters
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Create one kebab-case directory per student and fill it with the template files"
)]
struct Args {
    // Path to the JSON database
    #[arg(long, default_value = "public/data/database.json")]
    json_file: PathBuf,

    // Directory whose files are copied into every new directory
    #[arg(long, default_value = "src/app/humans-of-descholars/template")]
    template_dir: PathBuf,

    // Parent directory that receives one subdirectory per student
    #[arg(long, default_value = "src/app/humans-of-descholars")]
    parent_dir: PathBuf,

    // Directory for the run log
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging: warnings to the terminal, everything to a timestamped file
    create_dir_all(&args.log_dir).context("could not create log directory")?;
    let log_path = args.log_dir.join(format!(
        "create_directories_{}.log",
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

    info!("Reading database from {}", args.json_file.display());
    let db = Database::from_path(&args.json_file)?;
    info!("Loaded {} entries", db.len());

    let summary = scaffold_directories(&db, &args.template_dir, &args.parent_dir)?;

    info!(
        "Scaffolded {} directories, copied {} files, {} slug collision(s)",
        summary.directories, summary.files_copied, summary.collisions
    );
    println!(
        "Scaffolded {} directories under {}/",
        summary.directories,
        args.parent_dir.display()
    );
    Ok(())
}
