//! vesselstore CLI
//!
//! Command-line interface for saving and querying vessel positions.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};
use vesselstore::record::read_positions;
use vesselstore::{BundleFormat, Config, DataFile, Filter, StoreError, VesselRepository};

/// vesselstore CLI
#[derive(Parser, Debug)]
#[command(name = "vesselstore")]
#[command(about = "Date-partitioned CSV storage for vessel positions")]
#[command(version)]
struct Args {
    /// Root directory of the partition tree
    #[arg(short, long, default_value = "./data/csv")]
    data_dir: PathBuf,

    /// Write raw concatenated CSV instead of a zip archive
    #[arg(long, global = true)]
    plain: bool,

    /// Write the result to this file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Append positions from a CSV file (imo, timestamp, fields...)
    Save {
        /// CSV file to ingest
        input: PathBuf,

        /// Skip the first row of the input
        #[arg(long)]
        has_header: bool,
    },

    /// Every stored position of a vessel
    Vessel {
        /// IMO number of the vessel
        imo: String,
    },

    /// Every position stored for a day
    Day {
        /// Free-form day ("today", "two days ago", "2021-10-10", ...)
        #[arg(default_value = "today")]
        date: String,
    },

    /// Positions matching any combination of vessels and days
    Query(QueryArgs),
}

#[derive(ClapArgs, Debug)]
struct QueryArgs {
    /// IMO number or pattern (repeatable, all vessels when omitted)
    #[arg(long = "imo")]
    imos: Vec<String>,

    /// Free-form day (repeatable, all days when omitted)
    #[arg(long = "date")]
    dates: Vec<String>,

    /// Print the matched partition files instead of their contents
    #[arg(long)]
    list: bool,
}

fn main() {
    // Logs go to stderr; stdout carries data
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vesselstore=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        match e {
            StoreError::DataDoesNotExist => tracing::error!("{}", e),
            _ => tracing::error!("Command failed: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(args: Args) -> vesselstore::Result<()> {
    let format = if args.plain {
        BundleFormat::Plain
    } else {
        BundleFormat::Zip
    };

    let config = Config::builder()
        .data_dir(&args.data_dir)
        .bundle_format(format)
        .build();

    tracing::debug!("Data directory: {}", args.data_dir.display());
    let repository = VesselRepository::open(config)?;

    let data = match args.command {
        Commands::Save { input, has_header } => {
            let positions = read_positions(File::open(&input)?, has_header)?;
            tracing::info!("Read {} position(s) from {}", positions.len(), input.display());
            return repository.save_vessels(&positions);
        }
        Commands::Vessel { imo } => repository.get_vessel_file(imo)?,
        Commands::Day { date } => repository.get_day_file(&date)?,
        Commands::Query(query) => {
            let imos = Filter::from(query.imos);
            let dates = Filter::from(query.dates);

            if query.list {
                let files = repository.find_files(imos, dates)?;
                let listing: String = files
                    .iter()
                    .map(|path| format!("{}\n", path.display()))
                    .collect();
                return write_output(args.output.as_deref(), listing.as_bytes());
            }

            repository.get_data_file(imos, dates)?
        }
    };

    write_data(args.output.as_deref(), data)
}

fn write_data(output: Option<&Path>, data: DataFile) -> vesselstore::Result<()> {
    write_output(output, &data.into_bytes())
}

fn write_output(output: Option<&Path>, bytes: &[u8]) -> vesselstore::Result<()> {
    match output {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(bytes)?;
            tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
