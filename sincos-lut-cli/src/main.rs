use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use sincos_lut::table::TableError;
use sincos_lut::{EmitError, TableParams};
use thiserror::Error;

/// Generates a Q8.8 sine/cosine lookup table as `dw` assembler directives.
///
/// With no options this prints the stock table: radius 16, degrees 0 through 179.
#[derive(Parser, Debug)]
struct Args {
    /// Radius of the circle, in whole (unscaled) units.
    #[arg(short, long, default_value_t = TableParams::DEFAULT_RADIUS, allow_hyphen_values = true)]
    radius: f64,
    /// First degree in the table.
    #[arg(long, default_value_t = TableParams::DEFAULT_START, allow_hyphen_values = true)]
    start: i32,
    /// Stop before this degree.
    #[arg(long, default_value_t = TableParams::DEFAULT_END, allow_hyphen_values = true)]
    end: i32,
    /// Degrees between samples.
    #[arg(long, default_value_t = TableParams::DEFAULT_STEP, value_parser = clap::value_parser!(i32).range(1..))]
    step: i32,
    /// File to write the table to instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Errors that end the program.
#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("Unable to create {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Emit(err.into())
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let params = TableParams::new(args.radius, args.start, args.end, args.step)?;
    match args.output {
        Some(ref path) => {
            info!("Writing {} samples to {:?}", params.len(), path);
            let file = File::create(path).map_err(|source| CliError::CreateOutput {
                path: path.clone(),
                source,
            })?;
            let mut out = BufWriter::new(file);
            sincos_lut::emit(&params, &mut out)?;
            out.flush()?;
        }
        None => sincos_lut::emit_stdout(&params)?,
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        error!("{}", err);
        std::process::exit(1);
    }
}
