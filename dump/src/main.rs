//! A CLI tool for inspecting DICOM images and directories of slices.
//!
//! Prints a summary of each document or volume,
//! and optionally exports a single document
//! as a header dump, a CSV table or raw pixel data.
use clap::Parser;
use dicom_lite_object::list::SortBy;
use dicom_lite_object::{open_file, DicomList};
use snafu::{ensure_whatever, Report, ResultExt, Whatever};
use std::path::{Path, PathBuf};
use tracing::{error, Level};

/// Exit code for when an error emerged while reading or exporting.
const ERROR_READ: i32 = -2;

/// Print a summary of DICOM images or volumes
#[derive(Debug, Parser)]
#[command(version)]
struct App {
    /// The DICOM files or directories of slices to read
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Export the document to this file,
    /// in the format given by its extension (hdr, csv or raw)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Read every file of a directory,
    /// not only those with a `.dcm` or `.dicom` extension
    #[arg(long = "no-extension-check")]
    no_extension_check: bool,

    /// Print debug information
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() {
    let app = App::parse();

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(if app.verbose {
                Level::DEBUG
            } else {
                Level::WARN
            })
            .with_writer(std::io::stderr)
            .finish(),
    )
    .whatever_context("Could not set up global logging subscriber")
    .unwrap_or_else(|e: Whatever| {
        eprintln!("[ERROR] {}", Report::from_error(e));
    });

    let errors = run(&app);
    if errors > 0 {
        std::process::exit(ERROR_READ);
    }
}

/// Process every path, returning the number of failures.
fn run(app: &App) -> usize {
    if app.output.is_some() && app.paths.len() > 1 {
        error!("An output file requires a single input file");
        return 1;
    }

    let mut errors = 0;
    for path in &app.paths {
        let result = if path.is_dir() {
            dump_dir(path, app)
        } else {
            dump_file(path, app.output.as_deref())
        };
        if let Err(e) = result {
            error!("{}", Report::from_error(e));
            errors += 1;
        }
    }
    errors
}

fn dump_file(path: &Path, output: Option<&Path>) -> Result<(), Whatever> {
    let dicom = open_file(path)
        .with_whatever_context(|_| format!("Could not read {}", path.display()))?;
    print!("{}", dicom);

    if let Some(output) = output {
        dicom
            .write(output)
            .with_whatever_context(|_| format!("Could not export to {}", output.display()))?;
        println!("Exported to {}", output.display());
    }
    Ok(())
}

fn dump_dir(path: &Path, app: &App) -> Result<(), Whatever> {
    ensure_whatever!(
        app.output.is_none(),
        "Cannot export the directory {}",
        path.display()
    );

    let mut list = DicomList::new().extension_check(!app.no_extension_check);
    list.read(path)
        .with_whatever_context(|_| format!("Could not read directory {}", path.display()))?;
    list.sort(SortBy::SliceLocation);
    print!("{}", list);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::App;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli() {
        App::command().debug_assert();
    }

    #[test]
    fn parse_arguments() {
        let app = App::parse_from([
            "dicom-lite-dump",
            "-v",
            "--no-extension-check",
            "-o",
            "out.csv",
            "image.dcm",
        ]);
        assert!(app.verbose);
        assert!(app.no_extension_check);
        assert_eq!(app.output.as_deref(), Some(std::path::Path::new("out.csv")));
        assert_eq!(app.paths.len(), 1);

        assert!(App::try_parse_from(["dicom-lite-dump"]).is_err());
    }
}
