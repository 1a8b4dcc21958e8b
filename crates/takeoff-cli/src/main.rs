use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use takeoff_core::{EstimateImporter, ImportResult, ImporterSettings};

#[derive(Parser)]
#[command(name = "takeoff")]
#[command(about = "Estimate workbook structure inference and auto-linkage", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import one estimate workbook and print the structured result.
    Import {
        /// Workbook file (xlsx/xls/ods).
        file: PathBuf,

        /// Print the full result as pretty JSON instead of a summary.
        #[arg(long)]
        json: bool,

        /// Suppress progress output.
        #[arg(short, long)]
        quiet: bool,
    },
    /// List candidate workbook files in a folder.
    Scan {
        /// Folder to scan.
        dir: PathBuf,

        /// Filename glob applied within the folder.
        #[arg(short, long, default_value = "*.xlsx")]
        pattern: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Import { file, json, quiet } => {
            let mut settings = ImporterSettings::new();
            if !quiet && !json {
                settings = settings.on_progress(|percent, message| {
                    eprintln!("[{percent:>3}%] {message}");
                });
            }
            let importer = EstimateImporter::new(settings);

            match importer.import_path(&file) {
                Ok(result) => {
                    if json {
                        println!("{}", result.to_json());
                    } else {
                        print_summary(&result);
                    }
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Scan { dir, pattern } => {
            let full_pattern = dir.join(&pattern);
            let Some(full_pattern) = full_pattern.to_str() else {
                eprintln!("error: non-UTF-8 path");
                process::exit(1);
            };
            match glob::glob(full_pattern) {
                Ok(entries) => {
                    let mut count = 0usize;
                    for entry in entries.flatten() {
                        println!("{}", entry.display());
                        count += 1;
                    }
                    eprintln!("{count} candidate file(s)");
                }
                Err(e) => {
                    eprintln!("error: invalid pattern '{pattern}': {e}");
                    process::exit(1);
                }
            }
        }
    }
}

fn print_summary(result: &ImportResult) {
    println!("Sheets:");
    for c in &result.classifications {
        println!(
            "  {:<30} {:<18} confidence {:.2}  ({} rows x {} cols)",
            c.sheet_name, c.kind.to_string(), c.confidence, c.row_count, c.col_count
        );
    }

    println!("\nPaired parts:");
    if result.parts.is_empty() {
        println!("  (none)");
    }
    for part in &result.parts {
        println!(
            "  {:<20} {} measurements, {} abstracts, {} linkages, estimated cost {:.2}",
            part.pairing.part_name,
            part.measurements.len(),
            part.abstracts.len(),
            part.linkages.len(),
            part.estimated_cost
        );
    }

    if !result.other_sheets.is_empty() {
        println!("\nUnpaired sheets: {}", result.other_sheets.join(", "));
    }

    let report = &result.report;
    println!(
        "\n{} sheets processed, {} formulas found, {} rows skipped",
        report.sheets_processed, report.formulas_found, report.rows_skipped
    );
    println!(
        "{} measurements, {} abstracts, {} linkages ({} abstracts unlinked)",
        report.measurements_imported,
        report.abstracts_imported,
        report.linkages_created,
        report.unlinked_abstracts
    );
    println!(
        "success rate {:.0}%, completeness {:.0}%, linkage accuracy {:.2}",
        report.success_rate * 100.0,
        report.completeness * 100.0,
        report.linkage_accuracy
    );

    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    for error in &report.errors {
        eprintln!("sheet error: {error}");
    }
}
