use crate::config::AppConfig;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use orcathermo::{
    core::io::{
        discovery,
        table::{CsvTable, SinkError},
        traits::{RecordSink, WriteOutcome},
    },
    engine::progress::ProgressReporter,
    workflows::{self, collect::FileSpectrum},
};
use tracing::{info, warn};

pub fn run(config: &AppConfig) -> Result<()> {
    for notice in &config.notices {
        println!("{}", notice);
    }

    info!(
        "Searching for '{}' below {:?}",
        config.filename, &config.root
    );
    let paths = discovery::find_all(&config.filename, &config.root)?;
    if paths.is_empty() {
        warn!("No files named '{}' were found.", config.filename);
        println!(
            "No '{}' files found under {}. Nothing to do.",
            config.filename,
            config.root.display()
        );
        return Ok(());
    }
    println!(
        "Collecting {} file(s) at {}...",
        paths.len(),
        config.extraction.temperature
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let batch = workflows::collect::run(&paths, &config.extraction, &reporter)?;

    for spectrum in &batch.spectra {
        print_spectrum(spectrum);
    }

    for record in &batch.records {
        println!("{}", record);
    }

    let mut table = CsvTable::new(&config.output_path);
    match table.persist(&batch.records) {
        Ok(WriteOutcome::Created { rows }) => {
            println!(
                "✓ Created {} with {} row(s).",
                config.output_path.display(),
                rows
            );
        }
        Ok(WriteOutcome::Appended { rows }) => {
            println!(
                "✓ Appended {} row(s) to {}.",
                rows,
                config.output_path.display()
            );
        }
        Ok(WriteOutcome::Skipped) => {
            println!("Nothing to write.");
        }
        Err(SinkError::HeaderMismatch {
            path,
            existing,
            incoming,
        }) => {
            warn!("Header mismatch for {:?}; dataset left untouched.", path);
            println!("Data not compatible with existing file {}:", path.display());
            println!("  existing: {}", existing.join(", "));
            println!("  incoming: {}", incoming.join(", "));
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn print_spectrum(spectrum: &FileSpectrum) {
    println!("IR spectrum of {}:", spectrum.path.display());
    println!("  {:>4}  {:>10}  {:>10}", "mode", "freq", "int");
    for mode in &spectrum.modes {
        println!(
            "  {:>4}  {:>10.2}  {:>10.2}",
            mode.mode, mode.frequency, mode.intensity
        );
    }
}
