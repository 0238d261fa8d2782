use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use console::style;
use std::path::Path;
use std::process::ExitCode;
use tracing::Level;

use vision_lint::presentation::cli::report::{self, EXIT_FAILURE};
use vision_lint::presentation::cli::{Cli, Commands, ProgressReporter};
use vision_lint::{ScanDatasetUseCase, ScanOptions};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {:#}", style("error:").red().bold(), e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<u8> {
    let Some(command) = cli.command else {
        Cli::command().print_help().context("Failed to print help")?;
        println!();
        return Ok(report::EXIT_CLEAN);
    };

    match command {
        Commands::Audit {
            path,
            json,
            threads,
            extensions,
            no_progress,
        } => {
            let mut options = ScanOptions::new().with_threads(threads);
            if let Some(extensions) = extensions {
                options = options.with_extensions(extensions);
            }
            run_audit(&path, options, json, no_progress || json)
        }
    }
}

fn run_audit(path: &Path, options: ScanOptions, json: bool, quiet: bool) -> Result<u8> {
    let use_case = ScanDatasetUseCase::with_default_decoders(options);

    if !json {
        println!(
            "{} {}",
            style("Starting audit for path:").blue().bold(),
            path.display()
        );
    }

    let findings = if quiet {
        use_case.execute(path)
    } else {
        let reporter = ProgressReporter::for_audit().context("Invalid progress bar template")?;
        let callback = reporter.callback();
        let findings = use_case.execute_with_progress(path, Some(&callback));
        reporter.finish();
        findings
    };

    if json {
        let rendered = report::render_json(&findings).context("Failed to serialize findings")?;
        println!("{}", rendered);
    } else if findings.is_empty() {
        println!(
            "{}",
            style("No integrity issues found! Dataset is clean.")
                .green()
                .bold()
        );
    } else {
        print!("{}", report::render_table(&findings, path));
        println!(
            "\n{}",
            style(format!("Found {} issues.", findings.len()))
                .red()
                .bold()
        );
    }

    Ok(report::exit_code(&findings))
}
