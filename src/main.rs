//! # ddpack CLI
//!
//! Command-line interface for the ddpack library.
//!
//! Exit codes follow [`ValidationStatus::code`]: 0 when an archive was
//! recognized, 1 when it was not, 2 when it is not a readable zip.

use std::io;
use std::process;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use ddpack::cli::{Args, Command};
use ddpack::detect::{detect, Detection};
use ddpack::format::{write_report, ReportFormat};
use ddpack::platform::Platform;
use ddpack::timestamp::TimestampNormalizer;
use ddpack::validate::{ArchiveValidator, ValidationResult, ValidationStatus};
use ddpack::DdpError;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(status) => process::exit(i32::from(status.code())),
        Err(e) => {
            eprintln!("❌ Error: {}", e);
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<ValidationStatus, DdpError> {
    let config = args.command.timestamp_config();

    match args.command {
        Command::Scan { archive, platform, format } => {
            let platforms: Vec<Platform> = match platform {
                Some(p) => vec![p.into()],
                None => Platform::all().to_vec(),
            };
            let results: Vec<ValidationResult> = platforms
                .into_iter()
                .map(|p| ArchiveValidator::for_platform(p).validate(&archive))
                .collect();

            let format: ReportFormat = format.into();
            write_report(&results, format, io::stdout().lock())?;
            Ok(overall_status(&results))
        }
        Command::Detect { archive } => {
            let detection = detect(&archive, Platform::all());
            match &detection {
                Detection::Found(ctx) => println!("{}\t{}", ctx.platform.token(), ctx.category.id),
                Detection::Corrupt => println!("{}", ValidationStatus::CorruptArchive),
                Detection::NoMatch(_) => println!("{}", ValidationStatus::NotRecognized),
            }
            Ok(detection.status())
        }
        Command::Timestamp { values, .. } => {
            let normalizer = TimestampNormalizer::with_config(config);
            for value in &values {
                println!("{}", normalizer.normalize(value.as_str()));
            }
            Ok(ValidationStatus::Valid)
        }
    }
}

/// Best outcome across platforms: any match wins, then a corrupt container.
fn overall_status(results: &[ValidationResult]) -> ValidationStatus {
    let any = |status| results.iter().any(|r| r.status == status);
    if any(ValidationStatus::Valid) {
        ValidationStatus::Valid
    } else if any(ValidationStatus::CorruptArchive) {
        ValidationStatus::CorruptArchive
    } else {
        ValidationStatus::NotRecognized
    }
}
