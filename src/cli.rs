//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::{
    path::{Path, PathBuf},
    process,
};

use clap::{Parser, Subcommand};

use crate::{
    discovery::discover_spec_files,
    errors::print_error,
    fixture::SpecFile,
    sections::SectionGroups,
};

// ============================================================================
// CLI ARGUMENTS - Command-line argument definitions
// ============================================================================

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "mergespec",
    version,
    about = "A conformance harness for string-merging utilities."
)]
pub struct MergespecArgs {
    #[command(subcommand)]
    pub command: ArgsCommand,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum ArgsCommand {
    /// Validate fixture files for structural correctness.
    Check {
        /// A fixture file, or a directory to scan for fixtures.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// List a fixture file's sections with their case counts.
    Sections {
        /// The path to the fixture file to inspect.
        #[arg(required = true)]
        file: PathBuf,
        /// Emit the grouped cases as JSON for outer tooling.
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// MAIN ENTRY POINT
// ============================================================================

/// The main entry point for the CLI.
pub fn run() {
    let args = MergespecArgs::parse();

    match args.command {
        ArgsCommand::Check { path } => check(&path),
        ArgsCommand::Sections { file, json } => list_sections(&file, json),
    }
}

fn check(path: &Path) {
    let files = if path.is_dir() {
        discover_spec_files(path).unwrap_or_else(|e| {
            print_error(e);
            process::exit(1);
        })
    } else {
        vec![path.to_path_buf()]
    };

    if files.is_empty() {
        println!("No fixture files found under {}", path.display());
        return;
    }

    for file in files {
        let groups = parse_groups_or_exit(&file);
        println!(
            "{}: {} cases in {} sections",
            file.display(),
            groups.case_count(),
            groups.section_count()
        );
    }
}

fn list_sections(file: &Path, json: bool) {
    let groups = parse_groups_or_exit(file);

    if json {
        match serde_json::to_string_pretty(&groups) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Failed to serialize sections: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if groups.is_empty() {
        println!("  No cases found.");
        return;
    }

    for (name, cases) in groups.iter() {
        println!("  {} ({} cases)", name, cases.len());
    }
}

// ============================================================================
// HELPER FUNCTIONS - Common patterns extracted
// ============================================================================

fn parse_groups_or_exit(path: &Path) -> SectionGroups {
    let spec = SpecFile::load(path).unwrap_or_else(|e| {
        print_error(e);
        process::exit(1);
    });
    let cases = spec.parse().unwrap_or_else(|e| {
        print_error(e);
        process::exit(1);
    });
    SectionGroups::from_cases(cases)
}
