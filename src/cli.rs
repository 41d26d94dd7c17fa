//! Command-line interface and the organize pass.
//!
//! A pass reads the target directory once. It then classifies, relocates and
//! reports each top-level file in turn. Per-file failures are reported and
//! skipped. Only configuration errors and an unreadable target directory end
//! the pass early.

use crate::config::{CompiledFilters, FilterConfig};
use crate::error::{OrganizeError, OrganizeResult};
use crate::file_category::{Category, classify};
use crate::file_organizer::{FileOrganizer, Relocation};
use crate::output::OutputFormatter;
use crate::scanner::{self, DirectoryEntry};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Sort the files of a directory into Images, Videos, Documents, Programming
/// and Others subfolders by extension.
#[derive(Parser, Debug)]
#[command(name = "tidyext", version, about, long_about = None)]
pub struct Cli {
    /// Directory whose top-level files should be organized
    pub directory: Option<PathBuf>,

    /// Show what would be moved without touching the file system
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Filter configuration file (TOML)
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Represents a command to execute against a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrganizeCommand {
    /// Organize files in a directory.
    Organize {
        /// If true, simulate the operation without making changes.
        dry_run: bool,
    },
}

/// A file that could not be organized, with the reason.
#[derive(Debug)]
pub struct FileFailure {
    pub name: String,
    pub error: OrganizeError,
}

/// Outcome of one pass over a directory.
#[derive(Debug, Default)]
pub struct OrganizeReport {
    /// Files moved, or in a dry run, files that would be moved.
    pub moved: Vec<Relocation>,
    pub failures: Vec<FileFailure>,
    /// Files left in place by filter rules, plus the configuration file itself.
    pub skipped: Vec<String>,
    pub dry_run: bool,
}

impl OrganizeReport {
    /// Number of files per category among `moved`.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for relocation in &self.moved {
            *counts.entry(relocation.category).or_insert(0) += 1;
        }
        counts
    }

    pub fn is_complete_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// True when the pass saw no top-level files at all.
    pub fn is_empty(&self) -> bool {
        self.moved.is_empty() && self.failures.is_empty() && self.skipped.is_empty()
    }
}

/// Runs `command` against `dir_path` using the default configuration lookup.
///
/// # Examples
///
/// ```no_run
/// use tidyext::cli::{run_cli, OrganizeCommand};
/// use std::path::Path;
///
/// match run_cli(OrganizeCommand::Organize { dry_run: false }, Path::new("/path/to/directory")) {
///     Ok(report) => println!("{} files moved", report.moved.len()),
///     Err(e) => eprintln!("Error: {}", e),
/// }
/// ```
pub fn run_cli(command: OrganizeCommand, dir_path: &Path) -> OrganizeResult<OrganizeReport> {
    run_cli_with_config(command, dir_path, None)
}

/// Runs `command` against `dir_path`, loading filters from `config_path` when given.
pub fn run_cli_with_config(
    command: OrganizeCommand,
    dir_path: &Path,
    config_path: Option<&Path>,
) -> OrganizeResult<OrganizeReport> {
    let filters = FilterConfig::load(config_path)?.compile()?;
    match command {
        OrganizeCommand::Organize { dry_run } => organize_directory(dir_path, &filters, dry_run),
    }
}

/// Performs one pass over `base_path`.
///
/// Returns `Err` only for [`OrganizeError::DirectoryAccess`]; every per-file
/// error is printed and collected in the report.
pub fn organize_directory(
    base_path: &Path,
    filters: &CompiledFilters,
    dry_run: bool,
) -> OrganizeResult<OrganizeReport> {
    OutputFormatter::start(base_path, dry_run);
    log::info!("pass started on {} (dry_run={dry_run})", base_path.display());

    let entries = scanner::read_entries(base_path).inspect_err(|e| {
        OutputFormatter::error(&format!("Error reading directory: {}", e));
    })?;

    let mut report = OrganizeReport {
        dry_run,
        ..Default::default()
    };

    for entry in entries.into_iter().filter(|e| !e.is_dir) {
        if filters.is_config_file(&entry.path) {
            log::debug!("leaving configuration file in place: {}", entry.name);
            report.skipped.push(entry.name);
            continue;
        }

        if !filters.should_include(&entry.name) {
            log::debug!("filtered out: {}", entry.name);
            report.skipped.push(entry.name);
            continue;
        }

        let category = classify(&entry.name);
        log::debug!("{} classified as {}", entry.name, category);

        let outcome = if dry_run {
            planned_relocation(base_path, &entry, category)
        } else {
            FileOrganizer::relocate(base_path, &entry.path, category)
        };

        match outcome {
            Ok(relocation) => {
                if dry_run {
                    OutputFormatter::would_move(&relocation.name, relocation.category);
                } else {
                    OutputFormatter::moved(&relocation.name, relocation.category);
                }
                report.moved.push(relocation);
            }
            Err(error) => {
                let prefix = match error {
                    OrganizeError::DirectoryCreate { .. } => "Error creating folder",
                    _ => "Error moving file",
                };
                OutputFormatter::error(&format!("{}: {}", prefix, error));
                log::warn!("skipping {}: {}", entry.name, error);
                report.failures.push(FileFailure {
                    name: entry.name,
                    error,
                });
            }
        }
    }

    finish(&report);
    log::info!(
        "pass finished: {} moved, {} failed, {} skipped",
        report.moved.len(),
        report.failures.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Works out where a dry run would put `entry`, applying the same collision
/// check as a real move.
fn planned_relocation(
    base_path: &Path,
    entry: &DirectoryEntry,
    category: Category,
) -> OrganizeResult<Relocation> {
    let category_path = base_path.join(category.dir_name());
    let new_path = FileOrganizer::destination_for(&entry.path, &category_path)?;
    Ok(Relocation {
        name: entry.name.clone(),
        category,
        original_path: entry.path.clone(),
        new_path,
    })
}

fn finish(report: &OrganizeReport) {
    if report.is_empty() {
        OutputFormatter::plain("No files to organize.");
        return;
    }

    if !report.moved.is_empty() {
        OutputFormatter::summary_table(&report.category_counts());
    }

    if !report.skipped.is_empty() {
        OutputFormatter::plain(&format!(
            "{} file(s) left in place by filter rules.",
            report.skipped.len()
        ));
    }

    if !report.is_complete_success() {
        OutputFormatter::warning(&format!(
            "{} file(s) could not be organized. Please review errors above.",
            report.failures.len()
        ));
    }

    if report.dry_run {
        OutputFormatter::dry_run_notice("No files were modified.");
    }
}
