//! Operator-facing output.
//!
//! Every progress line the tool prints goes through [`OutputFormatter`], so
//! wording and styling live in one place. Diagnostics for developers go
//! through the `log` macros instead.

use crate::file_category::Category;
use colored::*;
use std::collections::BTreeMap;
use std::path::Path;

pub struct OutputFormatter;

impl OutputFormatter {
    /// Announces the directory being organized.
    pub fn start(dir: &Path, dry_run: bool) {
        if dry_run {
            Self::dry_run_notice(&format!("Analyzing files in: {}", dir.display()));
        } else {
            println!("{} {}", "Organizing files in:".cyan(), dir.display());
        }
    }

    /// Prints `Moved: <name> -> <category>`.
    pub fn moved(name: &str, category: Category) {
        println!("{} {} -> {}", "Moved:".green(), name, category.dir_name().bold());
    }

    /// Prints `Would move: <name> -> <category>`.
    pub fn would_move(name: &str, category: Category) {
        println!(
            "{} {} -> {}",
            "Would move:".yellow(),
            name,
            category.dir_name().bold()
        );
    }

    /// Prints an error message in red to stderr.
    ///
    /// ```no_run
    /// use tidyext::output::OutputFormatter;
    /// OutputFormatter::error("Error moving file: permission denied");
    /// ```
    pub fn error(message: &str) {
        eprintln!("{}", message.red());
    }

    pub fn warning(message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    pub fn plain(message: &str) {
        println!("{}", message);
    }

    pub fn header(header: &str) {
        println!("\n{}", header.bold());
    }

    pub fn dry_run_notice(message: &str) {
        println!("{}", format!("[DRY RUN] {}", message).yellow());
    }

    /// Prints a per-category table of file counts.
    ///
    /// ```no_run
    /// use tidyext::file_category::Category;
    /// use tidyext::output::OutputFormatter;
    /// use std::collections::BTreeMap;
    ///
    /// let mut counts = BTreeMap::new();
    /// counts.insert(Category::Documents, 15);
    /// counts.insert(Category::Images, 8);
    /// OutputFormatter::summary_table(&counts);
    /// ```
    pub fn summary_table(category_counts: &BTreeMap<Category, usize>) {
        Self::header("SUMMARY");

        let total: usize = category_counts.values().sum();
        let width = category_counts
            .keys()
            .map(|c| c.dir_name().len())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        println!("{:<width$} | {}", "Category".bold(), "Files".bold());
        println!("{}", "-".repeat(width + 10));
        for (category, count) in category_counts {
            println!(
                "{:<width$} | {} {}",
                category.dir_name(),
                count.to_string().green(),
                plural(*count)
            );
        }
        println!("{}", "-".repeat(width + 10));
        println!(
            "{:<width$} | {} {}",
            "Total".bold(),
            total.to_string().green().bold(),
            plural(total)
        );
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "file" } else { "files" }
}
