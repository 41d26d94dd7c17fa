use clap::{CommandFactory, Parser};
use env_logger::Env;
use std::process::ExitCode;
use tidyext::cli::{Cli, OrganizeCommand, run_cli_with_config};
use tidyext::output::OutputFormatter;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let Some(dir_path) = cli.directory.as_deref() else {
        // Missing target is informational, not a failure.
        println!("{}", Cli::command().render_usage());
        println!("Pass the directory whose files should be organized, e.g. `tidyext ~/Downloads`.");
        return ExitCode::SUCCESS;
    };

    let command = OrganizeCommand::Organize {
        dry_run: cli.dry_run,
    };

    match run_cli_with_config(command, dir_path, cli.config.as_deref()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // Directory read errors are already printed by the pass itself.
            if matches!(e, tidyext::OrganizeError::Config(_)) {
                OutputFormatter::error(&format!("Error loading configuration: {}", e));
            }
            ExitCode::FAILURE
        }
    }
}
