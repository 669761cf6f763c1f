//! Sizzle: plans and evaluates short-form cinematography sequences.

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use sizzle_cli::cli_args::{Cli, Commands};
use sizzle_cli::commands;
use sizzle_cli::pipeline::RunOptions;
use sizzle_spec::manifest::{Fps, Resolution};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Doctor) => commands::doctor::run(),
        Some(Commands::Lint { scenes_dir }) => commands::lint::run(&scenes_dir),
        Some(Commands::Schema { document }) => commands::schema::run(document),
        None => run_default_pipeline(&cli),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".red());
            ExitCode::from(1)
        }
    }
}

fn run_default_pipeline(cli: &Cli) -> anyhow::Result<ExitCode> {
    let Some(scenes_dir) = cli.scenes_dir.clone() else {
        eprintln!("{}: SCENES_DIR is required", "error".red());
        return Ok(ExitCode::from(1));
    };
    let Some(style) = cli.style.clone() else {
        eprintln!("{}: --style is required", "error".red());
        return Ok(ExitCode::from(1));
    };
    let fps = Fps::from_u32(cli.fps.parse().unwrap_or(30)).unwrap_or(Fps::Fps30);

    commands::run::run(RunOptions {
        scenes_dir,
        style,
        output: cli.output.clone(),
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        resolution: Resolution { w: cli.width, h: cli.height },
        fps,
    })
}
