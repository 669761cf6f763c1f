//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Sizzle: plans and evaluates short-form cinematography sequences from
/// authored scene JSON.
#[derive(Parser, Debug)]
#[command(name = "sizzle", version, about, long_about = None)]
pub struct Cli {
    /// Directory of scene JSON files to run the pipeline over
    pub scenes_dir: Option<PathBuf>,

    /// Style pack to plan and evaluate against
    #[arg(long)]
    pub style: Option<String>,

    /// Output path (manifest JSON on --dry-run, otherwise a render path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the planned manifest instead of invoking the renderer
    #[arg(long)]
    pub dry_run: bool,

    /// Print per-scene analysis, planner notes, and guardrail findings
    #[arg(short, long)]
    pub verbose: bool,

    /// Output frame width
    #[arg(long, default_value_t = 1080)]
    pub width: u32,

    /// Output frame height
    #[arg(long, default_value_t = 1920)]
    pub height: u32,

    /// Output frame rate
    #[arg(long, value_parser = ["24", "30", "60"], default_value = "30")]
    pub fps: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the bundled catalog and environment for problems
    Doctor,

    /// Validate and analyze scenes in a directory without planning a sequence
    Lint {
        /// Directory of scene JSON files to check
        scenes_dir: PathBuf,
    },

    /// Print a bundled catalog document as JSON
    Schema {
        #[arg(value_enum)]
        document: SchemaDocument,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaDocument {
    Personalities,
    StylePacks,
    ShotGrammar,
    Guardrails,
    Primitives,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_pipeline_invocation() {
        let cli = Cli::try_parse_from(["sizzle", "scenes/", "--style", "confident-launch"]).unwrap();
        assert_eq!(cli.scenes_dir, Some(PathBuf::from("scenes/")));
        assert_eq!(cli.style.as_deref(), Some("confident-launch"));
        assert!(!cli.dry_run);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parses_dry_run_and_output() {
        let cli = Cli::try_parse_from([
            "sizzle",
            "scenes/",
            "--style",
            "moody-reveal",
            "--dry-run",
            "--output",
            "out.json",
            "--verbose",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }

    #[test]
    fn parses_doctor_subcommand() {
        let cli = Cli::try_parse_from(["sizzle", "doctor"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Doctor)));
    }

    #[test]
    fn parses_lint_subcommand() {
        let cli = Cli::try_parse_from(["sizzle", "lint", "scenes/"]).unwrap();
        match cli.command {
            Some(Commands::Lint { scenes_dir }) => assert_eq!(scenes_dir, PathBuf::from("scenes/")),
            other => panic!("expected Lint, got {other:?}"),
        }
    }

    #[test]
    fn parses_schema_subcommand() {
        let cli = Cli::try_parse_from(["sizzle", "schema", "style-packs"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Schema { document: SchemaDocument::StylePacks })
        ));
    }

    #[test]
    fn rejects_unknown_fps() {
        let result = Cli::try_parse_from(["sizzle", "scenes/", "--style", "x", "--fps", "25"]);
        assert!(result.is_err());
    }
}
