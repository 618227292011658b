mod commands;
mod logger;

use anyhow::Result;
use clap::{Parser, Subcommand};
use review_diff::{CommentAnchor, DiffSide};
use review_diff_config::ReviewDiffConfig;
use std::path::PathBuf;

/// Annotate unified diffs and reconstruct review comment context
#[derive(Parser)]
#[command(name = "review-diff", version, about)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of the default lookup
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print every diff line with its old and new line numbers
    Annotate {
        /// Diff file, or `-` for stdin
        file: Option<PathBuf>,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,

        /// Only print rows the renderer shows
        #[arg(long)]
        rendered: bool,
    },

    /// Print the lines a review comment refers to
    Context {
        /// Diff file, or `-` for stdin
        file: Option<PathBuf>,

        /// Commented line (end line for ranges)
        #[arg(long)]
        line: u32,

        /// Side of the commented line (LEFT or RIGHT)
        #[arg(long)]
        side: DiffSide,

        /// First line of a multi-line comment
        #[arg(long, requires = "start_side")]
        start_line: Option<u32>,

        /// Side of the first line of a multi-line comment
        #[arg(long, requires = "start_line")]
        start_side: Option<DiffSide>,

        /// Lines shown for single-line comments (defaults to config)
        #[arg(long)]
        window: Option<usize>,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// Print hunk headers with declared and observed line counts
    Hunks {
        /// Diff file, or `-` for stdin
        file: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => ReviewDiffConfig::load_from(path)?,
        None => ReviewDiffConfig::load(),
    };
    log::debug!("Using config {:?}", config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Annotate {
            file,
            json,
            rendered,
        } => {
            let diff = commands::read_input(file.as_deref())?;
            commands::annotate_cmd(&diff, json, rendered, &config, &mut out)
        }
        Command::Context {
            file,
            line,
            side,
            start_line,
            start_side,
            window,
            json,
        } => {
            let diff = commands::read_input(file.as_deref())?;
            let anchor = CommentAnchor {
                line,
                side,
                start_line,
                start_side,
            };
            let window = window.unwrap_or(config.context_window);
            commands::context_cmd(&diff, &anchor, window, json, &config, &mut out)
        }
        Command::Hunks { file } => {
            let diff = commands::read_input(file.as_deref())?;
            commands::hunks_cmd(&diff, &mut out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_context_range() {
        let cli = Cli::try_parse_from([
            "review-diff",
            "context",
            "patch.diff",
            "--line",
            "12",
            "--side",
            "right",
            "--start-line",
            "10",
            "--start-side",
            "LEFT",
        ])
        .unwrap();

        match cli.command {
            Command::Context {
                side, start_side, ..
            } => {
                assert_eq!(side, DiffSide::Right);
                assert_eq!(start_side, Some(DiffSide::Left));
            }
            _ => panic!("expected context command"),
        }
    }

    #[test]
    fn test_start_line_requires_start_side() {
        let result = Cli::try_parse_from([
            "review-diff",
            "context",
            "--line",
            "3",
            "--side",
            "RIGHT",
            "--start-line",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_side() {
        let result = Cli::try_parse_from(["review-diff", "context", "--line", "3", "--side", "up"]);
        assert!(result.is_err());
    }
}
