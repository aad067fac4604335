use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use prompt_patcher::batch::{
    default_exclusions, Batch, BatchError, BatchSummary, FileReport, FileStatus,
};
use prompt_patcher::config::{load_from_path, Payloads};
use prompt_patcher::processor::{FileProcessor, WriteMode};
use prompt_patcher::rules::{RuleOutcome, RuleSet};
use prompt_patcher::logging;
use similar::{ChangeTag, TextDiff};
use std::path::{Path, PathBuf};

/// Exit status when the target directory does not exist or is not a directory.
const EXIT_MISSING_DIRECTORY: i32 = 2;

#[derive(Parser)]
#[command(name = "prompt-patcher")]
#[command(about = "Idempotent rule-based patching of prompt documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply every rule to every prompt document
    Apply {
        /// Directory holding the prompt documents
        #[arg(short, long, env = "PROMPTS_DIR", default_value = "prompts")]
        dir: PathBuf,

        /// TOML file overriding built-in payload text
        #[arg(short, long)]
        payloads: Option<PathBuf>,

        /// Dry run - report what would change without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Show unified diff of each changed instruction
        #[arg(long)]
        diff: bool,
    },

    /// Report per-rule status of every document without modifying anything
    Status {
        /// Directory holding the prompt documents
        #[arg(short, long, env = "PROMPTS_DIR", default_value = "prompts")]
        dir: PathBuf,

        /// TOML file overriding built-in payload text
        #[arg(short, long)]
        payloads: Option<PathBuf>,
    },

    /// List the rules applicable to each document
    Rules {
        /// Only show rules for this document (file name)
        document: Option<String>,

        /// TOML file overriding built-in payload text
        #[arg(short, long)]
        payloads: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {e}"))?;

    match cli.command {
        Commands::Apply {
            dir,
            payloads,
            dry_run,
            diff,
        } => cmd_apply(&dir, payloads.as_deref(), dry_run, diff),

        Commands::Status { dir, payloads } => cmd_status(&dir, payloads.as_deref()),

        Commands::Rules { document, payloads } => {
            cmd_rules(document.as_deref(), payloads.as_deref())
        }
    }
}

/// Helper: Build the rule set from built-in or overridden payloads.
fn load_rules(payloads: Option<&Path>) -> Result<RuleSet> {
    let payloads = match payloads {
        Some(path) => load_from_path(path)?,
        None => Payloads::default(),
    };
    Ok(RuleSet::new(payloads))
}

/// Helper: Turn a missing target directory into its distinguished exit status.
fn finish_batch(result: Result<BatchSummary, BatchError>) -> Result<BatchSummary> {
    match result {
        Err(BatchError::MissingDirectory(dir)) => {
            eprintln!(
                "{}",
                format!("ERROR: prompts directory not found: {}", dir.display()).red()
            );
            std::process::exit(EXIT_MISSING_DIRECTORY);
        }
        Err(BatchError::NotADirectory(dir)) => {
            eprintln!(
                "{}",
                format!("ERROR: prompts path is not a directory: {}", dir.display()).red()
            );
            std::process::exit(EXIT_MISSING_DIRECTORY);
        }
        other => Ok(other?),
    }
}

/// Helper: Show unified diff between original and patched instruction
fn display_diff(name: &str, original: &str, modified: &str) {
    println!("\n{}", format!("--- {} (original)", name).dimmed());
    println!("{}", format!("+++ {} (patched)", name).dimmed());

    let diff = TextDiff::from_lines(original, modified);

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => format!("-{}", change).red(),
            ChangeTag::Insert => format!("+{}", change).green(),
            ChangeTag::Equal => continue,
        };
        print!("{}", sign);
        if change.missing_newline() {
            println!();
        }
    }
    println!();
}

fn print_report(report: &FileReport, dry_run: bool) {
    let line = match report.status {
        FileStatus::Updated if dry_run => format!("  WOULD UPDATE: {}", report.name).green(),
        FileStatus::Updated => format!("  UPDATED: {}", report.name).green(),
        FileStatus::Unchanged => format!("  SKIPPED (no changes needed): {}", report.name).normal(),
        FileStatus::Excluded => format!("  SKIP (excluded): {}", report.name).dimmed(),
    };
    println!("{}", line);
}

fn cmd_apply(dir: &Path, payloads: Option<&Path>, dry_run: bool, show_diff: bool) -> Result<()> {
    let processor = FileProcessor::new(load_rules(payloads)?);
    let batch = Batch::new(dir, default_exclusions(), &processor);
    let mode = if dry_run {
        println!("{}", "[DRY RUN - no documents will be written]".cyan());
        WriteMode::DryRun
    } else {
        WriteMode::Write
    };

    let result = batch.run(mode, |report| {
        print_report(report, dry_run);

        if show_diff {
            if let Some(processed) = report.processed.as_ref().filter(|p| p.outcome.changed) {
                display_diff(&report.name, &processed.original, &processed.outcome.text);
            }
        }
    });
    let summary = finish_batch(result)?;

    println!(
        "\nDone. {} files processed, {} excluded.",
        summary.processed, summary.excluded
    );

    Ok(())
}

fn cmd_status(dir: &Path, payloads: Option<&Path>) -> Result<()> {
    let processor = FileProcessor::new(load_rules(payloads)?);
    let batch = Batch::new(dir, default_exclusions(), &processor);

    println!("{}", "Prompt Status Report".bold());
    println!("Directory: {}", dir.display());
    println!();

    let mut anchors_missing = 0;
    let result = batch.run(WriteMode::DryRun, |report| {
        let Some(processed) = &report.processed else {
            println!("{} {}", "⊘".dimmed(), format!("{} (excluded)", report.name).dimmed());
            return;
        };

        let heading = match report.status {
            FileStatus::Updated => format!("{} {}", "⊙".yellow(), report.name.bold()),
            _ => format!("{} {}", "✓".green(), report.name.bold()),
        };
        println!("{}", heading);

        if processed
            .outcome
            .outcomes
            .iter()
            .any(|(_, outcome)| *outcome == RuleOutcome::AnchorMissing)
        {
            anchors_missing += 1;
        }

        for (rule, outcome) in &processed.outcome.outcomes {
            let state = match outcome {
                RuleOutcome::AlreadyApplied => "applied".green(),
                RuleOutcome::Applied { .. } => "pending".yellow(),
                RuleOutcome::AnchorMissing => "anchor not found".cyan(),
            };
            println!("    {}: {}", rule, state);
        }
    });
    let summary = finish_batch(result)?;

    println!();
    println!("{}", "Summary:".bold());
    println!(
        "  {} no changes pending",
        format!("{}", summary.unchanged).green()
    );
    println!("  {} pending", format!("{}", summary.updated).yellow());
    println!(
        "  {} with anchors not found",
        format!("{}", anchors_missing).cyan()
    );
    println!("  {} excluded", format!("{}", summary.excluded).dimmed());

    Ok(())
}

fn cmd_rules(document: Option<&str>, payloads: Option<&Path>) -> Result<()> {
    let rules = load_rules(payloads)?;
    let exclusions = default_exclusions();

    if let Some(name) = document {
        if exclusions.contains(name) {
            println!("{}: {}", name, "excluded (no rules)".dimmed());
            return Ok(());
        }
        println!("{}", name.bold());
        for id in rules.applicable(name) {
            println!("  - {}", id);
        }
        return Ok(());
    }

    println!("{}", "All documents".bold());
    for id in rules.common() {
        println!("  - {}", id);
    }

    for (name, ids) in rules.designated() {
        println!();
        println!("{}", name.bold());
        for id in ids.iter().filter(|id| !rules.common().contains(*id)) {
            println!("  + {}", id);
        }
    }

    println!();
    println!("{}", "Excluded".bold());
    for name in &exclusions {
        println!("  - {}", name);
    }

    Ok(())
}
