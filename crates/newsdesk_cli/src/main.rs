//! Newsdesk CLI - presentation layer over `newsdesk_core`.
//!
//! # Responsibility
//! - Collect article text, trigger classification, and record the result.
//! - Render history, aggregate statistics, and the CSV export.
//!
//! # Invariants
//! - Validation, classification, and persistence failures are user-visible
//!   messages with a nonzero exit, never panics.
//! - A persistence failure on append does not suppress the already-computed
//!   category; it is reported separately.

use clap::{Parser, Subcommand};
use newsdesk_core::{
    default_log_level, init_logging, non_empty_input, CategoryRegistry, Classifier,
    CommandClassifier, FeedbackService, KeywordClassifier,
};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Classify news articles and review the feedback log", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the feedback database file.
    #[arg(long, default_value = "feedback.db", global = true)]
    db: PathBuf,

    /// External model runner command line (reads text on stdin, prints a
    /// class id). Falls back to the built-in keyword backend when absent.
    #[arg(long, global = true)]
    model_cmd: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when absent.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one article and record the result.
    Classify {
        /// Article text; read from stdin when omitted.
        text: Option<String>,
    },

    /// Show the full classification history with aggregate statistics.
    History,

    /// Export the full log as CSV.
    Export {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        if let Err(err) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let service = FeedbackService::new(&cli.db, CategoryRegistry::news_default());
    if let Err(err) = service.initialize() {
        eprintln!("error: cannot open feedback database: {err}");
        return ExitCode::FAILURE;
    }

    match cli.command {
        Commands::Classify { text } => cmd_classify(&service, cli.model_cmd.as_deref(), text),
        Commands::History => cmd_history(&service),
        Commands::Export { output } => cmd_export(&service, output),
    }
}

fn cmd_classify(
    service: &FeedbackService,
    model_cmd: Option<&str>,
    text_arg: Option<String>,
) -> ExitCode {
    let raw = match text_arg {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("error: cannot read article text from stdin: {err}");
                return ExitCode::FAILURE;
            }
            buffer
        }
    };

    let text = match non_empty_input(&raw) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let classifier = build_classifier(model_cmd);
    let category_id = match classifier.classify(text) {
        Ok(id) => id,
        Err(err) => {
            // Nothing is recorded for a failed classification.
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let label = service.registry().label_of(category_id);
    println!("Predicted category: {label}");

    if let Err(err) = service.append(text, category_id) {
        eprintln!("warning: result shown above could not be logged: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn cmd_history(service: &FeedbackService) -> ExitCode {
    let events = match service.list_all() {
        Ok(events) => events,
        Err(err) => {
            eprintln!("error: cannot read history: {err}");
            return ExitCode::FAILURE;
        }
    };

    if events.is_empty() {
        println!("No classifications recorded yet.");
        return ExitCode::SUCCESS;
    }

    let most_frequent = match service.most_frequent_category() {
        Ok(Some(label)) => label,
        Ok(None) => String::from("-"),
        Err(err) => {
            eprintln!("error: cannot read statistics: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("Total classifications: {}", events.len());
    println!("Most frequent category: {most_frequent}");
    println!();
    println!("{:>5}  {:<26}  {:<22}  Text", "Id", "Time", "Category");
    for event in &events {
        println!(
            "{:>5}  {:<26}  {:<22}  {}",
            event.id,
            event.timestamp.format("%Y-%m-%d %H:%M:%S"),
            event.category_label,
            preview(&event.text, 60)
        );
    }

    ExitCode::SUCCESS
}

fn cmd_export(service: &FeedbackService, output: Option<PathBuf>) -> ExitCode {
    let csv = match service.export_csv() {
        Ok(csv) => csv,
        Err(err) => {
            eprintln!("error: cannot export history: {err}");
            return ExitCode::FAILURE;
        }
    };

    match output {
        Some(path) => {
            if let Err(err) = std::fs::write(&path, csv) {
                eprintln!("error: cannot write `{}`: {err}", path.display());
                return ExitCode::FAILURE;
            }
            println!("Exported to {}", path.display());
        }
        None => print!("{csv}"),
    }

    ExitCode::SUCCESS
}

fn build_classifier(model_cmd: Option<&str>) -> Box<dyn Classifier> {
    match model_cmd.and_then(CommandClassifier::from_command_line) {
        Some(classifier) => Box::new(classifier),
        None => Box::new(KeywordClassifier::new()),
    }
}

fn preview(text: &str, max_chars: usize) -> String {
    let flattened = text.replace(['\n', '\r'], " ");
    let mut out: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        out.push_str("...");
    }
    out
}
