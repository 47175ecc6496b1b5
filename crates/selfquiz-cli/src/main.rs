//! selfquiz CLI: generate, take, and track self-assessment quizzes.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "selfquiz",
    version,
    about = "Self-assessment quizzes from your documents"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the progress store (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate questions from a document and print them
    Generate {
        /// Document to read (.txt, .md or .pdf)
        #[arg(long)]
        file: PathBuf,

        /// Declared content type, e.g. "text/plain" or "application/pdf"
        #[arg(long)]
        content_type: Option<String>,

        /// Seed for reproducible question sets
        #[arg(long)]
        seed: Option<u64>,

        /// Also print the extracted text
        #[arg(long)]
        show_content: bool,
    },

    /// Take an assessment and record the result
    Take {
        /// Document to read (.txt, .md or .pdf)
        #[arg(long)]
        file: PathBuf,

        /// Declared content type, e.g. "text/plain" or "application/pdf"
        #[arg(long)]
        content_type: Option<String>,

        /// Seed for reproducible question sets
        #[arg(long)]
        seed: Option<u64>,

        /// Comma-separated choices (1-4 or a-d, empty for unanswered).
        /// Reads from stdin when omitted.
        #[arg(long)]
        answers: Option<String>,
    },

    /// Show past attempts
    History {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Show what to review next
    Recommend,

    /// Write the HTML progress dashboard
    Dashboard {
        /// Output file
        #[arg(long, default_value = "selfquiz-dashboard.html")]
        output: PathBuf,
    },

    /// Create a starter config
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let global = commands::GlobalArgs {
        config: cli.config,
        data_dir: cli.data_dir,
    };

    let result = match cli.command {
        Commands::Generate {
            file,
            content_type,
            seed,
            show_content,
        } => commands::generate::execute(&global, file, content_type, seed, show_content).await,
        Commands::Take {
            file,
            content_type,
            seed,
            answers,
        } => commands::take::execute(&global, file, content_type, seed, answers).await,
        Commands::History { format } => commands::history::execute(&global, format),
        Commands::Recommend => commands::recommend::execute(&global),
        Commands::Dashboard { output } => commands::dashboard::execute(&global, output),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

const DEFAULT_FILTER: &str =
    "selfquiz_cli=info,selfquiz_core=info,selfquiz_extract=info,selfquiz_report=info";
