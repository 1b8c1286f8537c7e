mod cmd_analyze;
mod cmd_insights;
mod cmd_lexicon;
mod cmd_stats;
mod cmd_suggest;
mod input;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stillpoint",
    version,
    about = "Mood analysis, mindful suggestions and insights for journal entries"
)]
struct Cli {
    /// Alternate lexicon file (YAML, or JSON with a .json extension)
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze the mood and sentiment of a piece of text
    Analyze {
        /// Text to analyze (reads --file or stdin when omitted)
        text: Option<String>,
        /// Read the text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Include per-mood scores, sentiment details and keyword weights
        #[arg(long)]
        explain: bool,
    },
    /// Suggest mindful activities for a journal history
    Suggest {
        /// JSON array of journal entries
        #[arg(long)]
        entries: PathBuf,
        /// Only consider entries of this user
        #[arg(long)]
        user: Option<String>,
        /// Suggest for a calendar day (YYYY-MM-DD) instead of the history
        #[arg(long)]
        date: Option<String>,
        /// Hour of day for date-based suggestions (defaults to now, UTC)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..24))]
        hour: Option<u8>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Narrative insights over a journal history
    Insights {
        /// JSON array of journal entries
        #[arg(long)]
        entries: PathBuf,
        /// Only consider entries of this user
        #[arg(long)]
        user: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Recurring moods with their trend, regularity and triggers
    Patterns {
        /// JSON array of journal entries
        #[arg(long)]
        entries: PathBuf,
        /// Only consider entries of this user
        #[arg(long)]
        user: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Mood statistics and timeline
    Stats {
        /// JSON array of journal entries
        #[arg(long)]
        entries: PathBuf,
        /// Only consider entries of this user
        #[arg(long)]
        user: Option<String>,
        /// Timeline range
        #[arg(long, value_enum, default_value_t = cmd_stats::Range::Week)]
        range: cmd_stats::Range,
        /// Reference day (YYYY-MM-DD, defaults to today, UTC)
        #[arg(long)]
        today: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Lexicon operations (check, dump)
    Lexicon {
        #[command(subcommand)]
        cmd: LexiconCmd,
    },
}

#[derive(Subcommand)]
enum LexiconCmd {
    /// Validate a lexicon file (the active lexicon when omitted)
    Check {
        /// Lexicon file to validate
        path: Option<PathBuf>,
    },
    /// Print the active lexicon (YAML unless --json)
    Dump {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let lexicon = cli.lexicon.as_deref();

    match cli.cmd {
        Command::Analyze {
            text,
            file,
            json,
            explain,
        } => cmd_analyze::execute(cmd_analyze::AnalyzeParams {
            lexicon,
            text,
            file: file.as_deref(),
            json,
            explain,
        }),
        Command::Suggest {
            entries,
            user,
            date,
            hour,
            json,
        } => cmd_suggest::execute(cmd_suggest::SuggestParams {
            entries: &entries,
            user: user.as_deref(),
            date: date.as_deref(),
            hour,
            json,
        }),
        Command::Insights {
            entries,
            user,
            json,
        } => cmd_insights::insights(&entries, user.as_deref(), json),
        Command::Patterns {
            entries,
            user,
            json,
        } => cmd_insights::patterns(&entries, user.as_deref(), json),
        Command::Stats {
            entries,
            user,
            range,
            today,
            json,
        } => cmd_stats::execute(&entries, user.as_deref(), range, today.as_deref(), json),
        Command::Lexicon { cmd } => match cmd {
            LexiconCmd::Check { path } => cmd_lexicon::check(path.as_deref().or(lexicon)),
            LexiconCmd::Dump { json } => cmd_lexicon::dump(lexicon, json),
        },
    }
}
