use crate::report::{run_skills, run_summary, SummaryArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use intern_insights::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Internship Insights",
    about = "Explore normalized internship postings from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print KPIs and distributions for a filtered set of postings
    Summary(SummaryArgs),
    /// List the skill tags and the keywords that detect them
    Skills,
}

/// Selects the postings source. Falls back to `APP_DATA_PATH` when neither flag is given.
#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Path to a postings CSV export
    #[arg(long, conflicts_with = "sample")]
    pub(crate) data: Option<PathBuf>,
    /// Use the built-in sample postings
    #[arg(long)]
    pub(crate) sample: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Summary(args) => run_summary(args),
        Command::Skills => {
            run_skills();
            Ok(())
        }
    }
}
