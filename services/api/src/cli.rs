use crate::demo::{run_demo, run_jobs_import, run_score_report, DemoArgs, JobsImportArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use solar_ops::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Partner Back-Office",
    about = "Run and demo the partner onboarding back office from the command line",
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
    /// Score an onboarding snapshot and print the breakdown
    Score(ScoreArgs),
    /// Work with the job catalog
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },
    /// Run an end-to-end CLI demo covering the wizard, scoring, and job codes
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum JobsCommand {
    /// Import a CSV export of the legacy job tracker
    Import(JobsImportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score_report(args),
        Command::Jobs {
            command: JobsCommand::Import(args),
        } => run_jobs_import(args),
        Command::Demo(args) => run_demo(args),
    }
}
