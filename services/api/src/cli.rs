use crate::report::{run_profile, run_report, ProfileArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use research_scholar::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Research Scholar",
    about = "Find, rank, and prepare scholarship applications from the command line",
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
    /// Run the scholarship pipeline for a profile and print the report
    Report(ReportArgs),
    /// Normalize a CV extraction payload into a student profile
    Profile(ProfileArgs),
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
        Command::Report(args) => run_report(args),
        Command::Profile(args) => run_profile(args),
    }
}
