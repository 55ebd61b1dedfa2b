use crate::commands::{run_profile, run_quote, InputArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rekro::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rekro Pricing",
    about = "Quote rentals and score tenant profiles from the command line",
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
    /// Price a unit from a JSON pricing context
    Quote(InputArgs),
    /// Score a profile from a JSON `{user, draft, documents}` payload
    Profile(InputArgs),
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
        Command::Quote(args) => run_quote(args),
        Command::Profile(args) => run_profile(args),
    }
}
