use crate::demo::{run_demo, run_render, DemoArgs, RenderArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use key_points::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "10 Key Points Assessment",
    about = "Serve and render standardized 10 Key Points regulatory assessments",
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
    /// Print the ten points for the prefilled example applicant
    Demo(DemoArgs),
    /// Render assessments from a CSV or JSON export
    Render(RenderArgs),
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
        Command::Demo(args) => run_demo(args),
        Command::Render(args) => run_render(args),
    }
}
