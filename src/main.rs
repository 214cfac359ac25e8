use clap::{Parser, Subcommand};
use std::process;
use tracing::error;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check that the bundled asset decodes and summarize its layouts
    Validate(cmd::validate::ValidateArgs),
    /// Print computed key frames for a layout
    Render(cmd::render::RenderArgs),
    /// Feed key taps through the dispatcher into an in-memory text field
    Simulate(cmd::simulate::SimulateArgs),
    /// Write a starter asset built from known layouts
    Init(cmd::init::InitArgs),
    /// Show keyboard activation steps
    Setup(cmd::setup::SetupArgs),
}

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate(args) => cmd::validate::run(args),
        Commands::Render(args) => cmd::render::run(args),
        Commands::Simulate(args) => cmd::simulate::run(args),
        Commands::Init(args) => cmd::init::run(args),
        Commands::Setup(args) => cmd::setup::run(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}
