use clap::{Parser, Subcommand};
use nvbundle::AppError;

#[derive(Parser)]
#[command(name = "nvbundle")]
#[command(version)]
#[command(
    about = "Install and bundle a Neovim configuration for online and airgapped machines",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install the configuration and sync plugins over the network
    Online,
    /// Install from a local bundle archive, no network required
    Offline,
    /// Produce a bundle archive from the installed configuration
    Bundle,
    /// Produce a self-contained transfer package for airgapped machines
    Airgapped,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Online => nvbundle::online(),
        Commands::Offline => nvbundle::offline(),
        Commands::Bundle => nvbundle::bundle().map(|_| ()),
        Commands::Airgapped => nvbundle::airgapped().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
