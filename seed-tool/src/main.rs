use catalog_core::validate_all;
use clap::{Args, Parser, Subcommand};
use seed_tool::{
    load_books, AssumeYes, CatalogClient, Confirm, SeedConfig, SeedError, SeedOptions,
    SeedOutcome, Seeder, StdinConfirm,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Validates a book list and loads it into the catalog backend.
#[derive(Parser, Debug)]
#[command(name = "seed-tool", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload every book of the document.
    Seed(SeedArgs),
    /// Delete every book on the backend, then upload the document.
    Reset(SeedArgs),
    /// Only check the document, without talking to any server.
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct SeedArgs {
    /// Base URL of the API, e.g. http://localhost:8080
    url: String,

    /// YAML or JSON document with the books.
    #[arg(short, long, default_value = "seed.yml")]
    file: PathBuf,

    /// Do not ask for confirmation.
    #[arg(short, long)]
    yes: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// YAML or JSON document with the books.
    #[arg(short, long, default_value = "seed.yml")]
    file: PathBuf,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("seed_tool=info,catalog_core=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Seed(args) => seed(args, SeedOptions { clear_existing: false }).await,
        Commands::Reset(args) => seed(args, SeedOptions { clear_existing: true }).await,
        Commands::Validate(args) => check(args),
    };

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn seed(args: SeedArgs, options: SeedOptions) -> Result<(), SeedError> {
    let config = SeedConfig::from_env(&args.url)?;
    let confirm: Box<dyn Confirm + Send> = if args.yes || config.ci {
        Box::new(AssumeYes)
    } else {
        Box::new(StdinConfirm)
    };

    let mut seeder = Seeder::new(CatalogClient::new(config)?, confirm);
    match seeder.seed_file(&args.file, options).await? {
        SeedOutcome::Declined => println!("bye!"),
        SeedOutcome::Completed(_) => println!("Done!"),
    }

    Ok(())
}

fn check(args: ValidateArgs) -> Result<(), SeedError> {
    let books = validate_all(&load_books(&args.file)?)?;

    info!("{} books are valid", books.len());
    println!("{}: {} books are valid", args.file.display(), books.len());
    Ok(())
}
