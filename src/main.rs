use clap::{Args, Parser, Subcommand};
use drive_dump::commands::{self, Config, Overrides};
use drive_dump::files::DriveClient;
use drive_dump::{get_token, Error, RemoteError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Mirror an entire Google Drive into a local directory")]
struct Opts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Download every reachable item, exporting native documents
    Dump(DumpCommand),
    /// List the export formats and the extensions they are saved with
    Formats,
}

#[derive(Args)]
struct DumpCommand {
    /// Directory the drive is mirrored into [default: downloaded]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Leaf downloads in flight per folder
    #[arg(short, long)]
    jobs: Option<usize>,
    /// Attempts per folder listing before the folder is given up [default: 5]
    #[arg(long)]
    list_attempts: Option<u32>,
    /// Attempts per file download on truncated reads [default: 2]
    #[arg(long)]
    fetch_attempts: Option<u32>,
    /// Access token; falls back to $DRIVE_DUMP_TOKEN and ~/.drive_dump_token
    #[arg(long)]
    token: Option<String>,
    /// JSON file with the same settings
    #[arg(long)]
    config: Option<PathBuf>,
}

async fn dump(command: DumpCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &command.config {
        Some(path) => commands::load_config(path).await?,
        None => Config::default(),
    };
    config.apply_overrides(Overrides {
        output_root: command.output,
        jobs: command.jobs,
        list_attempts: command.list_attempts,
        fetch_attempts: command.fetch_attempts,
    });

    let token = get_token(command.token.as_deref()).await?;
    let client = DriveClient::new(&token);

    match commands::dump::dump(&client, &config).await {
        Ok(report) => {
            println!("\n{}", report);
            Ok(())
        }
        Err(Error::Remote(RemoteError::Unauthorized)) => {
            eprintln!(
                "The credentials have been revoked or expired, please re-run the application to re-authorize"
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let opts = Opts::parse();

    match opts.subcmd {
        SubCommand::Dump(command) => {
            dump(command).await?;
        }
        SubCommand::Formats => {
            print!("{}", commands::formats::formats());
        }
    }

    Ok(())
}
