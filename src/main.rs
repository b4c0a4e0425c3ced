//! Crossperch - terminal view of your latest tweet for the cross-poster
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crossperch::{BackendClient, Config, Navigator};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (RUST_LOG=debug for verbose output)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse CLI arguments
    match parse_args()? {
        Command::Run => run_tui().await,
        Command::Latest { width } => latest_cli(width).await,
        Command::SignIn => sign_in_cli(),
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Version => {
            print_version();
            Ok(())
        }
    }
}

/// CLI commands
enum Command {
    Run,
    Latest { width: usize },
    SignIn,
    Help,
    Version,
}

fn parse_args() -> Result<Command> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() == 1 {
        return Ok(Command::Run);
    }

    match args[1].as_str() {
        "-h" | "--help" | "help" => Ok(Command::Help),
        "-v" | "--version" | "version" => Ok(Command::Version),

        "latest" | "tweet" => {
            let width = args
                .iter()
                .position(|a| a == "--width" || a == "-w")
                .and_then(|i| args.get(i + 1))
                .and_then(|s| s.parse().ok())
                .unwrap_or(72);
            Ok(Command::Latest { width })
        }

        "signin" | "sign-in" | "login" => Ok(Command::SignIn),

        other => Err(anyhow::anyhow!(
            "Unknown command: {other}\nRun 'crossperch --help' for usage"
        )),
    }
}

fn print_help() {
    let config_path = Config::default_path()
        .map_or_else(|_| "Unknown".to_string(), |p| p.display().to_string());

    println!(
        r#"{}
🐦 Crossperch - your latest tweet, in the terminal

USAGE:
    crossperch                         Launch TUI
    crossperch [COMMAND]

COMMANDS:
    latest [OPTIONS]                   Print your latest tweet
      Options:
        -w, --width <n>                Wrap width (default: 72)

    signin                             Open the backend sign-in page

OPTIONS:
    -h, --help                         Show this help message
    -v, --version                      Show version information

KEYBINDINGS (TUI):
    Enter / s     Sign in (when the fetch failed)
    t             Change theme
    ?             Help
    q             Quit

CONFIG:
    {}
"#,
        crossperch::LOGO,
        config_path
    );
}

fn print_version() {
    println!("crossperch {}", crossperch::VERSION);
}

async fn run_tui() -> Result<()> {
    // app::run blocks on its own runtime, which can't happen on an async worker
    tokio::task::spawn_blocking(crossperch::app::run).await?
}

async fn latest_cli(width: usize) -> Result<()> {
    let config = Config::load()?;
    let client = BackendClient::new(&config)?;

    match crossperch::cli::latest_report(&client, width).await {
        Ok(report) => {
            print!("{report}");
            Ok(())
        }
        Err(e) => {
            eprintln!("Run 'crossperch signin' to sign in.");
            Err(e)
        }
    }
}

fn sign_in_cli() -> Result<()> {
    let config = Config::load()?;
    let url = config.sign_in_url();

    println!("📋 Sign in at:\n\n  {}\n", url);
    if let Err(e) = crossperch::BrowserNavigator.navigate(url) {
        tracing::warn!("{e:#}");
        println!("Couldn't open a browser; open the URL above manually.");
    }

    Ok(())
}
