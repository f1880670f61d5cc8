mod render;

use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinemood_core::{
    load_config, validate_config, Config, DismissSignal, HttpMovieApi, MovieApi, Session,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging; log lines go to stderr so they never interleave
    // with rendered output.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine config path
    let config_path = std::env::var("CINEMOOD_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    let config = if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        load_config(&config_path)
            .with_context(|| format!("Failed to load config from {:?}", config_path))?
    } else {
        info!("No config file at {:?}, using defaults", config_path);
        Config::default()
    };
    validate_config(&config).context("Configuration validation failed")?;

    let api = HttpMovieApi::new(&config.api).context("Failed to create API client")?;
    let mut session = Session::new(Arc::new(api) as Arc<dyn MovieApi>);

    println!("cinemood {} ({})", VERSION, config.api.base_url);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush().ok();

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();

        match command {
            "" => continue,
            "diary" => {
                session.set_diary_text(rest);
                println!("Diary entry saved. Run 'recommend' when you're ready.");
                continue;
            }
            "recommend" => {
                let _ = session.submit_recommendation().await;
            }
            "search" => {
                if !rest.is_empty() {
                    session.set_search_query(rest);
                }
                let _ = session.submit_search().await;
            }
            "open" => match rest.parse::<u32>() {
                Ok(id) => session.open_detail(id).await,
                Err(_) => {
                    println!("Usage: open <movie-id>");
                    continue;
                }
            },
            "close" => session.dismiss_overlay(DismissSignal::CloseAction),
            "esc" => session.dismiss_overlay(DismissSignal::EscapeKey),
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            _ => {
                println!("Unknown command '{}'. Try 'help'.", command);
                continue;
            }
        }

        let workflows = render::render_workflows(session.coordinator(), &config.images);
        if !workflows.is_empty() {
            print!("{}", workflows);
        }
        let overlay = render::render_overlay(session.overlay(), &config.images);
        if !overlay.is_empty() {
            print!("{}", overlay);
        }
    }

    info!("Goodbye");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  diary <text>     write today's diary entry");
    println!("  recommend        get movie recommendations for your entry");
    println!("  search <title>   search the catalogue by title");
    println!("  open <movie-id>  show full detail for a movie");
    println!("  close / esc      dismiss the detail view");
    println!("  quit             exit");
}
