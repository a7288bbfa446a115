// ============================================================================
// HRIS Console - Entry Point
// File: crates/hris-console/src/main.rs
// ============================================================================
//! Terminal front end for the HRIS admin client

mod host;
mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use hris_client::models::StaffQuery;
use hris_client::ClientState;
use hris_core::domain::{FaceDescriptor, PermissionKind, SessionState};
use hris_core::ports::ManualKeySource;
use hris_core::services::FaceMatcher;
use hris_shared::telemetry::init_telemetry;
use hris_shared::{ClientConfig, Pagination};

use host::{command_printer, parse_key_line, ConsoleRedirector};
use render::{render_hints, render_menu, render_outcome};

#[derive(Parser)]
#[command(name = "hris", version, about = "HRIS admin console")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration profile loaded from `config/{ENV}`
    #[arg(long, env = "APP_ENV")]
    config_env: Option<String>,

    /// API base URL, overrides configuration
    #[arg(long, env = "HRIS_API_URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the token pair
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "HRIS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear stored tokens
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Print the navigation menu for the signed-in user
    Menu,
    /// Check a navigation permission
    Can {
        path: String,
        #[arg(default_value = "read")]
        kind: PermissionKind,
    },
    /// Feed key presses to the shortcut dispatcher, from arguments or stdin.
    /// Prefix a key with `input:` to press it inside a text field.
    Keys { keys: Vec<String> },
    /// List employees
    Employees {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Match a face descriptor (JSON array) against enrolled employees
    Identify { descriptor: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config_env {
        Some(env) => ClientConfig::load_for(env),
        None => ClientConfig::load(),
    }
    .context("Failed to load configuration")?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url.trim_end_matches('/').to_string();
    }
    let _guard = init_telemetry(&config.log)?;

    let state = ClientState::from_config(config, Arc::new(ConsoleRedirector), command_printer())?;
    info!("HRIS console started");

    match cli.command {
        Commands::Login { username, password } => {
            let profile = state.session.login(&username, &password).await?;
            println!("Signed in as {} <{}>", profile.user_name, profile.email);
        }
        Commands::Logout => state.logout(),
        Commands::Whoami => match state.session.init().await {
            SessionState::Authenticated => {
                if let Some(user) = state.session.current_user() {
                    let role = if user.is_admin { "admin" } else { "staff" };
                    println!("{} <{}> ({})", user.user_name, user.email, role);
                }
            }
            _ => println!("Not signed in"),
        },
        Commands::Menu => {
            require_session(&state).await?;
            print!("{}", render_menu(&state.load_menu().await));
        }
        Commands::Can { path, kind } => {
            require_session(&state).await?;
            state.navigation.load_user_navigation().await;
            let allowed = state.navigation.stores().has_permission(&path, kind);
            println!("{} {}: {}", kind.as_str(), path, if allowed { "yes" } else { "no" });
        }
        Commands::Keys { keys } => run_keys(&state, keys).await?,
        Commands::Employees { search, page } => {
            let query = StaffQuery {
                pagination: Some(Pagination::new(page, hris_shared::constants::DEFAULT_PAGE_SIZE)),
                search,
                ..Default::default()
            };
            let result = state.employees().list(&query).await?;
            for employee in &result.employees {
                println!("{}  {}  {}", employee.employee_id, employee.full_name(), employee.status);
            }
            println!("{} of {} (page {})", result.employees.len(), result.total, result.page);
        }
        Commands::Identify { descriptor } => {
            let candidate = FaceDescriptor::from_json(&descriptor)?;
            let matcher = FaceMatcher::new(state.employees().face_descriptors().await?);
            if matcher.is_empty() {
                bail!("No enrolled face descriptors");
            }
            let found = matcher.best_match(&candidate);
            match found.label {
                Some(label) => println!("{} (distance {:.3})", label, found.distance),
                None => println!("unknown (closest distance {:.3})", found.distance),
            }
        }
    }

    Ok(())
}

async fn require_session(state: &ClientState) -> Result<()> {
    if state.session.init().await != SessionState::Authenticated {
        bail!("Not signed in, run `hris login` first");
    }
    Ok(())
}

async fn run_keys(state: &ClientState, keys: Vec<String>) -> Result<()> {
    let mut source = ManualKeySource::new();
    state.shortcuts.init_listener(&mut source);
    println!("{}", render_hints(&state.shortcuts.active_shortcuts().get()));

    if !keys.is_empty() {
        for line in &keys {
            press_line(state, &source, line);
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        press_line(state, &source, &line);
    }
    Ok(())
}

fn press_line(state: &ClientState, source: &ManualKeySource, line: &str) {
    let Some(key) = parse_key_line(line) else {
        return;
    };
    for outcome in source.press(&key) {
        println!("{}: {}", key.key, render_outcome(&outcome));
    }
    println!("{}", render_hints(&state.shortcuts.active_shortcuts().get()));
}
