//! Diagnostic CLI driver for the client core
//!
//! Runs the page-load flow against a real content server and prints the
//! results as plain text. Not a UI; a development aid.

use anyhow::Result;
use clap::{Arg, Command};
use privly_bridge::NullBridge;
use privly_core::{
    ClientConfig, HttpNetworkService, NetworkService, Platform, PostRow, SessionController,
    SessionStatus, View,
};
use privly_embed::PreviewFrame;
use tracing_subscriber::EnvFilter;

/// View that renders every region as a line of text
struct PlainView;

impl View for PlainView {
    fn configure_platform(&mut self, platform: Platform) {
        tracing::debug!(?platform, "platform configured");
    }

    fn set_loading(&mut self, loading: bool) {
        tracing::debug!(loading, "loading indicator");
    }

    fn show_sign_in_prompt(&mut self, sign_in_url: &str) {
        println!("not signed in; sign in at {sign_in_url}");
    }

    fn show_error(&mut self, message: &str) {
        println!("error: {message}");
    }

    fn clear_error(&mut self) {}

    fn reveal_account_chrome(&mut self) {
        println!("signed in");
    }

    fn render_posts(&mut self, rows: &[PostRow]) {
        println!("{} post(s)", rows.len());
        for row in rows {
            println!(
                "  {} | {} | public={} | created {} | manage {}",
                row.application, row.view_url, row.public, row.created_at, row.manage_url
            );
        }
    }

    fn set_preview(&mut self, frame: &PreviewFrame) {
        println!("preview: {}", frame.src());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("privly")
        .version(privly_core::VERSION)
        .about("Privly client core diagnostic driver")
        .arg(
            Arg::new("server")
                .long("server")
                .default_value("https://privlyalpha.org")
                .help("Content server domain"),
        )
        .subcommand(Command::new("check-session").about("Report login/session status"))
        .subcommand(Command::new("list-posts").about("Run the page-load flow and print the post table"));

    let matches = cli.get_matches();
    let server = matches
        .get_one::<String>("server")
        .expect("has a default")
        .clone();
    let config = ClientConfig::new()
        .with_domain(server.clone())
        .with_page_origin(server);

    match matches.subcommand() {
        Some(("check-session", _)) => {
            let network = HttpNetworkService::new(&config)?;
            match network.check_session().await? {
                SessionStatus::SignedIn => println!("signed in"),
                SessionStatus::SignedOut => println!("signed out"),
            }
        }
        _ => {
            // Default to the full page-load flow
            let network = HttpNetworkService::new(&config)?;
            let mut controller =
                SessionController::new(config, PlainView, network, NullBridge::new());
            let state = controller.start().await?;
            tracing::info!(?state, "page settled");
        }
    }

    Ok(())
}
