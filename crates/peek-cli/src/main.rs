//! peek - headless UI smoke check for CDN Blogger
//!
//! Usage:
//!   peek                    Check the app served at http://localhost:3000
//!   peek --url <URL>        Check a different address
//!   peek --connect <PORT>   Attach to a Chrome started with --remote-debugging-port
//!   peek --headed           Watch the check run in a visible browser window
//!
//! The check navigates to the app, waits for the navbar brand to render, opens
//! the user menu, confirms the logged-out "Log In" entry appears, and writes two
//! screenshots under the output directory as evidence. Any unmet expectation
//! aborts the run with a non-zero exit.

use anyhow::Result;
use clap::Parser;
use peek_browser::screenshot::{capture_and_store, ScreenshotOptions};
use peek_browser::{verify_element, verify_page_loaded, ArtifactStore, BrowserConfig, BrowserSession};
use peek_core::PeekError;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Text the navbar brand renders
const BRAND_MARKER: &str = "CDN Blogger";
/// Accessibility label on the profile button
const USER_MENU_SELECTOR: &str = "button[aria-label='User menu']";
/// Menu entry shown to a logged-out viewer
const LOGIN_MARKER: &str = "Log In";

#[derive(Parser)]
#[command(name = "peek")]
#[command(version, about = "Headless UI smoke check for CDN Blogger")]
struct Cli {
    /// Address the application under test is served at
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Directory screenshots are written to
    #[arg(long, default_value = "verification")]
    out_dir: PathBuf,

    /// Seconds to wait for each marker before failing
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Attach to a running Chrome on this DevTools port instead of launching
    #[arg(long, value_name = "PORT")]
    connect: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    cmd_check(cli).await
}

/// Run the navbar smoke check
///
/// The sequence is strictly linear; the first unmet expectation propagates out
/// and the browser process is released by the session guard on every path.
async fn cmd_check(cli: Cli) -> Result<()> {
    info!("Checking {}", cli.url);

    let session = match cli.connect {
        Some(port) => BrowserSession::connect(port).await?,
        None => {
            let config = BrowserConfig {
                headless: !cli.headed,
                timeout_seconds: cli.timeout,
                ..BrowserConfig::default()
            };
            BrowserSession::launch_with_config(config).await?
        }
    };

    let store = ArtifactStore::new(&cli.out_dir);

    // Navigate to homepage
    session.navigate(&cli.url).await?;
    if !verify_page_loaded(&session).await? {
        return Err(PeekError::Navigation(format!("{} did not load cleanly", cli.url)).into());
    }

    // Check Navbar brand
    session.wait_for_text(BRAND_MARKER, None).await?;

    // Take screenshot of homepage with Navbar
    capture_and_store(
        &session,
        &store,
        "homepage_navbar",
        "Homepage with navbar",
        ScreenshotOptions::full_page(),
    )
    .await?;
    println!("Homepage screenshot taken.");

    // The profile button renders even when logged out; confirm it before clicking
    let check = verify_element(&session, USER_MENU_SELECTOR).await?;
    if check.failed() {
        return Err(PeekError::ElementNotFound {
            selector: USER_MENU_SELECTOR.to_string(),
        }
        .into());
    }
    session.click(USER_MENU_SELECTOR).await?;

    // Check the menu opened and shows Log In
    session.wait_for_text(LOGIN_MARKER, None).await?;

    // Take screenshot of open menu
    capture_and_store(
        &session,
        &store,
        "menu_open",
        "User menu open, logged out",
        ScreenshotOptions::full_page(),
    )
    .await?;
    println!("Menu open screenshot taken.");

    session.close().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["peek"]);
        assert_eq!(cli.url, "http://localhost:3000");
        assert_eq!(cli.out_dir, PathBuf::from("verification"));
        assert_eq!(cli.timeout, 30);
        assert!(!cli.headed);
        assert!(cli.connect.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "peek",
            "--url",
            "http://localhost:8080",
            "--out-dir",
            "evidence",
            "--timeout",
            "5",
            "--headed",
            "--connect",
            "9222",
        ]);
        assert_eq!(cli.url, "http://localhost:8080");
        assert_eq!(cli.out_dir, PathBuf::from("evidence"));
        assert_eq!(cli.timeout, 5);
        assert!(cli.headed);
        assert_eq!(cli.connect, Some(9222));
    }
}
