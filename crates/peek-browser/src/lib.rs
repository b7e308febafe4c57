//! Browser automation and visual verification for peek
//!
//! This crate drives Chrome/Chromium over the Chrome DevTools Protocol (CDP) to
//! check that a running web application renders the UI it is expected to render.
//!
//! # Features
//!
//! - **Session Management**: Launch a headless browser or attach to a running one
//! - **Marker Waiting**: Block until a text marker or element becomes visible
//! - **Screenshot Capture**: Full-page and element-specific screenshots
//! - **Artifact Storage**: Persist screenshots to fixed, overwritten paths
//! - **Visual Verification**: Element existence, text content, attribute capture
//!
//! # Example
//!
//! ```no_run
//! use peek_browser::artifacts::ArtifactStore;
//! use peek_browser::screenshot::capture_full_page;
//! use peek_browser::session::BrowserSession;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Launch browser
//!     let session = BrowserSession::launch().await?;
//!
//!     // Navigate and wait for the page to show its brand marker
//!     session.navigate("http://localhost:3000").await?;
//!     session.wait_for_text("CDN Blogger", None).await?;
//!
//!     // Capture evidence
//!     let store = ArtifactStore::new("verification");
//!     let png = capture_full_page(&session).await?;
//!     let artifact = store.store("homepage_navbar", &png, "Homepage").await?;
//!     println!("Saved {} ({} bytes)", artifact.path.display(), artifact.size_bytes);
//!
//!     // Clean up
//!     session.close().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Requirements
//!
//! - Chrome or Chromium browser installed
//! - For attaching to an existing browser: `chrome --remote-debugging-port=9222`
//!
//! # Architecture
//!
//! - [`session`]: Browser lifecycle, navigation, waiting, interaction
//! - [`screenshot`]: Screenshot capture over CDP
//! - [`artifacts`]: Evidence storage with fixed output paths
//! - [`verify`]: Element and page-state verification

pub mod artifacts;
pub mod screenshot;
pub mod session;
pub mod verify;

// Re-export commonly used types
pub use artifacts::{ArtifactStore, CheckArtifact};
pub use peek_core::{PeekError, Result};
pub use screenshot::{capture, capture_and_store, capture_element, capture_full_page, ScreenshotOptions};
pub use session::{BrowserConfig, BrowserSession};
pub use verify::{verify_element, verify_page_loaded, ElementAttribute, VisualCheck};
