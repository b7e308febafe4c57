//! Screenshot capture using Chrome DevTools Protocol

use crate::artifacts::{ArtifactStore, CheckArtifact};
use crate::session::BrowserSession;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use peek_core::{PeekError, Result};
use tracing::{debug, info};

/// Screenshot capture options
#[derive(Debug, Clone)]
pub struct ScreenshotOptions {
    /// CSS selector for element screenshot (None for full page)
    pub selector: Option<String>,
    /// Capture the full page surface rather than the viewport
    pub full_page: bool,
}

impl Default for ScreenshotOptions {
    fn default() -> Self {
        Self {
            selector: None,
            full_page: true,
        }
    }
}

impl ScreenshotOptions {
    /// Create options for full-page screenshot
    pub fn full_page() -> Self {
        Self {
            selector: None,
            full_page: true,
        }
    }

    /// Create options for element screenshot
    pub fn element(selector: &str) -> Self {
        Self {
            selector: Some(selector.to_string()),
            full_page: false,
        }
    }
}

/// Capture a PNG screenshot according to the given options
pub async fn capture(session: &BrowserSession, options: &ScreenshotOptions) -> Result<Vec<u8>> {
    if let Some(ref selector) = options.selector {
        debug!("Capturing element screenshot: {}", selector);
        capture_element(session, selector).await
    } else {
        debug!("Capturing full page screenshot");
        capture_page(session, options.full_page).await
    }
}

/// Capture a full-page PNG screenshot
pub async fn capture_full_page(session: &BrowserSession) -> Result<Vec<u8>> {
    capture_page(session, true).await
}

async fn capture_page(session: &BrowserSession, full_page: bool) -> Result<Vec<u8>> {
    let tab = session.tab();

    let screenshot_data = tab
        .capture_screenshot(CaptureScreenshotFormatOption::Png, None, None, full_page)
        .map_err(|e| PeekError::Screenshot(format!("CDP capture failed: {}", e)))?;

    Ok(screenshot_data)
}

/// Capture a PNG screenshot of a specific element
pub async fn capture_element(session: &BrowserSession, selector: &str) -> Result<Vec<u8>> {
    let tab = session.tab();

    let element = tab
        .wait_for_element(selector)
        .map_err(|_e| PeekError::ElementNotFound {
            selector: selector.to_string(),
        })?;

    let screenshot_data = element
        .capture_screenshot(CaptureScreenshotFormatOption::Png)
        .map_err(|e| PeekError::Screenshot(format!("Element capture failed: {}", e)))?;

    Ok(screenshot_data)
}

/// Capture a screenshot and persist it through the artifact store
///
/// # Arguments
/// * `session` - Active browser session
/// * `store` - Artifact store to persist through
/// * `name` - File stem for the stored artifact
/// * `description` - Human-readable description
/// * `options` - Screenshot capture options
///
/// # Returns
/// Metadata for the stored artifact
pub async fn capture_and_store(
    session: &BrowserSession,
    store: &ArtifactStore,
    name: &str,
    description: &str,
    options: ScreenshotOptions,
) -> Result<CheckArtifact> {
    let data = capture(session, &options).await?;

    let artifact = store.store(name, &data, description).await?;

    info!(
        "Screenshot stored: {} ({} bytes)",
        artifact.path.display(),
        artifact.size_bytes
    );

    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screenshot_options_default() {
        let options = ScreenshotOptions::default();
        assert!(options.selector.is_none());
        assert!(options.full_page);
    }

    #[test]
    fn test_screenshot_options_full_page() {
        let options = ScreenshotOptions::full_page();
        assert!(options.selector.is_none());
        assert!(options.full_page);
    }

    #[test]
    fn test_screenshot_options_element() {
        let options = ScreenshotOptions::element("button[aria-label='User menu']");
        assert_eq!(
            options.selector.as_deref(),
            Some("button[aria-label='User menu']")
        );
        assert!(!options.full_page);
    }
}
