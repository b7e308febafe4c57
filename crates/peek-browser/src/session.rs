//! Browser lifecycle management using Chrome DevTools Protocol

use headless_chrome::{Browser, LaunchOptions, Tab};
use peek_core::{PeekError, Result};
use std::ffi::OsStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for browser launch
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run in headless mode (default: true)
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// User agent string
    pub user_agent: Option<String>,
    /// Marker wait timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1920,
            window_height: 1080,
            user_agent: None,
            timeout_seconds: 30,
        }
    }
}

/// Active browser session with Chrome DevTools Protocol
///
/// The session exclusively owns the browser process for its lifetime; dropping
/// it on any exit path, success or failure, releases the process.
pub struct BrowserSession {
    /// Underlying browser instance (kept alive for tab lifetime)
    #[allow(dead_code)]
    browser: Browser,
    /// Current active tab
    tab: Arc<Tab>,
    /// Configuration
    config: BrowserConfig,
}

impl BrowserSession {
    /// Launch a new headless browser instance
    ///
    /// # Example
    /// ```no_run
    /// use peek_browser::session::BrowserSession;
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let session = BrowserSession::launch().await.unwrap();
    ///     session.navigate("http://localhost:3000").await.unwrap();
    /// }
    /// ```
    pub async fn launch() -> Result<Self> {
        Self::launch_with_config(BrowserConfig::default()).await
    }

    /// Launch browser with custom configuration
    pub async fn launch_with_config(config: BrowserConfig) -> Result<Self> {
        info!(
            "Launching browser (headless: {}, size: {}x{})",
            config.headless, config.window_width, config.window_height
        );

        let mut launch_options = LaunchOptions::default_builder()
            .headless(config.headless)
            .window_size(Some((config.window_width, config.window_height)))
            .build()
            .map_err(|e| PeekError::Launch(format!("Failed to build launch options: {}", e)))?;

        let user_agent_arg: Option<String> =
            config.user_agent.as_ref().map(|ua| format!("--user-agent={}", ua));
        if let Some(ref ua_arg) = user_agent_arg {
            launch_options.args.push(OsStr::new(ua_arg));
        }

        let browser = Browser::new(launch_options)
            .map_err(|e| PeekError::Launch(format!("Failed to launch browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| PeekError::Launch(format!("Failed to create tab: {}", e)))?;

        info!("Browser launched successfully");

        Ok(Self {
            browser,
            tab,
            config,
        })
    }

    /// Connect to an existing browser instance
    ///
    /// # Arguments
    /// * `port` - Chrome DevTools Protocol port (typically 9222)
    pub async fn connect(port: u16) -> Result<Self> {
        info!("Connecting to existing browser on port {}", port);

        let browser = Browser::connect(format!("http://127.0.0.1:{}", port))
            .map_err(|e| PeekError::Launch(format!("Failed to connect to browser: {}", e)))?;

        let tab = browser
            .new_tab()
            .map_err(|e| PeekError::Launch(format!("Failed to create tab: {}", e)))?;

        info!("Connected to browser successfully");

        Ok(Self {
            browser,
            tab,
            config: BrowserConfig::default(),
        })
    }

    /// Navigate to a URL and block until navigation completes
    ///
    /// # Arguments
    /// * `url` - URL to navigate to
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);

        self.tab
            .navigate_to(url)
            .map_err(|e| PeekError::Navigation(format!("Failed to navigate to {}: {}", url, e)))?;

        self.tab
            .wait_until_navigated()
            .map_err(|e| PeekError::Navigation(format!("Navigation timeout for {}: {}", url, e)))?;

        info!("Successfully navigated to {}", url);
        Ok(())
    }

    /// Block until a text marker becomes visible anywhere in the page
    ///
    /// # Arguments
    /// * `text` - Text the page is expected to contain
    /// * `timeout` - Optional timeout duration (uses config default if None)
    pub async fn wait_for_text(&self, text: &str, timeout: Option<Duration>) -> Result<()> {
        let timeout_duration =
            timeout.unwrap_or_else(|| Duration::from_secs(self.config.timeout_seconds));
        let xpath = text_marker_xpath(text);

        debug!("Waiting for text marker: {} (timeout: {:?})", text, timeout_duration);

        self.tab
            .wait_for_xpath_with_custom_timeout(&xpath, timeout_duration)
            .map_err(|_e| PeekError::WaitTimeout {
                marker: text.to_string(),
            })?;

        debug!("Text marker found: {}", text);
        Ok(())
    }

    /// Locate an element and click it
    ///
    /// # Arguments
    /// * `selector` - CSS selector for the element
    pub async fn click(&self, selector: &str) -> Result<()> {
        debug!("Clicking element: {}", selector);

        let element = self
            .tab
            .wait_for_element(selector)
            .map_err(|_e| PeekError::ElementNotFound {
                selector: selector.to_string(),
            })?;

        element
            .click()
            .map_err(|e| PeekError::Interaction(format!("Failed to click {}: {}", selector, e)))?;

        info!("Clicked element: {}", selector);
        Ok(())
    }

    /// Execute JavaScript in the page context
    ///
    /// # Arguments
    /// * `script` - JavaScript code to execute
    ///
    /// # Returns
    /// JSON result from JavaScript execution
    pub async fn evaluate_script(&self, script: &str) -> Result<serde_json::Value> {
        debug!("Evaluating JavaScript: {}", script);

        let result = self
            .tab
            .evaluate(script, false)
            .map_err(|e| PeekError::Other(format!("JavaScript evaluation failed: {}", e)))?;

        Ok(result.value.unwrap_or(serde_json::Value::Null))
    }

    /// Get the current page title
    pub async fn title(&self) -> Result<String> {
        let result = self.evaluate_script("document.title").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Get the current URL
    pub async fn url(&self) -> Result<String> {
        let result = self.evaluate_script("window.location.href").await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Check if an element exists
    ///
    /// # Arguments
    /// * `selector` - CSS selector for the element
    pub async fn element_exists(&self, selector: &str) -> bool {
        self.tab.wait_for_element(selector).is_ok()
    }

    /// Get text content of an element
    ///
    /// # Arguments
    /// * `selector` - CSS selector for the element
    pub async fn text_content(&self, selector: &str) -> Result<String> {
        // Double-quoted so attribute selectors like [aria-label='User menu'] embed cleanly
        let script = format!("document.querySelector(\"{}\")?.textContent", selector);
        let result = self.evaluate_script(&script).await?;
        Ok(result.as_str().unwrap_or("").to_string())
    }

    /// Get reference to the active tab
    pub fn tab(&self) -> &Arc<Tab> {
        &self.tab
    }

    /// Close the browser session
    pub async fn close(self) -> Result<()> {
        info!("Closing browser session");
        // Browser will be dropped and cleaned up automatically
        Ok(())
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        debug!("BrowserSession dropped, browser process will be released");
    }
}

/// Build an XPath that matches any node containing the given text
fn text_marker_xpath(text: &str) -> String {
    format!("//*[contains(text(), {})]", xpath_string_literal(text))
}

/// Quote a string for embedding in an XPath expression
///
/// XPath 1.0 has no escape sequences inside string literals; text containing
/// both quote kinds must be spliced with concat().
fn xpath_string_literal(text: &str) -> String {
    if !text.contains('"') {
        format!("\"{}\"", text)
    } else if !text.contains('\'') {
        format!("'{}'", text)
    } else {
        let parts: Vec<String> = text.split('"').map(|p| format!("\"{}\"", p)).collect();
        format!("concat({})", parts.join(r#", '"', "#))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BrowserConfig::default();
        assert!(config.headless);
        assert_eq!(config.window_width, 1920);
        assert_eq!(config.window_height, 1080);
        assert_eq!(config.timeout_seconds, 30);
    }

    #[test]
    fn test_custom_config() {
        let config = BrowserConfig {
            headless: false,
            window_width: 1024,
            window_height: 768,
            user_agent: Some("CustomAgent/1.0".to_string()),
            timeout_seconds: 60,
        };

        assert!(!config.headless);
        assert_eq!(config.window_width, 1024);
        assert!(config.user_agent.is_some());
    }

    #[test]
    fn test_text_marker_xpath_plain() {
        assert_eq!(
            text_marker_xpath("CDN Blogger"),
            r#"//*[contains(text(), "CDN Blogger")]"#
        );
    }

    #[test]
    fn test_text_marker_xpath_double_quotes() {
        assert_eq!(
            text_marker_xpath(r#"Say "hi""#),
            r#"//*[contains(text(), 'Say "hi"')]"#
        );
    }

    #[test]
    fn test_text_marker_xpath_mixed_quotes() {
        // Both quote kinds force the concat() form
        assert_eq!(
            xpath_string_literal(r#"it's "fine""#),
            r#"concat("it's ", '"', "fine", '"', "")"#
        );
    }
}
