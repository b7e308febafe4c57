//! Visual verification helpers for UI markers

use crate::session::BrowserSession;
use peek_core::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Result of a visual element check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualCheck {
    /// Whether the element exists in the DOM
    pub element_exists: bool,
    /// Text content of the element (if found)
    pub text_content: Option<String>,
    /// Additional attributes captured
    pub attributes: Vec<ElementAttribute>,
}

/// HTML element attribute
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementAttribute {
    pub name: String,
    pub value: String,
}

impl VisualCheck {
    /// Create a check result for non-existent element
    pub fn not_found() -> Self {
        Self {
            element_exists: false,
            text_content: None,
            attributes: Vec::new(),
        }
    }

    /// Check if verification passed (element exists)
    pub fn passed(&self) -> bool {
        self.element_exists
    }

    /// Check if verification failed (element missing)
    pub fn failed(&self) -> bool {
        !self.element_exists
    }
}

/// Verify an element exists and capture its state
///
/// # Arguments
/// * `session` - Active browser session
/// * `selector` - CSS selector for the element
///
/// # Returns
/// Visual check result with the element's text and common attributes
pub async fn verify_element(session: &BrowserSession, selector: &str) -> Result<VisualCheck> {
    info!("Verifying element: {}", selector);

    let exists = session.element_exists(selector).await;

    if !exists {
        debug!("Element not found: {}", selector);
        return Ok(VisualCheck::not_found());
    }

    let text_content = session.text_content(selector).await.ok();
    let attributes = element_attributes(session, selector).await?;

    Ok(VisualCheck {
        element_exists: true,
        text_content,
        attributes,
    })
}

/// Get common attributes from an element
async fn element_attributes(
    session: &BrowserSession,
    selector: &str,
) -> Result<Vec<ElementAttribute>> {
    let script = format!(
        r#"
        (function() {{
            const el = document.querySelector("{}");
            if (!el) {{ return "[]"; }}
            const attrs = ['id', 'class', 'type', 'name', 'value', 'href', 'src', 'aria-label'];
            return JSON.stringify(attrs
                .map(name => ({{ name, value: el.getAttribute(name) }}))
                .filter(a => a.value !== null));
        }})()
        "#,
        selector
    );

    let result = session.evaluate_script(&script).await?;
    let json = result.as_str().unwrap_or("[]");

    let attributes: Vec<ElementAttribute> = serde_json::from_str(json).unwrap_or_default();

    Ok(attributes)
}

/// Verify the page loaded successfully
///
/// Checks document readiness and common error-page titles.
pub async fn verify_page_loaded(session: &BrowserSession) -> Result<bool> {
    debug!("Verifying page loaded successfully");

    let ready_state = session
        .evaluate_script("document.readyState")
        .await?
        .as_str()
        .unwrap_or("")
        .to_string();

    if ready_state != "complete" && ready_state != "interactive" {
        info!(
            "Page not ready at {} (readyState: {})",
            session.url().await.unwrap_or_default(),
            ready_state
        );
        return Ok(false);
    }

    let title = session.title().await?;
    let error_indicators = ["404", "Error", "Not Found", "403", "500"];

    if error_indicators.iter().any(|&e| title.contains(e)) {
        return Ok(false);
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_check_not_found() {
        let check = VisualCheck::not_found();
        assert!(!check.element_exists);
        assert!(check.failed());
        assert!(!check.passed());
        assert!(check.text_content.is_none());
        assert!(check.attributes.is_empty());
    }

    #[test]
    fn test_element_attribute_roundtrip() {
        let attrs: Vec<ElementAttribute> =
            serde_json::from_str(r#"[{"name": "aria-label", "value": "User menu"}]"#).unwrap();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "aria-label");
        assert_eq!(attrs[0].value, "User menu");
    }
}
