//! Helpful error types for CLI commands
//!
//! Every error includes:
//! - What went wrong
//! - Context about the situation
//! - Suggestions for how to fix it

use serde::Serialize;
use std::fmt;
use std::path::Path;

/// An error with helpful context and suggestions
#[derive(Debug, Serialize)]
pub struct HelpfulError {
    /// The main error message
    pub message: String,
    /// Additional context about what was happening
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Suggestions for how to fix the error
    pub suggestions: Vec<String>,
}

impl HelpfulError {
    /// Create a new helpful error
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
        }
    }

    /// Add context to the error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a suggestion for fixing the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Add multiple suggestions
    pub fn with_suggestions(mut self, suggestions: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.suggestions.extend(suggestions.into_iter().map(|s| s.into()));
        self
    }

    // === Common error constructors ===

    /// Payload file does not exist
    pub fn file_not_found(path: &Path) -> Self {
        Self::new(format!("File not found: {}", path.display()))
            .with_context("The specified payload file does not exist")
            .with_suggestions([
                format!("TRY: Check if the file exists: ls -la {}", path.display()),
                format!("TRY: Look for similar files: ls {}",
                    path.parent().map(|p| p.display().to_string()).unwrap_or_else(|| ".".to_string())),
            ])
    }

    /// File cannot be read (permission or encoding error)
    pub fn cannot_read_file(path: &Path, reason: &str) -> Self {
        Self::new(format!("Cannot read file: {}", path.display()))
            .with_context(reason.to_string())
            .with_suggestions([
                format!("TRY: Check file permissions: ls -la {}", path.display()),
                "TRY: Ensure the file is UTF-8 encoded JSON".to_string(),
            ])
    }

    /// Payload is not in the expected shape
    pub fn invalid_payload(path: &Path, reason: &str) -> Self {
        Self::new(format!("Invalid payload: {}", path.display()))
            .with_context(reason.to_string())
            .with_suggestions([
                "TRY: Product files hold {\"urunler\": [...]} or a bare array of products".to_string(),
                "TRY: Business files hold {\"basarili\": true, \"isletmeler\": [...]}".to_string(),
            ])
    }

    /// Business lookup did not resolve
    pub fn business_not_found(short_name: &str) -> Self {
        Self::new(format!("İşletme bulunamadı: \"{}\"", short_name))
            .with_context(format!(
                "No business named \"{}\" is registered in the lookup response",
                short_name
            ))
            .with_suggestions([
                "TRY: Check that the response has \"basarili\": true".to_string(),
                "TRY: Check the short name in the request URL".to_string(),
            ])
    }

    /// Requested top category is not part of the taxonomy
    pub fn unknown_category(name: &str, available: &[&str]) -> Self {
        Self::new(format!("Unknown category: \"{}\"", name))
            .with_context(format!("Available categories: {}", available.join(", ")))
            .with_suggestion("TRY: List categories: qrmenu categories <PRODUCTS>")
    }

    /// Config file is malformed
    pub fn invalid_config(path: &Path, reason: &str) -> Self {
        Self::new(format!("Invalid config: {}", path.display()))
            .with_context(reason.to_string())
            .with_suggestions([
                "TRY: Valid keys: [display] placeholder_image, currency_suffix".to_string(),
                format!("TRY: Move the file aside: mv {0} {0}.bak", path.display()),
            ])
    }
}

impl fmt::Display for HelpfulError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ERROR: {}", self.message)?;

        if let Some(ctx) = &self.context {
            writeln!(f, "CONTEXT: {}", ctx)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            for suggestion in &self.suggestions {
                writeln!(f, "  {}", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for HelpfulError {}

/// Print a command failure as a JSON document on stdout.
pub fn print_json_error(err: &anyhow::Error) {
    let payload = match err.downcast_ref::<HelpfulError>() {
        Some(helpful) => serde_json::json!({ "error": helpful }),
        None => serde_json::json!({
            "error": {
                "message": format!("{:#}", err),
                "suggestions": [],
            }
        }),
    };
    match serde_json::to_string_pretty(&payload) {
        Ok(text) => println!("{}", text),
        Err(_) => eprintln!("{:?}", err),
    }
}
