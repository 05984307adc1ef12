//! Runtime settings for the prompt loop and logging
//!
//! The log filter itself comes from `RUST_LOG` through `EnvFilter`; only its
//! fallback lives here.

pub const DEFAULT_PROMPT: &str = "Enter what you want to convert (or exit): ";
pub const DEFAULT_EXIT_KEYWORD: &str = "exit";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How the loop talks to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// A line equal to this, after stripping the line terminator, ends the session
    pub exit_keyword: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            exit_keyword: DEFAULT_EXIT_KEYWORD.to_string(),
        }
    }
}
