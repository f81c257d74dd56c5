//! Console message display

use bridge_traits::MessageDisplay;
use std::io::Write;
use tracing::debug;

/// Prints user-facing messages to stdout, the desktop stand-in for a toast.
#[derive(Debug, Clone, Default)]
pub struct ConsoleMessageDisplay {
    prefix: Option<String>,
}

impl ConsoleMessageDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every message, e.g. the app name.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    fn format_message(&self, message: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("[{}] {}", prefix, message),
            None => message.to_string(),
        }
    }
}

impl MessageDisplay for ConsoleMessageDisplay {
    fn show(&self, message: &str) {
        let line = self.format_message(message);
        debug!(message = %line, "Showing message");

        // Closed stdout is not worth failing a fire-and-forget call over.
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_message() {
        assert_eq!(ConsoleMessageDisplay::new().format_message("Saved"), "Saved");
        assert_eq!(
            ConsoleMessageDisplay::with_prefix("Catalog").format_message("Saved"),
            "[Catalog] Saved"
        );
    }

    #[test]
    fn test_show_does_not_panic() {
        ConsoleMessageDisplay::new().show("Hello from desktop");
    }
}
