//! Output styling for the session
//!
//! All styling decisions live here: the session asks the theme to render
//! headings, errors and confirmations, and the theme either applies ANSI
//! styles (for a tty) or passes the text through untouched (for pipes and
//! scripted tests).

use crossterm::style::Stylize;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    colored: bool,
}

impl Theme {
    /// No styling; output is byte-for-byte the plain text
    pub fn plain() -> Self {
        Theme { colored: false }
    }

    /// ANSI-styled output for interactive terminals
    pub fn colored() -> Self {
        Theme { colored: true }
    }

    /// Menu titles and table headers
    pub fn heading(&self, text: &str) -> String {
        if self.colored {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Failure reports
    pub fn error(&self, text: &str) -> String {
        if self.colored {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Confirmations
    pub fn success(&self, text: &str) -> String {
        if self.colored {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_theme_passes_text_through() {
        let theme = Theme::plain();
        assert_eq!(theme.heading("Main Menu"), "Main Menu");
        assert_eq!(theme.error("oops"), "oops");
        assert_eq!(theme.success("done"), "done");
    }

    #[test]
    fn test_colored_theme_emits_ansi() {
        let theme = Theme::colored();
        assert!(theme.error("oops").contains("oops"));
        assert_ne!(theme.error("oops"), "oops");
    }
}
