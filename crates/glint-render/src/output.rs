//! Output mode selection for terminal adapters.

/// Controls whether terminal output carries escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Styled when the terminal supports it (`console::colors_enabled()`).
    #[default]
    Auto,
    /// Always styled, even when not writing to a terminal.
    Term,
    /// Never styled: text only.
    Text,
}

impl OutputMode {
    /// Returns `true` if escape sequences should be written.
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::colors_enabled(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

impl std::str::FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(OutputMode::Auto),
            "term" => Ok(OutputMode::Term),
            "text" => Ok(OutputMode::Text),
            other => Err(format!("unknown output mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes() {
        assert!(OutputMode::Term.should_use_color());
        assert!(!OutputMode::Text.should_use_color());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("term".parse::<OutputMode>(), Ok(OutputMode::Term));
        assert!("loud".parse::<OutputMode>().is_err());
    }
}
