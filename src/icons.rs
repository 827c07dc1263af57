//! Status marker themes used when rendering items
//!
//! The ASCII theme produces the canonical `[ ]` / `[X]` markers. Unicode and
//! emoji themes are available for terminals that can display them.

use serde::{Deserialize, Serialize};

/// Marker theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji markers
    Emoji,
    /// Unicode symbols
    Unicode,
    /// ASCII brackets
    #[default]
    Ascii,
}

/// Markers shown in front of an item title
#[derive(Debug, Clone, Copy)]
pub struct StatusMarkers {
    pub pending: &'static str,
    pub done: &'static str,
}

/// Provides markers for the selected theme
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next theme: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    #[must_use]
    pub fn markers(&self) -> StatusMarkers {
        match self.current_theme {
            IconTheme::Emoji => StatusMarkers {
                pending: "🔳",
                done: "✅",
            },
            IconTheme::Unicode => StatusMarkers {
                pending: "□",
                done: "✓",
            },
            IconTheme::Ascii => StatusMarkers {
                pending: "[ ]",
                done: "[X]",
            },
        }
    }

    #[must_use]
    pub fn pending(&self) -> &'static str {
        self.markers().pending
    }

    #[must_use]
    pub fn done(&self) -> &'static str {
        self.markers().done
    }

    /// Marker for the given completion state
    #[must_use]
    pub fn status(&self, done: bool) -> &'static str {
        if done {
            self.done()
        } else {
            self.pending()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_status_follows_flag() {
        let service = IconService::new(IconTheme::Unicode);
        assert_eq!(service.status(true), "✓");
        assert_eq!(service.status(false), "□");
    }

    #[test]
    fn test_theme_cycling() {
        let mut service = IconService::new(IconTheme::Ascii);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Unicode);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Emoji);

        service.cycle_icon_theme();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }
}
