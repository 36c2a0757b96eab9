//! Color theme and styling for the sentiment explorer.

use crate::sentiment::Verdict;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    /// Accent for focused widgets and titles
    pub primary: Color,
    /// Borders, hints and other inactive elements
    pub muted: Color,
    pub text: Color,
    pub warning: Color,
    pub error: Color,
}

impl Theme {
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            muted: Color::DarkGray,
            text: Color::White,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }

    /// Display color for a verdict, using the verdict's own RGB value.
    pub fn verdict_color(&self, verdict: Verdict) -> Color {
        let (r, g, b) = verdict.rgb();
        Color::Rgb(r, g, b)
    }

    pub fn verdict_style(&self, verdict: Verdict) -> Style {
        Style::default()
            .fg(self.verdict_color(verdict))
            .add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.primary)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn button_style(&self, focused: bool) -> Style {
        if focused {
            Style::default()
                .fg(Color::Black)
                .bg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected row in the word table
    pub fn selection_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn dialog_border_style(&self, is_error: bool) -> Style {
        Style::default()
            .fg(if is_error { self.error } else { self.warning })
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_colors_match_palette() {
        let theme = Theme::default_theme();
        assert_eq!(
            theme.verdict_color(Verdict::Positive),
            Color::Rgb(0x2e, 0xcc, 0x71)
        );
        assert_eq!(
            theme.verdict_color(Verdict::Neutral),
            Color::Rgb(0x34, 0x98, 0xdb)
        );
        assert_eq!(
            theme.verdict_color(Verdict::Negative),
            Color::Rgb(0xe7, 0x4c, 0x3c)
        );
    }

    #[test]
    fn test_focus_changes_styles() {
        let theme = Theme::default_theme();
        assert_ne!(theme.border_style(true), theme.border_style(false));
        assert_ne!(theme.button_style(true), theme.button_style(false));
    }
}
