//! Trait for providing theme configuration to the diff renderer.

use ratatui::style::Color;

/// Provides theme colors for the diff renderer.
///
/// Implement this trait to integrate the renderer with your application's
/// theme system. Only the addition and deletion backgrounds are required.
///
/// # Example
///
/// ```
/// use review_diff::ThemeProvider;
/// use ratatui::style::Color;
///
/// struct HighContrast;
///
/// impl ThemeProvider for HighContrast {
///     fn addition_background(&self) -> Color {
///         Color::Green
///     }
///
///     fn deletion_background(&self) -> Color {
///         Color::Red
///     }
/// }
///
/// assert_eq!(HighContrast.hover_background(), Color::Rgb(45, 45, 60));
/// ```
pub trait ThemeProvider: Send + Sync {
    /// Background color for added lines.
    fn addition_background(&self) -> Color;

    /// Background color for removed lines.
    fn deletion_background(&self) -> Color;

    /// Background color for context lines.
    fn context_background(&self) -> Color {
        Color::Reset
    }

    /// Background color for hunk header rows.
    fn hunk_header_background(&self) -> Color {
        Color::Rgb(40, 40, 60)
    }

    /// Foreground color for hunk header text.
    fn hunk_header_foreground(&self) -> Color {
        Color::Cyan
    }

    /// Foreground color for file header rows.
    fn file_header_foreground(&self) -> Color {
        Color::White
    }

    /// Foreground color for line numbers.
    fn line_number_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Background color for the hovered row.
    fn hover_background(&self) -> Color {
        Color::Rgb(45, 45, 60)
    }

    /// Background color for selected and dragged rows.
    fn selection_background(&self) -> Color {
        Color::Rgb(60, 60, 80)
    }

    /// Foreground color for the `+` comment affordance.
    fn comment_affordance_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Foreground color for inline draft rows.
    fn draft_foreground(&self) -> Color {
        Color::Yellow
    }
}

/// Default theme with sensible dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {
    fn addition_background(&self) -> Color {
        Color::Rgb(30, 60, 30) // dark green
    }

    fn deletion_background(&self) -> Color {
        Color::Rgb(60, 30, 30) // dark red
    }
}
