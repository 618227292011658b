//! Extension points for the host application.

mod theme_provider;

pub use theme_provider::{DefaultTheme, ThemeProvider};
