//! Colors and glyphs for terminal output.

use console::Style;

/// Prefix for a tool that is installed or a step that finished.
pub const SUCCESS_GLYPH: &str = "✓";
/// Prefix for warnings.
pub const WARNING_GLYPH: &str = "⚠";
/// Prefix for errors.
pub const ERROR_GLYPH: &str = "✗";

/// Styles for terminal output.
#[derive(Debug, Clone)]
pub struct SetupTheme {
    /// Success lines (green).
    pub success: Style,
    /// Warning lines (orange).
    pub warning: Style,
    /// Error lines (bold red).
    pub error: Style,
    /// Secondary text such as resolved paths.
    pub dim: Style,
    /// The installer title.
    pub header: Style,
    /// `=` rules around the title and banner.
    pub rule: Style,
}

impl Default for SetupTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupTheme {
    /// The colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold(),
            rule: Style::new().dim(),
        }
    }

    /// A theme that emits no escape codes.
    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            success: none.clone(),
            warning: none.clone(),
            error: none.clone(),
            dim: none.clone(),
            header: none.clone(),
            rule: none,
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        glyph_line(&self.success, SUCCESS_GLYPH, msg)
    }

    pub fn format_warning(&self, msg: &str) -> String {
        glyph_line(&self.warning, WARNING_GLYPH, msg)
    }

    pub fn format_error(&self, msg: &str) -> String {
        glyph_line(&self.error, ERROR_GLYPH, msg)
    }

    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }

    /// A rule of `width` `=` characters.
    pub fn format_rule(&self, width: usize) -> String {
        self.rule.apply_to("=".repeat(width)).to_string()
    }
}

fn glyph_line(style: &Style, glyph: &str, msg: &str) -> String {
    style.apply_to(format!("{} {}", glyph, msg)).to_string()
}

/// Whether stdout should get colors: it is a terminal and `NO_COLOR` is unset.
pub fn should_use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::Term::stdout().is_term()
}
