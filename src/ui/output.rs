//! Output context and text styling
//!
//! Color is applied only when stdout is a terminal and neither `NO_COLOR`
//! nor `SIFCTL_NO_COLOR` is set, so piped and CI output stays plain.

use is_terminal::IsTerminal;

/// How command results should be rendered
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub json: bool,
    pub color: bool,
}

impl OutputCtx {
    pub fn detect(json: bool) -> Self {
        let color = std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none()
            && std::env::var_os("SIFCTL_NO_COLOR").is_none();
        Self { json, color }
    }
}

fn paint(text: &str, code: &str, color: bool) -> String {
    if color {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

pub fn ok(text: &str, color: bool) -> String {
    paint(text, "32", color)
}

pub fn warn(text: &str, color: bool) -> String {
    paint(text, "33", color)
}

pub fn bad(text: &str, color: bool) -> String {
    paint(text, "31", color)
}

pub fn dim(text: &str, color: bool) -> String {
    paint(text, "2", color)
}

/// Human-readable byte size
pub fn human_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if value < 1024.0 {
            return format!("{value:.1} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.1} PB")
}
