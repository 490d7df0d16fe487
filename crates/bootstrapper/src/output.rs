//! Terminal output utilities
//!
//! Status lines share the glyphs of [`Notice`] severities. Warnings and
//! errors go to stderr so piped stdout stays clean.

use bootstrapper_core::Notice;
use console::{style, StyledObject};

/// Styled glyph for a notice severity
fn glyph(notice: &Notice<'_>) -> StyledObject<&'static str> {
    match notice {
        Notice::Info(_) => style("ℹ").blue().bold(),
        Notice::Success(_) => style("✓").green().bold(),
        Notice::Warning(_) => style("⚠").yellow().bold(),
        Notice::Error(_) => style("✗").red().bold(),
    }
}

/// Print one status line
pub fn notice(notice: Notice<'_>) {
    let line = format!("{} {}", glyph(&notice), notice.message());
    match notice {
        Notice::Info(_) | Notice::Success(_) => println!("{}", line),
        Notice::Warning(_) | Notice::Error(_) => eprintln!("{}", line),
    }
}

pub fn success(msg: &str) {
    notice(Notice::Success(msg));
}

pub fn info(msg: &str) {
    notice(Notice::Info(msg));
}

/// Section title
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Indented `key: value` row with a dimmed key
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}
