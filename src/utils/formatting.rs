//! Formatting utilities used for CLI and export outputs.

use regex::Regex;
use unicode_width::UnicodeWidthStr;

pub fn strip_ansi(s: &str) -> String {
    match Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}

/// Terminal columns taken by `s`, ignoring color escapes.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Pad to a display width, so CJK names line up in tables.
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Render an hour count as `1h30m`, `2h` or `15m`.
///
/// Minutes are rounded to the nearest whole minute before splitting, so
/// 1.999h reads `2h` rather than `1h60m`.
pub fn fmt_hours(hours: f64) -> String {
    let total = if hours.is_finite() && hours > 0.0 {
        (hours * 60.0).round() as i64
    } else {
        0
    };
    let hrs = total / 60;
    let mins = total % 60;

    if hrs == 0 {
        format!("{}m", mins)
    } else if mins == 0 {
        format!("{}h", hrs)
    } else {
        format!("{}h{}m", hrs, mins)
    }
}

pub fn fmt_money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}
