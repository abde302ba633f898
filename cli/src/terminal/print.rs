use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

use crate::terminal::logging::PRINT_TARGET;

pub const TOTAL_WIDTH: usize = 64;

const PRIMARY: Color = Color::BrightGreen;
const ACCENT: Color = Color::Cyan;
const SEPARATOR: Color = Color::BrightBlack;
const TEXT_DEFAULT: Color = Color::White;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str) {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = UnicodeWidthStr::width(formatted.as_str());

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: String = format!(
        "{}{}{}",
        "─".repeat(left).color(SEPARATOR),
        formatted.color(PRIMARY),
        "─".repeat(right).color(SEPARATOR)
    );

    print(&line);
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    let prefix: ColoredString = ">".color(SEPARATOR);
    let message: String = format!("{} {}", prefix, msg.as_ref().color(TEXT_DEFAULT));
    print(&message);
}

/// One numbered entry, with an optional dimmed annotation after it.
pub fn entry(idx: usize, value: &str, note: Option<&str>) {
    let idx_str: String = format!("[{}]", idx.to_string().color(ACCENT));
    let mut output: String = format!("{} {}", idx_str.color(SEPARATOR), value.color(PRIMARY));
    if let Some(note) = note {
        output.push_str(&format!(" {}", note.color(SEPARATOR)));
    }
    print(&output);
}

pub fn end_of_program() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(SEPARATOR)));
}
