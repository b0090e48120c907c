use std::cell::Cell;
use std::fmt::Display;

use crate::terminal::colors;
use colored::*;
use tracing::info;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;
pub const PRINT_TARGET: &str = "reconview::print";

/// One `key: value` row under a tree head.
pub type Detail = (String, ColoredString);

thread_local! {
    static KEY_WIDTH: Cell<usize> = const { Cell::new(0) }
}

#[macro_export]
macro_rules! rprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

/// Emits a line of command output. It bypasses the log filter and lands on stdout.
pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn banner(q_level: u8) {
    if q_level > 0 {
        return;
    }
    let title = format!("⟦ RECONVIEW v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let pad = "═".repeat(TOTAL_WIDTH.saturating_sub(title.width()) / 2);
    print(&format!(
        "{}{}{}",
        pad.bright_black(),
        title.bright_green().bold(),
        pad.bright_black()
    ));
}

/// Section rule with an upper-cased caption in the middle.
pub fn header(caption: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }
    let caption = format!("⟦ {} ⟧", caption.to_uppercase());
    let rule = TOTAL_WIDTH.saturating_sub(caption.width());
    let (left, right) = (rule / 2, rule - rule / 2);
    print(&format!(
        "{}{}{}",
        "─".repeat(left).bright_black(),
        caption.bright_green(),
        "─".repeat(right).bright_black()
    ));
}

pub fn fat_separator() {
    print(&"═".repeat(TOTAL_WIDTH).bright_black().to_string());
}

/// Sets the key column width used by [`aligned_line`].
pub fn set_key_width<'a>(keys: impl IntoIterator<Item = &'a str>) {
    KEY_WIDTH.set(keys.into_iter().map(str::len).max().unwrap_or(0));
}

fn key_width() -> usize {
    KEY_WIDTH.get()
}

/// `> Key.....: value`, padded to the width last passed to [`set_key_width`].
pub fn aligned_line(key: &str, value: impl Display) {
    let dots = ".".repeat((key_width() + 1).saturating_sub(key.len()));
    print_status(format!(
        "{}{}{} {}",
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.to_string().color(colors::TEXT_DEFAULT)
    ));
}

pub fn print_status(msg: impl AsRef<str>) {
    print(&format!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    ));
}

/// `[idx] name`, the head of a host, scan or IP block.
pub fn tree_head(idx: usize, name: &str) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    ));
}

/// Prints the rows of one block as a single-level tree with aligned colons.
pub fn details(rows: &[Detail]) {
    let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (i, (key, value)) in rows.iter().enumerate() {
        let branch = if i + 1 == rows.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(width + 1 - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{space}{msg}{space}"));
}

pub fn no_results(what: &str) {
    print(&format!("No {what} found").red().bold().to_string());
}
