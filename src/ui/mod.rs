use colored::Colorize;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE: AtomicBool = AtomicBool::new(false);
static QUIET: AtomicBool = AtomicBool::new(false);

/// Initialize color settings (must run before any output).
///
/// Disables colors when stdout is not a terminal or NO_COLOR is set.
pub fn init_colors() {
    if std::env::var_os("NO_COLOR").is_some() || !atty::is(atty::Stream::Stdout) {
        colored::control::set_override(false);
    }
}

pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn set_quiet(enabled: bool) {
    QUIET.store(enabled, Ordering::Relaxed);
}

pub fn header(title: &str) {
    if !QUIET.load(Ordering::Relaxed) {
        println!("\n{}", title.bold().underline());
    }
}

pub fn success(msg: &str) {
    if !QUIET.load(Ordering::Relaxed) {
        println!("{} {}", "✓".green().bold(), msg);
    }
}

pub fn info(msg: &str) {
    if !QUIET.load(Ordering::Relaxed) {
        println!("{} {}", "ℹ".blue().bold(), msg);
    }
}

pub fn warning(msg: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg);
}

/// Diagnostic channel for absorbed failures; only visible with --verbose.
pub fn debug(msg: &str) {
    if VERBOSE.load(Ordering::Relaxed) {
        eprintln!("{} {}", "·".bright_black(), msg.bright_black());
    }
}

pub fn keyval(key: &str, val: &str) {
    if !QUIET.load(Ordering::Relaxed) {
        println!("{}: {}", key.bold(), val);
    }
}
