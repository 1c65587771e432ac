// Output formatting helpers for CLI commands

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a success message with checkmark
pub fn success(message: &str) {
    eprintln!("\x1b[1;32m  \u{2713}\x1b[0m {}", message);
}

/// Print a check/pass item
pub fn check(message: &str) {
    eprintln!("\x1b[32m  \u{2713}\x1b[0m {}", message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("\x1b[33m  !\x1b[0m {}", message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("\x1b[1;31merror:\x1b[0m {}", message);
}

/// Print an info message
pub fn info(message: &str) {
    eprintln!("\x1b[36m  i\x1b[0m {}", message);
}

/// Print a dim/muted message
pub fn dim(message: &str) {
    eprintln!("\x1b[2m{}\x1b[0m", message);
}
