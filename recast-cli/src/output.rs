//! Output formatting utilities.

/// Print a success message.
pub fn success(msg: &str) {
    println!("\x1b[32m{}\x1b[0m", msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("\x1b[31merror:\x1b[0m {}", msg);
}
