//! UI utilities for the terminal front end.

use std::io::Write;

/// Prompt shown by the line reader
pub const PROMPT: &str = "machi> ";

/// Print command output
pub fn print_output(text: &str) {
    print!("{}", text);
    std::io::stdout().flush().ok();
}

/// Print a message that arrived while the user may be typing, then redisplay the prompt
pub fn print_async(text: &str) {
    print!("\n{}{}", text, PROMPT);
    std::io::stdout().flush().ok();
}
