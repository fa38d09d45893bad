//! JSON output helper.

use serde::Serialize;

/// Print a value as pretty JSON to stdout, unless quiet.
pub fn print_json<T: Serialize>(value: &T, quiet: bool) {
    if quiet {
        return;
    }
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("failed to encode JSON output: {e}"),
    }
}
