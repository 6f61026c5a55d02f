//! Input normalisation for the REPL.

/// Lower-cases a line and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
