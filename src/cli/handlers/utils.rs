use anyhow::Result;
use std::io::{self, Write};

/// Convert a 1-based recipe number from the command line to an index.
pub fn number_to_index(number: usize) -> Result<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| anyhow::anyhow!("Recipe numbers start at 1"))
}

/// Ask a yes/no question on stdout; anything but `y` means no.
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().eq_ignore_ascii_case("y"))
}
