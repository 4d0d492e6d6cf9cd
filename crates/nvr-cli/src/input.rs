//! Identity input: command-line arguments, or stdin when there are none.

use std::io::BufRead;

use anyhow::{Context, Result};

/// Use `args` if any were given, otherwise read one identity per line from stdin.
pub fn collect_ids(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    let stdin = std::io::stdin();
    read_ids(stdin.lock()).context("Failed to read identities from stdin")
}

/// Read identities one per line, skipping blank lines and `#` comments.
pub fn read_ids(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut ids = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        ids.push(line.to_string());
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ids_skips_blank_and_comments() {
        let input = "bash-5.2-1.fc39\n\n# pinned\n  zsh-5.9-1.fc39  \n";
        let ids = read_ids(input.as_bytes()).unwrap();
        assert_eq!(ids, ["bash-5.2-1.fc39", "zsh-5.9-1.fc39"]);
    }

    #[test]
    fn test_args_take_precedence() {
        let ids = collect_ids(vec!["a-1-1".to_string()]).unwrap();
        assert_eq!(ids, ["a-1-1"]);
    }
}
