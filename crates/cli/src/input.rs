use anyhow::Context;
use std::io::BufRead;

/// One captured datagram, tagged with the 1-based input line it came from.
pub struct Datagram {
    pub line: usize,
    pub bytes: anyhow::Result<Vec<u8>>,
}

/// Yields every non-blank, non-comment line of `reader` as a decoded datagram.
pub fn read_datagrams<R: BufRead>(reader: R) -> impl Iterator<Item = anyhow::Result<Datagram>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() || trimmed.starts_with('#') {
                    None
                } else {
                    Some(Ok(Datagram {
                        line: idx + 1,
                        bytes: parse_hex(trimmed),
                    }))
                }
            }
            Err(e) => Some(Err(anyhow::Error::new(e).context("failed to read input"))),
        })
}

/// Parses hex digits, ignoring whitespace and `:` separators.
pub fn parse_hex(text: &str) -> anyhow::Result<Vec<u8>> {
    let digits: String = text
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != ':')
        .collect();
    hex::decode(&digits).with_context(|| format!("invalid hex datagram ({} digits)", digits.len()))
}
