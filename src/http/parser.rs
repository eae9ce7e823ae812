use std::fmt;

use tracing::debug;

use crate::http::headers::Headers;

/// Upper bound on the size of a header block accepted by [`parse_headers`].
pub const MAX_HEADER_BLOCK_SIZE: usize = 8192;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParserError {
    // 1-based line numbers
    MissingColon { line: usize },
    EmptyName { line: usize },

    TooLarge,
}

impl fmt::Display for ParserError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserError::MissingColon { line } => write!(f, "line {}: missing ':' separator", line),
            ParserError::EmptyName { line } => write!(f, "line {}: empty header name", line),
            ParserError::TooLarge => write!(
                f,
                "header block exceeds {} bytes",
                MAX_HEADER_BLOCK_SIZE
            ),
        }
    }
}

impl std::error::Error for ParserError {}

/// Parses a raw header block, one `name: value` pair per line.
///
/// Lines may end in `\n` or `\r\n`; blank lines are ignored. Names and values
/// are trimmed and appended in order, so repeated names are all kept.
pub fn parse_headers(block: &str) -> Result<Headers, ParserError> {
    if block.len() > MAX_HEADER_BLOCK_SIZE {
        debug!(size = block.len(), "header block too large");
        return Err(ParserError::TooLarge);
    }

    let mut headers = Headers::new();
    for (i, line) in block.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }

        let (name, value) = match line.split_once(':') {
            Some(pair) => pair,
            None => {
                debug!(line = i + 1, "header line without separator");
                return Err(ParserError::MissingColon { line: i + 1 });
            }
        };

        let name = name.trim();
        if name.is_empty() {
            debug!(line = i + 1, "empty header name");
            return Err(ParserError::EmptyName { line: i + 1 });
        }

        headers.append(name, value.trim());
    }

    Ok(headers)
}
