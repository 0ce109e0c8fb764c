//! Reader for plain-text symbol files
//!
//! One binding per line, `NAME ADDRESS`, with `;` or `//` comments:
//!
//! ```text
//! ; keyboard loop
//! START   x3000
//! POLL    x3004   // wait for input
//! COUNT   #12
//! ```
//!
//! Parsing is zero-copy: names are slices of the input lines.

use thiserror::Error;

use crate::symbol_table::Address;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: missing address after `{name}`")]
    MissingAddress { line: usize, name: String },

    #[error("line {line}: invalid address `{text}`")]
    InvalidAddress { line: usize, text: String },

    #[error("line {line}: unexpected `{text}` after address")]
    TrailingInput { line: usize, text: String },

    #[error("line {line}: invalid symbol name `{text}`")]
    InvalidName { line: usize, text: String },

    #[error("no current line available")]
    InvalidState,
}

/// Cursor over the bindings in a symbol file
pub struct SymbolLines<'a> {
    lines: std::iter::Enumerate<std::slice::Iter<'a, String>>,
    current_line: &'a str,
    line_number: usize,
}

impl<'a> SymbolLines<'a> {
    /// Creates a reader over already-split lines
    #[inline]
    #[must_use]
    pub fn from_lines(lines: &'a [String]) -> Self {
        Self {
            lines: lines.iter().enumerate(),
            current_line: "",
            line_number: 0,
        }
    }

    /// Advances to the next binding, skipping comments and blank lines
    pub fn advance(&mut self) -> bool {
        for (idx, line) in self.lines.by_ref() {
            let trimmed = Self::strip_comment(line).trim();
            if !trimmed.is_empty() {
                self.current_line = trimmed;
                self.line_number = idx + 1;
                return true;
            }
        }

        self.current_line = "";
        self.line_number = 0;
        false
    }

    /// Cuts the line at the first `;` or `//`
    fn strip_comment(line: &str) -> &str {
        let bytes = line.as_bytes();

        for i in 0..bytes.len() {
            if bytes[i] == b';' || (bytes[i] == b'/' && bytes.get(i + 1) == Some(&b'/')) {
                return &line[..i];
            }
        }

        line
    }

    /// 1-based number of the current line
    #[inline]
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn fields(&self) -> Result<(&'a str, Option<&'a str>), ParseError> {
        if self.line_number == 0 {
            return Err(ParseError::InvalidState);
        }
        let mut parts = self.current_line.split_whitespace();
        let name = parts.next().ok_or(ParseError::InvalidState)?;
        let addr = parts.next();
        if let Some(extra) = parts.next() {
            return Err(ParseError::TrailingInput {
                line: self.line_number,
                text: extra.to_string(),
            });
        }
        Ok((name, addr))
    }

    /// Name of the current binding
    ///
    /// # Errors
    /// [`ParseError::InvalidName`] unless the name starts with a letter or `_`
    /// and continues with letters, digits or `_`.
    pub fn name(&self) -> Result<&'a str, ParseError> {
        let (name, _) = self.fields()?;
        if is_valid_name(name) {
            Ok(name)
        } else {
            Err(ParseError::InvalidName {
                line: self.line_number,
                text: name.to_string(),
            })
        }
    }

    /// Address of the current binding
    pub fn address(&self) -> Result<Address, ParseError> {
        let (name, addr) = self.fields()?;
        let text = addr.ok_or_else(|| ParseError::MissingAddress {
            line: self.line_number,
            name: name.to_string(),
        })?;
        parse_address(text).ok_or_else(|| ParseError::InvalidAddress {
            line: self.line_number,
            text: text.to_string(),
        })
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parses an LC-3 style address literal
///
/// `x3000`, `X3000` and `0x3000` are hex; `#12` and `12` are decimal.
///
/// # Example
/// ```
/// use symtab::symfile::parse_address;
///
/// assert_eq!(parse_address("x3000"), Some(0x3000));
/// assert_eq!(parse_address("#16"), Some(16));
/// assert_eq!(parse_address("x10000"), None);
/// ```
#[must_use]
pub fn parse_address(text: &str) -> Option<Address> {
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .or_else(|| text.strip_prefix('x'))
        .or_else(|| text.strip_prefix('X'))
    {
        (hex, 16)
    } else {
        (text.strip_prefix('#').unwrap_or(text), 10)
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    Address::from_str_radix(digits, radix).ok()
}
