//! Tokenizer and codec for the `order=` settings line
//!
//! The line holds quoted name / on-off pairs in panel order:
//!
//! ```text
//! order="Super"=on,"Search Field"=off,"Space"=on,
//! ```
//!
//! Parsing is best effort. A malformed token sequence aborts the rest of
//! the line and keeps the pairs read so far; losing the user's whole
//! saved order over one corrupt pair would be worse than applying a
//! partial one.

use crate::catalog::{TaskbarItem, name_for_container};
use crate::constants::order::{BLUETOOTH_NAME, ORDER_KEY, SPACER_NAME};

/// Token kinds the scanner distinguishes at the cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    Quote,
    Equal,
    Comma,
    Text,
    EndOfLine,
}

fn classify(c: char) -> Token {
    match c {
        '"' => Token::Quote,
        '=' => Token::Equal,
        ',' => Token::Comma,
        _ => Token::Text,
    }
}

/// Cursor over one settings line with a read-until primitive.
pub(crate) struct LineScanner<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> LineScanner<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Kind of the character at the cursor.
    pub(crate) fn current_token(&self) -> Token {
        match self.line[self.pos..].chars().next() {
            Some(c) => classify(c),
            None => Token::EndOfLine,
        }
    }

    /// Consume characters until the next token of `kind` (or end of
    /// line) and return them. The delimiter itself is not consumed.
    pub(crate) fn until(&mut self, kind: Token) -> &'a str {
        let start = self.pos;
        while let Some(c) = self.line[self.pos..].chars().next() {
            if classify(c) == kind {
                break;
            }
            self.pos += c.len_utf8();
        }
        &self.line[start..self.pos]
    }

    /// Consume the cursor character if it is the expected token.
    pub(crate) fn eat(&mut self, kind: Token) -> bool {
        match self.line[self.pos..].chars().next() {
            Some(c) if classify(c) == kind => {
                self.pos += c.len_utf8();
                true
            }
            _ => false,
        }
    }
}

/// Read the key of a settings line (text before the first `=`, trimmed),
/// leaving the scanner at the `=` delimiter.
pub(crate) fn line_key<'a>(scanner: &mut LineScanner<'a>) -> &'a str {
    scanner.until(Token::Equal).trim()
}

/// Whether a line carries the order key.
pub(crate) fn is_order_line(key: &str) -> bool {
    key == ORDER_KEY
}

/// Parse `"Name"=on,` pairs from the remainder of an order line into
/// `out`, assigning each accepted pair `target_index` = its position in
/// the parse-order list.
///
/// Duplicate names keep their first occurrence; spacers are always
/// appended since they are not unique. Any missing delimiter stops the
/// scan and keeps the partial result.
pub(crate) fn parse_order_pairs(scanner: &mut LineScanner<'_>, out: &mut Vec<TaskbarItem>) {
    while scanner.current_token() != Token::EndOfLine {
        scanner.until(Token::Quote);
        if !scanner.eat(Token::Quote) {
            break;
        }
        let name = scanner.until(Token::Quote);
        if !scanner.eat(Token::Quote) {
            break;
        }
        scanner.until(Token::Equal);
        if !scanner.eat(Token::Equal) {
            break;
        }
        let value = scanner.until(Token::Comma).trim();

        let already_parsed = out.iter().any(|item| item.name == name);
        if already_parsed && name != SPACER_NAME {
            continue;
        }
        let target_index = out.len() as i32;
        out.push(TaskbarItem::new(name, value == "on", target_index));
    }
}

/// Render the live panel's child list as a single order line.
///
/// The panel is ground truth for what was actually applied, so pairs are
/// written in panel child order from each child's exists flag. Bluetooth
/// is the exception: its pair comes from the process-wide flag, because
/// the panel's own exists state for it is gated by the bluetooth
/// subsystem and may lag user intent. Unknown panel children are
/// silently skipped.
pub(crate) fn write_order_line(children: &[(String, bool)], bluetooth_enabled: bool) -> String {
    let mut line = String::from("order=");
    for (container, exists) in children {
        let Some(name) = name_for_container(container) else {
            continue;
        };
        let on = if name == BLUETOOTH_NAME {
            bluetooth_enabled
        } else {
            *exists
        };
        line.push('"');
        line.push_str(name);
        line.push_str("\"=");
        line.push_str(if on { "on," } else { "off," });
    }
    line
}
