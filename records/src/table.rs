//! Header-keyed rows parsed from comma separated text

use crate::ParseError;
use anyhow::Result;

/// One data row of a table
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based line number in the source text
    pub line: usize,
    pub values: Vec<String>,
}

impl Row {
    /// Cell at a column index, trimmed. Missing trailing cells read as empty.
    pub fn get(&self, index: usize) -> &str {
        self.values.get(index).map(|v| v.trim()).unwrap_or("")
    }

    /// Cell at an optional column index
    pub fn get_opt(&self, index: Option<usize>) -> &str {
        index.map(|i| self.get(i)).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    /// Index of a column by exact header name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name)
            .ok_or_else(|| ParseError::MissingField(name.to_string()).into())
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Parse a whole sheet: first line is the header, every following non-blank
/// line whose first cell is non-empty becomes a row.
pub fn parse_table(text: &str) -> Table {
    let lines: Vec<&str> = text.split('\n').map(|l| l.trim_end_matches('\r')).collect();

    if lines.len() < 2 {
        return Table::default();
    }

    let headers = lines[0].split(',').map(|h| h.trim().to_string()).collect();

    let rows = lines
        .iter()
        .enumerate()
        .skip(1)
        .filter_map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            let values = parse_csv_line(line);
            if values.first().is_none_or(|v| v.is_empty()) {
                return None;
            }
            Some(Row { line: i + 1, values })
        })
        .collect();

    Table { headers, rows }
}

/// Split one line into fields, honouring double-quoted fields
///
/// A quote toggles quoted mode, `""` inside quotes is a literal quote and
/// commas only separate fields outside quotes.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// Lenient integer read: leading digits win, anything else is zero
///
/// A digit run too large for `u32` saturates at `u32::MAX`.
pub(crate) fn leading_int(s: &str) -> u32 {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}
