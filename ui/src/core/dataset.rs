//! Comma-delimited dataset parsing.
//!
//! The format is deliberately plain: no quoting, no escaping. The first line
//! names the columns; every following line is one record zipped against
//! those names by position.

use std::collections::HashMap;
use std::fmt;

/// A single parsed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Coerce a trimmed cell: numeric when the whole cell is a number.
    ///
    /// Accepts what a browser's `Number()` accepts: signed decimals with an
    /// optional exponent, unsigned `0x`/`0o`/`0b` integers and `Infinity`.
    pub fn parse(cell: &str) -> Self {
        match parse_number(cell) {
            Some(number) => Self::Number(number),
            None => Self::Text(cell.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            Self::Text(_) => None,
        }
    }
}

fn parse_number(cell: &str) -> Option<f64> {
    if let Some(number) = parse_radix_integer(cell) {
        return Some(number);
    }
    match cell {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // `f64::from_str` also takes `inf`, `nan` and friends; those stay text.
    if cell.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    cell.parse::<f64>().ok()
}

fn parse_radix_integer(cell: &str) -> Option<f64> {
    let (radix, digits) = match cell.get(..2)? {
        "0x" | "0X" => (16, &cell[2..]),
        "0o" | "0O" => (8, &cell[2..]),
        "0b" | "0B" => (2, &cell[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One dataset row. Fields absent from a short row are simply missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(Value::as_number)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// The full record set, in load order. Never mutated after parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    pub fn parse(text: &str) -> Self {
        let mut lines = text.trim().lines();
        let headers: Vec<String> = match lines.next() {
            Some(line) => line.split(',').map(|h| h.trim().to_string()).collect(),
            None => return Self::default(),
        };

        let records: Vec<Record> = lines
            .map(|line| {
                line.split(',')
                    .map(str::trim)
                    .zip(headers.iter())
                    .map(|(cell, header)| (header.clone(), Value::parse(cell)))
                    .collect::<Record>()
            })
            .collect();

        Self { headers, records }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
