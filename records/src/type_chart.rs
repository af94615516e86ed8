//! Raw type effectiveness table

use std::collections::{BTreeSet, HashMap};

use anyhow::Result;

use crate::ParseError;
use crate::table::parse_csv_line;

/// Attacking type -> defending type -> multiplier, exactly as stored
///
/// Values are not normalized here. The sheet encodes one half as `5`;
/// the damage side is responsible for reading that back as `0.5`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeChart {
    entries: HashMap<String, HashMap<String, f64>>,
}

impl TypeChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw value for a pair, replacing any earlier value
    pub fn insert(&mut self, attack: impl Into<String>, defend: impl Into<String>, raw: f64) {
        self.entries
            .entry(attack.into())
            .or_default()
            .insert(defend.into(), raw);
    }

    /// Builder form of [`TypeChart::insert`]
    pub fn with(mut self, attack: &str, defend: &str, raw: f64) -> Self {
        self.insert(attack, defend, raw);
        self
    }

    pub fn raw(&self, attack: &str, defend: &str) -> Option<f64> {
        self.entries.get(attack)?.get(defend).copied()
    }

    /// Whether the tag appears on either axis
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag) || self.entries.values().any(|row| row.contains_key(tag))
    }

    /// Every tag on either axis, sorted
    pub fn types(&self) -> Vec<&str> {
        let mut tags = BTreeSet::new();
        for (attack, row) in &self.entries {
            tags.insert(attack.as_str());
            tags.extend(row.keys().map(String::as_str));
        }
        tags.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse `attacker,defender,multiplier` rows; the first line is a header
pub fn parse_type_chart(text: &str) -> Result<TypeChart> {
    let mut chart = TypeChart::new();

    for (i, line) in text.split('\n').enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values = parse_csv_line(line);
        if values.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        if values.len() < 3 {
            return Err(ParseError::InvalidFormat(format!(
                "line {}: expected attacker,defender,multiplier",
                i + 1
            ))
            .into());
        }

        let raw = values[2]
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "line {}: multiplier {:?} is not a finite number",
                    i + 1,
                    values[2].trim()
                ))
            })?;

        chart.insert(values[0].trim(), values[1].trim(), raw);
    }

    Ok(chart)
}
