//! Move records

use std::fmt;

use anyhow::{Context, Result};

use crate::table::{Row, Table, leading_int, parse_table};

/// Damage class of a move
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveClass {
    Physical,
    Special,
    Other,
    /// Written as `Self` in the sheet
    SelfTarget,
    /// Any tag the editor does not know, kept verbatim
    Unrecognized(String),
}

impl MoveClass {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "Physical" => MoveClass::Physical,
            "Special" => MoveClass::Special,
            "Other" => MoveClass::Other,
            "Self" => MoveClass::SelfTarget,
            other => MoveClass::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MoveClass::Physical => "Physical",
            MoveClass::Special => "Special",
            MoveClass::Other => "Other",
            MoveClass::SelfTarget => "Self",
            MoveClass::Unrecognized(s) => s,
        }
    }

    /// Physical and Special moves deal damage; nothing else does
    pub fn is_damaging(&self) -> bool {
        matches!(self, MoveClass::Physical | MoveClass::Special)
    }
}

impl fmt::Display for MoveClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric move field that may be marked unknown (`?`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveValue {
    Known(u32),
    Unknown,
}

impl MoveValue {
    pub const UNKNOWN_MARKER: &'static str = "?";

    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s == Self::UNKNOWN_MARKER {
            MoveValue::Unknown
        } else {
            MoveValue::Known(leading_int(s))
        }
    }

    pub fn known(&self) -> Option<u32> {
        match self {
            MoveValue::Known(v) => Some(*v),
            MoveValue::Unknown => None,
        }
    }
}

impl Default for MoveValue {
    fn default() -> Self {
        MoveValue::Known(0)
    }
}

impl fmt::Display for MoveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveValue::Known(v) => write!(f, "{}", v),
            MoveValue::Unknown => f.write_str(Self::UNKNOWN_MARKER),
        }
    }
}

/// One row of the move sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub name: String,
    /// Owning monster name. Not checked against the monster sheet.
    pub mon: String,
    pub move_type: String,
    pub class: MoveClass,
    pub power: MoveValue,
    pub accuracy: MoveValue,
    pub stamina: MoveValue,
    /// Free-form implementation status from the editor
    pub implementation: Option<String>,
}

impl Move {
    pub fn new(
        name: impl Into<String>,
        mon: impl Into<String>,
        move_type: impl Into<String>,
        class: MoveClass,
        power: MoveValue,
    ) -> Self {
        Self {
            name: name.into(),
            mon: mon.into(),
            move_type: move_type.into(),
            class,
            power,
            accuracy: MoveValue::default(),
            stamina: MoveValue::default(),
            implementation: None,
        }
    }
}

struct MoveColumns {
    name: usize,
    mon: usize,
    move_type: usize,
    class: usize,
    power: usize,
    accuracy: Option<usize>,
    stamina: Option<usize>,
    implementation: Option<usize>,
}

impl MoveColumns {
    fn locate(table: &Table) -> Result<Self> {
        Ok(Self {
            name: table.require_column("Name")?,
            mon: table.require_column("Mon")?,
            move_type: table.require_column("Type")?,
            class: table.require_column("Class")?,
            power: table.require_column("Power")?,
            accuracy: table.column("Accuracy"),
            stamina: table.column("Stamina"),
            implementation: table.column("Implementation"),
        })
    }

    fn read(&self, row: &Row) -> Move {
        let implementation = row.get_opt(self.implementation);
        Move {
            name: row.get(self.name).to_string(),
            mon: row.get(self.mon).to_string(),
            move_type: row.get(self.move_type).to_string(),
            class: MoveClass::parse(row.get(self.class)),
            power: MoveValue::parse(row.get(self.power)),
            accuracy: MoveValue::parse(row.get_opt(self.accuracy)),
            stamina: MoveValue::parse(row.get_opt(self.stamina)),
            implementation: (!implementation.is_empty()).then(|| implementation.to_string()),
        }
    }
}

/// Parse the move sheet
pub fn parse_moves(text: &str) -> Result<Vec<Move>> {
    let table = parse_table(text);
    if table.headers.is_empty() {
        return Ok(Vec::new());
    }

    let columns = MoveColumns::locate(&table).context("Failed to read move sheet header")?;
    Ok(table.rows.iter().map(|row| columns.read(row)).collect())
}
