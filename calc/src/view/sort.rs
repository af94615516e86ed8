//! Sort state shared by the ranked views

use std::cmp::Ordering;

use crate::query::IncomingMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Apply this direction to an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Header arrow shown next to the sorted column
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Text,
    Numeric,
}

/// A column a view can be sorted by
pub trait SortKey: Copy + PartialEq {
    fn kind(&self) -> KeyKind;

    /// Direction used the first time this key is selected
    ///
    /// Numeric columns start best-first, text columns start A to Z.
    fn default_direction(&self) -> SortDirection {
        match self.kind() {
            KeyKind::Numeric => SortDirection::Descending,
            KeyKind::Text => SortDirection::Ascending,
        }
    }
}

/// Which key a view is sorted by and in which direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    pub key: Option<K>,
    pub direction: SortDirection,
}

impl<K: SortKey> SortState<K> {
    /// Unsorted; rows keep input order
    pub fn new() -> Self {
        Self {
            key: None,
            direction: SortDirection::Ascending,
        }
    }

    /// Sorted by `key` in its default direction
    pub fn sorted_by(key: K) -> Self {
        Self {
            key: Some(key),
            direction: key.default_direction(),
        }
    }

    /// Selecting the current key flips direction, any other key resets to its default
    pub fn select(self, key: K) -> Self {
        if self.key == Some(key) {
            Self {
                key: self.key,
                direction: self.direction.flip(),
            }
        } else {
            Self::sorted_by(key)
        }
    }

    /// Direction indicator if `key` is the active one
    pub fn indicator_for(&self, key: K) -> Option<&'static str> {
        (self.key == Some(key)).then(|| self.direction.indicator())
    }
}

impl<K: SortKey> Default for SortState<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Case-insensitive ordering; on a case-only difference lowercase sorts first
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Numeric ordering where a missing or NaN value counts as 0
pub fn compare_numeric(a: Option<f64>, b: Option<f64>) -> Ordering {
    let a = a.filter(|v| !v.is_nan()).unwrap_or(0.0);
    let b = b.filter(|v| !v.is_nan()).unwrap_or(0.0);
    a.total_cmp(&b)
}

/// Columns of the defender analysis table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnalysisSortKey {
    MoveName,
    MoveType,
    Attacker,
    Damage,
    PercentHp,
}

impl AnalysisSortKey {
    pub const ALL: [AnalysisSortKey; 5] = [
        AnalysisSortKey::MoveName,
        AnalysisSortKey::MoveType,
        AnalysisSortKey::Attacker,
        AnalysisSortKey::Damage,
        AnalysisSortKey::PercentHp,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "move" | "name" | "movename" => Some(AnalysisSortKey::MoveName),
            "type" | "movetype" => Some(AnalysisSortKey::MoveType),
            "attacker" | "from" => Some(AnalysisSortKey::Attacker),
            "damage" => Some(AnalysisSortKey::Damage),
            "percent" | "percenthp" | "hp" => Some(AnalysisSortKey::PercentHp),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSortKey::MoveName => "move",
            AnalysisSortKey::MoveType => "type",
            AnalysisSortKey::Attacker => "attacker",
            AnalysisSortKey::Damage => "damage",
            AnalysisSortKey::PercentHp => "percent",
        }
    }

    fn compare(&self, a: &IncomingMove, b: &IncomingMove) -> Ordering {
        match self {
            AnalysisSortKey::MoveName => compare_text(&a.damage.move_name, &b.damage.move_name),
            AnalysisSortKey::MoveType => compare_text(&a.damage.move_type, &b.damage.move_type),
            AnalysisSortKey::Attacker => compare_text(&a.attacker, &b.attacker),
            AnalysisSortKey::Damage => {
                compare_numeric(Some(a.damage.damage), Some(b.damage.damage))
            }
            AnalysisSortKey::PercentHp => {
                compare_numeric(Some(a.damage.percent_hp), Some(b.damage.percent_hp))
            }
        }
    }
}

impl SortKey for AnalysisSortKey {
    fn kind(&self) -> KeyKind {
        match self {
            AnalysisSortKey::MoveName | AnalysisSortKey::MoveType | AnalysisSortKey::Attacker => {
                KeyKind::Text
            }
            AnalysisSortKey::Damage | AnalysisSortKey::PercentHp => KeyKind::Numeric,
        }
    }
}

/// Reorder analysis entries by the state's key; stable, so equal entries keep input order
pub fn sort_incoming(entries: &mut [IncomingMove], state: &SortState<AnalysisSortKey>) {
    if let Some(key) = state.key {
        entries.sort_by(|a, b| state.direction.apply(key.compare(a, b)));
    }
}

/// Select `key` on top of `state` and return the reordered entries with the new state
pub fn sort_results(
    mut entries: Vec<IncomingMove>,
    key: AnalysisSortKey,
    state: SortState<AnalysisSortKey>,
) -> (Vec<IncomingMove>, SortState<AnalysisSortKey>) {
    let state = state.select(key);
    sort_incoming(&mut entries, &state);
    (entries, state)
}
