//! Moves grouped by owning monster

use std::collections::HashMap;

use drool_records::Move;

/// All moves whose owner is `name`, in list order
pub fn moves_for<'a>(moves: &'a [Move], name: &str) -> Vec<&'a Move> {
    moves.iter().filter(|m| m.mon == name).collect()
}

/// Move list grouped by owner, built once and queried per attacker
///
/// Moves naming a monster that does not exist are kept but never looked up.
#[derive(Debug, Clone, Default)]
pub struct MoveIndex<'a> {
    by_owner: HashMap<&'a str, Vec<&'a Move>>,
}

impl<'a> MoveIndex<'a> {
    pub fn new(moves: &'a [Move]) -> Self {
        let mut by_owner: HashMap<&'a str, Vec<&'a Move>> = HashMap::new();
        for m in moves {
            by_owner.entry(m.mon.as_str()).or_default().push(m);
        }
        Self { by_owner }
    }

    /// Moves owned by `name`; empty when it owns none
    pub fn moves_for(&self, name: &str) -> &[&'a Move] {
        self.by_owner.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct owners, dangling ones included
    pub fn owner_count(&self) -> usize {
        self.by_owner.len()
    }
}
