//! Every incoming damaging move against one chosen defender

use drool_records::{Monster, Move, TypeChart};

use super::DamageIssue;
use crate::damage::{MoveDamage, compute_damage};
use crate::error::CalcError;
use crate::index::MoveIndex;

/// One attacker's move as seen by the defender
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMove {
    pub attacker: String,
    pub damage: MoveDamage,
}

/// Exhaustive view of what the roster can do to a single defender
///
/// Unlike the matrix, every damaging move is kept, not just the best one.
#[derive(Debug, Clone, PartialEq)]
pub struct DefenderAnalysis {
    pub defender: String,
    /// Attacker order, then move order within each attacker
    pub moves: Vec<IncomingMove>,
    pub issues: Vec<DamageIssue>,
}

impl DefenderAnalysis {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Highest %HP entry, first one on ties
    pub fn strongest(&self) -> Option<&IncomingMove> {
        self.moves.iter().fold(None, |best, m| match best {
            Some(b) if b.damage.percent_hp >= m.damage.percent_hp => Some(b),
            _ => Some(m),
        })
    }

    /// Entries that would knock the defender out from full HP
    pub fn knockouts(&self) -> impl Iterator<Item = &IncomingMove> {
        self.moves.iter().filter(|m| m.damage.percent_hp >= 100.0)
    }
}

/// Collect every damaging move from every monster (the defender included)
/// against `monsters[defender_index]`
pub fn analyze_defender(
    chart: &TypeChart,
    monsters: &[Monster],
    moves: &[Move],
    defender_index: usize,
) -> Result<DefenderAnalysis, CalcError> {
    let defender = monsters
        .get(defender_index)
        .ok_or(CalcError::DefenderOutOfRange {
            index: defender_index,
            len: monsters.len(),
        })?;

    let index = MoveIndex::new(moves);
    let mut incoming = Vec::new();
    let mut issues = Vec::new();

    for attacker in monsters {
        for mv in index.moves_for(&attacker.name) {
            match compute_damage(chart, mv, attacker, defender) {
                Ok(Some(damage)) => incoming.push(IncomingMove {
                    attacker: attacker.name.clone(),
                    damage,
                }),
                Ok(None) => {}
                Err(error) => DamageIssue::record(&mut issues, attacker, defender, mv, error),
            }
        }
    }

    tracing::debug!(
        defender = %defender.name,
        moves = incoming.len(),
        issues = issues.len(),
        "Analyzed defender"
    );

    Ok(DefenderAnalysis {
        defender: defender.name.clone(),
        moves: incoming,
        issues,
    })
}
