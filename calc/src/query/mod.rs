//! Aggregate damage queries over the whole roster
//!
//! All queries are pure: they borrow the current snapshots and return fresh
//! results. Calling them again with unchanged input gives identical output.

mod analysis;
mod ko_threshold;
mod matrix;

pub use analysis::{DefenderAnalysis, IncomingMove, analyze_defender};
pub use ko_threshold::{KoCell, KoIssue, KoMatrix, KoRow, build_ko_matrix, ko_threshold};
pub use matrix::{MatchupCell, MatchupMatrix, MatchupRow, build_matrix};

use drool_records::{Monster, Move};

use crate::error::CalcError;

/// A move that was skipped while aggregating because its damage could not be computed
#[derive(Debug, Clone, PartialEq)]
pub struct DamageIssue {
    pub attacker: String,
    pub defender: String,
    pub move_name: String,
    pub error: CalcError,
}

impl DamageIssue {
    fn record(
        issues: &mut Vec<DamageIssue>,
        attacker: &Monster,
        defender: &Monster,
        mv: &Move,
        error: CalcError,
    ) {
        tracing::warn!(
            attacker = %attacker.name,
            defender = %defender.name,
            move_name = %mv.name,
            error = %error,
            "Skipping move"
        );
        issues.push(DamageIssue {
            attacker: attacker.name.clone(),
            defender: defender.name.clone(),
            move_name: mv.name.clone(),
            error,
        });
    }
}
