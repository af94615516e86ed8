//! Offensive stat an attacker would need to knock a defender out
//!
//! Ignores types and moves entirely: the threshold is
//! `defender HP / (attacker stat / defender stat)`, read once with the
//! physical pair and once with the special pair. Lower means easier to KO.

use drool_records::Monster;

use crate::damage::DamageKind;
use crate::error::CalcError;

/// Threshold for one stat pair
///
/// A zero attacking or defending stat is [`CalcError::InvalidStat`].
pub fn ko_threshold(
    kind: DamageKind,
    attacker: &Monster,
    defender: &Monster,
) -> Result<f64, CalcError> {
    let (attack_stat, defense_stat) = kind.stats(attacker, defender);
    if attack_stat == 0 {
        return Err(CalcError::InvalidStat {
            monster: attacker.name.clone(),
            stat: kind.attack_stat_name(),
        });
    }
    if defense_stat == 0 {
        return Err(CalcError::InvalidStat {
            monster: defender.name.clone(),
            stat: kind.defense_stat_name(),
        });
    }

    let ratio = f64::from(attack_stat) / f64::from(defense_stat);
    Ok(f64::from(defender.hp) / ratio)
}

/// Both thresholds for one attacker against the row's defender
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KoCell {
    pub attacker: String,
    /// `None` when the stat pair contains a zero
    pub physical: Option<f64>,
    pub special: Option<f64>,
}

impl KoCell {
    /// The easier of the two thresholds
    pub fn lowest(&self) -> Option<f64> {
        match (self.physical, self.special) {
            (Some(p), Some(s)) => Some(p.min(s)),
            (p, s) => p.or(s),
        }
    }
}

/// Every attacker against one defender, in roster order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KoRow {
    pub defender: String,
    pub cells: Vec<KoCell>,
}

/// A threshold left out because a stat was zero
#[derive(Debug, Clone, PartialEq)]
pub struct KoIssue {
    pub defender: String,
    pub attacker: String,
    pub kind: DamageKind,
    pub error: CalcError,
}

/// Defender-major grid of KO thresholds, self-pairs included
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KoMatrix {
    pub rows: Vec<KoRow>,
    pub issues: Vec<KoIssue>,
}

impl KoMatrix {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, defender: usize, attacker: usize) -> Option<&KoCell> {
        self.rows.get(defender)?.cells.get(attacker)
    }

    pub fn find(&self, defender: &str, attacker: &str) -> Option<&KoCell> {
        self.rows
            .iter()
            .find(|r| r.defender == defender)?
            .cells
            .iter()
            .find(|c| c.attacker == attacker)
    }

    pub fn cells(&self) -> impl Iterator<Item = &KoCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }
}

fn threshold_or_record(
    kind: DamageKind,
    attacker: &Monster,
    defender: &Monster,
    issues: &mut Vec<KoIssue>,
) -> Option<f64> {
    match ko_threshold(kind, attacker, defender) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(
                attacker = %attacker.name,
                defender = %defender.name,
                kind = ?kind,
                error = %error,
                "Skipping KO threshold"
            );
            issues.push(KoIssue {
                defender: defender.name.clone(),
                attacker: attacker.name.clone(),
                kind,
                error,
            });
            None
        }
    }
}

/// Thresholds for every defender/attacker pair of the roster
pub fn build_ko_matrix(monsters: &[Monster]) -> KoMatrix {
    let mut issues = Vec::new();
    let mut rows = Vec::with_capacity(monsters.len());

    for defender in monsters {
        let mut cells = Vec::with_capacity(monsters.len());
        for attacker in monsters {
            let physical =
                threshold_or_record(DamageKind::Physical, attacker, defender, &mut issues);
            let special = threshold_or_record(DamageKind::Special, attacker, defender, &mut issues);
            cells.push(KoCell {
                attacker: attacker.name.clone(),
                physical,
                special,
            });
        }
        rows.push(KoRow {
            defender: defender.name.clone(),
            cells,
        });
    }

    tracing::debug!(
        monsters = monsters.len(),
        issues = issues.len(),
        "Built KO threshold matrix"
    );

    KoMatrix { rows, issues }
}
