//! Static move damage against a single defender
//!
//! The formula is deliberately flat: `power * attack / defense * type multiplier`.
//! There is no level term, random roll, critical hit, same-type bonus or
//! ability/item modifier.

use std::fmt;

use drool_records::{Monster, Move, MoveClass, TypeChart};

use crate::effectiveness::effectiveness;
use crate::error::CalcError;

/// Which stat pair a damaging move reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageKind {
    Physical,
    Special,
}

impl DamageKind {
    /// `None` for classes that never deal damage
    pub fn from_class(class: &MoveClass) -> Option<Self> {
        match class {
            MoveClass::Physical => Some(DamageKind::Physical),
            MoveClass::Special => Some(DamageKind::Special),
            _ => None,
        }
    }

    pub fn attack_stat_name(&self) -> &'static str {
        match self {
            DamageKind::Physical => "Attack",
            DamageKind::Special => "Sp.Atk",
        }
    }

    pub fn defense_stat_name(&self) -> &'static str {
        match self {
            DamageKind::Physical => "Defense",
            DamageKind::Special => "Sp.Def",
        }
    }

    pub(crate) fn stats(&self, attacker: &Monster, defender: &Monster) -> (u32, u32) {
        match self {
            DamageKind::Physical => (attacker.attack, defender.defense),
            DamageKind::Special => (attacker.special_attack, defender.special_defense),
        }
    }
}

/// One move's damage against one defender
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveDamage {
    pub move_name: String,
    pub move_type: String,
    pub move_class: MoveClass,
    pub kind: DamageKind,
    pub power: u32,
    pub attack_stat: u32,
    pub defense_stat: u32,
    /// Before the type multiplier
    pub base_damage: f64,
    /// Product over both defender types
    pub type_multiplier: f64,
    pub damage: f64,
    /// `damage / defender HP * 100`
    pub percent_hp: f64,
}

impl MoveDamage {
    pub fn attack_stat_name(&self) -> &'static str {
        self.kind.attack_stat_name()
    }

    pub fn defense_stat_name(&self) -> &'static str {
        self.kind.defense_stat_name()
    }

    /// Worked calculation, e.g. `(50 Power × 100 Attack) ÷ 50 Defense × 2 = 200.0`
    pub fn formula(&self) -> String {
        format!(
            "({} Power × {} {}) ÷ {} {} × {} = {:.1}",
            self.power,
            self.attack_stat,
            self.attack_stat_name(),
            self.defense_stat,
            self.defense_stat_name(),
            self.type_multiplier,
            self.damage
        )
    }

    /// Whether this hit is flagged as near-lethal
    pub fn is_high_damage(&self, threshold: f64) -> bool {
        self.percent_hp > threshold
    }
}

impl fmt::Display for MoveDamage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}): {:.1}% HP",
            self.move_name, self.move_type, self.move_class, self.percent_hp
        )
    }
}

/// Damage of `mv` used by `attacker` against `defender`
///
/// Returns `Ok(None)` for moves that deal no damage: power unknown or zero,
/// or a class other than Physical/Special. A zero defense stat or zero
/// defender HP is rejected as [`CalcError::InvalidStat`] rather than
/// producing an infinite percentage.
pub fn compute_damage(
    chart: &TypeChart,
    mv: &Move,
    attacker: &Monster,
    defender: &Monster,
) -> Result<Option<MoveDamage>, CalcError> {
    let power = match mv.power.known() {
        Some(p) if p > 0 => p,
        _ => return Ok(None),
    };

    let Some(kind) = DamageKind::from_class(&mv.class) else {
        return Ok(None);
    };

    let (attack_stat, defense_stat) = kind.stats(attacker, defender);
    if defense_stat == 0 {
        return Err(CalcError::InvalidStat {
            monster: defender.name.clone(),
            stat: kind.defense_stat_name(),
        });
    }
    if defender.hp == 0 {
        return Err(CalcError::InvalidStat {
            monster: defender.name.clone(),
            stat: "HP",
        });
    }

    let base_damage = f64::from(power) * f64::from(attack_stat) / f64::from(defense_stat);
    let type_multiplier = effectiveness(
        chart,
        &mv.move_type,
        &defender.type1,
        defender.type2.as_deref(),
    )?;
    let damage = base_damage * type_multiplier;
    let percent_hp = damage / f64::from(defender.hp) * 100.0;

    Ok(Some(MoveDamage {
        move_name: mv.name.clone(),
        move_type: mv.move_type.clone(),
        move_class: mv.class.clone(),
        kind,
        power,
        attack_stat,
        defense_stat,
        base_damage,
        type_multiplier,
        damage,
        percent_hp,
    }))
}
