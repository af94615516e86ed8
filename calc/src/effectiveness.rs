//! Type effectiveness lookup over a loaded chart

use drool_records::TypeChart;

use crate::error::CalcError;

pub use drool_records::NO_SECOND_TYPE;

/// Raw chart value that stands for a half multiplier
///
/// Legacy quirk of the sheet format, which cannot hold `0.5` directly.
/// Only this lookup should know about it.
pub const LEGACY_HALF_SENTINEL: f64 = 5.0;

/// Multiplier for one attacking type against one defending type
pub fn single_effectiveness(
    chart: &TypeChart,
    attack: &str,
    defend: &str,
) -> Result<f64, CalcError> {
    let raw = chart
        .raw(attack, defend)
        .ok_or_else(|| CalcError::UnknownType {
            attack: attack.to_string(),
            defend: defend.to_string(),
        })?;

    if raw == LEGACY_HALF_SENTINEL {
        Ok(0.5)
    } else {
        Ok(raw)
    }
}

/// Combined multiplier against a defender's type slots
///
/// An absent second type (or the literal `NA` tag) contributes `×1`.
pub fn effectiveness(
    chart: &TypeChart,
    attack: &str,
    defend1: &str,
    defend2: Option<&str>,
) -> Result<f64, CalcError> {
    let first = single_effectiveness(chart, attack, defend1)?;
    let second = match defend2 {
        None | Some(NO_SECOND_TYPE) => 1.0,
        Some(defend2) => single_effectiveness(chart, attack, defend2)?,
    };
    Ok(first * second)
}
