//! Linear shading of %HP values

use crate::config::AnalysisConfig;

/// Min/max of the values currently on screen, used to map each value to a shade
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntensityScale {
    min: f64,
    max: f64,
    ceiling: u8,
}

impl IntensityScale {
    /// Scale over the finite values given; an empty set gives a flat scale
    pub fn from_values(values: impl IntoIterator<Item = f64>, ceiling: u8) -> Self {
        let (min, max) = values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
            .unwrap_or((0.0, 0.0));

        Self { min, max, ceiling }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// `floor((value - min) / (max - min) * ceiling)`, clamped to `0..=ceiling`
    ///
    /// A flat scale (`max == min`) or a non-finite value yields 0.
    pub fn intensity(&self, value: f64) -> u8 {
        let span = self.max - self.min;
        if span <= 0.0 || !span.is_finite() || !value.is_finite() {
            return 0;
        }

        let scaled = ((value - self.min) / span * f64::from(self.ceiling)).floor();
        scaled.clamp(0.0, f64::from(self.ceiling)) as u8
    }
}

/// How a single cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    /// Above the high-damage threshold; drawn with the highlight style
    High,
    /// Tinted with this intensity
    Scaled(u8),
}

impl AnalysisConfig {
    /// Scale over `values` using this config's ceiling
    pub fn intensity_scale(&self, values: impl IntoIterator<Item = f64>) -> IntensityScale {
        IntensityScale::from_values(values, self.intensity_ceiling)
    }

    pub fn shade(&self, scale: &IntensityScale, percent_hp: f64) -> Shade {
        if self.is_high_damage(percent_hp) {
            Shade::High
        } else {
            Shade::Scaled(scale.intensity(percent_hp))
        }
    }
}
