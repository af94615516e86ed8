//! Presentation settings shared by the matrix and analysis views

/// Default %HP above which a cell is flagged as near-lethal
pub const DEFAULT_HIGH_DAMAGE_THRESHOLD: f64 = 90.0;

/// Default upper bound of the colour intensity scale
pub const DEFAULT_INTENSITY_CEILING: u8 = 40;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// Cells strictly above this %HP are highlighted instead of shaded
    pub high_damage_threshold: f64,

    /// Shading runs from 0 to this value
    pub intensity_ceiling: u8,
}

impl AnalysisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_high_damage_threshold(mut self, threshold: f64) -> Self {
        self.high_damage_threshold = threshold;
        self
    }

    pub fn with_intensity_ceiling(mut self, ceiling: u8) -> Self {
        self.intensity_ceiling = ceiling;
        self
    }

    pub fn is_high_damage(&self, percent_hp: f64) -> bool {
        percent_hp > self.high_damage_threshold
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            high_damage_threshold: DEFAULT_HIGH_DAMAGE_THRESHOLD,
            intensity_ceiling: DEFAULT_INTENSITY_CEILING,
        }
    }
}
