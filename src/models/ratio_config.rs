/// Partial configuration as supplied by a caller; unset fields take defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatioOptions {
    pub coffee_ratio: Option<f64>,
    pub sugar_ratio: Option<f64>,
    pub creamer_ratio: Option<f64>,
    pub water_ratio: Option<f64>,
    pub super_accurate: Option<bool>,
}

/// Fully populated configuration. Only produced by validation, so every
/// ratio is finite and non-negative.
///
/// Fields cannot be set from outside the crate:
/// ```compile_fail
/// use brew_ratio::models::ratio_config::RatioConfig;
///
/// let cfg = RatioConfig {
///     coffee_ratio: -1.0,
///     sugar_ratio: f64::NAN,
///     creamer_ratio: 1.0,
///     water_ratio: 24.0,
///     super_accurate: false,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioConfig {
    pub(crate) coffee_ratio: f64,
    pub(crate) sugar_ratio: f64,
    pub(crate) creamer_ratio: f64,
    pub(crate) water_ratio: f64,
    pub(crate) super_accurate: bool,
}

impl RatioConfig {
    pub fn coffee_ratio(&self) -> f64 {
        self.coffee_ratio
    }

    pub fn sugar_ratio(&self) -> f64 {
        self.sugar_ratio
    }

    pub fn creamer_ratio(&self) -> f64 {
        self.creamer_ratio
    }

    pub fn water_ratio(&self) -> f64 {
        self.water_ratio
    }

    pub fn super_accurate(&self) -> bool {
        self.super_accurate
    }
}
