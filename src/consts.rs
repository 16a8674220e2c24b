/// Default coffee weight when a configuration leaves it unset.
pub const DEFAULT_COFFEE_RATIO: f64 = 1.0;

/// Default sugar weight when a configuration leaves it unset.
pub const DEFAULT_SUGAR_RATIO: f64 = 1.0;

/// Default creamer weight when a configuration leaves it unset.
pub const DEFAULT_CREAMER_RATIO: f64 = 1.0;

/// Default water weight when a configuration leaves it unset.
pub const DEFAULT_WATER_RATIO: f64 = 24.0;

/// Share of the ingredients deducted from the total in super-accurate mode.
pub const INGREDIENTS_LOSS_FACTOR: f64 = 0.01;
