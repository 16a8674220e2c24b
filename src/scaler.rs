use crate::consts::{
    DEFAULT_COFFEE_RATIO, DEFAULT_CREAMER_RATIO, DEFAULT_SUGAR_RATIO, DEFAULT_WATER_RATIO,
    INGREDIENTS_LOSS_FACTOR,
};
use crate::errors::AppResult;
use crate::models::brew_result::BrewResult;
use crate::models::dimension::Dimension;
use crate::models::ratio_config::{RatioConfig, RatioOptions};
use crate::services::validation::validate_options;
use log::debug;

/// The quantities implied by a ratio configuration before any scaling.
/// Computed once when the scaler is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseState {
    pub coffee: f64,
    pub sugar: f64,
    pub creamer: f64,
    pub water: f64,
    /// `coffee + sugar + creamer`.
    pub ingredients: f64,
    /// Deducted from the total in super-accurate mode, zero otherwise.
    pub ingredients_loss: f64,
    /// `ingredients - ingredients_loss + water`.
    pub total: f64,
}

impl BaseState {
    fn from_config(cfg: &RatioConfig) -> Self {
        let ingredients = cfg.coffee_ratio + cfg.sugar_ratio + cfg.creamer_ratio;
        let ingredients_loss = if cfg.super_accurate {
            ingredients * INGREDIENTS_LOSS_FACTOR
        } else {
            0.0
        };
        Self {
            coffee: cfg.coffee_ratio,
            sugar: cfg.sugar_ratio,
            creamer: cfg.creamer_ratio,
            water: cfg.water_ratio,
            ingredients,
            ingredients_loss,
            total: ingredients - ingredients_loss + cfg.water_ratio,
        }
    }

    /// Returns the unscaled quantity set.
    pub fn as_result(&self) -> BrewResult {
        BrewResult {
            coffee: self.coffee,
            sugar: self.sugar,
            creamer: self.creamer,
            water: self.water,
            ingredients: self.ingredients,
            total: self.total,
        }
    }
}

/// Re-derives a whole recipe from any one known quantity.
///
/// Every query divides the requested amount by the base value of the queried
/// dimension and multiplies all other base values by that factor. The queried
/// field is set to `amount` as given.
///
/// Querying by a dimension whose base is zero yields infinite fields for a
/// nonzero amount and NaN where the other base is also zero (or for a zero
/// amount). This is plain IEEE-754 arithmetic and is not reported as an error;
/// avoid zero ratios for dimensions you intend to query by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioScaler {
    base: BaseState,
}

impl Default for RatioScaler {
    fn default() -> Self {
        // defaults are always valid
        Self::from_config(&RatioConfig {
            coffee_ratio: DEFAULT_COFFEE_RATIO,
            sugar_ratio: DEFAULT_SUGAR_RATIO,
            creamer_ratio: DEFAULT_CREAMER_RATIO,
            water_ratio: DEFAULT_WATER_RATIO,
            super_accurate: false,
        })
    }
}

impl RatioScaler {
    /// Validates `opts`, applying defaults, and builds the scaler.
    ///
    /// # Returns
    /// * `AppResult<RatioScaler>` - `AppErrors::Validation` if any ratio is negative
    ///   or not a finite number.
    pub fn new(opts: RatioOptions) -> AppResult<Self> {
        let cfg = validate_options(&opts)?;
        Ok(Self::from_config(&cfg))
    }

    /// Builds the scaler from a configuration returned by
    /// [`validate_options`]; a `RatioConfig` cannot be assembled any other way
    /// outside this crate.
    pub fn from_config(cfg: &RatioConfig) -> Self {
        let base = BaseState::from_config(cfg);
        debug!(
            "ratio scaler ready: ingredients={} loss={} total={}",
            base.ingredients, base.ingredients_loss, base.total
        );
        Self { base }
    }

    /// The unscaled quantities this scaler was built with.
    pub fn base(&self) -> &BaseState {
        &self.base
    }

    /// Scales the recipe to `amount` of coffee.
    pub fn by_coffee(&self, amount: f64) -> BrewResult {
        self.by(Dimension::Coffee, amount)
    }

    /// Scales the recipe to `amount` of sugar.
    pub fn by_sugar(&self, amount: f64) -> BrewResult {
        self.by(Dimension::Sugar, amount)
    }

    /// Scales the recipe to `amount` of creamer.
    pub fn by_creamer(&self, amount: f64) -> BrewResult {
        self.by(Dimension::Creamer, amount)
    }

    /// Scales the recipe to `amount` of water.
    pub fn by_water(&self, amount: f64) -> BrewResult {
        self.by(Dimension::Water, amount)
    }

    /// Scales the recipe to `amount` of combined coffee, sugar and creamer.
    pub fn by_ingredients(&self, amount: f64) -> BrewResult {
        self.by(Dimension::Ingredients, amount)
    }

    /// Scales the recipe so the total comes to `amount`.
    pub fn by_total(&self, amount: f64) -> BrewResult {
        self.by(Dimension::Total, amount)
    }

    /// Scales every quantity so that `dimension` equals `amount`.
    pub fn by(&self, dimension: Dimension, amount: f64) -> BrewResult {
        let base = self.base.as_result();
        let ratio = amount / base.get(dimension);
        let mut res = base.scale(ratio);
        match dimension {
            Dimension::Coffee => res.coffee = amount,
            Dimension::Sugar => res.sugar = amount,
            Dimension::Creamer => res.creamer = amount,
            Dimension::Water => res.water = amount,
            Dimension::Ingredients => res.ingredients = amount,
            Dimension::Total => res.total = amount,
        }
        res
    }
}
