use crate::models::dimension::Dimension;
use serde::Serialize;

/// One fully scaled set of quantities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrewResult {
    pub coffee: f64,
    pub sugar: f64,
    pub creamer: f64,
    pub water: f64,
    pub ingredients: f64,
    pub total: f64,
}

impl BrewResult {
    /// Returns the field for `dimension`.
    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Coffee => self.coffee,
            Dimension::Sugar => self.sugar,
            Dimension::Creamer => self.creamer,
            Dimension::Water => self.water,
            Dimension::Ingredients => self.ingredients,
            Dimension::Total => self.total,
        }
    }

    /// Multiplies every field by `factor`.
    pub fn scale(&self, factor: f64) -> BrewResult {
        BrewResult {
            coffee: self.coffee * factor,
            sugar: self.sugar * factor,
            creamer: self.creamer * factor,
            water: self.water * factor,
            ingredients: self.ingredients * factor,
            total: self.total * factor,
        }
    }
}
