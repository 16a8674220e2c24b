use crate::models::brew_result::BrewResult;
use crate::models::dimension::Dimension;
use serde::{Deserialize, Serialize};

/// As read from input CSV
#[derive(Debug, Deserialize)]
pub struct InputRow {
    pub by: Dimension,
    pub amount: Option<String>,
}

/// As written to output CSV. `by` and `amount` are empty on the row that
/// reports the unscaled base recipe.
#[derive(Debug, Serialize)]
pub struct OutputRow {
    pub by: Option<Dimension>,
    pub amount: Option<f64>,
    pub coffee: f64,
    pub sugar: f64,
    pub creamer: f64,
    pub water: f64,
    pub ingredients: f64,
    pub total: f64,
}

impl OutputRow {
    /// Row for the base recipe, with no query columns.
    pub fn base(res: &BrewResult) -> Self {
        Self {
            by: None,
            amount: None,
            coffee: res.coffee,
            sugar: res.sugar,
            creamer: res.creamer,
            water: res.water,
            ingredients: res.ingredients,
            total: res.total,
        }
    }
}

impl From<(Dimension, f64, &BrewResult)> for OutputRow {
    fn from((by, amount, res): (Dimension, f64, &BrewResult)) -> Self {
        Self {
            by: Some(by),
            amount: Some(amount),
            ..Self::base(res)
        }
    }
}
