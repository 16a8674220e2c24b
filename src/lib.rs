//! Proportional ingredient scaling for a brewed beverage.
//!
//! A [`scaler::RatioScaler`] is built once from coffee, sugar, creamer and water
//! ratios and then answers "how much of everything else?" for any one known
//! quantity.

pub mod consts;
pub mod errors;
pub mod models;
pub mod scaler;
pub mod services;
