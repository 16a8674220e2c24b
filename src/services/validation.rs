use crate::consts::{
    DEFAULT_COFFEE_RATIO, DEFAULT_CREAMER_RATIO, DEFAULT_SUGAR_RATIO, DEFAULT_WATER_RATIO,
};
use crate::errors::{ValidationError, ValidationErrors};
use crate::models::ratio_config::{RatioConfig, RatioOptions};

/// Applies defaults to a partial configuration and range-checks every ratio.
///
/// # Arguments
/// * `opts` - The caller-supplied configuration; `None` fields take their defaults.
///
/// # Returns
/// * `Result<RatioConfig, ValidationErrors>` - The populated configuration, or every
///   field that is negative or not a finite number.
pub fn validate_options(opts: &RatioOptions) -> Result<RatioConfig, ValidationErrors> {
    let mut errors = Vec::new();

    let coffee_ratio = ratio("coffee_ratio", opts.coffee_ratio, DEFAULT_COFFEE_RATIO, &mut errors);
    let sugar_ratio = ratio("sugar_ratio", opts.sugar_ratio, DEFAULT_SUGAR_RATIO, &mut errors);
    let creamer_ratio = ratio(
        "creamer_ratio",
        opts.creamer_ratio,
        DEFAULT_CREAMER_RATIO,
        &mut errors,
    );
    let water_ratio = ratio("water_ratio", opts.water_ratio, DEFAULT_WATER_RATIO, &mut errors);

    if !errors.is_empty() {
        return Err(ValidationErrors(errors));
    }

    Ok(RatioConfig {
        coffee_ratio,
        sugar_ratio,
        creamer_ratio,
        water_ratio,
        super_accurate: opts.super_accurate.unwrap_or(false),
    })
}

fn ratio(
    field: &'static str,
    value: Option<f64>,
    default: f64,
    errors: &mut Vec<ValidationError>,
) -> f64 {
    let v = value.unwrap_or(default);
    if !v.is_finite() {
        errors.push(ValidationError::NotANumber { field });
    } else if v < 0.0 {
        errors.push(ValidationError::Negative { field, value: v });
    }
    v
}
