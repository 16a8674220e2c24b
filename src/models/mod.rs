pub mod brew_result;
pub mod csv_models;
pub mod dimension;
pub mod ratio_config;
