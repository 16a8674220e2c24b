pub mod csv_service;
pub mod validation;
