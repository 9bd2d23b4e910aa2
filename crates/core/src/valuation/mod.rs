//! Sector-multiple valuation engine.

pub mod engine;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod props;

pub use engine::ValuationEngine;
pub use error::ValuationError;
pub use types::{CompanyData, Prospects, SectorConfig, ValuationResult};
pub use validation::{
    ValidationError, validate_company_data, validate_ebitda, validate_employees, validate_revenue,
};
