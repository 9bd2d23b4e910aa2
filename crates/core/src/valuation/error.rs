//! Valuation error types.

use thiserror::Error;

/// Errors produced by the valuation engine.
#[derive(Debug, Error)]
pub enum ValuationError {
    /// The submitted sector id has no row in the sector configuration table.
    /// Fails closed; there is no default sector.
    #[error("Invalid sector selected: '{0}'")]
    SectorNotFound(String),
}
