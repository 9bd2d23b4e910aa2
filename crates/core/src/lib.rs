//! Core business logic for Valuar.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `valuation` - Sector-multiple valuation engine and input validation
//! - `format` - Dutch-locale number and currency rendering

pub mod format;
pub mod valuation;
