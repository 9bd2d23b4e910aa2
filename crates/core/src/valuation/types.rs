//! Valuation data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Company financials collected by the wizard, immutable per calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyData {
    /// Last year's revenue (a bracket midpoint in the form, any positive value accepted).
    pub last_year_revenue: Decimal,
    /// Share of revenue that is recurring, 0-100.
    pub recurring_revenue_percentage: Decimal,
    /// Realized result for 2024, signed.
    pub result_2024: Decimal,
    /// Expected result for 2025, signed.
    pub expected_result_2025: Decimal,
    /// True if the company was lossmaking in any of the last three years.
    pub was_lossmaking: bool,
    /// Growth outlook, informational only.
    pub prospects: Prospects,
    /// Average yearly investment, non-negative.
    pub average_yearly_investment: Decimal,
    /// Sector id, resolved against the sector configuration table.
    pub sector: String,
    /// Number of employees.
    pub employees: u32,
    /// Revenue share of the largest client, 0-100.
    pub largest_client_dependency: Decimal,
    /// Supplier concentration label, informational only.
    pub largest_supplier_risk: String,
}

/// Growth outlook categories offered by the wizard.
///
/// Informational only; the outlook does not enter the multiple formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prospects {
    /// Shrinking.
    Krimpend,
    /// Fluctuating.
    Wisselend,
    /// Stable.
    Gelijkblijvend,
    /// Growing.
    Stijgend,
}

impl std::fmt::Display for Prospects {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Krimpend => write!(f, "krimpend"),
            Self::Wisselend => write!(f, "wisselend"),
            Self::Gelijkblijvend => write!(f, "gelijkblijvend"),
            Self::Stijgend => write!(f, "stijgend"),
        }
    }
}

impl std::str::FromStr for Prospects {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "krimpend" => Ok(Self::Krimpend),
            "wisselend" => Ok(Self::Wisselend),
            "gelijkblijvend" => Ok(Self::Gelijkblijvend),
            "stijgend" => Ok(Self::Stijgend),
            _ => Err(format!("Unknown prospects value: {s}")),
        }
    }
}

/// One row of the sector configuration table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectorConfig {
    /// Unique sector id, referenced by `CompanyData::sector`.
    pub id: String,
    /// Display name used in the result and the report.
    pub name: String,
    /// Base EBITDA multiple for the sector, typically 3-7.
    pub multiple: Decimal,
    /// Short description shown in the wizard.
    pub description: String,
    /// Narrative used in the report, not in the calculation.
    pub text: String,
}

/// Outcome of a valuation run, never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// Point estimate, rounded to whole currency units.
    pub base_valuation: Decimal,
    /// Lower bound of the band, rounded to whole currency units.
    pub min_valuation: Decimal,
    /// Upper bound of the band, rounded to whole currency units.
    pub max_valuation: Decimal,
    /// Final adjusted multiple, unrounded.
    pub multiple: Decimal,
    /// Display name of the resolved sector.
    pub sector: String,
}
