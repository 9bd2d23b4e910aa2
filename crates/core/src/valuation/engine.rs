//! Valuation engine: sector multiple plus EBITDA-dependent step adjustment.

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::ValuationError;
use super::types::{CompanyData, SectorConfig, ValuationResult};

/// Half-width of the valuation band, in multiple points.
const BAND_HALF_WIDTH: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// Flat multiple penalty for companies lossmaking in any of the last three years.
const LOSSMAKING_PENALTY: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Engine for computing indicative enterprise valuations.
pub struct ValuationEngine;

impl ValuationEngine {
    /// Computes an indicative valuation for the given company.
    ///
    /// Resolves the sector against the supplied table, derives the EBITDA
    /// proxy, applies the step adjustment and lossmaking penalty, and
    /// returns the point estimate with its symmetric band. The three
    /// output amounts are rounded to whole currency units exactly once;
    /// the multiple is returned unrounded.
    ///
    /// Implausible inputs (negative results, zero employees, out-of-range
    /// percentages) are accepted as-is; range checking belongs to the
    /// validation layer.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::SectorNotFound` if `company.sector` matches
    /// no row in `sectors`.
    pub fn calculate(
        company: &CompanyData,
        sectors: &[SectorConfig],
    ) -> Result<ValuationResult, ValuationError> {
        let sector = sectors
            .iter()
            .find(|s| s.id == company.sector)
            .ok_or_else(|| ValuationError::SectorNotFound(company.sector.clone()))?;

        let adjusted_ebitda = (company.result_2024 + company.expected_result_2025)
            / Decimal::TWO
            + company.average_yearly_investment;

        let mut multiple = sector.multiple + Self::step_adjustment(adjusted_ebitda);
        if company.was_lossmaking {
            multiple -= LOSSMAKING_PENALTY;
        }

        let base_valuation = multiple * adjusted_ebitda;
        // With a negative EBITDA proxy the band endpoints swap sides of the
        // base; order them so `min <= base <= max` holds unconditionally.
        let lower = (multiple - BAND_HALF_WIDTH) * adjusted_ebitda;
        let upper = (multiple + BAND_HALF_WIDTH) * adjusted_ebitda;

        Ok(ValuationResult {
            base_valuation: round_to_units(base_valuation),
            min_valuation: round_to_units(lower.min(upper)),
            max_valuation: round_to_units(lower.max(upper)),
            multiple,
            sector: sector.name.clone(),
        })
    }

    /// Step adjustment to the sector multiple based on the EBITDA proxy.
    ///
    /// Ordered ladder of exclusive upper bounds; the first matching bracket
    /// wins. Amounts of 5,000,000 and above match no bracket and keep the
    /// sector base multiple unchanged.
    #[must_use]
    fn step_adjustment(adjusted_ebitda: Decimal) -> Decimal {
        let ladder: [(Decimal, Decimal); 5] = [
            (Decimal::new(200_000, 0), Decimal::new(-90, 2)),
            (Decimal::new(500_000, 0), Decimal::new(-40, 2)),
            (Decimal::new(1_000_000, 0), Decimal::ZERO),
            (Decimal::new(2_000_000, 0), Decimal::new(50, 2)),
            (Decimal::new(5_000_000, 0), Decimal::new(100, 2)),
        ];

        ladder
            .iter()
            .find(|(upper, _)| adjusted_ebitda < *upper)
            .map_or(Decimal::ZERO, |(_, adjustment)| *adjustment)
    }
}

/// Rounds a monetary amount to whole currency units, midpoint away from zero.
fn round_to_units(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
