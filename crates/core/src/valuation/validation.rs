//! Range validation for company financials.
//!
//! The engine trusts its caller; these checks run in the form/API layer
//! before a calculation is attempted.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::CompanyData;

/// Validation errors for company financials.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Revenue outside the accepted range.
    #[error("Revenue must be between 0 and 10,000,000,000 (exclusive)")]
    RevenueOutOfRange,

    /// A result figure outside the accepted range.
    #[error("Result must be between -1,000,000,000 and 1,000,000,000")]
    ResultOutOfRange,

    /// Employee count outside the accepted range.
    #[error("Employee count must be between 0 and 1,000,000 (exclusive)")]
    EmployeesOutOfRange,

    /// A percentage field outside 0-100.
    #[error("Percentage field '{0}' must be between 0 and 100")]
    PercentageOutOfRange(&'static str),

    /// Average yearly investment is negative.
    #[error("Average yearly investment cannot be negative")]
    NegativeInvestment,
}

/// True iff `0 < revenue < 10,000,000,000`.
#[must_use]
pub fn validate_revenue(revenue: Decimal) -> bool {
    revenue > Decimal::ZERO && revenue < Decimal::new(10_000_000_000, 0)
}

/// True iff `0 < ebitda < 1,000,000,000`.
#[must_use]
pub fn validate_ebitda(ebitda: Decimal) -> bool {
    ebitda > Decimal::ZERO && ebitda < Decimal::new(1_000_000_000, 0)
}

/// True iff `0 < employees < 1,000,000`.
#[must_use]
pub fn validate_employees(employees: u32) -> bool {
    employees > 0 && employees < 1_000_000
}

/// Validates a full company record before it reaches the engine.
///
/// # Errors
///
/// Returns the first violated range check.
pub fn validate_company_data(company: &CompanyData) -> Result<(), ValidationError> {
    if !validate_revenue(company.last_year_revenue) {
        return Err(ValidationError::RevenueOutOfRange);
    }

    let result_cap = Decimal::new(1_000_000_000, 0);
    if company.result_2024.abs() > result_cap || company.expected_result_2025.abs() > result_cap {
        return Err(ValidationError::ResultOutOfRange);
    }

    if !validate_employees(company.employees) {
        return Err(ValidationError::EmployeesOutOfRange);
    }

    if !is_percentage(company.recurring_revenue_percentage) {
        return Err(ValidationError::PercentageOutOfRange(
            "recurring_revenue_percentage",
        ));
    }

    if !is_percentage(company.largest_client_dependency) {
        return Err(ValidationError::PercentageOutOfRange(
            "largest_client_dependency",
        ));
    }

    if company.average_yearly_investment < Decimal::ZERO {
        return Err(ValidationError::NegativeInvestment);
    }

    Ok(())
}

fn is_percentage(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::types::Prospects;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn company() -> CompanyData {
        CompanyData {
            last_year_revenue: dec!(1500000),
            recurring_revenue_percentage: dec!(40),
            result_2024: dec!(250000),
            expected_result_2025: dec!(300000),
            was_lossmaking: false,
            prospects: Prospects::Stijgend,
            average_yearly_investment: dec!(25000),
            sector: "bouw".to_string(),
            employees: 12,
            largest_client_dependency: dec!(20),
            largest_supplier_risk: "beperkt".to_string(),
        }
    }

    #[rstest]
    #[case(dec!(0), false)]
    #[case(dec!(-1), false)]
    #[case(dec!(1), true)]
    #[case(dec!(9999999999), true)]
    #[case(dec!(10000000000), false)]
    fn test_validate_revenue(#[case] revenue: Decimal, #[case] expected: bool) {
        assert_eq!(validate_revenue(revenue), expected);
    }

    #[rstest]
    #[case(dec!(0), false)]
    #[case(dec!(1), true)]
    #[case(dec!(999999999), true)]
    #[case(dec!(1000000000), false)]
    fn test_validate_ebitda(#[case] ebitda: Decimal, #[case] expected: bool) {
        assert_eq!(validate_ebitda(ebitda), expected);
    }

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(999_999, true)]
    #[case(1_000_000, false)]
    fn test_validate_employees(#[case] employees: u32, #[case] expected: bool) {
        assert_eq!(validate_employees(employees), expected);
    }

    #[test]
    fn test_validate_company_data_accepts_sane_input() {
        assert!(validate_company_data(&company()).is_ok());
    }

    #[test]
    fn test_validate_company_data_rejects_zero_revenue() {
        let mut data = company();
        data.last_year_revenue = Decimal::ZERO;
        assert_eq!(
            validate_company_data(&data),
            Err(ValidationError::RevenueOutOfRange)
        );
    }

    #[test]
    fn test_validate_company_data_rejects_zero_employees() {
        let mut data = company();
        data.employees = 0;
        assert_eq!(
            validate_company_data(&data),
            Err(ValidationError::EmployeesOutOfRange)
        );
    }

    #[test]
    fn test_validate_company_data_rejects_percentage_over_100() {
        let mut data = company();
        data.largest_client_dependency = dec!(120);
        assert_eq!(
            validate_company_data(&data),
            Err(ValidationError::PercentageOutOfRange(
                "largest_client_dependency"
            ))
        );
    }

    #[test]
    fn test_validate_company_data_rejects_negative_investment() {
        let mut data = company();
        data.average_yearly_investment = dec!(-1);
        assert_eq!(
            validate_company_data(&data),
            Err(ValidationError::NegativeInvestment)
        );
    }

    #[test]
    fn test_validate_company_data_accepts_negative_results() {
        // Losses are legitimate input; only the magnitude is capped.
        let mut data = company();
        data.result_2024 = dec!(-500000);
        data.expected_result_2025 = dec!(-250000);
        assert!(validate_company_data(&data).is_ok());
    }
}
