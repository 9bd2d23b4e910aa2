//! Valuation routes: the wizard's submit endpoint and report lookups.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use crate::AppState;
use crate::routes::error_response;
use valuar_core::format::format_currency;
use valuar_core::valuation::{
    CompanyData, Prospects, ValuationEngine, ValuationError, validate_company_data,
};
use valuar_db::repositories::submission::CreateSubmissionInput;
use valuar_db::repositories::SubmissionError;
use valuar_db::{SectorRepository, SubmissionRepository};
use valuar_db::entities::submissions;
use valuar_shared::AppError;

/// Creates the valuation routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/valuations", post(create_valuation))
        .route("/valuations/{id}", get(get_valuation))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for submitting a valuation.
#[derive(Debug, Deserialize)]
pub struct CreateValuationRequest {
    /// Company name from the contact step.
    pub company_name: String,
    /// Contact person's name.
    pub contact_name: String,
    /// Contact email.
    pub email: String,
    /// Optional phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Last year's revenue (bracket midpoint).
    pub last_year_revenue: Decimal,
    /// Recurring revenue share, 0-100.
    pub recurring_revenue_percentage: Decimal,
    /// Realized result for 2024.
    pub result_2024: Decimal,
    /// Expected result for 2025.
    pub expected_result_2025: Decimal,
    /// Lossmaking in any of the last three years.
    pub was_lossmaking: bool,
    /// Growth outlook.
    pub prospects: Prospects,
    /// Average yearly investment.
    pub average_yearly_investment: Decimal,
    /// Sector id.
    pub sector: String,
    /// Number of employees.
    pub employees: u32,
    /// Largest client's revenue share, 0-100.
    pub largest_client_dependency: Decimal,
    /// Supplier concentration label.
    pub largest_supplier_risk: String,
}

impl CreateValuationRequest {
    fn into_parts(self) -> (ContactDetails, CompanyData) {
        let contact = ContactDetails {
            company_name: self.company_name,
            contact_name: self.contact_name,
            email: self.email,
            phone: self.phone,
        };
        let company = CompanyData {
            last_year_revenue: self.last_year_revenue,
            recurring_revenue_percentage: self.recurring_revenue_percentage,
            result_2024: self.result_2024,
            expected_result_2025: self.expected_result_2025,
            was_lossmaking: self.was_lossmaking,
            prospects: self.prospects,
            average_yearly_investment: self.average_yearly_investment,
            sector: self.sector,
            employees: self.employees,
            largest_client_dependency: self.largest_client_dependency,
            largest_supplier_risk: self.largest_supplier_risk,
        };
        (contact, company)
    }
}

/// Contact fields split off from the company data.
#[derive(Debug)]
struct ContactDetails {
    company_name: String,
    contact_name: String,
    email: String,
    phone: Option<String>,
}

/// Response for a computed valuation.
#[derive(Debug, Serialize)]
pub struct ValuationResponse {
    /// Submission id, used to fetch the report later.
    pub id: Uuid,
    /// Resolved sector display name.
    pub sector: String,
    /// Final adjusted multiple, unrounded.
    pub multiple: Decimal,
    /// Point estimate in whole euros.
    pub base_valuation: Decimal,
    /// Lower bound in whole euros.
    pub min_valuation: Decimal,
    /// Upper bound in whole euros.
    pub max_valuation: Decimal,
    /// Point estimate as displayed, e.g. "€ 920.000".
    pub base_valuation_formatted: String,
    /// Lower bound as displayed.
    pub min_valuation_formatted: String,
    /// Upper bound as displayed.
    pub max_valuation_formatted: String,
    /// Submission timestamp (RFC 3339).
    pub created_at: String,
}

impl From<submissions::Model> for ValuationResponse {
    fn from(model: submissions::Model) -> Self {
        Self {
            id: model.id,
            sector: model.sector_name,
            multiple: model.multiple,
            base_valuation: model.base_valuation,
            min_valuation: model.min_valuation,
            max_valuation: model.max_valuation,
            base_valuation_formatted: format_currency(model.base_valuation),
            min_valuation_formatted: format_currency(model.min_valuation),
            max_valuation_formatted: format_currency(model.max_valuation),
            created_at: model.created_at.to_rfc3339(),
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/valuations` - Validate, compute, persist, and return a valuation.
async fn create_valuation(
    State(state): State<AppState>,
    Json(request): Json<CreateValuationRequest>,
) -> impl IntoResponse {
    let (contact, company) = request.into_parts();

    if let Err(e) = validate_company_data(&company) {
        return error_response(&AppError::Validation(e.to_string()));
    }

    let sector_repo = SectorRepository::new((*state.db).clone());
    let sectors = match sector_repo.load_config_table().await {
        Ok(sectors) => sectors,
        Err(e) => {
            error!(error = %e, "Failed to load sector table");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    let result = match ValuationEngine::calculate(&company, &sectors) {
        Ok(result) => result,
        Err(ValuationError::SectorNotFound(id)) => return invalid_sector_response(&id),
    };

    let submission_repo = SubmissionRepository::new((*state.db).clone());
    let input = CreateSubmissionInput {
        company_name: contact.company_name,
        contact_name: contact.contact_name,
        email: contact.email,
        phone: contact.phone,
        company,
        result,
    };

    match submission_repo.create(input).await {
        Ok(model) => (
            StatusCode::CREATED,
            Json(ValuationResponse::from(model)),
        )
            .into_response(),
        Err(e @ SubmissionError::EmployeesOutOfRange(_)) => {
            error_response(&AppError::Validation(e.to_string()))
        }
        Err(e) => {
            error!(error = %e, "Failed to persist submission");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// 422 response for a sector id the configuration table does not know.
///
/// The wizard only offers sectors from `GET /sectors`, so hitting this means
/// a stale or hand-crafted request rather than a user mistake.
fn invalid_sector_response(sector_id: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": "invalid_sector",
            "message": format!("Invalid sector selected: '{sector_id}'")
        })),
    )
        .into_response()
}

/// GET `/valuations/{id}` - Fetch a persisted valuation for the report generator.
async fn get_valuation(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let repo = SubmissionRepository::new((*state.db).clone());
    match repo.find_by_id(id).await {
        Ok(model) => (StatusCode::OK, Json(ValuationResponse::from(model))).into_response(),
        Err(SubmissionError::NotFound(_)) => {
            error_response(&AppError::NotFound(format!("valuation {id}")))
        }
        Err(e) => {
            error!(error = %e, "Failed to load submission");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}
