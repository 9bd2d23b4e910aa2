//! Sector listing routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::AppState;
use crate::routes::error_response;
use valuar_db::SectorRepository;
use valuar_shared::AppError;

/// Creates the sector routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/sectors", get(list_sectors))
}

/// Response for a sector, as needed by the wizard's sector dropdown.
#[derive(Debug, Serialize)]
pub struct SectorResponse {
    /// Sector id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Base EBITDA multiple.
    pub multiple: Decimal,
    /// Short description.
    pub description: String,
    /// Sector paragraph shown on the valuation report.
    pub text: String,
}

/// GET `/sectors` - List all sectors.
async fn list_sectors(State(state): State<AppState>) -> impl IntoResponse {
    let repo = SectorRepository::new((*state.db).clone());
    match repo.list().await {
        Ok(sectors) => {
            let response: Vec<SectorResponse> = sectors
                .into_iter()
                .map(|s| SectorResponse {
                    id: s.id,
                    name: s.name,
                    multiple: s.multiple,
                    description: s.description,
                    text: s.text,
                })
                .collect();

            (StatusCode::OK, Json(json!({ "sectors": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list sectors");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}
