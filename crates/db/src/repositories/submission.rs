//! Submission repository for persisting valuation submissions.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, Set};
use tracing::debug;
use uuid::Uuid;

use crate::entities::submissions;
use valuar_core::valuation::{CompanyData, ValuationResult};
use valuar_shared::types::SubmissionId;

/// Error types for submission operations.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// Submission not found.
    #[error("Submission '{0}' not found")]
    NotFound(Uuid),

    /// Employee count does not fit the storage column.
    #[error("Employee count {0} exceeds storage range")]
    EmployeesOutOfRange(u32),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Input for persisting a submission: who asked, what they entered, what
/// the engine answered.
#[derive(Debug, Clone)]
pub struct CreateSubmissionInput {
    /// Company name from the contact step.
    pub company_name: String,
    /// Contact person's name.
    pub contact_name: String,
    /// Contact email, used for report delivery.
    pub email: String,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Company data as entered in the wizard.
    pub company: CompanyData,
    /// Result computed by the valuation engine.
    pub result: ValuationResult,
}

/// Submission repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct SubmissionRepository {
    db: DatabaseConnection,
}

impl SubmissionRepository {
    /// Creates a new submission repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a submission together with its computed result.
    ///
    /// # Errors
    ///
    /// Returns an error if the employee count does not fit the column or on
    /// database failure.
    pub async fn create(
        &self,
        input: CreateSubmissionInput,
    ) -> Result<submissions::Model, SubmissionError> {
        let employees = i32::try_from(input.company.employees)
            .map_err(|_| SubmissionError::EmployeesOutOfRange(input.company.employees))?;

        let model = submissions::ActiveModel {
            id: Set(SubmissionId::new().into_inner()),
            company_name: Set(input.company_name),
            contact_name: Set(input.contact_name),
            email: Set(input.email),
            phone: Set(input.phone),
            last_year_revenue: Set(input.company.last_year_revenue),
            recurring_revenue_percentage: Set(input.company.recurring_revenue_percentage),
            result_2024: Set(input.company.result_2024),
            expected_result_2025: Set(input.company.expected_result_2025),
            was_lossmaking: Set(input.company.was_lossmaking),
            prospects: Set(input.company.prospects.to_string()),
            average_yearly_investment: Set(input.company.average_yearly_investment),
            sector_id: Set(input.company.sector),
            employees: Set(employees),
            largest_client_dependency: Set(input.company.largest_client_dependency),
            largest_supplier_risk: Set(input.company.largest_supplier_risk),
            base_valuation: Set(input.result.base_valuation),
            min_valuation: Set(input.result.min_valuation),
            max_valuation: Set(input.result.max_valuation),
            multiple: Set(input.result.multiple),
            sector_name: Set(input.result.sector),
            created_at: Set(Utc::now().into()),
        };

        let model = model.insert(&self.db).await?;
        debug!(id = %model.id, sector = %model.sector_id, "Persisted valuation submission");
        Ok(model)
    }

    /// Finds a submission by id.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionError::NotFound` if no row matches, or a database
    /// error.
    pub async fn find_by_id(&self, id: Uuid) -> Result<submissions::Model, SubmissionError> {
        submissions::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(SubmissionError::NotFound(id))
    }

    /// Lists the most recent submissions, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error on database failure.
    pub async fn list_recent(&self, limit: u64) -> Result<Vec<submissions::Model>, SubmissionError> {
        Ok(submissions::Entity::find()
            .order_by_desc(submissions::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await?)
    }
}
