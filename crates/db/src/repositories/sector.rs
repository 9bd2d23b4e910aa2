//! Sector repository for sector configuration lookups.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use tracing::debug;

use crate::entities::sectors;
use valuar_core::valuation::SectorConfig;

/// Error types for sector operations.
#[derive(Debug, thiserror::Error)]
pub enum SectorError {
    /// Sector not found.
    #[error("Sector '{0}' not found")]
    NotFound(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Sector repository for read access to the configuration table.
#[derive(Debug, Clone)]
pub struct SectorRepository {
    db: DatabaseConnection,
}

impl SectorRepository {
    /// Creates a new sector repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all sectors ordered by display name.
    ///
    /// # Errors
    ///
    /// Returns an error on database failure.
    pub async fn list(&self) -> Result<Vec<sectors::Model>, SectorError> {
        Ok(sectors::Entity::find()
            .order_by_asc(sectors::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// Loads the sector table in the shape the valuation engine consumes.
    ///
    /// # Errors
    ///
    /// Returns an error on database failure.
    pub async fn load_config_table(&self) -> Result<Vec<SectorConfig>, SectorError> {
        let models = self.list().await?;
        debug!(count = models.len(), "Loaded sector configuration table");
        Ok(models.into_iter().map(SectorConfig::from).collect())
    }

    /// Finds a single sector by id.
    ///
    /// # Errors
    ///
    /// Returns `SectorError::NotFound` if no row matches, or a database error.
    pub async fn find_by_id(&self, id: &str) -> Result<sectors::Model, SectorError> {
        sectors::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| SectorError::NotFound(id.to_string()))
    }
}
