//! Initial database migration.
//!
//! Creates the sector configuration table and the submissions table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(SECTORS_SQL).await?;
        db.execute_unprepared(SUBMISSIONS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared("DROP TABLE IF EXISTS submissions;")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS sectors;").await?;

        Ok(())
    }
}

const SECTORS_SQL: &str = r"
CREATE TABLE sectors (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    multiple    NUMERIC(6, 2) NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    text        TEXT NOT NULL DEFAULT '',
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const SUBMISSIONS_SQL: &str = r"
CREATE TABLE submissions (
    id                           UUID PRIMARY KEY,
    company_name                 TEXT NOT NULL,
    contact_name                 TEXT NOT NULL,
    email                        TEXT NOT NULL,
    phone                        TEXT,
    last_year_revenue            NUMERIC(16, 2) NOT NULL,
    recurring_revenue_percentage NUMERIC(5, 2) NOT NULL,
    result_2024                  NUMERIC(16, 2) NOT NULL,
    expected_result_2025         NUMERIC(16, 2) NOT NULL,
    was_lossmaking               BOOLEAN NOT NULL,
    prospects                    TEXT NOT NULL,
    average_yearly_investment    NUMERIC(16, 2) NOT NULL,
    sector_id                    TEXT NOT NULL REFERENCES sectors(id),
    employees                    INTEGER NOT NULL,
    largest_client_dependency    NUMERIC(5, 2) NOT NULL,
    largest_supplier_risk        TEXT NOT NULL,
    base_valuation               NUMERIC(18, 0) NOT NULL,
    min_valuation                NUMERIC(18, 0) NOT NULL,
    max_valuation                NUMERIC(18, 0) NOT NULL,
    multiple                     NUMERIC(10, 4) NOT NULL,
    sector_name                  TEXT NOT NULL,
    created_at                   TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_submissions_created_at ON submissions (created_at DESC);
CREATE INDEX idx_submissions_sector_id ON submissions (sector_id);
";
