//! `SeaORM` Entity for the submissions table.
//!
//! A submission stores the contact details, the company data exactly as
//! entered, and the computed result, so the report generator can re-render
//! a valuation without recomputing it.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub last_year_revenue: Decimal,
    pub recurring_revenue_percentage: Decimal,
    pub result_2024: Decimal,
    pub expected_result_2025: Decimal,
    pub was_lossmaking: bool,
    pub prospects: String,
    pub average_yearly_investment: Decimal,
    pub sector_id: String,
    pub employees: i32,
    pub largest_client_dependency: Decimal,
    pub largest_supplier_risk: String,
    pub base_valuation: Decimal,
    pub min_valuation: Decimal,
    pub max_valuation: Decimal,
    pub multiple: Decimal,
    pub sector_name: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sectors::Entity",
        from = "Column::SectorId",
        to = "super::sectors::Column::Id"
    )]
    Sectors,
}

impl Related<super::sectors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sectors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
