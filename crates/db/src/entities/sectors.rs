//! `SeaORM` Entity for the sectors table.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use valuar_core::valuation::SectorConfig;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sectors")]
pub struct Model {
    /// Stable slug referenced by submissions, e.g. "bouw".
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub multiple: Decimal,
    pub description: String,
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SectorConfig {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            multiple: model.multiple,
            description: model.description,
            text: model.text,
        }
    }
}
