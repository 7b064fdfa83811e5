use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "grants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::grants_tags::Entity")]
    GrantsTags,
}

impl Related<super::grants_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GrantsTags.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::grants_tags::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::grants_tags::Relation::Grant.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
