use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tags")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
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

impl Related<super::grant::Entity> for Entity {
    fn to() -> RelationDef {
        super::grants_tags::Relation::Grant.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::grants_tags::Relation::Tag.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
