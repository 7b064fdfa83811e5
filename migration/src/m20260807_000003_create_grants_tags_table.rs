use sea_orm_migration::{
    prelude::{
        async_trait,
        sea_orm::{self, DeriveIden},
        DbErr, DeriveMigrationName, ForeignKey, ForeignKeyAction, Index, MigrationTrait,
        SchemaManager, Table,
    },
    schema::integer,
};

use crate::{
    m20260807_000001_create_grants_table::Grant, m20260807_000002_create_tags_table::Tag,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GrantsTags::Table)
                    .if_not_exists()
                    .col(integer(GrantsTags::GrantId))
                    .col(integer(GrantsTags::TagId))
                    .primary_key(
                        Index::create()
                            .name("pk-grants_tags")
                            .col(GrantsTags::GrantId)
                            .col(GrantsTags::TagId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grants_tags-grant_id")
                            .from(GrantsTags::Table, GrantsTags::GrantId)
                            .to(Grant::Table, Grant::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-grants_tags-tag_id")
                            .from(GrantsTags::Table, GrantsTags::TagId)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GrantsTags::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GrantsTags {
    Table,
    GrantId,
    TagId,
}
