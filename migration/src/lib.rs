pub use sea_orm_migration::prelude::*;

mod m20260807_000001_create_grants_table;
mod m20260807_000002_create_tags_table;
mod m20260807_000003_create_grants_tags_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260807_000001_create_grants_table::Migration),
            Box::new(m20260807_000002_create_tags_table::Migration),
            Box::new(m20260807_000003_create_grants_tags_table::Migration),
        ]
    }
}
