use std::future::Future;

use sea_orm::{
    sea_query::OnConflict, DbConn, DbErr, EntityTrait, QueryOrder, Select, Set,
};

use entities::tag::{ActiveModel, Column, Entity, Model};

#[derive(Clone)]
pub struct TagAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> TagAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait TagQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
}

impl TagQuery for TagAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.order_by_asc(Column::Id).all(self.db).await
    }
}

pub trait TagMutation {
    /// Upserts the given names, leaving existing rows untouched.
    /// Safe to re-run on every startup.
    fn seed(self, names: &[&str]) -> impl Future<Output = Result<(), DbErr>>;
}

impl TagMutation for TagAdapter<'_> {
    async fn seed(self, names: &[&str]) -> Result<(), DbErr> {
        let models = names.iter().map(|name| ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        });
        Entity::insert_many(models)
            .on_conflict(OnConflict::column(Column::Name).do_nothing().to_owned())
            .do_nothing()
            .exec(self.db)
            .await
            .map(|_| ())
    }
}
