use std::future::Future;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, JoinType::InnerJoin, ModelTrait,
    QueryFilter, QuerySelect, RelationTrait, Select, Set, TransactionError, TransactionTrait,
};

use entities::{
    grant::{ActiveModel, Column, Entity, Model, Relation},
    grants_tags, tag,
};

#[derive(Clone)]
pub struct GrantAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> GrantAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait GrantQuery {
    fn get_all_with_tags(
        self,
    ) -> impl Future<Output = Result<Vec<(Model, Vec<tag::Model>)>, DbErr>>;
    fn get_by_id(self, id: i32) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_id_with_tags(
        self,
        id: i32,
    ) -> impl Future<Output = Result<Option<(Model, Vec<tag::Model>)>, DbErr>>;
    fn search_by_tag_names(
        self,
        names: Vec<String>,
    ) -> impl Future<Output = Result<Vec<(Model, Vec<tag::Model>)>, DbErr>>;
}

impl GrantQuery for GrantAdapter<'_> {
    async fn get_all_with_tags(self) -> Result<Vec<(Model, Vec<tag::Model>)>, DbErr> {
        self.query.find_with_related(tag::Entity).all(self.db).await
    }

    async fn get_by_id(self, id: i32) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_id_with_tags(self, id: i32) -> Result<Option<(Model, Vec<tag::Model>)>, DbErr> {
        Ok(self
            .query
            .filter(Column::Id.eq(id))
            .find_with_related(tag::Entity)
            .all(self.db)
            .await?
            .into_iter()
            .next())
    }

    async fn search_by_tag_names(
        self,
        names: Vec<String>,
    ) -> Result<Vec<(Model, Vec<tag::Model>)>, DbErr> {
        let ids: Vec<i32> = self
            .query
            .clone()
            .join(InnerJoin, Relation::GrantsTags.def())
            .join(InnerJoin, grants_tags::Relation::Tag.def())
            .filter(tag::Column::Name.is_in(names))
            .select_only()
            .column(Column::Id)
            .distinct()
            .into_tuple()
            .all(self.db)
            .await?;
        self.query
            .filter(Column::Id.is_in(ids))
            .find_with_related(tag::Entity)
            .all(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateGrantParams {
    pub name: String,
    pub description: String,
    pub tag_names: Vec<String>,
}

pub trait GrantMutation {
    fn create_many(
        self,
        params: Vec<CreateGrantParams>,
    ) -> impl Future<Output = Result<Vec<(Model, Vec<tag::Model>)>, TransactionError<DbErr>>>;
    fn delete(self, grant: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl GrantMutation for GrantAdapter<'_> {
    async fn create_many(
        self,
        params: Vec<CreateGrantParams>,
    ) -> Result<Vec<(Model, Vec<tag::Model>)>, TransactionError<DbErr>> {
        self.db
            .transaction::<_, Vec<(Model, Vec<tag::Model>)>, DbErr>(|txn| {
                Box::pin(async move {
                    let mut created = Vec::new();
                    for param in params {
                        let grant = ActiveModel {
                            name: Set(param.name),
                            description: Set(param.description),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;
                        // Assigned names missing from the tags table are skipped, not errors.
                        let tags = tag::Entity::find()
                            .filter(tag::Column::Name.is_in(param.tag_names))
                            .all(txn)
                            .await?;
                        let links = tags.iter().map(|tag| grants_tags::ActiveModel {
                            grant_id: Set(grant.id),
                            tag_id: Set(tag.id),
                        });
                        grants_tags::Entity::insert_many(links)
                            .on_empty_do_nothing()
                            .exec(txn)
                            .await?;
                        created.push((grant, tags));
                    }
                    Ok(created)
                })
            })
            .await
    }

    async fn delete(self, grant: Model) -> Result<(), DbErr> {
        grant.delete(self.db).await.map(|_| ())
    }
}
