use entities::grants_tags;
use sea_orm::{prelude::*, DbConn, DbErr, Set};

pub async fn link_grant_tag(
    db: &DbConn,
    grant_id: i32,
    tag_id: i32,
) -> Result<grants_tags::Model, DbErr> {
    grants_tags::ActiveModel {
        grant_id: Set(grant_id),
        tag_id: Set(tag_id),
    }
    .insert(db)
    .await
}
