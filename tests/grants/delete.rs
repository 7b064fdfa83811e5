use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::{json, Value};
use test_utils::factory::{self, *};

use crate::utils::init_app;

#[actix_web::test]
async fn deletes_a_grant_and_its_tag_links() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let grant = factory::grant().insert(&db).await?;
    let dairy = entities::tag::Entity::find()
        .filter(entities::tag::Column::Name.eq("dairy"))
        .one(&db)
        .await?
        .unwrap();
    factory::link_grant_tag(&db, grant.id, dairy.id).await?;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/grants/{}", grant.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Grant deleted successfully"));

    assert!(entities::grant::Entity::find_by_id(grant.id)
        .one(&db)
        .await?
        .is_none());
    assert_eq!(entities::grants_tags::Entity::find().all(&db).await?.len(), 0);
    // The tag itself outlives the grant.
    assert!(entities::tag::Entity::find_by_id(dairy.id)
        .one(&db)
        .await?
        .is_some());
    Ok(())
}

#[actix_web::test]
async fn deleting_an_unknown_id_changes_nothing() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let grant = factory::grant().insert(&db).await?;

    let req = test::TestRequest::delete()
        .uri("/api/grants/99999")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Grant not found"));

    assert!(entities::grant::Entity::find_by_id(grant.id)
        .one(&db)
        .await?
        .is_some());
    Ok(())
}
