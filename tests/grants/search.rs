use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::{json, Value};
use test_utils::factory::{self, *};

use crate::utils::init_app;

async fn find_tag(db: &sea_orm::DbConn, name: &str) -> Result<entities::tag::Model, DbErr> {
    Ok(entities::tag::Entity::find()
        .filter(entities::tag::Column::Name.eq(name))
        .one(db)
        .await?
        .unwrap())
}

#[actix_web::test]
async fn matches_grants_carrying_any_requested_tag() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let dairy = find_tag(&db, "dairy").await?;
    let water = find_tag(&db, "water").await?;
    let dairy_grant = factory::grant().name("Dairy Grant").insert(&db).await?;
    let water_grant = factory::grant().name("Water Grant").insert(&db).await?;
    let both_grant = factory::grant().name("Both Grant").insert(&db).await?;
    let _plain_grant = factory::grant().name("Plain Grant").insert(&db).await?;
    factory::link_grant_tag(&db, dairy_grant.id, dairy.id).await?;
    factory::link_grant_tag(&db, water_grant.id, water.id).await?;
    factory::link_grant_tag(&db, both_grant.id, dairy.id).await?;
    factory::link_grant_tag(&db, both_grant.id, water.id).await?;

    let req = test::TestRequest::post()
        .uri("/api/grants/search")
        .set_json(json!({"tags": ["dairy"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["search_tags"], json!(["dairy"]));
    let mut ids: Vec<i64> = body["grants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|grant| grant["id"].as_i64().unwrap())
        .collect();
    ids.sort();
    assert_eq!(ids, vec![dairy_grant.id as i64, both_grant.id as i64]);

    // OR semantics: either tag is enough, matches are not duplicated.
    let req = test::TestRequest::post()
        .uri("/api/grants/search")
        .set_json(json!({"tags": ["dairy", "water"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], json!(3));
    Ok(())
}

#[actix_web::test]
async fn empty_tag_list_returns_every_grant() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    factory::grant().name("First").insert(&db).await?;
    factory::grant().name("Second").insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/grants/search")
        .set_json(json!({"tags": []}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["search_tags"], json!([]));

    // A missing tags field behaves the same way.
    let req = test::TestRequest::post()
        .uri("/api/grants/search")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], json!(2));
    Ok(())
}

#[actix_web::test]
async fn unknown_tags_match_nothing() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    factory::grant().insert(&db).await?;

    let req = test::TestRequest::post()
        .uri("/api/grants/search")
        .set_json(json!({"tags": ["blockchain"]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(0));
    Ok(())
}
