use actix_web::{http, test};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use serde_json::{json, Value};
use test_utils::factory::{self, *};

use crate::utils::init_app;

#[actix_web::test]
async fn lists_grants_with_resolved_tags() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;
    let water_grant = factory::grant().name("Water Grant").insert(&db).await?;
    let water = entities::tag::Entity::find()
        .filter(entities::tag::Column::Name.eq("water"))
        .one(&db)
        .await?
        .unwrap();
    factory::link_grant_tag(&db, water_grant.id, water.id).await?;
    let untagged_grant = factory::grant().name("Untagged Grant").insert(&db).await?;

    let req = test::TestRequest::get().uri("/api/grants").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(2));

    let grants = body["grants"].as_array().unwrap();
    let tagged = grants
        .iter()
        .find(|grant| grant["id"] == json!(water_grant.id))
        .unwrap();
    assert_eq!(tagged["grant_name"], json!("Water Grant"));
    assert_eq!(tagged["tags"], json!(["water"]));

    let untagged = grants
        .iter()
        .find(|grant| grant["id"] == json!(untagged_grant.id))
        .unwrap();
    assert_eq!(untagged["tags"], json!([]));
    Ok(())
}

#[actix_web::test]
async fn lists_nothing_when_empty() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::get().uri("/api/grants").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["grants"], json!([]));
    assert_eq!(body["count"], json!(0));
    Ok(())
}
