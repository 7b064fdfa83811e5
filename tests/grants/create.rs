use actix_web::{http, test};
use sea_orm::{DbErr, EntityTrait};
use serde_json::{json, Value};

use crate::utils::init_app;

#[actix_web::test]
async fn creates_a_grant_with_lexical_tags() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/grants")
        .set_json(json!({
            "grant_name": "Dairy Equipment Grant",
            "grant_description": "Funding for dairy farmers to purchase new equipment"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(1));

    let grant = &body["grants_added"][0];
    assert!(grant["id"].as_i64().unwrap() > 0);
    assert_eq!(grant["grant_name"], json!("Dairy Equipment Grant"));
    let tags: Vec<&str> = grant["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|tag| tag.as_str().unwrap())
        .collect();
    assert!(tags.contains(&"dairy"));
    assert!(tags.contains(&"equipment"));

    assert_eq!(entities::grant::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

#[actix_web::test]
async fn accepts_an_array_of_grants() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/grants")
        .set_json(json!([
            {"grant_name": "Water Grant", "grant_description": "irrigation systems"},
            {"grant_name": "Soil Grant", "grant_description": "soil health research"}
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], json!(2));
    assert_eq!(entities::grant::Entity::find().all(&db).await?.len(), 2);
    Ok(())
}

#[actix_web::test]
async fn batch_drops_entries_missing_required_fields() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/grants")
        .set_json(json!([
            {"grant_name": "A", "grant_description": "desc"},
            {"grant_name": "", "grant_description": "x"},
            {"grant_description": "no name at all"}
        ]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["grants_added"][0]["grant_name"], json!("A"));

    assert_eq!(entities::grant::Entity::find().all(&db).await?.len(), 1);
    Ok(())
}

#[actix_web::test]
async fn rejects_a_batch_with_no_valid_entries() -> Result<(), DbErr> {
    let (app, db) = init_app().await?;

    let req = test::TestRequest::post()
        .uri("/api/grants")
        .set_json(json!([]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/api/grants")
        .set_json(json!([{"grant_name": "", "grant_description": ""}]))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("No valid grants provided."));

    assert_eq!(entities::grant::Entity::find().all(&db).await?.len(), 0);
    Ok(())
}
