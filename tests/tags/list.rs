use actix_web::{http, test};
use sea_orm::DbErr;
use serde_json::{json, Value};
use use_cases::tagging::VOCABULARY;

use crate::utils::init_app;

#[actix_web::test]
async fn lists_the_seeded_vocabulary() -> Result<(), DbErr> {
    let (app, _) = init_app().await?;

    let req = test::TestRequest::get().uri("/api/tags").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(VOCABULARY.len()));

    let tags = body["tags"].as_array().unwrap();
    assert_eq!(tags[0], json!("agriculture"));
    assert!(tags.contains(&json!("dairy")));
    assert!(tags.contains(&json!("farm-to-school")));
    Ok(())
}
