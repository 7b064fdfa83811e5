use actix_web::{get, web::Data, HttpResponse};
use db_adapters::tag_adapter::TagAdapter;
use use_cases::tags::list::list_tags;

use crate::{
    utils::{handle_use_case_error, response_db_unavailable},
    AppState,
};

#[tracing::instrument(name = "Listing available tags", skip(state))]
#[get("")]
pub async fn list_tags_endpoint(state: Data<AppState>) -> HttpResponse {
    match &state.db {
        Some(db) => match list_tags(TagAdapter::init(db)).await {
            Ok(res) => HttpResponse::Ok().json(res),
            Err(e) => handle_use_case_error(e),
        },
        None => response_db_unavailable(),
    }
}
