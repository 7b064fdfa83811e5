use actix_web::{
    get,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::grant_adapter::GrantAdapter;
use use_cases::grants::get::get_grant;

use crate::{
    utils::{handle_use_case_error, response_db_unavailable},
    AppState,
};

#[tracing::instrument(name = "Getting a grant", skip(state))]
#[get("/{grant_id}")]
pub async fn get_grant_endpoint(state: Data<AppState>, path: Path<i32>) -> HttpResponse {
    match &state.db {
        Some(db) => match get_grant(path.into_inner(), GrantAdapter::init(db)).await {
            Ok(res) => HttpResponse::Ok().json(res),
            Err(e) => handle_use_case_error(e),
        },
        None => response_db_unavailable(),
    }
}
