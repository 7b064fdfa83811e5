use actix_web::{
    delete,
    web::{Data, Path},
    HttpResponse,
};
use db_adapters::grant_adapter::GrantAdapter;
use use_cases::grants::delete::delete_grant;

use crate::{
    utils::{handle_use_case_error, response_db_unavailable},
    AppState,
};

#[tracing::instrument(name = "Deleting a grant", skip(state))]
#[delete("/{grant_id}")]
pub async fn delete_grant_endpoint(state: Data<AppState>, path: Path<i32>) -> HttpResponse {
    match &state.db {
        Some(db) => match delete_grant(path.into_inner(), GrantAdapter::init(db)).await {
            Ok(res) => HttpResponse::Ok().json(res),
            Err(e) => handle_use_case_error(e),
        },
        None => response_db_unavailable(),
    }
}
