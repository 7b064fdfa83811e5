use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::grant_adapter::GrantAdapter;
use use_cases::grants::{search::search_grants, types::GrantSearchRequest};

use crate::{
    utils::{handle_use_case_error, response_db_unavailable},
    AppState,
};

#[tracing::instrument(name = "Searching grants by tags", skip(state))]
#[post("/search")]
pub async fn search_grants_endpoint(
    state: Data<AppState>,
    req: Json<GrantSearchRequest>,
) -> HttpResponse {
    match &state.db {
        Some(db) => match search_grants(req.into_inner(), GrantAdapter::init(db)).await {
            Ok(res) => HttpResponse::Ok().json(res),
            Err(e) => handle_use_case_error(e),
        },
        None => response_db_unavailable(),
    }
}
