use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use db_adapters::grant_adapter::GrantAdapter;
use use_cases::grants::{create::create_grants, types::GrantCreateRequest};

use crate::{
    utils::{handle_use_case_error, response_db_unavailable},
    AppState,
};

#[tracing::instrument(name = "Adding grants with automatic tagging", skip(state, req))]
#[post("")]
pub async fn add_grants_endpoint(
    state: Data<AppState>,
    req: Json<GrantCreateRequest>,
) -> HttpResponse {
    match &state.db {
        Some(db) => {
            match create_grants(req.into_inner(), &state.tagging, GrantAdapter::init(db)).await {
                Ok(res) => HttpResponse::Ok().json(res),
                Err(e) => handle_use_case_error(e),
            }
        }
        None => response_db_unavailable(),
    }
}
