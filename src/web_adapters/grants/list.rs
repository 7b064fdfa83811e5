use actix_web::{get, web::Data, HttpResponse};
use db_adapters::grant_adapter::GrantAdapter;
use use_cases::grants::list::list_grants;

use crate::{
    utils::{handle_use_case_error, response_db_unavailable},
    AppState,
};

#[tracing::instrument(name = "Listing all grants", skip(state))]
#[get("")]
pub async fn list_grants_endpoint(state: Data<AppState>) -> HttpResponse {
    match &state.db {
        Some(db) => match list_grants(GrantAdapter::init(db)).await {
            Ok(res) => HttpResponse::Ok().json(res),
            Err(e) => handle_use_case_error(e),
        },
        None => response_db_unavailable(),
    }
}
