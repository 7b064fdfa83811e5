mod create;
mod delete;
mod get;
mod list;
mod search;

use actix_web::web::{scope, ServiceConfig};

pub fn grant_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/grants")
            .service(list::list_grants_endpoint)
            .service(create::add_grants_endpoint)
            .service(search::search_grants_endpoint)
            .service(get::get_grant_endpoint)
            .service(delete::delete_grant_endpoint),
    );
}
