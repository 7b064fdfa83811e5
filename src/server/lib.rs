use actix_web::{web::scope, Scope};
use web_adapters::{grant_routes, health_check, tag_routes};

pub fn get_routes() -> Scope {
    scope("/api")
        .service(health_check)
        .configure(grant_routes)
        .configure(tag_routes)
}
