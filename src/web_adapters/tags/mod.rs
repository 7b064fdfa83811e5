mod list;

use actix_web::web::{scope, ServiceConfig};

pub fn tag_routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/tags").service(list::list_tags_endpoint));
}
