mod grants;
mod health;
mod tags;
mod utils;

use sea_orm::DbConn;
use use_cases::tagging::TaggingService;

pub use grants::grant_routes;
pub use health::health_check;
pub use tags::tag_routes;

/// Shared per-process state, built once at startup and injected into every
/// handler. `db` is `None` when the store failed to initialize; handlers
/// degrade to an error response instead of crashing.
#[derive(Clone)]
pub struct AppState {
    pub db: Option<DbConn>,
    pub tagging: TaggingService,
}
