use actix_web::{dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::settings::types::Settings;
use db_adapters::tag_adapter::{TagAdapter, TagMutation};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DbConn, DbErr};
use server::get_routes;
use use_cases::tagging::{RemoteClassifier, TaggingService, VOCABULARY};
use web_adapters::AppState;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let mut db = get_database_connection(&settings).await;
        if let Some(conn) = &db {
            if let Err(e) = prepare_database(conn).await {
                tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to prepare database: {:?}", e);
                db = None;
            }
        }

        let classifier = settings.classifier.api_key.clone().map(RemoteClassifier::new);
        if classifier.is_none() {
            tracing::event!(target: "backend", tracing::Level::INFO, "No classifier credential configured, tagging is lexical only.");
        }
        let state = AppState {
            db,
            tagging: TaggingService::new(classifier),
        };

        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let server = run(listener, state)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub async fn get_database_connection(settings: &Settings) -> Option<DbConn> {
    let url = match &settings.database.url {
        Some(url) => url.clone(),
        None => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "DATABASE_URL is not set, serving without database access.");
            return None;
        }
    };
    match Database::connect(&url).await {
        Ok(db) => Some(db),
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to open DB connection: {:?}", e);
            None
        }
    }
}

async fn prepare_database(db: &DbConn) -> Result<(), DbErr> {
    Migrator::up(db, None).await?;
    TagAdapter::init(db).seed(VOCABULARY).await
}

fn run(listener: std::net::TcpListener, state: AppState) -> Result<Server, std::io::Error> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .service(get_routes())
            .app_data(Data::new(state.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
