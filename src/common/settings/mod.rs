use std::env;

use crate::settings::types::{ApplicationSettings, Environment, Settings};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name).ok();

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => get_development_settings(),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "127.0.0.1".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            host: "0.0.0.0".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(mut s: Settings) -> Result<Settings, String> {
    if let Ok(port) = env::var("APP_PORT") {
        s.application.port = port.parse::<u16>().map_err(|e| e.to_string())?;
    }
    s.database.url = env::var("DATABASE_URL").ok();
    s.classifier.api_key = env::var("OPENAI_API_KEY").ok();
    s.debug = match env::var("APP_DEBUG") {
        Ok(debug) => &debug == "true",
        Err(_) => s.debug,
    };
    Ok(s)
}
