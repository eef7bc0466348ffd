use std::env;
use std::str::FromStr;

use lazy_static::lazy_static;

use crate::constants::DEFAULT_PAGE_SIZE;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Base URL prepended to generated page links; empty for root-relative links.
    pub app_url: String,
    pub locale: String,
    pub fallback_locale: String,
    pub lang_dir: String,
    pub default_per_page: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_var("SERVER_PORT", 8080),
            app_url: env::var("APP_URL").unwrap_or_default(),
            locale: env::var("APP_LOCALE").unwrap_or_else(|_| "en".to_string()),
            fallback_locale: env::var("APP_FALLBACK_LOCALE").unwrap_or_else(|_| "en".to_string()),
            lang_dir: env::var("LANG_DIR").unwrap_or_else(|_| "./resources/lang".to_string()),
            default_per_page: parse_var("DEFAULT_PER_PAGE", DEFAULT_PAGE_SIZE),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("{} is not a valid value ('{}'), using default", name, raw);
            default
        }),
        Err(_) => default,
    }
}
