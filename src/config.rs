use tracing::info;

const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products";

/// Application configuration.
/// In debug builds a .env file is loaded first; `VITRINE_CATALOG_URL`
/// overrides the catalog endpoint either way.
#[derive(Clone, Debug)]
pub struct Config {
    /// Endpoint serving the full product catalog as JSON.
    pub catalog_url: String,
}

impl Config {
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode - loaded .env file");
            }
        }

        let catalog_url = std::env::var("VITRINE_CATALOG_URL")
            .unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

        info!("Config: catalog endpoint {catalog_url}");

        Self { catalog_url }
    }
}
