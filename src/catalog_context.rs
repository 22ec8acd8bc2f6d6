use crate::catalog::{CatalogClient, CatalogError};
use crate::config::Config;
use crate::models::Product;
use dioxus::prelude::*;
use std::time::Duration;
use tracing::{error, info, warn};

/// Total attempts per fetch: the initial call plus two silent retries.
const FETCH_ATTEMPTS: u32 = 3;
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Lifecycle of the one catalog fetch for this mount.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Pending,
    Success(Vec<Product>),
    Failed(String),
}

/// Coordinates the single catalog request: starts it at most once per
/// mount, hides intermediate retry attempts from the view, and memoizes
/// the settled result. There is exactly one query shape, so the cache
/// key degenerates to a started flag.
#[derive(Clone)]
pub struct CatalogContext {
    pub state: Signal<FetchState>,
    started: Signal<bool>,
    client: CatalogClient,
}

impl CatalogContext {
    pub fn is_loading(&self) -> bool {
        matches!(*self.state.read(), FetchState::Pending)
    }

    pub fn has_error(&self) -> bool {
        matches!(*self.state.read(), FetchState::Failed(_))
    }

    pub fn error_message(&self) -> Option<String> {
        match &*self.state.read() {
            FetchState::Failed(message) => Some(message.clone()),
            _ => None,
        }
    }

    pub fn products(&self) -> Option<Vec<Product>> {
        match &*self.state.read() {
            FetchState::Success(products) => Some(products.clone()),
            _ => None,
        }
    }

    /// Start the catalog fetch. No-op once started: the result is
    /// memoized for the lifetime of the mount, with no revalidation.
    pub fn load(&mut self) {
        if *self.started.read() {
            return;
        }
        self.started.set(true);
        self.spawn_fetch();
    }

    /// Re-arm a settled failure and fetch again. No-op unless Failed.
    pub fn retry(&mut self) {
        if !matches!(*self.state.read(), FetchState::Failed(_)) {
            return;
        }
        self.state.set(FetchState::Pending);
        self.spawn_fetch();
    }

    fn spawn_fetch(&self) {
        let client = self.client.clone();
        let mut state = self.state.clone();

        // The task is owned by the provider's scope; Dioxus drops it on
        // unmount, so a late completion never writes to a disposed view.
        spawn(async move {
            match fetch_with_retry(&client).await {
                Ok(products) => {
                    state.set(FetchState::Success(products));
                }
                Err(e) => {
                    state.set(FetchState::Failed(e.to_string()));
                }
            }
        });
    }
}

/// Call the catalog up to `FETCH_ATTEMPTS` times, settling on the last
/// error. Callers see only the final result; the state stays Pending
/// across attempts.
pub async fn fetch_with_retry(client: &CatalogClient) -> Result<Vec<Product>, CatalogError> {
    let mut attempt = 1;
    loop {
        match client.fetch_products().await {
            Ok(products) => {
                info!("Catalog fetch succeeded with {} products", products.len());
                return Ok(products);
            }
            Err(e) if attempt < FETCH_ATTEMPTS => {
                warn!("Catalog fetch attempt {attempt} failed: {e}, retrying");
                attempt += 1;
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => {
                error!("Catalog fetch failed after {FETCH_ATTEMPTS} attempts: {e}");
                return Err(e);
            }
        }
    }
}

/// Provider component making the catalog state available to the whole
/// page tree and kicking off the fetch on mount.
#[component]
pub fn CatalogProvider(children: Element) -> Element {
    let config = use_hook(Config::load);
    let catalog_ctx = CatalogContext {
        state: use_signal(|| FetchState::Pending),
        started: use_signal(|| false),
        client: CatalogClient::new(config.catalog_url),
    };
    use_context_provider(|| catalog_ctx.clone());

    use_effect({
        let mut catalog_ctx = catalog_ctx.clone();
        move || {
            catalog_ctx.load();
        }
    });

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exhausted_retries_settle_on_the_last_error() {
        // Discard port: nothing listens there, every attempt is refused.
        let client = CatalogClient::new("http://127.0.0.1:9/products".to_string());
        let result = fetch_with_retry(&client).await;
        assert!(result.is_err());
    }
}
