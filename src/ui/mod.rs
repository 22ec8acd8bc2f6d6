#[cfg(feature = "desktop")]
pub mod app;
pub mod components;

#[cfg(feature = "desktop")]
pub use app::*;
