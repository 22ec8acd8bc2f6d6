// Library exports for integration tests and reusable components

pub mod catalog;
pub mod catalog_context;
pub mod config;
pub mod filter;
pub mod models;
pub mod table;

// Internal UI modules needed for compilation (hidden from docs)
#[doc(hidden)]
pub mod ui;
