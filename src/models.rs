use serde::{Deserialize, Serialize};

/// A single catalog product as shown in the table.
///
/// Products are fetched in one batch and never mutated client-side; the
/// whole vector is replaced on refetch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
}
