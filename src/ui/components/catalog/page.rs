use dioxus::prelude::*;

use crate::catalog_context::CatalogContext;
use crate::filter::{visible_products, FilterCriteria};
use crate::table::{Paginator, PAGE_SIZE};

use super::error::CatalogErrorPanel;
use super::filter_form::FilterForm;
use super::loading::CatalogLoading;
use super::pager::Pager;
use super::product_table::ProductTable;

/// Catalog page: filter inputs, fetch status panels, and the paginated
/// product table. The visible set is re-derived from the fetched catalog
/// and the current criteria on every relevant change.
#[component]
pub fn CatalogPage() -> Element {
    let catalog_ctx = use_context::<CatalogContext>();
    let title_query = use_signal(String::new);
    let max_price_input = use_signal(String::new);
    let pager = use_signal(|| Paginator::new(PAGE_SIZE));

    // A non-numeric or non-positive max price means "no price filter".
    let criteria = use_memo(move || FilterCriteria {
        title_query: title_query(),
        max_price: max_price_input
            .read()
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| *price > 0.0),
    });

    let visible = use_memo({
        let catalog_ctx = catalog_ctx.clone();
        move || {
            let products = catalog_ctx.products().unwrap_or_default();
            visible_products(&products, &criteria())
        }
    });

    rsx! {
        div {
            class: "container mx-auto p-6",
            h1 {
                class: "text-3xl font-bold mb-6",
                "Product Catalog"
            }

            FilterForm {
                title_query: title_query,
                max_price_input: max_price_input,
                pager: pager,
            }

            if catalog_ctx.is_loading() {
                CatalogLoading {}
            } else if catalog_ctx.has_error() {
                CatalogErrorPanel {
                    message: catalog_ctx.error_message().unwrap_or_default()
                }
            } else {
                ProductTable { rows: visible(), pager: pager }
                Pager { pager: pager, len: visible.read().len() }
            }
        }
    }
}
