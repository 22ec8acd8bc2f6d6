mod error;
mod filter_form;
mod loading;
mod page;
mod pager;
mod product_row;
mod product_table;

pub use page::CatalogPage;
