use crate::models::Product;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 10;

/// How a cell should be rendered by the view.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Currency(f64),
    Image(String),
}

/// One column of the product table: a header label plus an accessor that
/// produces the cell value for a row. The view renders by iterating the
/// schema, so adding a column never touches the table markup.
pub struct Column {
    pub label: &'static str,
    pub cell: fn(&Product) -> CellValue,
}

/// The fixed catalog table schema, in display order.
pub fn product_columns() -> Vec<Column> {
    vec![
        Column {
            label: "ID",
            cell: |p| CellValue::Text(p.id.to_string()),
        },
        Column {
            label: "Title",
            cell: |p| CellValue::Text(p.title.clone()),
        },
        Column {
            label: "Price",
            cell: |p| CellValue::Currency(p.price),
        },
        Column {
            label: "Description",
            cell: |p| CellValue::Text(p.description.clone()),
        },
        Column {
            label: "Image",
            cell: |p| CellValue::Image(p.image.clone()),
        },
    ]
}

pub fn format_currency(price: f64) -> String {
    format!("${:.2}", price)
}

/// Page window state over the filtered product list.
///
/// Invariant: `page_index` stays inside `0..page_count(len)` for whatever
/// list the callers are currently paging; `reset` must be called whenever
/// the membership of that list changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator {
    page_index: usize,
    page_size: usize,
}

impl Paginator {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of pages for a list of `len` items, never less than 1.
    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// The `[page*size, page*size+size)` window of `rows`, clamped to bounds.
    pub fn current_page_rows<'a>(&self, rows: &'a [Product]) -> &'a [Product] {
        let start = (self.page_index * self.page_size).min(rows.len());
        let end = (start + self.page_size).min(rows.len());
        &rows[start..end]
    }

    pub fn can_go_previous(&self) -> bool {
        self.page_index > 0
    }

    pub fn can_go_next(&self, len: usize) -> bool {
        self.page_index + 1 < self.page_count(len)
    }

    /// Step back one page; no-op at the first page.
    pub fn go_to_previous(&mut self) {
        if self.can_go_previous() {
            self.page_index -= 1;
        }
    }

    /// Step forward one page; no-op at the last page.
    pub fn go_to_next(&mut self, len: usize) {
        if self.can_go_next(len) {
            self.page_index += 1;
        }
    }

    /// Back to the first page. Called whenever the filtered list's
    /// membership changes so a stale out-of-range page never displays.
    pub fn reset(&mut self) {
        self.page_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products(count: usize) -> Vec<Product> {
        (0..count as u64)
            .map(|id| Product {
                id,
                title: format!("Product {id}"),
                price: id as f64,
                description: String::new(),
                image: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_page_count_is_ceiling_with_minimum_one() {
        let pager = Paginator::new(10);
        assert_eq!(pager.page_count(0), 1);
        assert_eq!(pager.page_count(1), 1);
        assert_eq!(pager.page_count(10), 1);
        assert_eq!(pager.page_count(11), 2);
        assert_eq!(pager.page_count(25), 3);
    }

    #[test]
    fn test_current_page_rows_never_exceeds_page_size() {
        let rows = products(25);
        let mut pager = Paginator::new(10);

        assert_eq!(pager.current_page_rows(&rows).len(), 10);
        pager.go_to_next(rows.len());
        assert_eq!(pager.current_page_rows(&rows).len(), 10);
        pager.go_to_next(rows.len());
        // Last page holds the remainder.
        let last = pager.current_page_rows(&rows);
        assert_eq!(last.len(), 5);
        assert_eq!(last[0].id, 20);
    }

    #[test]
    fn test_next_is_a_no_op_on_the_last_page() {
        let rows = products(25);
        let mut pager = Paginator::new(10);
        pager.go_to_next(rows.len());
        pager.go_to_next(rows.len());
        assert_eq!(pager.page_index(), 2);
        assert!(!pager.can_go_next(rows.len()));

        pager.go_to_next(rows.len());
        assert_eq!(pager.page_index(), 2);
    }

    #[test]
    fn test_previous_is_a_no_op_on_the_first_page() {
        let mut pager = Paginator::new(10);
        assert!(!pager.can_go_previous());
        pager.go_to_previous();
        assert_eq!(pager.page_index(), 0);
    }

    #[test]
    fn test_rows_are_clamped_after_the_list_shrinks() {
        let mut pager = Paginator::new(10);
        pager.go_to_next(25);
        pager.go_to_next(25);
        assert_eq!(pager.page_index(), 2);

        // The filtered list shrank under the pager; the window clamps
        // instead of panicking, and reset restores the invariant.
        let shrunk = products(3);
        assert!(pager.current_page_rows(&shrunk).is_empty());
        pager.reset();
        assert_eq!(pager.current_page_rows(&shrunk).len(), 3);
    }

    #[test]
    fn test_zero_page_size_is_clamped_to_one() {
        let pager = Paginator::new(0);
        assert_eq!(pager.page_size(), 1);
    }

    #[test]
    fn test_schema_has_five_columns_in_display_order() {
        let columns = product_columns();
        let labels: Vec<&str> = columns.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["ID", "Title", "Price", "Description", "Image"]);

        let product = &products(1)[0];
        assert_eq!((columns[2].cell)(product), CellValue::Currency(0.0));
        assert_eq!((columns[4].cell)(product), CellValue::Image(String::new()));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10.0), "$10.00");
        assert_eq!(format_currency(9.5), "$9.50");
        assert_eq!(format_currency(0.0), "$0.00");
    }
}
