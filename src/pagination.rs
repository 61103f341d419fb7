//! One page of list results plus the pagination metadata the presentation
//! layer renders.

use serde::Serialize;

/// Sliding window of page links: leading edge, pages around the current one,
/// trailing edge, with `None` marking a gap.
fn page_window(
    last_page: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// A fully materialized result page. Created per request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub last_page: usize,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        // An empty result still reports one (empty) page.
        let last_page = total.div_ceil(per_page).max(1);
        Self {
            items,
            page,
            per_page,
            total,
            last_page,
        }
    }

    /// Converts the row type, keeping the pagination metadata. Used at the
    /// repository boundary to lift database rows into domain entities.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            last_page: self.last_page,
        }
    }

    /// Page links for table footers.
    pub fn pages(&self) -> Vec<Option<usize>> {
        page_window(self.last_page, self.page, 2, 2, 4, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_is_well_formed() {
        let page: PageResult<i32> = PageResult::new(vec![], 1, 10, 0);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.last_page, 1);
    }

    #[test]
    fn last_page_rounds_up() {
        let page: PageResult<i32> = PageResult::new(vec![1, 2, 3], 1, 10, 23);
        assert_eq!(page.last_page, 3);
        let page: PageResult<i32> = PageResult::new(vec![1], 3, 10, 30);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn zero_page_is_clamped_to_one() {
        let page: PageResult<i32> = PageResult::new(vec![], 0, 10, 0);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn map_preserves_metadata() {
        let page = PageResult::new(vec![1, 2], 2, 2, 5).map(|n| n.to_string());
        assert_eq!(page.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(page.page, 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.last_page, 3);
    }

    #[test]
    fn window_collapses_middle_pages() {
        let page: PageResult<i32> = PageResult::new(vec![], 10, 10, 200);
        let window = page.pages();
        assert_eq!(window.first(), Some(&Some(1)));
        assert_eq!(window.last(), Some(&Some(20)));
        assert!(window.contains(&None));
        assert!(window.contains(&Some(10)));
    }
}
