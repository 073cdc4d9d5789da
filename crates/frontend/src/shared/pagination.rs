//! Page arithmetic shared by the list pages (1-based page numbers)

/// Number of page links shown around the current page on each side
const WINDOW_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItemKind {
    Previous,
    Page,
    Next,
}

/// One entry of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageItem {
    pub kind: PageItemKind,
    /// Page loaded when the entry is clicked
    pub target: usize,
    pub active: bool,
    pub disabled: bool,
}

impl PageItem {
    pub fn label(&self) -> String {
        match self.kind {
            PageItemKind::Previous => "«".to_string(),
            PageItemKind::Next => "»".to_string(),
            PageItemKind::Page => self.target.to_string(),
        }
    }
}

/// `ceil(count / page_size)`, never less than one page.
pub fn total_pages_for(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Slice of `items` shown on `page`. Pages past the end are empty.
pub fn page_slice<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(items.len());
    items[start..end].to_vec()
}

/// Previous link, up to five page links centred on `current`, next link.
pub fn page_window(current: usize, total: usize) -> Vec<PageItem> {
    let total = total.max(1);
    let mut items = Vec::with_capacity(2 * WINDOW_RADIUS + 3);

    items.push(PageItem {
        kind: PageItemKind::Previous,
        target: current.saturating_sub(1).max(1),
        active: false,
        disabled: current <= 1,
    });

    let start = current.saturating_sub(WINDOW_RADIUS).max(1);
    let end = (current + WINDOW_RADIUS).min(total);
    for page in start..=end {
        items.push(PageItem {
            kind: PageItemKind::Page,
            target: page,
            active: page == current,
            disabled: false,
        });
    }

    items.push(PageItem {
        kind: PageItemKind::Next,
        target: (current + 1).min(total),
        active: false,
        disabled: current >= total,
    });

    items
}

/// Validate a page link value before dispatching a load.
///
/// Returns `None` for unparsable input and for pages outside `[1, total]`.
pub fn resolve_page_request(raw: &str, total: usize) -> Option<usize> {
    let page = raw.trim().parse::<i64>().ok()?;
    if page < 1 || page as u64 > total.max(1) as u64 {
        return None;
    }
    Some(page as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_numbers(items: &[PageItem]) -> Vec<usize> {
        items
            .iter()
            .filter(|i| i.kind == PageItemKind::Page)
            .map(|i| i.target)
            .collect()
    }

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(0, 10), 1);
        assert_eq!(total_pages_for(10, 10), 1);
        assert_eq!(total_pages_for(11, 10), 2);
        assert_eq!(total_pages_for(95, 10), 10);
    }

    #[test]
    fn test_window_in_the_middle() {
        let items = page_window(5, 9);
        assert_eq!(page_numbers(&items), vec![3, 4, 5, 6, 7]);
        assert_eq!(items.first().map(|i| (i.target, i.disabled)), Some((4, false)));
        assert_eq!(items.last().map(|i| (i.target, i.disabled)), Some((6, false)));
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
    }

    #[test]
    fn test_window_clamped_at_edges() {
        assert_eq!(page_numbers(&page_window(1, 9)), vec![1, 2, 3]);
        assert_eq!(page_numbers(&page_window(9, 9)), vec![7, 8, 9]);
        assert_eq!(page_numbers(&page_window(2, 3)), vec![1, 2, 3]);
    }

    #[test]
    fn test_single_page_has_both_ends_disabled() {
        let items = page_window(1, 1);
        assert_eq!(items.len(), 3);
        assert!(items[0].disabled);
        assert!(items[2].disabled);
        assert_eq!(page_numbers(&items), vec![1]);
        assert!(items[1].active);
    }

    #[test]
    fn test_out_of_range_pages_never_dispatch() {
        let total = 7;
        for raw in -5i64..=20 {
            let resolved = resolve_page_request(&raw.to_string(), total);
            if (1..=total as i64).contains(&raw) {
                assert_eq!(resolved, Some(raw as usize));
            } else {
                assert_eq!(resolved, None, "page {} must not dispatch", raw);
            }
        }
    }

    #[test]
    fn test_unparsable_page_is_ignored() {
        assert_eq!(resolve_page_request("", 3), None);
        assert_eq!(resolve_page_request("abc", 3), None);
        assert_eq!(resolve_page_request("2.5", 3), None);
    }

    #[test]
    fn test_pages_partition_the_set() {
        let items: Vec<usize> = (0..47).collect();
        let total = total_pages_for(items.len(), 10);
        assert_eq!(total, 5);
        let mut seen = Vec::new();
        for page in 1..=total {
            seen.extend(page_slice(&items, page, 10));
        }
        assert_eq!(seen, items);
        assert!(page_slice(&items, total + 1, 10).is_empty());
    }
}
