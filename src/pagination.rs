use serde::Serialize;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const MAX_PAGE_SIZE: usize = 50;

/// Requested page, already defaulted and clamped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Builds a request from numeric values, falling back to defaults when
    /// `page` is zero or `page_size` is outside `1..=MAX_PAGE_SIZE`.
    pub fn new(page: usize, page_size: usize) -> Self {
        let mut request = Self::default();
        if page > 0 {
            request.page = page;
        }
        if (1..=MAX_PAGE_SIZE).contains(&page_size) {
            request.page_size = page_size;
        }
        request
    }

    /// Builds a request from raw query-string values. Anything that is not a
    /// positive integer keeps its default.
    pub fn from_params(page: Option<&str>, page_size: Option<&str>) -> Self {
        let page = page.and_then(|p| p.parse::<usize>().ok()).unwrap_or(0);
        let page_size = page_size
            .and_then(|p| p.parse::<usize>().ok())
            .unwrap_or(0);
        Self::new(page, page_size)
    }
}

/// One page of items plus the totals needed to render navigation.
#[derive(Debug, Serialize, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

/// Slices `items` according to `request`. Pages past the end are empty.
pub fn paginate<T>(mut items: Vec<T>, request: PageRequest) -> Page<T> {
    let page_size = request.page_size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size);

    let start = request
        .page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total);
    let end = start.saturating_add(page_size).min(total);

    let page_items = items.drain(start..end).collect();

    Page {
        items: page_items,
        total,
        page: request.page,
        page_size,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_to_missing_or_invalid_values() {
        assert_eq!(PageRequest::from_params(None, None), PageRequest::default());
        assert_eq!(
            PageRequest::from_params(Some("0"), Some("51")),
            PageRequest::default()
        );
        assert_eq!(
            PageRequest::from_params(Some("-2"), Some("abc")),
            PageRequest::default()
        );
        assert_eq!(
            PageRequest::from_params(Some("3"), Some("50")),
            PageRequest::new(3, 50)
        );
    }

    #[test]
    fn second_page_of_one() {
        let page = paginate(vec!["arsenal", "chelsea"], PageRequest::new(2, 1));

        assert_eq!(page.items, vec!["chelsea"]);
        assert_eq!(page.total, 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let page = paginate(vec![1, 2, 3], PageRequest::new(9, 2));

        assert!(page.items.is_empty());
        assert_eq!(page.page, 9);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let page = paginate(vec![1, 2, 3], PageRequest::new(usize::MAX, 50));
        assert!(page.items.is_empty());
    }

    #[test]
    fn empty_input_has_no_pages() {
        let page = paginate(Vec::<i32>::new(), PageRequest::default());

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn pages_reconstruct_the_input() {
        let items: Vec<i32> = (1..=17).collect();

        for page_size in 1..=MAX_PAGE_SIZE {
            let total_pages = items.len().div_ceil(page_size);
            let mut rebuilt = Vec::new();
            for page in 1..=total_pages {
                let chunk = paginate(items.clone(), PageRequest::new(page, page_size));
                assert!(chunk.items.len() <= page_size);
                rebuilt.extend(chunk.items);
            }
            assert_eq!(rebuilt, items, "page size {page_size}");
        }
    }
}
