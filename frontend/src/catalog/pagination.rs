/// Number of pages needed for `items`. Zero items means zero pages.
pub fn total_pages(items: usize, page_size: usize) -> usize {
    items.div_ceil(page_size.max(1))
}

/// Pages are 1-based. With no pages at all the only valid page is 1.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The page numbers to render as buttons: at most `width` of them, centred
/// on `current` where the range allows.
pub fn page_window(current: usize, total_pages: usize, width: usize) -> Vec<usize> {
    let width = width.max(1);
    if total_pages <= width {
        return (1..=total_pages).collect();
    }
    let current = clamp_page(current, total_pages);
    let before = width / 2;
    let after = width - before - 1;
    let start = if current <= before + 1 {
        1
    } else if current + after >= total_pages {
        total_pages - width + 1
    } else {
        current - before
    };
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_partial_pages() {
        assert_eq!(total_pages(0, 12), 0);
        assert_eq!(total_pages(2, 12), 1);
        assert_eq!(total_pages(12, 12), 1);
        assert_eq!(total_pages(13, 12), 2);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn clamps_into_range() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn short_catalogs_show_every_page() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn window_sticks_to_the_edges() {
        assert_eq!(page_window(2, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(3, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(9, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(8, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn window_centres_on_current_page() {
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(4, 10, 5), vec![2, 3, 4, 5, 6]);
    }
}
