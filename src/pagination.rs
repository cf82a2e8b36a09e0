//! Page numbers for the navigation bar under the results.

use std::num::NonZeroU64;

/// Most page links shown at once.
pub const WINDOW_SPAN: u64 = 10;
/// Pages shown before the current one once the window starts sliding.
pub const WINDOW_LEAD: u64 = 5;
/// First page index at which the window stops being anchored at page 0.
pub const SLIDE_THRESHOLD: u64 = 6;

/// Zero-based pagination state for one results page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: u64,
    /// Index of the last page.
    pub max_page: u64,
    /// Contiguous, ascending page indices to link to.
    pub visible_pages: Vec<u64>,
}

impl PageWindow {
    pub fn total_pages(&self) -> u64 {
        self.max_page.saturating_add(1)
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.max_page
    }
}

/// Compute the page window for a result offset.
///
/// Pages 0..=5 show the first ten pages. From page 6 on the window runs from
/// five pages back to four pages ahead, clipped at the last page.
pub fn compute_window(start: u64, hits: NonZeroU64, total: u64) -> PageWindow {
    let current_page = start / hits;
    let max_page = total / hits;
    let page_count = max_page.saturating_add(1);

    let visible = if current_page >= SLIDE_THRESHOLD {
        (current_page - WINDOW_LEAD)..current_page.saturating_add(WINDOW_LEAD).min(page_count)
    } else {
        0..page_count.min(WINDOW_SPAN)
    };

    PageWindow {
        current_page,
        max_page,
        visible_pages: visible.collect(),
    }
}

#[test]
fn test_compute_window_first_pages() {
    let hits = NonZeroU64::new(10).unwrap();

    let window = compute_window(0, hits, 25);
    assert_eq!(window.current_page, 0);
    assert_eq!(window.max_page, 2);
    assert_eq!(window.visible_pages, vec![0, 1, 2]);

    // Exactly divisible totals still count one extra (empty) page.
    let window = compute_window(0, hits, 30);
    assert_eq!(window.max_page, 3);
    assert_eq!(window.total_pages(), 4);
}

#[test]
fn test_compute_window_slides_after_page_six() {
    let hits = NonZeroU64::new(10).unwrap();

    let window = compute_window(70, hits, 200);
    assert_eq!(window.current_page, 7);
    assert_eq!(window.max_page, 20);
    assert_eq!(window.visible_pages, (2..12).collect::<Vec<u64>>());
}
