use std::num::NonZeroU64;

use searchfront::pagination::{PageWindow, compute_window};

fn hits(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).unwrap()
}

fn pages(range: std::ops::Range<u64>) -> Vec<u64> {
    range.collect()
}

#[test]
fn test_first_page_small_result_set() {
    let window = compute_window(0, hits(10), 25);
    assert_eq!(
        window,
        PageWindow {
            current_page: 0,
            max_page: 2,
            visible_pages: vec![0, 1, 2],
        }
    );
    assert!(!window.has_previous());
    assert!(window.has_next());
}

#[test]
fn test_sliding_window_example() {
    let window = compute_window(70, hits(10), 200);
    assert_eq!(window.current_page, 7);
    assert_eq!(window.max_page, 20);
    assert_eq!(window.visible_pages, vec![2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
}

#[test]
fn test_no_results_still_has_page_zero() {
    let window = compute_window(0, hits(10), 0);
    assert_eq!(window.max_page, 0);
    assert_eq!(window.total_pages(), 1);
    assert_eq!(window.visible_pages, vec![0]);
    assert!(!window.has_next());
}

#[test]
fn test_offset_not_multiple_of_hits() {
    let window = compute_window(25, hits(10), 100);
    assert_eq!(window.current_page, 2);
}

#[test]
fn test_window_clipped_at_last_page() {
    // Page 18 of 0..=20: ends at the last page, not at 23.
    let window = compute_window(180, hits(10), 200);
    assert_eq!(window.visible_pages, pages(13..21));
    assert!(window.has_next());

    let window = compute_window(200, hits(10), 200);
    assert_eq!(window.visible_pages, pages(15..21));
    assert!(!window.has_next());
}

#[test]
fn test_offset_past_the_end() {
    let window = compute_window(500, hits(10), 30);
    assert_eq!(window.current_page, 50);
    assert_eq!(window.max_page, 3);
    assert!(window.visible_pages.is_empty());
}

#[test]
fn test_first_pages_show_up_to_ten() {
    for total in [0u64, 9, 10, 55, 99, 100, 1_000, 123_456] {
        for size in [1u64, 3, 10, 25] {
            let max_page = total / size;
            for current in 0..=5u64 {
                let window = compute_window(current * size, hits(size), total);
                assert_eq!(window.max_page, max_page);
                assert_eq!(
                    window.visible_pages,
                    pages(0..(max_page + 1).min(10)),
                    "total={total} hits={size} page={current}"
                );
            }
        }
    }
}

#[test]
fn test_later_pages_trail_by_five() {
    for total in [60u64, 75, 200, 999, 10_000] {
        let size = 10;
        let max_page = total / size;
        for current in 6..=max_page + 3 {
            let window = compute_window(current * size, hits(size), total);
            assert_eq!(
                window.visible_pages,
                pages(current - 5..(current + 5).min(max_page + 1)),
                "total={total} page={current}"
            );
        }
    }
}

#[test]
fn test_visible_pages_within_bounds() {
    for total in 0..120u64 {
        for size in 1..=12u64 {
            for start in (0..150u64).step_by(7) {
                let window = compute_window(start, hits(size), total);
                assert_eq!(window.max_page, total / size);
                assert!(window.visible_pages.len() <= 10);
                assert!(window.visible_pages.iter().all(|&p| p <= window.max_page));
                assert!(window.visible_pages.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }
}
