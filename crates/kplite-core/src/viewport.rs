//! Scroll offset arithmetic shared by the group and entry panes.

use std::ops::Range;

/// Display rows one entry may occupy: title, username, password, URL and
/// the separator line.
pub const ENTRY_ROWS: usize = 5;

/// Largest valid offset for a list of `len` items shown `capacity` at a time.
pub fn max_offset(len: usize, capacity: usize) -> usize {
    len.saturating_sub(capacity.max(1))
}

/// Scroll just enough to keep `selected` on screen.
///
/// Scrolls up if the selection is above the window, down if it is below,
/// and otherwise keeps `offset`. The result is clamped to
/// `0..=max_offset(len, capacity)`.
pub fn follow(len: usize, capacity: usize, selected: usize, offset: usize) -> usize {
    let capacity = capacity.max(1);
    let offset = if selected < offset {
        selected
    } else if selected >= offset + capacity {
        selected + 1 - capacity
    } else {
        offset
    };
    offset.min(max_offset(len, capacity))
}

/// Offset that puts `selected` in the middle of the window, clamped.
pub fn recenter(len: usize, capacity: usize, selected: usize) -> usize {
    let capacity = capacity.max(1);
    selected
        .saturating_sub(capacity / 2)
        .min(max_offset(len, capacity))
}

/// Indices on screen for the given offset.
pub fn window(len: usize, capacity: usize, offset: usize) -> Range<usize> {
    let start = offset.min(len);
    let end = (start + capacity).min(len);
    start..end
}

/// How many entries fit in a pane with `rows` usable rows.
pub fn entries_per_page(rows: usize) -> usize {
    (rows / ENTRY_ROWS).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_offset_when_selection_visible() {
        assert_eq!(follow(100, 10, 15, 10), 10);
        assert_eq!(follow(100, 10, 19, 10), 10);
    }

    #[test]
    fn scrolls_up_to_selection() {
        assert_eq!(follow(100, 10, 4, 10), 4);
    }

    #[test]
    fn scrolls_down_to_selection() {
        assert_eq!(follow(100, 10, 20, 10), 11);
        assert_eq!(follow(100, 10, 99, 0), 90);
    }

    #[test]
    fn clamps_to_list_length() {
        assert_eq!(follow(5, 10, 2, 3), 0);
        assert_eq!(follow(12, 10, 11, 7), 2);
    }

    #[test]
    fn zero_capacity_behaves_like_one_row() {
        assert_eq!(follow(5, 0, 3, 0), 3);
        assert_eq!(max_offset(5, 0), 4);
    }

    #[test]
    fn selection_always_inside_window() {
        for len in 1..30 {
            for capacity in 1..12 {
                for selected in 0..len {
                    for offset in 0..=len {
                        let next = follow(len, capacity, selected, offset);
                        assert!(next <= max_offset(len, capacity));
                        if len >= capacity {
                            assert!(next <= selected && selected < next + capacity);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn recenter_centres_and_clamps() {
        assert_eq!(recenter(100, 10, 50), 45);
        assert_eq!(recenter(100, 10, 2), 0);
        assert_eq!(recenter(100, 10, 98), 90);
        assert_eq!(recenter(3, 10, 2), 0);
    }

    #[test]
    fn window_ranges() {
        assert_eq!(window(100, 10, 5), 5..15);
        assert_eq!(window(8, 10, 0), 0..8);
        assert_eq!(window(8, 10, 20), 8..8);
    }

    #[test]
    fn entry_pages() {
        assert_eq!(entries_per_page(20), 4);
        assert_eq!(entries_per_page(3), 1);
        assert_eq!(entries_per_page(0), 1);
    }
}
