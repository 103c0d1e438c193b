//! Column layout estimation.
//!
//! The target documents use a two-column layout: a narrow left column
//! carrying article labels and headings, and a wide right column carrying
//! body text. Segmentation classifies continuation fragments by comparing
//! their start position against a single separator x-coordinate estimated
//! here, once per document.

use crate::config::COLUMN_GAP_THRESHOLD;
use crate::types::Fragment;

/// Estimate the x-coordinate separating the label column from the body
/// column.
///
/// Collects the start position of every fragment with visible text, sorts
/// them, and looks for gaps wider than [`COLUMN_GAP_THRESHOLD`]. The
/// midpoint of the widest such gap is the separator; when positions tie
/// for the widest gap the earliest one wins. Documents without a
/// qualifying gap fall back to the median start position.
///
/// Returns `0.0` when no fragment has visible text. The result depends
/// only on the set of positions, not on fragment order.
#[must_use]
pub fn find_column_separator(fragments: &[Fragment]) -> f64 {
    let mut positions: Vec<f64> = fragments
        .iter()
        .filter(|f| !f.text.trim().is_empty())
        .map(|f| f.bbox.x0)
        .collect();

    if positions.is_empty() {
        return 0.0;
    }

    positions.sort_by(f64::total_cmp);

    // (gap width, midpoint) of the widest qualifying gap seen so far
    let mut widest: Option<(f64, f64)> = None;
    for pair in positions.windows(2) {
        let gap = pair[1] - pair[0];
        if gap > COLUMN_GAP_THRESHOLD && widest.is_none_or(|(w, _)| gap > w) {
            widest = Some((gap, (pair[0] + pair[1]) / 2.0));
        }
    }

    match widest {
        Some((_, midpoint)) => midpoint,
        None => positions[positions.len() / 2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment_at(x0: f64, text: &str) -> Fragment {
        Fragment::new(text, [x0, 0.0, x0 + 10.0, 12.0], 0)
    }

    #[test]
    fn test_two_column_layout_midpoint() {
        let fragments = vec![
            fragment_at(56.0, "Art. 1"),
            fragment_at(57.0, "Zweck"),
            fragment_at(170.0, "Dieses Reglement regelt"),
            fragment_at(171.0, "die Anstellung"),
        ];
        let separator = find_column_separator(&fragments);
        assert_eq!(separator, (57.0 + 170.0) / 2.0);
    }

    #[test]
    fn test_empty_input_returns_zero() {
        assert_eq!(find_column_separator(&[]), 0.0);
    }

    #[test]
    fn test_blank_fragments_return_zero() {
        let fragments = vec![fragment_at(56.0, "   "), fragment_at(170.0, "")];
        assert_eq!(find_column_separator(&fragments), 0.0);
    }

    #[test]
    fn test_no_qualifying_gap_falls_back_to_median() {
        let fragments = vec![
            fragment_at(50.0, "a"),
            fragment_at(55.0, "b"),
            fragment_at(60.0, "c"),
        ];
        assert_eq!(find_column_separator(&fragments), 55.0);
    }

    #[test]
    fn test_widest_gap_wins_over_first_gap() {
        let fragments = vec![
            fragment_at(10.0, "a"),
            fragment_at(40.0, "b"),
            fragment_at(200.0, "c"),
        ];
        // Gaps: 30 and 160; the 160 gap decides.
        assert_eq!(find_column_separator(&fragments), (40.0 + 200.0) / 2.0);
    }

    #[test]
    fn test_tied_gaps_use_the_earlier_one() {
        let fragments = vec![
            fragment_at(0.0, "a"),
            fragment_at(30.0, "b"),
            fragment_at(60.0, "c"),
        ];
        assert_eq!(find_column_separator(&fragments), 15.0);
    }

    #[test]
    fn test_order_invariant() {
        let mut fragments = vec![
            fragment_at(170.0, "content"),
            fragment_at(56.0, "label"),
            fragment_at(171.5, "more content"),
            fragment_at(57.0, "another label"),
        ];
        let forward = find_column_separator(&fragments);
        fragments.reverse();
        let backward = find_column_separator(&fragments);
        assert_eq!(forward, backward);
    }
}
