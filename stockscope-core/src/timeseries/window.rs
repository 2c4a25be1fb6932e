//! Shape a raw close series into chart input.

use stockscope_types::PricePoint;

/// Return the chronologically latest `max_points` closes, sorted ascending by date.
///
/// The input may arrive in any order and may repeat dates. Sorting is stable, so
/// duplicates keep their relative input order. Nothing is deduplicated.
#[must_use]
pub fn latest_window(mut points: Vec<PricePoint>, max_points: usize) -> Vec<PricePoint> {
    points.sort_by_key(|p| p.date);
    let skip = points.len().saturating_sub(max_points);
    points.drain(..skip);
    points
}
