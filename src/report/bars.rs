// src/report/bars.rs

use crate::{
    config::BAR_FLOOR_PERCENT,
    models::category::CategoryMap,
    scoring::round_half_up,
};

/// Bar widths (percent of the track) for a full-profile chart.
///
/// The lowest total is drawn at `BAR_FLOOR_PERCENT` and the highest at 100 so
/// close scores still read as different bars. When every total is equal all
/// bars sit at the floor. Display only; never feeds back into ranking.
pub fn bar_widths(totals: &CategoryMap<i64>) -> CategoryMap<i64> {
    let min = totals.values().copied().min().unwrap_or(0);
    let max = totals.values().copied().max().unwrap_or(0);
    let range = if max == min { 1 } else { max - min };
    let span = (100 - BAR_FLOOR_PERCENT) as f64;

    totals.map(|_, &total| {
        round_half_up(BAR_FLOOR_PERCENT as f64 + (total - min) as f64 / range as f64 * span)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;

    #[test]
    fn min_and_max_hit_floor_and_full_width() {
        let totals = CategoryMap::from_fn(|c| match c {
            Category::Physical => 10,
            Category::Moral => 30,
            Category::Social => 20,
            _ => 15,
        });

        let widths = bar_widths(&totals);

        assert_eq!(widths[Category::Physical], 20);
        assert_eq!(widths[Category::Moral], 100);
        assert_eq!(widths[Category::Social], 60);
        assert_eq!(widths[Category::Spiritual], 40);
    }

    #[test]
    fn equal_totals_sit_at_floor() {
        let widths = bar_widths(&CategoryMap::from_fn(|_| 21));
        assert!(widths.values().all(|&w| w == BAR_FLOOR_PERCENT));

        let widths = bar_widths(&CategoryMap::default());
        assert!(widths.values().all(|&w| w == BAR_FLOOR_PERCENT));
    }
}
