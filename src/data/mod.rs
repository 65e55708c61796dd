//! Data layer: core types, loading, filtering, and derivation.
//!
//! Architecture:
//! ```text
//!  remote CSV (fixed URL)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  fetch + parse → Dataset (memoised per process)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  apply sidebar predicates → filtered indices
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────────┐
//!   │ metrics + charts   │  scalar summaries and chart projections
//!   └───────────────────┘
//! ```
//!
//! Everything below `loader` is a pure function of `(Dataset, FilterSelection)`
//! with no hidden state; the UI shell only triggers recomputation.

pub mod charts;
pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;

use charts::ChartSet;
use filter::{filtered_indices, FilterSelection};
use metrics::Metrics;
use model::Dataset;

/// Everything derived from one filter selection: the visible row indices,
/// the headline metrics, and all chart projections.
#[derive(Debug, Clone)]
pub struct Frame {
    pub visible: Vec<usize>,
    pub metrics: Metrics,
    pub charts: ChartSet,
}

/// The full derivation pipeline, recomputed on every interaction.
pub fn render_frame(dataset: &Dataset, selection: &FilterSelection) -> Frame {
    let visible = filtered_indices(dataset, selection);
    let metrics = metrics::compute(dataset, &visible);
    let charts = charts::build(dataset, &visible);
    Frame {
        visible,
        metrics,
        charts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Passenger, Sex};

    fn dataset() -> Dataset {
        Dataset::from_passengers(vec![
            Passenger {
                name: "Mrs. A".into(),
                sex: Sex::Female,
                pclass: 1,
                age: Some(29.0),
                fare: 80.0,
                survived: true,
            },
            Passenger {
                name: "Mr. B".into(),
                sex: Sex::Male,
                pclass: 3,
                age: Some(22.0),
                fare: 7.25,
                survived: false,
            },
        ])
    }

    #[test]
    fn full_selection_frame_covers_the_whole_dataset() {
        let ds = dataset();
        let frame = render_frame(&ds, &filter::full_selection(&ds));
        assert_eq!(frame.visible, vec![0, 1]);
        assert_eq!(frame.metrics.count, 2);
        assert_eq!(frame.charts.age_vs_fare.len(), 2);
    }

    #[test]
    fn empty_selection_frame_is_empty_but_valid() {
        let ds = dataset();
        let mut sel = filter::full_selection(&ds);
        sel.classes.clear();
        let frame = render_frame(&ds, &sel);
        assert!(frame.visible.is_empty());
        assert_eq!(frame.metrics.count, 0);
        assert_eq!(frame.metrics.survival_rate_label(), "no data");
        assert!(frame.charts.age_histogram.is_empty());
    }
}
