use std::collections::BTreeSet;

use super::model::{Dataset, Sex};

// ---------------------------------------------------------------------------
// FilterSelection – the active sidebar predicates
// ---------------------------------------------------------------------------

/// The tuple of active filter predicates. Rebuilt by the UI on every
/// interaction; filtering itself is a pure function of (dataset, selection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// Selected genders. Empty set means nothing matches.
    pub sexes: BTreeSet<Sex>,
    /// Selected ticket classes. Empty set means nothing matches.
    pub classes: BTreeSet<u8>,
    /// Inclusive age range in whole years.
    pub age_range: (u32, u32),
}

/// Initialise a [`FilterSelection`] covering the full observed domain of
/// each column (i.e., show everything).
pub fn full_selection(dataset: &Dataset) -> FilterSelection {
    FilterSelection {
        sexes: dataset.sexes.clone(),
        classes: dataset.classes.clone(),
        age_range: dataset.age_domain,
    }
}

/// Return indices of passengers that pass all active filters, in dataset
/// order.
///
/// A passenger passes when:
/// * its sex is in the selected set (empty set → nothing passes)
/// * its class is in the selected set (empty set → nothing passes)
/// * its age falls inside `age_range` — applied only once the range is
///   narrower than the dataset's full age domain, so rows without a
///   recorded age stay visible at the default range and drop out as soon
///   as the user narrows it
pub fn filtered_indices(dataset: &Dataset, selection: &FilterSelection) -> Vec<usize> {
    let age_active = selection.age_range != dataset.age_domain;
    let (lo, hi) = (selection.age_range.0 as f64, selection.age_range.1 as f64);

    dataset
        .passengers
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            if !selection.sexes.contains(&p.sex) {
                return false;
            }
            if !selection.classes.contains(&p.pclass) {
                return false;
            }
            if age_active {
                match p.age {
                    Some(age) => {
                        if age < lo || age > hi {
                            return false;
                        }
                    }
                    // age comparisons against a missing value fail
                    None => return false,
                }
            }
            true
        })
        .map(|(i, _)| i)
        .collect()
}
