use std::collections::BTreeMap;

use super::model::{Dataset, Sex};

/// Bin count for the age histogram, matching the dashboard's fixed layout.
pub const AGE_HISTOGRAM_BINS: usize = 20;

// ---------------------------------------------------------------------------
// Chart data: pure projections of the filtered view
// ---------------------------------------------------------------------------

/// Passenger count per ticket class, ascending class order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassCount {
    pub pclass: u8,
    pub count: usize,
}

/// Survived / perished counts for one gender.
#[derive(Debug, Clone, PartialEq)]
pub struct SexSurvival {
    pub sex: Sex,
    pub survived: usize,
    pub perished: usize,
}

/// One bar of the age histogram: [start, end) except the last bin, which
/// is closed so the maximum age is counted.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
}

/// One point of the age-vs-fare scatter, carrying the hover label.
#[derive(Debug, Clone, PartialEq)]
pub struct FarePoint {
    pub age: f64,
    pub fare: f64,
    pub sex: Sex,
    pub name: String,
}

/// Five-number fare summary for one ticket class. Whiskers reach the most
/// extreme fares within 1.5·IQR of the quartiles; anything beyond is an
/// outlier.
#[derive(Debug, Clone, PartialEq)]
pub struct FareBox {
    pub pclass: u8,
    pub whisker_low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_high: f64,
    pub outliers: Vec<f64>,
}

/// mean(survived) for one ticket class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassRate {
    pub pclass: u8,
    pub rate: f64,
}

/// Every chart projection of one filtered view. All fields are empty (not
/// invalid) when the view has zero rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub class_distribution: Vec<ClassCount>,
    pub survival_by_sex: Vec<SexSurvival>,
    pub age_histogram: Vec<HistogramBin>,
    pub age_vs_fare: Vec<FarePoint>,
    pub fare_by_class: Vec<FareBox>,
    pub survival_by_class: Vec<ClassRate>,
}

/// Build all chart projections over the given filtered indices.
pub fn build(dataset: &Dataset, indices: &[usize]) -> ChartSet {
    ChartSet {
        class_distribution: class_distribution(dataset, indices),
        survival_by_sex: survival_by_sex(dataset, indices),
        age_histogram: age_histogram(dataset, indices),
        age_vs_fare: age_vs_fare(dataset, indices),
        fare_by_class: fare_by_class(dataset, indices),
        survival_by_class: survival_by_class(dataset, indices),
    }
}

// ---------------------------------------------------------------------------
// Individual projections
// ---------------------------------------------------------------------------

fn class_distribution(dataset: &Dataset, indices: &[usize]) -> Vec<ClassCount> {
    let mut counts: BTreeMap<u8, usize> = BTreeMap::new();
    for &i in indices {
        *counts.entry(dataset.passengers[i].pclass).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(pclass, count)| ClassCount { pclass, count })
        .collect()
}

fn survival_by_sex(dataset: &Dataset, indices: &[usize]) -> Vec<SexSurvival> {
    let mut groups: BTreeMap<Sex, (usize, usize)> = BTreeMap::new();
    for &i in indices {
        let p = &dataset.passengers[i];
        let entry = groups.entry(p.sex).or_default();
        if p.survived {
            entry.0 += 1;
        } else {
            entry.1 += 1;
        }
    }
    groups
        .into_iter()
        .map(|(sex, (survived, perished))| SexSurvival {
            sex,
            survived,
            perished,
        })
        .collect()
}

fn age_histogram(dataset: &Dataset, indices: &[usize]) -> Vec<HistogramBin> {
    let ages: Vec<f64> = indices
        .iter()
        .filter_map(|&i| dataset.passengers[i].age)
        .collect();
    if ages.is_empty() {
        return Vec::new();
    }

    let min = ages.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = ages.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    // A single distinct age collapses to one unit-wide bin.
    if span.abs() < f64::EPSILON {
        return vec![HistogramBin {
            start: min,
            end: min + 1.0,
            count: ages.len(),
        }];
    }

    let width = span / AGE_HISTOGRAM_BINS as f64;
    let mut bins: Vec<HistogramBin> = (0..AGE_HISTOGRAM_BINS)
        .map(|b| HistogramBin {
            start: min + b as f64 * width,
            end: min + (b + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for age in ages {
        let b = (((age - min) / width) as usize).min(AGE_HISTOGRAM_BINS - 1);
        bins[b].count += 1;
    }
    bins
}

fn age_vs_fare(dataset: &Dataset, indices: &[usize]) -> Vec<FarePoint> {
    indices
        .iter()
        .filter_map(|&i| {
            let p = &dataset.passengers[i];
            p.age.map(|age| FarePoint {
                age,
                fare: p.fare,
                sex: p.sex,
                name: p.name.clone(),
            })
        })
        .collect()
}

fn fare_by_class(dataset: &Dataset, indices: &[usize]) -> Vec<FareBox> {
    let mut by_class: BTreeMap<u8, Vec<f64>> = BTreeMap::new();
    for &i in indices {
        let p = &dataset.passengers[i];
        by_class.entry(p.pclass).or_default().push(p.fare);
    }

    by_class
        .into_iter()
        .map(|(pclass, mut fares)| {
            fares.sort_by(f64::total_cmp);

            let q1 = quantile(&fares, 0.25);
            let median = quantile(&fares, 0.5);
            let q3 = quantile(&fares, 0.75);
            let iqr = q3 - q1;
            let low_fence = q1 - 1.5 * iqr;
            let high_fence = q3 + 1.5 * iqr;

            let whisker_low = fares
                .iter()
                .cloned()
                .find(|&f| f >= low_fence)
                .unwrap_or(q1);
            let whisker_high = fares
                .iter()
                .cloned()
                .rev()
                .find(|&f| f <= high_fence)
                .unwrap_or(q3);
            let outliers = fares
                .iter()
                .cloned()
                .filter(|&f| f < low_fence || f > high_fence)
                .collect();

            FareBox {
                pclass,
                whisker_low,
                q1,
                median,
                q3,
                whisker_high,
                outliers,
            }
        })
        .collect()
}

fn survival_by_class(dataset: &Dataset, indices: &[usize]) -> Vec<ClassRate> {
    let mut totals: BTreeMap<u8, (usize, usize)> = BTreeMap::new();
    for &i in indices {
        let p = &dataset.passengers[i];
        let entry = totals.entry(p.pclass).or_default();
        entry.0 += p.survived as usize;
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(pclass, (survived, total))| ClassRate {
            pclass,
            rate: survived as f64 / total as f64,
        })
        .collect()
}

/// Linearly-interpolated quantile of an ascending-sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let frac = pos - lower as f64;
        sorted[lower] + (sorted[upper] - sorted[lower]) * frac
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Passenger;

    fn passenger(sex: Sex, pclass: u8, age: Option<f64>, fare: f64, survived: bool) -> Passenger {
        Passenger {
            name: format!("{sex} {pclass}"),
            sex,
            pclass,
            age,
            fare,
            survived,
        }
    }

    fn dataset() -> Dataset {
        Dataset::from_passengers(vec![
            passenger(Sex::Female, 1, Some(29.0), 80.0, true),
            passenger(Sex::Female, 1, Some(35.0), 120.0, true),
            passenger(Sex::Male, 3, Some(22.0), 7.25, false),
            passenger(Sex::Male, 3, Some(40.0), 8.05, false),
            passenger(Sex::Male, 2, None, 13.0, true),
        ])
    }

    fn all(ds: &Dataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn class_distribution_counts_per_class_ascending() {
        let ds = dataset();
        let counts = class_distribution(&ds, &all(&ds));
        assert_eq!(
            counts,
            vec![
                ClassCount { pclass: 1, count: 2 },
                ClassCount { pclass: 2, count: 1 },
                ClassCount { pclass: 3, count: 2 },
            ]
        );
    }

    #[test]
    fn survival_groups_split_by_outcome() {
        let ds = dataset();
        let groups = survival_by_sex(&ds, &all(&ds));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].sex, Sex::Female);
        assert_eq!(groups[0].survived, 2);
        assert_eq!(groups[0].perished, 0);
        assert_eq!(groups[1].survived, 1);
        assert_eq!(groups[1].perished, 2);
    }

    #[test]
    fn histogram_has_fixed_bin_count_and_total() {
        let ds = dataset();
        let bins = age_histogram(&ds, &all(&ds));
        assert_eq!(bins.len(), AGE_HISTOGRAM_BINS);
        let total: usize = bins.iter().map(|b| b.count).sum();
        // the row without a recorded age is dropped
        assert_eq!(total, 4);
        assert_eq!(bins.first().unwrap().start, 22.0);
        assert!((bins.last().unwrap().end - 40.0).abs() < 1e-9);
    }

    #[test]
    fn histogram_counts_the_maximum_age() {
        let ds = dataset();
        let bins = age_histogram(&ds, &all(&ds));
        assert_eq!(bins.last().unwrap().count, 1);
    }

    #[test]
    fn single_age_collapses_to_one_bin() {
        let ds = Dataset::from_passengers(vec![
            passenger(Sex::Male, 1, Some(30.0), 10.0, true),
            passenger(Sex::Male, 2, Some(30.0), 12.0, false),
        ]);
        let bins = age_histogram(&ds, &all(&ds));
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
    }

    #[test]
    fn scatter_carries_name_and_drops_missing_ages() {
        let ds = dataset();
        let points = age_vs_fare(&ds, &all(&ds));
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|p| !p.name.is_empty()));
    }

    #[test]
    fn fare_box_quartiles_interpolate() {
        let ds = Dataset::from_passengers(vec![
            passenger(Sex::Male, 3, Some(20.0), 1.0, false),
            passenger(Sex::Male, 3, Some(21.0), 2.0, false),
            passenger(Sex::Male, 3, Some(22.0), 3.0, false),
            passenger(Sex::Male, 3, Some(23.0), 4.0, false),
        ]);
        let boxes = fare_by_class(&ds, &all(&ds));
        assert_eq!(boxes.len(), 1);
        let b = &boxes[0];
        assert_eq!(b.q1, 1.75);
        assert_eq!(b.median, 2.5);
        assert_eq!(b.q3, 3.25);
        assert!(b.outliers.is_empty());
        assert_eq!(b.whisker_low, 1.0);
        assert_eq!(b.whisker_high, 4.0);
    }

    #[test]
    fn extreme_fare_lands_in_outliers() {
        let ds = Dataset::from_passengers(vec![
            passenger(Sex::Male, 1, Some(20.0), 10.0, false),
            passenger(Sex::Male, 1, Some(21.0), 11.0, false),
            passenger(Sex::Male, 1, Some(22.0), 12.0, false),
            passenger(Sex::Male, 1, Some(23.0), 13.0, false),
            passenger(Sex::Male, 1, Some(24.0), 500.0, true),
        ]);
        let boxes = fare_by_class(&ds, &all(&ds));
        assert_eq!(boxes[0].outliers, vec![500.0]);
        assert!(boxes[0].whisker_high < 500.0);
    }

    #[test]
    fn survival_rate_by_class_is_a_mean() {
        let ds = dataset();
        let rates = survival_by_class(&ds, &all(&ds));
        assert_eq!(rates.len(), 3);
        assert_eq!(rates[0].rate, 1.0);
        assert_eq!(rates[2].rate, 0.0);
    }

    #[test]
    fn every_projection_tolerates_an_empty_view() {
        let ds = dataset();
        let set = build(&ds, &[]);
        assert!(set.class_distribution.is_empty());
        assert!(set.survival_by_sex.is_empty());
        assert!(set.age_histogram.is_empty());
        assert!(set.age_vs_fare.is_empty());
        assert!(set.fare_by_class.is_empty());
        assert!(set.survival_by_class.is_empty());
    }
}
