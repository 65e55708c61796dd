use super::model::Dataset;

// ---------------------------------------------------------------------------
// Summary metrics over the filtered view
// ---------------------------------------------------------------------------

/// The three headline statistics shown above the charts.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// Number of rows in the filtered view.
    pub count: usize,
    /// mean(survived), `None` when the view is empty.
    pub survival_rate: Option<f64>,
    /// mean(age) ignoring missing ages, `None` when no row has one.
    pub average_age: Option<f64>,
}

/// Compute the metrics over the given filtered indices. Tolerates zero rows.
pub fn compute(dataset: &Dataset, indices: &[usize]) -> Metrics {
    let count = indices.len();

    let survival_rate = if count == 0 {
        None
    } else {
        let survived = indices
            .iter()
            .filter(|&&i| dataset.passengers[i].survived)
            .count();
        Some(survived as f64 / count as f64)
    };

    let ages: Vec<f64> = indices
        .iter()
        .filter_map(|&i| dataset.passengers[i].age)
        .collect();
    let average_age = if ages.is_empty() {
        None
    } else {
        Some(ages.iter().sum::<f64>() / ages.len() as f64)
    };

    Metrics {
        count,
        survival_rate,
        average_age,
    }
}

impl Metrics {
    /// "61.0%", or "no data" for an empty view.
    pub fn survival_rate_label(&self) -> String {
        match self.survival_rate {
            Some(rate) => format!("{:.1}%", rate * 100.0),
            None => "no data".to_string(),
        }
    }

    /// "29.0 years", or "no data" when no row has a recorded age.
    pub fn average_age_label(&self) -> String {
        match self.average_age {
            Some(age) => format!("{age:.1} years"),
            None => "no data".to_string(),
        }
    }
}
