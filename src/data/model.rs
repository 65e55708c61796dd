use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Sex – categorical passenger gender
// ---------------------------------------------------------------------------

/// Passenger gender as recorded in the source CSV.
/// `Ord` so it can live in the `BTreeSet` used for filter selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Parse the CSV cell value ("male" / "female", case-insensitive).
    pub fn parse(s: &str) -> Option<Sex> {
        match s.trim().to_ascii_lowercase().as_str() {
            "female" => Some(Sex::Female),
            "male" => Some(Sex::Male),
            _ => None,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
        }
    }
}

// ---------------------------------------------------------------------------
// Passenger – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single passenger record. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Passenger {
    pub name: String,
    pub sex: Sex,
    /// Ticket class: 1, 2 or 3.
    pub pclass: u8,
    /// Age in years; the source data leaves this blank for some passengers.
    pub age: Option<f64>,
    /// Ticket fare in pounds.
    pub fare: f64,
    pub survived: bool,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed column domains.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All passengers (rows), in file order.
    pub passengers: Vec<Passenger>,
    /// Observed genders.
    pub sexes: BTreeSet<Sex>,
    /// Observed ticket classes, ascending.
    pub classes: BTreeSet<u8>,
    /// (floor(min age), ceil(max age)) over rows with a recorded age;
    /// (0, 0) when no row has one.
    pub age_domain: (u32, u32),
}

impl Dataset {
    /// Build column domains from the loaded rows.
    pub fn from_passengers(passengers: Vec<Passenger>) -> Self {
        let mut sexes = BTreeSet::new();
        let mut classes = BTreeSet::new();
        let mut age_min = f64::INFINITY;
        let mut age_max = f64::NEG_INFINITY;

        for p in &passengers {
            sexes.insert(p.sex);
            classes.insert(p.pclass);
            if let Some(age) = p.age {
                age_min = age_min.min(age);
                age_max = age_max.max(age);
            }
        }

        let age_domain = if age_min.is_finite() {
            (age_min.floor() as u32, age_max.ceil() as u32)
        } else {
            (0, 0)
        };

        Dataset {
            passengers,
            sexes,
            classes,
            age_domain,
        }
    }

    /// Number of passengers.
    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(sex: Sex, pclass: u8, age: Option<f64>) -> Passenger {
        Passenger {
            name: String::new(),
            sex,
            pclass,
            age,
            fare: 0.0,
            survived: false,
        }
    }

    #[test]
    fn domains_cover_observed_values() {
        let ds = Dataset::from_passengers(vec![
            passenger(Sex::Female, 1, Some(28.5)),
            passenger(Sex::Male, 3, Some(0.42)),
            passenger(Sex::Male, 2, None),
        ]);
        assert_eq!(ds.sexes.len(), 2);
        assert_eq!(ds.classes.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(ds.age_domain, (0, 29));
    }

    #[test]
    fn age_domain_defaults_to_zero_without_recorded_ages() {
        let ds = Dataset::from_passengers(vec![passenger(Sex::Male, 1, None)]);
        assert_eq!(ds.age_domain, (0, 0));
    }

    #[test]
    fn sex_parsing_is_case_insensitive() {
        assert_eq!(Sex::parse("Female"), Some(Sex::Female));
        assert_eq!(Sex::parse(" male "), Some(Sex::Male));
        assert_eq!(Sex::parse("unknown"), None);
    }
}
