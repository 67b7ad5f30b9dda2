use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_KID_FRIENDLY_TAG, DEFAULT_VEGETARIAN_DIETS};
use crate::dataset::Dataset;
use crate::sampler::Sampler;

/// Dataset vocabulary the filters look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    /// Tag a dish needs to pass the kids-only filter
    pub kid_friendly: String,
    /// Any of these diet classifiers passes the vegetarian-only filter
    pub vegetarian: Vec<String>,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            kid_friendly: DEFAULT_KID_FRIENDLY_TAG.to_string(),
            vegetarian: DEFAULT_VEGETARIAN_DIETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    pub kids_only: bool,
    pub veg_only: bool,
}

impl Filters {
    pub fn new(kids_only: bool, veg_only: bool) -> Self {
        Self { kids_only, veg_only }
    }
}

/// Ids of dishes passing both filters, in dataset order. Empty without a dataset.
pub fn eligible_ids(dataset: Option<&Dataset>, filters: Filters, markers: &Markers) -> Vec<String> {
    let Some(dataset) = dataset else {
        return Vec::new();
    };
    dataset
        .iter()
        .filter(|dish| !filters.kids_only || dish.is_kid_friendly(markers))
        .filter(|dish| !filters.veg_only || dish.is_vegetarian(markers))
        .map(|dish| dish.id.clone())
        .collect()
}

/// Sample `amount` distinct ids from `eligible` on the stream keyed by `seed`.
///
/// An amount of zero or one larger than the eligible list gives an empty choice
/// list instead of an error.
pub fn choose(seed: &str, amount: usize, eligible: &[String]) -> Vec<String> {
    if amount < 1 || amount > eligible.len() {
        return Vec::new();
    }
    Sampler::from_seed(seed).sample(eligible, amount).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_db() -> Dataset {
        Dataset::parse(
            "id\tname\ttags\tdiet\tingredients\n\
             1\tSoup\tc\tve\tpotato,onion,potato\n\
             2\tSteak\t\t\tbeef\n\
             3\tPancakes\tc\t\tflour,milk,egg\n\
             4\tDal\t\tk\tlentils,onion\n\
             5\tFish sticks\tc\t\tfish",
        )
    }

    #[test]
    fn no_dataset_no_ids() {
        assert!(eligible_ids(None, Filters::default(), &Markers::default()).is_empty());
    }

    #[test]
    fn no_filters_keeps_dataset_order() {
        let db = sample_db();
        let ids = eligible_ids(Some(&db), Filters::default(), &Markers::default());
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn kids_only() {
        let db = sample_db();
        let ids = eligible_ids(Some(&db), Filters::new(true, false), &Markers::default());
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn veg_only_accepts_vegetarian_and_vegan() {
        let db = sample_db();
        let ids = eligible_ids(Some(&db), Filters::new(false, true), &Markers::default());
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn filters_compose_with_and() {
        let db = sample_db();
        let ids = eligible_ids(Some(&db), Filters::new(true, true), &Markers::default());
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn custom_markers() {
        let db = sample_db();
        let markers = Markers { kid_friendly: "nope".into(), vegetarian: vec!["ve".into()] };
        assert!(eligible_ids(Some(&db), Filters::new(true, false), &markers).is_empty());
        assert_eq!(eligible_ids(Some(&db), Filters::new(false, true), &markers), vec!["1"]);
    }

    #[test]
    fn choose_exact_amount_of_eligible_members() {
        let db = sample_db();
        let ids = eligible_ids(Some(&db), Filters::default(), &Markers::default());
        for amount in 1..=ids.len() {
            let picked = choose("deadbeef", amount, &ids);
            assert_eq!(picked.len(), amount);
            for (i, id) in picked.iter().enumerate() {
                assert!(ids.contains(id));
                assert!(!picked[..i].contains(id));
            }
        }
    }

    #[test]
    fn choose_out_of_range_is_empty() {
        let ids: Vec<String> = vec!["1".into(), "2".into(), "3".into()];
        assert!(choose("seed", 0, &ids).is_empty());
        assert!(choose("seed", 4, &ids).is_empty());
        assert!(choose("seed", 1, &[]).is_empty());
    }

    #[test]
    fn choose_is_deterministic() {
        let ids: Vec<String> = (1..=20).map(|n| n.to_string()).collect();
        assert_eq!(choose("a1b2c3d4", 6, &ids), choose("a1b2c3d4", 6, &ids));
    }

    #[test]
    fn choose_depends_on_seed() {
        let ids: Vec<String> = (1..=20).map(|n| n.to_string()).collect();
        assert_ne!(choose("a1b2c3d4", 6, &ids), choose("ffff0000", 6, &ids));
    }
}
