use std::collections::{BTreeMap, HashMap};

use crate::dataset::Dataset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    /// Ingredient lines across all chosen dishes
    pub count: usize,
}

impl ShoppingItem {
    /// `name`, or `name (n)` when more than one is needed.
    pub fn label(&self) -> String {
        if self.count > 1 { format!("{} ({})", self.name, self.count) } else { self.name.clone() }
    }
}

/// Tally ingredient lines of the chosen dishes, sorted by name.
pub fn aggregate(dataset: &Dataset, choices: &[String]) -> Vec<ShoppingItem> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for dish in choices.iter().filter_map(|id| dataset.get(id)) {
        for ingredient in &dish.ingredients {
            *counts.entry(ingredient.as_str()).or_insert(0) += 1;
        }
    }
    counts.into_iter().map(|(name, count)| ShoppingItem { name: name.to_string(), count }).collect()
}

/// Aggregated list plus the user's per-ingredient "bought" marks.
#[derive(Debug, Clone, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
    bought: HashMap<String, bool>,
}

impl ShoppingList {
    /// Rebuild from a new choice list. Bought marks are always cleared, even when
    /// the new list has the same ingredients.
    pub fn regenerate(&mut self, dataset: Option<&Dataset>, choices: &[String]) {
        self.items = dataset.map(|db| aggregate(db, choices)).unwrap_or_default();
        self.bought.clear();
    }

    /// Flip the bought mark of the entry at `index`. Returns the new mark.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let name = &self.items.get(index)?.name;
        let mark = self.bought.entry(name.clone()).or_insert(false);
        *mark = !*mark;
        Some(*mark)
    }

    pub fn is_bought(&self, name: &str) -> bool {
        self.bought.get(name).copied().unwrap_or(false)
    }

    pub fn bought_count(&self) -> usize {
        self.items.iter().filter(|item| self.is_bought(&item.name)).count()
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db() -> Dataset {
        Dataset::parse(
            "id\tname\ttags\tdiet\tingredients\n\
             1\tSoup\tc\tve\tpotato,onion,potato\n\
             2\tStew\t\t\tbeef,onion,carrot\n\
             3\tSalad\t\tk\tcucumber,Tomato,carrot",
        )
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_dish_counts_repeats() {
        let items = aggregate(&db(), &ids(&["1"]));
        assert_eq!(
            items,
            vec![
                ShoppingItem { name: "onion".into(), count: 1 },
                ShoppingItem { name: "potato".into(), count: 2 },
            ]
        );
    }

    #[test]
    fn sums_across_dishes_sorted_without_duplicates() {
        let items = aggregate(&db(), &ids(&["3", "1", "2"]));
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Tomato", "beef", "carrot", "cucumber", "onion", "potato"]);
        let count = |n: &str| items.iter().find(|i| i.name == n).unwrap().count;
        assert_eq!(count("onion"), 2);
        assert_eq!(count("carrot"), 2);
        assert_eq!(count("potato"), 2);
        assert_eq!(count("beef"), 1);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        assert!(aggregate(&db(), &ids(&["99"])).is_empty());
    }

    #[test]
    fn label_shows_count_above_one() {
        assert_eq!(ShoppingItem { name: "egg".into(), count: 1 }.label(), "egg");
        assert_eq!(ShoppingItem { name: "egg".into(), count: 3 }.label(), "egg (3)");
    }

    #[test]
    fn toggle_flips_only_that_entry() {
        let mut list = ShoppingList::default();
        list.regenerate(Some(&db()), &ids(&["1", "2"]));
        assert_eq!(list.toggle(0), Some(true));
        let first = list.items()[0].name.clone();
        assert!(list.is_bought(&first));
        assert_eq!(list.bought_count(), 1);
        for item in &list.items()[1..] {
            assert!(!list.is_bought(&item.name));
        }
        assert_eq!(list.toggle(0), Some(false));
        assert!(!list.is_bought(&first));
    }

    #[test]
    fn toggle_out_of_range() {
        let mut list = ShoppingList::default();
        list.regenerate(Some(&db()), &ids(&["1"]));
        assert_eq!(list.toggle(5), None);
        assert_eq!(list.bought_count(), 0);
    }

    #[test]
    fn regenerate_resets_bought_even_for_same_items() {
        let mut list = ShoppingList::default();
        list.regenerate(Some(&db()), &ids(&["1"]));
        list.toggle(0);
        list.toggle(1);
        list.regenerate(Some(&db()), &ids(&["1"]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.bought_count(), 0);
    }

    #[test]
    fn regenerate_without_dataset_is_empty() {
        let mut list = ShoppingList::default();
        list.regenerate(None, &ids(&["1"]));
        assert!(list.is_empty());
    }
}
