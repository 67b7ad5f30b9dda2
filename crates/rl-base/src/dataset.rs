use std::collections::HashMap;

use crate::constants::{FIELD_COUNT, FIELD_SEPARATOR, LIST_SEPARATOR};
use crate::selection::Markers;

/// One dataset row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    /// Free-form tags, e.g. the kid-friendly marker
    pub tags: Vec<String>,
    /// Diet classifiers, e.g. vegetarian or vegan
    pub diet: Vec<String>,
    /// Ingredient lines in file order. Repeats are kept and counted later.
    pub ingredients: Vec<String>,
}

impl Dish {
    pub fn is_kid_friendly(&self, markers: &Markers) -> bool {
        self.tags.iter().any(|t| *t == markers.kid_friendly)
    }

    pub fn is_vegetarian(&self, markers: &Markers) -> bool {
        self.diet.iter().any(|d| markers.vegetarian.contains(d))
    }
}

/// Dishes keyed by id, iterated in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    dishes: Vec<Dish>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Parse tab-separated text. The first line is a header and is discarded.
    ///
    /// Columns: id, name, tags, diet, ingredients. The last three are comma
    /// lists and may be empty, but must be present: rows with fewer columns are
    /// skipped without error.
    pub fn parse(text: &str) -> Self {
        let mut dataset = Self::default();
        for line in text.split('\n').skip(1) {
            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            if fields.len() < FIELD_COUNT {
                continue;
            }
            dataset.insert(Dish {
                id: fields[0].trim().to_string(),
                name: fields[1].trim().to_string(),
                tags: split_list(fields[2]),
                diet: split_list(fields[3]),
                ingredients: split_list(fields[4]),
            });
        }
        dataset
    }

    /// Insert or replace by id. A replaced dish keeps its original position.
    pub fn insert(&mut self, dish: Dish) {
        match self.index.get(&dish.id) {
            Some(&pos) => self.dishes[pos] = dish,
            None => {
                self.index.insert(dish.id.clone(), self.dishes.len());
                self.dishes.push(dish);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.index.get(id).map(|&pos| &self.dishes[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.dishes.iter().map(|d| d.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
