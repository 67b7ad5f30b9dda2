//! Share links: the whole session state round-trips through a URL query string.
//!
//! `?s=<seed>&a=<amount>&k=<1|0>&v=<1|0>`. Unknown pairs are carried along
//! untouched so a link pasted from elsewhere keeps its extra parameters.
use std::borrow::Cow;

use uuid::Uuid;

use crate::constants::{FLAG_OFF, FLAG_ON, PARAM_AMOUNT, PARAM_KIDS_ONLY, PARAM_SEED, PARAM_VEG_ONLY, SEED_LEN};
use crate::selection::Filters;

/// Everything that decides which dishes are shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub seed: String,
    pub amount: usize,
    pub filters: Filters,
}

impl Default for Selection {
    fn default() -> Self {
        Self { seed: new_seed(), amount: 0, filters: Filters::default() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareLink {
    pub selection: Selection,
    /// Query pairs this codec does not own, in original order
    pub passthrough: Vec<(String, String)>,
}

impl ShareLink {
    pub fn new(selection: Selection) -> Self {
        Self { selection, passthrough: Vec::new() }
    }

    /// Decode a full URL, a `?query` or a bare query. Missing values fall back to
    /// defaults, and a missing or empty seed gets a fresh one.
    pub fn parse(input: &str) -> Self {
        let query = extract_query(input);

        let mut seed: Option<String> = None;
        let mut amount: Option<usize> = None;
        let mut kids_only: Option<bool> = None;
        let mut veg_only: Option<bool> = None;
        let mut passthrough = Vec::new();

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let value = decode_component(raw_value);
            match key.as_str() {
                PARAM_SEED => {
                    seed.get_or_insert(value);
                }
                PARAM_AMOUNT => {
                    amount.get_or_insert_with(|| parse_amount(&value));
                }
                PARAM_KIDS_ONLY => {
                    kids_only.get_or_insert(value == FLAG_ON);
                }
                PARAM_VEG_ONLY => {
                    veg_only.get_or_insert(value == FLAG_ON);
                }
                _ => passthrough.push((key, value)),
            }
        }

        let seed = seed.filter(|s| !s.is_empty()).unwrap_or_else(new_seed);
        Self {
            selection: Selection {
                seed,
                amount: amount.unwrap_or(0),
                filters: Filters::new(kids_only.unwrap_or(false), veg_only.unwrap_or(false)),
            },
            passthrough,
        }
    }

    /// Encoded query string, without the leading `?`.
    pub fn query(&self) -> String {
        let sel = &self.selection;
        let mut pairs: Vec<(&str, Cow<'_, str>)> = vec![
            (PARAM_SEED, Cow::Borrowed(sel.seed.as_str())),
            (PARAM_AMOUNT, Cow::Owned(sel.amount.to_string())),
            (PARAM_KIDS_ONLY, Cow::Borrowed(flag(sel.filters.kids_only))),
            (PARAM_VEG_ONLY, Cow::Borrowed(flag(sel.filters.veg_only))),
        ];
        pairs.extend(self.passthrough.iter().map(|(k, v)| (k.as_str(), Cow::Borrowed(v.as_str()))));

        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `base` followed by `?` and the query.
    pub fn url(&self, base: &str) -> String {
        format!("{}?{}", base, self.query())
    }
}

/// Fresh seed: the leading hex characters of a random UUID.
pub fn new_seed() -> String {
    Uuid::new_v4().simple().to_string()[..SEED_LEN].to_string()
}

fn flag(on: bool) -> &'static str {
    if on { FLAG_ON } else { FLAG_OFF }
}

fn extract_query(input: &str) -> &str {
    let input = input.trim();
    let without_fragment = input.split_once('#').map_or(input, |(before, _)| before);
    match without_fragment.split_once('?') {
        Some((_, query)) => query,
        None if without_fragment.contains('=') => without_fragment,
        None => "",
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}

fn parse_amount(value: &str) -> usize {
    value.trim().parse::<usize>().unwrap_or(0)
}
