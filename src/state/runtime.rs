use rl_base::dataset::Dataset;
use rl_base::selection::{Markers, choose, eligible_ids};
use rl_base::share::{Selection, ShareLink};
use rl_base::shopping::ShoppingList;

/// Progress of the one-shot dataset load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready { dishes: usize },
    Failed(String),
}

/// Which input changed. Decides how far down the derivation chain to recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Dataset,
    Filters,
    Seed,
    Amount,
}

/// Runtime session state. Inputs are `selection` and `dataset`, everything
/// below them is derived by [`State::refresh`].
pub struct State {
    pub selection: Selection,
    /// Foreign query pairs from the link we were started with
    pub passthrough: Vec<(String, String)>,
    pub markers: Markers,
    pub dataset: Option<Dataset>,
    pub load_status: LoadStatus,
    /// Dataset ids passing the active filters, in dataset order
    pub eligible: Vec<String>,
    /// Sampled ids, in acceptance order
    pub choices: Vec<String>,
    pub shopping: ShoppingList,
    /// Highlighted row of the shopping list
    pub cursor: usize,
    /// Prefix for the displayed share link
    pub share_base: String,
    /// Needs a redraw
    pub dirty: bool,
}

impl State {
    pub fn new(link: ShareLink, markers: Markers, share_base: String) -> Self {
        Self {
            selection: link.selection,
            passthrough: link.passthrough,
            markers,
            dataset: None,
            load_status: LoadStatus::Loading,
            eligible: Vec::new(),
            choices: Vec::new(),
            shopping: ShoppingList::default(),
            cursor: 0,
            share_base,
            dirty: true,
        }
    }

    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.load_status = LoadStatus::Ready { dishes: dataset.len() };
        self.dataset = Some(dataset);
        self.refresh(Change::Dataset);
    }

    pub fn set_load_failed(&mut self, error: String) {
        self.load_status = LoadStatus::Failed(error);
        self.dirty = true;
    }

    /// Recompute derived state after `change`, in dependency order:
    /// eligible ids, then choices, then the shopping list (which clears bought
    /// marks). Nothing is derived until a dataset is present.
    pub fn refresh(&mut self, change: Change) {
        self.dirty = true;
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };

        if matches!(change, Change::Dataset | Change::Filters) {
            self.eligible = eligible_ids(Some(dataset), self.selection.filters, &self.markers);
        }
        self.choices = choose(&self.selection.seed, self.selection.amount, &self.eligible);
        self.shopping.regenerate(Some(dataset), &self.choices);
        self.cursor = self.cursor.min(self.shopping.len().saturating_sub(1));
    }

    pub fn share_link(&self) -> ShareLink {
        ShareLink { selection: self.selection.clone(), passthrough: self.passthrough.clone() }
    }

    pub fn share_url(&self) -> String {
        self.share_link().url(&self.share_base)
    }

    /// Display names of the chosen dishes, in choice order
    pub fn chosen_names(&self) -> Vec<&str> {
        let Some(dataset) = self.dataset.as_ref() else {
            return Vec::new();
        };
        self.choices.iter().filter_map(|id| dataset.get(id)).map(|dish| dish.name.as_str()).collect()
    }

    pub fn is_ready(&self) -> bool {
        self.dataset.is_some()
    }
}
