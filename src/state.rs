use crate::data::filter::{full_selection, FilterSelection};
use crate::data::model::{Dataset, Sex};
use crate::data::{render_frame, Frame};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which chart tab is open in the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTab {
    Survival,
    Demographics,
    Fares,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The loaded dataset; read-only for the process lifetime.
    pub dataset: &'static Dataset,

    /// Active sidebar predicates.
    pub selection: FilterSelection,

    /// Everything derived from the current selection (cached per frame).
    pub frame: Frame,

    /// Open chart tab.
    pub tab: ChartTab,

    /// Whether the raw filtered table is shown.
    pub show_raw_data: bool,
}

impl AppState {
    /// Start with the full-domain selection (every row visible).
    pub fn new(dataset: &'static Dataset) -> Self {
        let selection = full_selection(dataset);
        let frame = render_frame(dataset, &selection);
        Self {
            dataset,
            selection,
            frame,
            tab: ChartTab::Survival,
            show_raw_data: false,
        }
    }

    /// Recompute the derived frame after a selection change.
    pub fn refilter(&mut self) {
        self.frame = render_frame(self.dataset, &self.selection);
    }

    /// Toggle one gender in the selection.
    pub fn toggle_sex(&mut self, sex: Sex) {
        if !self.selection.sexes.remove(&sex) {
            self.selection.sexes.insert(sex);
        }
        self.refilter();
    }

    /// Toggle one ticket class in the selection.
    pub fn toggle_class(&mut self, pclass: u8) {
        if !self.selection.classes.remove(&pclass) {
            self.selection.classes.insert(pclass);
        }
        self.refilter();
    }

    /// Select every gender.
    pub fn select_all_sexes(&mut self) {
        self.selection.sexes = self.dataset.sexes.clone();
        self.refilter();
    }

    /// Deselect every gender.
    pub fn select_no_sexes(&mut self) {
        self.selection.sexes.clear();
        self.refilter();
    }

    /// Select every ticket class.
    pub fn select_all_classes(&mut self) {
        self.selection.classes = self.dataset.classes.clone();
        self.refilter();
    }

    /// Deselect every ticket class.
    pub fn select_no_classes(&mut self) {
        self.selection.classes.clear();
        self.refilter();
    }

    /// Set the age range, keeping min ≤ max and clamping to the domain.
    pub fn set_age_range(&mut self, mut lo: u32, mut hi: u32) {
        let (dom_lo, dom_hi) = self.dataset.age_domain;
        lo = lo.clamp(dom_lo, dom_hi);
        hi = hi.clamp(dom_lo, dom_hi);
        if lo > hi {
            hi = lo;
        }
        self.selection.age_range = (lo, hi);
        self.refilter();
    }
}
