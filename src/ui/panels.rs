use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::{AppState, ChartTab};

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            sex_filter(ui, state);
            ui.separator();
            class_filter(ui, state);
            ui.separator();
            age_filter(ui, state);
            ui.separator();

            ui.checkbox(&mut state.show_raw_data, "Show raw data");
        });

    // Recompute the derived frame after any widget changes.
    state.refilter();
}

fn sex_filter(ui: &mut Ui, state: &mut AppState) {
    let all_sexes = state.dataset.sexes.clone();
    let n_selected = state.selection.sexes.len();
    let header = format!("Gender  ({n_selected}/{})", all_sexes.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("sex_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_sexes();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_sexes();
                }
            });
            for sex in all_sexes {
                let mut checked = state.selection.sexes.contains(&sex);
                if ui.checkbox(&mut checked, sex.to_string()).changed() {
                    state.toggle_sex(sex);
                }
            }
        });
}

fn class_filter(ui: &mut Ui, state: &mut AppState) {
    let all_classes = state.dataset.classes.clone();
    let n_selected = state.selection.classes.len();
    let header = format!("Passenger class  ({n_selected}/{})", all_classes.len());

    egui::CollapsingHeader::new(RichText::new(header).strong())
        .id_salt("class_filter")
        .default_open(true)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    state.select_all_classes();
                }
                if ui.small_button("None").clicked() {
                    state.select_no_classes();
                }
            });
            for pclass in all_classes {
                let mut checked = state.selection.classes.contains(&pclass);
                if ui.checkbox(&mut checked, format!("Class {pclass}")).changed() {
                    state.toggle_class(pclass);
                }
            }
        });
}

fn age_filter(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Age range");

    let (dom_lo, dom_hi) = state.dataset.age_domain;
    let (mut lo, mut hi) = state.selection.age_range;

    let lo_changed = ui
        .add(egui::Slider::new(&mut lo, dom_lo..=dom_hi).text("min"))
        .changed();
    let hi_changed = ui
        .add(egui::Slider::new(&mut hi, dom_lo..=dom_hi).text("max"))
        .changed();

    if lo_changed || hi_changed {
        // Dragging one handle past the other drags the other along.
        if lo_changed && lo > hi {
            hi = lo;
        }
        if hi_changed && hi < lo {
            lo = hi;
        }
        state.set_age_range(lo, hi);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top title / status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Titanic Passenger Analysis");
        ui.separator();
        ui.label(format!(
            "{} passengers loaded, {} matching",
            state.dataset.len(),
            state.frame.visible.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Metric row + chart tabs
// ---------------------------------------------------------------------------

/// Render the three headline metrics in a row.
pub fn metric_row(ui: &mut Ui, state: &AppState) {
    let metrics = &state.frame.metrics;
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Passengers", metrics.count.to_string());
        metric(&mut cols[1], "Survival Rate", metrics.survival_rate_label());
        metric(&mut cols[2], "Average Age", metrics.average_age_label());
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(value).size(22.0).strong());
        ui.label(RichText::new(label).weak());
    });
}

/// Render the chart tab strip; the open tab lives in state.
pub fn tab_strip(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for (tab, label) in [
            (ChartTab::Survival, "Survival"),
            (ChartTab::Demographics, "Demographics"),
            (ChartTab::Fares, "Fares"),
        ] {
            if ui.selectable_label(state.tab == tab, label).clicked() {
                state.tab = tab;
            }
        }
    });
}
