use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Raw data table – the filtered rows, verbatim
// ---------------------------------------------------------------------------

/// Render the filtered rows as a table. Shown only when the raw-data
/// toggle is on.
pub fn raw_data_table(ui: &mut Ui, state: &AppState) {
    ui.strong("Filtered Data");

    let visible = &state.frame.visible;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().at_least(180.0)) // Name
        .column(Column::auto()) // Sex
        .column(Column::auto()) // Class
        .column(Column::auto()) // Age
        .column(Column::auto()) // Fare
        .column(Column::auto()) // Survived
        .header(20.0, |mut header| {
            for title in ["Name", "Sex", "Class", "Age", "Fare", "Survived"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, visible.len(), |mut row| {
                let p = &state.dataset.passengers[visible[row.index()]];
                row.col(|ui| {
                    ui.label(&p.name);
                });
                row.col(|ui| {
                    ui.label(p.sex.to_string());
                });
                row.col(|ui| {
                    ui.label(p.pclass.to_string());
                });
                row.col(|ui| {
                    ui.label(
                        p.age
                            .map(|a| format!("{a}"))
                            .unwrap_or_else(|| "—".to_string()),
                    );
                });
                row.col(|ui| {
                    ui.label(format!("{:.4}", p.fare));
                });
                row.col(|ui| {
                    ui.label(if p.survived { "yes" } else { "no" });
                });
            });
        });
}
