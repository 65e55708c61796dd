use eframe::egui::{Stroke, Ui};
use egui_plot::{
    Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoint, PlotPoints, Points, Text,
};

use crate::color;
use crate::data::charts::{ChartSet, FarePoint};
use crate::data::model::Sex;
use crate::state::{AppState, ChartTab};

const CHART_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Tab dispatch
// ---------------------------------------------------------------------------

/// Render the charts of the currently open tab.
pub fn chart_tabs(ui: &mut Ui, state: &AppState) {
    let charts = &state.frame.charts;
    match state.tab {
        ChartTab::Survival => {
            ui.columns(2, |cols: &mut [Ui]| {
                class_distribution(&mut cols[0], charts);
                survival_by_sex(&mut cols[1], charts);
            });
            survival_by_class(ui, charts);
        }
        ChartTab::Demographics => {
            ui.columns(2, |cols: &mut [Ui]| {
                age_histogram(&mut cols[0], charts);
                age_vs_fare(&mut cols[1], charts);
            });
        }
        ChartTab::Fares => {
            fare_by_class(ui, charts);
        }
    }
}

// ---------------------------------------------------------------------------
// Individual chart renderers – each tolerates an empty projection
// ---------------------------------------------------------------------------

fn class_distribution(ui: &mut Ui, charts: &ChartSet) {
    ui.label("Passenger Distribution by Class");

    let colors = color::class_colors(
        &charts
            .class_distribution
            .iter()
            .map(|c| c.pclass)
            .collect(),
    );
    let bars: Vec<Bar> = charts
        .class_distribution
        .iter()
        .map(|c| {
            Bar::new(c.pclass as f64, c.count as f64)
                .width(0.6)
                .name(format!("Class {}", c.pclass))
                .fill(colors[&c.pclass])
        })
        .collect();

    Plot::new("class_distribution")
        .height(CHART_HEIGHT)
        .y_axis_label("Count")
        .x_axis_formatter(class_axis)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn survival_by_sex(ui: &mut Ui, charts: &ChartSet) {
    ui.label("Survival by Gender");

    let labels: Vec<String> = charts
        .survival_by_sex
        .iter()
        .map(|g| g.sex.to_string())
        .collect();

    let mut perished = Vec::new();
    let mut survived = Vec::new();
    for (i, group) in charts.survival_by_sex.iter().enumerate() {
        let x = i as f64;
        perished.push(
            Bar::new(x - 0.2, group.perished as f64)
                .width(0.35)
                .fill(color::perished_color()),
        );
        survived.push(
            Bar::new(x + 0.2, group.survived as f64)
                .width(0.35)
                .fill(color::survived_color()),
        );
    }

    Plot::new("survival_by_sex")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| {
            integer_label(mark.value, &labels)
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(perished).name("Perished"));
            plot_ui.bar_chart(BarChart::new(survived).name("Survived"));
        });
}

fn age_histogram(ui: &mut Ui, charts: &ChartSet) {
    ui.label("Age Distribution");

    let bars: Vec<Bar> = charts
        .age_histogram
        .iter()
        .map(|bin| {
            let center = (bin.start + bin.end) / 2.0;
            Bar::new(center, bin.count as f64)
                .width(bin.end - bin.start)
                .fill(color::sex_color(Sex::Male))
        })
        .collect();

    Plot::new("age_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Age")
        .y_axis_label("Count")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn age_vs_fare(ui: &mut Ui, charts: &ChartSet) {
    ui.label("Age vs Fare");

    let points = charts.age_vs_fare.clone();

    Plot::new("age_vs_fare")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Age")
        .y_axis_label("Fare")
        .show(ui, |plot_ui| {
            for sex in [Sex::Female, Sex::Male] {
                let series: PlotPoints = points
                    .iter()
                    .filter(|p| p.sex == sex)
                    .map(|p| [p.age, p.fare])
                    .collect();
                plot_ui.points(
                    Points::new(series)
                        .radius(2.5)
                        .color(color::sex_color(sex))
                        .name(sex.to_string()),
                );
            }

            // Hover label: the passenger name of the nearest point.
            if let Some(hovered) = nearest_point(plot_ui, &points) {
                plot_ui.text(
                    Text::new(
                        PlotPoint::new(hovered.age, hovered.fare),
                        format!("  {}", hovered.name),
                    )
                    .anchor(eframe::egui::Align2::LEFT_BOTTOM),
                );
            }
        });
}

fn fare_by_class(ui: &mut Ui, charts: &ChartSet) {
    ui.label("Fare Distribution by Passenger Class");

    let colors = color::class_colors(&charts.fare_by_class.iter().map(|b| b.pclass).collect());

    let elems: Vec<BoxElem> = charts
        .fare_by_class
        .iter()
        .map(|b| {
            let c = colors[&b.pclass];
            BoxElem::new(
                b.pclass as f64,
                BoxSpread::new(b.whisker_low, b.q1, b.median, b.q3, b.whisker_high),
            )
            .name(format!("Class {}", b.pclass))
            .fill(c.gamma_multiply(0.4))
            .stroke(Stroke::new(1.5, c))
        })
        .collect();

    let outliers: PlotPoints = charts
        .fare_by_class
        .iter()
        .flat_map(|b| b.outliers.iter().map(|&f| [b.pclass as f64, f]))
        .collect();

    Plot::new("fare_by_class")
        .height(CHART_HEIGHT)
        .y_axis_label("Fare")
        .x_axis_formatter(class_axis)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(elems));
            plot_ui.points(Points::new(outliers).radius(2.0));
        });
}

fn survival_by_class(ui: &mut Ui, charts: &ChartSet) {
    ui.label("Survival Rate by Class");

    let colors = color::class_colors(&charts.survival_by_class.iter().map(|r| r.pclass).collect());
    let bars: Vec<Bar> = charts
        .survival_by_class
        .iter()
        .map(|r| {
            Bar::new(r.pclass as f64, r.rate)
                .width(0.6)
                .name(format!("Class {}", r.pclass))
                .fill(colors[&r.pclass])
        })
        .collect();

    Plot::new("survival_by_class")
        .height(CHART_HEIGHT)
        .y_axis_label("Survival Rate")
        .include_y(1.0)
        .x_axis_formatter(class_axis)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Label integer x-axis marks as "Class n", everything else blank.
fn class_axis(mark: egui_plot::GridMark, _range: &std::ops::RangeInclusive<f64>) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() < 1e-6 && (1.0..=3.0).contains(&rounded) {
        format!("Class {}", rounded as u8)
    } else {
        String::new()
    }
}

/// Label integer x-axis marks with the group name at that index.
fn integer_label(value: f64, labels: &[String]) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-6 && rounded >= 0.0 {
        labels.get(rounded as usize).cloned().unwrap_or_default()
    } else {
        String::new()
    }
}

/// Find the scatter point nearest to the pointer, within a small screen
/// distance, for the hover label.
fn nearest_point<'a>(
    plot_ui: &egui_plot::PlotUi,
    points: &'a [FarePoint],
) -> Option<&'a FarePoint> {
    let pointer = plot_ui.pointer_coordinate()?;
    let transform = *plot_ui.transform();
    let pointer_screen = transform.position_from_point(&pointer);

    points
        .iter()
        .map(|p| {
            let screen = transform.position_from_point(&PlotPoint::new(p.age, p.fare));
            (p, screen.distance(pointer_screen))
        })
        .filter(|(_, d)| *d < 12.0)
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(p, _)| p)
}
