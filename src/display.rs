//! Interactive scatter window.
//!
//! The set is drawn with `egui_plot` inside an `eframe` native window,
//! `render` returns only when the window is closed.

use eframe::egui::{self, Color32};
use egui_plot::{MarkerShape, Plot, PlotPoints, Points};

use crate::CoordinateSet;

pub const WINDOW_SIZE: [f32; 2] = [1000.0, 750.0];
pub const MIN_WINDOW_SIZE: [f32; 2] = [400.0, 300.0];
pub const MARKER_RADIUS: f32 = 4.0;
pub const MARKER_COLOR: Color32 = Color32::RED;

pub struct ScatterApp {
    name: String,
    points: Vec<[f64; 2]>,
}

impl ScatterApp {
    pub fn new(set: &CoordinateSet, name: &str) -> Self {
        Self {
            name: name.to_string(),
            points: set.pairs().map(|(x, y)| [x, y]).collect(),
        }
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("scatter_plot")
                .x_axis_label("x")
                .y_axis_label("y")
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    let points: PlotPoints = self.points.iter().copied().collect();
                    let series = Points::new(points)
                        .name(&self.name)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(MARKER_RADIUS)
                        .color(MARKER_COLOR);
                    plot_ui.points(series);
                });
        });
    }
}

/// Show the set as filled red circles and block until the window is closed.
pub fn render(set: &CoordinateSet, title: &str) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title)
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };
    let app = ScatterApp::new(set, title);
    log::info!("showing {} points, close the window to exit", app.points().len());
    eframe::run_native(title, options, Box::new(move |_cc| Ok(Box::new(app))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn app_keeps_pairs_in_order() {
        let set = CoordinateSet::from_reader(Cursor::new("3\n0 0\n1 2\n2 4\n")).unwrap();
        let app = ScatterApp::new(&set, "set");
        assert_eq!(app.points(), &[[0., 0.], [1., 2.], [2., 4.]]);
    }
}
