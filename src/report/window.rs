use eframe::egui;
use egui_plot::{Corner, Legend, Line, Plot, PlotPoints};
use log::debug;

use crate::error::{CardioError, Result};
use crate::report::chart::{ChartSpec, LegendCorner};

/// Something that can present a chart to the user.
pub trait ChartDisplay {
    fn show(&mut self, chart: &ChartSpec) -> Result<()>;
}

/// Opens one native window per chart and blocks until the user closes it.
#[derive(Debug, Default)]
pub struct EguiDisplay;

impl ChartDisplay for EguiDisplay {
    fn show(&mut self, chart: &ChartSpec) -> Result<()> {
        debug!("opening chart window '{}'", chart.title);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(chart.title.clone())
                .with_inner_size([800.0, 600.0]),
            ..Default::default()
        };

        let app = ChartWindow { chart: chart.clone() };
        eframe::run_native(
            &chart.title,
            options,
            Box::new(move |_cc| Ok(Box::new(app))),
        )
        .map_err(|e| CardioError::Display(e.to_string()))
    }
}

struct ChartWindow {
    chart: ChartSpec,
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(&self.chart.title);
            });

            let corner = match self.chart.legend {
                LegendCorner::UpperLeft => Corner::LeftTop,
                LegendCorner::UpperRight => Corner::RightTop,
            };

            Plot::new("training_curve")
                .legend(Legend::default().position(corner))
                .x_axis_label(self.chart.x_label.as_str())
                .y_axis_label(self.chart.y_label.as_str())
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    let points: PlotPoints = self.chart.points.iter().copied().collect();
                    plot_ui.line(Line::new(points).name(&self.chart.series_name).width(1.5));
                });
        });
    }
}
