use eframe::egui;
use egui::{Button, CentralPanel, TopBottomPanel, Visuals};
use rand::Rng;

use stats_view::{StatsView, StyleConfig};

pub struct App {
    view: StatsView,
    values: Vec<f32>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("my_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Stats");
                ui.label(describe(self.view.style(), &self.values));

                if ui.add(Button::new("Replay")).clicked() {
                    self.view.set_data(self.values.clone());
                }
                if ui.add(Button::new("Shuffle")).clicked() {
                    let mut rng = rand::thread_rng();
                    self.values = (0..self.values.len().max(1))
                        .map(|_| rng.gen_range(1.0..1000.0))
                        .collect();
                    self.view.set_data(self.values.clone());
                }
            });
        });

        CentralPanel::default().show(ctx, |ui| {
            ui.add(&mut self.view);
        });
    }
}

fn describe(style: &StyleConfig, values: &[f32]) -> String {
    format!("{} values, {} mode", values.len(), style.mode)
}

impl App {
    pub fn new(mut view: StatsView, values: Vec<f32>) -> Self {
        let options = eframe::NativeOptions::default();
        view.set_data(values.clone());
        let app = App { view, values };

        eframe::run_native(
            "Stats View",
            options,
            Box::new(|cc| {
                cc.egui_ctx.set_visuals(Visuals::light());
                Box::new(app)
            }),
        );
    }
}
