use std::path::PathBuf;

use eframe::egui;
use egui::{CentralPanel, RichText, TopBottomPanel, Ui};

use crate::{
    config::Config,
    ledger::{Ledger, Transaction},
    pie_chart::ExpenseChartPanel,
    profile::{Profile, ProfileView},
    theme,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Charts,
    Profile,
}

pub struct App {
    tab: Tab,
    chart: ExpenseChartPanel,
    profile: ProfileView,
    data_path: Option<PathBuf>,
    status: Option<String>,
    window_size: egui::Vec2,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Expense Tracker");
                ui.separator();
                ui.selectable_value(&mut self.tab, Tab::Charts, "Charts");
                ui.selectable_value(&mut self.tab, Tab::Profile, "Profile");
            });
        });

        CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Charts => self.render_charts(ctx, ui),
            Tab::Profile => self.profile.show(ctx, ui),
        });
    }
}

impl App {
    pub fn new(config: Config, transactions: Vec<Transaction>) -> Self {
        App {
            tab: Tab::Charts,
            chart: ExpenseChartPanel::new(transactions),
            profile: ProfileView::new(Profile::default()),
            data_path: config.data,
            status: None,
            window_size: egui::vec2(config.window_width, config.window_height),
        }
    }

    pub fn run(self) -> ! {
        let options = eframe::NativeOptions {
            initial_window_size: Some(self.window_size),
            ..Default::default()
        };

        eframe::run_native(
            "Expense Tracker",
            options,
            Box::new(move |cc| {
                cc.egui_ctx.set_visuals(theme::visuals());
                Box::new(self)
            }),
        )
    }

    /// Update entry point for the chart: swaps in the new list and schedules
    /// a redraw.
    pub fn update_data(&mut self, ctx: &egui::Context, transactions: Vec<Transaction>) {
        self.chart.update_data(transactions);
        ctx.request_repaint();
    }

    fn load_data(&mut self, ctx: &egui::Context, path: PathBuf) {
        match Ledger::load(&path) {
            Ok(transactions) => {
                self.update_data(ctx, transactions);
                self.data_path = Some(path);
                self.status = None;
            }
            Err(err) => {
                // Keep showing whatever was loaded before.
                log::warn!("{}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    fn render_charts(&mut self, ctx: &egui::Context, ui: &mut Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open…").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Ledger", &["toml"])
                    .pick_file()
                {
                    self.load_data(ctx, path);
                }
            }

            let reload = egui::Button::new("Reload");
            if ui.add_enabled(self.data_path.is_some(), reload).clicked() {
                if let Some(path) = self.data_path.clone() {
                    self.load_data(ctx, path);
                }
            }

            match &self.data_path {
                Some(path) => ui.label(path.display().to_string()),
                None => ui.label("Sample data"),
            };
            ui.label(format!("({} transactions)", self.chart.transactions().len()));
        });

        if let Some(status) = &self.status {
            ui.label(RichText::new(status).color(theme::PRIMARY_RED));
        }

        ui.separator();

        self.chart.show(ui);
    }
}
