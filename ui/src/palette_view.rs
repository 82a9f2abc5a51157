use std::sync::{Arc, Mutex};

use egui::Color32;
use gfx::Color;

use crate::rgb_color::RgbColor;
use crate::session::Session;
use crate::ui_traits::UiTool;

pub struct PaletteView {
    session: Arc<Mutex<Session>>,
}

impl PaletteView {
    pub(crate) const fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }
}

impl UiTool for PaletteView {
    fn name(&self) -> &'static str {
        "Palette"
    }

    fn show(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(self.name())
            .default_width(200.0)
            .open(open)
            .show(ctx, |ui| self.ui(ui));
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        let Ok(session) = self.session.lock() else {
            return;
        };
        let palette = session.screen().palette();

        egui::Grid::new("palette").striped(true).show(ui, |ui| {
            for color in Color::ALL {
                let rgb = palette.rgb(color);
                let fill: Color32 = RgbColor(rgb).into();

                ui.label(format!("{} {color:?}", color.index()));
                ui.add(egui::Button::new("    ").fill(fill));
                ui.label(rgb.to_string());
                ui.end_row();
            }
        });
    }
}
