use crate::ui_traits::UiTool;

#[derive(Default)]
pub struct About {}

impl UiTool for About {
    fn name(&self) -> &'static str {
        "About Broadside"
    }

    fn show(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(self.name())
            .default_width(300.0)
            .default_pos(egui::pos2(450.0, 10.0))
            .open(open)
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("⚓Broadside");
        ui.add_space(4.0);
        ui.label(
            "Board renderer for a naval-combat game on a\n\
             320x200, 4-color interleaved display.\n\
             The board is drawn exactly as it would be in video memory\n\
             and decoded through the palette for this window.",
        );
    }
}
