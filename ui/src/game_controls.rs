use std::sync::{Arc, Mutex};

use gfx::board::{MAX_PLAYERS, NAME_GLYPHS};

use crate::session::Session;
use crate::ui_traits::UiTool;

pub struct GameControls {
    session: Arc<Mutex<Session>>,
    player_count: usize,
    names: [String; MAX_PLAYERS],
}

impl GameControls {
    pub(crate) fn new(session: Arc<Mutex<Session>>) -> Self {
        let (player_count, names) = match session.lock() {
            Ok(s) => (
                s.player_count(),
                std::array::from_fn(|i| s.name(i).to_owned()),
            ),
            Err(_) => (1, Default::default()),
        };

        Self {
            session,
            player_count,
            names,
        }
    }
}

impl UiTool for GameControls {
    fn name(&self) -> &'static str {
        "Game"
    }

    fn show(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(self.name())
            .default_width(240.0)
            .default_pos(egui::pos2(10.0, 10.0))
            .open(open)
            .show(ctx, |ui| self.ui(ui));
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        let Ok(mut session) = self.session.lock() else {
            return;
        };

        ui.add(egui::Slider::new(&mut self.player_count, 1..=MAX_PLAYERS).text("players"));
        if ui.button("New game").clicked()
            && let Err(e) = session.new_game(self.player_count)
        {
            tracing::error!("can't start a new game: {e}");
        }

        ui.separator();
        ui.label(format!(
            "Turn: {} ({})",
            session.active() + 1,
            session.name(session.active())
        ));
        if ui.button("Next turn").clicked()
            && let Err(e) = session.next_turn()
        {
            tracing::error!("can't pass the turn: {e}");
        }

        let mut fleet = session.fleet_visible();
        if ui.checkbox(&mut fleet, "Show fleet").changed()
            && let Err(e) = session.set_fleet_visible(fleet)
        {
            tracing::error!("can't draw the fleet: {e}");
        }

        ui.separator();
        ui.label("Names");
        for (quadrant, name) in self.names.iter_mut().enumerate() {
            let edit = egui::TextEdit::singleline(name).char_limit(NAME_GLYPHS);
            if ui.add(edit).lost_focus()
                && let Err(e) = session.rename(quadrant, name.clone())
            {
                tracing::error!("can't rename player {quadrant}: {e}");
            }
        }

        ui.separator();
        ui.label("Left click: hit, right click: miss.");
    }
}
