//! # Broadside Viewer Application
//!
//! The main application struct: it owns the shared [`Session`] and the tool
//! windows that look at it.
//!
//! ## Shared State
//!
//! The [`Session`] is wrapped in `Arc<Mutex<Session>>` so every tool can
//! reach the screen. Each tool locks the mutex only while it reads the
//! surface or issues a draw call.
//!
//! ## UI Tools
//!
//! Each UI component implements the [`UiTool`] trait, which provides:
//! - `name()` - Display name for the tool panel
//! - `show()` - Render the tool's window
//!
//! Tools can be toggled on/off via the sidebar checkboxes.

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::board_view::BoardView;
use crate::game_controls::GameControls;
use crate::palette_view::PaletteView;
use crate::session::Session;
use crate::{about, ui_traits::UiTool};

/// The main Broadside viewer.
///
/// ```ignore
/// let app = App::new(session);
/// eframe::run_native("Broadside", options, Box::new(|_| Ok(Box::new(app))));
/// ```
pub struct App {
    session: Arc<Mutex<Session>>,
    tools: Vec<Box<dyn UiTool>>,
    open: BTreeSet<String>,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let session = Arc::new(Mutex::new(session));

        let tools: Vec<Box<dyn UiTool>> = vec![
            Box::<about::About>::default(),
            Box::new(BoardView::new(Arc::clone(&session))),
            Box::new(GameControls::new(Arc::clone(&session))),
            Box::new(PaletteView::new(Arc::clone(&session))),
        ];

        let open = tools
            .iter()
            .skip(1)
            .map(|tool| tool.name().to_owned())
            .collect();

        Self {
            session,
            tools,
            open,
        }
    }

    pub fn checkboxes(&mut self, ui: &mut egui::Ui) {
        let Self { tools, open, .. } = self;
        for tool in tools {
            let mut is_open = open.contains(tool.name());
            ui.toggle_value(&mut is_open, tool.name());
            set_open(open, tool.name(), is_open);
        }
    }

    fn windows(&mut self, ctx: &egui::Context) {
        let Self { tools, open, .. } = self;
        for tool in tools {
            let mut is_open = open.contains(tool.name());
            tool.show(ctx, &mut is_open);
            set_open(open, tool.name(), is_open);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if let Ok(mut session) = self.session.lock()
            && let Err(e) = session.tick(Instant::now())
        {
            tracing::error!("blink update failed: {e}");
        }

        egui::SidePanel::right("Broadside Tools")
            .resizable(false)
            .default_width(200.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("⚓ Broadside Tools");
                });

                ui.separator();

                self.checkboxes(ui);
            });

        self.windows(ctx);
    }
}

fn set_open(open: &mut BTreeSet<String>, key: &'static str, is_open: bool) {
    if is_open {
        if !open.contains(key) {
            open.insert(key.to_owned());
        }
    } else {
        open.remove(key);
    }
}
