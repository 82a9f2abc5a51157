use egui::{self, ColorImage, Sense, TextureHandle, Ui};

use eframe::epaint::textures::TextureOptions;
use egui::load::SizedTexture;
use std::sync::{Arc, Mutex};

use gfx::surface::{HEIGHT, PIXELS_PER_BYTE, WIDTH};
use gfx::{Palette, Surface};

use crate::session::{Session, Shot};
use crate::ui_traits::UiTool;

/// Displayed height over width; CGA-era monitors had non-square pixels.
const ASPECT: f32 = 0.75;

pub struct BoardView {
    session: Arc<Mutex<Session>>,
    texture: Option<TextureHandle>,
}

impl BoardView {
    pub(crate) const fn new(session: Arc<Mutex<Session>>) -> Self {
        Self {
            session,
            texture: None,
        }
    }

    fn upload(&mut self, ui: &Ui, image: ColorImage) -> Option<SizedTexture> {
        if let Some(texture) = &mut self.texture {
            texture.set(image, TextureOptions::NEAREST);
        } else {
            self.texture = Some(ui.ctx().load_texture("board", image, TextureOptions::NEAREST));
        }

        let width = ui.available_width();
        let texture = self.texture.as_ref()?;
        Some(SizedTexture::new(texture.id(), [width, width * ASPECT]))
    }
}

/// Decodes the packed surface into RGB triples through `palette`.
#[must_use]
pub fn decode(surface: &Surface, palette: &Palette) -> Vec<u8> {
    (0..HEIGHT)
        .filter_map(|y| surface.row(y).ok())
        .flat_map(|row| {
            row.iter().flat_map(|&byte| {
                (0..PIXELS_PER_BYTE).flat_map(move |lane| {
                    let index = (byte >> (6 - lane * 2)) & 0b11;
                    <[u8; 3]>::from(palette.0[usize::from(index)])
                })
            })
        })
        .collect()
}

impl UiTool for BoardView {
    fn name(&self) -> &'static str {
        "Board"
    }

    #[allow(clippy::cast_precision_loss)]
    fn show(&mut self, ctx: &egui::Context, open: &mut bool) {
        egui::Window::new(self.name())
            .open(open)
            .default_width(WIDTH as f32 * 2.0)
            .default_height(HEIGHT as f32 * 2.0 * ASPECT)
            .collapsible(false)
            .show(ctx, |ui| {
                self.ui(ui);
            });
    }

    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    fn ui(&mut self, ui: &mut Ui) {
        let Ok(session) = self.session.lock() else {
            return;
        };
        let screen = session.screen();
        if !screen.is_active() {
            ui.label("display not initialized");
            return;
        }

        let rgb = decode(screen.surface(), screen.palette());
        drop(session);

        let image = ColorImage::from_rgb([WIDTH, HEIGHT], &rgb);
        let Some(sized) = self.upload(ui, image) else {
            return;
        };
        let response = ui.add(egui::Image::new(sized).sense(Sense::click()));

        let shot = if response.clicked() {
            Shot::Hit
        } else if response.secondary_clicked() {
            Shot::Miss
        } else {
            return;
        };
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };

        let rel = pos - response.rect.min;
        let x = (rel.x / response.rect.width() * WIDTH as f32) as usize;
        let y = (rel.y / response.rect.height() * HEIGHT as f32) as usize;

        if let Ok(mut session) = self.session.lock()
            && let Some((quadrant, position)) = session.hit_test(x, y)
            && let Err(e) = session.shoot(quadrant, position, shot)
        {
            tracing::error!("shot at {quadrant}/{position} failed: {e}");
        }
    }
}
