use egui::Color32;

pub struct RgbColor(pub gfx::Rgb);

impl From<RgbColor> for Color32 {
    fn from(color: RgbColor) -> Self {
        Self::from_rgb(color.0.red, color.0.green, color.0.blue)
    }
}

impl From<Color32> for RgbColor {
    fn from(color: Color32) -> Self {
        Self(gfx::Rgb::from_rgb(color.r(), color.g(), color.b()))
    }
}
