#[allow(clippy::cast_possible_truncation)]
mod bitwise;

#[allow(clippy::missing_errors_doc)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_possible_wrap)]
pub mod board;

#[allow(clippy::missing_errors_doc)]
pub mod canvas;
pub mod color;

#[allow(clippy::missing_errors_doc)]
pub mod display;
pub mod error;

#[allow(clippy::missing_errors_doc)]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub mod field;
pub mod point;

#[allow(clippy::missing_errors_doc)]
pub mod ship;

#[allow(clippy::missing_errors_doc)]
#[allow(clippy::cast_possible_truncation)]
pub mod surface;

#[allow(clippy::missing_errors_doc)]
pub mod sync;

#[allow(clippy::missing_errors_doc)]
#[allow(clippy::cast_possible_truncation)]
pub mod tile;

pub use board::RendererContext;
pub use canvas::Canvas;
pub use color::{Color, Palette, Rgb};
pub use display::{DisplayMode, Headless, Screen};
pub use error::{GfxError, Result};
pub use field::{Cell, GameField};
pub use ship::{Orientation, Ship};
pub use surface::Surface;
pub use sync::{FrameClock, FrameSync, PolledVsync, VsyncSignal};
pub use tile::{BlitMode, Tile, TileAtlas};
