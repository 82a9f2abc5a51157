pub mod about;
pub mod app;
pub mod atlas;
pub mod board_view;
pub mod game_controls;
pub mod palette_view;
pub mod retrace;
pub mod rgb_color;
pub mod session;
pub mod ui_traits;
