use std::{env, error, fs, path::Path};

use gfx::{FrameClock, FrameSync, Headless, Palette, PolledVsync, Screen, TileAtlas};
use ui::{app::App, retrace::SimulatedRetrace, session::Session};

mod config;
mod logging;

use config::{Config, USAGE};

fn main() {
    println!("broadside v0.1.0");

    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    let _guard = logging::init(config.log);

    if let Err(e) = run(config) {
        tracing::error!("{e}");
        std::process::exit(2);
    }
}

fn run(config: Config) -> Result<(), Box<dyn error::Error>> {
    let atlas = match &config.atlas {
        Some(path) => read_atlas(path)?,
        None => {
            tracing::info!("no atlas given, using the built-in glyphs");
            ui::atlas::placeholder()
        }
    };

    let sync: Box<dyn FrameSync> = match config.vsync_timeout {
        Some(timeout) => {
            Box::new(PolledVsync::new(SimulatedRetrace::default()).with_timeout(timeout))
        }
        None => Box::new(FrameClock::default()),
    };

    let screen = Screen::new(atlas, Palette::default(), Headless::default(), sync);
    let mut session = Session::new(screen, config.players, &config.names)?;
    session.start()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("broadside v0.1.0"),
        ..Default::default()
    };

    eframe::run_native(
        "broadside",
        options,
        Box::new(|_| Ok(Box::new(App::new(session)))),
    )?;

    Ok(())
}

fn read_atlas(path: &Path) -> Result<TileAtlas, Box<dyn error::Error>> {
    tracing::info!("loading atlas {}", path.display());
    let data = fs::read(path)?;

    Ok(TileAtlas::from_bytes(&data)?)
}
