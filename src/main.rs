//! # Ring Clock Development Binary
//!
//! Renders the watchface for the current local time as ASCII art, standing
//! in for the display compositor during development. With `--watch` the
//! binary re-renders once per second, the way the production timer service
//! drives the renderer.

// Test modules
#[cfg(test)]
mod tests;

use ring_clock_lib::config::Config;
use ring_clock_lib::renderer::draw_ascii;
use ring_clock_lib::watchface::{FaceStyle, Watchface};
use ring_clock_lib::TimeOfDay;
use std::env;

/// Main application entry point.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Development flags, in place of the host services:
    //   --polygon       triangle face instead of the nested rings
    //   --watch         re-render once per second
    //   --disconnected  preview the lost-connection indicator
    //   --invert        preview inverted colors (not persisted)
    let polygon = env::args().any(|arg| arg == "--polygon");
    let watch = env::args().any(|arg| arg == "--watch");
    let disconnected = env::args().any(|arg| arg == "--disconnected");
    let invert = env::args().any(|arg| arg == "--invert");

    let mut config = Config::load();
    if invert {
        config.watchface.invert = true;
    }

    let style = if polygon {
        FaceStyle::Polygon
    } else {
        FaceStyle::Ring
    };
    let mut face = Watchface::new(config, style);
    face.set_connected(!disconnected);

    loop {
        let time: TimeOfDay = chrono::Local::now().time().into();
        let frame = face.on_tick(time);
        draw_ascii(&frame);

        if !watch {
            return Ok(());
        }
        println!();
        std::thread::sleep(std::time::Duration::from_secs(1));
    }
}
