//! # End-to-End Watchface Scenarios
//!
//! These tests drive the full stack the way the host services would:
//! startup from the persistent store, settings messages over the options
//! channel, connectivity changes and once-per-second tick renders.

use ring_clock_lib::config::Config;
use ring_clock_lib::geometry;
use ring_clock_lib::renderer::DialLayout;
use ring_clock_lib::watchface::{FaceStyle, Watchface};
use ring_clock_lib::TimeOfDay;
use std::f32::consts::TAU;
use tempfile::NamedTempFile;

/// Probe point in the middle of a ring band at the given fraction of a turn.
fn band_probe(layout: &DialLayout, outer_radius: i32, turns: f32) -> (u32, u32) {
    let p = geometry::dial_point(
        layout.centre,
        outer_radius - layout.ring_width / 2,
        turns * TAU,
    );
    (p.x as u32, p.y as u32)
}

/// The canonical afternoon scenario: 03:15:45, seconds outside, no
/// inversion, connected. Each ring must show its elapsed fraction, the
/// centre must stay clear, and nothing may be inverted.
#[test]
fn canonical_afternoon_render() {
    let file = NamedTempFile::new().unwrap();
    let config = Config::default();
    let layout = DialLayout::from_config(&config.display);
    let watchface = Watchface::with_config_path(config, FaceStyle::Ring, file.path());

    let frame = watchface.on_tick(TimeOfDay::new(3, 15, 45));
    let [outer, middle, inner] = layout.ring_radii();

    // sweep fractions: 45/60, 15/60, (3 + 15/60)/12 of a turn
    assert!((geometry::hand_angle(45, 60) / TAU - 45.0 / 60.0).abs() < 1e-6);
    assert!((geometry::hand_angle(15, 60) / TAU - 15.0 / 60.0).abs() < 1e-6);
    assert!((geometry::hour_angle(3, 15) / TAU - (3.0 + 15.0 / 60.0) / 12.0).abs() < 1e-6);

    // each ring inked just short of its sweep, clear just past it
    let (x, y) = band_probe(&layout, outer, 0.70);
    assert!(frame.is_inked(x, y));
    let (x, y) = band_probe(&layout, outer, 0.80);
    assert!(!frame.is_inked(x, y));
    let (x, y) = band_probe(&layout, middle, 0.20);
    assert!(frame.is_inked(x, y));
    let (x, y) = band_probe(&layout, middle, 0.30);
    assert!(!frame.is_inked(x, y));
    let (x, y) = band_probe(&layout, inner, 0.20);
    assert!(frame.is_inked(x, y));
    let (x, y) = band_probe(&layout, inner, 0.30);
    assert!(!frame.is_inked(x, y));

    // connected: no centre dot; not inverted: the corner stays white
    assert!(!frame.is_inked(layout.centre.x as u32, layout.centre.y as u32));
    assert!(!frame.is_inked(0, 0));
}

/// An options message changes the very next render and survives a restart
/// through the persistent store.
#[test]
fn options_message_redraws_and_persists() {
    let file = NamedTempFile::new().unwrap();
    let config = Config::default();
    let mut watchface = Watchface::with_config_path(config, FaceStyle::Ring, file.path());
    let time = TimeOfDay::new(3, 15, 45);

    let before = watchface.on_tick(time);
    assert!(watchface.handle_message(r#"{"invert": 1}"#));
    let after = watchface.on_tick(time);
    assert_ne!(before, after);
    // inverted background: the corner is now inked
    assert!(after.is_inked(0, 0));

    // a fresh startup from the same store sees the persisted option
    let restarted = Config::load_from_path(file.path());
    assert!(restarted.watchface.invert);
}

/// Startup honors options already in the store: with seconds moved inside,
/// the outermost ring tracks the hour hand.
#[test]
fn startup_reads_persisted_ring_order() {
    let file = NamedTempFile::new().unwrap();
    let mut stored = Config::default();
    stored.watchface.seconds_outside = false;
    stored.save_to_path(file.path()).unwrap();

    let config = Config::load_from_path(file.path());
    let layout = DialLayout::from_config(&config.display);
    let watchface = Watchface::with_config_path(config, FaceStyle::Ring, file.path());

    // 03:15:45: hour sweep ≈ 0.271 turn, second sweep 0.75 turn
    let frame = watchface.on_tick(TimeOfDay::new(3, 15, 45));
    let [outer, _, inner] = layout.ring_radii();

    // outer ring now follows the hour: clear at half past
    let (x, y) = band_probe(&layout, outer, 0.50);
    assert!(!frame.is_inked(x, y));
    // inner ring follows the seconds: inked at half past
    let (x, y) = band_probe(&layout, inner, 0.50);
    assert!(frame.is_inked(x, y));
}

/// Losing the connection adds the centre indicator dot; regaining it
/// removes the dot again.
#[test]
fn connectivity_toggles_centre_indicator() {
    let file = NamedTempFile::new().unwrap();
    let config = Config::default();
    let layout = DialLayout::from_config(&config.display);
    let mut watchface = Watchface::with_config_path(config, FaceStyle::Ring, file.path());
    let time = TimeOfDay::new(11, 26, 53);
    let centre = (layout.centre.x as u32, layout.centre.y as u32);

    watchface.set_connected(false);
    let lost = watchface.on_tick(time);
    assert!(lost.is_inked(centre.0, centre.1));

    watchface.set_connected(true);
    let regained = watchface.on_tick(time);
    assert!(!regained.is_inked(centre.0, centre.1));
}
