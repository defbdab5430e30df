//! Host-facing watchface state.
//!
//! The external services — the once-per-second timer, the options channel
//! and the connectivity observer — all call into one [`Watchface`] value,
//! which owns the persisted options, the connectivity flag and the cached
//! tick-mark background. Rendering itself stays a pure function; a
//! concurrent host must serialize calls into this type.

use crate::config::{Config, WatchfaceConfig};
use crate::frame::MonoFrame;
use crate::renderer::{self, DialLayout};
use crate::settings;
use crate::TimeOfDay;
use std::path::PathBuf;

/// Which of the two faces to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceStyle {
    Ring,
    Polygon,
}

/// One watchface instance wired to its persistent store.
pub struct Watchface {
    config: Config,
    config_path: PathBuf,
    layout: DialLayout,
    face: FaceStyle,
    connected: bool,
    // invariant across renders, drawn once at startup
    tick_background: MonoFrame,
}

impl Watchface {
    /// Create a watchface persisting to the default configuration file.
    pub fn new(config: Config, face: FaceStyle) -> Self {
        Self::with_config_path(config, face, crate::config::CONFIG_FILE)
    }

    /// Create a watchface persisting to an explicit path.
    pub fn with_config_path(
        config: Config,
        face: FaceStyle,
        config_path: impl Into<PathBuf>,
    ) -> Self {
        let layout = DialLayout::from_config(&config.display);
        let mut tick_background = MonoFrame::new(layout.width, layout.height);
        renderer::draw_tick_marks(&mut tick_background, &layout);
        Self {
            config,
            config_path: config_path.into(),
            layout,
            face,
            connected: true,
            tick_background,
        }
    }

    pub fn face(&self) -> FaceStyle {
        self.face
    }

    pub fn options(&self) -> &WatchfaceConfig {
        &self.config.watchface
    }

    pub fn connected(&self) -> bool {
        self.connected
    }

    /// Connectivity observer seam; the host reports every state change and
    /// the initial state at startup.
    pub fn set_connected(&mut self, connected: bool) {
        if self.connected != connected {
            log::info!("connectivity changed: connected={}", connected);
        }
        self.connected = connected;
    }

    /// Once-per-second render entry.
    pub fn on_tick(&self, time: TimeOfDay) -> MonoFrame {
        match self.face {
            FaceStyle::Ring => renderer::render_ring_face(
                time,
                &self.config.watchface,
                self.connected,
                &self.layout,
            ),
            FaceStyle::Polygon => {
                let mut frame = self.tick_background.clone();
                renderer::draw_polygon_hands(&mut frame, time, &self.layout);
                frame
            }
        }
    }

    /// Inbound settings message. Applies the recognized keys, persists on a
    /// real change, ignores everything else. Returns true when the face
    /// needs a redraw.
    pub fn handle_message(&mut self, raw: &str) -> bool {
        let update = match settings::parse_message(raw) {
            Ok(update) => update,
            Err(e) => {
                log::warn!("dropping settings message: {}", e);
                return false;
            }
        };
        if !update.apply(&mut self.config.watchface) {
            return false;
        }
        if let Err(e) = self.config.save_to_path(&self.config_path) {
            log::error!("failed to persist options: {}", e);
        }
        true
    }
}
