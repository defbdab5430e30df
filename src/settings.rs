//! Options channel messages.
//!
//! The configuration page delivers settings as a small JSON key/value
//! message, e.g. `{"invert": 1, "order": 0}`. Only the two recognized keys
//! are read; unknown keys and unusable values are ignored so schema growth
//! never breaks an already-installed watchface.
//!
//! `order` selects the ring nesting: `0` puts seconds outermost, `1` puts
//! them innermost.

use crate::config::WatchfaceConfig;
use thiserror::Error;

pub const KEY_INVERT: &str = "invert";
pub const KEY_ORDER: &str = "order";

/// Errors for messages that cannot be read at all. Callers drop these and
/// carry on; a bad message never changes state.
#[derive(Error, Debug)]
pub enum MessageError {
    /// Message is not valid JSON
    #[error("malformed settings message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Message is valid JSON but not a key/value object
    #[error("settings message is not a key/value object")]
    NotAnObject,
}

/// The option changes carried by one settings message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub invert: Option<bool>,
    pub seconds_outside: Option<bool>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.invert.is_none() && self.seconds_outside.is_none()
    }

    /// Fold the update into the current options. Returns true when any
    /// option actually changed, so the host knows to persist and redraw.
    pub fn apply(&self, options: &mut WatchfaceConfig) -> bool {
        let mut changed = false;
        if let Some(invert) = self.invert {
            changed |= options.invert != invert;
            options.invert = invert;
        }
        if let Some(seconds_outside) = self.seconds_outside {
            changed |= options.seconds_outside != seconds_outside;
            options.seconds_outside = seconds_outside;
        }
        changed
    }
}

/// Parse one inbound settings message.
pub fn parse_message(raw: &str) -> Result<SettingsUpdate, MessageError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let object = value.as_object().ok_or(MessageError::NotAnObject)?;

    let mut update = SettingsUpdate::default();
    for (key, value) in object {
        match (key.as_str(), flag_value(value)) {
            (KEY_INVERT, Some(on)) => update.invert = Some(on),
            // order 1 means seconds on the inside
            (KEY_ORDER, Some(inside)) => update.seconds_outside = Some(!inside),
            (KEY_INVERT | KEY_ORDER, None) => {
                log::warn!("unusable value for settings key {:?}: {}", key, value);
            }
            _ => log::debug!("ignoring unknown settings key {:?}", key),
        }
    }
    Ok(update)
}

// The companion app sends 0/1 integers; booleans are tolerated.
fn flag_value(value: &serde_json::Value) -> Option<bool> {
    value.as_i64().map(|n| n != 0).or_else(|| value.as_bool())
}
