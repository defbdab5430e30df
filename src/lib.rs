//! # Ring Clock Core Library
//!
//! This library renders an analog watchface for small monochrome displays.
//! It's designed for the constraints of 1-bit-per-pixel hardware (the
//! reference canvas is a 144×168 smartwatch screen) while staying fully
//! testable on desktop systems.
//!
//! ## Design Philosophy
//!
//! ### Pure rendering
//! - **No shared scratch state**: every render call computes its geometry on
//!   the stack and returns a fresh [`frame::MonoFrame`]; two renders with the
//!   same inputs produce identical frames
//! - **External collaborators**: the wall clock, the display compositor, the
//!   options channel and the connectivity observer all live outside this
//!   crate and call into the seams in [`watchface`]
//!
//! ### 1-bit compositing
//! The ring face draws each hand into its own single-bit layer and combines
//! the layers with a byte-wise AND (white is the identity), reproducing the
//! layered look of overlapping translucent rings on a display that only has
//! black and white. A color port would swap that one operation for alpha
//! blending.
//!
//! ### Temporal model
//! The host invokes the renderer once per second (or on an options change)
//! with the current local time. Nothing is cached across calls except the
//! static tick-mark background of the polygon face.
//!
//! ## Core Types
//!
//! - [`TimeOfDay`]: an hour/minute/second triple sampled from the host clock
//! - [`config::WatchfaceConfig`]: the two persisted display options
//! - [`frame::MonoFrame`]: the packed 1-bit surface every face renders into

// Module declarations
pub mod config;
pub mod frame;
pub mod geometry;
pub mod renderer;
pub mod settings;
pub mod watchface;

/// A wall-clock time of day as supplied by the host's clock source.
///
/// Fields are plain integers in their natural ranges (`hour` 0–23,
/// `minute`/`second` 0–59); upstream services are trusted to deliver valid
/// local time, so no validation happens here.
///
/// # Example
/// ```
/// use ring_clock_lib::TimeOfDay;
///
/// let t = TimeOfDay::new(15, 45, 12);
/// assert_eq!(t.hour, 15);
/// assert_eq!(t.minute, 45);
/// assert_eq!(t.second, 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeOfDay {
    /// Hour of day (0–23)
    pub hour: u8,
    /// Minute of hour (0–59)
    pub minute: u8,
    /// Second of minute (0–59)
    pub second: u8,
}

impl TimeOfDay {
    pub fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

impl From<chrono::NaiveTime> for TimeOfDay {
    fn from(t: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        Self {
            hour: t.hour() as u8,
            minute: t.minute() as u8,
            second: t.second() as u8,
        }
    }
}
