//! # Watchface Rendering
//!
//! This module turns a time of day plus display options into a finished
//! 1-bit frame, in one of two visual modes:
//!
//! - **Polygon face**: a filled triangle connecting the three hand positions,
//!   with graduated dots so the hands stay readable when the triangle
//!   collapses, over a static twelve-mark dial.
//! - **Ring face**: three concentric ring sweeps (one per hand), each drawn
//!   as a pie wedge cut out of an annulus and AND-composited into the final
//!   image, with an optional centre dot while disconnected and optional
//!   whole-image inversion.
//!
//! Both entry points are pure functions of their arguments and always
//! succeed; the only output is the returned [`MonoFrame`].

use crate::config::{DisplayConfig, WatchfaceConfig};
use crate::frame::MonoFrame;
use crate::{geometry, TimeOfDay};
use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Triangle},
};

/// Fixed measurements of the dial, derived from the display configuration.
///
/// The ring face nests three annuli of `ring_width`, separated by `gap`,
/// inside the largest circle that fits the canvas with a `gap` margin. The
/// polygon face keeps its own hand and mark radii, matching the proportions
/// of the 144-wide reference canvas.
#[derive(Clone, Copy, Debug)]
pub struct DialLayout {
    pub width: u32,
    pub height: u32,
    pub centre: Point,
    pub ring_width: i32,
    pub gap: i32,
}

impl DialLayout {
    pub fn new(width: u32, height: u32, ring_width: i32, gap: i32) -> Self {
        Self {
            width,
            height,
            centre: Point::new(width as i32 / 2, height as i32 / 2),
            ring_width,
            gap,
        }
    }

    pub fn from_config(display: &DisplayConfig) -> Self {
        Self::new(display.width, display.height, display.ring_width, display.gap)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Outer radius of the outermost ring.
    pub fn outer_radius(&self) -> i32 {
        self.width.min(self.height) as i32 / 2 - self.gap
    }

    /// Outer radii of the three rings, outermost first.
    pub fn ring_radii(&self) -> [i32; 3] {
        let step = self.ring_width + self.gap;
        let outer = self.outer_radius();
        [outer, outer - step, outer - 2 * step]
    }

    /// Hand length of the polygon face.
    pub fn hand_radius(&self) -> i32 {
        self.width as i32 / 2 - 20
    }

    /// Outer radius of the dial tick marks.
    pub fn mark_radius(&self) -> i32 {
        self.width as i32 / 2 - 10
    }

    /// Length of a dial tick mark.
    pub fn mark_length(&self) -> i32 {
        10
    }

    // Radius for the sweep-mask edge vertex; anything past the outermost
    // ring works, the canvas width always is.
    fn mask_radius(&self) -> i32 {
        self.width as i32
    }
}

/// Draw the twelve dial marks at 30° intervals.
///
/// The mark layer never changes between renders, so hosts cache the result
/// rather than calling this every tick.
pub fn draw_tick_marks<D>(target: &mut D, layout: &DialLayout)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let style = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
    for mark in 0..12 {
        let angle = geometry::hand_angle(mark, 12);
        let outer = geometry::dial_point(layout.centre, layout.mark_radius(), angle);
        let inner = geometry::dial_point(
            layout.centre,
            layout.mark_radius() - layout.mark_length(),
            angle,
        );
        Line::new(outer, inner).into_styled(style).draw(target).ok();
    }
}

/// Draw the hand triangle and its vertex dots for `time`.
///
/// The three vertices share one radius; when two hands coincide the triangle
/// degenerates to a line or point, and the 1/2/3 px dots keep the second,
/// minute and hour positions distinguishable.
pub fn draw_polygon_hands<D>(target: &mut D, time: TimeOfDay, layout: &DialLayout)
where
    D: DrawTarget<Color = BinaryColor>,
{
    let radius = layout.hand_radius();
    let second = geometry::dial_point(
        layout.centre,
        radius,
        geometry::hand_angle(time.second as u32, 60),
    );
    let minute = geometry::dial_point(
        layout.centre,
        radius,
        geometry::hand_angle(time.minute as u32, 60),
    );
    let hour = geometry::dial_point(
        layout.centre,
        radius,
        geometry::hour_angle(time.hour as u32, time.minute as u32),
    );

    Triangle::new(second, minute, hour)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(target)
        .ok();

    for (vertex, dot_radius) in [(second, 1u32), (minute, 2), (hour, 3)] {
        Circle::with_center(vertex, dot_radius * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(target)
            .ok();
    }
}

/// Render the complete polygon face: dial marks plus hands.
pub fn render_polygon_face(time: TimeOfDay, layout: &DialLayout) -> MonoFrame {
    let mut frame = MonoFrame::new(layout.width, layout.height);
    draw_tick_marks(&mut frame, layout);
    draw_polygon_hands(&mut frame, time, layout);
    frame
}

// One ring sweep: filled disc, minus the unelapsed pie mask, minus the
// inner disc. The layer is reset first so it can be reused across hands.
fn draw_ring(layer: &mut MonoFrame, layout: &DialLayout, outer_radius: i32, sweep: f32) {
    layer.clear();

    Circle::with_center(layout.centre, outer_radius as u32 * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(layer)
        .ok();

    let sweep = geometry::normalize_sweep(sweep);
    let mask = geometry::sweep_mask(layout.centre, layout.size(), layout.mask_radius(), sweep);
    layer.fill_polygon(&mask, BinaryColor::Off);

    let inner_radius = outer_radius - layout.ring_width;
    Circle::with_center(layout.centre, inner_radius as u32 * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(layer)
        .ok();
}

/// Render the complete ring face.
///
/// Seconds take the outermost ring and hours the innermost unless
/// `options.seconds_outside` is cleared, which swaps the two. Each ring is
/// drawn into its own layer and AND-composited, so layer order cannot change
/// the result. While disconnected, a filled dot of radius `ring_width` marks
/// the centre; inversion, when enabled, is applied to the whole composite
/// last.
pub fn render_ring_face(
    time: TimeOfDay,
    options: &WatchfaceConfig,
    connected: bool,
    layout: &DialLayout,
) -> MonoFrame {
    let [outer, middle, inner] = layout.ring_radii();
    let (second_radius, hour_radius) = if options.seconds_outside {
        (outer, inner)
    } else {
        (inner, outer)
    };

    let second = geometry::hand_angle(time.second as u32, 60);
    let minute = geometry::hand_angle(time.minute as u32, 60);
    let hour = geometry::hour_angle(time.hour as u32, time.minute as u32);

    let mut composite = MonoFrame::new(layout.width, layout.height);
    let mut layer = MonoFrame::new(layout.width, layout.height);
    for (sweep, radius) in [(second, second_radius), (minute, middle), (hour, hour_radius)] {
        draw_ring(&mut layer, layout, radius, sweep);
        composite.intersect(&layer);
    }

    if !connected {
        Circle::with_center(layout.centre, layout.ring_width as u32 * 2 + 1)
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut composite)
            .ok();
    }

    if options.invert {
        composite.invert();
    }

    composite
}

/// Render a frame to the terminal, for development without hardware.
/// Rows are halved to roughly match character cell aspect.
pub fn draw_ascii(frame: &MonoFrame) {
    for y in (0..frame.height()).step_by(2) {
        let mut row = String::with_capacity(frame.width() as usize);
        for x in 0..frame.width() {
            let inked = frame.is_inked(x, y) || frame.is_inked(x, y + 1);
            row.push(if inked { '█' } else { ' ' });
        }
        println!("{}", row);
    }
}
