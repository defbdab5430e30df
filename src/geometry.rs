//! Time-to-geometry math for the watchface.
//!
//! Angles are `f32` radians in `[0, 2π)`, measured clockwise from 12 o'clock,
//! so a hand position on the dial is `centre + radius * (sin θ, -cos θ)`.
//! Everything here is a pure function; the renderer owns no geometry state
//! between calls.

use embedded_graphics::prelude::*;
use std::f32::consts::TAU;

/// Angle of a hand for a time component, e.g. `hand_angle(45, 60)` for 45
/// seconds. The component is reduced modulo `modulus` first, so hours can be
/// passed as 0–23.
pub fn hand_angle(component: u32, modulus: u32) -> f32 {
    TAU * (component % modulus) as f32 / modulus as f32
}

/// Hour-hand angle, advancing with the minute: 3:15 sits a quarter of the
/// way between the 3 and the 4.
pub fn hour_angle(hour: u32, minute: u32) -> f32 {
    TAU * ((hour % 12) as f32 + minute as f32 / 60.0) / 12.0
}

/// A sweep of exactly zero means the hand just ticked over; it must render as
/// a full turn, never as a zero-width wedge.
pub fn normalize_sweep(angle: f32) -> f32 {
    if angle == 0.0 {
        TAU
    } else {
        angle
    }
}

/// Point on the dial at `radius` from `centre` along `angle`.
pub fn dial_point(centre: Point, radius: i32, angle: f32) -> Point {
    Point::new(
        centre.x + (angle.sin() * radius as f32).round() as i32,
        centre.y - (angle.cos() * radius as f32).round() as i32,
    )
}

/// The two variable vertices of the sweep-clipping polygon, chosen by the
/// quadrant the sweep ends in. Quarter-turn boundaries belong to the lower
/// quadrant, and the mapping covers the whole of (0, 2π].
pub fn sweep_corner_pair(sweep: f32, size: Size) -> [Point; 2] {
    let w = size.width as i32;
    let h = size.height as i32;
    let bottom_right = Point::new(w, h);
    let top_right = Point::new(w, 0);
    let bottom_left = Point::new(0, h);
    let top_left = Point::zero();

    if sweep <= TAU / 4.0 {
        [bottom_right, top_right]
    } else if sweep <= TAU / 2.0 {
        [bottom_right, bottom_right]
    } else if sweep <= TAU * 0.75 {
        [bottom_left, bottom_left]
    } else {
        [top_left, top_left]
    }
}

/// Clipping polygon that covers the *unelapsed* part of the dial, i.e. the
/// region from `sweep` clockwise back around to 12 o'clock. Filling it with
/// background on top of a filled disc leaves the `[0, sweep]` wedge.
///
/// The final vertex sits along the sweep angle at `mask_radius`, which must
/// be larger than any ring so the closing edge back to the centre never cuts
/// through the annulus. Repeated vertices in the corner pair are fine; the
/// polygon filler treats them as degenerate edges.
pub fn sweep_mask(centre: Point, size: Size, mask_radius: i32, sweep: f32) -> [Point; 7] {
    let corners = sweep_corner_pair(sweep, size);
    [
        centre,
        Point::new(centre.x, 0),
        Point::zero(),
        Point::new(0, size.height as i32),
        corners[0],
        corners[1],
        dial_point(centre, mask_radius, sweep),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size::new(144, 168);

    #[test]
    fn hand_angle_stays_in_range() {
        for s in 0..60 {
            let a = hand_angle(s, 60);
            assert!((0.0..TAU).contains(&a), "angle {} out of range", a);
        }
        for h in 0..24 {
            let a = hand_angle(h, 12);
            assert!((0.0..TAU).contains(&a));
        }
    }

    #[test]
    fn hand_angle_is_monotone_within_a_turn() {
        let mut previous = -1.0f32;
        for m in 0..60 {
            let a = hand_angle(m, 60);
            assert!(a > previous, "angle regressed at component {}", m);
            previous = a;
        }
    }

    #[test]
    fn hour_angle_advances_with_minutes() {
        let three = hour_angle(3, 0);
        let three_fifteen = hour_angle(3, 15);
        assert!(three_fifteen > three);
        // 3:15 is (3 + 15/60)/12 of a turn
        assert!((three_fifteen / TAU - 3.25 / 12.0).abs() < 1e-6);
        // wraps at noon/midnight
        assert_eq!(hour_angle(12, 0), 0.0);
        assert_eq!(hour_angle(15, 30), hour_angle(3, 30));
    }

    #[test]
    fn zero_sweep_normalizes_to_full_turn() {
        assert_eq!(normalize_sweep(0.0), TAU);
        assert_eq!(normalize_sweep(1.5), 1.5);
        assert_eq!(normalize_sweep(TAU), TAU);
    }

    #[test]
    fn dial_point_at_midnight_is_top_centre() {
        let centre = Point::new(72, 84);
        // angle 0 and its full-turn normalization land on the same pixel
        assert_eq!(dial_point(centre, 52, 0.0), Point::new(72, 84 - 52));
        assert_eq!(dial_point(centre, 52, TAU), Point::new(72, 84 - 52));
    }

    #[test]
    fn dial_point_cardinal_directions() {
        let centre = Point::new(72, 84);
        assert_eq!(dial_point(centre, 60, TAU / 4.0), Point::new(132, 84));
        assert_eq!(dial_point(centre, 60, TAU / 2.0), Point::new(72, 144));
        assert_eq!(dial_point(centre, 60, TAU * 0.75), Point::new(12, 84));
    }

    #[test]
    fn corner_pair_covers_every_quadrant_without_gaps() {
        let w = CANVAS.width as i32;
        let h = CANVAS.height as i32;
        let quarter = TAU / 4.0;
        let epsilon = 1e-4;

        // boundaries belong to the quadrant below them
        assert_eq!(
            sweep_corner_pair(quarter, CANVAS),
            [Point::new(w, h), Point::new(w, 0)]
        );
        assert_eq!(
            sweep_corner_pair(quarter + epsilon, CANVAS),
            [Point::new(w, h), Point::new(w, h)]
        );
        assert_eq!(
            sweep_corner_pair(2.0 * quarter, CANVAS),
            [Point::new(w, h), Point::new(w, h)]
        );
        assert_eq!(
            sweep_corner_pair(2.0 * quarter + epsilon, CANVAS),
            [Point::new(0, h), Point::new(0, h)]
        );
        assert_eq!(
            sweep_corner_pair(3.0 * quarter, CANVAS),
            [Point::new(0, h), Point::new(0, h)]
        );
        assert_eq!(
            sweep_corner_pair(3.0 * quarter + epsilon, CANVAS),
            [Point::zero(), Point::zero()]
        );
        assert_eq!(
            sweep_corner_pair(TAU, CANVAS),
            [Point::zero(), Point::zero()]
        );
    }

    #[test]
    fn sweep_mask_starts_at_centre_and_ends_on_the_sweep_angle() {
        let centre = Point::new(72, 84);
        let mask = sweep_mask(centre, CANVAS, 144, TAU / 4.0);
        assert_eq!(mask[0], centre);
        assert_eq!(mask[1], Point::new(72, 0));
        // quarter turn points due east
        assert_eq!(mask[6], Point::new(72 + 144, 84));
    }
}
