use serde::{Deserialize, Serialize};

use crate::constants::{FULL_TURN_DEGREES, LABEL_RADIUS_RATIO};
use crate::menu_catalog::segment_color;
use crate::menu_roulette::segment_angle;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One drawable slice of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSegment {
    pub index: usize,
    pub path: String,
    pub color: &'static str,
    pub label: Point,
    pub label_rotation: f64,
}

/// Angles are in degrees, clockwise, with 0 pointing up.
pub fn polar_to_cartesian(center: Point, radius: f64, angle_degrees: f64) -> Point {
    let radians = (angle_degrees - 90.0).to_radians();
    Point {
        x: center.x + radius * radians.cos(),
        y: center.y + radius * radians.sin(),
    }
}

/// SVG path for a pie wedge from the centre out to the arc between the two angles.
pub fn describe_arc(cx: f64, cy: f64, r: f64, start_angle: f64, end_angle: f64) -> String {
    let center = Point { x: cx, y: cy };
    let start = polar_to_cartesian(center, r, start_angle);
    let end = polar_to_cartesian(center, r, end_angle);
    let large_arc = if end_angle - start_angle > 180.0 { 1 } else { 0 };
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        cx, cy, start.x, start.y, r, r, large_arc, end.x, end.y
    )
}

// A 360 degree arc has identical endpoints and renders as nothing.
fn full_circle_path(cx: f64, cy: f64, r: f64) -> String {
    format!(
        "M {} {} A {} {} 0 1 1 {} {} A {} {} 0 1 1 {} {} Z",
        cx, cy - r, r, r, cx, cy + r, r, r, cx, cy - r
    )
}

pub fn label_position(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Point {
    let mid = (start_angle + end_angle) / 2.0;
    polar_to_cartesian(center, radius * LABEL_RADIUS_RATIO, mid)
}

pub fn wheel_segments(segment_count: usize, center: Point, radius: f64) -> Vec<WheelSegment> {
    if segment_count == 0 {
        return Vec::new();
    }
    let sweep = segment_angle(segment_count);

    (0..segment_count)
        .map(|index| {
            let start = index as f64 * sweep;
            let end = start + sweep;
            let path = if sweep >= FULL_TURN_DEGREES {
                full_circle_path(center.x, center.y, radius)
            } else {
                describe_arc(center.x, center.y, radius, start, end)
            };
            WheelSegment {
                index,
                path,
                color: segment_color(index),
                label: label_position(center, radius, start, end),
                label_rotation: start + sweep / 2.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point { x: 200.0, y: 200.0 };

    fn assert_close(actual: Point, x: f64, y: f64) {
        assert!((actual.x - x).abs() < 1e-9, "x {} != {}", actual.x, x);
        assert!((actual.y - y).abs() < 1e-9, "y {} != {}", actual.y, y);
    }

    #[test]
    fn test_zero_degrees_points_up() {
        assert_close(polar_to_cartesian(CENTER, 100.0, 0.0), 200.0, 100.0);
        assert_close(polar_to_cartesian(CENTER, 100.0, 90.0), 300.0, 200.0);
        assert_close(polar_to_cartesian(CENTER, 100.0, 180.0), 200.0, 300.0);
        assert_close(polar_to_cartesian(CENTER, 100.0, 270.0), 100.0, 200.0);
    }

    #[test]
    fn test_quarter_wedge_path() {
        assert_eq!(
            describe_arc(200.0, 200.0, 200.0, 0.0, 90.0),
            "M 200 200 L 200 0 A 200 200 0 0 1 400 200 Z"
        );
    }

    #[test]
    fn test_large_arc_flag() {
        assert!(describe_arc(200.0, 200.0, 200.0, 0.0, 240.0).contains(" 0 1 1 "));
        assert!(describe_arc(200.0, 200.0, 200.0, 0.0, 180.0).contains(" 0 0 1 "));
    }

    #[test]
    fn test_label_sits_on_mid_angle() {
        assert_close(label_position(CENTER, 200.0, 0.0, 90.0), 200.0 + 132.0 * 45f64.to_radians().sin(), 200.0 - 132.0 * 45f64.to_radians().cos());
        assert_close(label_position(CENTER, 100.0, 90.0, 270.0), 200.0, 266.0);
    }

    #[test]
    fn test_eight_segments() {
        let segments = wheel_segments(8, CENTER, 200.0);
        assert_eq!(segments.len(), 8);
        assert_eq!(segments[0].label_rotation, 22.5);
        assert_eq!(segments[7].label_rotation, 337.5);
        assert_eq!(segments[3].color, "#34D399");
        assert!(segments.iter().all(|s| s.path.starts_with("M 200 200 L ")));
    }

    #[test]
    fn test_single_segment_is_full_circle() {
        let segments = wheel_segments(1, CENTER, 200.0);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].path, "M 200 0 A 200 200 0 1 1 200 400 A 200 200 0 1 1 200 0 Z");
        assert_eq!(segments[0].label_rotation, 180.0);
        assert_close(segments[0].label, 200.0, 332.0);
    }

    #[test]
    fn test_no_segments_for_empty_wheel() {
        assert!(wheel_segments(0, CENTER, 200.0).is_empty());
    }
}
