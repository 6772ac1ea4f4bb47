use serde::{Deserialize, Serialize};

/// Wheel diameter in CSS pixels for a viewport of the given width.
pub fn wheel_size_for_viewport(viewport_width: f64) -> f64 {
    if viewport_width < 360.0 {
        220.0
    } else if viewport_width < 640.0 {
        (viewport_width - 80.0).min(260.0)
    } else if viewport_width < 768.0 {
        320.0
    } else {
        400.0
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WheelDimensions {
    pub size: f64,
    pub border_width: f64,
    pub pointer_half_width: f64,
    pub pointer_height: f64,
    pub label_font_size: f64,
    pub hub_diameter: f64,
    pub hub_font_size: f64,
}

impl WheelDimensions {
    pub fn for_size(size: f64) -> Self {
        let compact = size < 320.0;
        let medium = size < 400.0;
        let pick = |small: f64, mid: f64, large: f64| {
            if compact {
                small
            } else if medium {
                mid
            } else {
                large
            }
        };

        Self {
            size,
            border_width: if compact { 5.0 } else { 7.0 },
            pointer_half_width: if compact { 10.0 } else { 13.0 },
            pointer_height: if compact { 20.0 } else { 26.0 },
            label_font_size: pick(9.0, 11.0, 13.0),
            hub_diameter: pick(42.0, 54.0, 66.0),
            hub_font_size: pick(20.0, 26.0, 32.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.size / 2.0
    }

    pub fn outer_size(&self) -> f64 {
        self.size + self.border_width * 2.0
    }

    /// Offset of the pointer above the ring, so its tip overlaps the rim.
    pub fn pointer_top(&self) -> f64 {
        -(self.border_width + 6.0)
    }
}
