use crate::constants::{
    DISPLAY_TILT_CENTER, DISPLAY_TILT_GAIN, POINTER_PITCH_RANGE, POINTER_YAW_RANGE,
};

/// Rotation targets derived from the pointer position over the whole window.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerTargets {
    /// Normalized pointer position in [-1, 1] (left/top = -1).
    pub mouse_x: f32,
    pub mouse_y: f32,
    /// Yaw target (radians) fed by horizontal movement.
    pub rotation_x: f32,
    /// Pitch target (radians) fed by vertical movement.
    pub rotation_y: f32,
}

impl PointerTargets {
    pub fn from_client(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> Self {
        if viewport_w <= 0.0 || viewport_h <= 0.0 {
            return Self::default();
        }
        let mouse_x = (client_x / viewport_w) * 2.0 - 1.0;
        let mouse_y = (client_y / viewport_h) * 2.0 - 1.0;
        Self {
            mouse_x,
            mouse_y,
            rotation_x: mouse_x * POINTER_YAW_RANGE,
            rotation_y: mouse_y * POINTER_PITCH_RANGE,
        }
    }
}

/// Fraction of the page scrolled, 0 when the page does not scroll.
#[inline]
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_h: f64) -> f64 {
    let range = scroll_height - viewport_h;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// How far a section has travelled through the viewport: 0 when its top edge
/// sits at the bottom of the viewport, 1 when it reaches the top.
#[inline]
pub fn section_progress(section_top: f64, viewport_h: f64) -> f64 {
    if viewport_h <= 0.0 {
        return 0.0;
    }
    1.0 - section_top / viewport_h
}

/// Tilt applied to the display phone while its section is on screen.
pub fn display_tilt(section_top: f64, viewport_h: f64) -> Option<f32> {
    let p = section_progress(section_top, viewport_h);
    (p > 0.0 && p < 2.0).then(|| (p as f32 - DISPLAY_TILT_CENTER) * DISPLAY_TILT_GAIN)
}
