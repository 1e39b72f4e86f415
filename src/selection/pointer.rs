//! Pointer position tracking in normalized device coordinates.

use bevy::prelude::*;
use bevy::window::CursorMoved;

/// Last pointer position, NDC in [-1, 1] with y pointing up.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub ndc: Vec2,
}

/// Map a window-space cursor position (origin top-left, y down) to NDC.
pub fn normalize_pointer(position: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (position.x / window_size.x) * 2.0 - 1.0,
        -(position.y / window_size.y) * 2.0 + 1.0,
    ))
}

pub fn track_pointer(
    mut moved: MessageReader<CursorMoved>,
    windows: Query<&Window>,
    mut pointer: ResMut<PointerState>,
) {
    for event in moved.read() {
        let Ok(window) = windows.get(event.window) else {
            continue;
        };
        if let Some(ndc) = normalize_pointer(event.position, window.size()) {
            pointer.ndc = ndc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_normalize_corners_and_center() {
        let size = Vec2::new(800.0, 600.0);
        let top_left = normalize_pointer(Vec2::ZERO, size).unwrap();
        assert!((top_left - Vec2::new(-1.0, 1.0)).length() < EPSILON);

        let bottom_right = normalize_pointer(size, size).unwrap();
        assert!((bottom_right - Vec2::new(1.0, -1.0)).length() < EPSILON);

        let center = normalize_pointer(size * 0.5, size).unwrap();
        assert!(center.length() < EPSILON);
    }

    #[test]
    fn test_normalize_inverts_vertical_axis() {
        let size = Vec2::new(100.0, 100.0);
        let upper = normalize_pointer(Vec2::new(50.0, 25.0), size).unwrap();
        assert!((upper.y - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_zero_sized_window() {
        assert!(normalize_pointer(Vec2::new(10.0, 10.0), Vec2::ZERO).is_none());
    }
}
