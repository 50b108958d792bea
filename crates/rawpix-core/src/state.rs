//! Accumulated rotation and flip state.

use serde::{Deserialize, Serialize};

/// Degrees added or removed by one rotate action.
pub const ROTATION_STEP: i32 = 90;

/// The rotation and flips a viewer applies on top of the original grid.
///
/// The state is only ever read by the renderer; rendering always starts from
/// the original decode, so the same state always produces the same grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformState {
    /// Rotation in degrees, a multiple of 90.
    pub angle: i32,
    /// Mirror top to bottom after rotating.
    pub flip_vertical: bool,
    /// Mirror left to right after the vertical flip.
    pub flip_horizontal: bool,
}

impl TransformState {
    /// Create a new TransformState with no rotation and no flips
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotate one quarter turn towards negative angles.
    pub fn rotate_left(&mut self) {
        self.rotate_by(-ROTATION_STEP);
    }

    /// Rotate one quarter turn towards positive angles.
    pub fn rotate_right(&mut self) {
        self.rotate_by(ROTATION_STEP);
    }

    // Folded into [0, 360) so repeated clicks can never overflow. The value
    // modulo 360 is unchanged, which is all the renderer looks at.
    fn rotate_by(&mut self, delta: i32) {
        self.angle = (self.angle.rem_euclid(360) + delta).rem_euclid(360);
    }

    pub fn toggle_flip_vertical(&mut self) {
        self.flip_vertical = !self.flip_vertical;
    }

    pub fn toggle_flip_horizontal(&mut self) {
        self.flip_horizontal = !self.flip_horizontal;
    }

    /// Back to no rotation and no flips, as when a new source is loaded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if rendering with this state returns the original grid
    pub fn is_identity(&self) -> bool {
        self.angle.rem_euclid(360) == 0 && !self.flip_vertical && !self.flip_horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let state = TransformState::new();
        assert_eq!(state.angle, 0);
        assert!(!state.flip_vertical);
        assert!(!state.flip_horizontal);
        assert!(state.is_identity());
    }

    #[test]
    fn test_rotate_right_accumulates() {
        let mut state = TransformState::new();
        state.rotate_right();
        assert_eq!(state.angle, 90);
        state.rotate_right();
        assert_eq!(state.angle, 180);
        state.rotate_right();
        state.rotate_right();
        assert_eq!(state.angle, 0);
        assert!(state.is_identity());
    }

    #[test]
    fn test_rotate_left_wraps() {
        let mut state = TransformState::new();
        state.rotate_left();
        assert_eq!(state.angle, 270);
        state.rotate_right();
        assert_eq!(state.angle, 0);
    }

    #[test]
    fn test_rotate_from_unfolded_angle() {
        let mut state = TransformState {
            angle: -450,
            ..Default::default()
        };
        state.rotate_right();
        // -450 is 270 modulo 360
        assert_eq!(state.angle, 0);
    }

    #[test]
    fn test_many_rotations_never_overflow() {
        let mut state = TransformState {
            angle: i32::MAX - (i32::MAX % 90),
            ..Default::default()
        };
        for _ in 0..1000 {
            state.rotate_right();
        }
        assert!((0..360).contains(&state.angle));
    }

    #[test]
    fn test_toggles() {
        let mut state = TransformState::new();
        state.toggle_flip_vertical();
        assert!(state.flip_vertical);
        assert!(!state.is_identity());
        state.toggle_flip_vertical();
        assert!(!state.flip_vertical);

        state.toggle_flip_horizontal();
        assert!(state.flip_horizontal);
    }

    #[test]
    fn test_reset() {
        let mut state = TransformState::new();
        state.rotate_left();
        state.toggle_flip_horizontal();
        state.toggle_flip_vertical();
        state.reset();
        assert_eq!(state, TransformState::default());
    }

    #[test]
    fn test_serde_camel_case() {
        let state = TransformState {
            angle: 90,
            flip_vertical: true,
            flip_horizontal: false,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"angle":90,"flipVertical":true,"flipHorizontal":false}"#
        );

        let parsed: TransformState = serde_json::from_str(r#"{"angle":180}"#).unwrap();
        assert_eq!(parsed.angle, 180);
        assert!(!parsed.flip_vertical);
    }
}
