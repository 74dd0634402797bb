//! Player Intent
//!
//! Per-frame snapshot of what the player wants to do, supplied by the
//! input-capture collaborator. The simulation never reads devices directly;
//! it only consumes this struct.

/// Held movement keys (WASD-style boolean axes).
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    /// Combined axis values: (right, forward), each in -1..=1.
    #[inline]
    pub fn axes(&self) -> (f32, f32) {
        (
            (self.right as i32 - self.left as i32) as f32,
            (self.forward as i32 - self.backward as i32) as f32,
        )
    }

    /// Whether any movement key is held.
    #[inline]
    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// Complete movement/aim intent for one tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerIntent {
    /// Held movement keys.
    pub keys: MovementKeys,
    /// Camera yaw in radians (0 faces -Z). Drives movement and aim.
    pub look_yaw: f32,
    /// Camera pitch in radians (positive looks up). Drives aim only.
    pub look_pitch: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_combination() {
        let keys = MovementKeys {
            forward: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(keys.axes(), (1.0, 1.0));
        assert!(keys.any());
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let keys = MovementKeys {
            forward: true,
            backward: true,
            left: true,
            right: true,
        };
        assert_eq!(keys.axes(), (0.0, 0.0));
        // Still counts as intent; the controller treats it as a no-op move
        assert!(keys.any());
    }

    #[test]
    fn test_default_is_idle() {
        let intent = PlayerIntent::default();
        assert!(!intent.keys.any());
        assert_eq!(intent.look_yaw, 0.0);
    }
}
