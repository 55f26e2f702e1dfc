use serde::{Deserialize, Serialize};

/// Twist animation preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Angular speed of a twist, in radians per second.
    pub twist_speed: f32,
    /// Frame rate assumed when the host does not report a frame time.
    pub assumed_fps: f32,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_speed: std::f32::consts::TAU,
            assumed_fps: 60.0,
        }
    }
}
impl AnimationPreferences {
    /// Returns an error if the speed or frame rate would keep a twist from
    /// ever finishing.
    pub fn validate(&self) -> eyre::Result<()> {
        eyre::ensure!(
            self.twist_speed.is_finite() && self.twist_speed > 0.0,
            "twist speed must be positive, got {}",
            self.twist_speed,
        );
        eyre::ensure!(
            self.assumed_fps.is_finite() && self.assumed_fps > 0.0,
            "assumed FPS must be positive, got {}",
            self.assumed_fps,
        );
        Ok(())
    }

    /// Returns the frame time implied by `assumed_fps`, in seconds.
    pub fn assumed_frame_secs(&self) -> f32 {
        self.assumed_fps.recip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_speed_and_fps() {
        assert!(AnimationPreferences::default().validate().is_ok());
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let speed = AnimationPreferences {
                twist_speed: bad,
                ..Default::default()
            };
            assert!(speed.validate().is_err(), "twist speed {bad} accepted");
            let fps = AnimationPreferences {
                assumed_fps: bad,
                ..Default::default()
            };
            assert!(fps.validate().is_err(), "assumed FPS {bad} accepted");
        }
    }
}
