use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

const OVERSHOOT_TENSION: f32 = 2.0;

/// Easing curve applied to a dot's resize fraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolator {
    #[default]
    Linear,
    Accelerate,
    Decelerate,
    Bounce,
    Overshoot,
}

impl Interpolator {
    pub const ALL: [Interpolator; 5] = [
        Interpolator::Linear,
        Interpolator::Accelerate,
        Interpolator::Decelerate,
        Interpolator::Bounce,
        Interpolator::Overshoot,
    ];

    /// Resolve the numeric selector used by host attribute sets.
    pub fn from_index(index: i32) -> Result<Self, ConfigError> {
        match index {
            0 => Ok(Interpolator::Linear),
            1 => Ok(Interpolator::Accelerate),
            2 => Ok(Interpolator::Decelerate),
            3 => Ok(Interpolator::Bounce),
            4 => Ok(Interpolator::Overshoot),
            other => Err(ConfigError::UnknownInterpolator(other)),
        }
    }

    pub fn index(self) -> i32 {
        match self {
            Interpolator::Linear => 0,
            Interpolator::Accelerate => 1,
            Interpolator::Decelerate => 2,
            Interpolator::Bounce => 3,
            Interpolator::Overshoot => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Interpolator::Linear => "linear",
            Interpolator::Accelerate => "accelerate",
            Interpolator::Decelerate => "decelerate",
            Interpolator::Bounce => "bounce",
            Interpolator::Overshoot => "overshoot",
        }
    }

    /// Apply the curve to a fraction in `0.0..=1.0`.
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Interpolator::Linear => t,
            Interpolator::Accelerate => t * t,
            Interpolator::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Interpolator::Bounce => bounce(t),
            Interpolator::Overshoot => {
                let t = t - 1.0;
                t * t * ((OVERSHOOT_TENSION + 1.0) * t + OVERSHOOT_TENSION) + 1.0
            }
        }
    }
}

fn bounce(t: f32) -> f32 {
    fn parabola(t: f32) -> f32 {
        t * t * 8.0
    }

    let t = t * 1.1226;
    if t < 0.3535 {
        parabola(t)
    } else if t < 0.7408 {
        parabola(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        parabola(t - 0.8526) + 0.9
    } else {
        parabola(t - 1.0435) + 0.95
    }
}

impl fmt::Display for Interpolator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolator {
    type Err = ConfigError;

    /// Accepts either a curve name or its numeric selector.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<i32>() {
            return Self::from_index(index);
        }

        Self::ALL
            .into_iter()
            .find(|interpolator| interpolator.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownInterpolatorName(s.to_string()))
    }
}
