//! Tunable parameters for [`SynapseEffect`](crate::SynapseEffect).
//!
//! Defaults mirror the constants in [`crate::constants`]. The web front-end
//! may override a few of them from `data-*` attributes on the container, so
//! every config goes through [`EffectConfig::validate`] before use.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("smoothing factor must be in (0, 1], got {0}")]
    Smoothing(f32),
    #[error("synapse length range is invalid: min {min}, max {max}")]
    LengthRange { min: f32, max: f32 },
    #[error("burst size range is invalid: min {min}, max {max}")]
    BurstRange { min: usize, max: usize },
    #[error("{name} must be longer than its animation ({lifetime:?} <= {animation:?})")]
    LifetimeTooShort {
        name: &'static str,
        lifetime: Duration,
        animation: Duration,
    },
    #[error("pulse travel time must be non-zero")]
    ZeroPulseTravel,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectConfig {
    pub smoothing: f32,
    pub idle_timeout: Duration,
    pub emit_interval: Duration,
    pub burst_stagger: Duration,
    pub burst_min: usize,
    pub burst_max: usize,
    pub min_length: f32,
    pub max_length: f32,
    pub thickness: f32,
    pub synapse_animation: Duration,
    pub synapse_lifetime: Duration,
    pub node_animation: Duration,
    pub node_lifetime: Duration,
    pub pulse_delay: Duration,
    pub pulse_travel: Duration,
    pub pulse_fade: Duration,
    pub pulse_linger: Duration,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            smoothing: CURSOR_SMOOTHING,
            idle_timeout: IDLE_TIMEOUT,
            emit_interval: EMIT_INTERVAL,
            burst_stagger: BURST_STAGGER,
            burst_min: BURST_MIN,
            burst_max: BURST_MAX,
            min_length: SYNAPSE_MIN_LENGTH,
            max_length: SYNAPSE_MAX_LENGTH,
            thickness: SYNAPSE_THICKNESS,
            synapse_animation: SYNAPSE_ANIMATION,
            synapse_lifetime: SYNAPSE_LIFETIME,
            node_animation: NODE_ANIMATION,
            node_lifetime: NODE_LIFETIME,
            pulse_delay: PULSE_DELAY,
            pulse_travel: PULSE_TRAVEL,
            pulse_fade: PULSE_FADE_ANIMATION,
            pulse_linger: PULSE_LINGER,
        }
    }
}

impl EffectConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.smoothing > 0.0 && self.smoothing <= 1.0) {
            return Err(ConfigError::Smoothing(self.smoothing));
        }
        if !(self.min_length > 0.0 && self.min_length <= self.max_length) {
            return Err(ConfigError::LengthRange {
                min: self.min_length,
                max: self.max_length,
            });
        }
        if self.burst_min == 0 || self.burst_min > self.burst_max {
            return Err(ConfigError::BurstRange {
                min: self.burst_min,
                max: self.burst_max,
            });
        }
        if self.synapse_lifetime <= self.synapse_animation {
            return Err(ConfigError::LifetimeTooShort {
                name: "synapse",
                lifetime: self.synapse_lifetime,
                animation: self.synapse_animation,
            });
        }
        if self.node_lifetime <= self.node_animation {
            return Err(ConfigError::LifetimeTooShort {
                name: "node",
                lifetime: self.node_lifetime,
                animation: self.node_animation,
            });
        }
        if self.pulse_travel.is_zero() {
            return Err(ConfigError::ZeroPulseTravel);
        }
        Ok(())
    }

    /// Upper bound on how long a pulse stays attached after it is created.
    pub fn pulse_lifetime(&self) -> Duration {
        self.pulse_travel + self.pulse_linger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EffectConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_smoothing() {
        let cfg = EffectConfig {
            smoothing: 1.5,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::Smoothing(1.5)));

        let cfg = EffectConfig {
            smoothing: 0.0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_length_range() {
        let cfg = EffectConfig {
            min_length: 200.0,
            max_length: 100.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::LengthRange { .. })
        ));
    }

    #[test]
    fn rejects_lifetime_shorter_than_animation() {
        let cfg = EffectConfig {
            node_lifetime: Duration::from_millis(1000),
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::LifetimeTooShort { name: "node", .. })
        ));
    }
}
