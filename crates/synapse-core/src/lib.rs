pub mod config;
pub mod constants;
pub mod counter;
pub mod cursor;
pub mod effect;
pub mod geometry;
pub mod scheduler;
pub mod scroll;
pub mod surface;
pub mod target;
pub mod throttle;

pub use config::{ConfigError, EffectConfig};
pub use constants::*;
pub use counter::{CounterAnimation, CounterFrame};
pub use cursor::CursorTracker;
pub use effect::{Burst, SpawnedSynapse, SynapseEffect};
pub use geometry::*;
pub use scheduler::Scheduler;
pub use surface::{CursorState, EntityId, EntityKind, Surface, Visual};
pub use target::{is_interactive, TargetElement};
pub use throttle::RateLimiter;
