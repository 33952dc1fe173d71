//! Output seam between the effect state machine and whatever draws it.

use crate::constants::*;
use glam::Vec2;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Synapse,
    Node,
    Pulse,
}

impl EntityKind {
    pub fn class_name(self) -> &'static str {
        match self {
            EntityKind::Synapse => SYNAPSE_CLASS,
            EntityKind::Node => NODE_CLASS,
            EntityKind::Pulse => PULSE_CLASS,
        }
    }

    pub fn keyframes(self) -> &'static str {
        match self {
            EntityKind::Synapse => SYNAPSE_KEYFRAMES,
            EntityKind::Node => NODE_KEYFRAMES,
            EntityKind::Pulse => PULSE_KEYFRAMES,
        }
    }
}

/// Everything a surface needs to materialize one entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Visual {
    pub kind: EntityKind,
    pub position: Vec2,
    /// Explicit box size; `None` leaves sizing to the stylesheet.
    pub size: Option<Vec2>,
    pub rotation_deg: Option<f32>,
    pub animation: Duration,
}

impl Visual {
    /// CSS `animation` shorthand, e.g. `enhancedNodeGlow 3s ease-out forwards`.
    pub fn animation_css(&self) -> String {
        format!(
            "{} {}s ease-out forwards",
            self.kind.keyframes(),
            self.animation.as_secs_f32()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CursorState {
    Hover,
    Click,
}

impl CursorState {
    pub fn class_name(self) -> &'static str {
        match self {
            CursorState::Hover => "hover",
            CursorState::Click => "click",
        }
    }
}

pub trait Surface {
    fn insert(&mut self, id: EntityId, visual: &Visual);
    fn move_to(&mut self, id: EntityId, position: Vec2);
    /// Detach an entity. Returns `false` when it is already gone; calling
    /// this twice for the same id must be harmless.
    fn remove(&mut self, id: EntityId) -> bool;
    fn place_cursor(&mut self, position: Vec2);
    fn set_cursor_state(&mut self, state: CursorState, on: bool);
}
