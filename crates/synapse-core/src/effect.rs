//! The synapse trail effect: a smoothed cursor plus short-lived strands,
//! glow nodes and travelling pulses spawned behind pointer movement.
//!
//! [`SynapseEffect`] is the single owner of all effect state. Input handlers
//! call the `pointer_*` methods, and the render loop calls [`SynapseEffect::tick`]
//! once per frame. Delayed work (staggered spawns, removals, the idle timeout)
//! goes through a [`Scheduler`] on the caller's clock, so tests drive the
//! whole effect with a virtual clock and no browser.

use crate::config::{ConfigError, EffectConfig};
use crate::cursor::CursorTracker;
use crate::geometry::{node_anchor, pulse_anchor, pulse_position, travel_progress, SynapseGeometry};
use crate::scheduler::Scheduler;
use crate::surface::{CursorState, EntityId, EntityKind, Surface, Visual};
use crate::throttle::RateLimiter;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
enum Task {
    Idle { generation: u64 },
    Spawn { origin: Vec2 },
    Pulse { origin: Vec2, end: Vec2 },
    Remove(EntityId),
}

#[derive(Clone, Copy, Debug)]
struct ActivePulse {
    id: EntityId,
    origin: Vec2,
    end: Vec2,
    started: Duration,
}

/// A burst accepted by the rate limiter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Burst {
    pub at: Duration,
    pub count: usize,
}

/// Ids created for one strand: the segment followed by its two end nodes.
#[derive(Clone, Debug)]
pub struct SpawnedSynapse {
    pub geometry: SynapseGeometry,
    pub ids: SmallVec<[EntityId; 3]>,
}

pub struct SynapseEffect<S: Surface, R: Rng> {
    config: EffectConfig,
    cursor: CursorTracker,
    limiter: RateLimiter,
    timers: Scheduler<Task>,
    pulses: Vec<ActivePulse>,
    surface: S,
    rng: R,
    next_id: u64,
    running: bool,
}

impl<S: Surface, R: Rng> SynapseEffect<S, R> {
    pub fn new(config: EffectConfig, surface: S, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            cursor: CursorTracker::new(config.smoothing),
            limiter: RateLimiter::new(config.emit_interval),
            timers: Scheduler::new(),
            pulses: Vec::new(),
            surface,
            rng,
            next_id: 0,
            running: false,
            config,
        })
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle a pointer move. Returns the burst it triggered, if any.
    pub fn pointer_move(&mut self, now: Duration, pos: Vec2, over_interactive: bool) -> Option<Burst> {
        let generation = self.cursor.pointer_moved(pos);
        self.timers
            .schedule(now, self.config.idle_timeout, Task::Idle { generation });

        if !self.can_emit(now, over_interactive) {
            return None;
        }
        self.limiter.mark(now);

        let count = self
            .rng
            .gen_range(self.config.burst_min..=self.config.burst_max);
        for i in 0..count {
            self.timers.schedule(
                now,
                self.config.burst_stagger * i as u32,
                Task::Spawn { origin: pos },
            );
        }
        log::debug!(
            "[synapse] burst of {} at ({:.0},{:.0})",
            count,
            pos.x,
            pos.y
        );
        Some(Burst { at: now, count })
    }

    /// Burst gate: throttle elapsed, target not interactive, pointer moving.
    /// A move event sets `moving` before reaching the gate, so only the
    /// throttle and the target can reject it there.
    pub fn can_emit(&self, now: Duration, over_interactive: bool) -> bool {
        self.limiter.ready(now) && !over_interactive && self.cursor.moving
    }

    pub fn pointer_over(&mut self, interactive: bool) {
        self.cursor.hovering = interactive;
        self.surface.set_cursor_state(CursorState::Hover, interactive);
    }

    pub fn pointer_down(&mut self) {
        self.cursor.pressed = true;
        self.surface.set_cursor_state(CursorState::Click, true);
    }

    pub fn pointer_up(&mut self) {
        self.cursor.pressed = false;
        self.surface.set_cursor_state(CursorState::Click, false);
    }

    /// Run every scheduled task due at or before `now`.
    pub fn advance(&mut self, now: Duration) {
        while let Some((due, task)) = self.timers.pop_due(now) {
            self.run(due, task);
        }
    }

    /// Per-frame update: cursor smoothing and pulse travel. No-op when stopped.
    pub fn frame(&mut self, now: Duration) {
        if !self.running {
            return;
        }
        let pos = self.cursor.step();
        self.surface.place_cursor(pos);

        let Self {
            pulses,
            surface,
            timers,
            config,
            ..
        } = self;
        pulses.retain(|p| {
            let t = travel_progress(now.saturating_sub(p.started), config.pulse_travel);
            surface.move_to(p.id, pulse_anchor(pulse_position(p.origin, p.end, t)));
            if t >= 1.0 {
                timers.schedule(now, config.pulse_linger, Task::Remove(p.id));
                false
            } else {
                true
            }
        });
    }

    pub fn tick(&mut self, now: Duration) {
        self.advance(now);
        self.frame(now);
    }

    /// Materialize one strand at `origin` as of time `at`, with its end nodes,
    /// a delayed pulse and its own removal.
    pub fn spawn_synapse(&mut self, at: Duration, origin: Vec2) -> SpawnedSynapse {
        let geometry = SynapseGeometry::random(
            origin,
            self.config.min_length,
            self.config.max_length,
            &mut self.rng,
        );
        let end = geometry.endpoint();

        let id = self.next_entity();
        self.surface.insert(
            id,
            &Visual {
                kind: EntityKind::Synapse,
                position: geometry.box_origin(),
                size: Some(Vec2::new(geometry.box_width(), self.config.thickness)),
                rotation_deg: Some(geometry.angle_deg),
                animation: self.config.synapse_animation,
            },
        );

        let mut ids = SmallVec::new();
        ids.push(id);
        ids.push(self.spawn_node(at, origin));
        ids.push(self.spawn_node(at, end));

        self.timers
            .schedule(at, self.config.pulse_delay, Task::Pulse { origin, end });
        self.timers
            .schedule(at, self.config.synapse_lifetime, Task::Remove(id));

        SpawnedSynapse { geometry, ids }
    }

    fn spawn_node(&mut self, at: Duration, point: Vec2) -> EntityId {
        let id = self.next_entity();
        self.surface.insert(
            id,
            &Visual {
                kind: EntityKind::Node,
                position: node_anchor(point),
                size: None,
                rotation_deg: None,
                animation: self.config.node_animation,
            },
        );
        self.timers
            .schedule(at, self.config.node_lifetime, Task::Remove(id));
        id
    }

    fn spawn_pulse(&mut self, at: Duration, origin: Vec2, end: Vec2) -> EntityId {
        let id = self.next_entity();
        self.surface.insert(
            id,
            &Visual {
                kind: EntityKind::Pulse,
                position: pulse_anchor(origin),
                size: None,
                rotation_deg: None,
                animation: self.config.pulse_fade,
            },
        );
        self.pulses.push(ActivePulse {
            id,
            origin,
            end,
            started: at,
        });
        // Removal must not depend on frames running; the frame loop may
        // schedule an earlier-or-equal removal of its own.
        self.timers.schedule(
            at,
            self.config.pulse_travel + self.config.pulse_linger,
            Task::Remove(id),
        );
        id
    }

    fn run(&mut self, due: Duration, task: Task) {
        match task {
            Task::Idle { generation } => {
                self.cursor.idle_elapsed(generation);
            }
            Task::Spawn { origin } => {
                self.spawn_synapse(due, origin);
            }
            Task::Pulse { origin, end } => {
                self.spawn_pulse(due, origin, end);
            }
            Task::Remove(id) => {
                self.pulses.retain(|p| p.id != id);
                if !self.surface.remove(id) {
                    log::trace!("[synapse] {} already detached", id);
                }
            }
        }
    }

    fn next_entity(&mut self) -> EntityId {
        self.next_id += 1;
        EntityId(self.next_id)
    }

    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    pub fn cursor(&self) -> &CursorTracker {
        &self.cursor
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn live_pulses(&self) -> usize {
        self.pulses.len()
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    pub fn last_burst(&self) -> Option<Duration> {
        self.limiter.last()
    }
}
