use glam::Vec2;

/// Smoothed cursor marker state.
///
/// `target` follows the raw pointer; `rendered` chases it by a fixed fraction
/// of the remaining distance each frame (first-order exponential filter).
#[derive(Clone, Copy, Debug)]
pub struct CursorTracker {
    pub target: Vec2,
    pub rendered: Vec2,
    pub moving: bool,
    pub hovering: bool,
    pub pressed: bool,
    smoothing: f32,
    idle_generation: u64,
}

impl CursorTracker {
    pub fn new(smoothing: f32) -> Self {
        Self {
            target: Vec2::ZERO,
            rendered: Vec2::ZERO,
            moving: false,
            hovering: false,
            pressed: false,
            smoothing,
            idle_generation: 0,
        }
    }

    /// Record a pointer move. Returns the generation the caller should attach
    /// to its idle-timeout task; only the latest generation may clear `moving`.
    pub fn pointer_moved(&mut self, pos: Vec2) -> u64 {
        self.target = pos;
        self.moving = true;
        self.idle_generation += 1;
        self.idle_generation
    }

    /// Idle timeout fired. Stale generations are ignored.
    pub fn idle_elapsed(&mut self, generation: u64) -> bool {
        if generation == self.idle_generation {
            self.moving = false;
            true
        } else {
            false
        }
    }

    pub fn step(&mut self) -> Vec2 {
        self.rendered += (self.target - self.rendered) * self.smoothing;
        self.rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_idle_timeout_keeps_moving() {
        let mut c = CursorTracker::new(0.15);
        let first = c.pointer_moved(Vec2::new(10.0, 10.0));
        let second = c.pointer_moved(Vec2::new(12.0, 10.0));
        assert!(!c.idle_elapsed(first));
        assert!(c.moving);
        assert!(c.idle_elapsed(second));
        assert!(!c.moving);
    }

    #[test]
    fn step_moves_fraction_of_remaining_distance() {
        let mut c = CursorTracker::new(0.15);
        c.pointer_moved(Vec2::new(100.0, -40.0));
        let p = c.step();
        assert!((p.x - 15.0).abs() < 1e-4);
        assert!((p.y + 6.0).abs() < 1e-4);
    }
}
