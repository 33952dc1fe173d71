use crate::constants::{NODE_HALF_SIZE, PULSE_HALF_SIZE};
use glam::Vec2;
use rand::Rng;
use std::time::Duration;

/// One trail strand: a random direction and length from the pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynapseGeometry {
    pub origin: Vec2,
    pub angle_deg: f32,
    pub length: f32,
}

impl SynapseGeometry {
    pub fn random<R: Rng>(origin: Vec2, min_len: f32, max_len: f32, rng: &mut R) -> Self {
        Self {
            origin,
            angle_deg: rng.gen_range(0.0..360.0),
            length: rng.gen_range(min_len..=max_len),
        }
    }

    pub fn endpoint(&self) -> Vec2 {
        let rad = self.angle_deg.to_radians();
        self.origin + Vec2::new(rad.cos(), rad.sin()) * self.length
    }

    /// Top-left corner of the box spanned by origin and endpoint.
    pub fn box_origin(&self) -> Vec2 {
        self.origin.min(self.endpoint())
    }

    /// Box width is the horizontal span; the element's height is its fixed
    /// thickness and the rotation lays it along the strand.
    pub fn box_width(&self) -> f32 {
        (self.endpoint().x - self.origin.x).abs()
    }
}

/// Top-left position that centers a node glyph on `point`.
#[inline]
pub fn node_anchor(point: Vec2) -> Vec2 {
    point - Vec2::splat(NODE_HALF_SIZE)
}

/// Top-left position that centers a pulse glyph on `point`.
#[inline]
pub fn pulse_anchor(point: Vec2) -> Vec2 {
    point - Vec2::splat(PULSE_HALF_SIZE)
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Completion fraction of a travel that started `elapsed` ago, capped at 1.
#[inline]
pub fn travel_progress(elapsed: Duration, travel: Duration) -> f32 {
    if travel.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / travel.as_secs_f32()).min(1.0)
}

/// Pulse position at completion fraction `t`: fast start, slow arrival.
#[inline]
pub fn pulse_position(origin: Vec2, end: Vec2, t: f32) -> Vec2 {
    origin + (end - origin) * ease_out_cubic(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn endpoint_follows_angle() {
        let g = SynapseGeometry {
            origin: Vec2::new(100.0, 100.0),
            angle_deg: 90.0,
            length: 60.0,
        };
        let end = g.endpoint();
        assert!((end.x - 100.0).abs() < 1e-3);
        assert!((end.y - 160.0).abs() < 1e-3);
    }

    #[test]
    fn box_spans_origin_and_endpoint() {
        let g = SynapseGeometry {
            origin: Vec2::new(50.0, 50.0),
            angle_deg: 180.0,
            length: 100.0,
        };
        let tl = g.box_origin();
        assert!((tl.x + 50.0).abs() < 1e-3);
        assert!((tl.y - 50.0).abs() < 1e-3);
        assert!((g.box_width() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn random_geometry_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let g = SynapseGeometry::random(Vec2::ZERO, 60.0, 180.0, &mut rng);
            assert!((0.0..360.0).contains(&g.angle_deg));
            assert!((60.0..=180.0).contains(&g.length));
        }
    }

    #[test]
    fn ease_out_cubic_endpoints_and_shape() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        // front-loaded: half the time covers most of the distance
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn travel_progress_caps_at_one() {
        let travel = Duration::from_millis(1200);
        assert_eq!(travel_progress(Duration::ZERO, travel), 0.0);
        assert!((travel_progress(Duration::from_millis(600), travel) - 0.5).abs() < 1e-6);
        assert_eq!(travel_progress(Duration::from_millis(5000), travel), 1.0);
    }

    #[test]
    fn anchors_center_glyphs() {
        let p = Vec2::new(10.0, 20.0);
        assert_eq!(node_anchor(p), Vec2::new(7.75, 17.75));
        assert_eq!(pulse_anchor(p), Vec2::new(6.25, 16.25));
    }
}
