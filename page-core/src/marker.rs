use crate::config::FieldConfig;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One decorative bubble tracked by the simulation.
///
/// `pos` is the top-left offset inside the container, in pixels. `size`
/// is fixed at creation; `speed` is the scalar magnitude the velocity is
/// reset to whenever a repulsion redirects the marker.
#[derive(Debug, Clone)]
pub struct Marker {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Marker {
    /// Half the larger rendered dimension; only used for
    /// pointer-proximity tests, not as a collision shape.
    pub fn radius(&self) -> f32 {
        self.size.max_element() / 2.0
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

#[derive(Debug)]
pub struct MarkerSet {
    pub markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn from_markers(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    /// Creates one marker per entry in `sizes`, uniformly placed inside
    /// `bounds` with a uniformly random heading and a speed drawn from
    /// the configured range.
    ///
    /// Spans collapse to zero when the container is smaller than a
    /// marker, pinning that axis at the origin.
    pub fn random_in_bounds(
        sizes: &[Vec2],
        bounds: Vec2,
        cfg: &FieldConfig,
        rng: &mut impl Rng,
    ) -> Self {
        let markers = sizes
            .iter()
            .map(|&size| {
                let span = (bounds - size).max(Vec2::ZERO);
                let pos = Vec2::new(
                    rng.random_range(0.0..=span.x),
                    rng.random_range(0.0..=span.y),
                );
                let angle = rng.random_range(0.0..TAU);
                let speed = if cfg.max_speed > cfg.min_speed {
                    rng.random_range(cfg.min_speed..cfg.max_speed)
                } else {
                    cfg.min_speed
                };
                Marker {
                    pos,
                    vel: Vec2::from_angle(angle) * speed,
                    size,
                    speed,
                }
            })
            .collect();

        Self { markers }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}
