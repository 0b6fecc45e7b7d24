//! A single bubble field instance: markers, pointer state, tuning, and
//! an explicit run/stop lifecycle.

use crate::{
    config::FieldConfig,
    marker::{Marker, MarkerSet},
    phases,
    pointer::PointerState,
};
use glam::Vec2;
use rand::Rng;

/// One simulator instance bound to one container.
///
/// The field owns its markers and pointer state exclusively; two fields
/// on the same page never share state. Container bounds are measured by
/// the caller and passed to every [`BubbleField::step`], so layout
/// changes are picked up without caching.
///
/// The animation is gated by an explicit flag so a field can be paused
/// and torn down cleanly. [`BubbleField::step`] is a no-op until
/// [`BubbleField::start`] is called.
#[derive(Debug)]
pub struct BubbleField {
    pub markers: MarkerSet,
    pub pointer: PointerState,
    pub cfg: FieldConfig,
    running: bool,
}

impl BubbleField {
    /// Binds a field to an already-initialized marker set. Marker count
    /// and identity are fixed for the lifetime of the instance.
    pub fn new(markers: MarkerSet, cfg: FieldConfig) -> Self {
        Self {
            markers,
            pointer: PointerState::absent(),
            cfg,
            running: false,
        }
    }

    /// Convenience constructor: one marker per entry in `sizes`,
    /// randomly placed and headed within `bounds`.
    pub fn random(sizes: &[Vec2], bounds: Vec2, cfg: FieldConfig, rng: &mut impl Rng) -> Self {
        Self::new(MarkerSet::random_in_bounds(sizes, bounds, &cfg, rng), cfg)
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

    /// Records a pointer position relative to the container's top-left
    /// corner.
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer.move_to(pos);
    }

    /// Resets the pointer to the far-away sentinel so no marker is in
    /// repulsion range.
    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    /// Advances the field by one frame, or does nothing while stopped.
    ///
    /// Motion is per-frame rather than delta-time-scaled: the caller is
    /// expected to invoke this once per display refresh at a roughly
    /// constant interval. `bounds` must be the container size measured
    /// this frame.
    pub fn step(&mut self, bounds: Vec2) {
        if !self.running {
            return;
        }
        phases::drift_phase(&mut self.markers, bounds);
        phases::repulsion_phase(&mut self.markers, &self.pointer, &self.cfg, bounds);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers.markers
    }
}
