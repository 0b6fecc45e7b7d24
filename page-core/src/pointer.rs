use glam::Vec2;

/// Pointer position relative to a container's top-left corner, or
/// [`PointerState::SENTINEL`] while the pointer is not over the
/// container.
///
/// The sentinel sits far enough outside any realistic container that no
/// marker can ever be within repulsion range of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
}

impl PointerState {
    pub const SENTINEL: Vec2 = Vec2::new(-1000.0, -1000.0);

    pub fn absent() -> Self {
        Self {
            pos: Self::SENTINEL,
        }
    }

    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    pub fn leave(&mut self) {
        self.pos = Self::SENTINEL;
    }

    pub fn is_absent(&self) -> bool {
        self.pos == Self::SENTINEL
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::absent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let p = PointerState::default();
        assert!(p.is_absent());
        assert_eq!(p.pos, PointerState::SENTINEL);
    }

    #[test]
    fn move_and_leave_round_trip() {
        let mut p = PointerState::absent();

        p.move_to(Vec2::new(40.0, 12.5));
        assert!(!p.is_absent());
        assert_eq!(p.pos, Vec2::new(40.0, 12.5));

        p.leave();
        assert!(p.is_absent());
    }
}
