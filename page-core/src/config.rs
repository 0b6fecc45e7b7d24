/// Tuning parameters for a bubble field.
///
/// The defaults reproduce the page's decorative motion: slow drift with a
/// 24 px pointer-proximity buffer and a double velocity application in
/// the frame a repulsion triggers.
#[derive(Clone, Copy, Debug)]
pub struct FieldConfig {
    /// Buffer added to a marker's radius for pointer-proximity tests.
    pub repulsion_margin: f32,
    /// Lower bound of the per-marker speed drawn at creation.
    pub min_speed: f32,
    /// Upper bound (exclusive) of the per-marker speed drawn at creation.
    pub max_speed: f32,
    /// How many velocity steps to apply in the frame a repulsion fires.
    /// Visual tuning constant; the extra distance is never accumulated.
    pub impulse_steps: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            repulsion_margin: 24.0,
            min_speed: 0.5,
            max_speed: 1.2,
            impulse_steps: 2.0,
        }
    }
}
