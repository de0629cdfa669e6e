use rand::Rng;

/// Plain two-component position used by every crate in the workspace.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Uniform random position inside the square `[min, max] x [min, max]`.
    pub fn random_inside<R: Rng>(rng: &mut R, min: f32, max: f32) -> Vector {
        Vector::new(Self::_safe_randf32(rng, min, max), Self::_safe_randf32(rng, min, max))
    }

    fn _safe_randf32<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..max)
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Self {
        Vector::new(x, y)
    }
}
