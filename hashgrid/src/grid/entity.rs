use super::*;
use std::fmt::Debug;

/// Anything the grid can index.
///
/// The grid only ever reads these three properties. Whatever else the entity carries
/// is the caller's business.
pub trait Entity {
    type Id: Copy + Eq + Hash + Debug;

    fn id(&self) -> Self::Id;

    fn position(&self) -> Vector;

    /// Half-extent of the entity's bounding square. Must be finite and non-negative.
    fn size(&self) -> f32;
}

/// Minimal entity: an id, a position and a bounding radius.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Body {
    pub id: u32,
    pub position: Vector,
    pub size: f32,
}

impl Body {
    pub fn new(id: u32, x: f32, y: f32, size: f32) -> Self {
        Self {
            id,
            position: Vector::new(x, y),
            size,
        }
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vector::new(x, y);
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.position.translate(dx, dy);
    }
}

impl Entity for Body {
    type Id = u32;

    #[inline(always)]
    fn id(&self) -> u32 {
        self.id
    }

    #[inline(always)]
    fn position(&self) -> Vector {
        self.position
    }

    #[inline(always)]
    fn size(&self) -> f32 {
        self.size
    }
}
