use base::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// Front camera, towards the user.
    User,
    /// Rear camera, away from the user.
    Environment,
}

/// What a caller asks of a camera. Every field is a preference; `None`
/// means any value is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Constraints {
    pub facing: Option<Facing>,
    pub size: Option<Vec2<usize>>,
    pub audio: bool,
}

impl Constraints {
    /// Rear camera at 1280x720, video only.
    pub fn preferred() -> Self {
        Self {
            facing: Some(Facing::Environment),
            size: Some(Vec2::new(1280, 720)),
            audio: false,
        }
    }

    /// Any camera, no resolution preference, video only.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_facing(mut self, facing: Facing) -> Self {
        self.facing = Some(facing);
        self
    }

    pub fn with_size(mut self, size: Vec2<usize>) -> Self {
        self.size = Some(size);
        self
    }
}
