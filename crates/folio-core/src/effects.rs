//! Fire-and-forget decorative side effects.
//!
//! The navigation core only triggers these. Failures are cosmetic, so the
//! app logs and drops every error instead of letting it block a turn.

use core::fmt::Debug;

pub trait Effects {
    type Error: Debug;

    fn play_turn_sound(&mut self) -> Result<(), Self::Error>;

    /// Dust burst over the bounding box of `page`.
    fn spawn_particles(&mut self, page: u16) -> Result<(), Self::Error>;

    fn spawn_celebration(&mut self) -> Result<(), Self::Error>;
}

/// Effects sink for hosts without decoration.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoEffects;

impl NoEffects {
    pub const fn new() -> Self {
        Self
    }
}

impl Effects for NoEffects {
    type Error = core::convert::Infallible;

    fn play_turn_sound(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn spawn_particles(&mut self, _page: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn spawn_celebration(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
