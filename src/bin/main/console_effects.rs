use folio_core::effects::Effects;
use log::info;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ConsoleEffectsError {
    /// Hosts refuse audio until the reader has interacted with the page.
    AudioLocked,
}

/// Logs decorative effects instead of drawing them.
#[derive(Debug, Default)]
pub struct ConsoleEffects {
    audio_unlocked: bool,
    bursts: u32,
}

impl ConsoleEffects {
    pub const fn new() -> Self {
        Self {
            audio_unlocked: false,
            bursts: 0,
        }
    }

    pub fn unlock_audio(&mut self) {
        self.audio_unlocked = true;
    }

    pub fn bursts(&self) -> u32 {
        self.bursts
    }
}

impl Effects for ConsoleEffects {
    type Error = ConsoleEffectsError;

    fn play_turn_sound(&mut self) -> Result<(), Self::Error> {
        if !self.audio_unlocked {
            return Err(ConsoleEffectsError::AudioLocked);
        }
        info!("fx: page-turn sound");
        Ok(())
    }

    fn spawn_particles(&mut self, page: u16) -> Result<(), Self::Error> {
        self.bursts = self.bursts.saturating_add(1);
        info!("fx: dust burst over page {}", page.saturating_add(1));
        Ok(())
    }

    fn spawn_celebration(&mut self) -> Result<(), Self::Error> {
        info!("fx: end-of-book celebration");
        Ok(())
    }
}
