//! Intent processing module
//!
//! Carries configuration changes from the accessory task into the render
//! loop and applies them to the strip between frames.

use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{Channel, Receiver, Sender};
use crate::color::Color;
use crate::strip::{PALETTE_SIZE, StripState};

/// Intent to change the strip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripIntent {
    /// Select an effect by raw id, 0 disables
    Effect(u8),
    /// Speed percentage (0-100)
    Speed(u8),
    Reverse(bool),
    /// Block size class (0-3)
    Size(u8),
    /// Fade rate (0-7)
    FadeRate(u8),
    Gamma(bool),
    /// Replace the first `count` palette colors
    Colors([Color; PALETTE_SIZE], u8),
}

/// Type alias for intent sender
pub type IntentSender<'a, const SIZE: usize> = Sender<'a, StripIntent, SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const SIZE: usize> = Receiver<'a, StripIntent, SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const SIZE: usize> = Channel<StripIntent, SIZE>;

/// Applies queued intents to a strip
pub struct IntentProcessor<'a, const SIZE: usize> {
    intents: IntentReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> IntentProcessor<'a, SIZE> {
    /// Create a new intent processor
    pub const fn new(intents: IntentReceiver<'a, SIZE>) -> Self {
        Self { intents }
    }

    /// Apply all pending intents from the channel (non-blocking)
    ///
    /// Returns the number of applied intents.
    pub fn process_pending<const MAX_BYTES: usize>(
        &mut self,
        strip: &mut StripState<MAX_BYTES>,
        now: Instant,
    ) -> usize {
        let mut applied = 0;
        while let Ok(intent) = self.intents.try_receive() {
            Self::apply(strip, intent, now);
            applied += 1;
        }
        applied
    }

    /// Apply a single intent
    pub fn apply<const MAX_BYTES: usize>(
        strip: &mut StripState<MAX_BYTES>,
        intent: StripIntent,
        now: Instant,
    ) {
        #[cfg(feature = "esp32-log")]
        println!("[IntentProcessor.apply] {:?}", intent);

        match intent {
            StripIntent::Effect(effect) => strip.set_effect(effect),
            StripIntent::Speed(percent) => strip.set_speed(percent, now),
            StripIntent::Reverse(reverse) => strip.set_reverse(reverse),
            StripIntent::Size(size) => strip.set_size(size),
            StripIntent::FadeRate(rate) => strip.set_fade_rate(rate),
            StripIntent::Gamma(gamma) => strip.set_gamma(gamma),
            StripIntent::Colors(colors, count) => {
                let count = usize::from(count).min(PALETTE_SIZE);
                strip.set_colors(&colors[..count]);
            }
        }
    }
}
