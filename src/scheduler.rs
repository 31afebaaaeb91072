//! Frame scheduling and timing utilities.
//!
//! [`StripState::tick`] is the single-strip due-check-and-dispatch step.
//! [`FrameScheduler`] wraps it into a portable render loop body without
//! async/await or platform-specific timers: the caller is responsible for
//! sleeping between ticks.

use embassy_time::{Duration, Instant};
use rand_core::RngCore;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::effect::{EffectId, Fx};
use crate::intent_processor::IntentProcessor;
use crate::pixels::Pixels;
use crate::random::FxRandom;
use crate::strip::StripState;

/// Due-times further ahead than this are treated as stale (ms)
///
/// Protects against the wrapping millisecond clock: a due-time that appears
/// to lie far in the future was really scheduled before a wrap.
pub const STALE_DUE_MS: u32 = 10_000_000;

/// Sleep period reported while no effect is running
pub const IDLE_DURATION: Duration = Duration::from_millis(100);

/// Wrapping millisecond timestamp of an instant
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms(now: Instant) -> u32 {
    now.as_millis() as u32
}

/// A frame is due at `now` when the due-time passed or looks stale
#[inline]
pub const fn is_due(now: u32, due_time: u32) -> bool {
    now >= due_time || due_time.wrapping_sub(now) > STALE_DUE_MS
}

impl<const MAX_BYTES: usize> StripState<MAX_BYTES> {
    /// Render a frame if one is due
    ///
    /// Clears the frame and cycle flags, then renders the selected effect
    /// when its due-time has come. Returns `true` when a frame was rendered;
    /// only then may the buffer be handed to the output. An id outside the
    /// catalog disables the strip.
    pub fn tick<R: RngCore>(&mut self, now: Instant, rng: &mut R) -> bool {
        self.frame = false;
        self.cycle = false;

        if self.effect == 0 {
            return false;
        }
        let Some(effect) = EffectId::from_raw(self.effect) else {
            #[cfg(feature = "esp32-log")]
            println!("[StripState.tick] unknown effect {}, disabling", self.effect);
            self.effect = 0;
            return false;
        };

        let now = now_ms(now);
        if !is_due(now, self.due_time) {
            return false;
        }

        let mut fx = Fx::new(
            Pixels::new(&mut self.leds, self.channels),
            &self.settings,
            &mut self.counters,
            FxRandom::new(rng),
        );
        let delay = effect.render(&mut fx);
        let cycle = fx.cycle;

        self.due_time = now.wrapping_add(delay);
        self.counters.call = self.counters.call.wrapping_add(1);
        self.frame = true;
        self.cycle = cycle;
        true
    }

    /// Time left until the next frame, zero when one is due
    pub fn time_until_due(&self, now: Instant) -> Duration {
        let now = now_ms(now);
        if is_due(now, self.due_time) {
            Duration::from_millis(0)
        } else {
            Duration::from_millis(u64::from(self.due_time.wrapping_sub(now)))
        }
    }
}

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// A frame was rendered and written to the output
    pub rendered: bool,
    /// The deadline for the next tick.
    pub next_deadline: Instant,
    /// How long to wait until the next tick (zero if a frame is already due).
    pub sleep_duration: Duration,
}

/// Portable render loop for one strip.
///
/// This scheduler:
/// - Applies pending intents to the strip
/// - Ticks the strip and writes rendered frames to the output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(strip, driver, rng, processor);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<
    'a,
    O: OutputDriver,
    R: RngCore,
    const MAX_BYTES: usize,
    const INTENT_CHANNEL_SIZE: usize,
> {
    output: O,
    rng: R,
    strip: StripState<MAX_BYTES>,
    intents: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
}

impl<'a, O: OutputDriver, R: RngCore, const MAX_BYTES: usize, const INTENT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, R, MAX_BYTES, INTENT_CHANNEL_SIZE>
{
    pub const fn new(
        strip: StripState<MAX_BYTES>,
        driver: O,
        rng: R,
        intents: IntentProcessor<'a, INTENT_CHANNEL_SIZE>,
    ) -> Self {
        Self {
            output: driver,
            rng,
            strip,
            intents,
        }
    }

    /// Process one tick and return timing information.
    ///
    /// This method:
    /// 1. Applies all pending intents
    /// 2. Renders a frame if the running effect is due
    /// 3. Writes the buffer to the output driver when a frame was rendered
    /// 4. Returns the deadline for the next tick
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.intents.process_pending(&mut self.strip, now);

        let rendered = self.strip.tick(now, &mut self.rng);
        if rendered {
            self.output
                .write(self.strip.buffer(), self.strip.channels());
        }

        let sleep_duration = if self.strip.effect() == 0 {
            IDLE_DURATION
        } else {
            self.strip.time_until_due(now)
        };

        FrameResult {
            rendered,
            next_deadline: now + sleep_duration,
            sleep_duration,
        }
    }

    /// Get a reference to the strip.
    pub const fn strip(&self) -> &StripState<MAX_BYTES> {
        &self.strip
    }

    /// Get a mutable reference to the strip.
    pub const fn strip_mut(&mut self) -> &mut StripState<MAX_BYTES> {
        &mut self.strip
    }

    /// Get a mutable reference to the output driver.
    pub const fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
