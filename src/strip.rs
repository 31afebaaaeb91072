//! Strip state: the pixel buffer plus everything the effects read and
//! advance between frames.

use core::fmt;

use embassy_time::Instant;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Color;
use crate::effect::EffectId;
use crate::pixels::Channels;

/// Default user-facing speed (percent)
pub const DEFAULT_SPEED_PERCENT: u8 = 70;

/// Delay applied after a speed change before the next frame
pub const SPEED_CHANGE_DELAY_MS: u32 = 100;

/// Number of palette slots
pub const PALETTE_SIZE: usize = 3;

/// Convert a 0-100 speed percentage into the internal delay base (ms)
pub const fn speed_from_percent(percent: u8) -> u16 {
    let percent = if percent > 100 { 100 } else { percent };
    (100 - percent as u16) * 30 + 10
}

/// Errors raised while creating a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// The strip has no LEDs
    NoLeds,
    /// Only 3 (RGB) and 4 (RGBW) channels are supported
    UnsupportedChannels(u8),
    /// The buffer does not fit into the strip storage
    CapacityExceeded { required: usize, capacity: usize },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLeds => write!(f, "strip has no LEDs"),
            Self::UnsupportedChannels(channels) => {
                write!(f, "unsupported channel count: {channels}")
            }
            Self::CapacityExceeded { required, capacity } => write!(
                f,
                "pixel buffer needs {required} bytes, storage holds {capacity}"
            ),
        }
    }
}

/// Animation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FxOptions {
    /// Run animations from the far end of the strip
    pub reverse: bool,
    /// Fade speed of trailing effects (0-7, 0 = legacy fade to black)
    pub fade_rate: u8,
    /// Gamma correction request, applied by the output driver
    pub gamma: bool,
    /// Block size class (0-3), block size is `1 << size`
    pub size: u8,
}

const OPTION_REVERSE: u8 = 0b1000_0000;
const OPTION_FADE_SHIFT: u8 = 4;
const OPTION_GAMMA: u8 = 0b0000_1000;
const OPTION_SIZE_SHIFT: u8 = 1;

impl FxOptions {
    /// Decode the packed options byte
    ///
    /// Bit 7 reverse, bits 4-6 fade rate, bit 3 gamma, bits 1-2 size.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            reverse: bits & OPTION_REVERSE != 0,
            fade_rate: (bits >> OPTION_FADE_SHIFT) & 7,
            gamma: bits & OPTION_GAMMA != 0,
            size: (bits >> OPTION_SIZE_SHIFT) & 3,
        }
    }

    /// Encode into the packed options byte
    pub const fn bits(self) -> u8 {
        let mut bits = ((self.fade_rate & 7) << OPTION_FADE_SHIFT)
            | ((self.size & 3) << OPTION_SIZE_SHIFT);
        if self.reverse {
            bits |= OPTION_REVERSE;
        }
        if self.gamma {
            bits |= OPTION_GAMMA;
        }
        bits
    }

    /// Block size `1 << size`
    pub const fn block_size(self) -> u16 {
        1 << (self.size & 3)
    }
}

/// Configuration of a strip at creation time
#[derive(Debug, Clone)]
pub struct StripConfig {
    pub led_count: u16,
    pub channels: u8,
    /// Raw effect id, 0 disables animation
    pub effect: u8,
    /// Speed percentage (0-100)
    pub speed: u8,
    pub options: FxOptions,
    pub palette: [Color; PALETTE_SIZE],
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            led_count: 0,
            channels: Channels::Rgb as u8,
            effect: 0,
            speed: DEFAULT_SPEED_PERCENT,
            options: FxOptions::default(),
            palette: [Color::BLACK; PALETTE_SIZE],
        }
    }
}

/// Per-effect counters and scratch registers
///
/// The meaning of every field is up to the running effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    /// Phase counter
    pub step: u32,
    /// Number of rendered frames
    pub call: u32,
    /// Scratch byte (wheel index, scan direction)
    pub aux_byte: u8,
    /// Scratch word (random position)
    pub aux_word: u16,
}

impl Counters {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Everything an effect reads: timing base, options and palette
#[derive(Debug, Clone, Copy)]
pub(crate) struct FxSettings {
    pub(crate) led_count: u16,
    pub(crate) speed: u16,
    pub(crate) options: FxOptions,
    pub(crate) palette: [Color; PALETTE_SIZE],
}

/// One animated LED strip
///
/// `MAX_BYTES` bounds `led_count * channels`.
#[derive(Debug, Clone)]
pub struct StripState<const MAX_BYTES: usize> {
    pub(crate) effect: u8,
    pub(crate) last_effect: u8,
    pub(crate) channels: Channels,
    pub(crate) settings: FxSettings,
    pub(crate) counters: Counters,
    pub(crate) due_time: u32,
    pub(crate) frame: bool,
    pub(crate) cycle: bool,
    pub(crate) leds: Vec<u8, MAX_BYTES>,
}

impl<const MAX_BYTES: usize> StripState<MAX_BYTES> {
    /// Create a strip with default settings and a black buffer
    pub fn new(led_count: u16, channels: u8) -> Result<Self, StripError> {
        Self::with_config(&StripConfig {
            led_count,
            channels,
            ..StripConfig::default()
        })
    }

    pub fn with_config(config: &StripConfig) -> Result<Self, StripError> {
        let channels =
            Channels::try_from(config.channels).map_err(StripError::UnsupportedChannels)?;
        if config.led_count == 0 {
            return Err(StripError::NoLeds);
        }

        let required = usize::from(config.led_count) * channels.count();
        let mut leds: Vec<u8, MAX_BYTES> = Vec::new();
        if leds.resize(required, 0).is_err() {
            #[cfg(feature = "esp32-log")]
            println!(
                "[StripState.new] {} LEDs need {} bytes, capacity is {}",
                config.led_count, required, MAX_BYTES
            );
            return Err(StripError::CapacityExceeded {
                required,
                capacity: MAX_BYTES,
            });
        }

        Ok(Self {
            effect: config.effect,
            last_effect: 0,
            channels,
            settings: FxSettings {
                led_count: config.led_count,
                speed: speed_from_percent(config.speed),
                options: FxOptions::from_bits(config.options.bits()),
                palette: config.palette,
            },
            counters: Counters::default(),
            due_time: 0,
            frame: false,
            cycle: false,
            leds,
        })
    }

    pub const fn led_count(&self) -> u16 {
        self.settings.led_count
    }

    pub const fn channels(&self) -> Channels {
        self.channels
    }

    /// Raw bytes for the output driver, R, G, B, [W] per pixel
    pub fn buffer(&self) -> &[u8] {
        &self.leds
    }

    /// Packed colors of all pixels
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        let channels = self.channels.count();
        self.leds.chunks_exact(channels).map(|pixel| {
            let w = pixel.get(3).copied().unwrap_or(0);
            Color::with_white(pixel[0], pixel[1], pixel[2], w)
        })
    }

    /// Current raw effect id (0 = disabled)
    pub const fn effect(&self) -> u8 {
        self.effect
    }

    /// Current effect, if the raw id names one
    pub fn effect_id(&self) -> Option<EffectId> {
        EffectId::from_raw(self.effect)
    }

    /// Effect id active before the last change
    pub const fn last_effect(&self) -> u8 {
        self.last_effect
    }

    /// Internal delay base in milliseconds
    pub const fn speed(&self) -> u16 {
        self.settings.speed
    }

    pub const fn options(&self) -> FxOptions {
        self.settings.options
    }

    pub const fn palette(&self) -> [Color; PALETTE_SIZE] {
        self.settings.palette
    }

    pub const fn counters(&self) -> Counters {
        self.counters
    }

    /// Timestamp (ms, wrapping) of the next scheduled frame
    pub const fn due_time(&self) -> u32 {
        self.due_time
    }

    /// A frame was rendered by the last tick
    pub const fn is_frame(&self) -> bool {
        self.frame
    }

    /// The effect completed an animation period during the last tick
    pub const fn is_cycle(&self) -> bool {
        self.cycle
    }

    /// Select an effect by raw id
    ///
    /// 0 disables animation. Ids outside the catalog are stored as-is and
    /// disabled by the next tick. Switching to a different id clears the
    /// counters and scratch fields; the pixel buffer is kept.
    pub fn set_effect(&mut self, effect: u8) {
        if effect == self.effect {
            return;
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[StripState.set_effect] {} -> {} ({:?})",
            self.effect,
            effect,
            EffectId::from_raw(effect).map(EffectId::as_str)
        );
        self.last_effect = self.effect;
        self.effect = effect;
        self.counters.reset();
    }

    /// Set speed from a 0-100 percentage and reschedule the next frame
    pub fn set_speed(&mut self, percent: u8, now: Instant) {
        self.settings.speed = speed_from_percent(percent);
        self.due_time = crate::scheduler::now_ms(now).wrapping_add(SPEED_CHANGE_DELAY_MS);
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.settings.options.reverse = reverse;
    }

    /// Set block size class (0-3)
    pub fn set_size(&mut self, size: u8) {
        self.settings.options.size = size & 3;
    }

    /// Set fade rate (0-7)
    pub fn set_fade_rate(&mut self, rate: u8) {
        self.settings.options.fade_rate = rate & 7;
    }

    pub fn set_gamma(&mut self, gamma: bool) {
        self.settings.options.gamma = gamma;
    }

    pub fn set_options(&mut self, options: FxOptions) {
        self.settings.options = FxOptions::from_bits(options.bits());
    }

    /// Replace the leading palette entries; extra colors are ignored
    pub fn set_colors(&mut self, colors: &[Color]) {
        for (slot, color) in self.settings.palette.iter_mut().zip(colors) {
            *slot = *color;
        }
    }
}
