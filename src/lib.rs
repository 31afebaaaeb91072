#![no_std]

pub mod channel;
pub mod color;
pub mod effect;
pub mod intent_processor;
pub mod math8;
pub mod pixels;
pub mod random;
pub mod scheduler;
pub mod strip;

pub use intent_processor::{
    IntentChannel, IntentProcessor, IntentReceiver, IntentSender, StripIntent,
};
pub use scheduler::{FrameResult, FrameScheduler};
pub use effect::EffectId;
pub use pixels::{Channels, Pixels};
pub use strip::{Counters, FxOptions, StripConfig, StripError, StripState};

pub use color::{Color, Rgb, Rgbw};
pub use math8::{fast_sine8, triangle8};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms. The driver
/// receives the raw buffer, R, G, B, [W] per pixel, after every rendered
/// frame.
pub trait OutputDriver {
    /// Write a frame to the LED strip
    fn write(&mut self, buffer: &[u8], channels: Channels);
}
