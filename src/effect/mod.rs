//! Effect catalog
//!
//! Every effect is a plain function over an [`Fx`] context: it reads the
//! strip settings, writes pixels, advances its own counters and returns the
//! delay in milliseconds until its next frame. Effects are selected by a
//! closed [`EffectId`] enum and dispatched with an exhaustive match.

mod blink;
mod chase;
mod fire;
mod rainbow;
mod running;
mod sparkle;
mod wipe;

use crate::{
    color::Color,
    pixels::Pixels,
    random::FxRandom,
    strip::{Counters, FxSettings},
};

/// Effect context for a single frame
pub(crate) struct Fx<'a> {
    pub(crate) pixels: Pixels<'a>,
    pub(crate) settings: &'a FxSettings,
    pub(crate) counters: &'a mut Counters,
    pub(crate) random: FxRandom<'a>,
    /// Set when the effect completes an animation period
    pub(crate) cycle: bool,
}

impl<'a> Fx<'a> {
    pub(crate) fn new(
        pixels: Pixels<'a>,
        settings: &'a FxSettings,
        counters: &'a mut Counters,
        random: FxRandom<'a>,
    ) -> Self {
        Self {
            pixels,
            settings,
            counters,
            random,
            cycle: false,
        }
    }

    /// LED count as the wide type used by effect arithmetic
    #[inline]
    fn len(&self) -> u32 {
        u32::from(self.settings.led_count)
    }

    #[inline]
    fn speed(&self) -> u32 {
        u32::from(self.settings.speed)
    }

    #[inline]
    fn is_reverse(&self) -> bool {
        self.settings.options.reverse
    }

    #[inline]
    fn size_option(&self) -> u8 {
        self.settings.options.size & 3
    }

    #[inline]
    fn color(&self, slot: usize) -> Color {
        self.settings.palette[slot]
    }

    #[inline]
    fn set_cycle(&mut self) {
        self.cycle = true;
    }

    /// Write a pixel addressed by a 16-bit index
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn set(&mut self, index: u32, color: Color) {
        self.pixels.set(usize::from(index as u16), color);
    }

    /// Fill from a 16-bit start index, `count == 0` fills to the end
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn fill(&mut self, color: Color, first: u32, count: u32) {
        self.pixels
            .fill(color, usize::from(first as u16), count as usize);
    }

    #[inline]
    fn fill_all(&mut self, color: Color) {
        self.pixels.fill_all(color);
    }

    /// Fade every pixel one step toward the background color
    fn fade_out(&mut self) {
        let target = self.color(1);
        self.pixels
            .fade_toward(target, self.settings.options.fade_rate);
    }

    /// Scroll the whole strip by `distance` pixels toward the far end
    /// (or toward the start when reversed)
    fn shift(&mut self, distance: usize, count: usize) {
        if self.is_reverse() {
            self.pixels.copy_within(0, distance, count);
        } else {
            self.pixels.copy_within(distance, 0, count);
        }
    }
}

/// Effect signature: render one frame, return the delay until the next
type EffectFn = fn(&mut Fx<'_>) -> u32;

macro_rules! effect_catalog {
    ($( $(#[$meta:meta])* $variant:ident = $id:literal, $name:literal => $render:path; )*) => {
        /// Known effect ids
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum EffectId {
            $( $(#[$meta])* $variant = $id, )*
        }

        impl EffectId {
            /// All effects in id order
            pub const ALL: &'static [EffectId] = &[$( Self::$variant, )*];

            /// Resolve a raw id, `None` for 0 and ids outside the catalog
            pub const fn from_raw(value: u8) -> Option<Self> {
                Some(match value {
                    $( $id => Self::$variant, )*
                    _ => return None,
                })
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            pub fn parse_from_str(s: &str) -> Option<Self> {
                match s {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }

            fn renderer(self) -> EffectFn {
                match self {
                    $( Self::$variant => $render, )*
                }
            }
        }
    };
}

effect_catalog! {
    /// Two palette colors, 50% duty cycle
    Blink = 1, "blink" => blink::blink;
    /// Slow "standby" breathing, fixed speed
    Breath = 2, "breath" => blink::breath;
    ColorWipe = 3, "color_wipe" => wipe::color_wipe;
    ColorWipeInverse = 4, "color_wipe_inv" => wipe::color_wipe_inverse;
    ColorWipeReverse = 5, "color_wipe_rev" => wipe::color_wipe_reverse;
    ColorWipeReverseInverse = 6, "color_wipe_rev_inv" => wipe::color_wipe_reverse_inverse;
    ColorWipeRandom = 7, "color_wipe_random" => wipe::color_wipe_random;
    RandomColor = 8, "random_color" => sparkle::random_color;
    SingleDynamic = 9, "single_dynamic" => sparkle::single_dynamic;
    MultiDynamic = 10, "multi_dynamic" => sparkle::multi_dynamic;
    /// Whole strip cycles through the wheel
    Rainbow = 11, "rainbow" => rainbow::rainbow;
    /// Wheel scrolled along the strip
    RainbowCycle = 12, "rainbow_cycle" => rainbow::rainbow_cycle;
    Scan = 13, "scan" => wipe::scan;
    DualScan = 14, "dual_scan" => wipe::dual_scan;
    Fade = 15, "fade" => blink::fade;
    TheaterChase = 16, "theater_chase" => chase::theater_chase;
    TheaterChaseRainbow = 17, "theater_chase_rainbow" => chase::theater_chase_rainbow;
    RunningLights = 18, "running_lights" => running::running_lights;
    Twinkle = 19, "twinkle" => sparkle::twinkle;
    TwinkleRandom = 20, "twinkle_random" => sparkle::twinkle_random;
    TwinkleFade = 21, "twinkle_fade" => sparkle::twinkle_fade;
    TwinkleFadeRandom = 22, "twinkle_fade_random" => sparkle::twinkle_fade_random;
    Sparkle = 23, "sparkle" => sparkle::sparkle;
    FlashSparkle = 24, "flash_sparkle" => sparkle::flash_sparkle;
    HyperSparkle = 25, "hyper_sparkle" => sparkle::hyper_sparkle;
    Strobe = 26, "strobe" => blink::strobe;
    StrobeRainbow = 27, "strobe_rainbow" => blink::strobe_rainbow;
    MultiStrobe = 28, "multi_strobe" => blink::multi_strobe;
    BlinkRainbow = 29, "blink_rainbow" => blink::blink_rainbow;
    ChaseWhite = 30, "chase_white" => chase::chase_white;
    ChaseColor = 31, "chase_color" => chase::chase_color;
    ChaseRandom = 32, "chase_random" => chase::chase_random;
    ChaseRainbow = 33, "chase_rainbow" => chase::chase_rainbow;
    ChaseFlash = 34, "chase_flash" => chase::chase_flash;
    ChaseFlashRandom = 35, "chase_flash_random" => chase::chase_flash_random;
    ChaseRainbowWhite = 36, "chase_rainbow_white" => chase::chase_rainbow_white;
    ChaseBlackout = 37, "chase_blackout" => chase::chase_blackout;
    ChaseBlackoutRainbow = 38, "chase_blackout_rainbow" => chase::chase_blackout_rainbow;
    ColorSweepRandom = 39, "color_sweep_random" => wipe::color_sweep_random;
    RunningColor = 40, "running_color" => running::running_color;
    RunningRedBlue = 41, "running_red_blue" => running::running_red_blue;
    RunningRandom = 42, "running_random" => running::running_random;
    /// K.I.T.T.
    LarsonScanner = 43, "larson_scanner" => wipe::larson_scanner;
    Comet = 44, "comet" => wipe::comet;
    Fireworks = 45, "fireworks" => fire::fireworks;
    FireworksRandom = 46, "fireworks_random" => fire::fireworks_random;
    MerryChristmas = 47, "merry_christmas" => running::merry_christmas;
    FireFlicker = 48, "fire_flicker" => fire::fire_flicker;
    FireFlickerSoft = 49, "fire_flicker_soft" => fire::fire_flicker_soft;
    FireFlickerIntense = 50, "fire_flicker_intense" => fire::fire_flicker_intense;
    CircusCombustus = 51, "circus_combustus" => chase::circus_combustus;
    Halloween = 52, "halloween" => running::halloween;
    BicolorChase = 53, "bicolor_chase" => chase::bicolor_chase;
    TricolorChase = 54, "tricolor_chase" => chase::tricolor_chase;
    TwinkleFox = 55, "twinkle_fox" => rainbow::twinkle_fox;
    /// Fireworks falling along the strip
    Rain = 56, "rain" => fire::rain;
}

impl EffectId {
    /// Number of effects in the catalog
    pub const COUNT: usize = Self::ALL.len();

    /// Render one frame, returns the delay until the next one (ms)
    pub(crate) fn render(self, fx: &mut Fx<'_>) -> u32 {
        (self.renderer())(fx)
    }
}

impl From<EffectId> for u8 {
    fn from(id: EffectId) -> Self {
        id as u8
    }
}
