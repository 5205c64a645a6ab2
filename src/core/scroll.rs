use crate::core::constants::{HERO_OPACITY_RANGE, HERO_SCALE_RANGE, HERO_SCROLL_WINDOW};

/// Piecewise-linear map from an input range to an output range.
///
/// Inputs outside `input` clamp to the nearest end of `output`; the map
/// never extrapolates. The input range may be given in either direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub input: [f32; 2],
    pub output: [f32; 2],
}

impl LinearMap {
    pub const fn new(input: [f32; 2], output: [f32; 2]) -> Self {
        Self { input, output }
    }

    pub fn apply(&self, x: f32) -> f32 {
        let [i0, i1] = self.input;
        let [o0, o1] = self.output;
        let span = i1 - i0;
        if span == 0.0 || x.is_nan() {
            return o0;
        }
        let t = ((x - i0) / span).clamp(0.0, 1.0);
        o0 + (o1 - o0) * t
    }
}

/// Normalized scroll position of a document.
///
/// `offset` is the current vertical scroll offset, `scroll_height` the full
/// document height and `viewport_height` the visible height. A document
/// that cannot scroll reports 0.
pub fn scroll_progress(offset: f64, scroll_height: f64, viewport_height: f64) -> f32 {
    let scrollable = scroll_height - viewport_height;
    if !(scrollable > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable).clamp(0.0, 1.0) as f32
}

/// Hero content style derived from scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroTransform {
    pub opacity: f32,
    pub scale: f32,
}

impl Default for HeroTransform {
    fn default() -> Self {
        Self {
            opacity: HERO_OPACITY_RANGE[0],
            scale: HERO_SCALE_RANGE[0],
        }
    }
}

/// Maps scroll progress through the hero opacity and scale curves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollProgressMapper {
    pub opacity: LinearMap,
    pub scale: LinearMap,
}

impl Default for ScrollProgressMapper {
    fn default() -> Self {
        Self {
            opacity: LinearMap::new(HERO_SCROLL_WINDOW, HERO_OPACITY_RANGE),
            scale: LinearMap::new(HERO_SCROLL_WINDOW, HERO_SCALE_RANGE),
        }
    }
}

impl ScrollProgressMapper {
    pub fn map(&self, progress: f32) -> HeroTransform {
        let p = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        HeroTransform {
            opacity: self.opacity.apply(p),
            scale: self.scale.apply(p),
        }
    }
}

/// Hero transform for `progress` using the default curves.
#[inline]
pub fn hero_transform(progress: f32) -> HeroTransform {
    ScrollProgressMapper::default().map(progress)
}
