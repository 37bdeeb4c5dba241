use core::fmt;
use core::str::FromStr;

use super::ParseNameError;

/// Fixed-function blend factor, as named by classic GL blending.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BlendFactor {
    Zero,
    One,
    SrcColor,
    OneMinusSrcColor,
    SrcAlpha,
    OneMinusSrcAlpha,
    DstAlpha,
    OneMinusDstAlpha,
    DstColor,
    OneMinusDstColor,
}

impl BlendFactor {
    pub const fn gl_name(self) -> &'static str {
        match self {
            BlendFactor::Zero => "GL_ZERO",
            BlendFactor::One => "GL_ONE",
            BlendFactor::SrcColor => "GL_SRC_COLOR",
            BlendFactor::OneMinusSrcColor => "GL_ONE_MINUS_SRC_COLOR",
            BlendFactor::SrcAlpha => "GL_SRC_ALPHA",
            BlendFactor::OneMinusSrcAlpha => "GL_ONE_MINUS_SRC_ALPHA",
            BlendFactor::DstAlpha => "GL_DST_ALPHA",
            BlendFactor::OneMinusDstAlpha => "GL_ONE_MINUS_DST_ALPHA",
            BlendFactor::DstColor => "GL_DST_COLOR",
            BlendFactor::OneMinusDstColor => "GL_ONE_MINUS_DST_COLOR",
        }
    }
}

impl fmt::Display for BlendFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gl_name())
    }
}

/// Abstract blend description: `result = src * sfactor + dst * dfactor`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Blend {
    pub sfactor: BlendFactor,
    pub dfactor: BlendFactor,
}

impl Blend {
    pub const NONE: Blend = Blend::new(BlendFactor::One, BlendFactor::Zero);
    pub const BLEND: Blend = Blend::new(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
    pub const ADD: Blend = Blend::new(BlendFactor::SrcAlpha, BlendFactor::One);
    pub const MOD: Blend = Blend::new(BlendFactor::DstColor, BlendFactor::Zero);

    #[inline]
    pub const fn new(sfactor: BlendFactor, dfactor: BlendFactor) -> Self {
        Self { sfactor, dfactor }
    }
}

impl Default for Blend {
    fn default() -> Self {
        Blend::BLEND
    }
}

impl FromStr for Blend {
    type Err = ParseNameError;

    /// Parses the level-file names `none`, `blend`, `add` and `mod`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Blend::NONE),
            "blend" => Ok(Blend::BLEND),
            "add" => Ok(Blend::ADD),
            "mod" => Ok(Blend::MOD),
            other => Err(ParseNameError::new("blend mode", other)),
        }
    }
}

/// Blend modes a backend can execute directly.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum BlendMode {
    /// Source replaces destination.
    None,
    /// Source-over alpha compositing.
    #[default]
    Blend,
    /// Source scaled by its alpha, added to destination.
    Add,
    /// Destination multiplied by source.
    Mod,
}

/// Maps a blend description to a backend mode, or `None` when no mode matches.
#[inline]
pub fn match_blend(blend: Blend) -> Option<BlendMode> {
    use BlendFactor::*;

    match (blend.sfactor, blend.dfactor) {
        (One, Zero) => Some(BlendMode::None),
        (SrcAlpha, OneMinusSrcAlpha) => Some(BlendMode::Blend),
        (SrcAlpha, One) => Some(BlendMode::Add),
        (DstColor, Zero) => Some(BlendMode::Mod),
        _ => None,
    }
}

/// Maps a blend description to a backend mode.
///
/// Total: unrecognized pairs log a warning naming both factors and fall back
/// to [`BlendMode::Blend`].
pub fn resolve_blend(blend: Blend) -> BlendMode {
    match_blend(blend).unwrap_or_else(|| {
        log::warn!(
            "unknown blend mode combination: sfactor={} dfactor={}",
            blend.sfactor,
            blend.dfactor
        );
        BlendMode::Blend
    })
}
