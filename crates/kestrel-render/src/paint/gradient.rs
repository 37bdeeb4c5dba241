use core::str::FromStr;

use super::ParseNameError;

/// Axis and anchoring of a two-color gradient.
///
/// The `*Sector` variants describe gradients anchored to a scrolling world
/// region rather than to the visible screen.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum GradientDirection {
    /// Top color at the top edge, bottom color at the bottom edge.
    #[default]
    Vertical,
    /// Top color at the left edge, bottom color at the right edge.
    Horizontal,
    VerticalSector,
    HorizontalSector,
}

impl GradientDirection {
    pub const fn name(self) -> &'static str {
        match self {
            GradientDirection::Vertical => "vertical",
            GradientDirection::Horizontal => "horizontal",
            GradientDirection::VerticalSector => "vertical_sector",
            GradientDirection::HorizontalSector => "horizontal_sector",
        }
    }

    /// True for directions whose bands are stacked top-to-bottom.
    #[inline]
    pub const fn is_vertical(self) -> bool {
        matches!(self, GradientDirection::Vertical | GradientDirection::VerticalSector)
    }

    #[inline]
    pub const fn is_sector(self) -> bool {
        matches!(
            self,
            GradientDirection::VerticalSector | GradientDirection::HorizontalSector
        )
    }

    /// Lenient parse used by level loading: unknown names mean `Vertical`.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl FromStr for GradientDirection {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vertical" => Ok(GradientDirection::Vertical),
            "horizontal" => Ok(GradientDirection::Horizontal),
            "vertical_sector" => Ok(GradientDirection::VerticalSector),
            "horizontal_sector" => Ok(GradientDirection::HorizontalSector),
            other => Err(ParseNameError::new("gradient direction", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sector_names_parse() {
        let d: GradientDirection = "horizontal_sector".parse().unwrap();
        assert!(d.is_sector());
        assert!(!d.is_vertical());
    }

    #[test]
    fn unknown_name_defaults_to_vertical() {
        assert_eq!(GradientDirection::from_name_or_default("diagonal"), GradientDirection::Vertical);
    }
}
