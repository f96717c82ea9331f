use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Red, green and blue intensity, each 0-255.
pub type Pixel = [u8; 3];

/// A representative color of an image and the share of pixels it stands for.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, ToSchema)]
pub struct ExtractedColor {
    #[schema(value_type = Vec<u8>)]
    pub rgb: Pixel,
    /// Percentage of sampled pixels in this color's cluster, rounded to 2 decimals.
    pub percentage: f64,
}

/// An [`ExtractedColor`] annotated with its color name.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, ToSchema)]
pub struct ClassifiedColor {
    #[schema(value_type = Vec<u8>)]
    pub rgb: Pixel,
    pub name: ColorName,
    pub percentage: f64,
}

impl ClassifiedColor {
    #[must_use]
    pub const fn new(color: ExtractedColor, name: ColorName) -> Self {
        Self {
            rgb: color.rgb,
            name,
            percentage: color.percentage,
        }
    }
}

/// Perceptual color buckets.
///
/// `Beige` and `Pink` are never produced by the hue classifier, the combination rules
/// still know about them so externally named colors get sensible advice.
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum ColorName {
    Red,
    Orange,
    Brown,
    Yellow,
    YellowGreen,
    Green,
    Teal,
    Blue,
    Purple,
    Black,
    White,
    Gray,
    Beige,
    Pink,
    Other,
}

impl ColorName {
    pub const ALL: [Self; 15] = [
        Self::Red,
        Self::Orange,
        Self::Brown,
        Self::Yellow,
        Self::YellowGreen,
        Self::Green,
        Self::Teal,
        Self::Blue,
        Self::Purple,
        Self::Black,
        Self::White,
        Self::Gray,
        Self::Beige,
        Self::Pink,
        Self::Other,
    ];

    /// The stable identifier used on the wire, e.g. `"yellow-green"`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Brown => "brown",
            Self::Yellow => "yellow",
            Self::YellowGreen => "yellow-green",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Black => "black",
            Self::White => "white",
            Self::Gray => "gray",
            Self::Beige => "beige",
            Self::Pink => "pink",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ColorName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse grouping of color names used by the combination rules.
#[derive(
    Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Neutral,
    Warm,
    Cool,
    Other,
}

/// HSV with 8-bit channels: hue in 0..=179 (degrees / 2), saturation and value in 0..=255.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub struct Hsv8 {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl Hsv8 {
    #[must_use]
    pub const fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_color_serialization() -> color_eyre::Result<()> {
        let color = ClassifiedColor {
            rgb: [200, 50, 50],
            name: ColorName::YellowGreen,
            percentage: 75.23,
        };

        let json = serde_json::to_value(color)?;
        assert_eq!(
            json,
            serde_json::json!({ "rgb": [200, 50, 50], "name": "yellow-green", "percentage": 75.23 })
        );

        let back: ClassifiedColor = serde_json::from_value(json)?;
        assert_eq!(back, color);
        Ok(())
    }

    #[test]
    fn test_wire_names_match_serde() -> color_eyre::Result<()> {
        for name in ColorName::ALL {
            let json = serde_json::to_string(&name)?;
            assert_eq!(json, format!("\"{}\"", name.as_str()));
        }
        Ok(())
    }
}
