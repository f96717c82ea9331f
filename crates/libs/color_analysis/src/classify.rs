use crate::conversion::rgb_to_hsv;
use crate::{ClassifiedColor, ColorName, ExtractedColor, Hsv8, Pixel};

/// Anything darker than this is black.
pub const BLACK_VALUE_BELOW: u8 = 40;
/// Bright colors above this value with little saturation are white.
pub const WHITE_VALUE_ABOVE: u8 = 200;
pub const WHITE_SATURATION_BELOW: u8 = 50;
/// Below this saturation a color has no usable hue and is gray.
pub const GRAY_SATURATION_BELOW: u8 = 30;

/// An inclusive hue range in the 0..=179 convention.
#[derive(Debug, Clone, Copy)]
pub struct HueBand {
    pub low: u8,
    pub high: u8,
    pub name: ColorName,
}

impl HueBand {
    const fn new(low: u8, high: u8, name: ColorName) -> Self {
        Self { low, high, name }
    }

    #[must_use]
    pub const fn contains(&self, hue: u8) -> bool {
        self.low <= hue && hue <= self.high
    }
}

/// Hue bands checked in order, red wraps around both ends of the hue circle.
pub const HUE_BANDS: [HueBand; 10] = [
    HueBand::new(0, 10, ColorName::Red),
    HueBand::new(11, 25, ColorName::Orange),
    HueBand::new(26, 35, ColorName::Brown),
    HueBand::new(36, 75, ColorName::Yellow),
    HueBand::new(76, 85, ColorName::YellowGreen),
    HueBand::new(86, 100, ColorName::Green),
    HueBand::new(101, 120, ColorName::Teal),
    HueBand::new(121, 140, ColorName::Blue),
    HueBand::new(141, 159, ColorName::Purple),
    HueBand::new(160, 179, ColorName::Red),
];

/// Map an HSV color to its name. Lightness rules win over hue.
#[must_use]
pub fn classify_hsv(hsv: Hsv8) -> ColorName {
    if hsv.value < BLACK_VALUE_BELOW {
        return ColorName::Black;
    }
    if hsv.value > WHITE_VALUE_ABOVE && hsv.saturation < WHITE_SATURATION_BELOW {
        return ColorName::White;
    }
    if hsv.saturation < GRAY_SATURATION_BELOW {
        return ColorName::Gray;
    }

    HUE_BANDS
        .iter()
        .find(|band| band.contains(hsv.hue))
        .map_or(ColorName::Other, |band| band.name)
}

#[must_use]
pub fn classify_color(pixel: Pixel) -> ColorName {
    classify_hsv(rgb_to_hsv(pixel))
}

/// Name every extracted color, keeping order and percentages.
#[must_use]
pub fn classify_extracted_colors(colors: &[ExtractedColor]) -> Vec<ClassifiedColor> {
    colors
        .iter()
        .map(|color| ClassifiedColor::new(*color, classify_color(color.rgb)))
        .collect()
}
