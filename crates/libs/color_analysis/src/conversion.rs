use crate::{Hsv8, Pixel};
use palette::{FromColor, Hsv, Srgb};

/// Largest hue value in the 8-bit convention, hue 180 wraps to 0.
pub const HUE_MAX: u8 = 179;

/// Normalize an 8-bit pixel into a non-linear sRGB color.
#[must_use]
pub fn pixel_to_srgb([r, g, b]: Pixel) -> Srgb {
    Srgb::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    )
}

/// Round an sRGB color back to 8-bit channels.
#[must_use]
pub fn srgb_to_pixel(color: Srgb) -> Pixel {
    [
        channel_to_u8(color.red),
        channel_to_u8(color.green),
        channel_to_u8(color.blue),
    ]
}

fn channel_to_u8(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert an RGB pixel to 8-bit HSV.
///
/// Hue is in degrees / 2 so it fits 0..=179, saturation and value are scaled to 0..=255.
#[must_use]
pub fn rgb_to_hsv(pixel: Pixel) -> Hsv8 {
    let hsv = Hsv::from_color(pixel_to_srgb(pixel));
    let half_degrees = (hsv.hue.into_positive_degrees() / 2.0).round() as u16;
    let hue = (half_degrees % (u16::from(HUE_MAX) + 1)) as u8;

    Hsv8 {
        hue,
        saturation: channel_to_u8(hsv.saturation),
        value: channel_to_u8(hsv.value),
    }
}
