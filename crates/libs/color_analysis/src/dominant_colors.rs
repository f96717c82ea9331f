//! Dominant color extraction.
//!
//! The image is optionally downscaled, flattened into color points and clustered with
//! k-means. Each cluster becomes one [`ExtractedColor`]: its centroid rounded to 8-bit
//! channels and the share of pixels assigned to it.

use crate::conversion::{pixel_to_srgb, srgb_to_pixel};
use crate::image_input::ensure_not_empty;
use crate::{ColorAnalysisError, ExtractedColor, Pixel, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;
use kmeans_colors::{Kmeans, get_kmeans};
use palette::Srgb;
use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::time::Instant;
use tracing::debug;

/// Cluster labels are stored as `u8`, which caps the number of clusters.
pub const MAX_CLUSTERS: usize = u8::MAX as usize;

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOptions {
    /// How many dominant colors to look for.
    pub num_colors: usize,
    /// Wider images are downscaled to this width before clustering.
    pub max_width: u32,
    /// Seed of the first k-means run, later runs use `seed + 1`, `seed + 2`, ...
    pub seed: u64,
    pub max_iterations: usize,
    /// Centroid movement below which k-means stops early.
    pub convergence: f32,
    /// Number of k-means restarts, the tightest clustering wins.
    pub runs: usize,
}

impl Default for ExtractionOptions {
    fn default() -> Self {
        Self {
            num_colors: 3,
            max_width: 500,
            seed: 0,
            max_iterations: 20,
            convergence: 0.0025,
            runs: 3,
        }
    }
}

impl ExtractionOptions {
    #[must_use]
    pub fn with_num_colors(&self, num_colors: usize) -> Self {
        Self {
            num_colors,
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.num_colors == 0 || self.num_colors > MAX_CLUSTERS {
            return Err(ColorAnalysisError::invalid_parameter(
                "num_colors",
                self.num_colors,
            ));
        }
        if self.max_width == 0 {
            return Err(ColorAnalysisError::invalid_parameter(
                "max_width",
                self.max_width,
            ));
        }
        if self.max_iterations == 0 {
            return Err(ColorAnalysisError::invalid_parameter(
                "max_iterations",
                self.max_iterations,
            ));
        }
        if self.runs == 0 {
            return Err(ColorAnalysisError::invalid_parameter("runs", self.runs));
        }
        if !self.convergence.is_finite() || self.convergence < 0.0 {
            return Err(ColorAnalysisError::invalid_parameter(
                "convergence",
                self.convergence,
            ));
        }
        Ok(())
    }
}

struct Cluster {
    rgb: Pixel,
    count: usize,
}

/// Find the dominant colors of an image, most common first.
///
/// # Errors
///
/// * `InvalidImage` if the image has no pixels.
/// * `InvalidParameter` if any option is out of range, e.g. `num_colors == 0`.
pub fn extract_dominant_colors(
    image: &RgbImage,
    options: &ExtractionOptions,
) -> Result<Vec<ExtractedColor>> {
    ensure_not_empty(image.width(), image.height())?;
    options.validate()?;

    let now = Instant::now();
    let sample = downscale(image, options.max_width)?;
    let pixels: Vec<Pixel> = sample.pixels().map(|pixel| pixel.0).collect();

    let clusters = match distinct_colors(&pixels, options.num_colors) {
        Some(exact) => {
            debug!(
                distinct = exact.len(),
                "Image has no more distinct colors than requested, skipping k-means"
            );
            exact
        }
        None => cluster_colors(&pixels, options),
    };

    let colors = rank(clusters);
    debug!(
        width = sample.width(),
        height = sample.height(),
        found = colors.len(),
        "Extracted dominant colors in {:?}",
        now.elapsed()
    );
    Ok(colors)
}

/// Shrink the image to `max_width`, keeping its aspect ratio, with an area-averaging filter.
fn downscale(image: &RgbImage, max_width: u32) -> Result<Cow<'_, RgbImage>> {
    let (width, height) = image.dimensions();
    if width <= max_width {
        return Ok(Cow::Borrowed(image));
    }

    let target_height = (u64::from(max_width) * u64::from(height) / u64::from(width)).max(1) as u32;
    let src_image = Image::from_vec_u8(width, height, image.as_raw().clone(), PixelType::U8x3)?;
    let mut dst_image = Image::new(max_width, target_height, PixelType::U8x3);

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Box));
    let mut resizer = Resizer::new();
    resizer.resize(&src_image, &mut dst_image, &options)?;

    RgbImage::from_raw(max_width, target_height, dst_image.into_vec())
        .map(Cow::Owned)
        .ok_or_else(|| ColorAnalysisError::Resize("resized buffer has the wrong size".to_string()))
}

/// Every distinct color as its own cluster, in first-seen order.
///
/// Returns `None` as soon as there are more than `max_colors` distinct colors.
fn distinct_colors(pixels: &[Pixel], max_colors: usize) -> Option<Vec<Cluster>> {
    let mut positions: HashMap<Pixel, usize> = HashMap::new();
    let mut clusters: Vec<Cluster> = Vec::new();

    for pixel in pixels {
        if let Some(&position) = positions.get(pixel) {
            clusters[position].count += 1;
            continue;
        }
        if clusters.len() == max_colors {
            return None;
        }
        positions.insert(*pixel, clusters.len());
        clusters.push(Cluster {
            rgb: *pixel,
            count: 1,
        });
    }

    Some(clusters)
}

fn cluster_colors(pixels: &[Pixel], options: &ExtractionOptions) -> Vec<Cluster> {
    let points: Vec<Srgb> = pixels.iter().map(|pixel| pixel_to_srgb(*pixel)).collect();
    let run = |offset: u64| -> Kmeans<Srgb> {
        get_kmeans(
            options.num_colors,
            options.max_iterations,
            options.convergence,
            false,
            &points,
            options.seed.wrapping_add(offset),
        )
    };

    let mut best = run(0);
    for offset in 1..options.runs as u64 {
        let candidate = run(offset);
        if candidate.score < best.score {
            best = candidate;
        }
    }
    debug!(score = best.score, runs = options.runs, "k-means finished");

    let mut counts = vec![0usize; best.centroids.len()];
    for &index in &best.indices {
        counts[usize::from(index)] += 1;
    }

    best.centroids
        .iter()
        .zip(counts)
        .map(|(centroid, count)| Cluster {
            rgb: srgb_to_pixel(*centroid),
            count,
        })
        .collect()
}

/// 100.00% expressed in hundredths of a percent.
const TOTAL_HUNDREDTHS: usize = 10_000;

/// Split 100.00% over `counts` in hundredths with the largest remainder method,
/// so the shares always add up to exactly 100.00. Ties go to the earlier cluster.
fn apportion(counts: &[usize]) -> Vec<usize> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return vec![0; counts.len()];
    }

    let mut shares: Vec<usize> = counts
        .iter()
        .map(|&count| count * TOTAL_HUNDREDTHS / total)
        .collect();
    let missing = TOTAL_HUNDREDTHS - shares.iter().sum::<usize>();

    let mut by_remainder: Vec<usize> = (0..counts.len()).collect();
    by_remainder.sort_by_key(|&i| Reverse(counts[i] * TOTAL_HUNDREDTHS % total));
    for &i in by_remainder.iter().take(missing) {
        shares[i] += 1;
    }
    shares
}

/// Drop empty clusters and sort by share, ties keep cluster order.
fn rank(clusters: Vec<Cluster>) -> Vec<ExtractedColor> {
    let clusters: Vec<Cluster> = clusters
        .into_iter()
        .filter(|cluster| cluster.count > 0)
        .collect();
    let counts: Vec<usize> = clusters.iter().map(|cluster| cluster.count).collect();

    let mut colors: Vec<ExtractedColor> = clusters
        .iter()
        .zip(apportion(&counts))
        .map(|(cluster, hundredths)| ExtractedColor {
            rgb: cluster.rgb,
            percentage: hundredths as f64 / 100.0,
        })
        .collect();
    colors.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    colors
}
