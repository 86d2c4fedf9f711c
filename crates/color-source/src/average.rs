//! Average color extraction
//!
//! Decodes an encoded image and reduces it to one opaque color. Fully
//! transparent pixels do not contribute, and partially transparent ones are
//! weighted by their alpha.

use crate::{ResolveError, Result};
use image::{DynamicImage, GenericImageView};
use theme_core::Rgb;

/// Default longest edge an image is downsampled to before averaging
pub const DEFAULT_SAMPLE_SIZE: u32 = 100;

/// How channel values are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AverageAlgorithm {
    /// Arithmetic mean of each channel
    Simple,
    /// Root mean square of each channel; brighter pixels pull harder
    #[default]
    Sqrt,
}

/// Options for average color extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AverageOptions {
    /// Channel combination algorithm
    pub algorithm: AverageAlgorithm,
    /// Downsample so neither edge exceeds this many pixels; `None` uses every pixel
    pub sample_size: Option<u32>,
}

impl Default for AverageOptions {
    fn default() -> Self {
        Self {
            algorithm: AverageAlgorithm::default(),
            sample_size: Some(DEFAULT_SAMPLE_SIZE),
        }
    }
}

impl AverageOptions {
    /// Set the algorithm
    pub fn with_algorithm(mut self, algorithm: AverageAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the downsampling bound
    pub fn with_sample_size(mut self, size: u32) -> Self {
        self.sample_size = Some(size.max(1));
        self
    }

    /// Average every pixel at full resolution
    pub fn full_resolution(mut self) -> Self {
        self.sample_size = None;
        self
    }
}

/// Decode image bytes and compute their average color
///
/// # Example
///
/// ```rust,no_run
/// use color_source::average::{average_color, AverageOptions};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let bytes = std::fs::read("logo.png")?;
/// let color = average_color(&bytes, &AverageOptions::default())?;
/// println!("average: {}", color);
/// # Ok(())
/// # }
/// ```
pub fn average_color(bytes: &[u8], options: &AverageOptions) -> Result<Rgb> {
    let img = image::load_from_memory(bytes).map_err(|e| ResolveError::Decode(e.to_string()))?;
    Ok(average_image(&img, options))
}

/// Compute the average color of a decoded image
pub fn average_image(img: &DynamicImage, options: &AverageOptions) -> Rgb {
    let (width, height) = img.dimensions();

    let sampled;
    let img = match options.sample_size {
        Some(max) if width > max || height > max => {
            sampled = img.thumbnail(max, max);
            &sampled
        }
        _ => img,
    };

    let rgba = img.to_rgba8();
    let mut totals = [0.0f64; 3];
    let mut weight = 0.0f64;

    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }
        let alpha = f64::from(a) / 255.0;
        for (total, channel) in totals.iter_mut().zip([r, g, b]) {
            let c = f64::from(channel);
            *total += match options.algorithm {
                AverageAlgorithm::Simple => c * alpha,
                AverageAlgorithm::Sqrt => c * c * alpha,
            };
        }
        weight += alpha;
    }

    if weight == 0.0 {
        return Rgb::new(0, 0, 0);
    }

    let channel = |total: f64| {
        let mean = total / weight;
        let value = match options.algorithm {
            AverageAlgorithm::Simple => mean,
            AverageAlgorithm::Sqrt => mean.sqrt(),
        };
        value.round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(channel(totals[0]), channel(totals[1]), channel(totals[2]))
}
