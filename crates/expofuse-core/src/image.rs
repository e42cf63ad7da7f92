//! Pixel buffer types for exposure fusion.
//!
//! This module provides the two container types the fusion pipeline moves
//! between stages:
//!
//! - [`Image`] - Owned RGBA buffer, 4 × f32 per pixel, interleaved
//! - [`Plane`] - Owned single-channel f32 buffer (weight maps, luminance)
//!
//! # Memory Layout
//!
//! Both types store samples in **row-major** order, top-to-bottom:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  ← Row 0
//!         [R G B A R G B A ...]  ← Row 1
//!         ...
//! ```
//!
//! # Ownership
//!
//! Buffers are plain `Vec<f32>` with exclusive ownership. The fusion pipeline
//! is strictly linear: every stage consumes its inputs and produces fresh
//! buffers, so no copy-on-write or reference counting is needed and no
//! aliasing is ever exposed.
//!
//! # Usage
//!
//! ```rust
//! use expofuse_core::Image;
//!
//! let mut img = Image::new(64, 64);
//! img.set_pixel(10, 10, [1.0, 0.5, 0.25, 1.0]);
//! let px = img.pixel(10, 10);
//! assert_eq!(px[0], 1.0);
//! ```

use crate::error::{Error, Result};

/// Owned RGBA image buffer with 32-bit float samples.
///
/// Channel count is fixed at 4 (RGB + alpha), interleaved per pixel. The
/// fusion engine treats alpha as payload: it is carried through untouched
/// and restored exactly at the output.
///
/// # Example
///
/// ```rust
/// use expofuse_core::Image;
///
/// let img = Image::filled(32, 32, [0.18, 0.18, 0.18, 1.0]);
/// assert_eq!(img.pixel(0, 0), [0.18, 0.18, 0.18, 1.0]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Image {
    /// Interleaved RGBA samples, row-major
    data: Vec<f32>,
    /// Image width in pixels
    width: usize,
    /// Image height in pixels
    height: usize,
}

impl Image {
    /// Number of channels per pixel (RGB + alpha).
    pub const CHANNELS: usize = 4;

    /// Creates a new image filled with zeros.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height * Self::CHANNELS],
            width,
            height,
        }
    }

    /// Creates an image from existing interleaved RGBA data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expofuse_core::Image;
    ///
    /// let pixels = vec![0.0f32; 8 * 8 * 4];
    /// let img = Image::from_data(8, 8, pixels).unwrap();
    /// assert_eq!(img.dimensions(), (8, 8));
    /// ```
    pub fn from_data(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        let expected = width * height * Self::CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates an image filled with a specific pixel value.
    pub fn filled(width: usize, height: usize, pixel: [f32; 4]) -> Self {
        let mut data = Vec::with_capacity(width * height * Self::CHANNELS);
        for _ in 0..width * height {
            data.extend_from_slice(&pixel);
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns a reference to the raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the raw interleaved samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the image, returning its sample buffer.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Returns the pixel at (x, y) as `[R, G, B, A]`.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [f32; 4] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y * self.width + x) * Self::CHANNELS;
        let mut px = [0.0; 4];
        px.copy_from_slice(&self.data[offset..offset + Self::CHANNELS]);
        px
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: [f32; 4]) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y * self.width + x) * Self::CHANNELS;
        self.data[offset..offset + Self::CHANNELS].copy_from_slice(&pixel);
    }

    /// Fills the entire image with a pixel value.
    pub fn fill(&mut self, pixel: [f32; 4]) {
        for chunk in self.data.chunks_exact_mut(Self::CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
    }

    /// Returns a row of interleaved samples.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y * self.width * Self::CHANNELS;
        &self.data[start..start + self.width * Self::CHANNELS]
    }

    /// Returns a mutable row of interleaved samples.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y * self.width * Self::CHANNELS;
        &mut self.data[start..start + self.width * Self::CHANNELS]
    }

    /// Copies the alpha channel from another image, float for float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the images differ in size.
    pub fn copy_alpha_from(&mut self, src: &Image) -> Result<()> {
        if self.dimensions() != src.dimensions() {
            return Err(Error::dimension_mismatch(self.dimensions(), src.dimensions()));
        }
        for (dst, src) in self
            .data
            .chunks_exact_mut(Self::CHANNELS)
            .zip(src.data.chunks_exact(Self::CHANNELS))
        {
            dst[3] = src[3];
        }
        Ok(())
    }
}

impl std::fmt::Debug for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &Self::CHANNELS)
            .finish()
    }
}

/// Owned single-channel f32 buffer.
///
/// Used for per-exposure weight maps and other scalar-per-pixel data.
///
/// # Example
///
/// ```rust
/// use expofuse_core::Plane;
///
/// let mut map = Plane::new(16, 16);
/// map.set_value(3, 4, 0.75);
/// assert_eq!(map.value(3, 4), 0.75);
/// ```
#[derive(Clone, PartialEq)]
pub struct Plane {
    /// Scalar samples, row-major
    data: Vec<f32>,
    /// Width in samples
    width: usize,
    /// Height in samples
    height: usize,
}

impl Plane {
    /// Creates a new plane filled with zeros.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Creates a plane from existing data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        let expected = width * height;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a plane filled with a specific value.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Returns the plane width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the plane height in samples.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the plane dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the total number of samples.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.width * self.height
    }

    /// Returns a reference to the raw samples.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns a mutable reference to the raw samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the plane, returning its sample buffer.
    #[inline]
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// Returns the value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> f32 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[y * self.width + x]
    }

    /// Sets the value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if (x, y) is out of bounds.
    #[inline]
    pub fn set_value(&mut self, x: usize, y: usize, value: f32) {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[y * self.width + x] = value;
    }

    /// Fills the entire plane with a value.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Returns a row of samples.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Returns a mutable row of samples.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        debug_assert!(y < self.height, "row out of bounds");
        &mut self.data[y * self.width..(y + 1) * self.width]
    }
}

impl std::fmt::Debug for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plane")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
