//! A single pyramid level with a runtime channel count.
//!
//! Pyramid arithmetic is identical for weight planes (1 channel) and RGBA
//! images (4 channels), so levels carry their channel count at runtime and
//! the resampling primitives operate on interleaved rows of `width ×
//! channels` samples. [`Level`] converts losslessly from and to the core
//! buffer types.

use expofuse_core::{Error, Image, Plane, Result};

/// One level of an image pyramid.
///
/// Owns a row-major, channel-interleaved f32 buffer. Constructed from a
/// [`Plane`] (1 channel) or an [`Image`] (4 channels), or directly via
/// [`Level::new`] for accumulation buffers.
#[derive(Clone, PartialEq)]
pub struct Level {
    /// Interleaved samples, row-major
    data: Vec<f32>,
    /// Width in pixels
    width: usize,
    /// Height in pixels
    height: usize,
    /// Samples per pixel
    channels: usize,
}

impl Level {
    /// Creates a zero-filled level.
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            data: vec![0.0; width * height * channels],
            width,
            height,
            channels,
        }
    }

    /// Creates a level from an existing interleaved buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * channels`.
    pub fn from_data(width: usize, height: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        let expected = width * height * channels;
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
            channels,
        })
    }

    /// Returns the level width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the level height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of samples per pixel.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the level dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
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

    /// Returns a row of interleaved samples.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let stride = self.width * self.channels;
        &self.data[y * stride..(y + 1) * stride]
    }

    /// Returns a mutable row of interleaved samples.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let stride = self.width * self.channels;
        &mut self.data[y * stride..(y + 1) * stride]
    }

    /// Converts a single-channel level back into a [`Plane`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] if the level does not have
    /// exactly one channel.
    pub fn into_plane(self) -> Result<Plane> {
        if self.channels != 1 {
            return Err(Error::channel_mismatch(1, self.channels));
        }
        Plane::from_data(self.width, self.height, self.data)
    }

    /// Converts a four-channel level back into an [`Image`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ChannelMismatch`] if the level does not have
    /// exactly four channels.
    pub fn into_image(self) -> Result<Image> {
        if self.channels != Image::CHANNELS {
            return Err(Error::channel_mismatch(Image::CHANNELS, self.channels));
        }
        Image::from_data(self.width, self.height, self.data)
    }
}

impl From<Plane> for Level {
    fn from(plane: Plane) -> Self {
        let (width, height) = plane.dimensions();
        Self {
            data: plane.into_data(),
            width,
            height,
            channels: 1,
        }
    }
}

impl From<Image> for Level {
    fn from(image: Image) -> Self {
        let (width, height) = image.dimensions();
        Self {
            data: image.into_data(),
            width,
            height,
            channels: Image::CHANNELS,
        }
    }
}

impl std::fmt::Debug for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Level")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &self.channels)
            .finish()
    }
}
