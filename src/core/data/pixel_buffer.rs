use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 4;

fn buffer_size_for(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "expected {} bytes of RGBA data but got {}",
                    expected_size, buffer_size
                )
            }
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    x, y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Row-major straight RGBA pixels. A fresh buffer is transparent black.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; buffer_size_for(width, height)],
        }
    }

    pub fn from_data(
        width: u32,
        height: u32,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let expected_size = buffer_size_for(width, height);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            width,
            height,
            buffer,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        let index = self.index_of(i64::from(x), i64::from(y))?;
        let px = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour::rgba(px[0], px[1], px[2], px[3]))
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.checked_index(x, y)?;
        write_pixel(&mut self.buffer[index..index + BYTES_PER_PIXEL], colour);

        Ok(())
    }

    /// Composites `colour` over the existing pixel.
    pub fn blend_pixel(&mut self, x: i64, y: i64, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.checked_index(x, y)?;
        blend_into(&mut self.buffer[index..index + BYTES_PER_PIXEL], colour);

        Ok(())
    }

    fn checked_index(&self, x: i64, y: i64) -> Result<usize, PixelBufferError> {
        self.index_of(x, y)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }

        Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

/// Overwrites one RGBA pixel slot.
pub fn write_pixel(pixel: &mut [u8], colour: Colour) {
    pixel[0] = colour.r;
    pixel[1] = colour.g;
    pixel[2] = colour.b;
    pixel[3] = colour.a;
}

/// Source-over composites `colour` onto one RGBA pixel slot.
pub fn blend_into(pixel: &mut [u8], colour: Colour) {
    let destination = Colour::rgba(pixel[0], pixel[1], pixel[2], pixel[3]);
    write_pixel(pixel, colour.over(destination));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_transparent_buffer() {
        let buffer = PixelBuffer::new(10, 10);

        assert_eq!(buffer.buffer_size(), 400); // 10 * 10 * 4
        assert!(buffer.buffer().iter().all(|&b| b == 0));
        assert_eq!(buffer.row_bytes(), 40);
    }

    #[test]
    fn test_zero_sized_buffer_is_empty() {
        let buffer = PixelBuffer::new(0, 0);

        assert!(buffer.is_empty());
        assert_eq!(buffer.pixel(0, 0), None);
    }

    #[test]
    fn test_from_data_valid() {
        let data: Vec<u8> = vec![
            255, 0, 0, 255, // (0,0) red
            0, 255, 0, 255, // (1,0) green
        ];

        let buffer = PixelBuffer::from_data(2, 1, data.clone()).unwrap();

        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.pixel(1, 0), Some(Colour::rgb(0, 255, 0)));
    }

    #[test]
    fn test_from_data_wrong_size() {
        let result = PixelBuffer::from_data(2, 2, vec![0; 12]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                expected_size: 16,
                buffer_size: 12
            }
        );
    }

    #[test]
    fn test_set_pixel_bottom_right_corner() {
        let mut buffer = PixelBuffer::new(3, 3);
        let blue = Colour::rgb(0, 0, 255);

        buffer.set_pixel(2, 2, blue).unwrap();

        assert_eq!(&buffer.buffer()[32..36], &[0, 0, 255, 255]);
        assert_eq!(buffer.pixel(2, 2), Some(blue));
    }

    #[test]
    fn test_set_pixel_outside_bounds() {
        let mut buffer = PixelBuffer::new(3, 3);
        let result = buffer.set_pixel(-1, 1, Colour::WHITE);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds {
                x: -1,
                y: 1,
                width: 3,
                height: 3
            })
        );
        assert_eq!(
            buffer.set_pixel(3, 0, Colour::WHITE).unwrap_err().to_string(),
            "pixel at x:3, y:0 outside of 3x3 buffer"
        );
    }

    #[test]
    fn test_blend_pixel_over_transparent() {
        let mut buffer = PixelBuffer::new(1, 1);
        let half_red = Colour::rgba(255, 0, 0, 128);

        buffer.blend_pixel(0, 0, half_red).unwrap();

        assert_eq!(buffer.pixel(0, 0), Some(half_red));
    }
}
