use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Writes a finished drawing somewhere durable; the sink behind "download".
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()>;
}
