use rayon::prelude::*;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError, write_pixel};

/// Flattens `source` over an opaque `background` into `destination`, an
/// RGBA frame of the same size. Used to show the transparent canvas on a
/// window surface.
pub fn composite_over(
    source: &PixelBuffer,
    background: Colour,
    destination: &mut [u8],
) -> Result<(), PixelBufferError> {
    if destination.len() != source.buffer_size() {
        return Err(PixelBufferError::BoundsMismatch {
            expected_size: source.buffer_size(),
            buffer_size: destination.len(),
        });
    }

    let background = background.with_alpha(255);

    destination
        .par_chunks_exact_mut(4)
        .zip(source.buffer().par_chunks_exact(4))
        .for_each(|(dst, src)| {
            let colour = Colour::rgba(src[0], src[1], src[2], src[3]).over(background);
            write_pixel(dst, colour);
        });

    Ok(())
}
