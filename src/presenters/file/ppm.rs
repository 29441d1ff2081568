use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::Write;
use std::path::Path;

/// Binary PPM (P6) export. PPM has no alpha channel, so the drawing is
/// composited over an opaque background first.
pub struct PpmFilePresenter {
    background: Colour,
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: &Path) -> std::io::Result<()> {
        if let Some(parent) = filepath.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::io::BufWriter::new(std::fs::File::create(filepath)?);
        self.write_to(buffer, &mut file)?;
        file.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    /// Composites over white, the page colour behind a transparent canvas.
    pub fn new() -> Self {
        Self::with_background(Colour::WHITE)
    }

    pub fn with_background(background: Colour) -> Self {
        Self {
            background: background.with_alpha(255),
        }
    }

    pub fn write_to(&self, buffer: &PixelBuffer, writer: &mut impl Write) -> std::io::Result<()> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
        writeln!(writer, "255")?;

        let mut rgb = Vec::with_capacity(buffer.buffer_size() / 4 * 3);
        for px in buffer.buffer().chunks_exact(4) {
            let colour = Colour::rgba(px[0], px[1], px[2], px[3]).over(self.background);
            rgb.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }

        writer.write_all(&rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_and_composited_pixels() {
        let buffer = PixelBuffer::from_data(
            2,
            1,
            vec![
                255, 0, 0, 255, // opaque red
                0, 0, 0, 0, // transparent
            ],
        )
        .unwrap();
        let mut out = Vec::new();

        PpmFilePresenter::new().write_to(&buffer, &mut out).unwrap();

        let header = b"P6\n2 1\n255\n";
        assert_eq!(&out[..header.len()], header);
        assert_eq!(&out[header.len()..], &[255, 0, 0, 255, 255, 255]);
    }

    #[test]
    fn test_custom_background_is_forced_opaque() {
        let buffer = PixelBuffer::new(1, 1);
        let mut out = Vec::new();

        PpmFilePresenter::with_background(Colour::rgba(0, 0, 0, 0))
            .write_to(&buffer, &mut out)
            .unwrap();

        assert_eq!(&out[out.len() - 3..], &[0, 0, 0]);
    }

    #[test]
    fn test_present_writes_file_creating_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sketch.ppm");
        let buffer = PixelBuffer::new(3, 2);

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(bytes.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
