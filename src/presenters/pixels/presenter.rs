use std::error::Error;

use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use winit::window::Window;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::raster::compose::composite_over;

/// Shows the canvas in a window with the egui panel drawn on top.
///
/// The pixels buffer follows the canvas' backing size, not the window's,
/// and is scaled onto the window surface. A canvas that has not been
/// cleared yet shows as plain background.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    surface_width: u32,
    surface_height: u32,
    buffer_width: u32,
    buffer_height: u32,
    background: Colour,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, background: Colour) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width.max(1), size.height.max(1), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            surface_width: size.width,
            surface_height: size.height,
            buffer_width: size.width.max(1),
            buffer_height: size.height.max(1),
            background: background.with_alpha(255),
        })
    }

    pub fn render(
        &mut self,
        canvas: &PixelBuffer,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), Box<dyn Error>> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.copy_canvas(canvas)?;

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the canvas underneath
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    /// The window surface changed size. Zero sizes (minimised) are ignored.
    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), Box<dyn Error>> {
        self.surface_width = width;
        self.surface_height = height;

        if width > 0 && height > 0 {
            self.pixels.resize_surface(width, height)?;
        }

        Ok(())
    }

    fn copy_canvas(&mut self, canvas: &PixelBuffer) -> Result<(), Box<dyn Error>> {
        if canvas.is_empty() {
            let background = [
                self.background.r,
                self.background.g,
                self.background.b,
                255,
            ];
            for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
                pixel.copy_from_slice(&background);
            }
            return Ok(());
        }

        if canvas.width() != self.buffer_width || canvas.height() != self.buffer_height {
            self.pixels.resize_buffer(canvas.width(), canvas.height())?;
            self.buffer_width = canvas.width();
            self.buffer_height = canvas.height();
        }

        composite_over(canvas, self.background, self.pixels.frame_mut())?;
        Ok(())
    }
}
