use std::sync::mpsc::Receiver;
use std::time::Instant;

use pixels::{Pixels, SurfaceTexture};
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use crate::color::Color;
use crate::config::IndicatorConfig;
use crate::error::IndicatorError;
use crate::indicator::{HsvIndicator, IndicatorCommand, MIN_PREFERRED_SIZE};
use crate::surface::{Size, Surface};

// ============================================================================
// PIXELS SURFACE
// ============================================================================

/// [`Surface`] backed by a winit window and a `pixels` frame buffer
pub struct PixelsSurface<'win> {
    window: &'win Window,
    pixels: Pixels<'win>,
    size: Size,
    background: Color,
}

impl<'win> PixelsSurface<'win> {
    pub fn new(window: &'win Window, background: Color) -> Result<Self, IndicatorError> {
        let inner = window.inner_size();
        let surface_texture = SurfaceTexture::new(inner.width, inner.height, window);
        let pixels = Pixels::new(inner.width, inner.height, surface_texture)?;
        Ok(Self {
            window,
            pixels,
            size: Size::new(inner.width, inner.height),
            background,
        })
    }

    /// Follow a window resize. Zero sizes (minimized windows) keep the old
    /// buffer around; painting is skipped until a real size comes back. The
    /// reported size only changes once the buffer has been resized.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        let requested = Size::new(new_size.width, new_size.height);
        let pixels = &mut self.pixels;
        let resized = track_resize(&mut self.size, requested, || {
            log::debug!("resizing frame buffer to {}x{}", new_size.width, new_size.height);
            pixels.resize_buffer(new_size.width, new_size.height)
        });
        if !resized {
            return;
        }
        if let Err(err) = self.pixels.resize_surface(new_size.width, new_size.height) {
            log::warn!("failed to resize pixel surface: {err}");
        }
    }

    /// Push the frame buffer to the screen.
    pub fn present(&self) -> Result<(), IndicatorError> {
        self.pixels.render()?;
        Ok(())
    }
}

impl Surface for PixelsSurface<'_> {
    fn request_redraw(&self) {
        self.window.request_redraw();
    }

    fn size(&self) -> Size {
        self.size
    }

    fn blit(&mut self, rgba: &[u8], width: u32, height: u32) {
        let size = self.size;
        composite_over(
            self.pixels.frame_mut(),
            size,
            rgba,
            Size::new(width, height),
            self.background,
        );
    }
}

/// Move `size` to `requested` once the frame buffer follows. Empty sizes are
/// taken as-is without touching the buffer. Returns whether the buffer was
/// resized.
fn track_resize<E: std::fmt::Display>(
    size: &mut Size,
    requested: Size,
    resize_buffer: impl FnOnce() -> Result<(), E>,
) -> bool {
    if requested.is_empty() {
        *size = requested;
        return false;
    }
    match resize_buffer() {
        Ok(()) => {
            *size = requested;
            true
        }
        Err(err) => {
            log::warn!("failed to resize pixel buffer: {err}");
            false
        }
    }
}

// ============================================================================
// COMPOSITING
// ============================================================================

/// Alpha-blend a straight-alpha RGBA image over an opaque background into
/// `frame`, nearest-neighbour scaling when the two sizes differ.
pub fn composite_over(frame: &mut [u8], frame_size: Size, src: &[u8], src_size: Size, background: Color) {
    let (fw, fh) = (frame_size.width as usize, frame_size.height as usize);
    let (sw, sh) = (src_size.width as usize, src_size.height as usize);
    if fw == 0 || fh == 0 || frame.len() < fw * fh * 4 {
        return;
    }
    let (bg_r, bg_g, bg_b) = background.as_tuple();

    for (y, row) in frame.chunks_exact_mut(fw * 4).take(fh).enumerate() {
        for (x, out) in row.chunks_exact_mut(4).enumerate() {
            let pixel = if sw == 0 || sh == 0 {
                [0, 0, 0, 0]
            } else {
                let sx = x * sw / fw;
                let sy = y * sh / fh;
                let idx = (sy * sw + sx) * 4;
                match src.get(idx..idx + 4) {
                    Some(p) => [p[0], p[1], p[2], p[3]],
                    None => [0, 0, 0, 0],
                }
            };
            let a = pixel[3] as f32 / 255.0;
            let blend = |s: u8, d: u8| (s as f32 * a + d as f32 * (1.0 - a)).round() as u8;
            out.copy_from_slice(&[
                blend(pixel[0], bg_r),
                blend(pixel[1], bg_g),
                blend(pixel[2], bg_b),
                0xff,
            ]);
        }
    }
}

// ============================================================================
// WINDOW HOST
// ============================================================================

/// Native window showing a single [`HsvIndicator`]
#[derive(Debug, Clone)]
pub struct IndicatorWindow {
    config: IndicatorConfig,
}

impl IndicatorWindow {
    pub fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }

    pub fn show(&self) -> Result<(), IndicatorError> {
        self.run_window(None)
    }

    /// Show the window and apply commands sent over `receiver` as they arrive.
    pub fn show_with_commands(
        &self,
        receiver: Receiver<IndicatorCommand>,
    ) -> Result<(), IndicatorError> {
        self.run_window(Some(receiver))
    }

    fn run_window(&self, receiver: Option<Receiver<IndicatorCommand>>) -> Result<(), IndicatorError> {
        let size = self.config.window_size();

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(size.width as f64, size.height as f64))
            .with_min_inner_size(LogicalSize::new(
                MIN_PREFERRED_SIZE.width as f64,
                MIN_PREFERRED_SIZE.height as f64,
            ))
            .with_resizable(self.config.resizable)
            .build(&event_loop)?;
        log::debug!("opened indicator window '{}'", self.config.title);

        let surface = PixelsSurface::new(&window, self.config.background_color)?;
        let mut indicator = HsvIndicator::new(surface);
        indicator.set_range(self.config.initial_range);
        indicator.set_enabled(self.config.enabled);

        let frame_duration = self.config.frame_duration();
        let mut last_frame = Instant::now();
        let mut failure: Option<IndicatorError> = None;

        event_loop.run(|event, window_target| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    log::debug!("indicator window closed");
                    window_target.exit();
                }
                WindowEvent::Resized(new_size) => {
                    indicator.surface_mut().resize(new_size);
                    indicator.surface().request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    if indicator.surface().size().is_empty() {
                        return;
                    }
                    indicator.paint();
                    if let Err(err) = indicator.surface().present() {
                        log::error!("failed to present frame: {err}");
                        failure = Some(err);
                        window_target.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                if let Some(ref receiver) = receiver {
                    if last_frame.elapsed() >= frame_duration {
                        while let Ok(command) = receiver.try_recv() {
                            indicator.apply(command);
                        }
                        last_frame = Instant::now();
                    }
                    window_target.set_control_flow(ControlFlow::WaitUntil(last_frame + frame_duration));
                } else {
                    window_target.set_control_flow(ControlFlow::Wait);
                }
            }
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_pixels_show_background() {
        let mut frame = vec![0u8; 2 * 2 * 4];
        let src = vec![0u8; 2 * 2 * 4];
        composite_over(&mut frame, Size::new(2, 2), &src, Size::new(2, 2), Color::new(10, 20, 30));
        for px in frame.chunks_exact(4) {
            assert_eq!(px, &[10, 20, 30, 255]);
        }
    }

    #[test]
    fn opaque_pixels_replace_background() {
        let mut frame = vec![0u8; 4];
        let src = [200, 100, 50, 255];
        composite_over(&mut frame, Size::new(1, 1), &src, Size::new(1, 1), Color::WHITE);
        assert_eq!(frame, vec![200, 100, 50, 255]);
    }

    #[test]
    fn partial_alpha_blends() {
        let mut frame = vec![0u8; 4];
        let src = [0, 0, 0, 51];
        composite_over(&mut frame, Size::new(1, 1), &src, Size::new(1, 1), Color::WHITE);
        // 20% black over white
        assert_eq!(frame, vec![204, 204, 204, 255]);
    }

    #[test]
    fn scales_when_sizes_differ() {
        // 2x1 source stretched to 4x2
        let src = [255, 0, 0, 255, 0, 0, 255, 255];
        let mut frame = vec![0u8; 4 * 2 * 4];
        composite_over(&mut frame, Size::new(4, 2), &src, Size::new(2, 1), Color::WHITE);
        for row in frame.chunks_exact(16) {
            assert_eq!(&row[0..4], &[255, 0, 0, 255]);
            assert_eq!(&row[4..8], &[255, 0, 0, 255]);
            assert_eq!(&row[8..12], &[0, 0, 255, 255]);
            assert_eq!(&row[12..16], &[0, 0, 255, 255]);
        }
    }

    #[test]
    fn failed_buffer_resize_keeps_old_size() {
        let mut size = Size::new(384, 256);
        let resized = track_resize(&mut size, Size::new(800, 600), || Err("out of memory"));
        assert!(!resized);
        assert_eq!(size, Size::new(384, 256));
    }

    #[test]
    fn successful_buffer_resize_updates_size() {
        let mut size = Size::new(384, 256);
        let resized = track_resize(&mut size, Size::new(800, 600), || Ok::<(), String>(()));
        assert!(resized);
        assert_eq!(size, Size::new(800, 600));
    }

    #[test]
    fn minimized_window_skips_buffer_resize() {
        let mut size = Size::new(384, 256);
        let mut called = false;
        let resized = track_resize(&mut size, Size::new(0, 0), || {
            called = true;
            Ok::<(), String>(())
        });
        assert!(!resized);
        assert!(!called);
        assert!(size.is_empty());
    }

    #[test]
    fn short_frame_is_left_alone() {
        let mut frame = vec![7u8; 4];
        composite_over(&mut frame, Size::new(2, 2), &[0; 16], Size::new(2, 2), Color::WHITE);
        assert_eq!(frame, vec![7, 7, 7, 7]);
    }
}
