/// Width and height in device-independent units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Componentwise maximum of both sizes.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// What the indicator needs from whatever hosts it on screen.
pub trait Surface {
    /// Ask the host to schedule a repaint.
    fn request_redraw(&self);

    /// Current drawable size.
    fn size(&self) -> Size;

    /// Present a row-major RGBA buffer with straight alpha. Hosts composite
    /// it over their background and scale it when `width`/`height` differ
    /// from [`Surface::size`].
    fn blit(&mut self, rgba: &[u8], width: u32, height: u32);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{Size, Surface};
    use std::cell::Cell;

    /// Records redraw requests and the last blitted frame.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub size: Size,
        pub redraws: Cell<usize>,
        pub blits: usize,
        pub last_frame: Option<(Vec<u8>, u32, u32)>,
    }

    impl RecordingSurface {
        pub fn with_size(width: u32, height: u32) -> Self {
            Self {
                size: Size::new(width, height),
                ..Self::default()
            }
        }
    }

    impl Surface for RecordingSurface {
        fn request_redraw(&self) {
            self.redraws.set(self.redraws.get() + 1);
        }

        fn size(&self) -> Size {
            self.size
        }

        fn blit(&mut self, rgba: &[u8], width: u32, height: u32) {
            self.blits += 1;
            self.last_frame = Some((rgba.to_vec(), width, height));
        }
    }
}
