use crate::render::{render_indicator, HsvRange};
use crate::surface::{Size, Surface};

/// Smallest size the indicator asks its layout for
pub const MIN_PREFERRED_SIZE: Size = Size::new(192, 128);

/// Command enum for type-safe indicator updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorCommand {
    SetMinHue(i32),
    SetMaxHue(i32),
    SetMinSaturation(i32),
    SetMaxSaturation(i32),
    SetMinValue(i32),
    SetMaxValue(i32),
    SetRange(HsvRange),
    SetEnabled(bool),
}

/// HSV tolerance band indicator: a hue/saturation wheel plus a value bar.
///
/// Every setter stores the new value and asks the surface for a redraw; the
/// actual drawing happens in [`HsvIndicator::paint`] when the host calls back.
#[derive(Debug)]
pub struct HsvIndicator<S: Surface> {
    surface: S,
    range: HsvRange,
    enabled: bool,
}

impl<S: Surface> HsvIndicator<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            range: HsvRange::default(),
            enabled: true,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn range(&self) -> HsvRange {
        self.range
    }

    pub fn set_range(&mut self, range: HsvRange) {
        self.range = range;
        self.surface.request_redraw();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        self.surface.request_redraw();
    }

    pub fn min_hue(&self) -> i32 {
        self.range.min_hue
    }

    pub fn set_min_hue(&mut self, min_hue: i32) {
        self.range.min_hue = min_hue;
        self.surface.request_redraw();
    }

    pub fn max_hue(&self) -> i32 {
        self.range.max_hue
    }

    pub fn set_max_hue(&mut self, max_hue: i32) {
        self.range.max_hue = max_hue;
        self.surface.request_redraw();
    }

    pub fn min_saturation(&self) -> i32 {
        self.range.min_saturation
    }

    pub fn set_min_saturation(&mut self, min_saturation: i32) {
        self.range.min_saturation = min_saturation;
        self.surface.request_redraw();
    }

    pub fn max_saturation(&self) -> i32 {
        self.range.max_saturation
    }

    pub fn set_max_saturation(&mut self, max_saturation: i32) {
        self.range.max_saturation = max_saturation;
        self.surface.request_redraw();
    }

    pub fn min_value(&self) -> i32 {
        self.range.min_value
    }

    pub fn set_min_value(&mut self, min_value: i32) {
        self.range.min_value = min_value;
        self.surface.request_redraw();
    }

    pub fn max_value(&self) -> i32 {
        self.range.max_value
    }

    pub fn set_max_value(&mut self, max_value: i32) {
        self.range.max_value = max_value;
        self.surface.request_redraw();
    }

    /// Layout hint raised to at least [`MIN_PREFERRED_SIZE`].
    pub fn preferred_size(&self, hint: Size) -> Size {
        hint.max(MIN_PREFERRED_SIZE)
    }

    pub fn apply(&mut self, command: IndicatorCommand) {
        match command {
            IndicatorCommand::SetMinHue(value) => self.set_min_hue(value),
            IndicatorCommand::SetMaxHue(value) => self.set_max_hue(value),
            IndicatorCommand::SetMinSaturation(value) => self.set_min_saturation(value),
            IndicatorCommand::SetMaxSaturation(value) => self.set_max_saturation(value),
            IndicatorCommand::SetMinValue(value) => self.set_min_value(value),
            IndicatorCommand::SetMaxValue(value) => self.set_max_value(value),
            IndicatorCommand::SetRange(range) => self.set_range(range),
            IndicatorCommand::SetEnabled(enabled) => self.set_enabled(enabled),
        }
    }

    /// Draw callback: renders at the surface's current size and blits.
    pub fn paint(&mut self) {
        let size = self.surface.size();
        if size.is_empty() {
            return;
        }
        log::trace!("painting indicator at {}x{}", size.width, size.height);
        let image = render_indicator(&self.range, self.enabled, size.width, size.height);
        self.surface
            .blit(image.as_bytes(), image.width(), image.height());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_indicator;
    use crate::surface::testing::RecordingSurface;

    fn indicator(width: u32, height: u32) -> HsvIndicator<RecordingSurface> {
        HsvIndicator::new(RecordingSurface::with_size(width, height))
    }

    #[test]
    fn starts_zeroed_and_enabled() {
        let indicator = indicator(192, 128);
        assert_eq!(indicator.range(), HsvRange::default());
        assert_eq!(indicator.min_hue(), 0);
        assert_eq!(indicator.max_value(), 0);
        assert!(indicator.is_enabled());
        assert_eq!(indicator.surface().redraws.get(), 0);
    }

    #[test]
    fn every_setter_requests_one_redraw() {
        let mut indicator = indicator(192, 128);
        indicator.set_min_hue(10);
        indicator.set_max_hue(20);
        indicator.set_min_saturation(30);
        indicator.set_max_saturation(40);
        indicator.set_min_value(50);
        indicator.set_max_value(60);
        indicator.set_enabled(false);
        assert_eq!(indicator.surface().redraws.get(), 7);

        assert_eq!(indicator.min_hue(), 10);
        assert_eq!(indicator.max_hue(), 20);
        assert_eq!(indicator.min_saturation(), 30);
        assert_eq!(indicator.max_saturation(), 40);
        assert_eq!(indicator.min_value(), 50);
        assert_eq!(indicator.max_value(), 60);
        assert!(!indicator.is_enabled());
    }

    #[test]
    fn commands_map_to_setters() {
        let mut indicator = indicator(192, 128);
        indicator.apply(IndicatorCommand::SetRange(HsvRange::FULL));
        assert_eq!(indicator.range(), HsvRange::FULL);
        assert_eq!(indicator.surface().redraws.get(), 1);

        indicator.apply(IndicatorCommand::SetMinHue(200));
        indicator.apply(IndicatorCommand::SetMaxSaturation(17));
        indicator.apply(IndicatorCommand::SetEnabled(false));
        assert_eq!(indicator.min_hue(), 200);
        assert_eq!(indicator.max_saturation(), 17);
        assert!(!indicator.is_enabled());
        assert_eq!(indicator.surface().redraws.get(), 4);
    }

    #[test]
    fn preferred_size_has_a_floor() {
        let indicator = indicator(10, 10);
        assert_eq!(indicator.preferred_size(Size::default()), Size::new(192, 128));
        assert_eq!(indicator.preferred_size(Size::new(50, 400)), Size::new(192, 400));
        assert_eq!(indicator.preferred_size(Size::new(640, 480)), Size::new(640, 480));
    }

    #[test]
    fn paint_blits_full_surface() {
        let mut indicator = indicator(300, 150);
        indicator.set_range(HsvRange::FULL);
        indicator.paint();

        let surface = indicator.surface();
        assert_eq!(surface.blits, 1);
        let (frame, width, height) = surface.last_frame.clone().unwrap();
        assert_eq!((width, height), (300, 150));
        assert_eq!(frame.len(), 300 * 150 * 4);

        let expected = render_indicator(&HsvRange::FULL, true, 300, 150);
        assert_eq!(frame.as_slice(), expected.as_bytes());
    }

    #[test]
    fn paint_on_empty_surface_is_a_no_op() {
        let mut indicator = indicator(0, 128);
        indicator.paint();
        assert_eq!(indicator.surface().blits, 0);
    }

    #[test]
    fn paint_follows_surface_resize() {
        let mut indicator = indicator(192, 128);
        indicator.paint();
        indicator.surface_mut().size = Size::new(400, 200);
        indicator.paint();
        let (_, width, height) = indicator.surface().last_frame.clone().unwrap();
        assert_eq!((width, height), (400, 200));
    }
}
