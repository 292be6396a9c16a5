use bon::Builder;

use crate::color::Color;
use crate::indicator::MIN_PREFERRED_SIZE;
use crate::render::HsvRange;
use crate::surface::Size;

/// Window and presentation settings for the native host
#[derive(Debug, Clone, Builder)]
pub struct IndicatorConfig {
    #[builder(default = "HSV Indicator".to_string())]
    pub title: String,

    // Window configuration
    #[builder(default = 384)]
    pub window_width: u32,
    #[builder(default = 256)]
    pub window_height: u32,
    #[builder(default = true)]
    pub resizable: bool,
    #[builder(default = 60.0)]
    pub max_framerate: f64,

    // Colors
    #[builder(default = Color::WHITE)]
    pub background_color: Color,

    // Initial indicator state
    #[builder(default)]
    pub initial_range: HsvRange,
    #[builder(default = true)]
    pub enabled: bool,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl IndicatorConfig {
    /// Requested window size, never below the indicator's preferred size.
    pub fn window_size(&self) -> Size {
        Size::new(self.window_width, self.window_height).max(MIN_PREFERRED_SIZE)
    }

    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.max_framerate.max(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = IndicatorConfig::default();
        assert_eq!(config.title, "HSV Indicator");
        assert_eq!(config.window_size(), Size::new(384, 256));
        assert_eq!(config.background_color, Color::WHITE);
        assert_eq!(config.initial_range, HsvRange::default());
        assert!(config.enabled);
        assert!(config.resizable);
    }

    #[test]
    fn window_size_is_raised_to_preferred_minimum() {
        let config = IndicatorConfig::builder()
            .window_width(100)
            .window_height(500)
            .build();
        assert_eq!(config.window_size(), Size::new(192, 500));
    }

    #[test]
    fn builder_overrides() {
        let config = IndicatorConfig::builder()
            .title("Tolerance".to_string())
            .initial_range(HsvRange::FULL)
            .enabled(false)
            .max_framerate(30.0)
            .build();
        assert_eq!(config.title, "Tolerance");
        assert_eq!(config.initial_range, HsvRange::FULL);
        assert!(!config.enabled);
        approx::assert_abs_diff_eq!(config.frame_duration().as_secs_f64(), 1.0 / 30.0, epsilon = 1e-9);
    }

    #[test]
    fn frame_duration_survives_zero_framerate() {
        let config = IndicatorConfig::builder().max_framerate(0.0).build();
        assert_eq!(config.frame_duration(), std::time::Duration::from_secs(1));
    }
}
