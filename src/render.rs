use crate::color::{hsv_to_rgba, Rgba};

// ============================================================================
// RANGE MODEL
// ============================================================================

/// Accepted HSV tolerance band, every bound on the 0..=255 scale.
///
/// Bounds are not validated. A band with `min_hue > max_hue` wraps around
/// red; any other inverted bound simply produces an empty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HsvRange {
    pub min_hue: i32,
    pub max_hue: i32,
    pub min_saturation: i32,
    pub max_saturation: i32,
    pub min_value: i32,
    pub max_value: i32,
}

impl HsvRange {
    pub const FULL: HsvRange = HsvRange {
        min_hue: 0,
        max_hue: 255,
        min_saturation: 0,
        max_saturation: 255,
        min_value: 0,
        max_value: 255,
    };

    /// Hue drawn in the value bar: the middle of the hue band.
    pub fn bar_hue(&self) -> i32 {
        if self.min_hue < self.max_hue {
            (self.min_hue + self.max_hue) / 2
        } else {
            ((self.max_hue - self.min_hue) / 2) & 0xff
        }
    }
}

// ============================================================================
// CORE DATA TYPES
// ============================================================================

/// Mutable RGBA frame the renderer draws into
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    /// Wraps a row-major RGBA buffer; `None` when it is shorter than
    /// `width * height * 4` bytes.
    pub fn new(frame: &'a mut [u8], width: usize, height: usize) -> Option<Self> {
        let needed = width.checked_mul(height)?.checked_mul(4)?;
        if frame.len() < needed {
            return None;
        }
        Some(Self {
            frame,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn clear(&mut self) {
        self.frame.fill(0);
    }

    fn put(&mut self, x: usize, y: usize, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = (y * self.width + x) * 4;
        if let Some(pixel) = self.frame.get_mut(idx..idx + 4) {
            pixel.copy_from_slice(&color.to_bytes());
        }
    }
}

/// Rendered indicator, row-major RGBA with straight alpha
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl IndicatorImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        let mut bytes = [0u8; 4];
        bytes.copy_from_slice(&self.data[idx..idx + 4]);
        Some(Rgba::from_bytes(bytes))
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Layout shared by the wheel and the value bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub diameter: usize,
    pub unit: usize,
    pub radius: f64,
}

impl Layout {
    pub fn new(width: usize, height: usize) -> Self {
        let diameter = width.min(height);
        Self {
            diameter,
            unit: diameter / 5,
            radius: diameter as f64 / 2.0,
        }
    }

    /// Horizontal extent `[x0, x1)` of the value bar, clipped to the surface.
    pub fn bar_columns(&self, width: usize) -> (usize, usize) {
        let x0 = self.diameter + self.unit;
        let x1 = (self.diameter + 2 * self.unit).min(width);
        (x0, x1)
    }
}

/// Inputs computed for a single wheel pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSample {
    /// [0, 255), counter-clockwise from the positive x-axis
    pub hue: f64,
    /// [0, 255), proportional to the distance from the center
    pub saturation: f64,
    pub edge_alpha: f64,
    /// How centrally the pixel sits inside the hue/saturation band, [0, 1]
    pub included: f64,
    pub alpha: f64,
}

/// Samples the wheel at `(x, y)`; `None` outside the disc.
pub fn wheel_sample(x: usize, y: usize, layout: &Layout, range: &HsvRange) -> Option<WheelSample> {
    let radius = layout.radius;
    let dx = x as f64 - radius;
    let dy = y as f64 - radius;
    let r = (dx * dx + dy * dy).sqrt();
    if r >= radius {
        return None;
    }

    let saturation = 255.0 * r / radius;
    let hue = 255.0 * (1.0 + (-dy).atan2(dx) / std::f64::consts::TAU).rem_euclid(1.0);
    let edge_alpha = (radius - r).min(1.0);

    let d_hue = r / 64.0;
    let d_sat = radius / 255.0;
    let (min_hue, max_hue) = (range.min_hue as f64, range.max_hue as f64);
    let hue_distance = if range.min_hue <= range.max_hue {
        (hue - min_hue).min(max_hue - hue)
    } else {
        (hue - min_hue).max(max_hue - hue)
    };
    let sat_distance = (saturation - range.min_saturation as f64)
        .min(range.max_saturation as f64 - saturation);
    let included = (d_hue * hue_distance)
        .min(d_sat * sat_distance)
        .clamp(0.0, 1.0);

    Some(WheelSample {
        hue,
        saturation,
        edge_alpha,
        included,
        alpha: edge_alpha * (included * 0.8 + 0.2),
    })
}

/// Inputs computed for one row of the value bar
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRow {
    pub value: i32,
    pub hue: i32,
    pub included: f64,
    pub alpha: f64,
}

/// Samples the value bar at row `y`.
pub fn bar_row(y: usize, layout: &Layout, range: &HsvRange) -> BarRow {
    let diameter = layout.diameter as i32;
    let value = 255 - 255 * y as i32 / diameter.max(1);
    let d_val = layout.diameter as f64 / 255.0;
    let included = (d_val * (value - range.min_value).min(range.max_value - value) as f64)
        .clamp(0.0, 1.0);

    BarRow {
        value,
        hue: range.bar_hue(),
        included,
        alpha: included * 0.8 + 0.2,
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Renders the indicator into a freshly allocated image of `width` x `height`.
pub fn render_indicator(range: &HsvRange, enabled: bool, width: u32, height: u32) -> IndicatorImage {
    let mut data = vec![0u8; width as usize * height as usize * 4];
    if let Some(mut canvas) = Canvas::new(&mut data, width as usize, height as usize) {
        render_into(&mut canvas, range, enabled);
    }
    IndicatorImage {
        width,
        height,
        data,
    }
}

/// Draws the wheel and the value bar; pixels outside both stay untouched.
pub fn render_into(canvas: &mut Canvas, range: &HsvRange, enabled: bool) {
    let layout = Layout::new(canvas.width, canvas.height);
    if layout.diameter == 0 {
        return;
    }
    render_wheel(canvas, &layout, range, enabled);
    render_value_bar(canvas, &layout, range, enabled);
}

fn render_wheel(canvas: &mut Canvas, layout: &Layout, range: &HsvRange, enabled: bool) {
    for y in 0..layout.diameter {
        for x in 0..layout.diameter {
            if let Some(sample) = wheel_sample(x, y, layout, range) {
                let saturation = if enabled { sample.saturation as i32 } else { 0 };
                let color = hsv_to_rgba(
                    sample.hue as i32,
                    saturation,
                    range.max_value,
                    (255.0 * sample.alpha) as i32,
                );
                canvas.put(x, y, color);
            }
        }
    }
}

fn render_value_bar(canvas: &mut Canvas, layout: &Layout, range: &HsvRange, enabled: bool) {
    let (x0, x1) = layout.bar_columns(canvas.width);
    if x1 <= x0 {
        return;
    }
    let span = (x1 - x0) as f64;
    let sat_span = (range.max_saturation - range.min_saturation) as f64;

    for y in 0..layout.diameter {
        let row = bar_row(y, layout, range);
        let alpha = (255.0 * row.alpha) as i32;
        for x in x0..x1 {
            let t = (x - x0) as f64 / span;
            let saturation = if enabled && row.included > 0.0 {
                (t * sat_span + range.min_saturation as f64) as i32
            } else {
                0
            };
            canvas.put(x, y, hsv_to_rgba(row.hue, saturation, row.value, alpha));
        }
    }
}
