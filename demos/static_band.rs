use hsv_indicator::{Color, HsvRange, IndicatorConfig, IndicatorWindow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A band around orange, as used for matching reddish resistor bodies
    let config = IndicatorConfig::builder()
        .title("Orange tolerance".to_string())
        .window_width(480)
        .window_height(320)
        .background_color(Color::new(0x30, 0x30, 0x30))
        .initial_range(HsvRange {
            min_hue: 240,
            max_hue: 25,
            min_saturation: 120,
            max_saturation: 255,
            min_value: 90,
            max_value: 255,
        })
        .build();

    IndicatorWindow::new(config).show()?;
    Ok(())
}
