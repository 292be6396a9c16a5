use hsv_indicator::{HsvRange, IndicatorCommand, IndicatorConfig, IndicatorWindow};
use rand::Rng;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

fn random_band(rng: &mut impl Rng) -> HsvRange {
    let (min_hue, max_hue) = if rng.random_bool(0.25) {
        // wrapped band around red
        (rng.random_range(200..256), rng.random_range(0..50))
    } else {
        let min = rng.random_range(0..200);
        (min, rng.random_range(min..256))
    };
    let min_saturation = rng.random_range(0..180);
    let min_value = rng.random_range(0..180);
    HsvRange {
        min_hue,
        max_hue,
        min_saturation,
        max_saturation: rng.random_range(min_saturation..256),
        min_value,
        max_value: rng.random_range(min_value..256),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = IndicatorConfig::builder()
        .title("HSV Indicator Demo".to_string())
        .initial_range(HsvRange {
            min_hue: 20,
            max_hue: 60,
            min_saturation: 80,
            max_saturation: 255,
            min_value: 60,
            max_value: 240,
        })
        .build();
    let window = IndicatorWindow::new(config);

    // Create a channel for sending random commands
    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let mut rng = rand::rng();
        let mut enabled = true;
        loop {
            let mut commands = vec![IndicatorCommand::SetRange(random_band(&mut rng))];
            if rng.random_bool(0.1) {
                enabled = !enabled;
                commands.push(IndicatorCommand::SetEnabled(enabled));
            }

            if commands.into_iter().any(|cmd| sender.send(cmd).is_err()) {
                break;
            }

            thread::sleep(Duration::from_millis(500));
        }
    });

    log::info!("showing indicator with random tolerance bands, close the window to exit");
    window.show_with_commands(receiver)?;
    Ok(())
}
