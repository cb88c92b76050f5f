//! segment-cli - 4-digit 7-segment display driver
//!
//! Shows each line read from stdin on a multiplexed LED display wired to
//! the Raspberry Pi GPIO header. Text longer than four characters scrolls
//! across the digits. Closing stdin, Ctrl-C or SIGTERM blanks the display
//! and exits.
//!
//! The render loop runs on the main thread and owns every pin; a second
//! thread reads stdin and replaces the shared display text.

use std::io::stdin;
use std::thread;

use anyhow::Context;
use log::{error, info, warn};
use rppal::gpio::Gpio;

use segment_core::config::LengthPolicy;
use segment_core::DisplayState;
use segment_hal_rpi::{wire, ThreadDelay};

use crate::args::{Args, USAGE};
use crate::channels::{DISPLAY_STATE, SHUTDOWN};
use crate::config::load_config;

mod args;
mod channels;
mod config;
mod tasks;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse(std::env::args().skip(1)).context(USAGE)?;
    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let mut config = load_config(args.config.as_deref())?;
    if args.strict {
        config.length_policy = LengthPolicy::Reject;
    }
    info!(
        "Config loaded: digits {:?}, segments {:?}, {:?}, {:?}",
        config.pins.digits(),
        config.pins.segments(),
        config.polarity,
        config.length_policy
    );

    // Nothing is rendered unless every pin could be taken
    let gpio = Gpio::new().context("failed to open the GPIO peripheral (is /dev/gpiomem accessible?)")?;
    let pins = wire(&gpio, &config.pins, config.polarity).context("failed to take display pins")?;
    info!("GPIO initialized");

    let state: &'static DisplayState =
        DISPLAY_STATE.init(DisplayState::with_policy(config.length_policy));
    if let Err(e) = state.update(&args.text) {
        warn!("Initial text {:?} not shown: {}", args.text, e);
    }

    // Ctrl-C and SIGTERM take the same path as end of input
    ctrlc::set_handler(|| {
        info!("Termination signal received");
        SHUTDOWN.signal(());
    })
    .context("failed to install signal handler")?;

    thread::Builder::new()
        .name("input".into())
        .spawn(move || {
            if let Err(e) = tasks::input_task(stdin().lock(), state) {
                error!("Failed to read stdin: {}", e);
            }
            SHUTDOWN.signal(());
        })
        .context("failed to spawn input thread")?;

    tasks::render_task(
        pins.digits,
        pins.segments,
        ThreadDelay,
        state,
        &config.timing,
        &SHUTDOWN,
    )
    .inspect_err(|e| error!("Display failed: {}", e))
    .context("display driver failed")?;

    info!("Display blanked, exiting");
    Ok(())
}
