use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use infinity_clock_core::{
    config::ClockConfig, fps::FpsTracker, host::ClockHost, lights::BlendMode,
};
use infinity_clock_terminal::{LocalTime, TerminalStrip};
use log::*;

/// Show the infinity clock in a terminal
#[derive(Parser)]
#[command(version)]
struct Args {
    /// light on the strip that sits at 12 o'clock
    #[arg(long, default_value = "0")]
    offset: u8,

    /// frames per second
    #[arg(long, default_value = "50")]
    fps: u32,

    /// clip overlapping hands at full brightness instead of wrapping around
    #[arg(long)]
    saturate: bool,

    /// stop after this many frames. 0 runs forever
    #[arg(long, default_value = "0")]
    frames: u64,

    /// pretend the time source takes this long to sync
    #[arg(long, default_value = "2000")]
    sync_delay_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args = Args::parse();

    info!("hello, world!");

    let config = ClockConfig {
        offset: args.offset,
        blend: if args.saturate {
            BlendMode::Saturating
        } else {
            BlendMode::Wrapping
        },
        ..Default::default()
    };

    let source = LocalTime::new(Duration::from_millis(args.sync_delay_ms));
    let strip = TerminalStrip::new(std::io::stdout());

    let mut host = ClockHost::new(config, source, strip);
    let mut fps = FpsTracker::new();

    let frame_time = Duration::from_secs(1) / args.fps.max(1);
    let started = Instant::now();

    loop {
        // the renderer expects this to wrap like a microcontroller's counter
        let now_ms = started.elapsed().as_millis() as u32;

        host.tick(now_ms)?;

        fps.tick();

        if args.frames != 0 && host.frames() >= args.frames {
            break;
        }

        thread::sleep(frame_time);
    }

    // leave the last frame on screen
    println!();

    debug!("drew {} frames", host.frames());

    Ok(())
}
