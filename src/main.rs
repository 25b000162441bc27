//! Brickfall entry point
//!
//! Headless frame driver: runs one round with the autopilot on a synthetic
//! clock and prints the final frame as JSON.

use brickfall::Settings;
use brickfall::audio::{AudioMixer, LogSink};
use brickfall::autopilot::Autopilot;
use brickfall::sim::{GameEvent, GameState};

fn main() {
    env_logger::init();
    log::info!("Brickfall (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    if let Err(e) = run(&settings) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<(), brickfall::GameError> {
    let mut state = GameState::with_settings(settings);
    let mut audio = AudioMixer::new(LogSink, settings);
    let mut pilot = Autopilot::new(settings.demo_seed);

    let events = state.select(settings.difficulty)?;
    report(&events);
    audio.handle(&events);

    let mut now_ms = 0.0;
    for frame in 0..settings.demo_max_frames {
        now_ms += settings.frame_interval_ms;
        let mut events = state.advance_clock(now_ms);

        let intent = pilot.intent(&state.snapshot());
        state.set_horizontal_intent(intent);

        // The driver keeps calling tick after the round ends; rejections are expected
        match state.tick() {
            Ok(tick_events) => events.extend(tick_events),
            Err(e) => log::trace!("Frame {}: {}", frame, e),
        }

        report(&events);
        audio.handle(&events);

        if state.end_message.is_some() {
            break;
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "Finished round {} ({:?}), {}",
        snapshot.round,
        snapshot.phase,
        snapshot.score_text()
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::warn!("Snapshot serialization failed: {}", e),
    }
    Ok(())
}

fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::BrickBroken { .. } => log::debug!("{:?}", event),
            _ => log::info!("{:?}", event),
        }
    }
}
