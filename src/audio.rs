//! Audio cues
//!
//! The game never plays sound itself. Game events are mapped to cues, volume
//! is applied from settings, and the result goes to whatever `AudioSink` the
//! host provides.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Ball hit a brick
    BrickHit,
    /// Start the looping background track
    MusicStart,
    /// Stop the background track, optionally rewinding it
    MusicStop { rewind: bool },
}

impl AudioCue {
    /// Cue for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::BrickBroken { .. } => Some(AudioCue::BrickHit),
            GameEvent::RoundStarted { .. } => Some(AudioCue::MusicStart),
            GameEvent::RoundEndShown { .. } | GameEvent::ReturnedToMenu => {
                Some(AudioCue::MusicStop { rewind: true })
            }
            GameEvent::RoundWon { .. } | GameEvent::RoundLost { .. } => None,
        }
    }

    fn is_music(&self) -> bool {
        !matches!(self, AudioCue::BrickHit)
    }
}

/// Host-side audio output
pub trait AudioSink {
    /// Play (or stop) a cue at the given volume (0.0 - 1.0)
    fn play(&mut self, cue: AudioCue, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: AudioCue, volume: f32) {
        log::debug!("Audio cue {:?} at volume {:.2}", cue, volume);
    }
}

/// Applies volume settings and forwards cues to a sink
pub struct AudioMixer<S: AudioSink> {
    sink: S,
    settings: Settings,
}

impl<S: AudioSink> AudioMixer<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        Self {
            sink,
            settings: settings.clone(),
        }
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    fn effective_volume(&self, cue: AudioCue) -> f32 {
        let channel = if cue.is_music() {
            self.settings.music_volume
        } else {
            self.settings.sfx_volume
        };
        (self.settings.effective_master() * channel).clamp(0.0, 1.0)
    }

    /// Route the cues for a batch of events
    pub fn handle(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(AudioCue::for_event) {
            let volume = self.effective_volume(cue);
            // Stops always go through so muting mid-round cannot leave music running
            if volume > 0.0 || matches!(cue, AudioCue::MusicStop { .. }) {
                self.sink.play(cue, volume);
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Difficulty;

    #[derive(Default)]
    struct Recorder(Vec<(AudioCue, f32)>);

    impl AudioSink for Recorder {
        fn play(&mut self, cue: AudioCue, volume: f32) {
            self.0.push((cue, volume));
        }
    }

    fn round_events() -> Vec<GameEvent> {
        vec![
            GameEvent::RoundStarted {
                round: 1,
                difficulty: Difficulty::Easy,
            },
            GameEvent::BrickBroken {
                column: 0,
                row: 0,
                remaining_hits: 0,
            },
            GameEvent::RoundWon { round: 1 },
            GameEvent::RoundEndShown {
                round: 1,
                message: "Congratulations! You win!".into(),
            },
        ]
    }

    #[test]
    fn test_event_mapping() {
        let mut mixer = AudioMixer::new(Recorder::default(), &Settings::default());
        mixer.handle(&round_events());
        let cues: Vec<AudioCue> = mixer.sink().0.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            cues,
            vec![
                AudioCue::MusicStart,
                AudioCue::BrickHit,
                AudioCue::MusicStop { rewind: true }
            ]
        );
    }

    #[test]
    fn test_volumes_from_settings() {
        let mut mixer = AudioMixer::new(Recorder::default(), &Settings::default());
        mixer.handle(&round_events()[..2]);
        let recorded = &mixer.sink().0;
        assert!((recorded[0].1 - 0.8 * 0.7).abs() < 1e-6);
        assert!((recorded[1].1 - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_master_volume_is_clamped() {
        let settings = Settings {
            master_volume: 3.0,
            sfx_volume: 0.5,
            ..Settings::default()
        };
        let mut mixer = AudioMixer::new(Recorder::default(), &settings);
        mixer.handle(&round_events()[1..2]);
        assert_eq!(mixer.sink().0, vec![(AudioCue::BrickHit, 0.5)]);
    }

    #[test]
    fn test_muted_still_stops_music() {
        let mut mixer = AudioMixer::new(Recorder::default(), &Settings::default());
        mixer.set_muted(true);
        mixer.handle(&round_events());
        assert_eq!(mixer.sink().0, vec![(AudioCue::MusicStop { rewind: true }, 0.0)]);
    }
}
