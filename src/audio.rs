//! Audio cues and the audio manager
//!
//! The game only ever asks for three one-shot cues and one music track. The
//! terminal build has no mixer, so the manager rings the terminal bell for
//! cues and keeps track of whether music would be playing.

use std::io::Write;

use crate::settings::Settings;

/// One-shot sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player caught a snowball
    SnowballCollision,
    /// Player was hit by a rock
    RockCollision,
    /// Level completed
    LevelUp,
}

/// Looping music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Background,
}

/// Audio capability consumed by the game loop.
///
/// Implementations must not block the tick.
pub trait AudioPlayer {
    fn play_once(&mut self, cue: SoundCue);
    fn play_looping(&mut self, track: MusicTrack);
    fn stop_music(&mut self);
}

/// Audio manager for the game
#[derive(Debug, Default)]
pub struct AudioManager {
    muted: bool,
    /// Ring the terminal bell for cues
    bell: bool,
    music: Option<MusicTrack>,
    /// Cues that were audible (not muted)
    cues_sounded: u64,
}

impl AudioManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            muted: settings.muted,
            bell: settings.terminal_bell,
            ..Self::default()
        }
    }

    /// Track currently looping, if any
    pub fn music(&self) -> Option<MusicTrack> {
        self.music
    }

    pub fn cues_sounded(&self) -> u64 {
        self.cues_sounded
    }

    fn ring_bell() {
        let mut out = std::io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            log::warn!("Terminal bell failed: {e}");
        }
    }
}

impl AudioPlayer for AudioManager {
    fn play_once(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }
        self.cues_sounded += 1;
        log::debug!("Cue {:?}", cue);
        if self.bell {
            Self::ring_bell();
        }
    }

    fn play_looping(&mut self, track: MusicTrack) {
        log::debug!("Music {:?} started{}", track, if self.muted { " (muted)" } else { "" });
        self.music = Some(track);
    }

    fn stop_music(&mut self) {
        if let Some(track) = self.music.take() {
            log::debug!("Music {:?} stopped", track);
        }
    }
}

/// Every call made to an [`AudioLog`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCall {
    PlayOnce(SoundCue),
    PlayLooping(MusicTrack),
    StopMusic,
}

/// Audio player that only records calls (headless runs, tests)
#[derive(Debug, Default)]
pub struct AudioLog {
    pub calls: Vec<AudioCall>,
}

impl AudioLog {
    pub fn cue_count(&self, cue: SoundCue) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == AudioCall::PlayOnce(cue))
            .count()
    }
}

impl AudioPlayer for AudioLog {
    fn play_once(&mut self, cue: SoundCue) {
        self.calls.push(AudioCall::PlayOnce(cue));
    }

    fn play_looping(&mut self, track: MusicTrack) {
        self.calls.push(AudioCall::PlayLooping(track));
    }

    fn stop_music(&mut self) {
        self.calls.push(AudioCall::StopMusic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_sound_unless_muted() {
        let mut audio = AudioManager::new();
        audio.play_once(SoundCue::LevelUp);
        assert_eq!(audio.cues_sounded(), 1);

        let mut muted = AudioManager::from_settings(&Settings {
            muted: true,
            ..Default::default()
        });
        muted.play_once(SoundCue::RockCollision);
        muted.play_once(SoundCue::SnowballCollision);
        assert_eq!(muted.cues_sounded(), 0);
    }

    #[test]
    fn test_music_state_tracked() {
        let mut audio = AudioManager::new();
        assert_eq!(audio.music(), None);
        audio.play_looping(MusicTrack::Background);
        assert_eq!(audio.music(), Some(MusicTrack::Background));
        audio.stop_music();
        assert_eq!(audio.music(), None);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let audio = AudioManager::from_settings(&settings);
        assert!(audio.muted);
        assert!(!audio.bell);
    }
}
