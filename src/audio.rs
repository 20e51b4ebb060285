//! Audio routing
//!
//! The simulation only names cues and tracks. An `AudioSink` backend turns
//! them into sound; `AudioManager` applies volume and mute on the way.

use crate::settings::Settings;
use crate::sim::{MusicTrack, SoundCue};

/// Backend that actually plays sound
pub trait AudioSink {
    /// Fire a one-shot cue at the given volume (0.0 - 1.0)
    fn play_cue(&mut self, cue: SoundCue, volume: f32);
    /// Start a looping track, replacing any current one
    fn play_music(&mut self, track: MusicTrack, volume: f32);
    fn stop_music(&mut self);
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_cue(&mut self, _cue: SoundCue, _volume: f32) {}
    fn play_music(&mut self, _track: MusicTrack, _volume: f32) {}
    fn stop_music(&mut self) {}
}

/// Writes each request to the log; used by the headless binary
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play_cue(&mut self, cue: SoundCue, volume: f32) {
        log::trace!("cue {:?} at {:.2}", cue, volume);
    }

    fn play_music(&mut self, track: MusicTrack, volume: f32) {
        log::debug!("music {:?} at {:.2}", track, volume);
    }

    fn stop_music(&mut self) {
        log::debug!("music stopped");
    }
}

/// Audio manager for the game
pub struct AudioManager<A: AudioSink> {
    sink: A,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
    current_track: Option<MusicTrack>,
}

impl<A: AudioSink> AudioManager<A> {
    pub fn new(sink: A) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,
            current_track: None,
        }
    }

    /// Take volumes and mute from settings
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_music_volume(settings.music_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn current_track(&self) -> Option<MusicTrack> {
        self.current_track
    }

    pub fn sink(&self) -> &A {
        &self.sink
    }

    fn effective_volume(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Play a sound cue
    pub fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume(self.sfx_volume);
        if vol <= 0.0 {
            return;
        }
        self.sink.play_cue(cue, vol);
    }

    /// Switch the background track. The track is remembered even while muted.
    pub fn play_music(&mut self, track: MusicTrack) {
        self.current_track = Some(track);
        let vol = self.effective_volume(self.music_volume);
        self.sink.play_music(track, vol);
    }

    pub fn stop_music(&mut self) {
        if self.current_track.take().is_some() {
            self.sink.stop_music();
        }
    }
}
