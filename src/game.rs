//! Frame driver
//!
//! Owns one session and its collaborators. Wall-clock time is accumulated
//! into whole simulation ticks; after each tick the session's events are
//! dispatched to audio and high score storage.

use rand_pcg::Pcg32;

use crate::audio::{AudioManager, AudioSink};
use crate::consts::*;
use crate::highscores::HighScoreStore;
use crate::renderer::{self, DrawSink, RenderOptions};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, MusicTrack, TickInput, seed_session, session_rng, tick};

/// Game instance holding all state
pub struct Game<S: HighScoreStore, A: AudioSink> {
    state: GameState,
    rng: Pcg32,
    store: S,
    audio: AudioManager<A>,
    render_options: RenderOptions,
    accumulator: f32,
}

impl<S: HighScoreStore, A: AudioSink> Game<S, A> {
    /// New session seeded from `seed`, starting from the stored high score
    pub fn new(seed: u64, mut store: S, sink: A, settings: &Settings) -> Self {
        let high_score = store.load_high_score();
        let mut rng = session_rng(seed);
        let mut state = GameState::new(high_score);
        seed_session(&mut state, &mut rng);

        let mut audio = AudioManager::new(sink);
        audio.apply_settings(settings);
        audio.play_music(MusicTrack::Stage);

        log::info!("Game initialized with seed: {}", seed);
        Self {
            state,
            rng,
            store,
            audio,
            render_options: RenderOptions::from_settings(settings),
            accumulator: 0.0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn audio(&self) -> &AudioManager<A> {
        &self.audio
    }

    /// Re-apply volumes and presentation switches
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.audio.apply_settings(settings);
        self.render_options = RenderOptions::from_settings(settings);
    }

    /// Run exactly one tick and dispatch what it produced
    pub fn step(&mut self, input: &TickInput) {
        tick(&mut self.state, input, &mut self.rng);
        self.dispatch_events();
    }

    /// Accumulate `dt` seconds and run the whole ticks it covers.
    /// Edge-triggered inputs apply to the first of them only.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, dt: f32, input: &TickInput) -> u32 {
        let dt = dt.clamp(0.0, MAX_SUBSTEPS as f32 * SIM_DT);
        self.accumulator += dt;

        let mut input = input.clone();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step(&input);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            input.hammer = false;
            input.bomb = false;
            input.restart = false;
        }
        substeps
    }

    /// Emit this frame's draw list
    pub fn render(&self, sink: &mut dyn DrawSink) {
        renderer::render(&self.state, &self.render_options, sink);
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Cue(cue) => self.audio.play(cue),
                GameEvent::Music(track) => self.audio.play_music(track),
                GameEvent::StopMusic => self.audio.stop_music(),
                GameEvent::SaveHighScore(score) => self.store.save_high_score(score),
                GameEvent::PhaseChanged { from, to } => {
                    log::debug!("Frame {}: {:?} -> {:?}", self.state.frame, from, to);
                }
                GameEvent::Restarted => {
                    self.state.high_score = self.store.load_high_score();
                }
            }
        }
    }
}
