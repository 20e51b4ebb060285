//! Phase state machine
//!
//! Playing -> BossIntro -> Boss -> Clear, with GameOver reachable whenever
//! life runs out. Terminal phases only leave through [`restart`].

use super::entity::{Boss, Explosion};
use super::rng::RandomSource;
use super::spawn::{seed_clouds, seed_session};
use super::state::{GameEvent, GamePhase, GameState, MusicTrack, SoundCue};
use crate::consts::*;

/// Run score- and timer-gated transitions for this frame
pub fn update_phase(state: &mut GameState, rng: &mut impl RandomSource) {
    match state.phase {
        GamePhase::Playing => {
            if state.score >= BOSS_SCORE_THRESHOLD && state.boss.is_none() {
                begin_boss_intro(state, rng);
            }
        }
        GamePhase::BossIntro => {
            state.boss_intro_timer += 1;
            if state.boss_intro_timer >= BOSS_INTRO_FRAMES {
                state.set_phase(GamePhase::Boss);
                state.boss = Some(Boss::new());
                state.emit(GameEvent::Music(MusicTrack::Boss));
            }
        }
        GamePhase::Boss => {
            // Bomb damage lands outside the collision pass
            if state.boss.as_ref().is_some_and(Boss::is_defeated) {
                defeat_boss(state);
            }
        }
        GamePhase::GameOver | GamePhase::Clear => {}
    }
}

/// Clear the field and start the countdown to the boss
pub fn begin_boss_intro(state: &mut GameState, rng: &mut impl RandomSource) {
    state.set_phase(GamePhase::BossIntro);
    state.enemies.clear();
    state.boss_intro_timer = 0;
    seed_clouds(state, rng, true);
    state.emit(GameEvent::StopMusic);
}

/// Boss destroyed: big explosion, then Clear
pub fn defeat_boss(state: &mut GameState) {
    if let Some(boss) = state.boss.take() {
        state
            .explosions
            .push(Explosion::new(boss.rect.center(), BOSS_EXPLOSION));
        state.cue(SoundCue::Explosion);
    }
    finish(state, GamePhase::Clear);
}

/// Player out of life
pub fn game_over(state: &mut GameState) {
    finish(state, GamePhase::GameOver);
}

fn finish(state: &mut GameState, terminal: GamePhase) {
    if state.phase.is_terminal() {
        return;
    }
    state.set_phase(terminal);
    if state.score > state.high_score {
        log::info!("New high score {} (was {})", state.score, state.high_score);
        state.high_score = state.score;
        state.emit(GameEvent::SaveHighScore(state.score));
    }
}

/// Full reset to a fresh session. The driver re-reads the stored high score
/// when it sees [`GameEvent::Restarted`].
pub fn restart(state: &mut GameState, rng: &mut impl RandomSource) {
    *state = GameState::new(state.high_score);
    seed_session(state, rng);
    state.emit(GameEvent::Restarted);
    state.emit(GameEvent::Music(MusicTrack::Stage));
    log::info!("Session restarted");
}
