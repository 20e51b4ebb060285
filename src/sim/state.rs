//! Game state and core simulation types
//!
//! One `GameState` is one play session: every pool, counter and timer the
//! tick mutates lives here. Restart replaces it wholesale.

use serde::{Deserialize, Serialize};

use super::entity::{
    BombEffect, Boss, Bullet, Cloud, Enemy, EnemyBullet, Explosion, HealItem, Item, Player,
};
use super::spawn::Spawner;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Regular waves of enemies and clouds
    Playing,
    /// Score threshold reached; field cleared, music stopped, boss pending
    BossIntro,
    /// Boss on screen
    Boss,
    /// Player ran out of life
    GameOver,
    /// Boss defeated
    Clear,
}

impl GamePhase {
    /// GameOver and Clear only leave via restart
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::Clear)
    }

    /// Regular enemy and cloud spawning is active
    pub fn spawns_waves(&self) -> bool {
        *self == GamePhase::Playing
    }
}

/// One-shot sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Player volley
    Shot,
    /// Enemy or boss destroyed, bomb detonation
    Explosion,
    /// Player lost a life point
    PlayerHit,
}

/// Looping background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicTrack {
    Stage,
    Boss,
}

/// Side effects requested by the simulation, drained by the frame driver
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Cue(SoundCue),
    Music(MusicTrack),
    StopMusic,
    /// Persist a new high score
    SaveHighScore(u64),
    PhaseChanged { from: GamePhase, to: GamePhase },
    /// Session was reset; the stored high score should be re-read
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub score: u64,
    /// Best score known to this session (loaded at start, raised on a new record)
    pub high_score: u64,
    /// Simulation tick counter
    pub frame: u64,
    /// Frames spent in BossIntro
    pub boss_intro_timer: u32,
    pub spawner: Spawner,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub items: Vec<Item>,
    pub heal_items: Vec<HealItem>,
    pub clouds: Vec<Cloud>,
    pub boss: Option<Boss>,
    /// Visual effects (not gameplay-affecting)
    pub explosions: Vec<Explosion>,
    pub bomb_effects: Vec<BombEffect>,
    /// Pending side effects for this frame
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session with an empty field. Clouds are seeded by `spawn::seed_session`.
    pub fn new(high_score: u64) -> Self {
        Self {
            phase: GamePhase::Playing,
            score: 0,
            high_score,
            frame: 0,
            boss_intro_timer: 0,
            spawner: Spawner::default(),
            player: Player::new(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            items: Vec::new(),
            heal_items: Vec::new(),
            clouds: Vec::new(),
            boss: None,
            explosions: Vec::new(),
            bomb_effects: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn cue(&mut self, cue: SoundCue) {
        self.events.push(GameEvent::Cue(cue));
    }

    /// Take this frame's side effects
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Phase change with its event
    pub fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        log::info!("Phase {:?} -> {:?} (score {})", from, to, self.score);
        self.emit(GameEvent::PhaseChanged { from, to });
    }

    /// Live hostile count, used by the HUD and autopilot
    pub fn hostile_count(&self) -> usize {
        self.enemies.len() + self.enemy_bullets.len() + usize::from(self.boss.is_some())
    }
}
