//! Cloudburst - a vertically scrolling arcade shooter
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (entities, spawning, collisions, phases)
//! - `renderer`: Draw-command emission for an external rasterizer
//! - `audio`: Sound cue routing to an external audio backend
//! - `highscores` / `persistence`: High score storage
//! - `platform`: Keyboard snapshot to tick input conversion
//! - `game`: Frame driver tying the above together

pub mod audio;
pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use highscores::{HighScoreStore, MemoryHighScores};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (frames per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical canvas
    pub const CANVAS_WIDTH: f32 = 256.0;
    pub const CANVAS_HEIGHT: f32 = 256.0;

    /// Design-time constants were authored for an 800x600 canvas
    pub const SCALE_FACTOR: f32 = 0.35;

    /// Scale a design-time size to whole canvas pixels
    pub const fn px(design: f32) -> f32 {
        (design * SCALE_FACTOR) as i32 as f32
    }

    /// Scale a design-time speed (px/frame), keeping the fraction
    pub const fn spd(design: f32) -> f32 {
        design * SCALE_FACTOR
    }

    // Player
    pub const PLAYER_SIZE: f32 = px(50.0);
    pub const PLAYER_BOTTOM_MARGIN: f32 = px(10.0);
    pub const PLAYER_BASE_SPEED: f32 = spd(10.0);
    pub const PLAYER_SPEED_STEP: f32 = 1.0;
    pub const PLAYER_MAX_SPEED: f32 = spd(20.0);
    pub const PLAYER_START_LIFE: u8 = 3;
    pub const PLAYER_MAX_LIFE: u8 = 5;
    pub const PLAYER_START_BOMBS: u8 = 2;
    pub const MAX_BOMBS: u8 = 5;
    pub const SHOT_COOLDOWN: u32 = 5;
    pub const HAMMER_DURATION: u32 = 10;
    pub const HAMMER_SIZE: f32 = px(70.0);
    pub const HAMMER_DAMAGE: i32 = 1;
    pub const INVINCIBLE_FRAMES: u32 = 60;

    // Player bullets
    pub const BULLET_SPEED: f32 = px(40.0);
    pub const BULLET_BASE_SIZE: f32 = px(5.0);
    pub const BULLET_SIZE_STEP: f32 = px(5.0);
    pub const BULLET_MAX_SIZE: f32 = px(25.0);
    pub const BULLET_MAX_POWER: i32 = 5;
    pub const SPREAD_BULLETS: i32 = 2;

    // Enemies
    pub const ENEMY_SPAWN_INTERVAL: u32 = 20;
    pub const ENEMY_DRIFT_RANGE: f32 = spd(5.0);
    pub const SHOOTER_FIRE_CHANCE: f32 = 0.01;
    pub const HEAL_DROP_CHANCE: f32 = 0.1;
    pub const KILL_SCORE: u64 = 100;
    pub const HAMMER_KILL_SCORE: u64 = 150;

    // Enemy bullets
    pub const ENEMY_BULLET_WIDTH: f32 = px(10.0);
    pub const ENEMY_BULLET_HEIGHT: f32 = px(20.0);
    pub const ENEMY_BULLET_SPEED: f32 = spd(4.0);

    // Items
    pub const ITEM_SIZE: f32 = px(20.0);
    pub const ITEM_FALL_SPEED: f32 = spd(5.0);
    pub const ITEM_BOUNCE_SPEED: f32 = spd(5.0);
    pub const ITEM_BOUNCE_HEIGHT: f32 = px(30.0);
    pub const HEAL_FALL_SPEED: f32 = spd(2.0);
    pub const SCORE_ITEM_BONUS: u64 = 1000;

    // Clouds
    pub const CLOUD_SPAWN_INTERVAL: u32 = 240;
    pub const CLOUD_FALL_SPEED: f32 = spd(7.0);
    pub const CLOUD_SEED_COUNT: usize = 10;

    // Boss
    pub const BOSS_SCORE_THRESHOLD: u64 = 10_000;
    pub const BOSS_INTRO_FRAMES: u32 = 7 * TICK_RATE;
    pub const BOSS_SIZE: f32 = px(200.0);
    pub const BOSS_SPEED: f32 = spd(1.0);
    pub const BOSS_HOVER_Y: f32 = px(50.0);
    pub const BOSS_MAX_HEALTH: i32 = 500;
    pub const BOSS_BARRAGE_INTERVAL: u32 = 5;
    pub const BOSS_BARRAGE_BULLETS: u32 = 16;

    // Bomb
    pub const BOMB_ENEMY_DAMAGE: i32 = 10;
    pub const BOMB_BOSS_DAMAGE: i32 = 50;
    pub const BOMB_WAVE_SPEED: f32 = 8.0;

    // Explosions (size, frames)
    pub const KILL_EXPLOSION: (f32, u32) = (px(30.0), 10);
    pub const HAMMER_EXPLOSION: (f32, u32) = (px(40.0), 15);
    pub const BOSS_EXPLOSION: (f32, u32) = (px(100.0), 30);
}
