//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` is one frame)
//! - Injected random source only
//! - Side effects leave as `GameEvent`s, never as direct calls
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entity;
pub mod phase;
pub mod rect;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{apply_item_effect, resolve_collisions};
pub use entity::{
    BombEffect, Boss, BossPattern, Bullet, Cloud, Enemy, EnemyBullet, EnemyKind, Entity,
    Explosion, HealItem, HitOutcome, Item, ItemKind, Player, ShotType, advance_pool,
};
pub use phase::{restart, update_phase};
pub use rect::Rect;
pub use rng::{RandomSource, ScriptedRng, session_rng};
pub use spawn::{Spawner, seed_session};
pub use state::{GameEvent, GamePhase, GameState, MusicTrack, SoundCue};
pub use tick::{TickInput, tick};
