//! Attract-mode autopilot
//!
//! Synthesizes a `TickInput` from the current state so the game can play
//! itself. Pure function of state; the session stays deterministic.

use glam::Vec2;

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::*;

/// Hostiles closer than this trigger evasive steering
const DANGER_RADIUS: f32 = 40.0;
/// Enemies closer than this get the hammer
const SWING_RADIUS: f32 = HAMMER_SIZE;
/// Live hostile count that justifies a bomb
const BOMB_CROWD: usize = 20;

/// Input the autopilot would give for this frame
pub fn drive(state: &GameState) -> TickInput {
    let mut input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    if state.phase.is_terminal() {
        // Wait for the last explosion before starting over
        input.restart = state.explosions.is_empty();
        return input;
    }

    let player = &state.player;
    let here = player.center();
    input.fire = true;

    let target_x = match nearest_threat(state, here) {
        Some(threat) => {
            let away = if threat.x < here.x { 1.0 } else { -1.0 };
            let dodge = here.x + away * DANGER_RADIUS;
            // Pinned against a wall: cut back under the threat instead
            if dodge < 0.0 || dodge > CANVAS_WIDTH {
                here.x - away * DANGER_RADIUS
            } else {
                dodge
            }
        }
        None => preferred_x(state),
    };

    if target_x < here.x - player.speed {
        input.left = true;
    } else if target_x > here.x + player.speed {
        input.right = true;
    }

    // Hold the home row
    let home_y = CANVAS_HEIGHT - PLAYER_BOTTOM_MARGIN - player.rect.h / 2.0;
    if here.y < home_y - player.speed {
        input.down = true;
    }

    input.hammer = !player.is_hammering
        && state
            .enemies
            .iter()
            .any(|e| e.rect.center().distance(here) < SWING_RADIUS);

    input.bomb = player.special_attack_stock > 0
        && state.bomb_effects.is_empty()
        && state.enemies.len() + state.enemy_bullets.len() >= BOMB_CROWD;

    input
}

/// Closest hostile bullet or enemy inside the danger radius, at or above the ship
fn nearest_threat(state: &GameState, here: Vec2) -> Option<Vec2> {
    let bullets = state.enemy_bullets.iter().map(|b| b.rect.center());
    let enemies = state.enemies.iter().map(|e| e.rect.center());
    bullets
        .chain(enemies)
        .filter(|c| c.y <= here.y && c.distance(here) < DANGER_RADIUS)
        .min_by(|a, b| {
            a.distance(here)
                .partial_cmp(&b.distance(here))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Where to idle when nothing is close: pickups first, then the lowest enemy,
/// then the boss
fn preferred_x(state: &GameState) -> f32 {
    let pickup = state
        .heal_items
        .iter()
        .map(|h| h.rect)
        .chain(state.items.iter().map(|i| i.rect))
        .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal));
    if let Some(rect) = pickup {
        return rect.center().x;
    }

    let lowest = state
        .enemies
        .iter()
        .max_by(|a, b| {
            a.rect
                .y
                .partial_cmp(&b.rect.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
    if let Some(enemy) = lowest {
        return enemy.rect.center().x;
    }

    state
        .boss
        .as_ref()
        .map_or(CANVAS_WIDTH / 2.0, |boss| boss.rect.center().x)
}
