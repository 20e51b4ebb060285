//! Collision resolution
//!
//! One pairwise sweep per frame, in a fixed order. Removal is immediate, so
//! later passes see the pools as earlier passes left them. A hostile hit on
//! the player ends the sweep for the frame.

use super::entity::{EnemyKind, Explosion, HitOutcome, ItemKind};
use super::phase::{defeat_boss, game_over};
use super::rect::Rect;
use super::rng::RandomSource;
use super::spawn::{heal_from_enemy, item_from_cloud};
use super::state::{GameState, SoundCue};
use crate::consts::*;

/// Run every collision pass for this frame
pub fn resolve_collisions(state: &mut GameState, rng: &mut impl RandomSource) {
    let hammer = state.player.hammer_hitbox();

    bullets_vs_enemies(state, rng);
    bullets_vs_clouds(state);
    if let Some(hitbox) = hammer {
        hammer_vs_enemies(state, rng, &hitbox);
    }
    bullets_vs_items(state);
    player_vs_items(state);
    player_vs_heal_items(state);

    if player_vs_enemies(state) || enemy_bullets_vs_player(state) {
        return;
    }

    bullets_vs_boss(state);
    if let Some(hitbox) = hammer {
        hammer_vs_boss(state, &hitbox);
    }
}

/// Remove a dead enemy and pay out: score, explosion, cue, heal-drop roll
pub(crate) fn kill_enemy(
    state: &mut GameState,
    rng: &mut impl RandomSource,
    index: usize,
    reward: u64,
    explosion: (f32, u32),
) {
    let enemy = state.enemies.remove(index);
    state.score += reward;
    state
        .explosions
        .push(Explosion::new(enemy.rect.center(), explosion));
    state.cue(SoundCue::Explosion);
    if rng.chance(HEAL_DROP_CHANCE) {
        state.heal_items.push(heal_from_enemy(&enemy));
    }
    log::debug!("{:?} destroyed (+{}), score {}", enemy.kind, reward, state.score);
}

/// Each bullet is consumed by the first enemy it overlaps
fn bullets_vs_enemies(state: &mut GameState, rng: &mut impl RandomSource) {
    let mut i = 0;
    while i < state.bullets.len() {
        let hit = state.bullets[i].rect;
        let Some(j) = state.enemies.iter().position(|e| e.rect.overlaps(&hit)) else {
            i += 1;
            continue;
        };
        let bullet = state.bullets.remove(i);
        let enemy = &mut state.enemies[j];
        if enemy.kind == EnemyKind::Armored {
            continue;
        }
        enemy.health -= bullet.power;
        if enemy.health <= 0 {
            kill_enemy(state, rng, j, KILL_SCORE, KILL_EXPLOSION);
        }
    }
}

fn bullets_vs_clouds(state: &mut GameState) {
    let mut i = 0;
    while i < state.bullets.len() {
        let hit = state.bullets[i].rect;
        let Some(j) = state.clouds.iter().position(|c| c.rect.overlaps(&hit)) else {
            i += 1;
            continue;
        };
        state.bullets.remove(i);
        if state.clouds[j].take_drop() {
            let item = item_from_cloud(&state.clouds[j]);
            state.items.push(item);
        }
    }
}

fn hammer_vs_enemies(state: &mut GameState, rng: &mut impl RandomSource, hitbox: &Rect) {
    let mut j = 0;
    while j < state.enemies.len() {
        if state.enemies[j].rect.overlaps(hitbox) {
            state.enemies[j].health -= HAMMER_DAMAGE;
            if state.enemies[j].health <= 0 {
                kill_enemy(state, rng, j, HAMMER_KILL_SCORE, HAMMER_EXPLOSION);
                continue;
            }
        }
        j += 1;
    }
}

/// Shooting an item cycles its kind and knocks it upward
fn bullets_vs_items(state: &mut GameState) {
    let mut i = 0;
    while i < state.bullets.len() {
        let hit = state.bullets[i].rect;
        let Some(j) = state.items.iter().position(|it| it.rect.overlaps(&hit)) else {
            i += 1;
            continue;
        };
        state.bullets.remove(i);
        state.items[j].strike();
    }
}

fn player_vs_items(state: &mut GameState) {
    let player = state.player.rect;
    let mut i = 0;
    while i < state.items.len() {
        if state.items[i].rect.overlaps(&player) {
            let item = state.items.remove(i);
            apply_item_effect(state, item.kind);
        } else {
            i += 1;
        }
    }
}

fn player_vs_heal_items(state: &mut GameState) {
    let player = state.player.rect;
    let before = state.heal_items.len();
    state.heal_items.retain(|h| !h.rect.overlaps(&player));
    for _ in state.heal_items.len()..before {
        state.player.heal();
    }
}

/// Apply a picked-up item to the player or score
pub fn apply_item_effect(state: &mut GameState, kind: ItemKind) {
    log::debug!("Picked up {:?}", kind);
    let player = &mut state.player;
    match kind {
        ItemKind::Score => state.score += SCORE_ITEM_BONUS,
        ItemKind::Speed => player.boost_speed(),
        ItemKind::Power => player.power_up(),
        ItemKind::Spread => player.equip_spread(),
        ItemKind::Barrier => player.has_barrier = true,
        ItemKind::Bomb => player.add_bomb(),
    }
}

/// Barrier or life loss. Life reaching zero ends the game.
fn hit_player(state: &mut GameState) {
    match state.player.take_hit() {
        HitOutcome::BarrierLost => log::debug!("Barrier absorbed a hit"),
        HitOutcome::LifeLost(remaining) => {
            state.cue(SoundCue::PlayerHit);
            log::debug!("Player hit, {} life left", remaining);
            if remaining == 0 {
                game_over(state);
            }
        }
    }
}

/// Ramming: the enemy is destroyed outright. True if a hit landed.
fn player_vs_enemies(state: &mut GameState) -> bool {
    if state.player.is_invincible() {
        return false;
    }
    let player = state.player.rect;
    let Some(i) = state.enemies.iter().position(|e| e.rect.overlaps(&player)) else {
        return false;
    };
    state.enemies.remove(i);
    hit_player(state);
    true
}

/// True if a hit landed
fn enemy_bullets_vs_player(state: &mut GameState) -> bool {
    if state.player.is_invincible() {
        return false;
    }
    let player = state.player.rect;
    let Some(i) = state
        .enemy_bullets
        .iter()
        .position(|b| b.rect.overlaps(&player))
    else {
        return false;
    };
    state.enemy_bullets.remove(i);
    hit_player(state);
    true
}

/// At most one bullet strikes the boss per frame
fn bullets_vs_boss(state: &mut GameState) {
    let Some(target) = state.boss.as_ref().map(|b| b.rect) else {
        return;
    };
    let Some(i) = state.bullets.iter().position(|b| b.rect.overlaps(&target)) else {
        return;
    };
    let bullet = state.bullets.remove(i);
    let defeated = state.boss.as_mut().is_some_and(|boss| {
        boss.health -= bullet.power;
        boss.is_defeated()
    });
    if defeated {
        defeat_boss(state);
    }
}

fn hammer_vs_boss(state: &mut GameState, hitbox: &Rect) {
    let defeated = state.boss.as_mut().is_some_and(|boss| {
        if !boss.rect.overlaps(hitbox) {
            return false;
        }
        boss.health -= HAMMER_DAMAGE;
        boss.is_defeated()
    });
    if defeated {
        defeat_boss(state);
    }
}
