//! Spawning: frame-count timers and entity factories
//!
//! All randomness flows through the injected [`RandomSource`].

use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

use super::entity::{
    Bullet, Cloud, Enemy, EnemyBullet, EnemyKind, HealItem, Item, Player, ShotType,
};
use super::rect::Rect;
use super::rng::RandomSource;
use super::state::GameState;
use crate::consts::*;

/// Frame counters driving periodic spawns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spawner {
    pub enemy_timer: u32,
    pub cloud_timer: u32,
}

/// Count frames and emit enemies/clouds when their intervals elapse.
/// Inactive outside the Playing phase.
pub fn run_spawner(state: &mut GameState, rng: &mut impl RandomSource) {
    if !state.phase.spawns_waves() {
        return;
    }

    state.spawner.enemy_timer += 1;
    if state.spawner.enemy_timer >= ENEMY_SPAWN_INTERVAL {
        state.spawner.enemy_timer = 0;
        let enemy = spawn_enemy(rng);
        log::trace!("Spawned {:?} at x={:.1}", enemy.kind, enemy.rect.x);
        state.enemies.push(enemy);
    }

    state.spawner.cloud_timer += 1;
    if state.spawner.cloud_timer >= CLOUD_SPAWN_INTERVAL {
        state.spawner.cloud_timer = 0;
        state.clouds.push(spawn_cloud(rng));
    }
}

/// New enemy just above the canvas; draws kind, x, then drift
pub fn spawn_enemy(rng: &mut impl RandomSource) -> Enemy {
    let kind = EnemyKind::from_roll(rng.unit());
    let size = kind.size();
    let x = rng.unit() * (CANVAS_WIDTH - size);
    let dx = (rng.unit() - 0.5) * ENEMY_DRIFT_RANGE;
    Enemy::new(kind, x, -size, dx)
}

/// Item-carrying cloud of random size, entering from above
pub fn spawn_cloud(rng: &mut impl RandomSource) -> Cloud {
    let w = rng.range_inclusive(px(50.0) as i32, px(150.0) as i32) as f32;
    let h = rng.range_inclusive(px(20.0) as i32, px(70.0) as i32) as f32;
    let x = rng.unit() * (CANVAS_WIDTH - w);
    let y = rng.range(-h * 2.0, -h);
    Cloud::new(Rect::new(x, y, w, h), CLOUD_FALL_SPEED)
}

/// Bank of large clouds above the canvas. `slow` banks drift in at mixed speeds.
pub fn seed_clouds(state: &mut GameState, rng: &mut impl RandomSource, slow: bool) {
    let (w, h) = (px(120.0), px(60.0));
    for _ in 0..CLOUD_SEED_COUNT {
        let x = rng.unit() * (CANVAS_WIDTH - w);
        let y = rng.range(-h * 2.0, -h);
        let speed = if slow {
            rng.range(spd(2.0), spd(5.0))
        } else {
            CLOUD_FALL_SPEED
        };
        state.clouds.push(Cloud::new(Rect::new(x, y, w, h), speed));
    }
}

/// Populate a brand new session
pub fn seed_session(state: &mut GameState, rng: &mut impl RandomSource) {
    seed_clouds(state, rng, false);
}

/// Item released from under a cloud's center
pub fn item_from_cloud(cloud: &Cloud) -> Item {
    Item::new(
        cloud.rect.center().x - ITEM_SIZE / 2.0,
        cloud.rect.bottom(),
    )
}

/// Heal item left at an enemy's last position
pub fn heal_from_enemy(enemy: &Enemy) -> HealItem {
    let c = enemy.rect.center();
    HealItem::new(c.x - ITEM_SIZE / 2.0, c.y - ITEM_SIZE / 2.0)
}

/// Release items from clouds whose center has reached the mid-line
pub fn release_cloud_drops(state: &mut GameState) {
    for cloud in state.clouds.iter_mut() {
        if cloud.has_crossed_midline() && cloud.take_drop() {
            state.items.push(item_from_cloud(cloud));
        }
    }
}

/// Bullets for one trigger pull, from the ship's nose
pub fn player_volley(player: &Player) -> Vec<Bullet> {
    let size = player.bullet_size;
    let x = player.rect.x + player.rect.w / 2.0 - size / 2.0;
    let y = player.rect.y;
    match player.shot_type {
        ShotType::Normal => vec![Bullet::new(x, y, 0.0, player.bullet_power, size)],
        ShotType::Spread => (-SPREAD_BULLETS..=SPREAD_BULLETS)
            .map(|i| {
                let angle = i as f32 * (PI / 12.0);
                Bullet::new(x, y, angle.tan(), player.bullet_power, size)
            })
            .collect(),
    }
}

/// Shooter potshots and boss ring volleys
pub fn fire_enemy_bullets(state: &mut GameState, rng: &mut impl RandomSource) {
    for enemy in &state.enemies {
        if enemy.kind == EnemyKind::Shooter && rng.chance(SHOOTER_FIRE_CHANCE) {
            state
                .enemy_bullets
                .push(EnemyBullet::aimed(&enemy.rect, FRAC_PI_2));
        }
    }

    if let Some(boss) = &state.boss {
        if !boss.is_defeated() && boss.wants_to_fire() {
            let spin = boss.attack_timer as f32 / 20.0;
            for i in 0..BOSS_BARRAGE_BULLETS {
                let angle = (TAU / BOSS_BARRAGE_BULLETS as f32) * i as f32 + spin;
                state.enemy_bullets.push(EnemyBullet::aimed(&boss.rect, angle));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Boss, BossPattern};
    use crate::sim::rng::ScriptedRng;
    use crate::sim::state::GamePhase;

    #[test]
    fn test_enemy_spawn_interval() {
        let mut state = GameState::new(0);
        let mut rng = ScriptedRng::constant(0.5);
        for _ in 0..ENEMY_SPAWN_INTERVAL - 1 {
            run_spawner(&mut state, &mut rng);
        }
        assert!(state.enemies.is_empty());
        run_spawner(&mut state, &mut rng);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.spawner.enemy_timer, 0);
    }

    #[test]
    fn test_spawner_idle_outside_playing() {
        for phase in [GamePhase::BossIntro, GamePhase::Boss] {
            let mut state = GameState::new(0);
            state.phase = phase;
            let mut rng = ScriptedRng::constant(0.5);
            for _ in 0..CLOUD_SPAWN_INTERVAL * 2 {
                run_spawner(&mut state, &mut rng);
            }
            assert!(state.enemies.is_empty());
            assert!(state.clouds.is_empty());
            assert_eq!(rng.draws(), 0);
        }
    }

    #[test]
    fn test_spawn_enemy_profiles() {
        let mut rng = ScriptedRng::new(vec![0.9, 0.0, 0.5]);
        let enemy = spawn_enemy(&mut rng);
        assert_eq!(enemy.kind, EnemyKind::Armored);
        assert_eq!(enemy.health, 5);
        assert_eq!(enemy.rect.x, 0.0);
        assert_eq!(enemy.rect.y, -enemy.rect.h);
        assert_eq!(enemy.dx, 0.0);
    }

    #[test]
    fn test_enemy_drift_symmetric_range() {
        let mut lo = ScriptedRng::new(vec![0.0, 0.0, 0.0]);
        let mut hi = ScriptedRng::new(vec![0.0, 0.0, 1.0]);
        assert!((spawn_enemy(&mut lo).dx + ENEMY_DRIFT_RANGE / 2.0).abs() < 1e-4);
        assert!((spawn_enemy(&mut hi).dx - ENEMY_DRIFT_RANGE / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_cloud_spawns_above_canvas() {
        let mut rng = ScriptedRng::constant(0.3);
        let cloud = spawn_cloud(&mut rng);
        assert!(cloud.rect.bottom() <= 0.0);
        assert!(cloud.rect.x >= 0.0 && cloud.rect.right() <= CANVAS_WIDTH);
        assert!(!cloud.dropped_item);
    }

    #[test]
    fn test_cloud_drops_item_at_midline() {
        let mut state = GameState::new(0);
        let rect = Rect::new(100.0, CANVAS_HEIGHT / 2.0 - 10.0 - 0.5, 40.0, 20.0);
        state.clouds.push(Cloud::new(rect, 1.0));
        release_cloud_drops(&mut state);
        assert!(state.items.is_empty());

        state.clouds[0].rect.y += 1.0;
        release_cloud_drops(&mut state);
        release_cloud_drops(&mut state);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].rect.y, state.clouds[0].rect.bottom());
        assert_eq!(state.items[0].rect.center().x, state.clouds[0].rect.center().x);
    }

    #[test]
    fn test_normal_volley_is_centered() {
        let player = Player::new();
        let volley = player_volley(&player);
        assert_eq!(volley.len(), 1);
        assert_eq!(volley[0].rect.center().x, player.center().x);
        assert_eq!(volley[0].dx, 0.0);
    }

    #[test]
    fn test_spread_volley_fans_out() {
        let mut player = Player::new();
        player.equip_spread();
        let volley = player_volley(&player);
        assert_eq!(volley.len(), 5);
        assert_eq!(volley[2].dx, 0.0);
        assert!(volley[0].dx < volley[1].dx && volley[3].dx < volley[4].dx);
        assert!((volley[0].dx + volley[4].dx).abs() < 1e-6);
    }

    #[test]
    fn test_boss_ring_volley() {
        let mut state = GameState::new(0);
        let mut boss = Boss::new();
        boss.pattern = BossPattern::Barrage;
        boss.attack_timer = BOSS_BARRAGE_INTERVAL * 3;
        state.boss = Some(boss);
        let mut rng = ScriptedRng::constant(0.99);
        fire_enemy_bullets(&mut state, &mut rng);
        assert_eq!(state.enemy_bullets.len(), BOSS_BARRAGE_BULLETS as usize);

        state.enemy_bullets.clear();
        if let Some(boss) = state.boss.as_mut() {
            boss.attack_timer += 1;
        }
        fire_enemy_bullets(&mut state, &mut rng);
        assert!(state.enemy_bullets.is_empty());
    }

    #[test]
    fn test_shooter_fire_chance() {
        let mut state = GameState::new(0);
        state.enemies.push(Enemy::new(EnemyKind::Shooter, 50.0, 50.0, 0.0));
        state.enemies.push(Enemy::new(EnemyKind::Swarmer, 90.0, 50.0, 0.0));
        let mut never = ScriptedRng::constant(0.5);
        fire_enemy_bullets(&mut state, &mut never);
        assert!(state.enemy_bullets.is_empty());

        let mut always = ScriptedRng::constant(0.0);
        fire_enemy_bullets(&mut state, &mut always);
        assert_eq!(state.enemy_bullets.len(), 1);
        assert!(state.enemy_bullets[0].vel.y > 0.0);
        assert!(state.enemy_bullets[0].vel.x.abs() < 1e-4);
    }
}
