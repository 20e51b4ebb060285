//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session deterministically, one frame per
//! call: input -> player -> pools -> spawner -> phase machine -> collisions.

use super::autopilot;
use super::collision::{kill_enemy, resolve_collisions};
use super::entity::{BombEffect, advance_pool};
use super::phase::{restart, update_phase};
use super::rng::RandomSource;
use super::spawn::{fire_enemy_bullets, player_volley, release_cloud_drops, run_spawner};
use super::state::{GameState, SoundCue};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire (held; rate-limited by the shot cooldown)
    pub fire: bool,
    /// Hammer swing (edge-triggered)
    pub hammer: bool,
    /// Special attack (edge-triggered)
    pub bomb: bool,
    /// Restart (edge-triggered, only honoured in GameOver/Clear)
    pub restart: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, rng: &mut impl RandomSource) {
    let input = if input.idle_mode {
        autopilot::drive(state)
    } else {
        input.clone()
    };
    let input = &input;

    if state.phase.is_terminal() {
        // Final explosions keep animating behind the banner
        advance_pool(&mut state.explosions);
        advance_pool(&mut state.bomb_effects);
        if input.restart {
            restart(state, rng);
        }
        return;
    }

    state.frame += 1;

    state.player.advance(input);
    if input.fire && state.player.shot_timer == 0 {
        let volley = player_volley(&state.player);
        state.bullets.extend(volley);
        state.player.shot_timer = SHOT_COOLDOWN;
        state.cue(SoundCue::Shot);
    }
    if input.hammer && state.player.trigger_hammer() {
        log::trace!("Hammer swing at frame {}", state.frame);
    }
    if input.bomb {
        detonate_bomb(state, rng);
    }

    advance_pool(&mut state.clouds);
    release_cloud_drops(state);
    advance_pool(&mut state.bullets);
    advance_pool(&mut state.items);
    advance_pool(&mut state.heal_items);
    advance_pool(&mut state.enemies);
    advance_pool(&mut state.enemy_bullets);
    if let Some(boss) = state.boss.as_mut() {
        boss.advance();
    }
    fire_enemy_bullets(state, rng);

    run_spawner(state, rng);
    update_phase(state, rng);

    advance_pool(&mut state.explosions);
    advance_pool(&mut state.bomb_effects);

    // A boss finished by the bomb ends the frame here
    if state.phase.is_terminal() {
        return;
    }
    resolve_collisions(state, rng);
}

/// Screen-clearing special attack. A boss brought to zero is left for the
/// phase machine to finish this same frame.
fn detonate_bomb(state: &mut GameState, rng: &mut impl RandomSource) {
    if !state.player.use_bomb() {
        return;
    }
    log::debug!(
        "Bomb detonated, {} left",
        state.player.special_attack_stock
    );

    state.enemy_bullets.clear();
    for enemy in state.enemies.iter_mut() {
        enemy.health -= BOMB_ENEMY_DAMAGE;
    }
    if let Some(boss) = state.boss.as_mut() {
        boss.health -= BOMB_BOSS_DAMAGE;
    }
    state
        .bomb_effects
        .push(BombEffect::new(state.player.center()));
    state.cue(SoundCue::Explosion);

    let mut i = 0;
    while i < state.enemies.len() {
        if state.enemies[i].health <= 0 {
            kill_enemy(state, rng, i, KILL_SCORE, KILL_EXPLOSION);
        } else {
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Boss, BossPattern, Bullet, Enemy, EnemyBullet, EnemyKind, Item};
    use crate::sim::rect::Rect;
    use crate::sim::rng::{ScriptedRng, session_rng};
    use crate::sim::spawn::seed_session;
    use crate::sim::state::{GameEvent, GamePhase};
    use glam::Vec2;
    use proptest::prelude::*;

    fn quiet_rng() -> ScriptedRng {
        ScriptedRng::constant(0.99)
    }

    fn firing() -> TickInput {
        TickInput {
            fire: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_single_shot() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        tick(&mut state, &firing(), &mut rng);

        assert_eq!(state.bullets.len(), 1);
        let bullet = &state.bullets[0];
        assert_eq!(bullet.rect.center().x, state.player.center().x);
        assert!(bullet.rect.y < state.player.rect.y);
        assert_eq!(bullet.dx, 0.0);
        assert!(state.events.contains(&GameEvent::Cue(SoundCue::Shot)));
    }

    #[test]
    fn test_tick_shot_cooldown() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        for _ in 0..SHOT_COOLDOWN {
            tick(&mut state, &firing(), &mut rng);
        }
        assert_eq!(state.bullets.len(), 1);
        tick(&mut state, &firing(), &mut rng);
        assert_eq!(state.bullets.len(), 2);
    }

    #[test]
    fn test_tick_threshold_enters_intro() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state.score = BOSS_SCORE_THRESHOLD;
        state
            .enemies
            .push(Enemy::new(EnemyKind::Shooter, 10.0, 10.0, 0.0));

        tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.phase, GamePhase::BossIntro);
        assert!(state.enemies.is_empty());
        assert_eq!(state.boss_intro_timer, 0);

        tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.boss_intro_timer, 1);
        assert!(state.enemies.is_empty());
    }

    #[test]
    fn test_tick_ramming_last_life_is_game_over() {
        let mut state = GameState::new(10);
        let mut rng = quiet_rng();
        state.score = 50;
        state.player.life = 1;
        let c = state.player.center();
        state
            .enemies
            .push(Enemy::new(EnemyKind::Shooter, c.x - 2.0, c.y - 2.0, 0.0));

        tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.player.life, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::SaveHighScore(50)));
    }

    #[test]
    fn test_tick_lethal_bullet_clears_boss() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state.phase = GamePhase::Boss;
        let mut boss = Boss::new();
        boss.rect.y = 20.0;
        boss.pattern = BossPattern::Barrage;
        boss.attack_timer = 1;
        boss.health = 5;
        state.boss = Some(boss);
        state.bullets.push(Bullet::new(120.0, 60.0, 0.0, 10, 1.0));

        tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.phase, GamePhase::Clear);
        assert!(state.boss.is_none());
        assert_eq!(state.explosions.len(), 1);
        assert_eq!(state.explosions[0].size, BOSS_EXPLOSION.0);
    }

    #[test]
    fn test_tick_hammer_edge() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        let swing = TickInput {
            hammer: true,
            ..Default::default()
        };
        tick(&mut state, &swing, &mut rng);
        assert!(state.player.is_hammering);
        assert_eq!(state.player.hammer_timer, HAMMER_DURATION);

        // Re-pressing mid-swing does not extend it
        tick(&mut state, &swing, &mut rng);
        assert_eq!(state.player.hammer_timer, HAMMER_DURATION - 1);
    }

    #[test]
    fn test_bomb_clears_screen() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state
            .enemies
            .push(Enemy::new(EnemyKind::Shooter, 20.0, 20.0, 0.0));
        state
            .enemies
            .push(Enemy::new(EnemyKind::Armored, 120.0, 20.0, 0.0));
        state.enemy_bullets.push(EnemyBullet {
            rect: Rect::new(60.0, 60.0, 3.0, 7.0),
            vel: Vec2::new(0.0, 1.0),
        });

        let bomb = TickInput {
            bomb: true,
            ..Default::default()
        };
        tick(&mut state, &bomb, &mut rng);
        assert_eq!(state.player.special_attack_stock, PLAYER_START_BOMBS - 1);
        assert!(state.enemies.is_empty());
        assert!(state.enemy_bullets.is_empty());
        assert_eq!(state.score, 2 * KILL_SCORE);
        assert_eq!(state.bomb_effects.len(), 1);
    }

    #[test]
    fn test_bomb_needs_stock() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state.player.special_attack_stock = 0;
        state
            .enemies
            .push(Enemy::new(EnemyKind::Shooter, 20.0, 20.0, 0.0));
        let bomb = TickInput {
            bomb: true,
            ..Default::default()
        };
        tick(&mut state, &bomb, &mut rng);
        assert_eq!(state.enemies.len(), 1);
        assert!(state.bomb_effects.is_empty());
    }

    #[test]
    fn test_bomb_can_finish_boss() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state.phase = GamePhase::Boss;
        let mut boss = Boss::new();
        boss.pattern = BossPattern::Barrage;
        boss.rect.y = 20.0;
        boss.attack_timer = 1;
        boss.health = BOMB_BOSS_DAMAGE;
        state.boss = Some(boss);
        let bomb = TickInput {
            bomb: true,
            ..Default::default()
        };
        tick(&mut state, &bomb, &mut rng);
        assert_eq!(state.phase, GamePhase::Clear);
        assert!(state.boss.is_none());
    }

    fn dying_boss(health: i32) -> Boss {
        let mut boss = Boss::new();
        boss.pattern = BossPattern::Barrage;
        boss.rect.y = 20.0;
        boss.attack_timer = 1;
        boss.health = health;
        boss
    }

    #[test]
    fn test_clear_by_bomb_keeps_record_consistent() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state.phase = GamePhase::Boss;
        state.score = 1500;
        state.boss = Some(dying_boss(BOMB_BOSS_DAMAGE));
        let c = state.player.center();
        state.items.push(Item::new(c.x, c.y));
        let bomb = TickInput {
            bomb: true,
            ..Default::default()
        };

        tick(&mut state, &bomb, &mut rng);
        assert_eq!(state.phase, GamePhase::Clear);
        assert_eq!(state.score, 1500);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.high_score, 1500);
        let saves: Vec<_> = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::SaveHighScore(_)))
            .collect();
        assert_eq!(saves, vec![&GameEvent::SaveHighScore(1500)]);
    }

    #[test]
    fn test_clear_entered_mid_tick_spares_player() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state.phase = GamePhase::Boss;
        state.boss = Some(dying_boss(0));
        let c = state.player.center();
        state
            .enemies
            .push(Enemy::new(EnemyKind::Armored, c.x - 2.0, c.y - 2.0, 0.0));

        tick(&mut state, &TickInput::default(), &mut rng);
        assert_eq!(state.phase, GamePhase::Clear);
        assert_eq!(state.player.life, PLAYER_START_LIFE);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_terminal_waits_for_restart() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state.score = 700;
        state.phase = GamePhase::GameOver;
        let frame = state.frame;

        tick(&mut state, &firing(), &mut rng);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.frame, frame);
        assert!(state.bullets.is_empty());

        let again = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &again, &mut rng);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.events.contains(&GameEvent::Restarted));
        assert_eq!(state.clouds.len(), CLOUD_SEED_COUNT);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = GameState::new(0);
        let mut rng = quiet_rng();
        state.score = 300;
        let again = TickInput {
            restart: true,
            ..Default::default()
        };
        tick(&mut state, &again, &mut rng);
        assert_eq!(state.score, 300);
        assert!(!state.events.contains(&GameEvent::Restarted));
    }

    #[test]
    fn test_determinism() {
        // Same seed, same inputs: identical sessions
        let idle = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let run = |seed: u64| {
            let mut rng = session_rng(seed);
            let mut state = GameState::new(0);
            seed_session(&mut state, &mut rng);
            for _ in 0..900 {
                tick(&mut state, &idle, &mut rng);
            }
            serde_json::to_string(&state).unwrap()
        };
        assert_eq!(run(4242), run(4242));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn prop_idle_session_stays_in_bounds(seed in any::<u64>()) {
            let idle = TickInput { idle_mode: true, ..Default::default() };
            let mut rng = session_rng(seed);
            let mut state = GameState::new(0);
            seed_session(&mut state, &mut rng);
            for _ in 0..2400 {
                let life_before = state.player.life;
                tick(&mut state, &idle, &mut rng);
                let p = &state.player;
                prop_assert!(p.life <= p.max_life);
                prop_assert!(life_before.saturating_sub(p.life) <= 1);
                prop_assert!(p.special_attack_stock <= MAX_BOMBS);
                prop_assert!(p.bullet_power >= 1 && p.bullet_power <= BULLET_MAX_POWER);
                prop_assert!(p.speed <= PLAYER_MAX_SPEED);
                prop_assert!(
                    state.boss.is_none()
                        || matches!(state.phase, GamePhase::Boss | GamePhase::GameOver)
                );
                state.drain_events();
            }
        }
    }
}
