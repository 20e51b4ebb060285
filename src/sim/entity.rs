//! Entity kinds and their per-frame motion
//!
//! Every pooled kind implements [`Entity`] so the tick can advance and prune
//! pools uniformly. The player and the boss are singletons with their own
//! `advance`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::tick::TickInput;
use crate::consts::*;

/// Shared capability of everything that lives in a pool
pub trait Entity {
    /// Advance one frame
    fn advance(&mut self);
    /// True once the entity should be dropped from its pool
    fn is_expired(&self) -> bool;
}

/// Advance every member of a pool, then drop the expired ones
pub fn advance_pool<T: Entity>(pool: &mut Vec<T>) {
    for entity in pool.iter_mut() {
        entity.advance();
    }
    pool.retain(|e| !e.is_expired());
}

/// Player weapon mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShotType {
    #[default]
    Normal,
    /// Five-bullet fan
    Spread,
}

/// Result of a hostile collision landing on the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Barrier absorbed the hit
    BarrierLost,
    /// A life point was lost; carries remaining life
    LifeLost(u8),
}

/// The player ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub life: u8,
    pub max_life: u8,
    pub shot_type: ShotType,
    pub bullet_power: i32,
    pub bullet_size: f32,
    pub has_barrier: bool,
    pub special_attack_stock: u8,
    pub is_hammering: bool,
    pub hammer_timer: u32,
    pub invincible_timer: u32,
    pub shot_timer: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                CANVAS_WIDTH / 2.0 - PLAYER_SIZE / 2.0,
                CANVAS_HEIGHT - PLAYER_SIZE - PLAYER_BOTTOM_MARGIN,
                PLAYER_SIZE,
                PLAYER_SIZE,
            ),
            speed: PLAYER_BASE_SPEED,
            life: PLAYER_START_LIFE,
            max_life: PLAYER_MAX_LIFE,
            shot_type: ShotType::Normal,
            bullet_power: 1,
            bullet_size: BULLET_BASE_SIZE,
            has_barrier: false,
            special_attack_stock: PLAYER_START_BOMBS,
            is_hammering: false,
            hammer_timer: 0,
            invincible_timer: 0,
            shot_timer: 0,
        }
    }

    /// Move by held directions, clamp to the canvas, and run down timers
    pub fn advance(&mut self, input: &TickInput) {
        if input.up {
            self.rect.y -= self.speed;
        }
        if input.down {
            self.rect.y += self.speed;
        }
        if input.left {
            self.rect.x -= self.speed;
        }
        if input.right {
            self.rect.x += self.speed;
        }
        self.rect.x = self.rect.x.clamp(0.0, CANVAS_WIDTH - self.rect.w);
        self.rect.y = self.rect.y.clamp(0.0, CANVAS_HEIGHT - self.rect.h);

        if self.hammer_timer > 0 {
            self.hammer_timer -= 1;
            if self.hammer_timer == 0 {
                self.is_hammering = false;
            }
        }
        if self.invincible_timer > 0 {
            self.invincible_timer -= 1;
        }
        if self.shot_timer > 0 {
            self.shot_timer -= 1;
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_timer > 0
    }

    /// Start a swing if the previous one has finished
    pub fn trigger_hammer(&mut self) -> bool {
        if self.hammer_timer > 0 {
            return false;
        }
        self.is_hammering = true;
        self.hammer_timer = HAMMER_DURATION;
        true
    }

    /// Hammer hitbox, centered on the top edge of the ship
    pub fn hammer_hitbox(&self) -> Option<Rect> {
        self.is_hammering.then(|| {
            Rect::new(
                self.rect.x + self.rect.w / 2.0 - HAMMER_SIZE / 2.0,
                self.rect.y - HAMMER_SIZE / 2.0,
                HAMMER_SIZE,
                HAMMER_SIZE,
            )
        })
    }

    /// Take one bomb from stock
    pub fn use_bomb(&mut self) -> bool {
        if self.special_attack_stock == 0 {
            return false;
        }
        self.special_attack_stock -= 1;
        true
    }

    pub fn add_bomb(&mut self) {
        self.special_attack_stock = (self.special_attack_stock + 1).min(MAX_BOMBS);
    }

    pub fn heal(&mut self) {
        self.life = (self.life + 1).min(self.max_life);
    }

    /// Apply a hostile hit: barrier first, otherwise a life point plus invincibility
    pub fn take_hit(&mut self) -> HitOutcome {
        if self.has_barrier {
            self.has_barrier = false;
            return HitOutcome::BarrierLost;
        }
        self.life = self.life.saturating_sub(1);
        self.invincible_timer = INVINCIBLE_FRAMES;
        HitOutcome::LifeLost(self.life)
    }

    pub fn boost_speed(&mut self) {
        self.speed = (self.speed + PLAYER_SPEED_STEP).min(PLAYER_MAX_SPEED);
    }

    pub fn power_up(&mut self) {
        self.shot_type = ShotType::Normal;
        self.bullet_power = (self.bullet_power + 1).min(BULLET_MAX_POWER);
        self.bullet_size = (self.bullet_size + BULLET_SIZE_STEP).min(BULLET_MAX_SIZE);
    }

    pub fn equip_spread(&mut self) {
        self.shot_type = ShotType::Spread;
        self.bullet_power = 1;
        self.bullet_size = BULLET_BASE_SIZE;
    }
}

/// A player bullet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub rect: Rect,
    /// Horizontal drift, as a fraction of half the vertical speed
    pub dx: f32,
    pub speed: f32,
    pub power: i32,
}

impl Bullet {
    pub fn new(x: f32, y: f32, dx: f32, power: i32, size: f32) -> Self {
        Self {
            rect: Rect::new(x, y, size, size * 2.0),
            dx,
            speed: BULLET_SPEED,
            power,
        }
    }
}

impl Entity for Bullet {
    fn advance(&mut self) {
        self.rect.y -= self.speed;
        self.rect.x += self.dx * (self.speed / 2.0);
    }

    fn is_expired(&self) -> bool {
        self.rect.is_off_canvas()
    }
}

/// Enemy archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fires straight down
    Shooter,
    /// Small and fast
    Swarmer,
    /// Absorbs bullets; only the hammer and bombs hurt it
    Armored,
}

impl EnemyKind {
    /// Weighted pick from a unit roll: 60% shooter, 25% swarmer, 15% armored
    pub fn from_roll(roll: f32) -> Self {
        if roll < 0.6 {
            EnemyKind::Shooter
        } else if roll < 0.85 {
            EnemyKind::Swarmer
        } else {
            EnemyKind::Armored
        }
    }

    pub fn size(&self) -> f32 {
        match self {
            EnemyKind::Shooter => px(40.0),
            EnemyKind::Swarmer => px(20.0),
            EnemyKind::Armored => px(50.0),
        }
    }

    pub fn health(&self) -> i32 {
        match self {
            EnemyKind::Shooter => 2,
            EnemyKind::Swarmer => 1,
            EnemyKind::Armored => 5,
        }
    }

    pub fn speed(&self) -> f32 {
        match self {
            EnemyKind::Shooter => spd(2.0),
            EnemyKind::Swarmer => spd(4.0),
            EnemyKind::Armored => spd(1.0),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub rect: Rect,
    pub speed: f32,
    pub health: i32,
    pub dx: f32,
}

impl Enemy {
    pub fn new(kind: EnemyKind, x: f32, y: f32, dx: f32) -> Self {
        let size = kind.size();
        Self {
            kind,
            rect: Rect::new(x, y, size, size),
            speed: kind.speed(),
            health: kind.health(),
            dx,
        }
    }
}

impl Entity for Enemy {
    fn advance(&mut self) {
        self.rect.y += self.speed;
        self.rect.x += self.dx;
        // Only flip when heading further out, so a wall contact can't jitter
        if (self.rect.x < 0.0 && self.dx < 0.0) || (self.rect.right() > CANVAS_WIDTH && self.dx > 0.0)
        {
            self.dx = -self.dx;
        }
    }

    fn is_expired(&self) -> bool {
        self.rect.is_below_canvas()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub rect: Rect,
    pub vel: Vec2,
}

impl EnemyBullet {
    /// Bullet leaving the center of `source` at `angle` radians (0 = right, π/2 = down)
    pub fn aimed(source: &Rect, angle: f32) -> Self {
        Self {
            rect: Rect::new(
                source.x + source.w / 2.0 - ENEMY_BULLET_WIDTH / 2.0,
                source.y + source.h / 2.0,
                ENEMY_BULLET_WIDTH,
                ENEMY_BULLET_HEIGHT,
            ),
            vel: Vec2::from_angle(angle) * ENEMY_BULLET_SPEED,
        }
    }
}

impl Entity for EnemyBullet {
    fn advance(&mut self) {
        self.rect.x += self.vel.x;
        self.rect.y += self.vel.y;
    }

    fn is_expired(&self) -> bool {
        self.rect.is_off_canvas()
    }
}

/// Power-up item kinds, in cycling order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemKind {
    #[default]
    Score,
    Speed,
    Power,
    Spread,
    Barrier,
    Bomb,
}

impl ItemKind {
    pub const ALL: [ItemKind; 6] = [
        ItemKind::Score,
        ItemKind::Speed,
        ItemKind::Power,
        ItemKind::Spread,
        ItemKind::Barrier,
        ItemKind::Bomb,
    ];

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }
}

/// A power-up dropped by a cloud
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub rect: Rect,
    pub speed: f32,
    pub kind: ItemKind,
    /// Apex y while bouncing after a bullet strike
    pub bounce_apex: Option<f32>,
}

impl Item {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ITEM_SIZE, ITEM_SIZE),
            speed: ITEM_FALL_SPEED,
            kind: ItemKind::Score,
            bounce_apex: None,
        }
    }

    pub fn is_bouncing(&self) -> bool {
        self.bounce_apex.is_some()
    }

    /// Bullet strike: cycle the kind and pop upward
    pub fn strike(&mut self) {
        self.kind = self.kind.next();
        self.bounce_apex = Some(self.rect.y - ITEM_BOUNCE_HEIGHT);
    }
}

impl Entity for Item {
    fn advance(&mut self) {
        match self.bounce_apex {
            Some(apex) => {
                self.rect.y -= ITEM_BOUNCE_SPEED;
                if self.rect.y <= apex {
                    self.rect.y = apex;
                    self.bounce_apex = None;
                }
            }
            None => self.rect.y += self.speed,
        }
    }

    fn is_expired(&self) -> bool {
        self.rect.is_below_canvas()
    }
}

/// Restores one life point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealItem {
    pub rect: Rect,
    pub speed: f32,
}

impl HealItem {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, ITEM_SIZE, ITEM_SIZE),
            speed: HEAL_FALL_SPEED,
        }
    }
}

impl Entity for HealItem {
    fn advance(&mut self) {
        self.rect.y += self.speed;
    }

    fn is_expired(&self) -> bool {
        self.rect.is_below_canvas()
    }
}

/// Falling cloud that releases one item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    pub rect: Rect,
    pub speed: f32,
    pub dropped_item: bool,
}

impl Cloud {
    pub fn new(rect: Rect, speed: f32) -> Self {
        Self {
            rect,
            speed,
            dropped_item: false,
        }
    }

    pub fn has_crossed_midline(&self) -> bool {
        self.rect.center().y >= CANVAS_HEIGHT / 2.0
    }

    /// Mark the cloud spent; true only the first time
    pub fn take_drop(&mut self) -> bool {
        if self.dropped_item {
            return false;
        }
        self.dropped_item = true;
        true
    }
}

impl Entity for Cloud {
    fn advance(&mut self) {
        self.rect.y += self.speed;
    }

    fn is_expired(&self) -> bool {
        self.rect.is_below_canvas()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPattern {
    /// Entering from above
    Descend,
    /// Sweeping side to side, firing rings
    Barrage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub rect: Rect,
    pub speed: f32,
    pub dx: f32,
    pub health: i32,
    pub max_health: i32,
    pub pattern: BossPattern,
    pub attack_timer: u32,
}

impl Default for Boss {
    fn default() -> Self {
        Self::new()
    }
}

impl Boss {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                CANVAS_WIDTH / 2.0 - BOSS_SIZE / 2.0,
                -BOSS_SIZE,
                BOSS_SIZE,
                BOSS_SIZE,
            ),
            speed: BOSS_SPEED,
            dx: 1.0,
            health: BOSS_MAX_HEALTH,
            max_health: BOSS_MAX_HEALTH,
            pattern: BossPattern::Descend,
            attack_timer: 0,
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Ring volley due this frame
    pub fn wants_to_fire(&self) -> bool {
        self.pattern == BossPattern::Barrage && self.attack_timer % BOSS_BARRAGE_INTERVAL == 0
    }

    pub fn health_fraction(&self) -> f32 {
        (self.health.max(0) as f32 / self.max_health as f32).clamp(0.0, 1.0)
    }

    /// Descend to the hover line, then sweep sideways firing barrages
    pub fn advance(&mut self) {
        match self.pattern {
            BossPattern::Descend => {
                self.rect.y += self.speed;
                if self.rect.y >= BOSS_HOVER_Y {
                    self.pattern = BossPattern::Barrage;
                }
            }
            BossPattern::Barrage => {
                self.rect.x += self.dx * self.speed;
                if (self.rect.x <= 0.0 && self.dx < 0.0)
                    || (self.rect.right() >= CANVAS_WIDTH && self.dx > 0.0)
                {
                    self.dx = -self.dx;
                }
                self.attack_timer += 1;
            }
        }
    }
}

/// Cosmetic square burst
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub center: Vec2,
    pub size: f32,
    pub timer: u32,
    pub duration: u32,
}

impl Explosion {
    pub fn new(center: Vec2, (size, duration): (f32, u32)) -> Self {
        Self {
            center,
            size,
            timer: duration,
            duration,
        }
    }
}

impl Entity for Explosion {
    fn advance(&mut self) {
        self.timer = self.timer.saturating_sub(1);
    }

    fn is_expired(&self) -> bool {
        self.timer == 0
    }
}

/// Expanding shockwave left by a bomb
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BombEffect {
    pub center: Vec2,
    pub radius: f32,
    pub max_radius: f32,
}

impl BombEffect {
    pub fn new(center: Vec2) -> Self {
        Self {
            center,
            radius: 0.0,
            max_radius: CANVAS_WIDTH,
        }
    }
}

impl Entity for BombEffect {
    fn advance(&mut self) {
        self.radius += BOMB_WAVE_SPEED;
    }

    fn is_expired(&self) -> bool {
        self.radius > self.max_radius
    }
}
