//! Entity shapes built from canvas primitives

use glam::Vec2;

use super::{Canvas, Color};
use crate::consts::px;
use crate::sim::{BombEffect, Boss, Enemy, EnemyKind, Explosion, Item, ItemKind, Player};

/// Rings drawn per bomb wave, and their spacing
const WAVE_RINGS: usize = 3;
const WAVE_RING_GAP: f32 = 20.0;

/// Little figure with arms; barrier bubble behind, hammer block in front
pub fn player(canvas: &mut Canvas, player: &Player) {
    let r = player.rect;
    let (x, y, w, h) = (r.x, r.y, r.w, r.h);

    if player.has_barrier {
        canvas.circle(r.center(), w / 2.0, Color::LightBlue);
    }

    canvas.circle(Vec2::new(x + w / 2.0, y + h / 4.0), w / 4.0, Color::Peach);
    canvas.rect(x + w / 4.0, y + h / 2.0, w / 2.0, h / 2.0, Color::Peach);
    canvas.rect(x, y + h / 2.0, w / 4.0, h / 4.0, Color::Peach);
    canvas.rect(x + w * 3.0 / 4.0, y + h / 2.0, w / 4.0, h / 4.0, Color::Peach);

    if let Some(hitbox) = player.hammer_hitbox() {
        canvas.fill(&hitbox, Color::Yellow);
    }
}

pub fn enemy_color(kind: EnemyKind) -> Color {
    match kind {
        EnemyKind::Shooter => Color::Red,
        EnemyKind::Swarmer => Color::Orange,
        EnemyKind::Armored => Color::Gray,
    }
}

/// Bird-like silhouette: body, beak, wings, tail
pub fn enemy(canvas: &mut Canvas, enemy: &Enemy) {
    let r = enemy.rect;
    let (x, y, w, h) = (r.x, r.y, r.w, r.h);
    let color = enemy_color(enemy.kind);
    let v = Vec2::new;

    canvas.rect(x, y + h / 4.0, w, h / 2.0, color);
    canvas.triangle(
        v(x + w / 4.0, y),
        v(x + w * 3.0 / 4.0, y),
        v(x + w / 2.0, y + h / 4.0),
        color,
    );
    canvas.triangle(
        v(x - w / 4.0, y + h / 4.0),
        v(x, y + h / 2.0),
        v(x, y + h / 4.0),
        Color::Yellow,
    );
    canvas.triangle(
        v(x + w, y + h / 4.0),
        v(x + w * 5.0 / 4.0, y + h / 2.0),
        v(x + w, y + h / 4.0),
        Color::Yellow,
    );
    canvas.triangle(
        v(x + w / 2.0, y + h / 2.0),
        v(x + w * 3.0 / 4.0, y + h),
        v(x + w / 4.0, y + h),
        color,
    );
}

pub fn item_color(kind: ItemKind) -> Color {
    match kind {
        ItemKind::Score => Color::Yellow,
        ItemKind::Speed => Color::Cyan,
        ItemKind::Power => Color::Gray,
        ItemKind::Spread => Color::Purple,
        ItemKind::Barrier => Color::LightBlue,
        ItemKind::Bomb => Color::White,
    }
}

/// Colored tile; the bomb tile flashes on a 10-frame cycle when `blink` is set
pub fn item(canvas: &mut Canvas, item: &Item, blink: bool, frame: u64) {
    if item.kind == ItemKind::Bomb && blink && frame % 10 >= 5 {
        return;
    }
    canvas.fill(&item.rect, item_color(item.kind));
}

/// Body plus a health bar just above it
pub fn boss(canvas: &mut Canvas, boss: &Boss) {
    let r = boss.rect;
    canvas.fill(&r, Color::Purple);

    let bar_y = r.y - px(10.0);
    let bar_h = px(5.0);
    canvas.rect(r.x, bar_y, r.w, bar_h, Color::Navy);
    canvas.rect(r.x, bar_y, r.w * boss.health_fraction(), bar_h, Color::Lime);
}

pub fn explosion(canvas: &mut Canvas, explosion: &Explosion) {
    if explosion.timer == 0 {
        return;
    }
    let half = explosion.size / 2.0;
    canvas.rect(
        explosion.center.x - half,
        explosion.center.y - half,
        explosion.size,
        explosion.size,
        Color::White,
    );
}

/// Trailing concentric rings
pub fn bomb_wave(canvas: &mut Canvas, wave: &BombEffect) {
    for i in 0..WAVE_RINGS {
        let r = wave.radius - i as f32 * WAVE_RING_GAP;
        canvas.circle_outline(wave.center, r, Color::White);
    }
}
