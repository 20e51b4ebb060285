//! Backgrounds, status readouts and banners

use glam::Vec2;

use super::{Canvas, Color};
use crate::consts::*;
use crate::sim::GameState;

/// Score at which the sea gives way to open sky
pub const SKY_SCORE: u64 = 1000;
/// Score at which the sky gives way to space
pub const SPACE_SCORE: u64 = 2000;

const STAR_COUNT: u32 = 100;
/// Glyph advance of the rasterizer's built-in font
const GLYPH_WIDTH: i32 = 4;
const LIFE_BAR_WIDTH: f32 = 100.0;

/// Stage backdrop chosen by score
pub fn background(canvas: &mut Canvas, score: u64, frame: u64) {
    if score < SKY_SCORE {
        canvas.clear(Color::Navy);
        canvas.rect(0.0, 0.0, CANVAS_WIDTH, CANVAS_HEIGHT * 0.2, Color::Cyan);
    } else if score < SPACE_SCORE {
        canvas.clear(Color::Cyan);
    } else {
        canvas.clear(Color::Black);
        // Stars twinkle by reshuffling every 8 frames
        let epoch = (frame / 8) as u32;
        for i in 0..STAR_COUNT {
            let h = star_hash(i, epoch);
            let x = (h % CANVAS_WIDTH as u32) as i32;
            let y = ((h >> 16) % CANVAS_HEIGHT as u32) as i32;
            canvas.pixel(x, y, Color::White);
        }

        let radius = px(50.0);
        let earth = Vec2::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT * 0.75);
        canvas.circle(earth, radius, Color::Navy);
        canvas.circle(
            earth + Vec2::new(radius / 3.0, -radius / 3.0),
            radius / 2.0,
            Color::Green,
        );
        canvas.circle(
            earth + Vec2::new(-radius / 2.0, radius / 4.0),
            radius / 4.0,
            Color::Green,
        );
    }
}

/// Integer mix so star placement is a function of index and epoch only
fn star_hash(i: u32, epoch: u32) -> u32 {
    let mut h = i.wrapping_mul(0x9E37_79B9) ^ epoch.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 15;
    h = h.wrapping_mul(0x2C1B_3C6D);
    h ^= h >> 12;
    h = h.wrapping_mul(0x297A_2D39);
    h ^= h >> 15;
    h
}

/// Life bar, score, high score and bomb stock
pub fn status(canvas: &mut Canvas, state: &GameState) {
    let player = &state.player;
    let fraction = player.life as f32 / player.max_life as f32;
    canvas.rect(5.0, 5.0, LIFE_BAR_WIDTH, 5.0, Color::Navy);
    canvas.rect(5.0, 5.0, LIFE_BAR_WIDTH * fraction, 5.0, Color::Lime);

    canvas.text(5, 15, format!("SCORE: {}", state.score), Color::White);
    canvas.text(5, 25, format!("HIGH SCORE: {}", state.high_score), Color::White);
    canvas.text(
        5,
        35,
        format!("BOMB: {}", player.special_attack_stock),
        Color::White,
    );
}

pub fn controls(canvas: &mut Canvas) {
    let bottom = CANVAS_HEIGHT as i32;
    let lines = ["MOVE: ARROWS", "SHOT: SPACE", "HAMMER: Z", "BOMB: X"];
    for (i, line) in lines.iter().enumerate() {
        let y = bottom - 40 + i as i32 * 10;
        canvas.text(5, y, *line, Color::White);
    }
}

/// Black band across the middle with a title and the restart hint
pub fn banner(canvas: &mut Canvas, title: &str, color: Color) {
    let mid = CANVAS_HEIGHT / 2.0;
    canvas.rect(0.0, mid - 20.0, CANVAS_WIDTH, 40.0, Color::Black);
    canvas.text(centered(title), mid as i32 - 10, title, color);
    let hint = "PRESS R TO RESTART";
    canvas.text(centered(hint), mid as i32 + 5, hint, Color::White);
}

/// Left edge that centers `text` on the canvas
fn centered(text: &str) -> i32 {
    CANVAS_WIDTH as i32 / 2 - text.len() as i32 * GLYPH_WIDTH / 2
}
