//! Draw-command rendering
//!
//! The render pass walks the state left by a tick and emits an ordered list of
//! primitives for an external rasterizer. Output is a pure function of the
//! state and the render options; nothing flows back into the simulation.

pub mod hud;
pub mod shapes;

use glam::Vec2;

use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, Rect};

/// Fixed 16-entry palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Navy = 1,
    Purple = 2,
    Green = 3,
    Brown = 4,
    DarkBlue = 5,
    LightBlue = 6,
    White = 7,
    Red = 8,
    Orange = 9,
    Yellow = 10,
    Lime = 11,
    Cyan = 12,
    Gray = 13,
    Pink = 14,
    Peach = 15,
}

impl Color {
    /// Palette index (0 - 15)
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// One primitive, in integer canvas pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        color: Color,
    },
    Circle {
        x: i32,
        y: i32,
        r: i32,
        color: Color,
    },
    CircleOutline {
        x: i32,
        y: i32,
        r: i32,
        color: Color,
    },
    Triangle {
        points: [(i32, i32); 3],
        color: Color,
    },
    Pixel {
        x: i32,
        y: i32,
        color: Color,
    },
    Text {
        x: i32,
        y: i32,
        text: String,
        color: Color,
    },
}

/// Receiver of draw commands
pub trait DrawSink {
    fn draw(&mut self, command: DrawCommand);
}

impl DrawSink for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}

/// Presentation switches that do not live in the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Blink the invincible player and the bomb item
    pub blink: bool,
    /// Draw the controls legend
    pub show_controls: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            blink: true,
            show_controls: true,
        }
    }
}

impl RenderOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            blink: settings.effective_blink(),
            show_controls: settings.show_controls,
        }
    }
}

/// Float-to-pixel adapter over a sink. Degenerate shapes are dropped.
pub struct Canvas<'a> {
    sink: &'a mut dyn DrawSink,
}

impl<'a> Canvas<'a> {
    pub fn new(sink: &'a mut dyn DrawSink) -> Self {
        Self { sink }
    }

    pub fn clear(&mut self, color: Color) {
        self.sink.draw(DrawCommand::Clear(color));
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        let (w, h) = (w as i32, h as i32);
        if w <= 0 || h <= 0 {
            return;
        }
        self.sink.draw(DrawCommand::Rect {
            x: x.floor() as i32,
            y: y.floor() as i32,
            w,
            h,
            color,
        });
    }

    pub fn fill(&mut self, rect: &Rect, color: Color) {
        self.rect(rect.x, rect.y, rect.w, rect.h, color);
    }

    pub fn circle(&mut self, center: Vec2, r: f32, color: Color) {
        if r <= 0.0 {
            return;
        }
        self.sink.draw(DrawCommand::Circle {
            x: center.x.floor() as i32,
            y: center.y.floor() as i32,
            r: r as i32,
            color,
        });
    }

    pub fn circle_outline(&mut self, center: Vec2, r: f32, color: Color) {
        if r <= 0.0 {
            return;
        }
        self.sink.draw(DrawCommand::CircleOutline {
            x: center.x.floor() as i32,
            y: center.y.floor() as i32,
            r: r as i32,
            color,
        });
    }

    pub fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color) {
        let p = |v: Vec2| (v.x.floor() as i32, v.y.floor() as i32);
        self.sink.draw(DrawCommand::Triangle {
            points: [p(a), p(b), p(c)],
            color,
        });
    }

    pub fn pixel(&mut self, x: i32, y: i32, color: Color) {
        self.sink.draw(DrawCommand::Pixel { x, y, color });
    }

    pub fn text(&mut self, x: i32, y: i32, text: impl Into<String>, color: Color) {
        self.sink.draw(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            color,
        });
    }
}

/// Emit the full frame: background, entities, HUD, then any banner
pub fn render(state: &GameState, options: &RenderOptions, sink: &mut dyn DrawSink) {
    let mut canvas = Canvas::new(sink);
    let frame = state.frame;

    hud::background(&mut canvas, state.score, frame);

    let player = &state.player;
    let blinking_out = options.blink && player.is_invincible() && frame % 4 < 2;
    if !blinking_out {
        shapes::player(&mut canvas, player);
    }

    for bullet in &state.bullets {
        canvas.fill(&bullet.rect, Color::Yellow);
    }
    for enemy in &state.enemies {
        shapes::enemy(&mut canvas, enemy);
    }
    for bullet in &state.enemy_bullets {
        canvas.fill(&bullet.rect, Color::Pink);
    }
    for cloud in &state.clouds {
        canvas.fill(&cloud.rect, Color::White);
    }
    for item in &state.items {
        shapes::item(&mut canvas, item, options.blink, frame);
    }
    for heal in &state.heal_items {
        canvas.fill(&heal.rect, Color::Lime);
    }
    if let Some(boss) = &state.boss {
        shapes::boss(&mut canvas, boss);
    }
    for explosion in &state.explosions {
        shapes::explosion(&mut canvas, explosion);
    }
    for wave in &state.bomb_effects {
        shapes::bomb_wave(&mut canvas, wave);
    }

    hud::status(&mut canvas, state);
    if options.show_controls {
        hud::controls(&mut canvas);
    }
    match state.phase {
        GamePhase::GameOver => hud::banner(&mut canvas, "GAME OVER", Color::White),
        GamePhase::Clear => hud::banner(&mut canvas, "GAME CLEAR", Color::Yellow),
        _ => {}
    }
}
