//! Frame rendering
//!
//! Clears to the background color, draws the score box, then every sprite
//! in `all` group order. Meteors are drawn rotated about their center;
//! everything else is blitted at its rect's top-left corner.

use ::rand::Rng;
use macroquad::prelude::*;

use super::components::{Kind, Sprite};
use super::rect::{Anchor, FRect};
use super::runtime::Game;
use super::world::GroupId;
use crate::assets::{Assets, SpriteTextures};
use crate::config::GameConfig;

/// Segments per rounded corner
const CORNER_SEGMENTS: usize = 6;

/// Draw one frame of `game`. The score is read at `now_ms`.
pub fn draw_frame<R: Rng>(game: &Game<R>, assets: &Assets, now_ms: u64) {
    let config = game.config();
    clear_background(config.background);

    draw_score(game.score(now_ms), &assets.font, config);

    let world = game.world();
    for entity in world.group(GroupId::All).iter() {
        if let Some(sprite) = world.get(entity) {
            draw_sprite(sprite, &assets.textures);
        }
    }
}

fn blit(texture: &Texture2D, x: f32, y: f32) {
    draw_texture(texture, x, y, WHITE);
}

fn draw_sprite(sprite: &Sprite, textures: &SpriteTextures) {
    let rect = sprite.rect;
    match &sprite.kind {
        Kind::Star => blit(&textures.star, rect.x, rect.y),
        Kind::Player(_) => blit(&textures.player, rect.x, rect.y),
        Kind::Laser(_) => blit(&textures.laser, rect.x, rect.y),
        Kind::Meteor(meteor) => {
            let size = meteor.base_size();
            let center = rect.center();
            // Positive angles turn counter-clockwise on screen; macroquad
            // rotates clockwise with y pointing down.
            draw_texture_ex(
                &textures.meteor,
                center.x - size.x * 0.5,
                center.y - size.y * 0.5,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(size),
                    rotation: -meteor.rotation().to_radians(),
                    ..Default::default()
                },
            );
        }
        Kind::Explosion(explosion) => {
            if let Some(frame) = textures.explosion.get(explosion.frame()) {
                blit(frame, rect.x, rect.y);
            }
        }
    }
}

/// Score text centred near the bottom, inside a rounded outline
fn draw_score(score: u64, font: &Font, config: &GameConfig) {
    let text = score.to_string();
    let dims = measure_text(&text, Some(font), config.font_size, 1.0);

    let text_rect = FRect::anchored(
        vec2(dims.width, dims.height),
        Anchor::MidBottom,
        vec2(config.screen_width * 0.5, config.screen_height - config.score_margin),
    );
    let (pad_w, pad_h) = config.score_padding;
    let frame = text_rect.inflate(pad_w, pad_h).moved(0.0, config.score_box_shift);
    draw_rounded_outline(&frame, config.score_outline, config.score_radius, config.score_color);

    draw_text_ex(
        &text,
        text_rect.x,
        text_rect.y + dims.offset_y,
        TextParams {
            font: Some(font),
            font_size: config.font_size,
            color: config.score_color,
            ..Default::default()
        },
    );
}

/// Stroke a rounded rectangle. The stroke lies inside `rect`.
fn draw_rounded_outline(rect: &FRect, thickness: f32, radius: f32, color: Color) {
    let half = thickness * 0.5;
    // Centre line of the stroke
    let r = FRect::new(rect.x + half, rect.y + half, rect.w - thickness, rect.h - thickness);
    let radius = (radius - half).max(0.0).min(r.w * 0.5).min(r.h * 0.5);

    draw_line(r.left() + radius, r.top(), r.right() - radius, r.top(), thickness, color);
    draw_line(r.left() + radius, r.bottom(), r.right() - radius, r.bottom(), thickness, color);
    draw_line(r.left(), r.top() + radius, r.left(), r.bottom() - radius, thickness, color);
    draw_line(r.right(), r.top() + radius, r.right(), r.bottom() - radius, thickness, color);

    if radius <= 0.0 {
        return;
    }

    use std::f32::consts::{FRAC_PI_2, PI};
    let corners = [
        (vec2(r.right() - radius, r.top() + radius), -FRAC_PI_2),
        (vec2(r.left() + radius, r.top() + radius), PI),
        (vec2(r.left() + radius, r.bottom() - radius), FRAC_PI_2),
        (vec2(r.right() - radius, r.bottom() - radius), 0.0),
    ];
    for (center, start) in corners {
        let mut prev = center + vec2(start.cos(), start.sin()) * radius;
        for i in 1..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * i as f32 / CORNER_SEGMENTS as f32;
            let next = center + vec2(angle.cos(), angle.sin()) * radius;
            draw_line(prev.x, prev.y, next.x, next.y, thickness, color);
            prev = next;
        }
    }
}
