//! CPU rendering into the RGBA framebuffer. Pure pixel pushing; every
//! value drawn here comes from read-only snapshots of the simulation.

use crate::font;
use crate::game::Game;
use game_core::Aabb;

const WHITE: [u8; 4] = [0xff, 0xff, 0xff, 0xff];
const GRAY: [u8; 4] = [0x80, 0x80, 0x80, 0xff];
const YELLOW: [u8; 4] = [0xff, 0xff, 0x00, 0xff];
const BLACK: [u8; 4] = [0x00, 0x00, 0x00, 0xff];

/// Render one frame of the game into `frame` (RGBA, row-major)
pub fn draw(frame: &mut [u8], game: &Game, sound_on: bool) {
    let width = game.config.screen_width as i32;
    let height = game.config.screen_height as i32;

    fill(frame, BLACK);

    // Center line
    fill_rect(frame, width, height, width / 2, 0, 1, height, WHITE);

    for paddle_box in game.paddle_boxes() {
        fill_box(frame, width, height, &paddle_box, WHITE);
    }
    if let Some(ball_box) = game.ball_box() {
        fill_ellipse(frame, width, height, &ball_box, WHITE);
    }

    // Scores
    let left_score = game.state.score.left.to_string();
    let right_score = game.state.score.right.to_string();
    draw_text(frame, width, height, width / 4, 20, 4, WHITE, &left_score);
    draw_text(
        frame,
        width,
        height,
        width * 3 / 4,
        20,
        4,
        WHITE,
        &right_score,
    );

    // Sound status indicator in the bottom corner
    let sound_status = if sound_on {
        "SOUND: ON (M TO TOGGLE)"
    } else {
        "SOUND: OFF (M TO TOGGLE)"
    };
    draw_text(frame, width, height, 10, height - 30, 2, GRAY, sound_status);

    if game.state.show_replay_menu() {
        draw_replay_menu(frame, width, height, game);
    }
}

fn draw_replay_menu(frame: &mut [u8], width: i32, height: i32, game: &Game) {
    dim(frame, 55);

    if let Some(winner) = game.winner_label() {
        let banner = format!("{winner} WINS!");
        draw_text_centered(frame, width, height, height / 2 - 120, 8, YELLOW, &banner);
    }

    let final_score = format!(
        "FINAL SCORE: {} - {}",
        game.state.score.left, game.state.score.right
    );
    draw_text_centered(frame, width, height, height / 2 - 60, 4, WHITE, &final_score);

    draw_text_centered(frame, width, height, height / 2, 5, WHITE, "PLAY AGAIN?");

    let option_y_start = height / 2 + 60;
    let option_spacing = 45;
    for (i, points) in [3, 5, 7].iter().enumerate() {
        let option = format!("PRESS {points} - BEST OF {points}");
        let y = option_y_start + option_spacing * i as i32;
        draw_text_centered(frame, width, height, y, 4, WHITE, &option);
    }

    let exit_y = option_y_start + option_spacing * 3 + 20;
    draw_text_centered(frame, width, height, exit_y, 4, GRAY, "PRESS ESC - EXIT GAME");
}

fn fill(frame: &mut [u8], color: [u8; 4]) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&color);
    }
}

/// Darken every pixel toward black, keeping `keep`/255 of its brightness
fn dim(frame: &mut [u8], keep: u16) {
    for pixel in frame.chunks_exact_mut(4) {
        for channel in &mut pixel[0..3] {
            *channel = ((*channel as u16 * keep) / 255) as u8;
        }
    }
}

fn put_pixel(frame: &mut [u8], width: i32, height: i32, x: i32, y: i32, color: [u8; 4]) {
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }
    let offset = ((y * width + x) * 4) as usize;
    frame[offset..offset + 4].copy_from_slice(&color);
}

fn fill_rect(frame: &mut [u8], width: i32, height: i32, x: i32, y: i32, w: i32, h: i32, color: [u8; 4]) {
    for row in y.max(0)..(y + h).min(height) {
        for col in x.max(0)..(x + w).min(width) {
            let offset = ((row * width + col) * 4) as usize;
            frame[offset..offset + 4].copy_from_slice(&color);
        }
    }
}

fn fill_box(frame: &mut [u8], width: i32, height: i32, aabb: &Aabb, color: [u8; 4]) {
    let size = aabb.size();
    fill_rect(
        frame,
        width,
        height,
        aabb.min.x as i32,
        aabb.min.y as i32,
        size.x.round() as i32,
        size.y.round() as i32,
        color,
    );
}

/// Filled ellipse inscribed in the box
fn fill_ellipse(frame: &mut [u8], width: i32, height: i32, aabb: &Aabb, color: [u8; 4]) {
    let size = aabb.size();
    let rx = size.x / 2.0;
    let ry = size.y / 2.0;
    let cx = aabb.min.x + rx;
    let cy = aabb.min.y + ry;

    let x0 = aabb.min.x.floor() as i32;
    let y0 = aabb.min.y.floor() as i32;
    let x1 = aabb.max.x.ceil() as i32;
    let y1 = aabb.max.y.ceil() as i32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = (x as f32 + 0.5 - cx) / rx;
            let dy = (y as f32 + 0.5 - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                put_pixel(frame, width, height, x, y, color);
            }
        }
    }
}

fn text_width(text: &str, scale: i32) -> i32 {
    let advance = (font::GLYPH_WIDTH as i32 + 1) * scale;
    text.chars().count() as i32 * advance - scale
}

fn draw_text_centered(
    frame: &mut [u8],
    width: i32,
    height: i32,
    y_center: i32,
    scale: i32,
    color: [u8; 4],
    text: &str,
) {
    let x = (width - text_width(text, scale)) / 2;
    let y = y_center - (font::GLYPH_HEIGHT as i32 * scale) / 2;
    draw_text(frame, width, height, x, y, scale, color, text);
}

#[allow(clippy::too_many_arguments)]
fn draw_text(
    frame: &mut [u8],
    width: i32,
    height: i32,
    x: i32,
    y: i32,
    scale: i32,
    color: [u8; 4],
    text: &str,
) {
    let advance = (font::GLYPH_WIDTH as i32 + 1) * scale;
    let mut pen_x = x;

    for c in text.chars() {
        if let Some(rows) = font::glyph(c) {
            for (row_idx, row) in rows.iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if row & (1u8 << (font::GLYPH_WIDTH - 1 - col)) != 0 {
                        fill_rect(
                            frame,
                            width,
                            height,
                            pen_x + col as i32 * scale,
                            y + row_idx as i32 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
        }
        pen_x += advance;
    }
}
