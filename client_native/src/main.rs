mod audio;
mod font;
mod game;
mod input;
mod renderer;

use std::time::{Duration, Instant};

use pixels::{Pixels, SurfaceTexture};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyboardInput, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

use audio::{SoundBank, SoundEffect};
use game::Game;
use game_core::{Events, Params};
use input::{map_key_command, Command, InputState};

// One simulation tick per frame at 60 FPS
const TICK_INTERVAL: Duration = Duration::from_micros(16_667);
// Bound catch-up after a stall so we never spiral
const MAX_CATCH_UP_TICKS: u32 = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let width = Params::SCREEN_WIDTH as u32;
    let height = Params::SCREEN_HEIGHT as u32;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Pong")
        .with_inner_size(PhysicalSize::new(width, height))
        .with_resizable(false)
        .build(&event_loop)?;

    let surface_texture = SurfaceTexture::new(width, height, &window);
    let mut pixels = Pixels::new(width, height, surface_texture)?;

    let mut game = Game::new();
    // No output device just means a silent game
    let mut sound_bank = SoundBank::new().ok();
    let mut input_state = InputState::default();
    let mut last_tick = Instant::now();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    if size.width > 0 && size.height > 0 {
                        let _ = pixels.resize_surface(size.width, size.height);
                    }
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                } => {
                    input_state.handle_key(key, state);

                    if state == ElementState::Pressed {
                        match map_key_command(key) {
                            Some(Command::Quit) => {
                                *control_flow = ControlFlow::Exit;
                            }
                            Some(Command::ToggleSound) => {
                                if let Some(bank) = sound_bank.as_mut() {
                                    let enabled = bank.toggle();
                                    println!("Sound: {}", if enabled { "ON" } else { "OFF" });
                                }
                            }
                            Some(Command::SelectTarget(target))
                                if game.state.show_replay_menu() =>
                            {
                                game.start_match(target);
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                let mut ticks = 0;
                while last_tick.elapsed() >= TICK_INTERVAL && ticks < MAX_CATCH_UP_TICKS {
                    last_tick += TICK_INTERVAL;
                    game.tick(input_state.player_input());
                    play_tick_sounds(sound_bank.as_ref(), &game.events);
                    ticks += 1;
                }
                if ticks == MAX_CATCH_UP_TICKS {
                    // Drop the backlog after a long stall
                    last_tick = Instant::now();
                }
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let sound_on = sound_bank
                    .as_ref()
                    .map(|bank| bank.is_enabled())
                    .unwrap_or(false);
                renderer::draw(pixels.frame_mut(), &game, sound_on);
                if pixels.render().is_err() {
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });
}

fn play_tick_sounds(sound_bank: Option<&SoundBank>, events: &Events) {
    let Some(bank) = sound_bank else {
        return;
    };
    if events.ball_hit_paddle {
        bank.play(SoundEffect::PaddleHit);
    }
    if events.ball_hit_wall {
        bank.play(SoundEffect::WallBounce);
    }
    if events.any_scored() {
        bank.play(SoundEffect::Score);
    }
}
