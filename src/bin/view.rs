//! Interactive light-casting viewer.
//!
//! Controls  W/S = forward/back  A/D = strafe  ←/→ = turn
//!           drag = turn  Ctrl+click = move light  Tab = view toggle
//!           -/= = ray count  [/] = FOV  Shift = slow  Esc = quit
//!
//! ```bash
//! cargo run --release -- --rays 200 --fov 120
//! ```

use std::time::{Duration, Instant};

use clap::Parser;
use glam::{Vec2, vec2};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use luxcast::{
    engine::{DisplayMode, assemble},
    renderer::{Renderer, RendererExt, Software},
    world::{LightParams, demo_scene, ground_pick},
};

/// Light movement speed, world units per second.
const MOVE_SPEED: f32 = 3.0;

/// Turn rate for the arrow keys, degrees per second.
const TURN_SPEED: f32 = 120.0;

/// FOV adjustment rate, degrees per second.
const FOV_SPEED: f32 = 60.0;

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    height: usize,

    /// Number of rays in the fan
    #[arg(long, default_value_t = 100)]
    rays: u32,

    /// Field of view, degrees
    #[arg(long, default_value_t = 90.0)]
    fov: f32,

    /// Initial light heading, degrees
    #[arg(long, default_value_t = 0.0)]
    direction: f32,

    /// Start in the projected (pseudo-3D) view instead of the top-down one
    #[arg(long)]
    projected: bool,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let scene = demo_scene();
    let mut params = LightParams {
        origin: Vec2::ZERO,
        direction: opts.direction,
        fov: opts.fov,
        ray_count: opts.rays,
    };
    let mut mode = if opts.projected {
        DisplayMode::Projected3D
    } else {
        DisplayMode::TopDownDebug
    };

    let mut renderer = Software::default();
    // Size the viewport up front so picking works before the first draw.
    renderer.begin_frame(opts.width, opts.height);

    let mut win = Window::new("luxcast", opts.width, opts.height, WindowOptions::default())?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO;
    let mut acc_frames = 0usize;
    let mut last_print = Instant::now();

    let mut last_tick = Instant::now();
    let mut drag_anchor: Option<f32> = None;

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let dt = last_tick.elapsed().as_secs_f32();
        last_tick = Instant::now();

        /* --------------- movement, relative to the heading ---------------- */
        let mut forward = 0.0f32;
        let mut side = 0.0f32;
        if win.is_key_down(Key::W) {
            forward += 1.0;
        }
        if win.is_key_down(Key::S) {
            forward -= 1.0;
        }
        if win.is_key_down(Key::A) {
            side += 1.0; // +90° off the heading = strafe left
        }
        if win.is_key_down(Key::D) {
            side -= 1.0;
        }
        let shift = win.is_key_down(Key::LeftShift) || win.is_key_down(Key::RightShift);
        if forward != 0.0 || side != 0.0 {
            let speed = if shift { MOVE_SPEED / 4.0 } else { MOVE_SPEED };
            let heading = params.direction.to_radians() + side.atan2(forward);
            params.origin += vec2(heading.cos(), heading.sin()) * speed * dt;
        }

        /* --------------- heading / fan shape ------------------------------ */
        if win.is_key_down(Key::Left) {
            params.direction += TURN_SPEED * dt;
        }
        if win.is_key_down(Key::Right) {
            params.direction -= TURN_SPEED * dt;
        }
        if win.is_key_down(Key::LeftBracket) {
            params.fov = (params.fov - FOV_SPEED * dt).max(1.0);
        }
        if win.is_key_down(Key::RightBracket) {
            params.fov = (params.fov + FOV_SPEED * dt).min(360.0);
        }
        if win.is_key_pressed(Key::Equal, KeyRepeat::Yes) {
            params.ray_count = (params.ray_count + 1).min(2000);
        }
        if win.is_key_pressed(Key::Minus, KeyRepeat::Yes) {
            params.ray_count = params.ray_count.saturating_sub(1);
        }
        if win.is_key_pressed(Key::Tab, KeyRepeat::No) {
            mode.toggle();
        }

        /* --------------- mouse: drag-turn and Ctrl+click pick ------------- */
        let ctrl = win.is_key_down(Key::LeftCtrl) || win.is_key_down(Key::RightCtrl);
        if let Some((mx, my)) = win.get_mouse_pos(MouseMode::Discard) {
            if win.get_mouse_down(MouseButton::Left) {
                if ctrl {
                    // Cursor → world ray → ground-plane hit becomes the
                    // new light origin.
                    if let Some(point) = ground_pick(&renderer.pick_ray(mx, my)) {
                        params.origin = point;
                    }
                } else if let Some(anchor) = drag_anchor {
                    params.direction += (mx - anchor) / 10.0;
                }
                drag_anchor = Some(mx);
            } else {
                drag_anchor = None;
            }
        }

        /* --------------- draw --------------------------------------------- */
        let t0 = Instant::now();
        let instances = assemble(mode, &params, &scene);
        renderer.draw_frame(opts.width, opts.height, &instances, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            win.update_with_buffer(fb, w, h).unwrap()
        });

        if last_print.elapsed() >= Duration::from_secs(3) && acc_frames > 0 {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            println!(
                "avg render: {avg_ms:.2} ms  ({:.1} FPS)  rays {}  fov {:.0}°",
                1000.0 / avg_ms,
                params.ray_count,
                params.fov,
            );
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}
