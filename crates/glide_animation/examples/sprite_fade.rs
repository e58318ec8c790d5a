//! Sprite Fade Demo
//!
//! Drives a scene object's opacity and scale from curve players:
//! - a one-shot eased fade built in code
//! - a looping pulse parsed from curve-file text
//! - lifecycle hooks reporting wraps and completion
//!
//! Run with: cargo run -p glide_animation --example sprite_fade

use anyhow::Result;
use glide_animation::{parse_curves, CurvePlayer, PlayerGroup};
use glide_core::Animated;

const PULSE_CURVES: &str = "\
# scale pulse: rise fast, settle slow
0 1 40 0 -40 0.15 120 1.3
120 1.3 60 0 -60 -0.1 400 1
";

struct Scene {
    name: &'static str,
}

struct Sprite {
    scene: Scene,
    opacity: f32,
    scale: f32,
    players: PlayerGroup,
}

impl Sprite {
    fn new(scene: Scene) -> Result<Self> {
        let mut players = PlayerGroup::new();

        let mut fade = CurvePlayer::ease_in_out(0.0, 1.0, 900.0, 250.0, 250.0);
        fade.on_ended(|_| tracing::info!("fade finished"));
        players.insert_named("fade", fade);

        let mut pulse = CurvePlayer::new(parse_curves(PULSE_CURVES)?);
        pulse.set_repeat(true);
        pulse.on_repeated(|p| tracing::debug!(value = p.value(), "pulse wrapped"));
        players.insert_named("pulse", pulse);

        Ok(Self {
            scene,
            opacity: 0.0,
            scale: 1.0,
            players,
        })
    }

    fn start(&mut self) {
        if let Some(fade) = self.players.by_name_mut("fade") {
            fade.start();
        }
        if let Some(pulse) = self.players.by_name_mut("pulse") {
            pulse.start();
        }
    }
}

impl Animated for Sprite {
    type Scene = Scene;

    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn update_animations(&mut self, dt: f32) {
        self.players.advance_all(dt);
        if let Some(fade) = self.players.by_name("fade") {
            self.opacity = fade.value();
        }
        if let Some(pulse) = self.players.by_name("pulse") {
            self.scale = pulse.value();
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut sprite = Sprite::new(Scene { name: "intro" })?;
    sprite.start();

    // Fixed 60fps step: 1.5 seconds covers the whole fade and a few
    // pulse wraps.
    let dt = 1000.0 / 60.0;
    for frame in 0..90 {
        sprite.update_animations(dt);
        if frame % 15 == 0 {
            tracing::info!(
                scene = sprite.scene().name,
                frame,
                opacity = sprite.opacity,
                scale = sprite.scale,
                "tick"
            );
        }
    }

    Ok(())
}
