//! Per-frame orchestration
//!
//! One frame runs to completion before the next: fire input → projectile
//! step → camera step → draw. The frame delta comes from the platform timer
//! as-is; there is no fixed timestep here.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::format_vec3;
use crate::renderer::{DrawTarget, colors};
use crate::settings::Settings;
use crate::sim::{
    Camera, CameraController, FirstPersonController, GridLayout, LookInput, PillarGrid,
    ProjectileSystem,
};

/// Input sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Primary (left) button held: fire every frame while down
    pub fire: bool,
    /// Secondary (right) button held: snap aim back to the origin
    pub reset_aim: bool,
    pub look: LookInput,
}

/// Everything the frame loop owns
#[derive(Debug, Clone)]
pub struct Game<C = FirstPersonController> {
    pub projectiles: ProjectileSystem,
    pub pillars: PillarGrid,
    pub camera: Camera,
    pub controller: C,
    /// Frames stepped so far
    pub frame_count: u64,
}

impl Game<FirstPersonController> {
    /// Fresh range with an entropy-seeded pillar palette
    pub fn new() -> Self {
        Self::with_controller(FirstPersonController::default(), &mut Pcg32::from_os_rng())
    }

    /// Fresh range tuned by the player's preferences
    pub fn from_settings(settings: &Settings) -> Self {
        let mut game =
            Self::with_controller(FirstPersonController::from(settings), &mut Pcg32::from_os_rng());
        game.camera.fovy = settings.effective_fovy();
        game
    }
}

impl Default for Game<FirstPersonController> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CameraController> Game<C> {
    /// Build the pillar lattice once and place the player at the start
    pub fn with_controller(controller: C, rng: &mut impl Rng) -> Self {
        Self {
            projectiles: ProjectileSystem::new(),
            pillars: PillarGrid::generate(GridLayout::default(), rng),
            camera: Camera::default(),
            controller,
            frame_count: 0,
        }
    }

    /// Advance one frame of `dt` seconds
    pub fn frame(&mut self, input: &FrameInput, dt: f32) {
        if input.fire {
            let (origin, velocity) = self.camera.muzzle(PLAYER_GUN_LENGTH, PROJECTILE_SPEED);
            self.projectiles.spawn(origin, velocity);
        }

        self.projectiles.update(dt);
        self.controller.update(&mut self.camera, &input.look, dt);

        if input.reset_aim {
            self.camera.target = glam::Vec3::ZERO;
        }

        self.frame_count += 1;
    }

    /// Issue this frame's draw calls
    pub fn draw(&self, target: &mut impl DrawTarget) {
        target.clear(colors::BACKGROUND);

        target.grid(GROUND_GRID_SLICES, GROUND_GRID_SPACING);
        self.pillars
            .render(|center, size, color| target.cube(center, size, color.rgba()));
        self.projectiles
            .render(|center, size| target.cube(center, size, colors::PROJECTILE));

        target.text(&self.hud_text(), HUD_X, HUD_Y, HUD_FONT_SIZE, colors::HUD_TEXT);
    }

    /// `Target: {x, y, z}` for the HUD
    pub fn hud_text(&self) -> String {
        format!("Target: {}", format_vec3(self.camera.target))
    }
}
