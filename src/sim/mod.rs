//! Gameplay simulation module
//!
//! Everything here is renderer- and platform-free:
//! - Slot pools are fixed-size and never grow
//! - Iteration is always in slot/lattice index order
//! - Frame delta comes from the caller, never from a clock

pub mod camera;
pub mod pillars;
pub mod pool;
pub mod projectile;

pub use camera::{Camera, CameraController, FirstPersonController, LookInput};
pub use pillars::{GridLayout, NamedColor, Pillar, PillarGrid};
pub use pool::{LifetimePool, Slot};
pub use projectile::{LiveProjectile, PROJECTILE_SIZE, Projectile, ProjectileSystem};
