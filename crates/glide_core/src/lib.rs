//! Glide Core
//!
//! This crate provides the foundational primitives for the Glide animation
//! system:
//!
//! - **Geometry**: the [`Vec2`] carrier used for curve anchors and control
//!   offsets
//! - **Capabilities**: the [`Animated`] contract scene objects implement to
//!   receive per-frame animation updates
//!
//! # Example
//!
//! ```rust
//! use glide_core::Animated;
//!
//! struct Scene;
//!
//! struct Blob {
//!     scene: Scene,
//!     x: f32,
//! }
//!
//! impl Animated for Blob {
//!     type Scene = Scene;
//!
//!     fn scene(&self) -> &Scene {
//!         &self.scene
//!     }
//!
//!     fn update_animations(&mut self, dt: f32) {
//!         self.x += dt * 0.001;
//!     }
//! }
//!
//! let mut blob = Blob { scene: Scene, x: 0.0 };
//! blob.update_animations(16.0);
//! assert!(blob.x > 0.0);
//! ```

pub mod animated;
pub mod vec2;

pub use animated::Animated;
pub use vec2::Vec2;
