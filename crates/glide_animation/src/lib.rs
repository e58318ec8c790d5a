//! Glide Animation System
//!
//! Time-driven tweening along piecewise cubic Bezier curves.
//!
//! # Features
//!
//! - **Curves**: closed-form time inversion, no iterative refinement
//! - **Players**: sequenced segments, looping, pause/resume, lifecycle hooks
//! - **Groups**: advance a whole set of players with one call
//! - **Curve files**: plain-text segment definitions with typed errors
//!
//! # Example
//!
//! ```rust
//! use glide_animation::CurvePlayer;
//!
//! let mut fade = CurvePlayer::ease(0.0, 1.0, 1000.0);
//! fade.start();
//! fade.advance(500.0);
//! assert!((fade.value() - 0.5).abs() < 1e-4);
//! ```

pub mod curve;
pub mod group;
pub mod loader;
pub mod player;

pub use curve::CubicBezier;
pub use group::{PlayerGroup, PlayerId};
pub use loader::{load_curves, parse_curves, CurveFileError};
pub use player::{CurvePlayer, Hook, PlayState, ValueHook};
