//! Capability contract for scene objects that own animations.

/// Implemented by scene objects whose state is driven by animation players.
///
/// The engine loop calls [`update_animations`](Animated::update_animations)
/// once per frame with the milliseconds elapsed since the previous frame.
/// Implementations forward the delta to every player they own and apply the
/// resulting values to their own state.
pub trait Animated {
    /// Scene type this object belongs to.
    type Scene;

    /// The scene that owns this object.
    fn scene(&self) -> &Self::Scene;

    /// Advances the object's animations by `dt` milliseconds.
    fn update_animations(&mut self, dt: f32);
}
