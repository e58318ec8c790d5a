//! Sequenced playback of Bezier segments with lifecycle hooks.

use std::path::Path;

use glide_core::Vec2;
use smallvec::SmallVec;

use crate::curve::CubicBezier;
use crate::loader::{self, CurveFileError};

/// Playback states of a [`CurvePlayer`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayState {
    /// Constructed but never started.
    #[default]
    Waiting,
    /// Advancing on every tick.
    Running,
    /// Suspended mid-run; resumable.
    Paused,
    /// Ran to completion or was stopped; restartable.
    Ended,
}

/// Lifecycle callback with mutable access to the firing player.
pub type Hook = Box<dyn FnMut(&mut CurvePlayer) + Send>;

/// Per-tick callback receiving the freshly computed value.
pub type ValueHook = Box<dyn FnMut(&mut CurvePlayer, f32) + Send>;

/// Named hook slots; every slot is optional and independent.
#[derive(Default)]
struct Hooks {
    started: Option<Hook>,
    paused: Option<Hook>,
    resumed: Option<Hook>,
    ended: Option<Hook>,
    repeated: Option<Hook>,
    pre_update: Option<Hook>,
    updated: Option<ValueHook>,
}

// A hook borrows the player mutably, so its slot is emptied for the
// duration of the call. A hook that installs a replacement mid-call wins
// over the one being restored.
macro_rules! fire {
    ($player:expr, $slot:ident) => {
        if let Some(mut hook) = $player.hooks.$slot.take() {
            hook(&mut *$player);
            if $player.hooks.$slot.is_none() {
                $player.hooks.$slot = Some(hook);
            }
        }
    };
    ($player:expr, $slot:ident, $value:expr) => {
        if let Some(mut hook) = $player.hooks.$slot.take() {
            hook(&mut *$player, $value);
            if $player.hooks.$slot.is_none() {
                $player.hooks.$slot = Some(hook);
            }
        }
    };
}

/// Sequenced playback over an ordered run of [`CubicBezier`] segments.
///
/// A player owns one or more segments laid end to end on the time axis, a
/// millisecond clock advanced by the caller, and optional lifecycle hooks.
/// Hooks run synchronously on the caller's stack with mutable access to
/// the player; fields are read at use time, so a hook that stops,
/// restarts, or reconfigures the player takes effect for the remainder of
/// the same tick.
pub struct CurvePlayer {
    segments: SmallVec<[CubicBezier; 2]>,
    segment_index: usize,
    elapsed: f32,
    value: f32,
    repeat: bool,
    state: PlayState,
    hooks: Hooks,
}

impl CurvePlayer {
    /// Builds a player over an ordered run of segments.
    ///
    /// The initial value is the first segment evaluated at time zero.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn new(segments: impl IntoIterator<Item = CubicBezier>) -> Self {
        let segments: SmallVec<[CubicBezier; 2]> = segments.into_iter().collect();
        assert!(!segments.is_empty(), "CurvePlayer needs at least one segment");
        let value = segments[0].value_at(0.0) as f32;
        Self {
            segments,
            segment_index: 0,
            elapsed: 0.0,
            value,
            repeat: false,
            state: PlayState::Waiting,
            hooks: Hooks::default(),
        }
    }

    /// Player over a single segment.
    pub fn from_curve(curve: CubicBezier) -> Self {
        Self::new([curve])
    }

    /// Straight tween from `from` to `to` over `duration` milliseconds.
    pub fn ease(from: f32, to: f32, duration: f32) -> Self {
        Self::from_curve(CubicBezier::linear(
            Vec2::new(0.0, from),
            Vec2::new(duration, to),
        ))
    }

    /// Tween with acceleration shaping on both ends.
    ///
    /// `ease_in` pushes the start handle forward in time and `ease_out`
    /// pulls the end handle back, both in milliseconds; larger values
    /// flatten the approach on their side.
    pub fn ease_in_out(from: f32, to: f32, duration: f32, ease_in: f32, ease_out: f32) -> Self {
        Self::from_curve(CubicBezier::with_time_offsets(
            Vec2::new(0.0, from),
            ease_in,
            -ease_out,
            Vec2::new(duration, to),
        ))
    }

    /// Player over the segments of a curve file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CurveFileError> {
        Ok(Self::new(loader::load_curves(path)?))
    }

    /// Current playback state.
    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Whether the player is currently advancing.
    pub fn is_running(&self) -> bool {
        self.state == PlayState::Running
    }

    /// Most recently computed output value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Milliseconds of playback since the last start or wrap.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Moves the playback clock without touching the segment cursor.
    ///
    /// The next [`advance`](Self::advance) scans forward from the current
    /// segment, so scrubbing backward across a segment boundary is the
    /// caller's responsibility.
    pub fn set_elapsed(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
    }

    /// Whether playback wraps around at the end of the last segment.
    pub fn repeat(&self) -> bool {
        self.repeat
    }

    /// Turns end-of-sequence wrapping on or off.
    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
    }

    /// Index of the segment the clock currently sits in.
    pub fn segment_index(&self) -> usize {
        self.segment_index
    }

    /// The segments driving this player, in playback order.
    pub fn segments(&self) -> &[CubicBezier] {
        &self.segments
    }

    /// End time of the final segment in milliseconds.
    pub fn end_time(&self) -> f32 {
        self.segments[self.segments.len() - 1].end().x
    }

    /// Registers the hook fired when playback starts, including on every
    /// loop wrap. Replaces any hook already in the slot.
    pub fn on_started<F>(&mut self, hook: F)
    where
        F: FnMut(&mut CurvePlayer) + Send + 'static,
    {
        self.hooks.started = Some(Box::new(hook));
    }

    /// Registers the hook fired when playback pauses.
    pub fn on_paused<F>(&mut self, hook: F)
    where
        F: FnMut(&mut CurvePlayer) + Send + 'static,
    {
        self.hooks.paused = Some(Box::new(hook));
    }

    /// Registers the hook fired when playback resumes from a pause.
    pub fn on_resumed<F>(&mut self, hook: F)
    where
        F: FnMut(&mut CurvePlayer) + Send + 'static,
    {
        self.hooks.resumed = Some(Box::new(hook));
    }

    /// Registers the hook fired when playback ends, whether it ran out or
    /// was stopped.
    pub fn on_ended<F>(&mut self, hook: F)
    where
        F: FnMut(&mut CurvePlayer) + Send + 'static,
    {
        self.hooks.ended = Some(Box::new(hook));
    }

    /// Registers the hook fired after each loop wrap, right after the
    /// wrap's `started` hook.
    pub fn on_repeated<F>(&mut self, hook: F)
    where
        F: FnMut(&mut CurvePlayer) + Send + 'static,
    {
        self.hooks.repeated = Some(Box::new(hook));
    }

    /// Registers the hook fired on every tick before the value is
    /// computed.
    pub fn on_pre_update<F>(&mut self, hook: F)
    where
        F: FnMut(&mut CurvePlayer) + Send + 'static,
    {
        self.hooks.pre_update = Some(Box::new(hook));
    }

    /// Registers the hook fired on every tick with the freshly computed
    /// value, after it has been stored.
    pub fn on_updated<F>(&mut self, hook: F)
    where
        F: FnMut(&mut CurvePlayer, f32) + Send + 'static,
    {
        self.hooks.updated = Some(Box::new(hook));
    }

    /// Empties every hook slot.
    ///
    /// A hook clearing its own slot from inside its own call is reinstated
    /// when the call returns; install a no-op replacement instead to drop
    /// out mid-fire.
    pub fn clear_hooks(&mut self) {
        self.hooks = Hooks::default();
    }

    /// Begins playback from the start of the first segment.
    ///
    /// Only honored while `Waiting` or `Ended`; otherwise a silent no-op.
    pub fn start(&mut self) {
        if !matches!(self.state, PlayState::Waiting | PlayState::Ended) {
            return;
        }
        self.elapsed = 0.0;
        self.segment_index = 0;
        self.state = PlayState::Running;
        fire!(self, started);
    }

    /// Suspends playback. Only honored while `Running`.
    pub fn pause(&mut self) {
        if self.state != PlayState::Running {
            return;
        }
        self.state = PlayState::Paused;
        fire!(self, paused);
    }

    /// Continues playback after a pause. Only honored while `Paused`.
    pub fn resume(&mut self) {
        if self.state != PlayState::Paused {
            return;
        }
        self.state = PlayState::Running;
        fire!(self, resumed);
    }

    /// Ends playback and rewinds the clock. Only honored while `Running`.
    pub fn stop(&mut self) {
        if self.state != PlayState::Running {
            return;
        }
        self.elapsed = 0.0;
        self.segment_index = 0;
        self.state = PlayState::Ended;
        fire!(self, ended);
    }

    /// Advances playback by `dt` milliseconds and recomputes the value.
    ///
    /// No-op unless `Running`. The clock accumulates `dt`, the segment
    /// cursor scans forward past every segment whose end time has been
    /// reached, and then one of three things happens:
    ///
    /// - clock still inside a segment: `pre_update` fires, the segment is
    ///   evaluated at the clock, `updated` fires with the value;
    /// - clock ran past the final segment with repeat on: the final
    ///   segment is evaluated at the overshot clock, then the player
    ///   restarts (clock and cursor reset, `started` fires) and `repeated`
    ///   fires;
    /// - clock ran past the final segment with repeat off: the final
    ///   segment is evaluated at its own end time and the player stops.
    ///
    /// A negative `dt` rewinds the clock but never the segment cursor.
    pub fn advance(&mut self, dt: f32) {
        if self.state != PlayState::Running {
            return;
        }
        self.elapsed += dt;
        while self.segment_index < self.segments.len()
            && self.elapsed >= self.segments[self.segment_index].end().x
        {
            self.segment_index += 1;
        }
        if self.segment_index == self.segments.len() {
            let last = self.segments.len() - 1;
            fire!(self, pre_update);
            if self.repeat {
                let value = self.segments[last].value_at(self.elapsed as f64) as f32;
                self.value = value;
                fire!(self, updated, value);
                self.elapsed = 0.0;
                self.segment_index = 0;
                fire!(self, started);
                fire!(self, repeated);
            } else {
                let end = self.end_time();
                let value = self.segments[last].value_at(end as f64) as f32;
                self.value = value;
                fire!(self, updated, value);
                self.stop();
            }
        } else {
            fire!(self, pre_update);
            let value = self.segments[self.segment_index].value_at(self.elapsed as f64) as f32;
            self.value = value;
            fire!(self, updated, value);
        }
    }
}
