//! Player groups
//!
//! Owns a set of players and advances them with one call, the way a scene
//! object forwards its per-frame delta to every animation it holds.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use crate::player::CurvePlayer;

new_key_type! {
    /// Stable handle to a player inside a [`PlayerGroup`].
    pub struct PlayerId;
}

/// A set of players advanced together.
pub struct PlayerGroup {
    players: SlotMap<PlayerId, CurvePlayer>,
    names: FxHashMap<String, PlayerId>,
}

impl PlayerGroup {
    pub fn new() -> Self {
        Self {
            players: SlotMap::with_key(),
            names: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, player: CurvePlayer) -> PlayerId {
        self.players.insert(player)
    }

    /// Inserts a player under a name. Re-using a name drops the player
    /// that previously held it.
    pub fn insert_named(&mut self, name: impl Into<String>, player: CurvePlayer) -> PlayerId {
        let id = self.players.insert(player);
        if let Some(old) = self.names.insert(name.into(), id) {
            self.players.remove(old);
        }
        id
    }

    pub fn get(&self, id: PlayerId) -> Option<&CurvePlayer> {
        self.players.get(id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut CurvePlayer> {
        self.players.get_mut(id)
    }

    pub fn id_of(&self, name: &str) -> Option<PlayerId> {
        self.names.get(name).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&CurvePlayer> {
        self.players.get(self.id_of(name)?)
    }

    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut CurvePlayer> {
        let id = self.id_of(name)?;
        self.players.get_mut(id)
    }

    /// Removes a player, clearing any name that pointed at it.
    pub fn remove(&mut self, id: PlayerId) -> Option<CurvePlayer> {
        let player = self.players.remove(id)?;
        self.names.retain(|_, held| *held != id);
        Some(player)
    }

    /// Forwards `dt` milliseconds to every player. Order is unspecified.
    pub fn advance_all(&mut self, dt: f32) {
        for (_, player) in self.players.iter_mut() {
            player.advance(dt);
        }
    }

    /// Whether any player is still running.
    pub fn any_running(&self) -> bool {
        self.players.iter().any(|(_, p)| p.is_running())
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &CurvePlayer)> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut CurvePlayer)> {
        self.players.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Default for PlayerGroup {
    fn default() -> Self {
        Self::new()
    }
}
