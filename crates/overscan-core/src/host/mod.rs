//! Collaborator seams to the owning game.
//!
//! The device reads the world, writes script state, and shapes text through
//! these traits; the game (or [`mock::MockHost`] during bring-up) implements
//! them.

pub mod mock;

use crate::floors::Slice;

/// Player location. `y` is height, `pan` is a heading on the 4096-unit
/// circle the renderer works in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerPos {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub pan: u16,
}

/// Dimensions of a resource-backed picture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PictureInfo {
    pub width: u32,
    pub height: u32,
}

/// Read access to the world geometry the scan draws from.
pub trait GameWorld {
    fn player_position(&self) -> PlayerPos;

    fn slice_count(&self) -> usize;

    /// Slices are indexed bottom-to-top; `index < slice_count()`.
    fn slice(&self, index: usize) -> Slice;
}

/// Script-side services: menu gating, named variables, doors, audio, icons.
pub trait ScriptHost {
    /// Whether the modal icon menu currently holds the player's attention.
    /// While it does, a non-forced deactivation is refused.
    fn menu_active(&self) -> bool;

    /// Looks up a named script variable on the device's owning object.
    fn menu_variable(&mut self, name: &str) -> Option<&mut i32>;

    /// Asks the named game object to re-run its logic script.
    fn request_logic_rerun(&mut self, object: &str);

    fn stop_speech(&mut self);

    fn set_email_indicator(&mut self, visible: bool);

    fn door_locked(&self, object: &str) -> Option<bool>;

    /// Returns false when the object is unknown.
    fn set_door_locked(&mut self, object: &str, locked: bool) -> bool;
}

/// Resource-backed picture metadata lookup.
pub trait PictureLibrary {
    fn picture_info(&self, name: &str) -> Option<PictureInfo>;
}

/// Pure text shaping service.
pub trait TextShaper {
    /// Pixel height of one shaped text row.
    fn line_height(&self) -> u32;

    /// Byte length of the longest prefix of `text`, broken at a word
    /// boundary, that fits in `max_width` pixels.
    fn fit_line(&self, text: &str, max_width: u32) -> usize;
}
