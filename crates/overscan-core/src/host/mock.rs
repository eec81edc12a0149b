//! No-game host used during bring-up and in tests.

use heapless::{String, Vec};

use super::{GameWorld, PictureInfo, PictureLibrary, PlayerPos, ScriptHost, TextShaper};
use crate::floors::Slice;

/// Monospace advance the mock shaper assumes for every character.
pub const MOCK_CHAR_ADVANCE: u32 = 8;
/// Line height the mock shaper reports.
pub const MOCK_LINE_HEIGHT: u32 = 12;

const NAME_BYTES: usize = 32;
const MAX_ENTRIES: usize = 16;

/// A canned world: a few slices, a variable table, doors, and pictures, plus
/// counters recording what the device asked of it.
#[derive(Debug, Default)]
pub struct MockHost {
    pub player: Option<PlayerPos>,
    pub menu_active: bool,
    pub logic_reruns: u32,
    pub speech_stops: u32,
    pub email_indicator: Option<bool>,
    slices: Vec<Slice, MAX_ENTRIES>,
    variables: Vec<(String<NAME_BYTES>, i32), MAX_ENTRIES>,
    doors: Vec<(String<NAME_BYTES>, bool), MAX_ENTRIES>,
    pictures: Vec<(String<NAME_BYTES>, PictureInfo), MAX_ENTRIES>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two stacked 300-unit floors with the player on the lower one.
    pub fn two_floors() -> Self {
        let mut host = Self::new();
        host.add_slice(Slice { bottom: 0.0, top: 300.0 });
        host.add_slice(Slice { bottom: 300.0, top: 600.0 });
        host.player = Some(PlayerPos {
            x: 0.0,
            y: 150.0,
            z: 0.0,
            pan: 1024,
        });
        host
    }

    pub fn add_slice(&mut self, slice: Slice) {
        let _ = self.slices.push(slice);
    }

    pub fn add_variable(&mut self, name: &str, value: i32) {
        let _ = self.variables.push((bounded(name), value));
    }

    pub fn variable(&self, name: &str) -> Option<i32> {
        self.variables
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| *value)
    }

    pub fn add_door(&mut self, object: &str, locked: bool) {
        let _ = self.doors.push((bounded(object), locked));
    }

    pub fn add_picture(&mut self, name: &str, info: PictureInfo) {
        let _ = self.pictures.push((bounded(name), info));
    }
}

fn bounded(name: &str) -> String<NAME_BYTES> {
    let mut out = String::new();
    for ch in name.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

impl GameWorld for MockHost {
    fn player_position(&self) -> PlayerPos {
        self.player.unwrap_or(PlayerPos {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            pan: 0,
        })
    }

    fn slice_count(&self) -> usize {
        self.slices.len()
    }

    fn slice(&self, index: usize) -> Slice {
        self.slices[index]
    }
}

impl ScriptHost for MockHost {
    fn menu_active(&self) -> bool {
        self.menu_active
    }

    fn menu_variable(&mut self, name: &str) -> Option<&mut i32> {
        self.variables
            .iter_mut()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value)
    }

    fn request_logic_rerun(&mut self, _object: &str) {
        self.logic_reruns += 1;
    }

    fn stop_speech(&mut self) {
        self.speech_stops += 1;
    }

    fn set_email_indicator(&mut self, visible: bool) {
        self.email_indicator = Some(visible);
    }

    fn door_locked(&self, object: &str) -> Option<bool> {
        self.doors
            .iter()
            .find(|(key, _)| key.as_str() == object)
            .map(|(_, locked)| *locked)
    }

    fn set_door_locked(&mut self, object: &str, locked: bool) -> bool {
        match self
            .doors
            .iter_mut()
            .find(|(key, _)| key.as_str() == object)
        {
            Some((_, state)) => {
                *state = locked;
                true
            }
            None => false,
        }
    }
}

impl PictureLibrary for MockHost {
    fn picture_info(&self, name: &str) -> Option<PictureInfo> {
        self.pictures
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, info)| *info)
    }
}

impl TextShaper for MockHost {
    fn line_height(&self) -> u32 {
        MOCK_LINE_HEIGHT
    }

    /// Monospace fit over ASCII input; breaks at the last space that fits.
    fn fit_line(&self, text: &str, max_width: u32) -> usize {
        let max_chars = (max_width / MOCK_CHAR_ADVANCE).max(1) as usize;
        if text.len() <= max_chars {
            return text.len();
        }

        let bytes = text.as_bytes();
        let mut split = 0;
        for index in 1..=max_chars {
            if bytes[index] == b' ' {
                split = index;
            }
        }
        if split == 0 { max_chars } else { split }
    }
}
