//! Demo collaborators standing in for the game engine.

use log::debug;
use overscan_core::{
    floors::Slice,
    host::{GameWorld, PictureInfo, PictureLibrary, PlayerPos, ScriptHost, TextShaper},
    render::SurfaceService,
};

const CHAR_ADVANCE: u32 = 8;
const LINE_HEIGHT: u32 = 12;

/// A small canned level: three stacked floors, the menu variable table the
/// overlay scripts expect, two lockable doors, and one picture resource.
pub struct DemoHost {
    pub player: PlayerPos,
    pub menu_active: bool,
    slices: Vec<Slice>,
    variables: Vec<(String, i32)>,
    doors: Vec<(String, bool)>,
    pictures: Vec<(String, PictureInfo)>,
}

impl DemoHost {
    pub fn prison_block() -> Self {
        let variables = (0..5)
            .map(|level| (format!("menu_level_{level}"), 0))
            .collect();
        Self {
            player: PlayerPos {
                x: 120.0,
                y: 350.0,
                z: -80.0,
                pan: 512,
            },
            menu_active: false,
            slices: vec![
                Slice { bottom: 0.0, top: 300.0 },
                Slice { bottom: 300.0, top: 600.0 },
                Slice { bottom: 600.0, top: 900.0 },
            ],
            variables,
            doors: vec![
                ("cellblock_door".into(), true),
                ("laundry_door".into(), false),
            ],
            pictures: vec![(
                "warden_mugshot".into(),
                PictureInfo {
                    width: 96,
                    height: 60,
                },
            )],
        }
    }
}

impl GameWorld for DemoHost {
    fn player_position(&self) -> PlayerPos {
        self.player
    }

    fn slice_count(&self) -> usize {
        self.slices.len()
    }

    fn slice(&self, index: usize) -> Slice {
        self.slices[index]
    }
}

impl ScriptHost for DemoHost {
    fn menu_active(&self) -> bool {
        self.menu_active
    }

    fn menu_variable(&mut self, name: &str) -> Option<&mut i32> {
        self.variables
            .iter_mut()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    fn request_logic_rerun(&mut self, object: &str) {
        debug!("script host: re-running logic for '{object}'");
    }

    fn stop_speech(&mut self) {
        debug!("script host: speech cancelled");
    }

    fn set_email_indicator(&mut self, visible: bool) {
        debug!("script host: email indicator {}", if visible { "on" } else { "off" });
    }

    fn door_locked(&self, object: &str) -> Option<bool> {
        self.doors
            .iter()
            .find(|(key, _)| key == object)
            .map(|(_, locked)| *locked)
    }

    fn set_door_locked(&mut self, object: &str, locked: bool) -> bool {
        match self.doors.iter_mut().find(|(key, _)| key == object) {
            Some((_, state)) => {
                *state = locked;
                true
            }
            None => false,
        }
    }
}

impl PictureLibrary for DemoHost {
    fn picture_info(&self, name: &str) -> Option<PictureInfo> {
        self.pictures
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, info)| *info)
    }
}

impl TextShaper for DemoHost {
    fn line_height(&self) -> u32 {
        LINE_HEIGHT
    }

    fn fit_line(&self, text: &str, max_width: u32) -> usize {
        let max_chars = (max_width / CHAR_ADVANCE).max(1) as usize;
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

/// Surface allocator that only keeps the books; there are no real pixels in
/// the simulator.
#[derive(Debug, Default)]
pub struct LoggingSurfaces {
    next_handle: u32,
    pub live: u32,
}

impl SurfaceService for LoggingSurfaces {
    type Handle = u32;

    fn create_surface(&mut self, width: u32, height: u32) -> u32 {
        self.next_handle += 1;
        self.live += 1;
        debug!("surface {} created ({width}x{height})", self.next_handle);
        self.next_handle
    }

    fn release_surface(&mut self, handle: u32) {
        self.live -= 1;
        debug!("surface {handle} released");
    }
}
