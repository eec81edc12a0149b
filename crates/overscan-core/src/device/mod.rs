//! The diagnostic overlay device: activation lifecycle and mode dispatch.

use heapless::{String, Vec};
use log::debug;

use crate::{
    email::{EMAIL_RECORD_BYTES, EmailTracker},
    floors::FloorResolver,
    host::{GameWorld, PictureLibrary, ScriptHost, TextShaper},
    input::InputSnapshot,
    panel::{PinPosition, ScrollPanel, TextLayoutProfile},
    render::{DoorView, Frame, PanelView, ScanView, SurfaceService},
    zoom::ZoomRange,
};

/// Mode used when no override is staged.
pub const DEFAULT_MODE: Mode = Mode::MotionScan;
/// Registered lock-control doors cap.
pub const MAX_DOORS: usize = 16;
/// Menu depth levels bridged to script variables.
pub const MENU_LEVELS: usize = 5;
/// Digit-substituted template for the bridged variable names.
pub const MENU_LEVEL_VAR_PREFIX: &str = "menu_level_";
/// Object whose logic script is re-run when the overlay drops.
pub const LOGIC_OWNER_OBJECT: &str = "overlay_logic";
/// Ticks a pending notification stays on the speech display.
pub const SPEECH_ANNOUNCE_TICKS: u16 = 60;
/// Full turn of the scan/pan angle space.
pub const FULL_TURN: u16 = 4096;
/// Scan beam advance per tick.
pub const BEAM_STEP: u16 = 40;
/// Pan key movement per tick.
pub const PAN_KEY_STEP: u16 = 16;
/// Zoom key movement per tick.
pub const ZOOM_KEY_STEP: u32 = 8;
/// Palette-cycle key wraps over this many palettes.
pub const PALETTE_COUNT: u8 = 4;
pub const MAX_PICTURE_WIDTH: u32 = 320;
pub const MAX_PICTURE_HEIGHT: u32 = 200;

const SCAN_SURFACE_WIDTH: u32 = 256;
const SCAN_SURFACE_HEIGHT: u32 = 256;
const DOOR_NAME_BYTES: usize = 32;
const MENU_VAR_NAME_BYTES: usize = 24;

/// Mutually exclusive display modes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    MotionScan,
    InfraRedLink,
    Database,
    Communications,
    Map,
    LockControlPuzzle,
}

/// Whether any mode logic runs at all this tick.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ActivationState {
    #[default]
    Inactive,
    SwitchingOn,
    Active,
    SwitchingOff,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Direction of a menu variable bridge transfer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MenuAccess {
    Get,
    Set,
}

#[derive(Clone, Debug)]
struct DoorRef {
    object: String<DOOR_NAME_BYTES>,
}

/// One overlay device exists per game session; the session owns it and calls
/// [`cycle_logic`](OverlayDevice::cycle_logic) once per logic tick.
pub struct OverlayDevice<H, S>
where
    H: GameWorld + ScriptHost + PictureLibrary + TextShaper,
    S: SurfaceService,
{
    host: H,
    surfaces: S,
    activation: ActivationState,
    mode: Mode,
    last_mode: Mode,
    mode_changed: bool,
    mode_override: Option<Mode>,
    panel: ScrollPanel,
    floors: FloorResolver,
    zoom: ZoomRange,
    email: EmailTracker,
    doors: Vec<DoorRef, MAX_DOORS>,
    door_cursor: usize,
    beam_angle: u16,
    pan_angle: u16,
    palette: u8,
    speech_ticks: u16,
    scan_surface: Option<S::Handle>,
    panel_surface: Option<S::Handle>,
}

include!("activation.rs");
include!("modes.rs");
include!("text.rs");
include!("script.rs");
include!("view.rs");

#[cfg(test)]
mod tests;
