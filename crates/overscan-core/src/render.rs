//! Frame view models and the surface seam to the renderer.
//!
//! Pixel work stays on the other side of [`SurfaceService`]; the device only
//! describes what each mode wants drawn.

use crate::panel::DisplayRow;

/// Opaque drawing-surface allocator owned by the renderer. The device holds
/// handles from `SwitchingOn` until `SwitchingOff` and releases each exactly
/// once.
pub trait SurfaceService {
    type Handle;

    fn create_surface(&mut self, width: u32, height: u32) -> Self::Handle;

    fn release_surface(&mut self, handle: Self::Handle);
}

/// Rotating-scan state shared by the motion scan and infra-red modes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanView<'a> {
    /// Beam heading on the 4096-unit circle.
    pub beam_angle: u16,
    pub pan: u16,
    pub zoom: u32,
    pub palette: u8,
    /// Slice indices to composite, ascending.
    pub slices: &'a [u8],
    pub floor_y: f32,
    pub ceiling_y: f32,
    pub infra_red: bool,
}

/// Window onto the text/picture scroll buffer.
#[derive(Clone, Copy, Debug)]
pub struct PanelView<'a> {
    pub rows: &'a [DisplayRow],
    pub first_visible: usize,
    pub rows_displayed: usize,
    /// Sub-row scroll phase, fixed point with 256 = one pixel.
    pub pixel_offset: i32,
    pub scrolling_required: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DoorView<'a> {
    pub name: &'a str,
    pub locked: bool,
}

impl Default for DoorView<'_> {
    fn default() -> Self {
        Self {
            name: "",
            locked: false,
        }
    }
}

/// Per-mode view model handed to the renderer each frame.
pub enum Frame<'a> {
    MotionScan {
        scan: ScanView<'a>,
        email_flash: bool,
    },
    InfraRedLink {
        scan: ScanView<'a>,
        panel: PanelView<'a>,
        email_flash: bool,
    },
    Database {
        panel: PanelView<'a>,
        email_flash: bool,
    },
    Communications {
        panel: PanelView<'a>,
        pending_id: &'a str,
        speech_ticks: u16,
        email_flash: bool,
    },
    Map {
        pan: u16,
        zoom: u32,
        email_flash: bool,
    },
    LockControl {
        doors: &'a [DoorView<'a>],
        cursor: usize,
        email_flash: bool,
    },
}
