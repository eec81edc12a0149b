//! Input abstraction layer.

/// Pad/key state sampled by the host once per logic tick.
///
/// The device never polls hardware itself; the owning game loop fills one of
/// these per tick and passes it to `cycle_logic`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputSnapshot {
    pub pan_left: bool,
    pub pan_right: bool,
    pub zoom_in: bool,
    pub zoom_out: bool,
    pub cycle_palette: bool,
    pub scroll_back: bool,
    pub scroll_forward: bool,
    pub select: bool,
    pub cancel_speech: bool,
}

impl InputSnapshot {
    /// A tick with nothing pressed.
    pub const NONE: Self = Self {
        pan_left: false,
        pan_right: false,
        zoom_in: false,
        zoom_out: false,
        cycle_palette: false,
        scroll_back: false,
        scroll_forward: false,
        select: false,
        cancel_speech: false,
    };
}
