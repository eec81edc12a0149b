//! Text/picture scroll buffer behind the overlay's reading modes.
//!
//! Rows are appended only; the buffer is reset wholesale when a main heading
//! arrives or on an explicit clear. A window of `rows_displayed` rows is
//! visible at once and slides with a fixed-point pixel animation.

use heapless::{String, Vec};
use log::debug;

use crate::host::TextShaper;

/// Scroll buffer capacity. Exceeding it is an authoring error.
pub const MAX_DISPLAY_ROWS: usize = 96;
/// Bytes kept per wrapped text row.
pub const ROW_TEXT_BYTES: usize = 96;
/// Row 0 holds the pinned heading; scrolling never moves above this row.
pub const FIRST_SCROLLABLE_ROW: usize = 1;
/// Ticks a one-row scroll animation takes.
pub const SCROLL_CYCLES: i32 = 6;

pub const ROW_FLAG_HEADING: u8 = 1 << 0;
pub const ROW_FLAG_WARNING: u8 = 1 << 1;
pub const ROW_FLAG_OPTION: u8 = 1 << 2;
pub const ROW_FLAG_PARAGRAPH: u8 = 1 << 3;
pub const ROW_FLAG_FLASHING: u8 = 1 << 4;

/// Horizontal anchor for a text row.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PinPosition {
    #[default]
    TopLeft,
    Centered,
}

/// One row of the virtual display.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DisplayRow {
    Blank,
    Text {
        text: String<ROW_TEXT_BYTES>,
        flags: u8,
        pin: PinPosition,
        indent: u8,
    },
    /// One row-high strip of a larger picture; `strip` is the 0-based offset
    /// into the picture used for the vertical crop at draw time.
    Picture { x_offset: u32, strip: u8 },
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ScrollDirection {
    #[default]
    None,
    /// Window moves up the buffer (`first_visible` decreasing).
    Up,
    /// Window moves deeper into the buffer (`first_visible` increasing).
    Down,
}

/// Text metrics that varied per platform in older builds; now plain data
/// chosen at construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextLayoutProfile {
    pub rows_displayed: usize,
    pub display_width: u32,
    pub tab_width: u32,
    /// Floor for the usable width after indentation; dropping below it is an
    /// authoring error.
    pub min_body_width: u32,
}

impl Default for TextLayoutProfile {
    fn default() -> Self {
        Self {
            rows_displayed: 12,
            display_width: 448,
            tab_width: 24,
            min_body_width: 64,
        }
    }
}

impl TextLayoutProfile {
    /// Metrics for low-resolution targets.
    pub const fn narrow() -> Self {
        Self {
            rows_displayed: 9,
            display_width: 320,
            tab_width: 16,
            min_body_width: 48,
        }
    }
}

/// Fixed-capacity row buffer with a sliding visible window.
#[derive(Debug)]
pub struct ScrollPanel {
    profile: TextLayoutProfile,
    rows: Vec<DisplayRow, MAX_DISPLAY_ROWS>,
    first_visible: usize,
    heading_set: bool,
    picture_loaded: bool,
    scrolling_required: bool,
    direction: ScrollDirection,
    /// Sub-row animation phase, fixed point with 256 = one pixel.
    pixel_offset: i32,
    /// Cached from the shaper's font metrics on first use.
    row_height: Option<u8>,
}

impl ScrollPanel {
    pub fn new(profile: TextLayoutProfile) -> Self {
        Self {
            profile,
            rows: Vec::new(),
            first_visible: 0,
            heading_set: false,
            picture_loaded: false,
            scrolling_required: false,
            direction: ScrollDirection::None,
            pixel_offset: 0,
            row_height: None,
        }
    }

    pub fn profile(&self) -> TextLayoutProfile {
        self.profile
    }

    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Index one past the last occupied row.
    pub fn next_free(&self) -> usize {
        self.rows.len()
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn heading_set(&self) -> bool {
        self.heading_set
    }

    pub fn picture_loaded(&self) -> bool {
        self.picture_loaded
    }

    pub fn scrolling_required(&self) -> bool {
        self.scrolling_required
    }

    pub fn is_scrolling(&self) -> bool {
        self.direction != ScrollDirection::None
    }

    pub fn pixel_offset(&self) -> i32 {
        self.pixel_offset
    }

    pub fn row_pixel_height(&self) -> Option<u8> {
        self.row_height
    }

    pub fn clear_all(&mut self) {
        self.rows.clear();
        self.first_visible = 0;
        self.heading_set = false;
        self.picture_loaded = false;
        self.reset_scroll();
    }

    /// Appends wrapped text. `flags == 0` appends a single blank row. A
    /// heading (heading flag + centered pin) resets the buffer and must
    /// precede any other row.
    pub fn push_text(
        &mut self,
        shaper: &impl TextShaper,
        text: &str,
        flags: u8,
        indent: u8,
        pin: PinPosition,
    ) {
        if flags == 0 {
            self.append(DisplayRow::Blank);
            return;
        }

        let main_heading = flags & ROW_FLAG_HEADING != 0 && pin == PinPosition::Centered;
        if main_heading {
            self.reset_for_heading();
        } else {
            assert!(
                self.heading_set,
                "display text '{text}' pushed before any heading"
            );
        }

        let width = match pin {
            PinPosition::Centered => self.profile.display_width,
            PinPosition::TopLeft => {
                let indent_px = u32::from(indent) * self.profile.tab_width;
                let width = self.profile.display_width.saturating_sub(indent_px);
                assert!(
                    width >= self.profile.min_body_width,
                    "indent {indent} leaves {width}px for text, floor is {}px",
                    self.profile.min_body_width
                );
                width
            }
        };

        self.cache_row_height(shaper);

        let mut rest = text;
        while !rest.is_empty() {
            // A shaper that fits nothing would stall the loop; take at least
            // one byte.
            let take = shaper.fit_line(rest, width).clamp(1, rest.len());
            let mut line: String<ROW_TEXT_BYTES> = String::new();
            for ch in rest[..take].trim_end().chars() {
                if line.push(ch).is_err() {
                    break;
                }
            }
            self.append(DisplayRow::Text {
                text: line,
                flags,
                pin,
                indent,
            });
            rest = rest[take..].trim_start_matches(' ');
        }
    }

    /// Appends `ceil(height / row_height)` picture strip rows. A heading
    /// must already exist; dimension checks belong to the caller.
    pub fn push_picture(&mut self, shaper: &impl TextShaper, x_offset: u32, height: u32) {
        assert!(self.heading_set, "picture pushed before any heading");

        let row_height = u32::from(self.cache_row_height(shaper));
        let strips = (height + row_height - 1) / row_height;
        for strip in 0..strips {
            self.append(DisplayRow::Picture {
                x_offset,
                strip: strip.min(u8::MAX as u32) as u8,
            });
        }
        self.picture_loaded = true;
        debug!("picture occupies {strips} rows");
    }

    /// Starts a scroll if the pressed key can actually move the window.
    pub fn process_scroll_keys(&mut self, back: bool, forward: bool) {
        if !self.scrolling_required || self.is_scrolling() {
            return;
        }

        if back && self.first_visible + self.profile.rows_displayed < self.rows.len() {
            self.direction = ScrollDirection::Down;
        } else if forward && self.first_visible > FIRST_SCROLLABLE_ROW {
            self.direction = ScrollDirection::Up;
        }
    }

    /// Advances the scroll animation one tick.
    pub fn advance_scroll(&mut self) {
        let Some(row_height) = self.row_height else {
            return;
        };
        let full_row = 256 * i32::from(row_height);
        let step = full_row / SCROLL_CYCLES;

        match self.direction {
            ScrollDirection::None => {}
            ScrollDirection::Down => {
                self.pixel_offset += step;
                if self.pixel_offset >= full_row {
                    self.pixel_offset -= full_row;
                    self.first_visible += 1;
                    self.direction = ScrollDirection::None;
                }
            }
            ScrollDirection::Up => {
                self.pixel_offset -= step;
                if self.pixel_offset <= -full_row {
                    self.pixel_offset += full_row;
                    self.first_visible = self.first_visible.saturating_sub(1);
                    self.direction = ScrollDirection::None;
                }
            }
        }
    }

    fn append(&mut self, row: DisplayRow) {
        if self.rows.push(row).is_err() {
            panic!("display buffer overflow: more than {MAX_DISPLAY_ROWS} rows");
        }
        if self.rows.len() > self.profile.rows_displayed {
            self.scrolling_required = true;
        }
    }

    fn reset_for_heading(&mut self) {
        self.rows.clear();
        self.first_visible = 0;
        self.picture_loaded = false;
        self.reset_scroll();
        self.heading_set = true;
    }

    fn reset_scroll(&mut self) {
        self.scrolling_required = false;
        self.direction = ScrollDirection::None;
        self.pixel_offset = 0;
    }

    fn cache_row_height(&mut self, shaper: &impl TextShaper) -> u8 {
        match self.row_height {
            Some(height) => height,
            None => {
                let height = shaper.line_height().clamp(1, 255) as u8;
                self.row_height = Some(height);
                height
            }
        }
    }
}
