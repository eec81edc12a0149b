//! Pending-notification tracker with a fixed-width save payload.

use heapless::String;
use log::debug;

/// Longest notification id, in bytes.
pub const MAX_EMAIL_ID_BYTES: usize = 31;
/// Save payload: the id buffer plus its NUL terminator, written verbatim.
pub const EMAIL_RECORD_BYTES: usize = MAX_EMAIL_ID_BYTES + 1;
/// Ticks an EMP screen flash stays active once triggered.
pub const EMP_FLASH_TICKS: u8 = 16;
/// Ticks between visibility flips of the flashing notification icon.
pub const EMAIL_FLASH_PERIOD_TICKS: u8 = 12;

/// At most one pending notification id, plus the flash/EMP counters that
/// animate it.
#[derive(Debug, Default)]
pub struct EmailTracker {
    pending: String<MAX_EMAIL_ID_BYTES>,
    flash_visible: bool,
    flash_counter: u8,
    emp_remaining: u8,
}

impl EmailTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_email(&mut self, id: &str) {
        assert!(
            id.len() <= MAX_EMAIL_ID_BYTES,
            "notification id '{id}' longer than {MAX_EMAIL_ID_BYTES} bytes"
        );
        self.pending.clear();
        let _ = self.pending.push_str(id);
        debug!("notification pending: '{}'", self.pending.as_str());
    }

    pub fn mark_read(&mut self) {
        self.pending.clear();
    }

    pub fn is_waiting(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Exact match against the stored id; false when either side is empty.
    pub fn is_this_waiting(&self, id: &str) -> bool {
        !id.is_empty() && self.pending.as_str() == id
    }

    pub fn pending_id(&self) -> &str {
        self.pending.as_str()
    }

    pub fn flash_visible(&self) -> bool {
        self.flash_visible
    }

    /// Advances the icon flash phase. Called once per logic tick.
    pub fn advance_flash(&mut self) {
        self.flash_counter += 1;
        if self.flash_counter >= EMAIL_FLASH_PERIOD_TICKS {
            self.flash_counter = 0;
            self.flash_visible = !self.flash_visible;
        }
    }

    /// Re-entrant screen-flash pulse. The first call arms a countdown and
    /// reports the flash active; each later call burns one tick until the
    /// countdown hits zero, which reads inactive and re-arms on the next
    /// call. The remainder persists if the caller stops polling mid-pulse.
    pub fn emp_effect(&mut self) -> bool {
        if self.emp_remaining == 0 {
            self.emp_remaining = EMP_FLASH_TICKS;
        }
        self.emp_remaining -= 1;
        self.emp_remaining > 0
    }

    /// Writes the id buffer NUL-padded to its fixed width.
    pub fn save(&self, out: &mut [u8; EMAIL_RECORD_BYTES]) {
        out.fill(0);
        out[..self.pending.len()].copy_from_slice(self.pending.as_bytes());
    }

    /// Reads back a [`save`](Self::save) payload. Returns whether a
    /// notification is pending afterwards so the caller can drive the icon
    /// indicator. A record shorter than [`EMAIL_RECORD_BYTES`] is fatal.
    pub fn restore(&mut self, record: &[u8]) -> bool {
        assert!(
            record.len() >= EMAIL_RECORD_BYTES,
            "notification record short read: {} of {EMAIL_RECORD_BYTES} bytes",
            record.len()
        );

        let len = record[..MAX_EMAIL_ID_BYTES]
            .iter()
            .position(|byte| *byte == 0)
            .unwrap_or(MAX_EMAIL_ID_BYTES);
        let Ok(id) = core::str::from_utf8(&record[..len]) else {
            panic!("notification record is not valid UTF-8");
        };

        self.pending.clear();
        let _ = self.pending.push_str(id);
        self.is_waiting()
    }
}
