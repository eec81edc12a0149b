impl<H, S> OverlayDevice<H, S>
where
    H: GameWorld + ScriptHost + PictureLibrary + TextShaper,
    S: SurfaceService,
{
    /// Pushes a line of display text through the shaper into the scroll
    /// buffer. Ignored while the overlay is down.
    pub fn set_text(&mut self, text: &str, flags: u8, indent: u8, pin: PinPosition) {
        if !self.is_active() {
            return;
        }
        self.panel.push_text(&self.host, text, flags, indent, pin);
    }

    /// Loads the named picture's dimensions and reserves its strip rows.
    /// Ignored while the overlay is down or while a picture is already
    /// showing.
    pub fn setup_picture(&mut self, x_offset: u32, name: &str) {
        if !self.is_active() || self.panel.picture_loaded() {
            return;
        }

        let Some(info) = self.host.picture_info(name) else {
            panic!("unknown picture resource '{name}'");
        };
        assert!(
            info.width <= MAX_PICTURE_WIDTH && info.height <= MAX_PICTURE_HEIGHT,
            "picture '{name}' is {}x{}, limit {MAX_PICTURE_WIDTH}x{MAX_PICTURE_HEIGHT}",
            info.width,
            info.height
        );

        self.panel.push_picture(&self.host, x_offset, info.height);
    }

    /// Drops every row and any in-flight notification speech display.
    /// Ignored while the overlay is down.
    pub fn clear_all_text(&mut self) {
        if !self.is_active() {
            return;
        }
        self.panel.clear_all();
        self.speech_ticks = 0;
    }

    /// Read access to the scroll buffer, for the renderer and for scripts
    /// probing overflow state.
    pub fn panel(&self) -> &ScrollPanel {
        &self.panel
    }
}
