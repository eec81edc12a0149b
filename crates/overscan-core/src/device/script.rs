impl<H, S> OverlayDevice<H, S>
where
    H: GameWorld + ScriptHost + PictureLibrary + TextShaper,
    S: SurfaceService,
{
    /// Transfers the menu tree's per-depth variables between script state
    /// and `values`. Every synthesized name must resolve; a miss means the
    /// session data is inconsistent with the menu scripts.
    pub fn access_menu_level_variables(
        &mut self,
        values: &mut [i32; MENU_LEVELS],
        access: MenuAccess,
    ) {
        for (level, value) in values.iter_mut().enumerate() {
            let mut name: String<MENU_VAR_NAME_BYTES> = String::new();
            let _ = name.push_str(MENU_LEVEL_VAR_PREFIX);
            let _ = name.push((b'0' + level as u8) as char);

            let Some(variable) = self.host.menu_variable(name.as_str()) else {
                panic!("script variable '{}' not found", name.as_str());
            };
            match access {
                MenuAccess::Get => *value = *variable,
                MenuAccess::Set => *variable = *value,
            }
        }
    }

    /// Adds a door object to the lock-control roster.
    pub fn register_door(&mut self, object: &str) {
        let mut name: String<DOOR_NAME_BYTES> = String::new();
        if name.push_str(object).is_err() {
            panic!("door object name '{object}' longer than {DOOR_NAME_BYTES} bytes");
        }
        if self.doors.push(DoorRef { object: name }).is_err() {
            panic!("door roster full ({MAX_DOORS} entries)");
        }
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    pub fn new_email(&mut self, id: &str) {
        self.email.new_email(id);
    }

    pub fn mark_email_read(&mut self) {
        self.email.mark_read();
        self.host.set_email_indicator(false);
    }

    pub fn is_email_waiting(&self) -> bool {
        self.email.is_waiting()
    }

    pub fn is_this_email_waiting(&self, id: &str) -> bool {
        self.email.is_this_waiting(id)
    }

    /// Screen-flash pulse polled by the script layer; see
    /// [`EmailTracker::emp_effect`].
    pub fn emp_effect(&mut self) -> bool {
        self.email.emp_effect()
    }

    /// Writes the notification save payload.
    pub fn save_email(&self, out: &mut [u8; EMAIL_RECORD_BYTES]) {
        self.email.save(out);
    }

    /// Reads the notification save payload back and re-syncs the icon
    /// indicator with the restored state.
    pub fn restore_email(&mut self, record: &[u8]) {
        let waiting = self.email.restore(record);
        self.host.set_email_indicator(waiting);
    }

    pub fn set_current_zoom(&mut self, zoom: u32) {
        self.zoom.set_current(zoom);
    }

    pub fn set_minimum_zoom(&mut self, zoom: u32) {
        self.zoom.set_minimum(zoom);
    }

    pub fn set_maximum_zoom(&mut self, zoom: u32) {
        self.zoom.set_maximum(zoom);
    }

    pub fn zoom(&self) -> ZoomRange {
        self.zoom
    }

    /// Installs a floor range, clamped to the world's slice table.
    pub fn add_floor_range(&mut self, lower: u8, upper: u8) {
        let last_slice = self
            .host
            .slice_count()
            .saturating_sub(1)
            .min(u8::MAX as usize) as u8;
        self.floors.add_range(lower, upper, last_slice);
    }

    pub fn reset_floor_ranges(&mut self) {
        self.floors.reset();
    }

    pub fn floors(&self) -> &FloorResolver {
        &self.floors
    }
}
