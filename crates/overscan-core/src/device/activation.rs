impl<H, S> OverlayDevice<H, S>
where
    H: GameWorld + ScriptHost + PictureLibrary + TextShaper,
    S: SurfaceService,
{
    pub fn new(host: H, surfaces: S, profile: TextLayoutProfile) -> Self {
        Self {
            host,
            surfaces,
            activation: ActivationState::Inactive,
            mode: DEFAULT_MODE,
            last_mode: DEFAULT_MODE,
            mode_changed: false,
            mode_override: None,
            panel: ScrollPanel::new(profile),
            floors: FloorResolver::new(),
            zoom: ZoomRange::default(),
            email: EmailTracker::new(),
            doors: Vec::new(),
            door_cursor: 0,
            beam_angle: 0,
            pan_angle: 0,
            palette: 0,
            speech_ticks: 0,
            scan_surface: None,
            panel_surface: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.activation != ActivationState::Inactive
    }

    pub fn activation_state(&self) -> ActivationState {
        self.activation
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn surfaces(&self) -> &S {
        &self.surfaces
    }

    /// Raises the overlay in the given mode. Ignored unless fully inactive.
    pub fn activate(&mut self, mode: Mode) {
        if self.activation != ActivationState::Inactive {
            return;
        }
        debug!("overlay activating in {mode:?}");
        self.mode = mode;
        self.last_mode = mode;
        self.mode_changed = false;
        self.activation = ActivationState::SwitchingOn;
    }

    /// Begins dismissal. Without `force` the call is refused while the modal
    /// icon menu is live, so callers re-issue it until it takes effect.
    pub fn deactivate(&mut self, force: bool) {
        if matches!(
            self.activation,
            ActivationState::Inactive | ActivationState::SwitchingOff
        ) {
            return;
        }
        if !force && self.host.menu_active() {
            return;
        }
        debug!("overlay deactivating (force: {force})");
        self.panel.clear_all();
        self.speech_ticks = 0;
        self.activation = ActivationState::SwitchingOff;
    }

    /// Requests a mode switch. Entering any mode invalidates displayed text,
    /// even when the mode does not actually change.
    pub fn set_mode(&mut self, mode: Mode) {
        if !self.is_active() {
            return;
        }
        self.clear_all_text();
        if mode != self.mode {
            debug!("mode {:?} -> {mode:?}", self.mode);
            self.last_mode = self.mode;
            self.mode = mode;
            self.mode_changed = true;
        }
    }

    /// Stages a one-shot mode for the next default-mode resolution.
    pub fn set_mode_override(&mut self, mode: Mode) {
        self.mode_override = Some(mode);
    }

    /// Switches to the staged override, or [`DEFAULT_MODE`] when none is
    /// staged. Consuming always clears the override.
    pub fn set_default_or_override_mode(&mut self) {
        let mode = self.mode_override.take().unwrap_or(DEFAULT_MODE);
        if self.is_active() {
            self.set_mode(mode);
        } else {
            // Staged for the next activation.
            self.mode = mode;
            self.last_mode = mode;
        }
    }

    /// The once-per-tick update. Advances flash and scroll animation, then
    /// runs the activation state machine.
    pub fn cycle_logic(&mut self, input: InputSnapshot) -> TickResult {
        self.email.advance_flash();

        match self.activation {
            ActivationState::Inactive => TickResult::NoRender,
            ActivationState::SwitchingOn => {
                self.switch_on();
                TickResult::RenderRequested
            }
            ActivationState::Active => {
                self.tick_active(input);
                TickResult::RenderRequested
            }
            ActivationState::SwitchingOff => {
                self.switch_off();
                TickResult::RenderRequested
            }
        }
    }

    fn switch_on(&mut self) {
        self.scan_surface = Some(
            self.surfaces
                .create_surface(SCAN_SURFACE_WIDTH, SCAN_SURFACE_HEIGHT),
        );
        let profile = self.panel.profile();
        let panel_height = profile.rows_displayed as u32 * self.host.line_height();
        self.panel_surface = Some(
            self.surfaces
                .create_surface(profile.display_width, panel_height),
        );

        self.set_common_activate_info();
        self.enter_mode(self.mode);
        self.activation = ActivationState::Active;
    }

    fn tick_active(&mut self, input: InputSnapshot) {
        self.panel.advance_scroll();

        if input.cancel_speech {
            self.speech_ticks = 0;
            self.host.stop_speech();
        }

        if self.mode_changed {
            self.mode_changed = false;
            let previous = self.last_mode;
            self.exit_mode(previous);
            self.enter_mode(self.mode);
            return;
        }

        self.tick_mode(input);
    }

    fn switch_off(&mut self) {
        self.exit_mode(self.mode);
        if let Some(handle) = self.scan_surface.take() {
            self.surfaces.release_surface(handle);
        }
        if let Some(handle) = self.panel_surface.take() {
            self.surfaces.release_surface(handle);
        }
        self.host.request_logic_rerun(LOGIC_OWNER_OBJECT);
        self.activation = ActivationState::Inactive;
        debug!("overlay inactive");
    }

    /// Per-activation setup: pan comes from the player except in the modes
    /// that draw a fixed-north display, and the floor set is resolved for
    /// the player's current height.
    fn set_common_activate_info(&mut self) {
        let player = self.host.player_position();
        self.pan_angle = match self.mode {
            Mode::Map | Mode::LockControlPuzzle => 0,
            Mode::MotionScan | Mode::InfraRedLink | Mode::Database | Mode::Communications => {
                player.pan % FULL_TURN
            }
        };
        self.floors.resolve(player.y, &self.host);
    }
}
