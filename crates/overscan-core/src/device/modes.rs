impl<H, S> OverlayDevice<H, S>
where
    H: GameWorld + ScriptHost + PictureLibrary + TextShaper,
    S: SurfaceService,
{
    fn enter_mode(&mut self, mode: Mode) {
        debug!("enter {mode:?}");
        match mode {
            Mode::MotionScan | Mode::InfraRedLink => {
                self.beam_angle = 0;
                self.palette = 0;
            }
            Mode::Database => {}
            Mode::Communications => {
                if self.email.is_waiting() {
                    self.speech_ticks = SPEECH_ANNOUNCE_TICKS;
                }
            }
            Mode::Map => {}
            Mode::LockControlPuzzle => {
                self.door_cursor = 0;
            }
        }
    }

    fn tick_mode(&mut self, input: InputSnapshot) {
        match self.mode {
            Mode::MotionScan => {
                self.advance_beam();
                self.process_pan_keys(input);
                self.process_zoom_keys(input);
                if input.cycle_palette {
                    self.palette = (self.palette + 1) % PALETTE_COUNT;
                }
            }
            Mode::InfraRedLink => {
                self.advance_beam();
                self.panel
                    .process_scroll_keys(input.scroll_back, input.scroll_forward);
            }
            Mode::Database => {
                self.panel
                    .process_scroll_keys(input.scroll_back, input.scroll_forward);
            }
            Mode::Communications => {
                self.speech_ticks = self.speech_ticks.saturating_sub(1);
                if input.select && self.email.is_waiting() {
                    self.mark_email_read();
                }
            }
            Mode::Map => {
                self.process_pan_keys(input);
                self.process_zoom_keys(input);
            }
            Mode::LockControlPuzzle => self.tick_lock_control(input),
        }
    }

    fn exit_mode(&mut self, mode: Mode) {
        debug!("exit {mode:?}");
        match mode {
            Mode::MotionScan | Mode::InfraRedLink => {}
            Mode::Database => {}
            Mode::Communications => {
                self.speech_ticks = 0;
            }
            Mode::Map => {}
            Mode::LockControlPuzzle => {
                self.door_cursor = 0;
            }
        }
    }

    fn advance_beam(&mut self) {
        self.beam_angle = (self.beam_angle + BEAM_STEP) % FULL_TURN;
    }

    fn process_pan_keys(&mut self, input: InputSnapshot) {
        if input.pan_left {
            self.pan_angle = (self.pan_angle + FULL_TURN - PAN_KEY_STEP) % FULL_TURN;
        }
        if input.pan_right {
            self.pan_angle = (self.pan_angle + PAN_KEY_STEP) % FULL_TURN;
        }
    }

    fn process_zoom_keys(&mut self, input: InputSnapshot) {
        if input.zoom_in {
            self.zoom.nudge(true, ZOOM_KEY_STEP);
        }
        if input.zoom_out {
            self.zoom.nudge(false, ZOOM_KEY_STEP);
        }
    }

    fn tick_lock_control(&mut self, input: InputSnapshot) {
        if self.doors.is_empty() {
            return;
        }

        if input.scroll_back {
            self.door_cursor = rotate_next(self.door_cursor, self.doors.len());
        }
        if input.scroll_forward {
            self.door_cursor = rotate_prev(self.door_cursor, self.doors.len());
        }

        if input.select {
            let Some(door) = self.doors.get(self.door_cursor) else {
                return;
            };
            let name = door.object.as_str();
            let Some(locked) = self.host.door_locked(name) else {
                panic!("unknown door object '{name}'");
            };
            self.host.set_door_locked(name, !locked);
            debug!("door '{name}' now {}", if locked { "unlocked" } else { "locked" });
        }
    }
}

fn rotate_next(current: usize, total: usize) -> usize {
    if total == 0 { 0 } else { (current + 1) % total }
}

fn rotate_prev(current: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else if current == 0 {
        total - 1
    } else {
        current - 1
    }
}
