impl<H, S> OverlayDevice<H, S>
where
    H: GameWorld + ScriptHost + PictureLibrary + TextShaper,
    S: SurfaceService,
{
    /// Hands the renderer a view model for the current mode. Does nothing
    /// unless the device is fully active.
    pub fn with_frame<F>(&self, f: F)
    where
        F: FnOnce(Frame<'_>),
    {
        if self.activation != ActivationState::Active {
            return;
        }

        let email_flash = self.email.is_waiting() && self.email.flash_visible();

        match self.mode {
            Mode::MotionScan => f(Frame::MotionScan {
                scan: self.scan_view(false),
                email_flash,
            }),
            Mode::InfraRedLink => f(Frame::InfraRedLink {
                scan: self.scan_view(true),
                panel: self.panel_view(),
                email_flash,
            }),
            Mode::Database => f(Frame::Database {
                panel: self.panel_view(),
                email_flash,
            }),
            Mode::Communications => f(Frame::Communications {
                panel: self.panel_view(),
                pending_id: self.email.pending_id(),
                speech_ticks: self.speech_ticks,
                email_flash,
            }),
            Mode::Map => f(Frame::Map {
                pan: self.pan_angle,
                zoom: self.zoom.current(),
                email_flash,
            }),
            Mode::LockControlPuzzle => {
                let mut doors = [DoorView::default(); MAX_DOORS];
                let mut count = 0usize;
                for door in &self.doors {
                    let name = door.object.as_str();
                    doors[count] = DoorView {
                        name,
                        locked: self.host.door_locked(name).unwrap_or(false),
                    };
                    count += 1;
                }
                f(Frame::LockControl {
                    doors: &doors[..count],
                    cursor: self.door_cursor.min(count.saturating_sub(1)),
                    email_flash,
                });
            }
        }
    }

    fn scan_view(&self, infra_red: bool) -> ScanView<'_> {
        ScanView {
            beam_angle: self.beam_angle,
            pan: self.pan_angle,
            zoom: self.zoom.current(),
            palette: self.palette,
            slices: self.floors.included(),
            floor_y: self.floors.floor_y(),
            ceiling_y: self.floors.ceiling_y(),
            infra_red,
        }
    }

    fn panel_view(&self) -> PanelView<'_> {
        PanelView {
            rows: self.panel.rows(),
            first_visible: self.panel.first_visible(),
            rows_displayed: self.panel.profile().rows_displayed,
            pixel_offset: self.panel.pixel_offset(),
            scrolling_required: self.panel.scrolling_required(),
        }
    }
}
