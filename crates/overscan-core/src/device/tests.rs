use super::*;
use crate::{
    host::{PictureInfo, mock::MockHost},
    panel::{ROW_FLAG_HEADING, ROW_FLAG_PARAGRAPH},
};

#[derive(Debug, Default)]
struct CountingSurfaces {
    created: u32,
    released: u32,
}

impl SurfaceService for CountingSurfaces {
    type Handle = u32;

    fn create_surface(&mut self, _width: u32, _height: u32) -> u32 {
        self.created += 1;
        self.created
    }

    fn release_surface(&mut self, _handle: u32) {
        self.released += 1;
    }
}

fn device() -> OverlayDevice<MockHost, CountingSurfaces> {
    OverlayDevice::new(
        MockHost::two_floors(),
        CountingSurfaces::default(),
        TextLayoutProfile::default(),
    )
}

fn active_device(mode: Mode) -> OverlayDevice<MockHost, CountingSurfaces> {
    let mut dev = device();
    dev.activate(mode);
    dev.cycle_logic(InputSnapshot::NONE);
    dev
}

fn frame_mode(dev: &OverlayDevice<MockHost, CountingSurfaces>) -> Option<&'static str> {
    let mut seen = None;
    dev.with_frame(|frame| {
        seen = Some(match frame {
            Frame::MotionScan { .. } => "motion_scan",
            Frame::InfraRedLink { .. } => "infra_red",
            Frame::Database { .. } => "database",
            Frame::Communications { .. } => "communications",
            Frame::Map { .. } => "map",
            Frame::LockControl { .. } => "lock_control",
        });
    });
    seen
}

#[test]
fn activation_round_trip_releases_every_surface_once() {
    let mut dev = active_device(Mode::MotionScan);
    assert_eq!(dev.activation_state(), ActivationState::Active);
    assert_eq!(dev.surfaces().created, 2);

    dev.deactivate(true);
    dev.cycle_logic(InputSnapshot::NONE);
    assert_eq!(dev.activation_state(), ActivationState::Inactive);
    assert_eq!(dev.surfaces().released, 2);
    assert_eq!(dev.host().logic_reruns, 1);

    // Dismissing again must not release anything twice.
    dev.deactivate(true);
    dev.cycle_logic(InputSnapshot::NONE);
    assert_eq!(dev.surfaces().released, 2);
    assert_eq!(dev.host().logic_reruns, 1);
}

#[test]
fn deactivate_is_refused_while_the_modal_menu_is_live() {
    let mut dev = active_device(Mode::Database);
    dev.host_mut().menu_active = true;

    dev.deactivate(false);
    assert_eq!(dev.activation_state(), ActivationState::Active);

    dev.deactivate(true);
    dev.cycle_logic(InputSnapshot::NONE);
    assert_eq!(dev.activation_state(), ActivationState::Inactive);
}

#[test]
fn activate_while_up_is_ignored() {
    let mut dev = active_device(Mode::Database);
    dev.activate(Mode::Map);
    assert_eq!(dev.mode(), Mode::Database);
}

#[test]
fn activation_resolves_floors_and_player_pan() {
    let dev = active_device(Mode::MotionScan);
    assert_eq!(dev.floors().included(), &[0]);

    let mut pan = None;
    dev.with_frame(|frame| {
        if let Frame::MotionScan { scan, .. } = frame {
            pan = Some(scan.pan);
        }
    });
    assert_eq!(pan, Some(1024));
}

#[test]
fn map_mode_pins_pan_to_north() {
    let dev = active_device(Mode::Map);
    let mut pan = None;
    dev.with_frame(|frame| {
        if let Frame::Map { pan: value, .. } = frame {
            pan = Some(value);
        }
    });
    assert_eq!(pan, Some(0));
}

#[test]
fn motion_scan_tick_advances_beam_and_handles_keys() {
    let mut dev = active_device(Mode::MotionScan);
    dev.cycle_logic(InputSnapshot {
        zoom_in: true,
        pan_right: true,
        cycle_palette: true,
        ..InputSnapshot::NONE
    });

    let mut seen = None;
    dev.with_frame(|frame| {
        if let Frame::MotionScan { scan, .. } = frame {
            seen = Some((scan.beam_angle, scan.pan, scan.zoom, scan.palette));
        }
    });
    let (beam, pan, zoom, palette) = seen.unwrap();
    assert_eq!(beam, BEAM_STEP);
    assert_eq!(pan, 1024 + PAN_KEY_STEP);
    assert_eq!(zoom, 128 + ZOOM_KEY_STEP);
    assert_eq!(palette, 1);
}

#[test]
fn infra_red_link_shows_scan_and_text_together() {
    let mut dev = active_device(Mode::InfraRedLink);
    dev.set_text("LINK ESTABLISHED", ROW_FLAG_HEADING, 0, PinPosition::Centered);
    dev.cycle_logic(InputSnapshot::NONE);

    let mut seen = None;
    dev.with_frame(|frame| {
        if let Frame::InfraRedLink { scan, panel, .. } = frame {
            seen = Some((scan.infra_red, panel.rows.len()));
        }
    });
    assert_eq!(seen, Some((true, 1)));
}

#[test]
fn set_mode_clears_text_even_without_a_mode_change() {
    let mut dev = active_device(Mode::Database);
    dev.set_text("RECORDS", ROW_FLAG_HEADING, 0, PinPosition::Centered);
    dev.set_text("entry", ROW_FLAG_PARAGRAPH, 0, PinPosition::TopLeft);
    assert_eq!(dev.panel().next_free(), 2);

    dev.set_mode(Mode::Database);
    assert_eq!(dev.panel().next_free(), 0);
    assert_eq!(dev.mode(), Mode::Database);
}

#[test]
fn mode_change_takes_over_on_the_next_tick() {
    let mut dev = active_device(Mode::MotionScan);
    dev.set_mode(Mode::Map);
    assert_eq!(dev.mode(), Mode::Map);

    dev.cycle_logic(InputSnapshot::NONE);
    assert_eq!(frame_mode(&dev), Some("map"));
}

#[test]
fn mode_override_is_consumed_exactly_once() {
    let mut dev = active_device(Mode::MotionScan);
    dev.set_mode_override(Mode::Communications);

    dev.set_default_or_override_mode();
    assert_eq!(dev.mode(), Mode::Communications);

    dev.set_default_or_override_mode();
    assert_eq!(dev.mode(), DEFAULT_MODE);
}

#[test]
fn staged_override_applies_before_activation() {
    let mut dev = device();
    dev.set_mode_override(Mode::Database);
    dev.set_default_or_override_mode();
    assert_eq!(dev.mode(), Mode::Database);
}

#[test]
fn menu_bridge_round_trips_every_level() {
    let mut dev = device();
    for level in 0..MENU_LEVELS {
        dev.host_mut()
            .add_variable(&format!("{MENU_LEVEL_VAR_PREFIX}{level}"), level as i32 * 10);
    }

    let mut values = [0i32; MENU_LEVELS];
    dev.access_menu_level_variables(&mut values, MenuAccess::Get);
    assert_eq!(values, [0, 10, 20, 30, 40]);

    values = [7; MENU_LEVELS];
    dev.access_menu_level_variables(&mut values, MenuAccess::Set);
    assert_eq!(dev.host().variable("menu_level_3"), Some(7));
}

#[test]
#[should_panic(expected = "not found")]
fn menu_bridge_with_missing_variables_is_fatal() {
    let mut dev = device();
    let mut values = [0i32; MENU_LEVELS];
    dev.access_menu_level_variables(&mut values, MenuAccess::Get);
}

#[test]
fn lock_control_toggles_the_selected_door() {
    let mut dev = device();
    dev.host_mut().add_door("cellblock_door", true);
    dev.host_mut().add_door("armory_door", false);
    dev.register_door("cellblock_door");
    dev.register_door("armory_door");

    dev.activate(Mode::LockControlPuzzle);
    dev.cycle_logic(InputSnapshot::NONE);

    dev.cycle_logic(InputSnapshot {
        select: true,
        ..InputSnapshot::NONE
    });
    assert_eq!(dev.host().door_locked("cellblock_door"), Some(false));

    dev.cycle_logic(InputSnapshot {
        scroll_back: true,
        ..InputSnapshot::NONE
    });
    dev.cycle_logic(InputSnapshot {
        select: true,
        ..InputSnapshot::NONE
    });
    assert_eq!(dev.host().door_locked("armory_door"), Some(true));
}

#[test]
fn database_scroll_keys_move_the_window() {
    let mut dev = active_device(Mode::Database);
    dev.set_text("LOG", ROW_FLAG_HEADING, 0, PinPosition::Centered);
    for _ in 0..14 {
        dev.set_text("", 0, 0, PinPosition::TopLeft);
    }
    assert!(dev.panel().scrolling_required());

    dev.cycle_logic(InputSnapshot {
        scroll_back: true,
        ..InputSnapshot::NONE
    });
    for _ in 0..crate::panel::SCROLL_CYCLES {
        dev.cycle_logic(InputSnapshot::NONE);
    }
    assert_eq!(dev.panel().first_visible(), 1);
}

#[test]
fn text_calls_are_ignored_while_down() {
    let mut dev = device();
    dev.set_text("RECORDS", ROW_FLAG_HEADING, 0, PinPosition::Centered);
    dev.clear_all_text();
    assert_eq!(dev.panel().next_free(), 0);
}

#[test]
fn second_picture_request_is_ignored() {
    let mut dev = active_device(Mode::Database);
    dev.host_mut().add_picture(
        "mugshot",
        PictureInfo {
            width: 64,
            height: 30,
        },
    );
    dev.set_text("FILE", ROW_FLAG_HEADING, 0, PinPosition::Centered);

    dev.setup_picture(10, "mugshot");
    let rows = dev.panel().next_free();
    assert_eq!(rows, 4);

    dev.setup_picture(10, "mugshot");
    assert_eq!(dev.panel().next_free(), rows);
}

#[test]
#[should_panic(expected = "limit")]
fn oversized_picture_is_fatal() {
    let mut dev = active_device(Mode::Database);
    dev.host_mut().add_picture(
        "panorama",
        PictureInfo {
            width: 64,
            height: 400,
        },
    );
    dev.set_text("FILE", ROW_FLAG_HEADING, 0, PinPosition::Centered);
    dev.setup_picture(0, "panorama");
}

#[test]
#[should_panic(expected = "unknown picture resource")]
fn missing_picture_is_fatal() {
    let mut dev = active_device(Mode::Database);
    dev.set_text("FILE", ROW_FLAG_HEADING, 0, PinPosition::Centered);
    dev.setup_picture(0, "ghost");
}

#[test]
fn restore_email_resyncs_the_icon_indicator() {
    let mut dev = device();
    dev.new_email("warden_memo");
    let mut record = [0u8; EMAIL_RECORD_BYTES];
    dev.save_email(&mut record);

    let mut other = device();
    other.restore_email(&record);
    assert!(other.is_email_waiting());
    assert!(other.is_this_email_waiting("warden_memo"));
    assert_eq!(other.host().email_indicator, Some(true));

    other.mark_email_read();
    assert_eq!(other.host().email_indicator, Some(false));
}

#[test]
fn communications_announces_then_cancels_speech() {
    let mut dev = device();
    dev.new_email("warden_memo");
    dev.activate(Mode::Communications);
    dev.cycle_logic(InputSnapshot::NONE);

    let mut ticks = None;
    dev.with_frame(|frame| {
        if let Frame::Communications { speech_ticks, .. } = frame {
            ticks = Some(speech_ticks);
        }
    });
    assert_eq!(ticks, Some(SPEECH_ANNOUNCE_TICKS));

    dev.cycle_logic(InputSnapshot {
        cancel_speech: true,
        ..InputSnapshot::NONE
    });
    assert_eq!(dev.host().speech_stops, 1);

    let mut ticks = None;
    dev.with_frame(|frame| {
        if let Frame::Communications { speech_ticks, .. } = frame {
            ticks = Some(speech_ticks);
        }
    });
    assert_eq!(ticks, Some(0));
}

#[test]
fn communications_select_marks_the_notification_read() {
    let mut dev = device();
    dev.new_email("warden_memo");
    dev.activate(Mode::Communications);
    dev.cycle_logic(InputSnapshot::NONE);

    dev.cycle_logic(InputSnapshot {
        select: true,
        ..InputSnapshot::NONE
    });
    assert!(!dev.is_email_waiting());
    assert_eq!(dev.host().email_indicator, Some(false));
}
