//! Host simulator: drives the overlay core the way the game loop would,
//! with scripted input and canned world data instead of a real engine.

use log::{LevelFilter, info};
use overscan_core::{
    device::{MENU_LEVELS, MenuAccess, Mode, OverlayDevice, TickResult},
    email::EMAIL_RECORD_BYTES,
    input::InputSnapshot,
    panel::{PinPosition, ROW_FLAG_HEADING, ROW_FLAG_OPTION, ROW_FLAG_PARAGRAPH, TextLayoutProfile},
    render::Frame,
};

#[path = "main/host.rs"]
mod host;

use host::{DemoHost, LoggingSurfaces};

const TOTAL_TICKS: u32 = 150;
const FRAME_LOG_PERIOD: u32 = 12;

type Device = OverlayDevice<DemoHost, LoggingSurfaces>;

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Debug)
        .init();

    let mut device = Device::new(
        DemoHost::prison_block(),
        LoggingSurfaces::default(),
        TextLayoutProfile::default(),
    );

    device.new_email("governor_briefing");
    device.set_minimum_zoom(64);
    device.set_maximum_zoom(512);
    device.add_floor_range(0, 2);
    device.register_door("cellblock_door");
    device.register_door("laundry_door");

    device.activate(Mode::MotionScan);

    for tick in 0..TOTAL_TICKS {
        run_script(&mut device, tick);
        let result = device.cycle_logic(scripted_input(tick));
        if result == TickResult::RenderRequested && tick % FRAME_LOG_PERIOD == 0 {
            device.with_frame(|frame| describe(tick, &frame));
        }
    }

    device.deactivate(true);
    device.cycle_logic(InputSnapshot::NONE);
    info!(
        "overlay down; surfaces still live: {}",
        device.surfaces().live
    );

    demo_menu_bridge(&mut device);
    demo_notification_round_trip(&mut device);
}

/// Script-side calls a mission would make at fixed points in the run.
fn run_script(device: &mut Device, tick: u32) {
    match tick {
        30 => {
            device.set_mode(Mode::Database);
            device.set_text(
                "CENTRAL RECORDS",
                ROW_FLAG_HEADING,
                0,
                PinPosition::Centered,
            );
            device.set_text(
                "Inmate transfers are suspended pending the governor's review \
                 of last night's incident in the laundry block.",
                ROW_FLAG_PARAGRAPH,
                1,
                PinPosition::TopLeft,
            );
            for option in ["1. Transfer log", "2. Incident report", "3. Staff roster"] {
                device.set_text(option, ROW_FLAG_OPTION, 2, PinPosition::TopLeft);
            }
            device.setup_picture(24, "warden_mugshot");
        }
        80 => device.set_mode(Mode::Communications),
        110 => device.set_mode(Mode::LockControlPuzzle),
        _ => {}
    }
}

fn scripted_input(tick: u32) -> InputSnapshot {
    let mut input = InputSnapshot::NONE;
    match tick {
        5..=9 => input.pan_right = true,
        12..=14 => input.zoom_in = true,
        20 => input.cycle_palette = true,
        40 | 50 => input.scroll_back = true,
        60 => input.scroll_forward = true,
        85 => input.cancel_speech = true,
        95 => input.select = true,
        115 => input.scroll_back = true,
        120 => input.select = true,
        _ => {}
    }
    input
}

fn describe(tick: u32, frame: &Frame<'_>) {
    match frame {
        Frame::MotionScan { scan, email_flash } => info!(
            "tick {tick}: motion scan, beam {} pan {} zoom {} palette {} slices {:?} flash {email_flash}",
            scan.beam_angle, scan.pan, scan.zoom, scan.palette, scan.slices
        ),
        Frame::InfraRedLink { scan, panel, .. } => info!(
            "tick {tick}: infra-red link, beam {} rows {}",
            scan.beam_angle,
            panel.rows.len()
        ),
        Frame::Database { panel, .. } => info!(
            "tick {tick}: database, {} rows, window at {} (offset {})",
            panel.rows.len(),
            panel.first_visible,
            panel.pixel_offset
        ),
        Frame::Communications {
            pending_id,
            speech_ticks,
            ..
        } => info!("tick {tick}: communications, pending '{pending_id}', speech {speech_ticks}"),
        Frame::Map { pan, zoom, .. } => info!("tick {tick}: map, pan {pan} zoom {zoom}"),
        Frame::LockControl { doors, cursor, .. } => info!(
            "tick {tick}: lock control, cursor {cursor} of {} doors",
            doors.len()
        ),
    }
}

fn demo_menu_bridge(device: &mut Device) {
    let mut values = [0i32; MENU_LEVELS];
    device.access_menu_level_variables(&mut values, MenuAccess::Get);
    values[0] = 3;
    device.access_menu_level_variables(&mut values, MenuAccess::Set);
    info!("menu bridge wrote {values:?}");
}

fn demo_notification_round_trip(device: &mut Device) {
    device.new_email("parole_board_summons");
    let mut record = [0u8; EMAIL_RECORD_BYTES];
    device.save_email(&mut record);
    device.mark_email_read();
    device.restore_email(&record);
    info!(
        "notification restored, waiting: {}",
        device.is_email_waiting()
    );
}
