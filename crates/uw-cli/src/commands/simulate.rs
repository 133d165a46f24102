use chrono::Duration;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use uw_core::time::TimeOfDay;
use uw_simulation::{
    ClockConfig, ClockEventKind, ClockSimulator, Frame, TimeMode, is_night_angle,
};

use super::{ModeArg, parse_time};

pub fn run(
    frames: u64,
    dt: f64,
    start: &str,
    mode: ModeArg,
    speed: f32,
    toggle_at: &[u64],
    verbose: bool,
) -> Result<(), String> {
    let start = parse_time(start)?;
    let mode = TimeMode::from(mode);

    let mut config = ClockConfig::default()
        .with_mode(mode)
        .with_sun_rotation_speed(speed)
        .with_max_events(500);
    if mode.is_manual() {
        config = config.with_initial_time(TimeOfDay::from_wall_clock(start));
    }
    let mut sim = ClockSimulator::new(config);

    println!(
        "  {} {}",
        "Clock simulation".bold(),
        format!("({frames} frames, dt={dt}s, mode={mode}, sun speed={speed})").dimmed()
    );
    println!();

    for i in 0..frames {
        let offset_ms = (dt * 1000.0 * i as f64) as i64;
        let now = start.overflowing_add_signed(Duration::milliseconds(offset_ms)).0;
        let mut frame = Frame::new(now, dt as f32);
        if toggle_at.contains(&(i + 1)) {
            frame = frame.with_toggle();
        }
        sim.tick(frame);

        if verbose {
            let hands = sim.hand_angles().normalized();
            println!(
                "  {} {}  h {:6.1}  m {:6.1}  s {:6.1}",
                format!("[frame {:>4}]", sim.frames()).dimmed(),
                sim.digital_time(),
                hands.hour,
                hands.minute,
                hands.second,
            );
        }
    }
    if verbose {
        println!();
    }

    // Event log
    println!("  {}", "Event Log".bold().underline());
    println!();
    for event in sim.events().events() {
        let frame_label = format!("[frame {:>4}]", event.frame).dimmed();
        let desc = colorize_event(&event.kind, &event.description);
        println!("  {frame_label} {desc}");
    }
    if sim.events().is_empty() {
        println!("  {}", "(no events)".dimmed());
    }
    println!();

    // Final state
    println!("  {}", "Final State".bold().underline());
    println!();

    let snap = sim.snapshot();
    let hands = snap.hands.normalized();
    let sky = if is_night_angle(snap.sun_angle_degrees) {
        "night"
    } else {
        "day"
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Digital time".to_string(), snap.digital_time.clone()]);
    table.add_row(vec!["Mode".to_string(), snap.mode.to_string()]);
    table.add_row(vec!["Hour hand".to_string(), format!("{:.1} deg", hands.hour)]);
    table.add_row(vec![
        "Minute hand".to_string(),
        format!("{:.1} deg", hands.minute),
    ]);
    table.add_row(vec![
        "Second hand".to_string(),
        format!("{:.1} deg", hands.second),
    ]);
    table.add_row(vec![
        "Sun angle".to_string(),
        format!("{} deg ({sky} sky)", snap.sun_angle_degrees),
    ]);
    table.add_row(vec![
        "Lighting".to_string(),
        if snap.lights_on {
            "day preset".to_string()
        } else {
            "night preset".to_string()
        },
    ]);

    println!("{table}");
    Ok(())
}

fn colorize_event(kind: &ClockEventKind, description: &str) -> colored::ColoredString {
    match kind {
        ClockEventKind::LightsToggled { .. } => description.cyan(),
        ClockEventKind::StartupAligned { .. } => description.yellow(),
        ClockEventKind::ModeChanged { .. } => description.blue(),
    }
}
