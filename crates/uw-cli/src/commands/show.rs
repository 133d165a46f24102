use chrono::Local;
use colored::Colorize;

use uw_core::time::TimeOfDay;
use uw_simulation::{ClockConfig, ClockSimulator, Frame, TimeMode, is_night_angle};

use super::{ModeArg, parse_time};

pub fn run(mode: ModeArg, time: Option<&str>, json: bool) -> Result<(), String> {
    let now = match time {
        Some(s) => parse_time(s)?,
        None => Local::now().time(),
    };

    let mode = TimeMode::from(mode);
    let mut config = ClockConfig::default().with_mode(mode);
    if mode.is_manual() {
        config = config.with_initial_time(TimeOfDay::from_wall_clock(now));
    }

    let mut sim = ClockSimulator::new(config);
    sim.tick(Frame::new(now, 1.0 / 60.0));
    let snap = sim.snapshot();

    if json {
        let rendered = serde_json::to_string_pretty(&snap).map_err(|e| e.to_string())?;
        println!("{rendered}");
        return Ok(());
    }

    let sky = if is_night_angle(snap.sun_angle_degrees) {
        "night"
    } else {
        "day"
    };
    let hands = snap.hands.normalized();

    println!(
        "  {} {}",
        snap.digital_time.bold(),
        format!("({})", snap.mode).dimmed()
    );
    println!("  hour hand   {:6.1} deg", hands.hour);
    println!("  minute hand {:6.1} deg", hands.minute);
    println!("  second hand {:6.1} deg", hands.second);
    println!("  sun         {:>4} deg, {sky} sky", snap.sun_angle_degrees);
    let lighting = if snap.lights_on {
        "day preset".yellow()
    } else {
        "night preset".blue()
    };
    println!("  lighting    {lighting}");

    Ok(())
}
