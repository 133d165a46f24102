use std::io::{Write as _, stdout};
use std::time::{Duration, Instant};

use chrono::Local;
use colored::Colorize;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use uw_simulation::{ClockConfig, ClockSimulator, Frame};

use super::ModeArg;

pub fn run(mode: ModeArg, fps: u32) -> Result<(), String> {
    let config = ClockConfig::default()
        .with_mode(mode.into())
        .with_max_events(100);
    let mut sim = ClockSimulator::new(config);

    terminal::enable_raw_mode().map_err(|e| e.to_string())?;
    let result = watch_loop(&mut sim, fps.max(1));
    let _ = terminal::disable_raw_mode();
    println!();
    result
}

fn watch_loop(sim: &mut ClockSimulator, fps: u32) -> Result<(), String> {
    let budget = Duration::from_secs_f32(1.0 / fps as f32);
    let mut last = Instant::now();

    loop {
        let mut toggle = false;
        while event::poll(Duration::ZERO).map_err(|e| e.to_string())? {
            if let Event::Key(key) = event::read().map_err(|e| e.to_string())? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char(' ') => toggle = true,
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => {}
                }
            }
        }

        let dt = last.elapsed().as_secs_f32();
        last = Instant::now();

        let mut frame = Frame::new(Local::now().time(), dt);
        if toggle {
            frame = frame.with_toggle();
        }
        sim.tick(frame);

        render_line(sim)?;
        std::thread::sleep(budget);
    }
}

fn render_line(sim: &ClockSimulator) -> Result<(), String> {
    let hands = sim.hand_angles().normalized();
    let state = if sim.lights_on() {
        "day  ".yellow()
    } else {
        "night".blue()
    };
    let line = format!(
        "\r  {}  h {:5.1}  m {:5.1}  s {:5.1}  sun {:>4}  {}   {}",
        sim.digital_time().bold(),
        hands.hour,
        hands.minute,
        hands.second,
        sim.sun_angle(),
        state,
        "[space] toggle lights  [q] quit".dimmed(),
    );

    let mut out = stdout();
    out.write_all(line.as_bytes()).map_err(|e| e.to_string())?;
    out.flush().map_err(|e| e.to_string())
}
