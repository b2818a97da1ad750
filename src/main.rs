//! Bricker entry point
//!
//! Wires the match core to the terminal frontend: loads an optional JSON
//! config, seeds the match from the wall clock, runs the fixed-timestep
//! frame loop, and restores the terminal on every exit path.

use std::io::{self, BufWriter};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use std::{env, fs, process, thread};

use crossterm::terminal;

use bricker::MatchConfig;
use bricker::consts::MAX_SUBSTEPS;
use bricker::sim::{self, MatchPhase, MatchState};
use bricker::ui::{self, TerminalUi};

fn main() {
    env_logger::init();

    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            process::exit(2);
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);

    let state = match MatchState::new(config.clone(), seed) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            process::exit(2);
        }
    };
    log::info!("match initialized with seed {seed}");

    if let Err(err) = run(state, &config) {
        eprintln!("terminal error: {err}");
        process::exit(1);
    }
}

/// Optional JSON config file as the only CLI argument; missing keys fall
/// back to their defaults
fn load_config() -> Result<MatchConfig, String> {
    let Some(path) = env::args().nth(1) else {
        return Ok(MatchConfig::default());
    };
    let raw = fs::read_to_string(&path).map_err(|err| format!("cannot read {path}: {err}"))?;
    let config: MatchConfig =
        serde_json::from_str(&raw).map_err(|err| format!("cannot parse {path}: {err}"))?;
    config
        .validate()
        .map_err(|err| format!("invalid configuration in {path}: {err}"))?;
    Ok(config)
}

/// Terminal setup, frame loop, guaranteed teardown
fn run(mut state: MatchState, config: &MatchConfig) -> io::Result<()> {
    ui::setup_terminal()?;
    let result = play(&mut state, config);
    ui::restore_terminal();
    result
}

fn play(state: &mut MatchState, config: &MatchConfig) -> io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let events = ui::spawn_input_thread();
    let mut ui = TerminalUi::new(BufWriter::new(io::stdout()), events, cols, rows, config);

    let step = config.frame_dt();
    let frame_budget = Duration::from_secs_f32(step);
    let mut accumulator = 0.0_f32;
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        if ui.poll_input() {
            log::info!("player quit");
            break;
        }

        // Clamp dt so a stall (modal dialog, suspended terminal) doesn't
        // turn into a huge catch-up burst
        let dt = last.elapsed().as_secs_f32().min(0.1);
        last = Instant::now();
        accumulator += dt;

        let input = ui.frame_input();
        let mut substeps = 0;
        while accumulator >= step && substeps < MAX_SUBSTEPS {
            sim::tick(state, &input, step, &mut ui);
            accumulator -= step;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS {
            // Whatever backlog the substep cap didn't absorb is dropped
            accumulator = 0.0;
        }

        if state.phase == MatchPhase::Terminated {
            log::info!("match over");
            break;
        }

        ui.render(state)?;

        if let Some(remaining) = frame_budget.checked_sub(frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
    Ok(())
}
