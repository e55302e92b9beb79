#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::collapsible_if)]

use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::Level;

use ghost_meter::engine::params::RECENT_EVENTS;
use ghost_meter::engine::sensor::{EvpProbe, MagneticSample, TemperatureDrift};
use ghost_meter::engine::{EngineConfig, MonotonicClock, ParanormalEngine, RngEntropy, SessionLog};
use ghost_meter::ui::{MeterView, compute_trace_grid, draw_ui};

const TICK_RATE: Duration = Duration::from_millis(100);
const RESPONSE_INTERVAL: Duration = Duration::from_secs(1);
const TEMPERATURE_INTERVAL: Duration = Duration::from_secs(2);
const EVP_INTERVAL: Duration = Duration::from_secs(5);
const CALIBRATION_SAMPLES: usize = 20;

/// Synthetic magnetometer: a slowly wandering field around Earth strength.
struct FieldSimulator {
    field: MagneticSample,
}

impl FieldSimulator {
    fn new() -> Self {
        Self {
            field: MagneticSample::new(22.0, 5.0, 32.0),
        }
    }

    fn sample(&mut self) -> MagneticSample {
        let mut rng = rand::rng();
        self.field.x = (self.field.x + rng.random_range(-0.8..0.8)).clamp(-60.0, 60.0);
        self.field.y = (self.field.y + rng.random_range(-0.8..0.8)).clamp(-60.0, 60.0);
        self.field.z = (self.field.z + rng.random_range(-0.8..0.8)).clamp(-60.0, 60.0);
        self.field
    }
}

type Engine = ParanormalEngine<RngEntropy<rand::rngs::StdRng>, MonotonicClock>;

fn init_tracing() {
    let level = match std::env::var("GHOST_LOG").as_deref() {
        Ok("error") => Level::ERROR,
        Ok("info") => Level::INFO,
        Ok("debug") => Level::DEBUG,
        Ok("trace") => Level::TRACE,
        _ => Level::WARN,
    };
    // stdout belongs to the terminal UI
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::from_env()?,
    };
    let mut engine = ParanormalEngine::with_sources(
        config,
        RngEntropy::from_os(),
        MonotonicClock::new(),
    )?;

    let mut sim = FieldSimulator::new();
    let samples: Vec<f64> = (0..CALIBRATION_SAMPLES)
        .map(|_| sim.sample().emf_level())
        .collect();
    engine.calibrate_baseline(&samples)?;

    // Setup Terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut engine, &mut sim);

    // Restore Terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(log) => {
            let id = session_id(SystemTime::now(), &mut rand::rng());
            let summary = log.summary(id, engine.now_ms());
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Err(err) => println!("{err:?}"),
    }

    Ok(())
}

/// Wall-clock millis plus a random suffix; the engine clock starts at zero.
fn session_id(now: SystemTime, rng: &mut impl Rng) -> String {
    let millis = now.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_millis());
    format!("session-{millis}-{:04x}", rng.random::<u16>())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    engine: &mut Engine,
    sim: &mut FieldSimulator,
) -> Result<SessionLog, Box<dyn std::error::Error>> {
    let drift = TemperatureDrift::default();
    let probe = EvpProbe;
    let mut log = SessionLog::new(engine.now_ms());
    let mut view = MeterView {
        temperature: drift.base,
        ..MeterView::default()
    };

    let mut last_tick = Instant::now();
    let mut last_response = Instant::now();
    let mut last_temperature = Instant::now();
    let mut last_evp = Instant::now();

    loop {
        // 1. Update
        if last_tick.elapsed() >= TICK_RATE {
            let now = engine.now_ms();
            let reading = engine.process_reading_detailed(sim.sample().emf_level())?;
            log.record_reading(&reading, now);
            view.level = reading.level;
            view.pattern = engine.detect_pattern();

            if last_temperature.elapsed() >= TEMPERATURE_INTERVAL {
                view.temperature = drift.sample(view.level, engine.entropy_mut());
                log.record_temperature(view.temperature, now)?;
                last_temperature = Instant::now();
            }
            if last_evp.elapsed() >= EVP_INTERVAL {
                let evp = probe.analyze(engine.entropy_mut());
                log.record_evp(&evp, now);
                last_evp = Instant::now();
            }
            if last_response.elapsed() >= RESPONSE_INTERVAL {
                let response = engine.generate_response(view.level, view.temperature)?;
                log.record_response(&response, view.level, now);
                last_response = Instant::now();
            }

            view.score = log.score(engine, view.level, now)?;
            view.elapsed_ms = log.duration_ms(now);
            view.events = log
                .recent(RECENT_EVENTS)
                .map(|e| MeterView::event_line(e, log.started_at_ms()))
                .collect();
            last_tick = Instant::now();
        }

        // 2. Render
        let readings = engine.history().to_vec();
        terminal.draw(|f| {
            let area = f.area();
            // HUD, gauge and log take 16 rows
            let rows = (area.height as usize).saturating_sub(16);
            let cols = area.width as usize;
            draw_ui(f, &view, compute_trace_grid(&readings, rows, cols));
        })?;

        // 3. Input
        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q') {
                    return Ok(log);
                }
            }
        }
    }
}
