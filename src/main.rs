//! A scroll-animated portfolio page for the terminal.
//!
//! Scroll with the wheel or keys; sections reveal, pin and count up as they
//! cross the viewport.  Run with `--write-config` to create an editable
//! config file.

mod app;
mod config;
mod content;
mod core;
mod ui;

use std::io::{self, stderr, Stderr};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Frame, Terminal};
use tokio::time::MissedTickBehavior;
use tracing_subscriber::EnvFilter;

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::sequencer::SectionId;
use crate::ui::page::{Page, StatusBar};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll-animated portfolio in the terminal")]
struct Cli {
    /// Frames per second (overrides the config file).
    #[arg(long)]
    fps: Option<u32>,

    /// Disable every animation; content appears in its final state.
    #[arg(long = "no-motion")]
    no_motion: bool,

    /// Section to open at.
    #[arg(long, value_enum, default_value_t = StartSection::Hero)]
    section: StartSection,

    /// Write logs to this file instead of stderr.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Save the effective configuration to the config file and exit.
    #[arg(long = "write-config")]
    write_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StartSection {
    Hero,
    About,
    Projects,
    Skills,
}

impl From<StartSection> for SectionId {
    fn from(s: StartSection) -> Self {
        match s {
            StartSection::Hero => SectionId::Hero,
            StartSection::About => SectionId::About,
            StartSection::Projects => SectionId::Projects,
            StartSection::Skills => SectionId::Skills,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(fps) = self.fps {
            config.fps = fps.clamp(5, 240);
        }
        if self.no_motion {
            config.reduced_motion = true;
        }
    }
}

// ───────────────────────────────────────── logging ───────────

/// Logs go to `log_file` when given (the UI owns the terminal), otherwise to
/// stderr, which only shows anything when `RUST_LOG` is set.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_writer(io::stderr) // never pollute stdout
                .init();
        }
    }
    Ok(())
}

// ───────────────────────────────────────── drawing ───────────

fn draw(frame: &mut Frame, state: &AppState) {
    let layout = &state.layout;
    frame.render_widget(
        Page {
            layout,
            seq: &state.seq,
            scroll_y: state.scroll_y,
            year: state.year,
        },
        layout.page_area,
    );

    let hint = state.config.status_bar_hint();
    let pin = state
        .seq
        .section(SectionId::Projects)
        .and_then(|s| s.pin_frame());
    frame.render_widget(
        StatusBar {
            text: state.status_message.as_deref().unwrap_or(&hint),
            section: state.current_section(),
            percent: state.scroll_percent(),
            pin,
            motion: state.motion,
        },
        layout.status_area,
    );
}

// ───────────────────────────────────────── main loop ─────────

type Term = Terminal<CrosstermBackend<Stderr>>;

fn screen(terminal: &Term) -> Result<Rect> {
    let size = terminal.size()?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

async fn run(terminal: &mut Term, config: AppConfig, start: SectionId) -> Result<()> {
    let year = chrono::Local::now().year();
    let frame_interval = config.frame_interval();
    let epoch = Instant::now();
    let mut state = AppState::new(config, screen(terminal)?, start, year, Duration::ZERO)
        .context("building page animations")?;

    let mut events = spawn_event_reader(Duration::from_millis(50));
    let mut frames = tokio::time::interval(frame_interval);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        // Resize events can race the first draw; trust the real size.
        let area = screen(terminal)?;
        if state.layout.page_area.union(state.layout.status_area) != area {
            state.resize(area);
        }
        terminal.draw(|frame| draw(frame, &state))?;

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                match event {
                    AppEvent::Key(k) => handler::handle_key(&mut state, k),
                    AppEvent::Scroll(n) => handler::handle_scroll(&mut state, n),
                    AppEvent::Resize(w, h) => state.resize(Rect::new(0, 0, w, h)),
                }
            }

            _ = frames.tick() => {
                state.on_frame(epoch.elapsed());
            }
        }

        if state.should_quit {
            break;
        }
    }

    state.teardown();
    tracing::info!("exiting");
    Ok(())
}

fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let mut config = AppConfig::load();
    cli.apply(&mut config);

    if cli.write_config {
        let path = config.save().context("saving config")?;
        println!("{}", path.display());
        return Ok(());
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stderr(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stderr()))?;

    let result = run(&mut terminal, config, cli.section.into()).await;

    // ── teardown (also after an error) ────────────────────────
    let restored = restore_terminal(&mut terminal);
    result?;
    restored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_overrides_config() {
        let cli = Cli::parse_from(["folio", "--fps", "500", "--no-motion", "--section", "skills"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config.fps, 240);
        assert!(config.reduced_motion);
        assert_eq!(SectionId::from(cli.section), SectionId::Skills);
    }

    #[test]
    fn cli_defaults_leave_config_alone() {
        let cli = Cli::parse_from(["folio"]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);
        assert_eq!(config, AppConfig::default());
        assert_eq!(cli.section, StartSection::Hero);
        assert!(!cli.write_config);
    }
}
