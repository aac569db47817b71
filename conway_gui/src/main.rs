// main.rs - egui front end for the toroidal Game of Life engine

use std::time::Duration;

use anyhow::anyhow;
use clap::Parser;
use eframe::egui;
use egui::Color32;
use tracing::info;

use conway::config::{DEFAULT_COLS, DEFAULT_ROWS};
use conway::{EngineConfig, EngineHandle, Frame};

mod ui;

#[derive(Parser, Debug)]
#[command(name = "conway_gui")]
#[command(version)]
#[command(about = "Conway's Game of Life on a wrap-around grid")]
struct Args {
    /// Number of grid rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: usize,

    /// Number of grid columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: usize,

    /// Delay between generations, in milliseconds
    #[arg(long, default_value_t = 16)]
    tick_ms: u64,

    /// Side length of one cell, in pixels
    #[arg(long, default_value_t = 15.0)]
    cell_size: f32,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = EngineConfig::default()
        .with_size(args.rows, args.cols)
        .with_tick_interval(Duration::from_millis(args.tick_ms));
    let engine = EngineHandle::spawn(config)?;
    info!(rows = args.rows, cols = args.cols, tick_ms = args.tick_ms, "engine started");

    let app = LifeApp::new(engine, args.cell_size);
    let (width, height) = app.board_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width.max(600.0) + 40.0, height + 200.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("window failed: {err}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

/// Presentation state; the grid itself lives on the engine thread.
pub struct LifeApp {
    engine: EngineHandle,
    frame: Frame,
    pub cell_size: f32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
}

impl LifeApp {
    fn new(engine: EngineHandle, cell_size: f32) -> Self {
        let frame = engine.frame();
        Self {
            engine,
            frame,
            cell_size,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
        }
    }

    const SPACING: f32 = 0.5;

    /// Painted board size in pixels as (width, height).
    fn board_size(&self) -> (f32, f32) {
        let (rows, cols) = self.engine.dimensions();
        let pitch = self.cell_size + Self::SPACING;
        (pitch * cols as f32 - Self::SPACING, pitch * rows as f32 - Self::SPACING)
    }
}
