mod app;
mod curve;
mod data;
mod figure;
mod state;
mod style;
mod ui;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use app::PlotterApp;
use eframe::egui;
use state::ViewState;

const DEFAULT_INPUT: &str = "out.csv";

fn main() {
    env_logger::init();

    println!("\n=== Function System Plotter ===");

    let path = match prompt_for_path() {
        Some(path) => path,
        None => return,
    };

    if !path.exists() {
        println!("Error: File '{}' not found.", path.display());
        return;
    }

    if let Err(e) = run(&path) {
        log::error!("run failed: {e:#}");
        println!("Error plotting data: {e:#}");
    }
}

/// Ask for the input path on stdin; an empty answer means the default.
fn prompt_for_path() -> Option<PathBuf> {
    print!("Enter CSV file path (or press Enter for default '{DEFAULT_INPUT}'): ");
    io::stdout().flush().ok()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).ok()?;
    let answer = answer.trim();

    Some(if answer.is_empty() {
        PathBuf::from(DEFAULT_INPUT)
    } else {
        PathBuf::from(answer)
    })
}

/// One full batch: load, compose, write the PNG, open the viewer.
fn run(path: &Path) -> Result<()> {
    let table = data::loader::load_table(path)?;
    log::info!("loaded {} samples from {}", table.len(), path.display());

    let state = ViewState::compose(&table, path.to_path_buf());

    let output = Path::new(figure::OUTPUT_FILE);
    figure::render_png(&state, output)?;
    println!("Plot saved as {}", figure::OUTPUT_FILE);

    show_viewer(state)
}

/// Present the composed figure interactively until the window closes.
fn show_viewer(state: ViewState) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([800.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Function System Plotter",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(PlotterApp::new(
                state,
                Some(PathBuf::from(figure::OUTPUT_FILE)),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("opening the viewer window: {e}"))
}
