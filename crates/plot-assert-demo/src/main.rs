// File: crates/plot-assert-demo/src/main.rs
// Summary: Demo checks a few functions against hand-drawn ASCII plots and prints the outcome of each.

use anyhow::{Context, Result};
use log::{info, LevelFilter, Log, Metadata, Record};
use plot_assert_core::{check_conforms_to, PlotBuilder, RawVisualisation};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() -> Result<()> {
    // Usage: plot-assert-demo [samples-per-character] [-v|-vv]
    let mut samples_per_character = 10usize;
    let mut level = LevelFilter::Warn;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" => level = LevelFilter::Debug,
            "-vv" => level = LevelFilter::Trace,
            other => {
                samples_per_character = other
                    .parse()
                    .with_context(|| format!("samples per character must be an integer, got '{other}'"))?;
            }
        }
    }
    log::set_logger(&LOGGER).map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
    log::set_max_level(level);
    info!("checking with {samples_per_character} sample(s) per character");

    let cases: [(&str, fn(f64) -> f64, RawVisualisation); 3] = [
        ("y = x + 3", |x| x + 3.0, linear_plot()?),
        ("y = sin(x)", f64::sin, sine_plot()?),
        ("y = sin(x) against a flat line (expected to fail)", f64::sin, flat_plot()?),
    ];

    let mut failures = 0usize;
    for (name, function, plot) in &cases {
        match check_conforms_to(*function, samples_per_character, plot) {
            Ok(()) => println!("ok    {name}"),
            Err(e) => {
                failures += 1;
                println!("FAIL  {name}: {e}");
            }
        }
    }
    println!("{} of {} plot(s) conform", cases.len() - failures, cases.len());
    Ok(())
}

fn linear_plot() -> Result<RawVisualisation> {
    PlotBuilder::new()
        .labeled_row(4.0, "  i")
        .row(" ii")
        .labeled_row(2.0, "ii ")
        .x_axis("| |", [-1.0, 1.0])
        .build()
        .context("linear plot")
}

fn sine_plot() -> Result<RawVisualisation> {
    PlotBuilder::new()
        .labeled_row(1.0,  "   iiiii             ")
        .row(              " iii   iii           ")
        .labeled_row(0.0,  "ii       iii       ii")
        .row(              "           iii   iii ")
        .labeled_row(-1.0, "             iiiii   ")
        .x_axis("|                   |", [0.0, 6.283185307179586])
        .build()
        .context("sine plot")
}

fn flat_plot() -> Result<RawVisualisation> {
    PlotBuilder::new()
        .labeled_row(1.0,  "                     ")
        .labeled_row(0.0,  "XXXXXXXXXXXXXXXXXXXXX")
        .labeled_row(-1.0, "                     ")
        .x_axis("|                   |", [0.0, 6.283185307179586])
        .build()
        .context("flat plot")
}
