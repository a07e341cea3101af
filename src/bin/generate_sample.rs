//! Companion data producer: evaluates the piecewise function system
//! over a fixed range and writes `out.csv` for the plotter to load.
//! Points where the system is undefined are skipped.

const OUTPUT_PATH: &str = "out.csv";
const RANGE_START: f64 = -10.0;
const RANGE_END: f64 = 10.0;
const STEP: f64 = 0.25;

/// The piecewise system: trigonometric branch for x <= 0, logarithmic
/// branch for x > 0. NaN marks points outside either domain.
fn system_function(x: f64) -> f64 {
    if x <= 0.0 {
        let cos_x = x.cos();
        let sin_x = x.sin();
        if cos_x == 0.0 || sin_x == 0.0 {
            return f64::NAN;
        }
        let sec_x = 1.0 / cos_x;
        let csc_x = 1.0 / sin_x;
        ((sec_x * csc_x) / cos_x - sec_x).powi(2) - sin_x
    } else {
        let log2_x = x.log2();
        let log10_x = x.log10();
        let log5_x = x.ln() / 5.0f64.ln();
        ((log2_x + log10_x).powi(2) - log2_x - log10_x) - log5_x
    }
}

fn main() {
    let mut writer = csv::Writer::from_path(OUTPUT_PATH).expect("Failed to create output file");
    writer
        .write_record(["X", "F(X)"])
        .expect("Failed to write header");

    let steps = ((RANGE_END - RANGE_START) / STEP).round() as usize;
    let mut written = 0usize;
    for i in 0..=steps {
        let x = RANGE_START + STEP * i as f64;
        let y = system_function(x);
        if !y.is_finite() {
            continue;
        }
        writer
            .write_record([format!("{x}"), format!("{y}")])
            .expect("Failed to write row");
        written += 1;
    }
    writer.flush().expect("Failed to flush output file");

    println!(
        "Wrote {written} samples over [{RANGE_START}, {RANGE_END}] to {OUTPUT_PATH}"
    );
}
