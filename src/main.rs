use framestats::frame_ingestion::frame_loader::load_frames;
use framestats::report_output::report_builder::build_report;
use framestats::report_output::report_writer::create_json_file;
use framestats::state_analysis::analysis_config::AnalysisConfig;

use std::env;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber for diagnostic output on stderr.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Parses command-line arguments for input path, number of threads, and
/// output file name.
///
/// # Returns
///
/// * `Ok((input_path, num_threads, output_file_name))` - A tuple containing
///   the input path, number of threads, and output file name.
/// * `Err(String)` - An error message if the arguments are invalid or missing.
fn parse_args() -> Result<(String, usize, String), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() != 4 {
        return Err("Usage: cargo run <input-path> <num-threads> <output-file-name>".into());
    }

    let input_path = args[1].clone();
    let num_threads: usize = args[2]
        .parse()
        .map_err(|_| "Number of threads must be a valid integer.")?;
    let output_file_name = args[3].clone();

    Ok((input_path, num_threads, output_file_name))
}

fn main() -> Result<(), String> {
    init_tracing();
    let (input_path, num_threads, output_file_name) = parse_args()?;

    let config = AnalysisConfig::default();

    let raw_frames = load_frames(&input_path, num_threads).map_err(|err| err.to_string())?;
    let frames = raw_frames.augment();

    let report = build_report(&frames, &config).map_err(|err| err.to_string())?;

    println!(
        "Frequency of {} entering via the boundary: {}",
        report.entry_team, report.boundary_entry_count
    );
    println!(
        "Average timer for {} committing to {} with a qualifying loadout: {}",
        config.objective_timer.team,
        config.objective_timer.area,
        report.average_commit_seconds.unwrap_or(0.0)
    );

    match create_json_file(&output_file_name, &report) {
        Ok(()) => println!("File created successfully."),
        Err(err) => {
            eprintln!("Failed to create file: {err}");
        }
    }

    Ok(())
}
