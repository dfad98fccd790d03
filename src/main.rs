use std::{fmt, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;

use convex_triangulate::{io, svg, triangulate_with, Options, TriangulationError};

/// Triangulation of a convex polygon.
///
/// Finds the triangulation with the smallest summed side length and reports
/// its cost and the computational time.
#[derive(Parser, Debug)]
#[command(name = "convex-triangulate", version, about)]
struct Cli {
    /// Problem file: i32 point count followed by f32 (x, y) pairs
    input: PathBuf,

    /// Result file: f32 cost followed by i32 index triples, one per triangle
    result: Option<PathBuf>,

    /// The output svg file demonstrating the triangulation
    #[arg(short = 'o', long = "output-image", value_name = "FILE")]
    output_image: Option<PathBuf>,

    /// Number of worker threads (defaults to CONVEX_TRIANGULATE_THREADS, then all cores)
    #[arg(long)]
    threads: Option<usize>,

    /// Point count above which the tables are filled in parallel
    #[arg(long, value_name = "POINTS")]
    parallel_threshold: Option<usize>,
}

/// An error tagged with the step of the run that raised it
#[derive(Debug)]
struct Failure {
    stage: &'static str,
    error: TriangulationError,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage, self.error)
    }
}

fn stage(stage: &'static str) -> impl FnOnce(TriangulationError) -> Failure {
    move |error| Failure { stage, error }
}

fn run(cli: Cli) -> Result<(), Failure> {
    let mut options = Options::from_env();
    if cli.threads.is_some() {
        options.threads = cli.threads;
    }
    if let Some(threshold) = cli.parallel_threshold {
        options.parallel_threshold = threshold;
    }
    log::debug!("{:?}", options);

    let points = io::read_problem(&cli.input).map_err(stage("load"))?;

    let start = Instant::now();
    let triangulation = triangulate_with(&points, &options).map_err(stage("triangulate"))?;
    let total_duration = start.elapsed().as_secs_f64();

    println!("Cost of triangulation: {}", triangulation.cost());
    println!("computational time: {} s", total_duration);

    if let Some(result) = &cli.result {
        io::write_result(result, &triangulation).map_err(stage("write result"))?;
    }

    if let Some(image) = &cli.output_image {
        // Image failures are reported without changing the exit status
        if let Err(error) = svg::write_image(image, &points, triangulation.triangles()) {
            log::warn!("{}", error);
            eprintln!("warning: {}", error);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are reported through this path too
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(failure) => {
            log::debug!("{:?}", failure);
            eprintln!("error: {}", failure);
            ExitCode::from(2)
        }
    }
}
