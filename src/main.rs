//! Benchmark runner: one subcommand per program.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use parlab::config::{
    DEFAULT_SEED, DistanceConfig, MatrixBenchConfig, RotationConfig, parse_size,
};
use parlab::harness::{TimingStats, parse_positive, prompt_positive, run_trials};
use parlab::points::random_points;
use parlab::{
    Angles, Matrix, Rotation, Schedule, distances, distances_parallel, fill_parallel,
    fill_random, rotate, rotate_parallel, thread_count, transpose, transpose_parallel,
};
use std::io;
use std::num::NonZeroUsize;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "parlab")]
#[command(about = "Sequential vs multi-threaded matrix and 3D point benchmarks", long_about = None)]
struct Cli {
    /// Seed for every randomly generated input
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Log more (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Transpose random matrices and time it
    Transpose {
        #[command(flatten)]
        matrix: MatrixArgs,
    },

    /// Fill matrices with random values in [0, 100) and time it
    Fill {
        #[command(flatten)]
        matrix: MatrixArgs,

        /// Print the matrix written by the last trial of every size
        #[arg(long)]
        print: bool,
    },

    /// Rotate a random point set about X, Y and Z and time it
    Rotate {
        /// Worker threads (prompted for when omitted)
        #[arg(short, long, value_parser = parse_count)]
        threads: Option<usize>,

        /// Number of points (prompted for when omitted)
        #[arg(short, long, value_parser = parse_count)]
        points: Option<usize>,

        /// Number of timed iterations (prompted for when omitted)
        #[arg(short, long, value_parser = parse_count)]
        iterations: Option<usize>,

        /// Rotation about X, in degrees
        #[arg(long, default_value_t = 30.0, allow_hyphen_values = true)]
        angle_x: f64,

        /// Rotation about Y, in degrees
        #[arg(long, default_value_t = 45.0, allow_hyphen_values = true)]
        angle_y: f64,

        /// Rotation about Z, in degrees
        #[arg(long, default_value_t = 60.0, allow_hyphen_values = true)]
        angle_z: f64,
    },

    /// Compute the distance from every point to a camera at the origin
    Distance {
        /// Worker threads (prompted for when omitted)
        #[arg(short, long, value_parser = parse_count)]
        threads: Option<usize>,

        /// Number of points
        #[arg(short, long, value_parser = parse_count, default_value_t = 1_000_000)]
        points: usize,

        /// Number of timed runs
        #[arg(short, long, value_parser = parse_count, default_value_t = 10)]
        runs: usize,
    },

    /// Run every transpose and fill mode and print a comparison table
    Summary {
        /// Worker threads for the parallel modes (prompted for when omitted)
        #[arg(short, long, value_parser = parse_count)]
        threads: Option<usize>,

        /// Matrix size as ROWSxCOLS or N; repeatable
        #[arg(short, long = "size", value_parser = parse_size)]
        sizes: Vec<(usize, usize)>,

        /// Timed trials per mode and size
        #[arg(long, value_parser = parse_count, default_value_t = 3)]
        trials: usize,
    },
}

#[derive(clap::Args)]
struct MatrixArgs {
    /// How the loop is run
    #[arg(short, long, value_enum, default_value_t = Mode::Sequential)]
    mode: Mode,

    /// Worker threads for the parallel modes (prompted for when omitted)
    #[arg(short, long, value_parser = parse_count)]
    threads: Option<usize>,

    /// Matrix size as ROWSxCOLS or N; repeatable. Defaults to 100, 500, 1000, 2000.
    #[arg(short, long = "size", value_parser = parse_size)]
    sizes: Vec<(usize, usize)>,

    /// Timed trials per size
    #[arg(long, value_parser = parse_count, default_value_t = 5)]
    trials: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Single thread
    Sequential,
    /// Rows dealt round-robin across threads
    Strided,
    /// Flattened rows*cols loop cut into one chunk per thread
    Static,
}

impl Mode {
    fn schedule(self) -> Option<Schedule> {
        match self {
            Mode::Sequential => None,
            Mode::Strided => Some(Schedule::Strided),
            Mode::Static => Some(Schedule::Static),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kernel {
    Transpose,
    Fill,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Transpose { matrix } => run_matrix(Kernel::Transpose, matrix, cli.seed, false),
        Command::Fill { matrix, print } => run_matrix(Kernel::Fill, matrix, cli.seed, print),
        Command::Rotate {
            threads,
            points,
            iterations,
            angle_x,
            angle_y,
            angle_z,
        } => {
            let config = RotationConfig::default()
                .with_angles(Angles::new(angle_x, angle_y, angle_z))
                .with_seed(cli.seed);
            run_rotate(threads, points, iterations, &config)
        }
        Command::Distance {
            threads,
            points,
            runs,
        } => {
            let config = DistanceConfig::default()
                .with_points(points)
                .with_runs(runs)
                .with_seed(cli.seed);
            run_distance(threads, &config)
        }
        Command::Summary {
            threads,
            sizes,
            trials,
        } => {
            let config = MatrixBenchConfig::default()
                .with_sizes(sizes)
                .with_trials(trials)
                .with_seed(cli.seed);
            run_summary(threads, &config)
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn parse_count(s: &str) -> std::result::Result<usize, String> {
    parse_positive(s).map_err(|e| e.to_string())
}

/// Use `value` if it was given on the command line, otherwise ask for it.
fn count_or_prompt(value: Option<usize>, message: &str) -> Result<usize> {
    if let Some(v) = value {
        return Ok(v);
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    prompt_positive(&mut input, &mut output, message).context("reading from stdin")
}

fn threads_or_prompt(value: Option<usize>, message: &str) -> Result<NonZeroUsize> {
    Ok(thread_count(count_or_prompt(value, message)?)?)
}

fn reduce(samples: &[Duration]) -> Result<TimingStats> {
    TimingStats::from_samples(samples).context("no trials were run")
}

// ============================================================
// Transpose / fill
// ============================================================

fn run_matrix(kernel: Kernel, args: MatrixArgs, seed: u64, print: bool) -> Result<()> {
    let config = MatrixBenchConfig::default()
        .with_sizes(args.sizes)
        .with_trials(args.trials)
        .with_seed(seed);

    let threads = match args.mode {
        Mode::Sequential => None,
        _ => Some(threads_or_prompt(args.threads, "Enter the number of threads: ")?),
    };

    for &(rows, cols) in &config.sizes {
        info!(?kernel, mode = ?args.mode, rows, cols, trials = config.trials, "benchmarking");

        let (stats, last) = bench_matrix(kernel, rows, cols, args.mode, threads, &config)?;

        println!("Matrix size: {}x{}", rows, cols);
        if let Some(t) = threads {
            println!("Number of threads: {}", t);
        }
        print_stats(&stats);
        println!();

        if print {
            println!("Generated matrix:");
            print_matrix(&last);
            println!();
        }
    }

    Ok(())
}

/// Time `kernel` on a rows × cols matrix. Returns the timings and the
/// matrix the last trial wrote.
fn bench_matrix(
    kernel: Kernel,
    rows: usize,
    cols: usize,
    mode: Mode,
    threads: Option<NonZeroUsize>,
    config: &MatrixBenchConfig,
) -> Result<(TimingStats, Matrix)> {
    let schedule = match (mode.schedule(), threads) {
        (Some(schedule), Some(threads)) => Some((schedule, threads)),
        _ => None,
    };

    let samples;
    let out;

    match kernel {
        Kernel::Transpose => {
            let src = Matrix::random(rows, cols, config.seed);
            let mut dst = Matrix::zeros(cols, rows);

            samples = run_trials(
                config.trials,
                |_| (),
                |_| match schedule {
                    None => {
                        transpose(src.as_slice(), dst.as_mut_slice(), rows, cols);
                        Ok(())
                    }
                    Some((schedule, threads)) => transpose_parallel(
                        src.as_slice(),
                        dst.as_mut_slice(),
                        rows,
                        cols,
                        threads,
                        schedule,
                    ),
                },
            )?;
            out = dst;
        }
        Kernel::Fill => {
            let mut m = Matrix::zeros(rows, cols);

            samples = run_trials(
                config.trials,
                |trial| config.trial_seed(trial),
                |seed| match schedule {
                    None => {
                        fill_random(m.as_mut_slice(), rows, cols, *seed);
                        Ok(())
                    }
                    Some((schedule, threads)) => {
                        fill_parallel(m.as_mut_slice(), rows, cols, *seed, threads, schedule)
                    }
                },
            )?;
            out = m;
        }
    }

    Ok((reduce(&samples)?, out))
}

fn print_stats(stats: &TimingStats) {
    println!("Min time: {:.6} seconds", stats.min_secs());
    println!("Max time: {:.6} seconds", stats.max_secs());
    println!("Avg time: {:.6} seconds", stats.mean_secs());
}

fn print_matrix(m: &Matrix) {
    for row in m.row_iter() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        println!("{}", line.join(" "));
    }
}

// ============================================================
// Rotation
// ============================================================

fn run_rotate(
    threads: Option<usize>,
    points: Option<usize>,
    iterations: Option<usize>,
    config: &RotationConfig,
) -> Result<()> {
    let threads = threads_or_prompt(threads, "Enter the number of threads: ")?;
    println!("Using {} threads", threads);

    let count = count_or_prompt(points, "Enter the number of points: ")?;
    let original = random_points(count, config.coord_range.clone(), config.seed);
    println!(
        "Generated {} random points in [{}, {}).",
        count, config.coord_range.start, config.coord_range.end
    );

    let iterations = count_or_prompt(iterations, "Enter the number of iterations: ")?;
    println!("Running {} rotation iterations...", iterations);

    let rotation = Rotation::from_degrees(config.angles);
    info!(points = count, iterations, angles = ?config.angles, "benchmarking rotation");

    // Each iteration rotates a fresh copy so the original set stays put.
    let samples = run_trials(
        iterations,
        |_| original.clone(),
        |points| {
            if threads.get() == 1 {
                rotate(points, &rotation);
                Ok(())
            } else {
                rotate_parallel(points, &rotation, threads)
            }
        },
    )?;

    for (i, sample) in samples.iter().enumerate() {
        println!("Iteration {}: {:.6} seconds", i + 1, sample.as_secs_f64());
    }

    let stats = reduce(&samples)?;
    println!("\nRotation timing statistics:");
    println!("Minimum time: {:.6} seconds", stats.min_secs());
    println!("Maximum time: {:.6} seconds", stats.max_secs());
    println!("Average time: {:.6} seconds", stats.mean_secs());

    Ok(())
}

// ============================================================
// Distance
// ============================================================

fn run_distance(threads: Option<usize>, config: &DistanceConfig) -> Result<()> {
    let threads = threads_or_prompt(threads, "Enter the number of threads to use: ")?;

    let points = random_points(config.points, config.coord_range.clone(), config.seed);
    let mut out = vec![0.0; points.len()];
    info!(points = points.len(), runs = config.runs, "benchmarking distances");

    let samples = run_trials(
        config.runs,
        |_| (),
        |_| {
            if threads.get() == 1 {
                distances(&points, &config.camera, &mut out);
                Ok(())
            } else {
                distances_parallel(&points, &config.camera, &mut out, threads)
            }
        },
    )?;

    for (i, sample) in samples.iter().enumerate() {
        println!("Run {} completed in {:.6} seconds.", i + 1, sample.as_secs_f64());
    }

    let stats = reduce(&samples)?;
    println!("\nAnalysis:");
    println!("Number of threads used: {}", threads);
    println!("Minimum execution time: {:.6} seconds", stats.min_secs());
    println!("Maximum execution time: {:.6} seconds", stats.max_secs());
    println!("Average execution time: {:.6} seconds", stats.mean_secs());

    Ok(())
}

// ============================================================
// Summary table
// ============================================================

const METHODS: [(&str, Kernel, Mode); 6] = [
    ("Transpose seq", Kernel::Transpose, Mode::Sequential),
    ("Transpose strided", Kernel::Transpose, Mode::Strided),
    ("Transpose static", Kernel::Transpose, Mode::Static),
    ("Fill seq", Kernel::Fill, Mode::Sequential),
    ("Fill strided", Kernel::Fill, Mode::Strided),
    ("Fill static", Kernel::Fill, Mode::Static),
];

fn run_summary(threads: Option<usize>, config: &MatrixBenchConfig) -> Result<()> {
    let threads = threads_or_prompt(threads, "Enter the number of threads: ")?;

    println!("=== Transpose / Fill Benchmark ===\n");
    println!("Threads: {}, trials: {}\n", threads, config.trials);

    // avg_ms[method][size]
    let mut avg_ms = vec![Vec::with_capacity(config.sizes.len()); METHODS.len()];

    for &(rows, cols) in &config.sizes {
        println!("Matrix: {}×{}", rows, cols);
        println!("{}", "-".repeat(50));

        for (i, &(name, kernel, mode)) in METHODS.iter().enumerate() {
            let (stats, _) = bench_matrix(kernel, rows, cols, mode, Some(threads), config)?;
            let ms = stats.mean_secs() * 1000.0;
            println!(
                "{}. {:18} {:10.3} ms  (min {:.3}, max {:.3})",
                i + 1,
                name,
                ms,
                stats.min_secs() * 1000.0,
                stats.max_secs() * 1000.0
            );
            avg_ms[i].push(ms);
        }
        println!();
    }

    print_summary_table(&config.sizes, &avg_ms);
    Ok(())
}

fn print_summary_table(sizes: &[(usize, usize)], avg_ms: &[Vec<f64>]) {
    let width = 22 + 16 * sizes.len() + 12;

    println!("\n{}", "=".repeat(width));
    println!("SUMMARY");
    println!("{}", "=".repeat(width));

    print!("\n{:<22}", "Method");
    for (rows, cols) in sizes {
        print!("{:>16}", format!("{}×{}", rows, cols));
    }
    println!("{:>12}", "Speedup");
    println!("{}", "-".repeat(width));

    for (i, &(name, kernel, _)) in METHODS.iter().enumerate() {
        let baseline = METHODS
            .iter()
            .position(|&(_, k, m)| k == kernel && m == Mode::Sequential)
            .unwrap_or(i);

        print!("{:<22}", name);
        let mut speedups = Vec::with_capacity(sizes.len());
        for (s, ms) in avg_ms[i].iter().enumerate() {
            print!("{:>13.3} ms", ms);
            if *ms > 0.0 {
                speedups.push(avg_ms[baseline][s] / ms);
            }
        }
        let avg_speedup = if speedups.is_empty() {
            1.0
        } else {
            speedups.iter().sum::<f64>() / speedups.len() as f64
        };
        println!("{:>11.2}×", avg_speedup);
    }

    println!("{}", "=".repeat(width));
    println!("\nTimes are the mean of all trials.");
    println!("Speedup relative to the sequential version of the same kernel. Higher is better.\n");
}
