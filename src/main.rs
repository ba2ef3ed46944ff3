use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::info;

use u_tsp::distance::{DistanceOracle, Metric};
use u_tsp::evaluation::total_distance;
use u_tsp::io::{read_cities_from_path, write_tour, write_tour_to_path};
use u_tsp::logging;
use u_tsp::models::{City, Tour};
use u_tsp::solver::{SolverConfig, SolverKind, TourSolver};

fn common_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("config")
            .long("config")
            .help("Solver configuration JSON file")
            .value_parser(value_parser!(PathBuf)),
    )
    .arg(
        Arg::new("seed")
            .long("seed")
            .help("Fixed random seed")
            .value_parser(value_parser!(u64)),
    )
    .arg(
        Arg::new("time-limit")
            .long("time-limit")
            .help("Wall-clock limit per solve, in seconds")
            .value_parser(value_parser!(f64)),
    )
}

fn cli() -> Command {
    Command::new("u-tsp")
        .about("Heuristic Euclidean TSP solvers")
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .global(true)
                .default_value("info")
                .help("off, error, warn, info, debug or trace"),
        )
        .subcommand(common_args(
            Command::new("solve")
                .about("Solves one input file")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .help("CSV file with an x,y header")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("solver")
                        .long("solver")
                        .help("random, greedy, local-search or genetic")
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the tour here instead of stdout")
                        .value_parser(value_parser!(PathBuf)),
                ),
        ))
        .subcommand(common_args(
            Command::new("batch")
                .about("Runs several solvers over several inputs, one output file per pair")
                .arg(
                    Arg::new("inputs")
                        .required(true)
                        .num_args(1..)
                        .help("CSV files; the i-th input produces <solver>_<i>.csv")
                        .value_parser(value_parser!(PathBuf)),
                )
                .arg(
                    Arg::new("solver")
                        .long("solver")
                        .action(ArgAction::Append)
                        .default_values(["genetic", "greedy"])
                        .value_parser(value_parser!(String)),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .default_value("sample")
                        .value_parser(value_parser!(PathBuf)),
                ),
        ))
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let level = matches
        .get_one::<String>("log-level")
        .map(String::as_str)
        .unwrap_or("info");
    logging::init_logger(logging::parse_level(level)?)?;

    match matches.subcommand() {
        Some(("solve", sub)) => solve(sub),
        Some(("batch", sub)) => batch(sub),
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

/// Base configuration from `--config`, overridden by `--seed` and `--time-limit`.
fn base_config(sub: &ArgMatches) -> Result<SolverConfig> {
    let mut config = match sub.get_one::<PathBuf>("config") {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            SolverConfig::from_json(&json)?
        }
        None => SolverConfig::default(),
    };
    if let Some(&seed) = sub.get_one::<u64>("seed") {
        config.seed = Some(seed);
    }
    if let Some(&secs) = sub.get_one::<f64>("time-limit") {
        config.time_limit_secs = Some(secs);
    }
    Ok(config)
}

fn solve(sub: &ArgMatches) -> Result<()> {
    let mut config = base_config(sub)?;
    if let Some(name) = sub.get_one::<String>("solver") {
        config.kind = name.parse::<SolverKind>()?;
    }
    let input = sub.get_one::<PathBuf>("input").context("missing input")?;
    let cities = read_cities_from_path(input)?;
    info!("input: {} cities={}", input.display(), cities.len());

    let solver = config.build()?;
    let tour = timed_solve(solver.as_ref(), &cities);

    match sub.get_one::<PathBuf>("output") {
        Some(path) => write_tour_to_path(path, &tour)?,
        None => write_tour(std::io::stdout().lock(), &tour)?,
    }
    Ok(())
}

fn batch(sub: &ArgMatches) -> Result<()> {
    let base = base_config(sub)?;
    let kinds = sub
        .get_many::<String>("solver")
        .context("missing solver")?
        .map(|name| name.parse::<SolverKind>())
        .collect::<u_tsp::Result<Vec<_>>>()?;
    let out_dir = sub.get_one::<PathBuf>("out-dir").context("missing out-dir")?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    for (i, input) in sub
        .get_many::<PathBuf>("inputs")
        .context("missing inputs")?
        .enumerate()
    {
        let cities = read_cities_from_path(input)?;
        info!("input {i}: {} cities={}", input.display(), cities.len());

        for &kind in &kinds {
            let config = SolverConfig { kind, ..base.clone() };
            let solver = config.build()?;
            let tour = timed_solve(solver.as_ref(), &cities);
            let path = output_path(out_dir, solver.name(), i);
            write_tour_to_path(&path, &tour)?;
            info!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn timed_solve(solver: &dyn TourSolver, cities: &[City]) -> Tour {
    let now = Instant::now();
    let tour = solver.solve(cities);
    let mut oracle = DistanceOracle::new(cities, Metric::Euclidean);
    info!(
        "solver={} n={} distance={:.4} time={:.2}s",
        solver.name(),
        tour.len(),
        total_distance(tour.as_slice(), &mut oracle),
        now.elapsed().as_secs_f32()
    );
    tour
}

fn output_path(out_dir: &Path, name: &str, index: usize) -> PathBuf {
    out_dir.join(format!("{name}_{index}.csv"))
}
