use clap::Parser;
use rush_hour_solver::solver::{solve, Solution, Strategy};
use rush_hour_solver::utils::board_from_map_file;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy to run
    #[clap(short, long, value_enum, default_value_t = Strategy::Ucs)]
    algorithm: Strategy,

    /// Maximum path length in states (BFS defaults to 25, the others are unbounded)
    #[clap(short, long)]
    depth: Option<usize>,

    /// Print every solution found instead of just the first
    #[clap(long)]
    all: bool,

    /// Print each board along the first solution
    #[clap(long)]
    boards: bool,

    /// Log solver progress at debug level
    #[clap(short, long)]
    verbose: bool,

    /// Path to the map file (one `<id><x><y><H|V>` vehicle per line)
    map_file: PathBuf,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "rush_hour_solver=debug"
    } else {
        "rush_hour_solver=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_solution(index: usize, solution: &Solution) {
    let steps: Vec<String> = solution.moves().iter().map(|m| m.to_string()).collect();
    println!(
        "Solution {} ({} moves, total cost {}):",
        index + 1,
        solution.steps(),
        solution.cost
    );
    if steps.is_empty() {
        println!("  Already solved, no moves needed.");
    } else {
        println!("  {}", steps.join(" → "));
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let board = match board_from_map_file(&args.map_file) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("Failed to load map {}: {}", args.map_file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    println!("Loaded map from {}\n", args.map_file.display());
    println!("Initial board state:\n{}\n", board);

    let result = solve(args.algorithm, &board, args.depth);
    println!(
        "{}: found {} solutions, visited {} states (generated {}).\n",
        result.strategy,
        result.solutions.len(),
        result.visited.len(),
        result.generated
    );

    let Some(first) = result.first() else {
        println!("No solution found.");
        return ExitCode::SUCCESS;
    };
    if args.all {
        for (i, solution) in result.solutions.iter().enumerate() {
            print_solution(i, solution);
        }
    } else {
        print_solution(0, first);
    }

    if args.boards {
        for (step, state) in first.path.iter().enumerate() {
            println!("\nStep {}:\n{}", step, state);
        }
    }
    ExitCode::SUCCESS
}
