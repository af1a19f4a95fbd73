use astar_cube::heuristic::{CubieDistance, Heuristic, MisplacedCubies};
use astar_cube::scramble::{random_scramble, scramble_from_str, scramble_to_str};
use astar_cube::solver::{solve_with, SearchLimits, SolutionResult};
use astar_cube::{cubie::CubieCube, facelet::FaceCube, Move};
use astar_cube::{error::Error, facelet::Color};
use clap::{arg, command, ArgAction, Parser, Subcommand, ValueEnum};
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Attribute, Color as TermColor, SetBackgroundColor, Stylize},
};
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use spinners::Spinner;
use std::{
    io::{self, stdout},
    time::Instant,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    /// Log level: -v info, -vv debug, -vvv trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "solves the cube using A* search")]
    #[clap(group(
    clap::ArgGroup::new("state")
        .required(true)
        .args(&["scramble", "facelet"]),
    ))]
    Solve {
        #[arg(short, long)]
        scramble: Option<String>,

        #[arg(short, long)]
        facelet: Option<String>,

        #[arg(short, long)]
        max_expansions: Option<usize>,

        #[arg(short, long)]
        timeout: Option<f32>,

        #[arg(long, value_enum, default_value_t = HeuristicKind::Distance)]
        heuristic: HeuristicKind,

        #[arg(short, long)]
        preview: bool,
    },

    #[command(about = "generates scramble")]
    Scramble {
        #[arg(short, long, default_value_t = 20)]
        length: usize,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long)]
        preview: bool,
    },

    #[command(about = "scrambles, solves and replays every intermediate state")]
    Demo {
        #[arg(short, long, default_value_t = 5)]
        number: usize,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(long, value_enum, default_value_t = HeuristicKind::Distance)]
        heuristic: HeuristicKind,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum HeuristicKind {
    /// Per-cubie move distance
    Distance,
    /// Count of misplaced cubies
    Misplaced,
}

fn limits(max_expansions: Option<usize>, timeout: Option<f32>) -> Result<SearchLimits, Error> {
    let limits = SearchLimits {
        max_expansions,
        timeout: None,
    };
    match timeout {
        Some(secs) => limits.with_timeout_secs(secs),
        None => Ok(limits),
    }
}

fn run_search(
    state: &CubieCube,
    heuristic: HeuristicKind,
    limits: SearchLimits,
) -> Result<SolutionResult, Error> {
    fn run<H: Heuristic>(
        state: &CubieCube,
        h: H,
        limits: SearchLimits,
    ) -> Result<SolutionResult, Error> {
        let mut spinner = Spinner::new(spinners::Spinners::Dots, "Solving".to_owned());
        let result = solve_with(state, h, limits);
        spinner.stop_with_newline();
        result
    }
    match heuristic {
        HeuristicKind::Distance => run(state, CubieDistance, limits),
        HeuristicKind::Misplaced => run(state, MisplacedCubies, limits),
    }
}

fn solve(
    scramble: &Option<String>,
    facelet: &Option<String>,
    limits: SearchLimits,
    heuristic: HeuristicKind,
    preview: bool,
) -> Result<(), Error> {
    let state = if let Some(scramble) = scramble {
        CubieCube::from(&scramble_from_str(scramble)?)
    } else if let Some(facelet) = facelet {
        CubieCube::try_from(&FaceCube::try_from(facelet.as_str())?)?
    } else {
        return Ok(());
    };
    if preview {
        print_facelet(&FaceCube::from(&state))?;
    }

    let start = Instant::now();
    let result = run_search(&state, heuristic, limits)?;
    let end = Instant::now();

    println!("Solution: {}", scramble_to_str(&result.solution));
    println!("Move count: {}", result.solution.len());
    println!("Nodes expanded: {}", result.expanded);
    println!("States discovered: {}", result.discovered);
    println!("Solve time: {:?}", result.solve_time);
    println!("Total time: {:?}", end - start);

    Ok(())
}

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::U => TermColor::White,
        Color::R => TermColor::Red,
        Color::F => TermColor::Green,
        Color::D => TermColor::Yellow,
        Color::L => TermColor::Magenta,
        Color::B => TermColor::Blue,
    }
}

fn print_face(face: &[Color], offset: u16) -> Result<(), io::Error> {
    for i in 0..3 {
        let layer = format!(
            "{}  {}  {}  {}",
            SetBackgroundColor(color_to_termcolor(face[3 * i])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 1])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 2])),
            SetBackgroundColor(TermColor::Reset)
        );

        println!("{layer}");

        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }

    Ok(())
}

fn print_facelet(facelet: &FaceCube) -> Result<(), io::Error> {
    let stdout = stdout();

    println!();
    execute!(&stdout, MoveRight(6))?;
    print_face(&facelet.f[0..9], 6)?; // U
    execute!(&stdout, MoveLeft(6))?;
    print_face(&facelet.f[36..45], 0)?; // L
    execute!(&stdout, MoveRight(6), MoveUp(3))?;
    print_face(&facelet.f[18..27], 6)?; // F
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(12))?;
    print_face(&facelet.f[9..18], 12)?; // R
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(18))?;
    print_face(&facelet.f[45..54], 18)?; // B
    execute!(&stdout, MoveLeft(12))?;
    print_face(&facelet.f[27..36], 6)?; // D
    execute!(&stdout, MoveLeft(12))?;
    println!();

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(rand::random);
    info!("scramble seed {}", seed);
    StdRng::seed_from_u64(seed)
}

fn scramble(length: usize, seed: Option<u64>, preview: bool) -> Result<(), Error> {
    let (cc, moves) = random_scramble(length, &mut seeded_rng(seed));
    println!("Scramble: {}", scramble_to_str(&moves));
    if preview {
        print_facelet(&FaceCube::from(&cc))?;
    }
    Ok(())
}

/// Print every state along `moves`, starting from `cc`.
fn replay(cc: &CubieCube, moves: &[Move]) -> Result<CubieCube, Error> {
    let mut state = *cc;
    for (i, m) in moves.iter().enumerate() {
        state = state.apply_move(*m);
        println!(" - Rotation {}: {}", i + 1, m);
        print_facelet(&FaceCube::from(&state))?;
    }
    Ok(state)
}

fn demo(number: usize, seed: Option<u64>, heuristic: HeuristicKind) -> Result<(), Error> {
    let (cc, moves) = random_scramble(number, &mut seeded_rng(seed));
    println!("Initial random movements: {}", scramble_to_str(&moves));
    let scrambled = replay(&CubieCube::default(), &moves)?;
    debug_assert_eq!(scrambled, cc);

    let result = run_search(&cc, heuristic, SearchLimits::default())?;
    println!("A total of {} nodes were explored!", result.expanded);
    println!("Number of rotations for solving: {}", result.solution.len());
    let solved = replay(&cc, &result.solution)?;
    if solved.is_solved() {
        println!("The cube has been solved in {:?}", result.solve_time);
    }
    Ok(())
}

fn main() {
    let program = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match program.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .init();

    let result = match &program.command {
        Some(Commands::Solve {
            scramble,
            facelet,
            max_expansions,
            timeout,
            heuristic,
            preview,
        }) => limits(*max_expansions, *timeout)
            .and_then(|limits| solve(scramble, facelet, limits, *heuristic, *preview)),
        Some(Commands::Scramble {
            length,
            seed,
            preview,
        }) => scramble(*length, *seed, *preview),
        Some(Commands::Demo {
            number,
            seed,
            heuristic,
        }) => demo(*number, *seed, *heuristic),
        _ => Ok(()),
    };

    if let Err(error) = result {
        let styled = "Error:".with(TermColor::Red).attribute(Attribute::Bold);
        println!("{styled} {error}");
    }
}
