//! Parsing command-line arguments.

use clap::{command, value_parser, Arg, ArgAction};
use rglife_lib::{Config, Grid, World};
use std::{error::Error, fs, path::PathBuf};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) world: World,
    pub(crate) generations: usize,
    pub(crate) row: isize,
    pub(crate) column: isize,
    pub(crate) steps: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Box<dyn Error>> {
        let matches = command!()
            .long_about(
                "Simulating a Game-of-Life-like automaton of red and green cells\n\
                 \n\
                 The board starts either from a random grid of the given size or \n\
                 from a grid file, and is evolved for the requested number of \n\
                 generations. One cell is watched along the way; the program \n\
                 reports how many generations that cell was green.\n\
                 \n\
                 Grids are printed one row per line, with `0` for a red cell \n\
                 and `1` for a green cell. Grid files use the same format.\n",
            )
            .arg(
                Arg::new("HEIGHT")
                    .help("Number of rows of the random starting grid")
                    .index(1)
                    .value_parser(value_parser!(i64).range(1..))
                    .required_unless_present("GRID")
                    .conflicts_with("GRID"),
            )
            .arg(
                Arg::new("WIDTH")
                    .help("Number of columns of the random starting grid")
                    .index(2)
                    .value_parser(value_parser!(i64).range(1..))
                    .required_unless_present("GRID")
                    .conflicts_with("GRID"),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to run")
                    .short('n')
                    .long("generations")
                    .required(true)
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("CELL")
                    .help("Row and column of the tracked cell")
                    .long_help(
                        "Row and column of the tracked cell\n\
                         The coordinate is not validated: a cell outside the \
                         board is simply never observed green.\n",
                    )
                    .short('c')
                    .long("cell")
                    .required(true)
                    .num_args(2)
                    .value_names(["ROW", "COLUMN"])
                    .allow_hyphen_values(true)
                    .value_parser(value_parser!(i64)),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed for the random starting grid")
                    .short('s')
                    .long("seed")
                    .value_parser(value_parser!(u64))
                    .conflicts_with("GRID"),
            )
            .arg(
                Arg::new("GRID")
                    .help("File with an explicit starting grid")
                    .short('g')
                    .long("grid")
                    .value_name("FILE")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("STEPS")
                    .help("Prints the board after every generation")
                    .long("steps")
                    .action(ArgAction::SetTrue),
            )
            .get_matches();

        let world = if let Some(path) = matches.get_one::<PathBuf>("GRID") {
            let text = fs::read_to_string(path)?;
            World::new(text.parse::<Grid>()?)
        } else {
            let height = *matches.get_one::<i64>("HEIGHT").unwrap() as isize;
            let width = *matches.get_one::<i64>("WIDTH").unwrap() as isize;
            let seed = matches.get_one::<u64>("SEED").copied();
            Config::new(height, width).set_seed(seed).world()?
        };

        let generations = *matches.get_one::<u64>("GENERATIONS").unwrap() as usize;
        let mut cell = matches.get_many::<i64>("CELL").unwrap();
        let row = *cell.next().unwrap() as isize;
        let column = *cell.next().unwrap() as isize;
        let steps = matches.get_flag("STEPS");

        Ok(Self {
            world,
            generations,
            row,
            column,
            steps,
        })
    }
}
