mod args;

use args::Args;
use std::{error::Error, process};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let Args {
        mut world,
        generations,
        row,
        column,
        steps,
    } = Args::parse()?;

    println!(
        "Grid size: {} x {}",
        world.grid().height(),
        world.grid().width()
    );
    println!("Generation 0:");
    print!("{}", world.grid());

    if steps {
        for generation in 1..=generations {
            world.play(1, row, column);
            println!("Generation {}:", generation);
            print!("{}", world.grid());
        }
    } else {
        world.play(generations, row, column);
        println!("Generation {}:", generations);
        print!("{}", world.grid());
    }

    println!(
        "Cell ({}, {}) was green in {} of {} generations.",
        row,
        column,
        world.green_count(),
        generations
    );
    Ok(())
}
