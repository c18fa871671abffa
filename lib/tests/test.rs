use rand::{rngs::StdRng, SeedableRng};
use rglife_lib::{rules, Config, Error, Grid, State, World, GREEN, RED};

/// A 3×3 grid with the given center state and the first `greens` of its
/// eight neighbors set to green.
fn ring_grid(center: State, greens: usize) -> Grid {
    let ring = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 2),
        (2, 0),
        (2, 1),
        (2, 2),
    ];
    let mut rows = vec![vec![RED; 3]; 3];
    rows[1][1] = center;
    for &(x, y) in ring.iter().take(greens) {
        rows[x][y] = GREEN;
    }
    Grid::from_rows(rows).unwrap()
}

#[test]
fn state_flips() {
    assert_eq!(!RED, GREEN);
    assert_eq!(!GREEN, RED);
}

#[test]
fn neighbor_count() -> Result<(), Error> {
    let grid: Grid = "111\n111\n111".parse()?;
    // The cell itself is never counted.
    assert_eq!(grid.neighbor_count((1, 1), GREEN), 8);
    assert_eq!(grid.neighbor_count((0, 0), GREEN), 3);
    assert_eq!(grid.neighbor_count((2, 2), GREEN), 3);
    assert_eq!(grid.neighbor_count((0, 1), GREEN), 5);
    assert_eq!(grid.neighbor_count((1, 0), GREEN), 5);
    assert_eq!(grid.neighbor_count((1, 1), RED), 0);
    Ok(())
}

#[test]
fn green_rule() {
    for greens in 0..=8 {
        let grid = ring_grid(GREEN, greens);
        let expected = match greens {
            2 | 3 | 6 => GREEN,
            _ => RED,
        };
        assert_eq!(rules::green_rule(&grid, (1, 1)), expected);
    }
}

#[test]
fn red_rule() {
    for greens in 0..=8 {
        let grid = ring_grid(RED, greens);
        let expected = match greens {
            3 | 6 => GREEN,
            _ => RED,
        };
        assert_eq!(rules::red_rule(&grid, (1, 1)), expected);
    }
}

#[test]
fn next_state_chooses_rule_by_current_state() {
    // With 2 green neighbors a green cell survives but a red cell stays red.
    assert_eq!(rules::next_state(&ring_grid(GREEN, 2), (1, 1)), GREEN);
    assert_eq!(rules::next_state(&ring_grid(RED, 2), (1, 1)), RED);
}

#[test]
fn step_does_not_mutate_and_keeps_dimensions() -> Result<(), Error> {
    let grid: Grid = "10010\n01101\n10110".parse()?;
    let before = grid.clone();
    let next = grid.step();
    assert_eq!(grid, before);
    assert_eq!(next.height(), grid.height());
    assert_eq!(next.width(), grid.width());
    Ok(())
}

#[test]
fn all_red_grid_stays_all_red() -> Result<(), Error> {
    let grid: Grid = "000\n000\n000".parse()?;
    let next = grid.step();
    assert_eq!(next, grid);
    assert_eq!(next.step(), grid);
    Ok(())
}

#[test]
fn two_by_two_step() -> Result<(), Error> {
    // (0,0) is green with one green neighbor, so it dies; the red cells
    // see only 2 green neighbors each, so none is born.
    let grid: Grid = "10\n01".parse()?;
    assert_eq!(grid.step().to_string(), "00\n00\n");
    Ok(())
}

#[test]
fn play_counts_green_observations() -> Result<(), Error> {
    let start: Grid = "1001\n1111\n0100\n1010".parse()?;
    let mut world = World::new(start.clone());
    world.play(5, 0, 0);

    // Step the same grid independently and count the matches.
    let mut grid = start;
    let mut greens = 0;
    for _ in 0..5 {
        grid = grid.step();
        if grid.get((0, 0)) == Some(GREEN) {
            greens += 1;
        }
    }
    assert_eq!(world.green_count(), greens);
    assert_eq!(world.green_count(), 1);
    assert_eq!(world.grid(), &grid);
    assert_eq!(world.generations(), 5);
    assert_eq!(world.tracked(), (0, 0));
    Ok(())
}

#[test]
fn play_settles_into_still_life() -> Result<(), Error> {
    // This board reaches a 2×2 block after three generations.
    let mut world = World::new("1001\n1111\n0100\n1010".parse()?);
    world.play(5, 1, 2);
    assert_eq!(world.green_count(), 4);
    assert_eq!(world.grid().to_string(), "0000\n0011\n0011\n0000\n");
    Ok(())
}

#[test]
fn play_accumulates_over_calls() -> Result<(), Error> {
    let start: Grid = "1001\n1111\n0100\n1010".parse()?;
    let mut split = World::new(start.clone());
    let mut whole = World::new(start);
    split.play(2, 1, 2);
    split.play(3, 1, 2);
    whole.play(5, 1, 2);
    assert_eq!(split.green_count(), whole.green_count());
    assert_eq!(split.grid(), whole.grid());
    // The stored generation target is that of the last call.
    assert_eq!(split.generations(), 3);
    Ok(())
}

#[test]
fn tracked_cell_outside_grid_is_never_green() -> Result<(), Error> {
    let start: Grid = "111\n111\n111".parse()?;
    let mut world = World::new(start.clone());
    world.play(4, -1, 0);
    assert_eq!(world.green_count(), 0);

    let mut world = World::new(start);
    world.play(4, 3, 3);
    assert_eq!(world.green_count(), 0);
    Ok(())
}

#[test]
fn dimensions_are_validated() {
    assert_eq!(
        Config::new(0, 5).world().unwrap_err(),
        Error::HeightOutOfRange(0)
    );
    assert_eq!(
        Config::new(5, 1001).world().unwrap_err(),
        Error::WidthOutOfRange(1001)
    );
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        Grid::random(-1, 5, &mut rng).unwrap_err(),
        Error::HeightOutOfRange(-1)
    );
}

#[test]
fn literal_grids_are_validated() {
    assert_eq!(
        Grid::from_rows(vec![vec![RED, GREEN], vec![RED]]).unwrap_err(),
        Error::UnevenRow(1, 1, 2)
    );
    assert_eq!(
        Grid::from_rows(vec![vec![RED, State(7)]]).unwrap_err(),
        Error::InvalidState((0, 1), State(7))
    );
    assert_eq!(
        "10\n0a".parse::<Grid>().unwrap_err(),
        Error::UnexpectedChar('a')
    );
    assert_eq!(
        "17".parse::<Grid>().unwrap_err(),
        Error::InvalidState((0, 1), State(7))
    );
}

#[test]
fn seeded_worlds_are_deterministic() -> Result<(), Error> {
    let config = Config::new(8, 8).set_seed(42);
    let first = config.world()?;
    let second = config.world()?;
    assert_eq!(first.grid(), second.grid());

    let mut rng = StdRng::seed_from_u64(42);
    let explicit = Config::new(8, 8).world_with_rng(&mut rng)?;
    assert_eq!(explicit.grid(), first.grid());
    Ok(())
}

#[test]
fn random_grid_has_requested_shape() -> Result<(), Error> {
    let mut rng = StdRng::seed_from_u64(7);
    let grid = Grid::random(3, 5, &mut rng)?;
    assert_eq!(grid.height(), 3);
    assert_eq!(grid.width(), 5);
    for x in 0..3 {
        for y in 0..5 {
            let state = grid.get((x, y)).unwrap();
            assert!(state == RED || state == GREEN);
        }
    }
    assert_eq!(grid.get((3, 0)), None);
    assert_eq!(grid.get((0, 5)), None);
    Ok(())
}

#[test]
fn display_and_parse_agree() -> Result<(), Error> {
    let grid = Grid::from_rows(vec![vec![GREEN, RED], vec![RED, GREEN]])?;
    assert_eq!(grid.to_string(), "10\n01\n");
    assert_eq!("10\n01\n".parse::<Grid>()?, grid);
    assert_eq!("10\n01".parse::<Grid>()?, grid);
    Ok(())
}
