use hashgrid::grid::{key, Body, Config, Grid, KeyScheme};
use hashgrid::{GridError, InvalidInput, Vector};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

// Bounding radius used by every test entity unless stated otherwise
const SIZE: f32 = 30.0;

fn grid_with(cell_size: f32, bodies: &[Body]) -> Grid<Body> {
    let mut grid = Grid::new(cell_size).unwrap();
    for body in bodies {
        grid.register(*body).unwrap();
    }
    grid.rebuild();
    grid
}

fn ids_in(grid: &Grid<Body>, position: Vector) -> HashSet<u32> {
    grid.closest(position).unwrap().iter().copied().collect()
}

#[test]
fn test_instance() {
    let grid: Grid<Body> = Grid::new(666.0).unwrap();
    assert_eq!(grid.cell_size(), 666.0);
    assert!(grid.is_empty());
}

#[test]
fn test_invalid_cell_size() {
    let result: Result<Grid<Body>, _> = Grid::new(0.0);
    assert!(matches!(result, Err(GridError::InvalidCellSize { .. })));
}

#[test]
fn test_bound_key_matches_free_key() {
    let grid: Grid<Body> = Grid::new(1000.0).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..1000 {
        let x = rng.gen_range(-1_000_000.0..1_000_000.0);
        let y = rng.gen_range(-1_000_000.0..1_000_000.0);
        assert_eq!(grid.key(x, y), key(x, y, 1000.0));
    }
}

#[test]
fn test_key_unique() {
    let grid: Grid<Body> = Grid::new(1000.0).unwrap();
    let mut seen = HashSet::new();
    let mut i = -100_000;
    while i <= 100_000 {
        let mut j = -100_000;
        while j <= 100_000 {
            assert!(seen.insert(grid.key(i as f32, j as f32)));
            j += 1000;
        }
        i += 1000;
    }
}

#[test]
fn test_register_entity() {
    let mut grid: Grid<Body> = Grid::new(1000.0).unwrap();
    let id = grid.register(Body::new(101, 10.0, 10.0, 0.0)).unwrap();
    assert_eq!(id, 101);
    assert!(grid.get(101).is_some());
    grid.remove(101);
    assert!(grid.get(101).is_none());
}

#[test]
fn test_remove_entity() {
    let mut grid: Grid<Body> = Grid::new(100.0).unwrap();
    for id in 12345..=12349 {
        grid.register(Body::new(id, 10.0, 10.0, SIZE)).unwrap();
    }
    grid.remove(12349);
    assert!(grid.get(12349).is_none());
    assert_eq!(grid.len(), 4);
}

#[test]
fn test_update_populates_origin_cell() {
    let grid = grid_with(
        100.0,
        &[Body::new(1, 10.0, 10.0, SIZE), Body::new(2, 90.0, 10.0, SIZE)],
    );
    assert!(grid.snapshot().contains_key(0));
    assert!(!grid.bucket(0).is_empty());
}

#[test]
fn test_closest() {
    let grid = grid_with(
        100.0,
        &[
            Body::new(1, 10.0, 10.0, SIZE),
            Body::new(2, 90.0, 10.0, SIZE),
            Body::new(3, 250.0, 250.0, SIZE),
            Body::new(4, -10.0, 10.0, SIZE),
        ],
    );
    let ids = ids_in(&grid, Vector::new(10.0, 10.0));
    assert_eq!(ids, HashSet::from([1, 2, 4]));
}

#[test]
fn test_edges() {
    let bodies = [
        Body::new(1, 500.0, 500.0, SIZE),
        Body::new(2, 20.0, 500.0, SIZE),
        Body::new(3, 980.0, 500.0, SIZE),
        Body::new(4, 500.0, 20.0, SIZE),
        Body::new(5, 500.0, 980.0, SIZE),
        Body::new(6, 20.0, 980.0, SIZE),
        Body::new(7, 980.0, 980.0, SIZE),
        Body::new(8, 20.0, 20.0, SIZE),
        Body::new(9, 980.0, 20.0, SIZE),
    ];
    let grid = grid_with(1000.0, &bodies);

    // Everything near the origin cell is registered there
    let centre = ids_in(&grid, Vector::new(500.0, 500.0));
    assert_eq!(centre.len(), 9);

    let left = ids_in(&grid, Vector::new(-1000.0, 0.0));
    let right = ids_in(&grid, Vector::new(1000.0, 0.0));
    let top = ids_in(&grid, Vector::new(0.0, -1000.0));
    let bottom = ids_in(&grid, Vector::new(0.0, 1000.0));

    assert!(left.contains(&2) && left.contains(&6) && left.contains(&8));
    assert!(right.contains(&3) && right.contains(&7) && right.contains(&9));
    assert!(top.contains(&4) && top.contains(&8) && top.contains(&9));
    assert!(bottom.contains(&5) && bottom.contains(&6) && bottom.contains(&7));

    assert!(!left.contains(&1) && !right.contains(&1));
    assert!(!top.contains(&1) && !bottom.contains(&1));
}

#[test]
fn test_area_ids() {
    let grid = grid_with(
        200.0,
        &[
            Body::new(1, 500.0, 500.0, SIZE),
            Body::new(2, -233.0, 500.0, SIZE),
            Body::new(3, 2000.0, 2000.0, SIZE),
        ],
    );
    let ids = grid.area_ids(Vector::new(0.0, 0.0), 1000.0).unwrap();
    assert!(ids.contains(&1));
    assert!(ids.contains(&2));
    assert!(!ids.contains(&3));
}

#[test]
fn test_area_keys() {
    let grid: Grid<Body> = grid_with(1000.0, &[]);
    let cs = 1000.0;
    let expected = [
        key(-1000.0, -1000.0, cs),
        key(0.0, -1000.0, cs),
        key(1000.0, -1000.0, cs),
        key(-1000.0, 0.0, cs),
        key(0.0, 0.0, cs),
        key(1000.0, 0.0, cs),
        key(-1000.0, 1000.0, cs),
        key(0.0, 1000.0, cs),
        key(1000.0, 1000.0, cs),
    ];
    let keys = grid.area_keys(Vector::new(0.0, 0.0), 1000.0).unwrap();
    for k in expected.iter() {
        assert!(keys.contains(k));
    }
    assert_eq!(keys.len(), expected.len());
}

#[test]
fn test_area_ids_keeps_every_nearby_entity() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid: Grid<Body> = Grid::new(1000.0).unwrap();
    let player = Body::new(123_213_123, 0.0, 0.0, SIZE);
    grid.register(player).unwrap();
    for i in 0..500 {
        let x = rng.gen_range(-1000..0) as f32;
        let y = rng.gen_range(-1000..0) as f32;
        grid.register(Body::new(i, x, y, SIZE)).unwrap();
    }
    grid.rebuild();

    let ids: HashSet<u32> = grid
        .area_ids(player.position, 1000.0)
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(ids.len(), 501);
}

#[test]
fn test_footprint_round_trip() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut bodies = Vec::new();
    for id in 0..300 {
        let position = Vector::random_inside(&mut rng, -5000.0, 5000.0);
        let size = rng.gen_range(0.0..50.0);
        bodies.push(Body {
            id,
            position,
            size,
        });
    }
    let grid = grid_with(200.0, &bodies);
    let snapshot = grid.snapshot();

    for body in bodies.iter() {
        let (x, y) = (f64::from(body.position.x), f64::from(body.position.y));
        let pad = 2.0 * f64::from(body.size);
        let index = |v: f64| (v / 200.0).floor() as i32;
        let packed = |cx: f64, cy: f64| i64::from((index(cy) << 16) ^ index(cx));
        let mut footprint = vec![
            packed(x - pad, y - pad),
            packed(x + pad, y - pad),
            packed(x - pad, y + pad),
            packed(x + pad, y + pad),
        ];
        footprint.sort_unstable();
        footprint.dedup();
        assert_eq!(grid.footprint(body).as_slice(), footprint.as_slice());
        for cell in footprint.iter() {
            let bucket = snapshot.bucket(*cell);
            assert_eq!(bucket.iter().filter(|&&id| id == body.id).count(), 1);
        }
        for cell in snapshot.keys() {
            if !footprint.contains(&cell) {
                assert!(!snapshot.bucket(cell).contains(&body.id));
            }
        }
    }
}

#[test]
fn test_invalid_input_touches_nothing() {
    let grid = grid_with(100.0, &[Body::new(1, 10.0, 10.0, SIZE)]);
    let missing_position = GridError::InvalidInput(InvalidInput::MissingPosition);
    assert_eq!(grid.closest(None), Err(missing_position));
    assert_eq!(grid.area_keys(None, 10.0), Err(missing_position));
    assert_eq!(grid.area_ids(None, 10.0), Err(missing_position));
    assert!(grid.area_keys(Vector::ZERO, 0.0).unwrap_err().is_invalid_input());
    assert!(grid.area_ids(Vector::ZERO, 0.0).unwrap_err().is_invalid_input());
}

#[test]
fn test_wide_keys_separate_far_cells() {
    // Under the packed scheme cell rows 0 and 65536 share keys
    let far = 65536.0 * 10.0 + 5.0;
    assert_eq!(key(5.0, 5.0, 10.0), key(5.0, far, 10.0));

    let bodies = [Body::new(1, 5.0, 5.0, 1.0), Body::new(2, 5.0, far, 1.0)];
    let packed = grid_with(10.0, &bodies);
    assert_eq!(ids_in(&packed, Vector::new(5.0, 5.0)).len(), 2);

    let mut wide: Grid<Body> = Grid::new_with_config(Config {
        cell_size: 10.0,
        key_scheme: KeyScheme::Wide,
        ..Config::default()
    })
    .unwrap();
    for body in bodies.iter() {
        wide.register(*body).unwrap();
    }
    wide.rebuild();
    assert_eq!(ids_in(&wide, Vector::new(5.0, 5.0)), HashSet::from([1]));
    assert_eq!(ids_in(&wide, Vector::new(5.0, far)), HashSet::from([2]));
}

#[test]
fn test_tick_loop() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut grid: Grid<Body> = Grid::new(200.0).unwrap();
    for id in 0..200 {
        let position = Vector::random_inside(&mut rng, 0.0, 2000.0);
        grid.register(Body {
            id,
            position,
            size: 10.0,
        })
        .unwrap();
    }

    for _ in 0..10 {
        grid.rebuild();
        for id in 0..200 {
            let position = grid.get(id).unwrap().position;
            // Every entity sees itself in its own area of interest
            let ids = grid.area_ids(position, 100.0).unwrap();
            assert!(ids.contains(&id));
        }
        for id in 0..200 {
            let dx = rng.gen_range(-15.0..15.0);
            let dy = rng.gen_range(-15.0..15.0);
            grid.get_mut(id).unwrap().translate(dx, dy);
        }
    }
}
