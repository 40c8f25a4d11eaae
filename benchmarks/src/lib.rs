//! Shared setup helpers for pixel-physics benchmarks.
//!
//! ## Running
//!
//! Wall-clock time (criterion):
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics
//!
//! iai-callgrind (instruction counts, requires valgrind):
//!   cargo install iai-callgrind-runner
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics_iai
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench physics -- narrowphase

use glam::Vec2;
use pixel_physics::{Body, CollisionGroup, Shape, World, WorldConfig};

// ---------------------------------------------------------------------------
// Basic scenes
// ---------------------------------------------------------------------------

fn grid_position(i: usize, cols: usize, spacing: f32) -> Vec2 {
    Vec2::new((i % cols) as f32 * spacing, (i / cols) as f32 * spacing)
}

fn columns(n: usize) -> usize {
    ((n as f32).sqrt().ceil() as usize).max(1)
}

/// `n` dynamic unit circles in a grid so neighbours overlap.
pub fn setup_circle_world(n: usize) -> anyhow::Result<World> {
    let mut world = World::default();
    let cols = columns(n);
    for i in 0..n {
        world.add_body(Body::new_dynamic(
            Shape::circle(1.0)?,
            grid_position(i, cols, 1.5),
            1.0,
        ));
    }
    Ok(world)
}

/// Alternating dynamic circles and static boxes in an overlapping grid.
pub fn setup_mixed_world(n: usize) -> anyhow::Result<World> {
    let mut world = World::default();
    let cols = columns(n);
    for i in 0..n {
        let pos = grid_position(i, cols, 1.5);
        if i % 2 == 0 {
            world.add_body(Body::new_dynamic(Shape::circle(1.0)?, pos, 1.0));
        } else {
            world.add_body(Body::new_static(Shape::rectangle(0.5, 0.5)?, pos));
        }
    }
    Ok(world)
}

/// Bodies spread far apart (no overlaps).
pub fn setup_sparse_world(n: usize) -> anyhow::Result<World> {
    let mut world = World::default();
    let cols = columns(n);
    for i in 0..n {
        world.add_body(Body::new_dynamic(
            Shape::circle(0.5)?,
            grid_position(i, cols, 10.0),
            1.0,
        ));
    }
    Ok(world)
}

/// Static ground with `n` dynamic circles and boxes stacked in columns above it.
pub fn setup_scene(n: usize) -> anyhow::Result<World> {
    let mut world = World::new(WorldConfig::default());
    world.add_body(Body::new_static(
        Shape::rectangle(100.0, 0.5)?,
        Vec2::new(0.0, 0.5),
    ));

    let cols = columns(n);
    for i in 0..n {
        let x = (i % cols) as f32 * 2.0 - cols as f32;
        let y = -1.0 - (i / cols) as f32 * 1.5;
        let pos = Vec2::new(x, y);
        let body = if i % 2 == 0 {
            Body::new_dynamic(Shape::circle(0.5)?, pos, 1.0)
        } else {
            Body::new_dynamic(Shape::rectangle(0.4, 0.4)?, pos, 1.0)
        };
        world.add_body(body);
    }
    Ok(world)
}

// ---------------------------------------------------------------------------
// Solver setup
// ---------------------------------------------------------------------------

/// A column of boxes resting on a ground box, with one collision group per
/// touching pair.
pub fn setup_contacts(n: usize) -> anyhow::Result<(Vec<Body>, Vec<CollisionGroup>)> {
    let mut bodies = Vec::with_capacity(n + 1);
    bodies.push(Body::new_static(
        Shape::rectangle(50.0, 0.5)?,
        Vec2::new(0.0, 0.5),
    ));
    for i in 0..n {
        bodies.push(
            Body::new_dynamic(
                Shape::rectangle(0.5, 0.5)?,
                Vec2::new(0.0, -0.5 - i as f32),
                1.0,
            )
            .with_velocity(Vec2::new(0.0, 1.0)),
        );
    }

    let groups = (0..n)
        .map(|i| {
            let mut group = CollisionGroup::new(i, i + 1);
            let contact_y = -(i as f32);
            group.normal = Vec2::NEG_Y;
            group.penetration = 0.01;
            group.contacts = vec![Vec2::new(-0.5, contact_y), Vec2::new(0.5, contact_y)];
            group
        })
        .collect();

    Ok((bodies, groups))
}

// ---------------------------------------------------------------------------
// Rain scenario (circles dropping onto a static circle)
// ---------------------------------------------------------------------------

const SPAWN_WIDTH: f32 = 16.0;
const SPAWN_HEIGHT: f32 = -15.0;

/// Spawn a single falling body at a deterministic position.
pub fn spawn_object(world: &mut World, index: usize) -> anyhow::Result<()> {
    let x = (((index * 73 + 17) % 100) as f32 / 100.0 - 0.5) * SPAWN_WIDTH;
    let y = SPAWN_HEIGHT - (index % 5) as f32 * 0.6;
    let shape = if index % 4 == 3 {
        Shape::rectangle(0.4, 0.4)?
    } else {
        Shape::circle(0.4)?
    };
    world.add_body(Body::new_dynamic(shape, Vec2::new(x, y), 1.0).with_shape_inertia());
    Ok(())
}

/// Large static circle plus `initial` bodies already falling.
pub fn setup_rain_scene(initial: usize) -> anyhow::Result<World> {
    let mut world = World::default();
    world.add_body(Body::new_static(Shape::circle(6.0)?, Vec2::new(0.0, 5.0)));
    for i in 0..initial {
        spawn_object(&mut world, i)?;
    }
    Ok(world)
}

/// Run `frames` frames, spawning `spawn_per_frame` objects before each step.
pub fn run_rain(
    world: &mut World,
    frames: usize,
    spawn_per_frame: usize,
    start_index: usize,
) -> anyhow::Result<()> {
    let mut index = start_index;
    for _ in 0..frames {
        for _ in 0..spawn_per_frame {
            spawn_object(world, index)?;
            index += 1;
        }
        world.update(1.0 / 60.0);
    }
    Ok(())
}
