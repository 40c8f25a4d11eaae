//! Physics engine benchmarks (iai-callgrind - instruction counts).
//!
//! Prerequisites:
//!   cargo install iai-callgrind-runner
//!   sudo dnf install valgrind   # Fedora/WSL2
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench physics_iai

use std::hint::black_box;

use glam::Vec2;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use pixel_physics::physics::narrowphase::{circle_polygon, polygon_polygon};
use pixel_physics::physics::solver::{PENETRATION_ALLOWED, process_collisions};
use pixel_physics::{Body, CollisionGroup, CollisionManager, Shape};
use pixel_physics_bench::*;

// ---------------------------------------------------------------------------
// Narrowphase
// ---------------------------------------------------------------------------

#[library_benchmark]
fn narrowphase_circle_polygon_hit() {
    let a = Body::new_dynamic(Shape::circle(1.0).expect("circle"), Vec2::ZERO, 1.0);
    let b = Body::new_dynamic(
        Shape::rectangle(1.0, 1.0).expect("square"),
        Vec2::new(1.5, 0.0),
        1.0,
    );
    let mut group = CollisionGroup::new(0, 1);
    circle_polygon(black_box(&a), black_box(&b), &mut group);
    black_box(group);
}

#[library_benchmark]
fn narrowphase_polygon_polygon_hit() {
    let square = Shape::rectangle(1.0, 1.0).expect("square");
    let a = Body::new_dynamic(square.clone(), Vec2::ZERO, 1.0);
    let b = Body::new_dynamic(square, Vec2::new(1.5, 0.0), 1.0).with_orientation(0.3);
    let mut group = CollisionGroup::new(0, 1);
    polygon_polygon(black_box(&a), black_box(&b), &mut group);
    black_box(group);
}

#[library_benchmark]
fn narrowphase_detect_500() {
    let world = setup_mixed_world(black_box(500)).expect("mixed world");
    let mut manager = CollisionManager::new();
    black_box(manager.detect_collisions(world.bodies()).len());
}

library_benchmark_group!(
    name = narrowphase_group;
    benchmarks =
        narrowphase_circle_polygon_hit,
        narrowphase_polygon_polygon_hit,
        narrowphase_detect_500
);

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

#[library_benchmark]
fn solver_100_contacts() {
    let (mut bodies, mut groups) = setup_contacts(black_box(100)).expect("contact setup");
    process_collisions(&mut groups, &mut bodies, 10, PENETRATION_ALLOWED);
    black_box(&bodies);
}

library_benchmark_group!(
    name = solver_group;
    benchmarks = solver_100_contacts
);

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

#[library_benchmark]
fn pipeline_update_100() {
    let mut world = setup_scene(black_box(100)).expect("scene");
    world.update(1.0 / 60.0);
    black_box(&world);
}

#[library_benchmark]
fn rain_60frames() {
    let mut world = setup_rain_scene(black_box(0)).expect("rain scene");
    run_rain(&mut world, 60, 3, 0).expect("rain");
    black_box(&world);
}

library_benchmark_group!(
    name = pipeline_group;
    benchmarks = pipeline_update_100, rain_60frames
);

main!(
    library_benchmark_groups = narrowphase_group,
    solver_group,
    pipeline_group
);
