use criterion::{criterion_group, criterion_main, Criterion};

use astar_cube::cubie::CubieCube;
use astar_cube::heuristic::{CubieDistance, Heuristic, MisplacedCubies};
use astar_cube::moves::Move::*;
use astar_cube::scramble::scramble;
use astar_cube::solver::solve;

fn cc_apply_moves() {
    let cc = CubieCube::default();
    let _ = cc.apply_moves(&[R, U, R3, U3]);
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("CubieCube Moves");
    group.bench_function("apply_moves", |b| b.iter(cc_apply_moves));
    group.finish();
}

fn bench_heuristics(c: &mut Criterion) {
    let (cc, _) = scramble(20, 1);
    let mut group = c.benchmark_group("Heuristics");
    group.bench_function("cubie_distance", |b| b.iter(|| CubieDistance.estimate(&cc)));
    group.bench_function("misplaced_cubies", |b| b.iter(|| MisplacedCubies.estimate(&cc)));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let (cc, _) = scramble(5, 2024);
    c.bench_function("Solver", |b| b.iter(|| solve(&cc).unwrap()));
}

criterion_group!(benches, bench_solver, bench_moves, bench_heuristics);
criterion_main!(benches);
