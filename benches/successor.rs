//! Benchmarks for successor generation and rollouts.
//!
//! Successor generation is the hot path of any tree search over game states.

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use pacman_core::{run_episode, Agent, DirectionalGhost, Direction, GameRng, GameState, Layout, RandomAgent, MAX_GHOSTS};

const MEDIUM: &str = "\
%%%%%%%%%%%%%%%%%%%%
%o...%........%....%
%.%%.%.%%%%%%.%.%%.%
%.%.......%%.......%
%.%.%%.%%  %%.%%.%.%
%......%G  G%......%
%.%.%%.%%%%%%.%%.%.%
%.%...............o%
%.%%.%.%%%%%%.%.%%.%
%....%...P....%....%
%%%%%%%%%%%%%%%%%%%%";

fn start() -> GameState {
    let layout: Layout = MEDIUM.parse().expect("benchmark layout parses");
    GameState::from_layout(Arc::new(layout), MAX_GHOSTS)
}

fn bench_pacman_successor(c: &mut Criterion) {
    let state = start();

    c.bench_function("pacman_successor", |b| {
        b.iter(|| {
            let next = black_box(&state).generate_successor(0, black_box(Direction::East));
            black_box(next)
        });
    });
}

fn bench_expand_all(c: &mut Criterion) {
    let state = start();

    c.bench_function("expand_all_agents", |b| {
        b.iter(|| {
            let mut children = Vec::new();
            for index in 0..state.get_num_agents() {
                for action in state.get_legal_actions(index).unwrap_or_default() {
                    if let Ok(child) = state.generate_successor(index, action) {
                        children.push(child);
                    }
                }
            }
            black_box(children)
        });
    });
}

fn bench_rollout(c: &mut Criterion) {
    let state = start();

    c.bench_function("rollout_200_moves", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(black_box(42));
            let mut agents: Vec<Box<dyn Agent>> = vec![
                Box::new(RandomAgent::new(0, rng.fork())),
                Box::new(DirectionalGhost::new(1, rng.fork())),
                Box::new(DirectionalGhost::new(2, rng.fork())),
            ];
            black_box(run_episode(&state, &mut agents, 200))
        });
    });
}

criterion_group!(benches, bench_pacman_successor, bench_expand_all, bench_rollout);
criterion_main!(benches);
