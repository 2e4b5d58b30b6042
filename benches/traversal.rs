//! Benchmarks for the traversal engines.
//!
//! Measures finish-time traversal cost over graph shapes that stress
//! different parts of the engine:
//! - Deep chains (maximum stack depth)
//! - Wide fanout (successor sequence churn)
//! - Strongly connected rings (every edge a skip)
//! - MapStore vs SlotStore backing

extern crate postwalk;

use criterion::{criterion_group, criterion_main, Criterion};
use postwalk::traverse::{finish_order, FinishTimeIter};
use postwalk::{DirectedGraph, NodeId};
use std::hint::black_box;

/// A single chain of `len` nodes: 0 -> 1 -> ... -> len-1.
fn chain(len: usize) -> DirectedGraph<()> {
    let mut graph = DirectedGraph::with_capacity(len);
    let ids: Vec<NodeId> = (0..len).map(|_| graph.add_node(())).collect();
    for pair in ids.windows(2) {
        graph.add_edge(pair[0], pair[1]).unwrap();
    }
    graph
}

/// A two-level tree: one root fanning out to `width` leaves.
fn fanout(width: usize) -> DirectedGraph<()> {
    let mut graph = DirectedGraph::with_capacity(width + 1);
    let root = graph.add_node(());
    for _ in 0..width {
        let leaf = graph.add_node(());
        graph.add_edge(root, leaf).unwrap();
    }
    graph
}

/// A ring with chords; strongly connected, every node degree 2.
fn ring_with_chords(len: usize) -> DirectedGraph<()> {
    let mut graph = DirectedGraph::with_capacity(len);
    let ids: Vec<NodeId> = (0..len).map(|_| graph.add_node(())).collect();
    for i in 0..len {
        graph.add_edge(ids[i], ids[(i + 1) % len]).unwrap();
        graph.add_edge(ids[i], ids[(i + 7) % len]).unwrap();
    }
    graph
}

fn bench_deep_chain(c: &mut Criterion) {
    let graph = chain(10_000);

    c.bench_function("finish_deep_chain_10k", |b| {
        b.iter(|| {
            let order: Vec<NodeId> = FinishTimeIter::with_slot_store(
                black_box(&graph),
                [NodeId::new(0)].into_iter(),
            )
            .collect();
            black_box(order)
        });
    });
}

fn bench_wide_fanout(c: &mut Criterion) {
    let graph = fanout(10_000);

    c.bench_function("finish_wide_fanout_10k", |b| {
        b.iter(|| {
            let order: Vec<NodeId> = FinishTimeIter::with_slot_store(
                black_box(&graph),
                [NodeId::new(0)].into_iter(),
            )
            .collect();
            black_box(order)
        });
    });
}

fn bench_cyclic_ring(c: &mut Criterion) {
    let graph = ring_with_chords(10_000);

    c.bench_function("finish_cyclic_ring_10k", |b| {
        b.iter(|| {
            let order: Vec<NodeId> = FinishTimeIter::with_slot_store(
                black_box(&graph),
                [NodeId::new(0)].into_iter(),
            )
            .collect();
            black_box(order)
        });
    });
}

fn bench_map_store_vs_slot_store(c: &mut Criterion) {
    let graph = chain(10_000);

    c.bench_function("finish_chain_10k_map_store", |b| {
        b.iter(|| {
            let order = finish_order(black_box(&graph), [NodeId::new(0)]);
            black_box(order)
        });
    });
}

fn bench_first_finish_only(c: &mut Criterion) {
    // Lazy pull: one finish event out of a 10k-node fanout.
    let graph = fanout(10_000);

    c.bench_function("finish_first_of_fanout_10k", |b| {
        b.iter(|| {
            let first = FinishTimeIter::with_slot_store(
                black_box(&graph),
                [NodeId::new(0)].into_iter(),
            )
            .next();
            black_box(first)
        });
    });
}

criterion_group!(
    benches,
    bench_deep_chain,
    bench_wide_fanout,
    bench_cyclic_ring,
    bench_map_store_vs_slot_store,
    bench_first_finish_only
);
criterion_main!(benches);
