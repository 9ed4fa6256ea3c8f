// Copyright 2026 the Masthead Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use masthead_breakpoint::Breakpoints;
use masthead_nav::coordinator::Nav;
use masthead_nav::types::{ExpandRequest, Role, Slot, SlotLookup, UnitId};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct El(u32);

struct Item(u32, u32);

impl SlotLookup<El> for Item {
    fn slotted(&self, slot: Slot) -> Vec<(El, Role)> {
        match slot {
            Slot::Link => vec![(El(self.0), Role::Trigger)],
            Slot::Menu => vec![(El(self.1), Role::Menu)],
            Slot::Nav | Slot::Cta => Vec::new(),
        }
    }
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

const DESKTOP: Breakpoints = Breakpoints::SM
    .union(Breakpoints::MD)
    .union(Breakpoints::LG);

fn nav_with_units(n: u32) -> (Nav<El>, Vec<UnitId>) {
    let mut nav = Nav::with_matches(DESKTOP);
    let ids = (0..n)
        .map(|i| nav.attach(&Item(i * 2 + 1, i * 2 + 2)))
        .collect();
    (nav, ids)
}

fn gen_request_script(ids: &[UnitId], len: usize, seed: u64) -> Vec<ExpandRequest> {
    let mut rng = Rng::new(seed);
    (0..len)
        .map(|_| ExpandRequest {
            expanded: rng.next_u64() & 1 == 0,
            toggle: ids[(rng.next_u64() as usize) % ids.len()],
        })
        .collect()
}

fn bench_expand_requests(c: &mut Criterion) {
    let mut group = c.benchmark_group("expand_requests");
    for &n in &[4u32, 16, 64] {
        // Attachment is deterministic, so a script built against one nav's
        // ids replays against any fresh nav of the same size.
        let (_, ids) = nav_with_units(n);
        let script = gen_request_script(&ids, 256, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(script.len() as u64));
        group.bench_function(format!("storm_n{}", n), |b| {
            b.iter_batched(
                || nav_with_units(n).0,
                |mut nav| {
                    let mut effects = 0usize;
                    for req in &script {
                        effects += nav.handle_expand_request(*req).len();
                    }
                    black_box(effects);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_close_over_mostly_closed(c: &mut Criterion) {
    let mut group = c.benchmark_group("close");
    for &n in &[16u32, 256] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("mostly_closed_n{}", n), |b| {
            b.iter_batched(
                || {
                    let (mut nav, ids) = nav_with_units(n);
                    let _ = nav.open(ids.len() / 2);
                    nav
                },
                |mut nav| {
                    // One unit open: close walks every unit but only one
                    // produces effects.
                    black_box(nav.close().len());
                    black_box(nav.close().len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_breakpoint_flapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("breakpoints");
    let compact = Breakpoints::SM.union(Breakpoints::MD);
    group.bench_function("flap_compact_full", |b| {
        b.iter_batched(
            || {
                let (mut nav, _) = nav_with_units(16);
                let _ = nav.open(3);
                nav
            },
            |mut nav| {
                for _ in 0..64 {
                    let _ = nav.breakpoint_changed(compact);
                    let _ = nav.breakpoint_changed(DESKTOP);
                }
                black_box(nav.state());
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_expand_requests,
    bench_close_over_mostly_closed,
    bench_breakpoint_flapping,
);
criterion_main!(benches);
