// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Size;
use understory_concept_display::{DisplayList, DisplayStyle};
use understory_concept_map::ConceptMap;
use understory_concept_tree::{CollapseState, ConceptNode, ConceptTree, NodeKey, NodePath};
use understory_tree_layout::{LayoutConfig, layout};

/// A complete tree with `fanout` children per node, `depth` levels below the root.
fn build_tree(fanout: usize, depth: usize) -> ConceptNode {
    fn grow(label: String, fanout: usize, depth: usize) -> ConceptNode {
        if depth == 0 {
            return ConceptNode::new(label);
        }
        ConceptNode::with_children(
            label.as_str(),
            (0..fanout).map(|i| grow(format!("{label}.{i}"), fanout, depth - 1)),
        )
    }
    grow("root".to_owned(), fanout, depth)
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_layout/layout");
    let config = LayoutConfig::default();

    // Generated maps rarely exceed four levels; the wide cases stress sibling stacking.
    for (fanout, depth) in [(4usize, 3usize), (4, 4), (8, 4), (16, 3)] {
        let root = build_tree(fanout, depth);
        let nodes = root.node_count();
        group.throughput(Throughput::Elements(nodes as u64));

        group.bench_with_input(
            BenchmarkId::new("expanded", nodes),
            &root,
            |b, root| {
                let collapsed = CollapseState::new();
                b.iter(|| black_box(layout(root, &collapsed, &config)));
            },
        );

        // Collapsing every first-level branch leaves only the root's children visible.
        let mut collapsed = CollapseState::new();
        for i in 0..fanout {
            collapsed.collapse(NodeKey::Path(NodePath::from_indices([i])));
        }
        group.bench_with_input(
            BenchmarkId::new("first_level_collapsed", nodes),
            &root,
            |b, root| {
                b.iter(|| black_box(layout(root, &collapsed, &config)));
            },
        );
    }

    group.finish();
}

fn bench_display_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_layout/display_list");
    let style = DisplayStyle::default();

    for (fanout, depth) in [(4usize, 4usize), (8, 4)] {
        let root = build_tree(fanout, depth);
        let result = layout(&root, &CollapseState::new(), &LayoutConfig::default());
        group.throughput(Throughput::Elements(result.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("build", result.len()),
            &result,
            |b, result| {
                b.iter(|| black_box(DisplayList::build(result, &style)));
            },
        );
    }

    group.finish();
}

fn bench_toggle_relayout(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree_layout/toggle_relayout");
    let tree = ConceptTree::new(build_tree(8, 4)).expect("generated tree is valid");
    let key = NodeKey::Path(NodePath::from_indices([0]));

    // A burst of toggles between frames costs one layout pass.
    for burst in [1usize, 16] {
        group.bench_with_input(BenchmarkId::new("burst", burst), &burst, |b, &burst| {
            b.iter_batched(
                || {
                    let mut map = ConceptMap::new(Size::new(1280.0, 720.0));
                    map.set_tree(tree.clone());
                    map
                },
                |mut map| {
                    for _ in 0..burst {
                        map.toggle(&key);
                    }
                    black_box(map.layout().map(|layout| layout.len()));
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout, bench_display_list, bench_toggle_relayout);
criterion_main!(benches);
