use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use morphgraph::{EdgeAttrs, Graph, NodeAttrs, NodeIndex, find_matches};

/// Complete digraph (no self-loops) over `n` unlabeled nodes.
fn dense_target(n: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..n {
        g.add_node(NodeAttrs::new(format!("n{i}")));
    }
    for i in 0..n {
        for j in 0..n {
            if i != j {
                g.add_edge(NodeIndex::new(i), NodeIndex::new(j), EdgeAttrs::unlabeled());
            }
        }
    }
    g
}

fn path_pattern(len: usize) -> Graph {
    let mut g = Graph::new();
    for i in 0..len {
        g.add_node(NodeAttrs::new(format!("p{i}")));
    }
    for i in 1..len {
        g.add_edge(
            NodeIndex::new(i - 1),
            NodeIndex::new(i),
            EdgeAttrs::unlabeled(),
        );
    }
    g
}

fn star_pattern(children: usize) -> Graph {
    let mut g = Graph::new();
    g.add_node(NodeAttrs::new("hub"));
    for i in 0..children {
        let child = g.add_node(NodeAttrs::new(format!("c{i}")));
        g.add_edge(NodeIndex::new(0), child, EdgeAttrs::unlabeled());
    }
    g
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_matches");
    group.sample_size(10);

    let target = dense_target(20);

    for len in [1, 2, 3] {
        group.bench_with_input(BenchmarkId::new("path", len), &len, |b, &len| {
            let pattern = path_pattern(len);
            b.iter(|| black_box(find_matches(black_box(&pattern), black_box(&target))));
        });
    }

    for children in [2, 3] {
        group.bench_with_input(
            BenchmarkId::new("star", children),
            &children,
            |b, &children| {
                let pattern = star_pattern(children);
                b.iter(|| black_box(find_matches(black_box(&pattern), black_box(&target))));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
