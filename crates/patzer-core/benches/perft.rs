use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use patzer_core::{perft, Board};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [u64],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected_nodes: &[20, 400, 8_902],
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2_039],
    },
    BenchCase {
        name: "endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2_812],
    },
];

fn perft_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    for case in CASES {
        let board: Board = case.fen.parse().expect("bench FEN must parse");
        for (depth_index, &expected) in case.expected_nodes.iter().enumerate() {
            let depth = depth_index + 1;
            group.throughput(Throughput::Elements(expected));
            group.bench_with_input(
                BenchmarkId::new(case.name, depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        let nodes = perft(black_box(&board), depth);
                        assert_eq!(nodes, expected);
                        nodes
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, perft_benchmark);
criterion_main!(benches);
