use dial_core::{baseline, shortest_path_with_stats, Graph, INFINITY};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn canonical() -> Graph {
    let mut g = Graph::new(9).expect("size");
    for (u, v, w) in [
        (0, 1, 4),
        (0, 7, 8),
        (1, 2, 8),
        (1, 7, 11),
        (2, 3, 7),
        (2, 8, 2),
        (2, 5, 4),
        (3, 4, 9),
        (3, 5, 14),
        (4, 5, 10),
        (5, 6, 2),
        (6, 7, 1),
        (6, 8, 6),
        (7, 8, 7),
    ] {
        g.add_edge(u, v, w).expect("edge");
    }
    g
}

fn random_graph(n: usize, avg_degree: f32, w_max: u64, seed: u64) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut g = Graph::new(n).expect("size");
    let m = (n as f32 * avg_degree / 2.0) as usize;
    let mut added = 0;
    while added < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        g.add_edge(u, v, rng.gen_range(1..=w_max)).expect("edge");
        added += 1;
    }
    g
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() == 2 && args[1] == "canonical" {
        let g = canonical();
        let (dist, stats) = shortest_path_with_stats(&g, 0, g.max_weight()).expect("run");
        println!("Vertex Distance from Source");
        for (v, d) in dist.iter().enumerate() {
            println!("{v}     {d}");
        }
        println!(
            "relax={} settled={} buckets_visited={} max_bucket={}",
            stats.relaxations, stats.settled, stats.buckets_visited, stats.max_bucket_index
        );
        return;
    }
    if args.len() < 6 {
        eprintln!("usage: run_one <n> <avg_degree> <w_max> <seed> <mode: dial|baseline>");
        eprintln!("       run_one canonical");
        std::process::exit(1);
    }
    let n: usize = args[1].parse().expect("n");
    let avg_degree: f32 = args[2].parse().expect("avg_degree");
    let w_max: u64 = args[3].parse().expect("w_max");
    let seed: u64 = args[4].parse().expect("seed");
    let mode = args[5].as_str();

    let g = random_graph(n, avg_degree, w_max, seed);
    match mode {
        "dial" => {
            let (dist, stats) = match shortest_path_with_stats(&g, 0, g.max_weight()) {
                Ok(out) => out,
                Err(e) => {
                    eprintln!("error: {e}");
                    return;
                }
            };
            let reached = dist.iter().filter(|&&d| d != INFINITY).count();
            println!(
                "mode=dial n={n} m={} reached={reached} relax={} settled={} buckets_visited={} max_bucket={}",
                g.edge_count(),
                stats.relaxations,
                stats.settled,
                stats.buckets_visited,
                stats.max_bucket_index
            );
        }
        "baseline" => {
            let dist = match baseline::dijkstra(&g, 0) {
                Ok(out) => out,
                Err(e) => {
                    eprintln!("error: {e}");
                    return;
                }
            };
            let reached = dist.iter().filter(|&&d| d != INFINITY).count();
            println!("mode=baseline n={n} m={} reached={reached}", g.edge_count());
        }
        _ => {
            eprintln!("bad mode");
            std::process::exit(1);
        }
    }
}
