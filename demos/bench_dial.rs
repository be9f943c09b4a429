use std::fs::File;
use std::io::Write;
use std::time::Instant;

use dial_core::{baseline, shortest_path_with_stats, Graph};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn make_random_graph(n: usize, avg_degree: f32, w_max: u64, seed: u64) -> Graph {
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

fn run_one(n: usize, avg_degree: f32, w_max: u64, seed: u64) -> serde_json::Value {
    let g = make_random_graph(n, avg_degree, w_max, seed);

    let t0 = Instant::now();
    let dist_b = baseline::dijkstra(&g, 0).expect("baseline");
    let dt_base = t0.elapsed().as_secs_f64() * 1000.0;

    let t1 = Instant::now();
    let (dist_d, stats) = shortest_path_with_stats(&g, 0, g.max_weight()).expect("dial");
    let dt_dial = t1.elapsed().as_secs_f64() * 1000.0;

    for v in 0..n {
        assert_eq!(dist_b[v], dist_d[v], "dial parity fail at {v}");
    }

    serde_json::json!({
        "n": n, "m": g.edge_count(), "avg_degree": avg_degree, "w_max": w_max,
        "baseline_ms": dt_base, "dial_ms": dt_dial,
        "dial_speedup": dt_base / dt_dial.max(1e-9),
        "stats": stats
    })
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help") {
        eprintln!("Usage: bench_dial --sizes 10000,20000 --degrees 2,4,8 --wmax 10 --seed 42 --out benchmarks/dial_sample.json");
        return;
    }
    let sizes_arg = args
        .iter()
        .position(|a| a == "--sizes")
        .and_then(|i| args.get(i + 1))
        .cloned()
        .unwrap_or("10000,20000".into());
    let degrees_arg = args
        .iter()
        .position(|a| a == "--degrees")
        .and_then(|i| args.get(i + 1))
        .cloned()
        .unwrap_or("4".into());
    let w_max: u64 = args
        .iter()
        .position(|a| a == "--wmax")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);
    let seed: u64 = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
        .unwrap_or(42);
    let out_path = args
        .iter()
        .position(|a| a == "--out")
        .and_then(|i| args.get(i + 1))
        .unwrap_or(&"benchmarks/dial_sample.json".to_string())
        .clone();

    let sizes: Vec<usize> = sizes_arg.split(',').filter_map(|s| s.parse().ok()).collect();
    let degrees: Vec<f32> = degrees_arg.split(',').filter_map(|s| s.parse().ok()).collect();
    let mut results = Vec::new();
    for &s in &sizes {
        for &deg in &degrees {
            results.push(run_one(s, deg, w_max, seed));
        }
    }
    let json = serde_json::Value::Array(results);
    if let Some(dir) = std::path::Path::new(&out_path).parent() {
        std::fs::create_dir_all(dir).ok();
    }
    let mut f = File::create(&out_path).expect("create out");
    f.write_all(serde_json::to_string_pretty(&json).unwrap().as_bytes())
        .unwrap();
    eprintln!("wrote {out_path}");
}
