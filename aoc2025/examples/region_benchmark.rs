//! Benchmark comparing the containment backends and the merge strategies.
//!
//! Run with: cargo run --example region_benchmark --release
//!
//! Max inscribed rectangle search over random skyline polygons:
//! - Polygon (ray casting per point, no precomputation) - baseline
//! - RasterGrid (every cell classified up front, lookups afterwards)
//!
//! Interval merging over random span lists:
//! - MergeStrategy::Sweep (sort then one pass)
//! - MergeStrategy::FixedPoint (pairwise passes until nothing overlaps)

use aoc2025::utils::geometry::{Point2D, Polygon, RasterGrid, find_max_inscribed};
use aoc2025::utils::intervals::{IntervalSet, MergeStrategy, Span};
use std::time::Instant;

const NUM_POLYGONS: usize = 50;
const BARS_PER_POLYGON: usize = 40;
const RASTER_CELL_LIMIT: u64 = 1_000_000;

const NUM_SETS: usize = 50;
const SPANS_PER_SET: usize = 400;

/// Linear congruential generator, good enough for benchmark inputs
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % bound
    }
}

/// Skyline of bars standing on a common base line
fn generate_skyline(seed: u64, bars: usize) -> Polygon {
    const BASE: i64 = 200;
    let mut rng = Lcg(seed);
    let mut vertices = vec![Point2D::new(0, BASE)];
    let mut x = 0;
    for _ in 0..bars {
        let width = 1 + rng.next(8) as i64;
        let height = 1 + rng.next(150) as i64;
        vertices.push(Point2D::new(x, BASE - height));
        x += width;
        vertices.push(Point2D::new(x, BASE - height));
    }
    vertices.push(Point2D::new(x, BASE));

    match Polygon::new(vertices) {
        Ok(polygon) => polygon,
        Err(e) => panic!("generated skyline is not rectilinear: {}", e),
    }
}

fn generate_spans(seed: u64, count: usize) -> Vec<Span> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|_| {
            let min = rng.next(1_000_000);
            Span::new(min, min + rng.next(5_000)).unwrap_or_else(|_| Span::single(min))
        })
        .collect()
}

fn main() {
    println!("Max Inscribed Rectangle Benchmark");
    println!("=================================\n");

    let polygons: Vec<Polygon> = (0..NUM_POLYGONS)
        .map(|i| generate_skyline(42 + i as u64, BARS_PER_POLYGON))
        .collect();
    println!(
        "{} skylines of {} bars ({} vertices each)",
        NUM_POLYGONS,
        BARS_PER_POLYGON,
        polygons[0].vertices().len()
    );

    println!("Running Polygon (ray casting)...");
    let start = Instant::now();
    let ray_results: Vec<u128> = polygons
        .iter()
        .map(|polygon| polygon.max_inscribed_rectangle().map_or(0, |r| r.area()))
        .collect();
    let ray_time = start.elapsed();
    println!("Polygon:                     {:?}", ray_time);

    println!("Running RasterGrid (rasterize + lookups)...");
    let start = Instant::now();
    let raster_results: Vec<u128> = polygons
        .iter()
        .map(|polygon| {
            RasterGrid::from_polygon(polygon, RASTER_CELL_LIMIT)
                .and_then(|grid| find_max_inscribed(polygon.vertices(), &grid))
                .map_or(0, |r| r.area())
        })
        .collect();
    let raster_time = start.elapsed();
    println!("RasterGrid:                  {:?}", raster_time);

    assert_eq!(ray_results, raster_results, "backends disagree");
    println!("Both backends agree. Sample areas: {:?}", &ray_results[..5]);

    println!("\nInterval Merge Benchmark");
    println!("========================\n");

    let span_lists: Vec<Vec<Span>> = (0..NUM_SETS)
        .map(|i| generate_spans(7 + i as u64, SPANS_PER_SET))
        .collect();

    let limits: Vec<u128> = span_lists
        .iter()
        .map(|spans| {
            let set: IntervalSet = spans.iter().copied().collect();
            set.theoretical_max().unwrap_or(0)
        })
        .collect();
    println!("Sample theoretical max: {:?}", &limits[..5]);

    let mut coverages = Vec::new();
    for strategy in [MergeStrategy::Sweep, MergeStrategy::FixedPoint] {
        println!("Running {:?}...", strategy);
        let start = Instant::now();
        let covered: Vec<u128> = span_lists
            .iter()
            .map(|spans| {
                let mut set: IntervalSet = spans.iter().copied().collect();
                set.merge_with(strategy);
                set.total_coverage().unwrap_or(0)
            })
            .collect();
        println!("{:<28} {:?}", format!("{:?}:", strategy), start.elapsed());
        coverages.push(covered);
    }

    assert_eq!(coverages[0], coverages[1], "strategies disagree");
    assert!(coverages[0].iter().zip(&limits).all(|(covered, limit)| covered <= limit));
    println!("Both strategies agree. Sample coverage: {:?}", &coverages[0][..5]);
}
