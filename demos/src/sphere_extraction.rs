//! Sphere Extraction Benchmark
//!
//! This example compares sequential and slab-parallel extraction:
//! 1. Fill a dense volume with a smooth sphere
//! 2. Extract with the indexed sequential extractor
//! 3. Extract with the parallel extractor at several slab depths
//! 4. Check both produce the same mesh
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin sphere_extraction -- 128
//! ```

use std::env;

use instant::Instant;
use log::warn;

use vox_core::{DefaultController, Region, Vector3i};
use vox_rs::{
    extract_marching_cubes_mesh, extract_parallel, DenseVolume, MeshStats, ParallelConfig,
};

fn main() {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════════════");
    println!("          Sphere Extraction Benchmark");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    let args: Vec<String> = env::args().collect();
    let size: i32 = match args.get(1).map(|s| s.parse()) {
        Some(Ok(n)) if n >= 2 => n,
        Some(_) => {
            eprintln!("Usage: {} [size >= 2]", args[0]);
            std::process::exit(1);
        }
        None => {
            println!("Usage: {} [size]", args[0]);
            println!();
            println!("Using default size: 96");
            96
        }
    };

    if let Err(e) = run(size) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(size: i32) -> vox_core::Result<()> {
    // =========================================================================
    // Step 1: Build the volume
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 1: Build Volume                                        │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let start = Instant::now();
    let region = Region::new(Vector3i::splat(0), Vector3i::splat(size - 1))?;
    let centre = region.centre();
    let radius = size as f32 * 0.4;
    let volume = DenseVolume::from_fn(region, |p| {
        let d = (p.as_f32() - centre).length();
        (127.5 + (radius - d) * 32.0).clamp(0.0, 255.0) as u8
    });
    let build_time = start.elapsed();

    println!("  Dimensions:      {}³", size);
    println!("  Radius:          {:.1}", radius);
    println!("  Build time:      {:.3}s", build_time.as_secs_f64());
    println!();

    // =========================================================================
    // Step 2: Sequential extraction
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 2: Sequential Extraction                               │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let start = Instant::now();
    let sequential = extract_marching_cubes_mesh(&volume, region)?;
    let seq_time = start.elapsed();

    let stats = MeshStats::from_mesh(&sequential);
    let expected_area = 4.0 * std::f32::consts::PI * radius * radius;
    println!("  Vertices:        {}", stats.vertex_count);
    println!("  Triangles:       {}", stats.triangle_count);
    println!(
        "  Surface area:    {:.1} (sphere: {:.1})",
        stats.surface_area, expected_area
    );
    println!("  Bounding box:    {} → {}", stats.bbox_min, stats.bbox_max);
    println!("  Time:            {:.3}s", seq_time.as_secs_f64());
    println!();

    // =========================================================================
    // Step 3: Parallel extraction
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 3: Parallel Extraction                                 │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let controller = DefaultController::new();
    for slab_depth in [4, 16, 64] {
        let config = ParallelConfig::default().with_slab_depth(slab_depth);

        let start = Instant::now();
        let parallel = extract_parallel(&volume, region, &controller, &config)?;
        let par_time = start.elapsed();

        let identical = parallel == sequential;
        println!(
            "  Slab depth {:>3}: {:.3}s  ({:.2}x)  identical: {}",
            slab_depth,
            par_time.as_secs_f64(),
            seq_time.as_secs_f64() / par_time.as_secs_f64().max(1e-9),
            identical
        );
        if !identical {
            warn!("Slab depth {} produced a different mesh", slab_depth);
        }
    }
    println!();

    // =========================================================================
    // Step 4: Spot check
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 4: Spot Check                                          │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let worst = sequential
        .vertices()
        .iter()
        .map(|v| ((v.position - centre).length() - radius).abs())
        .fold(0.0f32, f32::max);
    let outward = sequential
        .vertices()
        .iter()
        .filter(|v| v.normal.dot(v.position - centre) > 0.0)
        .count();

    println!("  Max radial error:  {:.4}", worst);
    println!("  Outward normals:   {}/{}", outward, sequential.vertex_count());
    println!();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Done.");
    println!("═══════════════════════════════════════════════════════════════");

    Ok(())
}
