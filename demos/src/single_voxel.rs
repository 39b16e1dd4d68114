//! Single Voxel Extraction
//!
//! Builds a 32³ volume with one solid voxel, extracts its iso-surface and
//! prints every vertex and triangle of the result.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --bin single_voxel
//! ```

use vox_core::{Region, Vector3i};
use vox_rs::{DenseVolume, MarchingCubesExtractor, MeshStats, SurfaceMesh};

fn main() {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════════════");
    println!("          Single Voxel Surface Extraction");
    println!("═══════════════════════════════════════════════════════════════");
    println!();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> vox_core::Result<()> {
    // =========================================================================
    // Step 1: Build the volume
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 1: Build Volume                                        │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let region = Region::new(Vector3i::new(0, 0, 0), Vector3i::new(31, 31, 31))?;
    let mut volume = DenseVolume::<u8>::new(region);
    volume.set_voxel_at(Vector3i::new(5, 5, 5), 200)?;

    println!("  Region:          {}", region);
    println!("  Voxels:          {}", volume.len());
    println!("  Solid voxel:     (5, 5, 5) = 200");
    println!();

    // =========================================================================
    // Step 2: Extract
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 2: Extract Surface                                     │");
    println!("└─────────────────────────────────────────────────────────────┘");

    let mut mesh = SurfaceMesh::new();
    let stats = MarchingCubesExtractor::new(&volume, region, &mut mesh)?.execute()?;

    println!("  Cells visited:   {}", stats.cells_visited);
    println!("  Active cells:    {}", stats.active_cells);
    println!("  Vertices:        {}", mesh.vertex_count());
    println!("  Triangles:       {}", mesh.triangle_count());
    println!();

    // =========================================================================
    // Step 3: Inspect the mesh
    // =========================================================================
    println!("┌─────────────────────────────────────────────────────────────┐");
    println!("│ Step 3: Mesh Contents                                       │");
    println!("└─────────────────────────────────────────────────────────────┘");

    for (i, v) in mesh.vertices().iter().enumerate() {
        println!(
            "  v{}  pos ({:.3}, {:.3}, {:.3})  normal ({:+.2}, {:+.2}, {:+.2})  material {}",
            i, v.position.x, v.position.y, v.position.z, v.normal.x, v.normal.y, v.normal.z,
            v.material
        );
    }
    for (i, [a, b, c]) in mesh.triangles().enumerate() {
        println!("  t{}  [{}, {}, {}]", i, a, b, c);
    }
    println!();

    let summary = MeshStats::from_mesh(&mesh);
    println!("  Surface area:    {:.4}", summary.surface_area);
    println!();

    println!("═══════════════════════════════════════════════════════════════");
    println!("  Done.");
    println!("═══════════════════════════════════════════════════════════════");

    Ok(())
}
