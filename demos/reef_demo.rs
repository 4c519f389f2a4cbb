//! Generate a small reef field, one thread per piece

use std::thread;

use rust_rock_hull::*;

/// Derive a per-piece seed from the field seed
fn piece_seed(field_seed: u32, index: u32) -> u32 {
    field_seed.wrapping_mul(2654435761).wrapping_add(index.wrapping_mul(40503))
}

fn main() {
    let field_seed = 1234;
    let pieces = 8u32;

    let meshes: Vec<(u32, MeshData)> = thread::scope(|scope| {
        let handles: Vec<_> = (0..pieces)
            .map(|i| {
                scope.spawn(move || {
                    let seed = piece_seed(field_seed, i);
                    let mut rng = SequenceGenerator::new(seed);
                    // Downstream choices come from the same stream as the points
                    let size = rng.range(0.5, 1.5);
                    let options = ShapeOptions {
                        flatness: rng.range(0.4, 1.8),
                        irregularity: rng.range(0.3, 0.8),
                    };
                    let count = rng.int_inclusive(10, 21) as usize;
                    (seed, generate_hull_mesh(seed, size, count, &options))
                })
            })
            .collect();
        handles.into_iter().filter_map(|h| h.join().ok()).collect()
    });

    let mut total = 0;
    for (seed, mesh) in &meshes {
        println!("piece seed {:>10}: {:>2} triangles", seed, mesh.triangle_count());
        total += mesh.triangle_count();
    }
    println!("\n{} pieces, {} triangles total", meshes.len(), total);
}
