//! Demonstration of rock generation for every preset

use rust_rock_hull::*;

fn main() -> Result<()> {
    println!("=== Rock presets ===");
    for preset in [
        ShapePreset::Boulder,
        ShapePreset::Slab,
        ShapePreset::Column,
        ShapePreset::Pebble,
        ShapePreset::ReefMound,
        ShapePreset::ReefBranch,
    ] {
        let config = RockConfigBuilder::new()
            .seed(42)
            .preset(preset)
            .size(2.0)?
            .build()?;

        let rock = HullRock::generate(config)?;
        let hull = rock.hull();
        let mesh = rock.mesh();

        println!(
            "{:<10} {:>2} points, {:>2} on hull, {:>2} faces, volume {:.3}, closed={}",
            preset.name(),
            rock.points().len(),
            hull.vertex_indices().len(),
            hull.face_count(),
            hull.volume(),
            hull.is_closed(),
        );
        println!(
            "           {} vertices, {} floats interleaved",
            mesh.vertex_count(),
            mesh.to_interleaved().len()
        );
    }

    println!("\n=== Degenerate inputs ===");
    let options = ShapeOptions::default();
    for count in [0, 2, 3, 4] {
        let mesh = generate_hull_mesh(7, 1.0, count, &options);
        println!("{} points -> {} triangles", count, mesh.triangle_count());
    }
    let mesh = generate_hull_mesh(7, -1.0, 12, &options);
    println!("negative size -> {} triangles", mesh.triangle_count());

    Ok(())
}
