//! DBSCAN on a small 2D table, with a categorical column left out.
//!
//! Run with `RUST_LOG=debug` to see the run summary.

use densel::{Attribute, DataGrid, Dataset, Dbscan, Value};

fn main() -> densel::Result<()> {
    env_logger::init();

    let points = [
        // Cluster A (near origin)
        (0.0, 0.0, "a"),
        (0.1, 0.2, "a"),
        (0.2, 0.1, "a"),
        (-0.1, 0.1, "a"),
        // Cluster B (near (5, 5))
        (5.0, 5.0, "b"),
        (5.1, 4.9, "b"),
        (4.9, 5.1, "b"),
        (5.2, 5.2, "b"),
        // Outlier
        (10.0, 0.0, "z"),
    ];

    let mut grid = DataGrid::new(vec![
        Attribute::float("x"),
        Attribute::float("y"),
        Attribute::categorical("tag"),
    ]);
    for (x, y, tag) in points {
        grid.push_row(vec![Value::Float(x), Value::Float(y), tag.into()])?;
    }

    let dbscan = Dbscan::new(1.0, 3).with_attributes([0, 1]);
    let clusters = dbscan.fit_dataset(&grid)?;

    println!("=== DBSCAN (eps=1.0, min_count=3) ===");
    for (id, members) in &clusters {
        println!("  cluster {id}: {members:?}");
    }
    let (_, n_rows) = grid.size();
    println!("  noise: {:?}", clusters.noise(n_rows));

    // Selecting the categorical column is a conversion error.
    if let Err(err) = dbscan.with_attributes([2]).fit_dataset(&grid) {
        println!("\nconversion error: {err}");
    }

    Ok(())
}
