use loss_landscape::{recompute_point_error, recompute_surface, CoefficientPair, Dataset};
use ndarray::array;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Two-Point RMSE Example ===\n");

    // y = 3*x1 + 2*x2 with no noise
    let dataset = Dataset::new(array![1.0, 0.0], array![0.0, 1.0], array![3.0, 2.0])?;

    for pair in [CoefficientPair::new(3.0, 2.0), CoefficientPair::new(0.0, 0.0)] {
        let error = recompute_point_error(&dataset, &pair)?;
        println!("RMSE at ({:.1}, {:.1}): {:.4}", pair.beta1, pair.beta2, error);
    }

    let axis = [-1.0, 0.0, 1.0];
    let evaluation = recompute_surface(&dataset, &axis, &axis, &CoefficientPair::new(0.0, 0.0))?;

    println!("\nError surface (rows: beta1, cols: beta2):");
    for (i, row) in evaluation.surface.values().outer_iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|v| format!("{:7.4}", v)).collect();
        println!("beta1={:5.1} | {}", axis[i], cells.join(" "));
    }
    println!("\nMarker at (0, 0): {:.4}", evaluation.point_error);

    Ok(())
}
