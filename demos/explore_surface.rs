use loss_landscape::{Session, SessionConfig, REFERENCE_LINE};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Interactive Error Surface Walkthrough ===\n");

    let mut rng = StdRng::seed_from_u64(2024);
    let mut session = Session::start(SessionConfig::default(), &mut rng)?;

    let surface = session.surface();
    let (rows, cols) = surface.shape();
    let (i, j, lowest) = surface.min_cell();
    println!("Dataset: {} samples", session.dataset().n_samples());
    println!("Surface: {}x{} cells", rows, cols);
    println!(
        "Lowest cell: beta1={:.1}, beta2={:.1}, RMSE={:.4}",
        surface.beta1().samples()[i],
        surface.beta2().samples()[j],
        lowest
    );

    // A slider drag only refreshes the marker, never the surface
    println!("\nDragging beta1 from -2 to 5:");
    for step in 0..=7 {
        let beta1 = -2.0 + step as f64;
        let error = session.set_beta1(beta1)?;
        let selected = session.selected();
        println!(
            "  beta=({:5.1}, {:5.1})  RMSE={:8.4}",
            selected.beta1, selected.beta2, error
        );
    }

    println!("\nPredicted vs actual (first 5 of {}):", session.dataset().n_samples());
    for point in session.projection()?.iter().take(5) {
        println!("  predicted={:8.3}  actual={:8.3}", point.predicted, point.actual);
    }
    println!(
        "Reference line: {:?} -> {:?}",
        REFERENCE_LINE.start, REFERENCE_LINE.end
    );

    session.regenerate(&mut rng)?;
    let (i, j, lowest) = session.surface().min_cell();
    println!(
        "\nAfter regeneration: lowest cell beta1={:.1}, beta2={:.1}, RMSE={:.4}; marker RMSE={:.4}",
        session.surface().beta1().samples()[i],
        session.surface().beta2().samples()[j],
        lowest,
        session.point_error()
    );

    Ok(())
}
