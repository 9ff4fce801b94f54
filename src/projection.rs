use crate::coefficients::CoefficientPair;
use crate::dataset::Dataset;
use crate::error::Result;

/// One point of the predicted-vs-actual scatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitPoint {
    pub predicted: f64,
    pub actual: f64,
}

/// Endpoints of the perfect-fit diagonal drawn behind the scatter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReferenceLine {
    pub start: (f64, f64),
    pub end: (f64, f64),
}

/// Fixed identity line; not derived from data.
pub const REFERENCE_LINE: ReferenceLine = ReferenceLine {
    start: (-50.0, -50.0),
    end: (50.0, 50.0),
};

/// Pairs each prediction `β1·x1 + β2·x2` with its observed response, in
/// sample order.
pub fn project(dataset: &Dataset, beta: &CoefficientPair) -> Result<Vec<FitPoint>> {
    let predicted = dataset.predict(beta)?;

    Ok(predicted
        .iter()
        .zip(dataset.y().iter())
        .map(|(&predicted, &actual)| FitPoint { predicted, actual })
        .collect())
}
