use crate::PredictionEntry;

/// Shown in place of the prediction list until the first successful predict.
pub const NO_PREDICTIONS_TEXT: &str = "No predictions yet";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub selected_file: Option<String>,
    /// One formatted line per entry, `None` before the first successful predict.
    pub predictions: Option<Vec<String>>,
    pub retrain_status: String,
    pub alert: Option<String>,
    pub dirty: bool,
}

/// Formats an entry as `"<class>: <percent with two decimals>%"`.
pub fn format_prediction(entry: &PredictionEntry) -> String {
    format!("{}: {}%", entry.class, fixed_2(entry.probability * 100.0))
}

/// Two-decimal rendering where an exact tie rounds away from zero.
///
/// `{:.2}` is correctly rounded from the exact binary value but breaks ties to
/// even. A double sits exactly halfway between two hundredths only when it is
/// an odd multiple of 1/8, and `value * 8.0` is exact, so ties are detected
/// without error.
fn fixed_2(value: f64) -> String {
    let eighths = value * 8.0;
    let is_tie = eighths.is_finite() && eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if is_tie {
        // value * 100 is an exact .5 here, so round() moves away from zero.
        format!("{:.2}", (value * 100.0).round() / 100.0)
    } else {
        format!("{value:.2}")
    }
}
