//! Derived weight estimate

/// Meters to millimeters conversion
pub const METERS_TO_MILLIMETERS: f64 = 1e3;

/// Weight estimate for the drawing as a solid prism:
/// `(cut_length * 1000) * width * thickness`.
///
/// The cut length is scaled from meters to millimeters before the
/// multiplication; width and thickness are already in drawing units.
/// No density factor is applied, so the figure is a cubic-unit volume
/// proxy rather than a true mass. Callers wanting mass must multiply
/// by their material's density externally.
pub fn estimate_weight(cut_length: f64, width: f64, thickness: f64) -> f64 {
    cut_length * METERS_TO_MILLIMETERS * width * thickness
}
