//! Completion indicator rendering
//!
//! Both renderers take the ratio from [`TaskStore::completion_ratio`] and are
//! pure; call them again after every change.
//!
//! [`TaskStore::completion_ratio`]: crate::store::TaskStore::completion_ratio

/// Fill color of the completed slice
pub const DONE_COLOR: &str = "#81c784";

/// Color of the remaining slice
pub const REMAINING_COLOR: &str = "#f0f4f8";

/// Default text gauge width in cells
pub const DEFAULT_GAUGE_WIDTH: usize = 20;

fn clamp(ratio: f64) -> f64 {
    if ratio.is_finite() { ratio.clamp(0.0, 100.0) } else { 0.0 }
}

/// CSS background for the completion circle
pub fn conic_gradient(ratio: f64) -> String {
    let ratio = clamp(ratio);
    format!("conic-gradient({DONE_COLOR} 0% {ratio}%, {REMAINING_COLOR} {ratio}% 100%)")
}

/// Text bar such as `[##########----------] 50%`
pub fn gauge(ratio: f64, width: usize) -> String {
    let ratio = clamp(ratio);
    let filled = ((ratio / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        ratio
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conic_gradient() {
        assert_eq!(
            conic_gradient(50.0),
            "conic-gradient(#81c784 0% 50%, #f0f4f8 50% 100%)"
        );
        assert_eq!(
            conic_gradient(0.0),
            "conic-gradient(#81c784 0% 0%, #f0f4f8 0% 100%)"
        );
    }

    #[test]
    fn test_conic_gradient_fractional() {
        let css = conic_gradient(100.0 / 3.0);
        assert!(css.starts_with("conic-gradient(#81c784 0% 33.3"));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(conic_gradient(f64::NAN), conic_gradient(0.0));
        assert_eq!(conic_gradient(250.0), conic_gradient(100.0));
        assert_eq!(gauge(-5.0, 4), "[----] 0%");
    }

    #[test]
    fn test_gauge() {
        assert_eq!(gauge(50.0, 10), "[#####-----] 50%");
        assert_eq!(gauge(100.0, 4), "[####] 100%");
        assert_eq!(gauge(0.0, 0), "[] 0%");
    }
}
