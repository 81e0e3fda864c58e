//! Header / footer / body classification by vertical position.

use crate::model::Region;

use super::{LayoutConfig, Line};

/// Classify a baseline on a page of the given height.
///
/// Pages without a usable height put everything in the body.
pub fn classify_region(baseline_y: f32, page_height: f32, config: &LayoutConfig) -> Region {
    if !(page_height > 0.0 && page_height.is_finite()) {
        return Region::Body;
    }

    if baseline_y > config.header_fraction * page_height {
        Region::Header
    } else if baseline_y < config.footer_fraction * page_height {
        Region::Footer
    } else {
        Region::Body
    }
}

/// Tag every line with its region.
pub fn classify_lines(lines: Vec<Line>, page_height: f32, config: &LayoutConfig) -> Vec<Line> {
    lines
        .into_iter()
        .map(|line| {
            let region = classify_region(line.baseline_y, page_height, config);
            line.with_region(region)
        })
        .collect()
}
