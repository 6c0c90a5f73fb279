//! Chart legend

use serde::Serialize;

use crate::series::Metric;

/// A legend swatch and its caption
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    pub metric: Metric,
    pub name: &'static str,
    pub color: &'static str,
}

/// Legend entries in series order
pub fn legend_entries() -> Vec<LegendEntry> {
    Metric::ALL
        .iter()
        .map(|&metric| LegendEntry {
            metric,
            name: metric.display_name(),
            color: metric.color(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_order() {
        let names: Vec<_> = legend_entries().iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec![
                "Application to Interview Rate",
                "Offer Acceptance Rate",
                "Rejection Rate"
            ]
        );
    }
}
