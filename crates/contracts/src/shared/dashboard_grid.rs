use serde::{Deserialize, Serialize};

/// Static layout configuration for the dashboard grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardGridOptions {
    /// Grid columns count
    pub columns: u32,
    /// Grid row height, bottom padding included
    pub row_height: u32,
    /// Widget margins
    pub margins: u32,
    /// Below this viewport width the grid collapses to a single column
    pub mobile_break_point: u32,
    /// Default widget size
    pub default_size_x: u32,
    pub default_size_y: u32,
    /// Resize bounds for widgets
    pub min_size_x: u32,
    pub max_size_x: u32,
    pub min_size_y: u32,
    pub max_size_y: u32,
}

impl Default for DashboardGridOptions {
    fn default() -> Self {
        Self {
            columns: 12,
            row_height: 65,
            margins: 15,
            mobile_break_point: 800,
            default_size_x: 3,
            default_size_y: 3,
            min_size_x: 1,
            max_size_x: 6,
            min_size_y: 1,
            max_size_y: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DashboardGridOptions::default();
        assert_eq!(options.columns, 12);
        assert_eq!(options.row_height, 65);
        assert_eq!(options.mobile_break_point, 800);
        assert!(options.min_size_x <= options.default_size_x);
        assert!(options.default_size_x <= options.max_size_x);
        assert!(options.max_size_x <= options.columns);
    }
}
