//! Wealth curve output structures

use serde::{Deserialize, Serialize};

/// Projected value at the end of one calendar year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: i32,
    /// End-of-December balance, rounded to 2 decimals
    pub projected_value: f64,
}

/// Year-by-year projection, contiguous and ordered by year
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WealthCurve {
    points: Vec<ProjectionPoint>,
}

impl WealthCurve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            points: Vec::with_capacity(years),
        }
    }

    /// Append the next year's point
    pub fn add_point(&mut self, point: ProjectionPoint) {
        debug_assert!(
            self.points.last().map_or(true, |last| last.year + 1 == point.year),
            "projection points must be contiguous"
        );
        self.points.push(point);
    }

    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<ProjectionPoint> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.points.first().map(|p| p.year)
    }

    pub fn last_year(&self) -> Option<i32> {
        self.points.last().map(|p| p.year)
    }

    /// Projected value for a specific year, if it is in range
    pub fn value_in(&self, year: i32) -> Option<f64> {
        let first = self.first_year()?;
        let idx = usize::try_from(year - first).ok()?;
        self.points.get(idx).map(|p| p.projected_value)
    }

    pub fn final_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.projected_value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectionPoint> {
        self.points.iter()
    }

    /// Get summary statistics
    pub fn summary(&self, initial_value: f64) -> CurveSummary {
        let final_value = self.final_value().unwrap_or(initial_value);
        CurveSummary {
            years: self.points.len() as u32,
            first_year: self.first_year(),
            last_year: self.last_year(),
            initial_value,
            final_value,
            total_growth: final_value - initial_value,
        }
    }
}

impl<'a> IntoIterator for &'a WealthCurve {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Summary statistics for a wealth curve
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSummary {
    pub years: u32,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub initial_value: f64,
    pub final_value: f64,
    pub total_growth: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(values: &[(i32, f64)]) -> WealthCurve {
        let mut curve = WealthCurve::new();
        for &(year, projected_value) in values {
            curve.add_point(ProjectionPoint { year, projected_value });
        }
        curve
    }

    #[test]
    fn test_value_lookup_by_year() {
        let c = curve(&[(2030, 100.0), (2031, 110.0), (2032, 121.0)]);
        assert_eq!(c.value_in(2031), Some(110.0));
        assert_eq!(c.value_in(2029), None);
        assert_eq!(c.value_in(2033), None);
        assert_eq!(c.final_value(), Some(121.0));
    }

    #[test]
    fn test_summary_of_empty_curve() {
        let summary = WealthCurve::new().summary(500.0);
        assert_eq!(summary.years, 0);
        assert_eq!(summary.final_value, 500.0);
        assert_eq!(summary.total_growth, 0.0);
        assert_eq!(summary.first_year, None);
    }

    #[test]
    fn test_serializes_as_point_list() {
        let c = curve(&[(2030, 1040.74)]);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"[{"year":2030,"projectedValue":1040.74}]"#);
    }
}
