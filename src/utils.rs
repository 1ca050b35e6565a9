//! Utility functions for the rating engine

/// Round a value to two decimal places.
///
/// Every number leaving the engine is rounded this way at the boundary.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Average of the two display ratings on one side of a doubles match.
pub fn team_average(rating1: f64, rating2: f64) -> f64 {
    (rating1 + rating2) / 2.0
}

/// Absolute difference between two team averages.
pub fn rating_spread(average1: f64, average2: f64) -> f64 {
    (average1 - average2).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.304999), 2.3);
        assert_eq!(round2(2.305), 2.31);
        assert_eq!(round2(-1.844999), -1.84);
        assert_eq!(round2(18.5), 18.5);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_team_average() {
        assert_eq!(team_average(50.0, 40.0), 45.0);
        assert_eq!(team_average(30.0, 23.0), 26.5);
    }

    #[test]
    fn test_rating_spread() {
        assert_eq!(rating_spread(45.0, 26.5), 18.5);
        assert_eq!(rating_spread(26.5, 45.0), 18.5);
        assert_eq!(rating_spread(30.0, 30.0), 0.0);
    }
}
