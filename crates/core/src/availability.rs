//! Availability-check math: demand scoring.
//!
//! The +/- 1 day viewing-date window lives in the overlap query alongside
//! the other reservation SQL.

/// Points added to the demand score per reservation on a property.
pub const DEMAND_POINTS_PER_RESERVATION: i64 = 10;
/// Demand score ceiling.
pub const MAX_DEMAND_SCORE: i64 = 100;

/// Crude demand heuristic: ten points per reservation, capped at 100.
pub fn demand_score(total_reservations: i64) -> i64 {
    (total_reservations * DEMAND_POINTS_PER_RESERVATION).min(MAX_DEMAND_SCORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demand_score_scales_and_caps() {
        assert_eq!(demand_score(0), 0);
        assert_eq!(demand_score(3), 30);
        assert_eq!(demand_score(10), 100);
        assert_eq!(demand_score(25), 100);
    }
}
