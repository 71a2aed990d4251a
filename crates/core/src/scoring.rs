//! Lead qualification scoring.
//!
//! A lead's score is a deterministic weighted sum over four signals: budget
//! tier, contact-info completeness, buyer type, and timeline urgency. The
//! result is clamped to 0-100 and recomputed on every lead create/update.

// ---------------------------------------------------------------------------
// Budget tiers (whole currency units, from budget_max)
// ---------------------------------------------------------------------------

/// Budget at or above which the lead earns the full 40 budget points.
pub const TOP_BUDGET: i64 = 150_000;
/// Budget at or above which the lead earns 30 budget points.
pub const HIGH_BUDGET: i64 = 100_000;
/// Budget at or above which the lead earns 20 budget points.
pub const MID_BUDGET: i64 = 50_000;

/// Maximum attainable score.
pub const MAX_SCORE: u8 = 100;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// The scoring-relevant slice of a lead record.
#[derive(Debug, Clone, Default)]
pub struct LeadSignals<'a> {
    /// Upper end of the stated budget, in whole currency units.
    pub budget_max: Option<i64>,
    pub has_phone: bool,
    pub has_email: bool,
    /// Free-form buyer type, e.g. `cash_buyer`, `investor`, `mortgage`.
    pub buyer_type: Option<&'a str>,
    /// Free-form timeline, e.g. `immediate`, `one_to_three_months`.
    pub timeline: Option<&'a str>,
}

/// Result of scoring a lead: the clamped score plus human-readable notes
/// explaining what drove it.
#[derive(Debug, Clone)]
pub struct LeadScore {
    pub score: u8,
    pub insights: Vec<String>,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a lead 0-100.
///
/// Point allocation: budget tier up to 40, contact completeness up to 20
/// (10 per channel), buyer type up to 20, timeline urgency up to 20.
pub fn score_lead(signals: &LeadSignals<'_>) -> LeadScore {
    let mut score: u32 = 0;
    let mut insights = Vec::new();

    // Budget: up to 40 points.
    let budget_points = match signals.budget_max {
        Some(b) if b >= TOP_BUDGET => 40,
        Some(b) if b >= HIGH_BUDGET => 30,
        Some(b) if b >= MID_BUDGET => 20,
        Some(b) if b > 0 => 10,
        _ => 0,
    };
    score += budget_points;
    if budget_points >= 30 {
        insights.push("High budget - prioritize for premium inventory".to_string());
    } else if budget_points == 0 {
        insights.push("No budget stated - qualify before follow-up".to_string());
    }

    // Contact completeness: up to 20 points.
    let mut contact_points = 0;
    if signals.has_phone {
        contact_points += 10;
    }
    if signals.has_email {
        contact_points += 10;
    }
    score += contact_points;
    if contact_points == 0 {
        insights.push("No contact channel on file".to_string());
    }

    // Buyer type: up to 20 points.
    let buyer_points = match signals.buyer_type {
        Some("cash_buyer") => 20,
        Some("investor") => 15,
        Some("mortgage") => 10,
        _ => 5,
    };
    score += buyer_points;
    if buyer_points == 20 {
        insights.push("Cash buyer - short closing cycle expected".to_string());
    }

    // Timeline urgency: up to 20 points.
    let timeline_points = match signals.timeline {
        Some("immediate") => 20,
        Some("one_to_three_months") => 15,
        Some("three_to_six_months") => 10,
        _ => 5,
    };
    score += timeline_points;
    if timeline_points == 20 {
        insights.push("Immediate timeline - contact within 24h".to_string());
    }

    LeadScore {
        score: score.min(MAX_SCORE as u32) as u8,
        insights,
    }
}
