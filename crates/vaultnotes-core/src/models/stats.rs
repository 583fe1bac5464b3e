//! Read-only usage statistics for the admin dashboard.

use serde::{Deserialize, Serialize};

/// One month's worth of created notes or registered users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCount {
    /// Calendar month, 1-12
    pub month: u32,
    pub count: u64,
}

/// Aggregate usage projection shown on the admin dashboard.
///
/// Each field is loaded by an independent request and stays `None`/empty when
/// its request fails; the dashboard renders whatever arrived.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageStats {
    pub total_notes: Option<u64>,
    pub total_users: Option<u64>,
    pub notes_per_month: Vec<MonthlyCount>,
    pub users_per_month: Vec<MonthlyCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monthly_count_deserializes_from_wire_shape() {
        let counts: Vec<MonthlyCount> =
            serde_json::from_str(r#"[{"month": 1, "count": 12}, {"month": 2, "count": 0}]"#)
                .unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].month, 1);
        assert_eq!(counts[0].count, 12);
    }
}
