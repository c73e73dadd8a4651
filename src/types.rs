use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionResults {
    pub mode: String,
    pub capacity: usize,
    pub field: usize,
    pub totals: Totals,
    pub records: Vec<RankedRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Totals {
    pub lines_read: u64,
    pub kept: usize,
    pub discarded: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedRecord {
    pub rank: usize,
    pub score: f64,
    pub line: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_json_round_trip() {
        let results = SelectionResults {
            mode: "highest".to_string(),
            capacity: 2,
            field: 1,
            totals: Totals {
                lines_read: 5,
                kept: 2,
                discarded: 3,
            },
            records: vec![RankedRecord {
                rank: 1,
                score: 9.5,
                line: "a 9.5".to_string(),
            }],
        };

        let json = serde_json::to_string(&results).unwrap();
        let parsed: SelectionResults = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.mode, "highest");
        assert_eq!(parsed.totals.discarded, 3);
        assert_eq!(parsed.records[0].score, 9.5);
        assert_eq!(parsed.records[0].line, "a 9.5");
    }
}
