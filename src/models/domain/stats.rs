use serde::{Deserialize, Serialize};

/// The single aggregate counters document. Fields missing from the
/// stored record read as zero; the record itself is only ever touched
/// through atomic increments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GlobalStats {
    #[serde(default)]
    pub quizzes: i64,
    #[serde(default)]
    pub plays: i64,
    #[serde(default)]
    pub users: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_default_to_zero() {
        let stats: GlobalStats = serde_json::from_str(r#"{"quizzes": 3}"#).unwrap();
        assert_eq!(stats.quizzes, 3);
        assert_eq!(stats.plays, 0);
        assert_eq!(stats.users, 0);
    }
}
