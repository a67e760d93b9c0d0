use crate::error::ScoreError;

/// Running win tally per participant, kept across games of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    // Participant order is preserved for display.
    entries: Vec<(String, u32)>,
}

impl ScoreTracker {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScoreTracker {
            entries: names.into_iter().map(|name| (name.into(), 0)).collect(),
        }
    }

    /// Add one win for `name` and return the new tally.
    pub fn record_win(&mut self, name: &str) -> Result<u32, ScoreError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .ok_or_else(|| ScoreError::UnknownParticipant(name.to_string()))?;
        entry.1 += 1;
        Ok(entry.1)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, wins)| wins)
    }

    /// Snapshot of all tallies in participant order.
    pub fn current_scores(&self) -> Vec<(String, u32)> {
        self.entries.clone()
    }

    /// Zero every tally. Keys stay registered.
    pub fn reset(&mut self) {
        for (_, wins) in &mut self.entries {
            *wins = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let scores = ScoreTracker::new(["You", "Computer"]);
        assert_eq!(
            scores.current_scores(),
            vec![("You".to_string(), 0), ("Computer".to_string(), 0)]
        );
    }

    #[test]
    fn test_record_win_increments_by_one() {
        let mut scores = ScoreTracker::new(["You", "Computer"]);
        assert_eq!(scores.record_win("Computer"), Ok(1));
        assert_eq!(scores.record_win("Computer"), Ok(2));
        assert_eq!(scores.get("Computer"), Some(2));
        assert_eq!(scores.get("You"), Some(0));
    }

    #[test]
    fn test_unknown_participant_rejected() {
        let mut scores = ScoreTracker::new(["You", "Computer"]);
        assert_eq!(
            scores.record_win("Stranger"),
            Err(ScoreError::UnknownParticipant("Stranger".to_string()))
        );
        assert_eq!(scores.get("Stranger"), None);
        assert_eq!(scores.current_scores().len(), 2);
    }

    #[test]
    fn test_reset_keeps_keys() {
        let mut scores = ScoreTracker::new(["You", "Computer"]);
        scores.record_win("You").unwrap();
        scores.reset();
        assert_eq!(scores.get("You"), Some(0));
        assert_eq!(scores.get("Computer"), Some(0));
    }
}
