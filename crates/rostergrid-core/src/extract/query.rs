use crate::types::{Record, normalize_team};

/// Player names of one team, in extraction order.
///
/// Teams are compared by normalized name (case-folded, whitespace
/// collapsed). The input order is preserved; nothing is re-sorted.
///
/// # Examples
/// ```
/// use rostergrid_core::{Record, records_for_team};
///
/// let records = vec![
///     Record::new("JP BREAKS", "QB", "JJ McCarthy"),
///     Record::new("Other", "RB", "Someone"),
///     Record::new("JP BREAKS", "WR", "Jermaine Burton"),
/// ];
/// assert_eq!(
///     records_for_team(&records, "jp breaks"),
///     vec!["JJ McCarthy", "Jermaine Burton"]
/// );
/// ```
#[must_use]
pub fn records_for_team<'a>(records: &'a [Record], team: &str) -> Vec<&'a str> {
    let target = normalize_team(team);
    records
        .iter()
        .filter(|r| r.team_key() == target)
        .map(|r| r.player.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_team_is_empty() {
        let records = vec![Record::new("A", "", "x")];
        assert!(records_for_team(&records, "B").is_empty());
        assert!(records_for_team(&[], "A").is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let records = vec![
            Record::new("Keenan and Kelce", "WR", "Xavier Legette"),
            Record::new("Keenan and Kelce", "RB", "Cam Skattebo"),
            Record::new("Keenan and Kelce", "TE", "Jack Bech"),
        ];
        assert_eq!(
            records_for_team(&records, "  KEENAN  and kelce "),
            vec!["Xavier Legette", "Cam Skattebo", "Jack Bech"]
        );
    }
}
