use std::{collections::BTreeSet, fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::{AutomataError, Result};

/// A Life-like birth/survival rule. The counts are only ever used as membership tests,
/// so empty sets and counts no neighborhood can reach are both fine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RuleSet {
    pub born: BTreeSet<u8>,
    pub survive: BTreeSet<u8>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new([3], [2, 3])
    }
}

impl RuleSet {
    pub fn new<B, S>(born: B, survive: S) -> Self
    where
        B: IntoIterator<Item = u8>,
        S: IntoIterator<Item = u8>,
    {
        Self {
            born: born.into_iter().collect(),
            survive: survive.into_iter().collect(),
        }
    }

    pub fn is_born(&self, count: u8) -> bool {
        self.born.contains(&count)
    }

    pub fn survives(&self, count: u8) -> bool {
        self.survive.contains(&count)
    }
}

/// Formats as B/S notation, e.g. `B3/S23`. Counts above 9 are comma separated.
impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "B{}/S{}",
            format_counts(&self.born),
            format_counts(&self.survive)
        )
    }
}

fn format_counts(counts: &BTreeSet<u8>) -> String {
    if counts.iter().any(|count| *count > 9) {
        counts.iter().join(",")
    } else {
        counts.iter().join("")
    }
}

impl FromStr for RuleSet {
    type Err = AutomataError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AutomataError::InvalidRuleNotation(s.to_owned());

        let (first, second) = s.trim().split_once('/').ok_or_else(invalid)?;

        let mut born = None;
        let mut survive = None;

        for half in [first, second] {
            let half = half.trim();
            let counts = half
                .get(1..)
                .and_then(parse_counts)
                .ok_or_else(invalid)?;

            let slot = match half.chars().next().map(|c| c.to_ascii_uppercase()) {
                Some('B') => &mut born,
                Some('S') => &mut survive,
                _ => return Err(invalid()),
            };

            if slot.replace(counts).is_some() {
                return Err(invalid());
            }
        }

        match (born, survive) {
            (Some(born), Some(survive)) => Ok(Self { born, survive }),
            _ => Err(invalid()),
        }
    }
}

fn parse_counts(text: &str) -> Option<BTreeSet<u8>> {
    if text.contains(',') {
        text.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.parse::<u8>().ok())
            .collect()
    } else {
        text.chars()
            .map(|c| c.to_digit(10).map(|digit| digit as u8))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_conway() {
        let rule = RuleSet::default();
        assert!(rule.is_born(3));
        assert!(!rule.is_born(2));
        assert!(rule.survives(2) && rule.survives(3));
        assert!(!rule.survives(4));
    }

    #[test]
    fn out_of_range_counts_are_accepted() {
        let rule = RuleSet::new([9, 42], []);
        assert!(rule.is_born(9));
        assert!(!rule.survives(0));
    }

    #[test]
    fn displays_bs_notation() {
        assert_eq!(RuleSet::default().to_string(), "B3/S23");
        assert_eq!(RuleSet::new([2], []).to_string(), "B2/S");
        assert_eq!(RuleSet::new([3, 12], [1]).to_string(), "B3,12/S1");
    }

    #[test]
    fn parses_bs_notation() {
        assert_eq!("B3/S23".parse::<RuleSet>(), Ok(RuleSet::default()));
        assert_eq!("s23/b3".parse::<RuleSet>(), Ok(RuleSet::default()));
        assert_eq!("B2/S".parse::<RuleSet>(), Ok(RuleSet::new([2], [])));
        assert_eq!(
            "B3678/S34678".parse::<RuleSet>(),
            Ok(RuleSet::new([3, 6, 7, 8], [3, 4, 6, 7, 8]))
        );
        assert_eq!(
            "B3,12/S1".parse::<RuleSet>(),
            Ok(RuleSet::new([3, 12], [1]))
        );
    }

    #[test]
    fn rejects_malformed_notation() {
        for text in ["", "B3", "B3/B3", "X3/S23", "B3a/S23", "/"] {
            assert_eq!(
                text.parse::<RuleSet>(),
                Err(AutomataError::InvalidRuleNotation(text.to_owned())),
                "{text:?}"
            );
        }
    }
}
