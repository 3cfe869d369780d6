//! Participant names and their exclusions, as collected from a user before a
//! gift exchange is drawn.
//!
//! # Example
//! ```
//! use secret_santa::restrictions::{GiftRestrictions, Limits};
//!
//! let mut restrictions = GiftRestrictions::new();
//! for entry in ["Ross=Joey", "Joey=Chandler", "Chandler=Ross"] {
//!     let (name, exclusions) = GiftRestrictions::parse_entry(entry).unwrap();
//!     restrictions.insert(name, exclusions).unwrap();
//! }
//!
//! restrictions.validate(&Limits::default()).unwrap();
//! let graph = restrictions.graph();
//! assert!(!graph.has_edge(&"Ross".to_string(), &"Joey".to_string()));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::CompatibilityGraph;

/// Default cap on the number of participants in one exchange.
pub const MAX_PARTICIPANTS: usize = 100;

/// Default cap on the number of exclusions a single participant may list.
pub const MAX_EXCLUSIONS: usize = 3;

/// Size limits enforced before a search is attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_participants: usize,
    pub max_exclusions: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_participants: MAX_PARTICIPANTS,
            max_exclusions: MAX_EXCLUSIONS,
        }
    }
}

/// Mapping from participant name to the names they must not give a gift to.
///
/// Serializes as a plain JSON object, e.g. `{"Percy": ["Edward"], "Edward": []}`.
/// Deserializing goes through [`GiftRestrictions::insert`], so names are
/// trimmed and blank or clashing names are rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct GiftRestrictions {
    entries: BTreeMap<String, Vec<String>>,
}

impl GiftRestrictions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a participant, replacing any exclusions previously recorded for them.
    ///
    /// Names are trimmed and blank exclusions are dropped. An exclusion naming
    /// someone who never joins the exchange is kept but has no effect.
    pub fn insert<N, I, E>(&mut self, name: N, exclusions: I) -> Result<()>
    where
        N: AsRef<str>,
        I: IntoIterator<Item = E>,
        E: AsRef<str>,
    {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(Error::invalid_input("participant name must not be empty"));
        }

        let exclusions = exclusions
            .into_iter()
            .map(|e| e.as_ref().trim().to_string())
            .filter(|e| !e.is_empty())
            .collect();
        self.entries.insert(name.to_string(), exclusions);
        Ok(())
    }

    /// Merges every participant of `other` into `self`; `other` wins on conflicts.
    pub fn extend(&mut self, other: GiftRestrictions) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn participants(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn exclusions(&self, name: &str) -> Option<&[String]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// The distinct other participants `name` excludes. Repeats, self
    /// exclusions and names outside the exchange are left out, as they never
    /// remove an edge from the graph.
    pub fn effective_exclusions(&self, name: &str) -> BTreeSet<&str> {
        self.entries
            .get(name)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(|&other| other != name && self.entries.contains_key(other))
            .collect()
    }

    /// Checks the participant count and each participant's effective
    /// exclusions against `limits`.
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        if self.entries.len() > limits.max_participants {
            return Err(Error::TooManyParticipants {
                count: self.entries.len(),
                max: limits.max_participants,
            });
        }

        for name in self.entries.keys() {
            let count = self.effective_exclusions(name).len();
            if count > limits.max_exclusions {
                return Err(Error::TooManyExclusions {
                    participant: name.clone(),
                    count,
                    max: limits.max_exclusions,
                });
            }
        }
        Ok(())
    }

    /// Parses `Name=Excluded,Other` into a name and its exclusions. A bare
    /// `Name` has no exclusions.
    pub fn parse_entry(entry: &str) -> Result<(String, Vec<String>)> {
        let (name, rest) = match entry.split_once('=') {
            Some((name, rest)) => (name, Some(rest)),
            None => (entry, None),
        };

        let name = name.trim();
        if name.is_empty() {
            return Err(Error::invalid_input(format!(
                "entry {:?} has no participant name",
                entry
            )));
        }

        let exclusions = rest
            .map(|rest| {
                rest.split(',')
                    .map(str::trim)
                    .filter(|e| !e.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok((name.to_string(), exclusions))
    }

    /// Reads restrictions from a JSON object of name to exclusion list.
    ///
    /// Fails if two keys name the same participant once trimmed, e.g. `"Bob"`
    /// and `" Bob"`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| Error::invalid_input(format!("malformed restrictions: {}", e)))?;
        GiftRestrictions::try_from(raw)
    }

    /// Builds the compatibility graph for these restrictions.
    pub fn graph(&self) -> CompatibilityGraph<String> {
        CompatibilityGraph::from_exclusions(
            self.entries
                .iter()
                .map(|(name, exclusions)| (name.clone(), exclusions.iter().cloned())),
        )
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for GiftRestrictions {
    type Error = Error;

    fn try_from(raw: BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut restrictions = GiftRestrictions::new();
        for (name, exclusions) in raw {
            if restrictions.entries.contains_key(name.trim()) {
                return Err(Error::invalid_input(format!(
                    "participant {:?} is listed more than once",
                    name.trim()
                )));
            }
            restrictions.insert(name, exclusions)?;
        }
        Ok(restrictions)
    }
}

impl From<GiftRestrictions> for BTreeMap<String, Vec<String>> {
    fn from(restrictions: GiftRestrictions) -> Self {
        restrictions.entries
    }
}

/// Collects entries as repeated [`GiftRestrictions::insert`] calls, except that
/// entries with a blank name are dropped without any error. Later entries for
/// the same name replace earlier ones. Use `insert` or [`TryFrom`] when bad
/// input must be reported.
impl<N: AsRef<str>> FromIterator<(N, Vec<N>)> for GiftRestrictions {
    fn from_iter<T: IntoIterator<Item = (N, Vec<N>)>>(iter: T) -> Self {
        let mut restrictions = GiftRestrictions::new();
        for (name, exclusions) in iter {
            // Only blank names are rejected by insert.
            let _ = restrictions.insert(name, exclusions);
        }
        restrictions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry() {
        assert_eq!(
            GiftRestrictions::parse_entry("Ross=Joey, Monica").unwrap(),
            ("Ross".to_string(), vec!["Joey".to_string(), "Monica".to_string()])
        );
        assert_eq!(
            GiftRestrictions::parse_entry("  Joey ").unwrap(),
            ("Joey".to_string(), vec![])
        );
        assert_eq!(
            GiftRestrictions::parse_entry("Rachel=").unwrap(),
            ("Rachel".to_string(), vec![])
        );
        assert_eq!(
            GiftRestrictions::parse_entry("Phoebe=,Mike,,").unwrap(),
            ("Phoebe".to_string(), vec!["Mike".to_string()])
        );
    }

    #[test]
    fn test_parse_entry_without_name() {
        assert!(matches!(
            GiftRestrictions::parse_entry("=Joey"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            GiftRestrictions::parse_entry("   "),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_insert_trims_and_replaces() {
        let mut r = GiftRestrictions::new();
        r.insert(" Bob ", ["Jane", " "]).unwrap();
        assert_eq!(r.exclusions("Bob"), Some(&["Jane".to_string()][..]));

        r.insert("Bob", Vec::<String>::new()).unwrap();
        assert_eq!(r.exclusions("Bob"), Some(&[][..]));
        assert_eq!(r.len(), 1);
        assert_eq!(r.exclusions("Jane"), None);
    }

    #[test]
    fn test_insert_rejects_blank_name() {
        let mut r = GiftRestrictions::new();
        assert!(matches!(
            r.insert("  ", ["Jane"]),
            Err(Error::InvalidInput(_))
        ));
        assert!(r.is_empty());
    }

    #[test]
    fn test_validate_limits() {
        let r: GiftRestrictions = vec![
            ("A", vec!["B", "C", "D"]),
            ("B", vec![]),
            ("C", vec![]),
            ("D", vec![]),
        ]
        .into_iter()
        .collect();
        assert!(r.validate(&Limits::default()).is_ok());

        let tight = Limits {
            max_participants: 3,
            max_exclusions: 3,
        };
        assert_eq!(
            r.validate(&tight),
            Err(Error::TooManyParticipants { count: 4, max: 3 })
        );

        let strict = Limits {
            max_participants: 10,
            max_exclusions: 2,
        };
        assert_eq!(
            r.validate(&strict),
            Err(Error::TooManyExclusions {
                participant: "A".to_string(),
                count: 3,
                max: 2,
            })
        );
    }

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_participants, 100);
        assert_eq!(limits.max_exclusions, 3);
    }

    #[test]
    fn test_from_json() {
        let r = GiftRestrictions::from_json(r#"{"Percy": ["Edward"], "Edward": []}"#).unwrap();
        assert_eq!(r.participants().collect::<Vec<_>>(), vec!["Edward", "Percy"]);
        assert_eq!(r.exclusions("Percy"), Some(&["Edward".to_string()][..]));

        assert!(matches!(
            GiftRestrictions::from_json("[1, 2]"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            GiftRestrictions::from_json(r#"{"": []}"#),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_names_that_clash_once_trimmed() {
        let err = GiftRestrictions::from_json(r#"{"Bob": [], " Bob": ["Jane"], "Jane": []}"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("Bob")));
    }

    #[test]
    fn test_deserialize_goes_through_insert() {
        let r: GiftRestrictions =
            serde_json::from_str(r#"{"  Ann ": [" Bo ", ""], "Bo": []}"#).unwrap();
        assert_eq!(r.participants().collect::<Vec<_>>(), vec!["Ann", "Bo"]);
        assert_eq!(r.exclusions("Ann"), Some(&["Bo".to_string()][..]));

        assert!(serde_json::from_str::<GiftRestrictions>(r#"{"": [], "Bo": []}"#).is_err());
        assert!(serde_json::from_str::<GiftRestrictions>(r#"{"Bo": [], "Bo ": []}"#).is_err());
    }

    #[test]
    fn test_validate_counts_effective_exclusions() {
        let r: GiftRestrictions = vec![
            ("A", vec!["B", "B", "B", "B", "A", "Stranger"]),
            ("B", vec![]),
        ]
        .into_iter()
        .collect();
        let strict = Limits {
            max_participants: 10,
            max_exclusions: 1,
        };
        assert_eq!(r.effective_exclusions("A").into_iter().collect::<Vec<_>>(), vec!["B"]);
        assert!(r.effective_exclusions("Nobody").is_empty());
        assert!(r.validate(&strict).is_ok());
    }

    #[test]
    fn test_collect_drops_blank_names() {
        let r: GiftRestrictions = vec![(" ", vec!["Bob"]), ("Bob", vec![])]
            .into_iter()
            .collect();
        assert_eq!(r.participants().collect::<Vec<_>>(), vec!["Bob"]);
    }

    #[test]
    fn test_json_round_trip_shape() {
        let r: GiftRestrictions = vec![("Bob", vec!["Jane"]), ("Jane", vec![])]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"Bob":["Jane"],"Jane":[]}"#);
    }

    #[test]
    fn test_graph_from_restrictions() {
        let r: GiftRestrictions = vec![("Percy", vec!["Edward", "Nobody"]), ("Edward", vec![])]
            .into_iter()
            .collect();
        let g = r.graph();
        assert_eq!(g.len(), 2);
        assert!(!g.has_edge(&"Percy".to_string(), &"Edward".to_string()));
        assert!(g.has_edge(&"Edward".to_string(), &"Percy".to_string()));
    }

    #[test]
    fn test_extend_overrides() {
        let mut a: GiftRestrictions = vec![("Bob", vec!["Jane"])].into_iter().collect();
        let b: GiftRestrictions = vec![("Bob", vec![]), ("Jane", vec![])].into_iter().collect();
        a.extend(b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.exclusions("Bob"), Some(&[][..]));
    }
}
