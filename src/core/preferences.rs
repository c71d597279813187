use std::collections::{HashMap, HashSet};
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, DeserializeSeed, MapAccess, SeqAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::error::MatchError;
use crate::core::types::Player;
use crate::utils::validation::{check_player_limit, MAX_PLAYERS};

/// Ranked preference lists for one side of an instance.
///
/// Players keep the order in which they were inserted; that order is the
/// enumeration order the solvers use when picking the next free player, so
/// results are deterministic. Each list is ordered from most to least
/// preferred and may not repeat a player.
#[derive(Debug, Clone)]
pub struct PreferenceTable<P: Player> {
    entries: Vec<(P, Vec<P>)>,

    /// Index: player -> position in entries
    index: HashMap<P, usize>,
}

impl<P: Player> PreferenceTable<P> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build a table from `(player, preferences)` pairs, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::DuplicatePlayer` if a player is listed twice, or
    /// `MatchError::DuplicatePreference` if a list repeats an entry.
    pub fn from_entries<I>(entries: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = (P, Vec<P>)>,
    {
        let mut table = Self::new();
        for (player, preferences) in entries {
            table.insert(player, preferences)?;
        }
        Ok(table)
    }

    /// Append a player and its preference list.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::DuplicatePlayer` if the player is already present,
    /// or `MatchError::DuplicatePreference` if the list repeats an entry.
    pub fn insert(&mut self, player: P, preferences: Vec<P>) -> Result<(), MatchError> {
        if self.index.contains_key(&player) {
            return Err(MatchError::DuplicatePlayer {
                player: player.to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(preferences.len());
        for other in &preferences {
            if !seen.insert(other) {
                return Err(MatchError::DuplicatePreference {
                    player: player.to_string(),
                    duplicate: other.to_string(),
                });
            }
        }

        self.index.insert(player.clone(), self.entries.len());
        self.entries.push((player, preferences));
        Ok(())
    }

    /// Preference list of a player, most preferred first
    pub fn get(&self, player: &P) -> Option<&[P]> {
        self.index
            .get(player)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Position of `other` in `player`'s list (0 = most preferred)
    pub fn rank(&self, player: &P, other: &P) -> Option<usize> {
        self.get(player)?.iter().position(|p| p == other)
    }

    /// Whether `player` has a list in this table
    pub fn contains(&self, player: &P) -> bool {
        self.index.contains_key(player)
    }

    /// Players in insertion order
    pub fn players(&self) -> impl Iterator<Item = &P> + '_ {
        self.entries.iter().map(|(player, _)| player)
    }

    /// `(player, preferences)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&P, &[P])> + '_ {
        self.entries
            .iter()
            .map(|(player, prefs)| (player, prefs.as_slice()))
    }

    /// Number of players in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: Player> Default for PreferenceTable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Player> PartialEq for PreferenceTable<P> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<P: Player> Eq for PreferenceTable<P> {}

impl<P: Player + Serialize> Serialize for PreferenceTable<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (player, prefs) in &self.entries {
            map.serialize_entry(player, prefs)?;
        }
        map.end()
    }
}

struct PreferenceTableVisitor<P>(PhantomData<P>);

impl<'de, P: Player + Deserialize<'de>> Visitor<'de> for PreferenceTableVisitor<P> {
    type Value = PreferenceTable<P>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map from player to a ranked list of players")
    }

    // Entries are visited in document order, which is what keeps the table
    // ordered. Limits are enforced before each entry is stored.
    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = PreferenceTable::new();
        while let Some(player) = access.next_key::<P>()? {
            if let Some(msg) = check_player_limit(table.len() + 1) {
                return Err(de::Error::custom(msg));
            }
            let prefs = access.next_value_seed(PreferenceListSeed(PhantomData))?;
            table
                .insert(player, prefs)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(table)
    }
}

/// Decodes one preference list, refusing lists longer than [`MAX_PLAYERS`]
struct PreferenceListSeed<P>(PhantomData<P>);

impl<'de, P: Deserialize<'de>> DeserializeSeed<'de> for PreferenceListSeed<P> {
    type Value = Vec<P>;

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_seq(self)
    }
}

impl<'de, P: Deserialize<'de>> Visitor<'de> for PreferenceListSeed<P> {
    type Value = Vec<P>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a ranked list of players")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut prefs = Vec::new();
        while let Some(other) = access.next_element()? {
            if prefs.len() == MAX_PLAYERS {
                return Err(de::Error::custom(format!(
                    "Preference list exceeds maximum of {MAX_PLAYERS} players"
                )));
            }
            prefs.push(other);
        }
        Ok(prefs)
    }
}

impl<'de, P: Player + Deserialize<'de>> Deserialize<'de> for PreferenceTable<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PreferenceTableVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> PreferenceTable<&'static str> {
        PreferenceTable::from_entries([
            ("C", vec!["E", "D", "F"]),
            ("A", vec!["D", "E", "F"]),
            ("B", vec!["D", "F"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_insertion_order_is_kept() {
        let prefs = table();
        let players: Vec<_> = prefs.players().copied().collect();
        assert_eq!(players, vec!["C", "A", "B"]);
        assert_eq!(prefs.len(), 3);
        assert!(!prefs.is_empty());
    }

    #[test]
    fn test_lookup_and_rank() {
        let prefs = table();
        assert_eq!(prefs.get(&"B"), Some(&["D", "F"][..]));
        assert_eq!(prefs.rank(&"A", &"F"), Some(2));
        assert_eq!(prefs.rank(&"B", &"E"), None);
        assert_eq!(prefs.rank(&"Q", &"E"), None);
        assert!(prefs.contains(&"C"));
        assert!(!prefs.contains(&"D"));
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let err = PreferenceTable::from_entries([("A", vec!["D"]), ("A", vec!["E"])]).unwrap_err();
        assert_eq!(
            err,
            MatchError::DuplicatePlayer {
                player: "A".to_string()
            }
        );
    }

    #[test]
    fn test_duplicate_preference_rejected() {
        let mut prefs = PreferenceTable::new();
        let err = prefs.insert("A", vec!["D", "E", "D"]).unwrap_err();
        assert!(matches!(err, MatchError::DuplicatePreference { ref duplicate, .. } if duplicate == "D"));
        assert!(prefs.is_empty());
    }

    #[test]
    fn test_json_keeps_document_order() {
        let json = r#"{"Z": ["X"], "A": ["Y", "X"], "M": []}"#;
        let prefs: PreferenceTable<String> = serde_json::from_str(json).unwrap();

        let players: Vec<_> = prefs.players().map(String::as_str).collect();
        assert_eq!(players, vec!["Z", "A", "M"]);
        assert_eq!(
            serde_json::to_string(&prefs).unwrap(),
            r#"{"Z":["X"],"A":["Y","X"],"M":[]}"#
        );
    }

    #[test]
    fn test_json_table_over_limit_rejected() {
        let entries: Vec<String> = (0..=MAX_PLAYERS).map(|i| format!(r#""P{i}": []"#)).collect();
        let json = format!("{{{}}}", entries.join(","));

        let err = serde_json::from_str::<PreferenceTable<String>>(&json).unwrap_err();
        assert!(err.to_string().contains("Too many players: 100001"));
    }

    #[test]
    fn test_json_list_over_limit_rejected() {
        let names: Vec<String> = (0..=MAX_PLAYERS).map(|i| format!(r#""R{i}""#)).collect();
        let json = format!(r#"{{"A": [{}]}}"#, names.join(","));

        let err = serde_json::from_str::<PreferenceTable<String>>(&json).unwrap_err();
        assert!(err.to_string().contains("Preference list exceeds maximum of 100000 players"));
    }

    #[test]
    fn test_json_duplicate_entry_rejected() {
        let json = r#"{"A": ["X", "X"]}"#;
        let result: Result<PreferenceTable<String>, _> = serde_json::from_str(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("ranks X more than once"));
    }
}
