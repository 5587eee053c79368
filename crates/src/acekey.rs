//! Keyboard shortcut assignment for named items.
//!
//! Display names are normalized into words, each item gets an ordered list
//! of candidate branches, conflicts are resolved round by round across all
//! items, and the winners are trimmed to the shortest prefix that keeps the
//! whole set unique and prefix-free. The resulting [`Assignment`] feeds the
//! incremental [`matcher`].

pub mod allocate;
pub mod candidates;
pub mod matcher;
pub mod normalize;
pub mod shorten;

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

pub use matcher::{InputState, KeyInput, MatchOutcome, step, step_all};

/// An item that needs a keybinding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedEntity<Id> {
    pub id: Id,
    pub display_name: String,
}

impl<Id> NamedEntity<Id> {
    pub fn new(id: Id, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}

/// Final item → keybinding map, kept in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment<Id> {
    bindings: Vec<(Id, String)>,
}

impl<Id> Default for Assignment<Id> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<Id> FromIterator<(Id, String)> for Assignment<Id> {
    fn from_iter<T: IntoIterator<Item = (Id, String)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl<Id> Assignment<Id> {
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Id, &str)> {
        self.bindings.iter().map(|(id, key)| (id, key.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|(_, key)| key.as_str())
    }

    /// The item bound to exactly `key`.
    pub fn entity_for(&self, key: &str) -> Option<&Id> {
        self.bindings
            .iter()
            .find(|(_, k)| k == key)
            .map(|(id, _)| id)
    }

    /// True when some binding is strictly longer than `prefix` and starts with it.
    pub fn has_extension(&self, prefix: &str) -> bool {
        self.keys()
            .any(|k| k.len() > prefix.len() && k.starts_with(prefix))
    }

    /// Items whose binding starts with `prefix`, in input order.
    pub fn completions<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a Id, &'a str)> {
        self.iter().filter(move |(_, key)| key.starts_with(prefix))
    }
}

impl<Id: PartialEq> Assignment<Id> {
    pub fn get(&self, id: &Id) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(bound, _)| bound == id)
            .map(|(_, key)| key.as_str())
    }
}

impl<Id: Eq + Hash + Clone> Assignment<Id> {
    pub fn to_map(&self) -> HashMap<Id, String> {
        self.bindings.iter().cloned().collect()
    }
}

/// True when either string is a prefix of the other (equality included).
#[inline]
pub(crate) fn prefix_related(a: &str, b: &str) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

/// Runs the whole pipeline over `entities`.
///
/// Deterministic for a given input order. Items whose name has no
/// alphanumeric characters, duplicates a name earlier in the list, or
/// would be shadowed by another binding are absent from the result.
pub fn assign_keybindings<Id: Clone>(entities: &[NamedEntity<Id>]) -> Assignment<Id> {
    let candidates: Vec<candidates::Candidates> = entities
        .iter()
        .map(|e| candidates::generate(&normalize::normalize(&e.display_name)))
        .collect();

    let mut held = allocate::allocate(&candidates);
    allocate::repair_prefixes(&candidates, &mut held);

    let mut bindings: Vec<Option<String>> = held
        .into_iter()
        .map(|h| h.map(|h| h.branch))
        .collect();
    let floors: Vec<usize> = candidates.iter().map(|c| c.min_len).collect();
    shorten::shorten(&mut bindings, &floors);

    let assignment: Assignment<Id> = entities
        .iter()
        .zip(bindings)
        .filter_map(|(e, key)| key.map(|key| (e.id.clone(), key)))
        .collect();
    debug!(
        "assigned {} of {} keybindings",
        assignment.len(),
        entities.len()
    );
    assignment
}

/// Convenience wrapper keyed by position in `names`.
pub fn assign_names<S: AsRef<str>>(names: &[S]) -> Assignment<usize> {
    let entities: Vec<NamedEntity<usize>> = names
        .iter()
        .enumerate()
        .map(|(i, n)| NamedEntity::new(i, n.as_ref()))
        .collect();
    assign_keybindings(&entities)
}

#[cfg(test)]
mod acekey_tests {
    use super::*;
    use regex::Regex;

    const CORPUS: &[&str] = &[
        "General",
        "Comics",
        "Communism",
        "Comedians",
        "Apple",
        "Banana",
        "J",
        "Jazz",
        "Media - LotR",
        "The World",
        "Summer 2019",
        "Summer 2020",
        "Summer in the City",
        "Cat",
        "Cat",
        "Catalog",
        "Cats & Dogs",
        "!!!",
        "Wedding",
        "Weddings",
        "wedding photos",
        "X",
        "x ray",
        "Xmas",
        "Birthday Party",
        "Birthday",
        "Road Trip - Iceland",
        "Road Trip - Italy",
        "Screenshots",
        "Scans",
        "2021",
        "2",
    ];

    fn entities(names: &[&str]) -> Vec<NamedEntity<u32>> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| NamedEntity::new(i as u32 + 1, *n))
            .collect()
    }

    fn assign(names: &[&str]) -> HashMap<u32, String> {
        assign_keybindings(&entities(names)).to_map()
    }

    fn expected(pairs: &[(u32, &str)]) -> HashMap<u32, String> {
        pairs.iter().map(|(id, k)| (*id, k.to_string())).collect()
    }

    #[test]
    fn single_long_word_keeps_two_characters() {
        assert_eq!(assign(&["general"]), expected(&[(1, "ge")]));
    }

    #[test]
    fn shared_prefixes_settle_at_four_characters() {
        assert_eq!(
            assign(&["Comics", "Communism", "Comedians"]),
            expected(&[(1, "comi"), (2, "comm"), (3, "come")])
        );
    }

    #[test]
    fn distinct_initials_get_single_letters() {
        assert_eq!(assign(&["Apple", "Banana"]), expected(&[(1, "a"), (2, "b")]));
    }

    #[test]
    fn single_character_name_next_to_a_word() {
        assert_eq!(assign(&["J", "Jazz"]), expected(&[(1, "jj"), (2, "ja")]));
    }

    #[test]
    fn punctuation_is_a_separator() {
        assert_eq!(assign(&["Media - LotR"]), expected(&[(1, "m")]));
    }

    #[test]
    fn unassignable_names_are_absent() {
        let a = assign(&["!!!", "Cat", "Cat"]);
        assert_eq!(a, expected(&[(2, "c")]));
    }

    #[test]
    fn corpus_bindings_are_unique_and_prefix_free() {
        let a = assign_keybindings(&entities(CORPUS));
        let keys: Vec<&str> = a.keys().collect();
        for (i, x) in keys.iter().enumerate() {
            for (j, y) in keys.iter().enumerate() {
                if i != j {
                    assert!(!y.starts_with(x), "{x:?} is a prefix of {y:?}");
                }
            }
        }
    }

    #[test]
    fn corpus_bindings_are_lowercase_alphanumeric() {
        let re = Regex::new(r"^[a-z0-9]+$").unwrap();
        for key in assign_keybindings(&entities(CORPUS)).keys() {
            assert!(re.is_match(key), "unexpected key {key:?}");
        }
    }

    #[test]
    fn corpus_bindings_are_minimal() {
        let ents = entities(CORPUS);
        let a = assign_keybindings(&ents);
        for (id, key) in a.iter() {
            let name = &ents[*id as usize - 1].display_name;
            let floor = candidates::generate(&normalize::normalize(name)).min_len;
            if key.len() <= floor {
                continue;
            }
            let shorter = &key[..key.len() - 1];
            let clash = a
                .iter()
                .any(|(other, k)| other != id && prefix_related(shorter, k));
            assert!(clash, "{key:?} for {name:?} could be {shorter:?}");
        }
    }

    #[test]
    fn corpus_coverage_only_misses_unresolvable_names() {
        let a = assign_keybindings(&entities(CORPUS));
        let missing: Vec<&str> = CORPUS
            .iter()
            .enumerate()
            .filter(|(i, _)| a.get(&(*i as u32 + 1)).is_none())
            .map(|(_, n)| *n)
            .collect();
        // a repeated name, a punctuation-only name, and two names shadowed by a shorter one
        assert_eq!(missing, vec!["Cat", "Catalog", "!!!", "Weddings"]);
    }

    #[test]
    fn pipeline_is_deterministic() {
        let first = assign_keybindings(&entities(CORPUS));
        for _ in 0..5 {
            assert_eq!(assign_keybindings(&entities(CORPUS)), first);
        }
    }

    #[test]
    fn typing_each_binding_selects_its_entity() {
        let a = assign_keybindings(&entities(CORPUS));
        for (id, key) in a.iter() {
            let mut state = InputState::new();
            let mut chars = key.chars().peekable();
            while let Some(ch) = chars.next() {
                let outcome = step(&a, &mut state, KeyInput::Char(ch));
                if chars.peek().is_some() {
                    assert!(matches!(outcome, MatchOutcome::Partial(_)), "{key:?}: {outcome:?}");
                } else {
                    assert_eq!(outcome, MatchOutcome::Matched(id));
                }
            }
        }
    }

    #[test]
    fn characters_outside_every_binding_are_rejected() {
        let a = assign_keybindings(&entities(CORPUS));
        let mut state = InputState::new();
        for ch in ['-', ' ', 'Z', '?'] {
            assert_eq!(
                step(&a, &mut state, KeyInput::Char(ch)),
                MatchOutcome::Rejected { ch, buffer: String::new() }
            );
        }
    }

    #[test]
    fn assign_names_uses_positions() {
        let a = assign_names(&["Apple", "Banana"]);
        assert_eq!(a.get(&0), Some("a"));
        assert_eq!(a.get(&1), Some("b"));
        assert_eq!(a.entity_for("b"), Some(&1));
    }

    #[test]
    fn completions_follow_input_order() {
        let a = assign_names(&["Comics", "Communism", "Comedians", "Apple"]);
        let ids: Vec<usize> = a.completions("com").map(|(id, _)| *id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(a.has_extension("com"));
        assert!(!a.has_extension("comm"));
    }
}
