//! Turmite rules and the rule program they are collected into.

use crate::direction::Move;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;

/// Index of a turmite state.
pub type StateId = u32;

/// Where the ant goes after executing a rule.
///
/// Serialized as a plain integer: a state id, or `-1` for [`NextState::Halt`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum NextState {
    /// Continue in the given state.
    State(StateId),
    /// Terminal sentinel: the simulator stops.
    Halt,
}

impl NextState {
    /// Wire value of the halt sentinel.
    pub const HALT_SENTINEL: i64 = -1;

    /// The state id, or `None` for [`NextState::Halt`].
    pub fn state(self) -> Option<StateId> {
        match self {
            NextState::State(s) => Some(s),
            NextState::Halt => None,
        }
    }
}

impl From<NextState> for i64 {
    fn from(next: NextState) -> Self {
        match next {
            NextState::State(s) => i64::from(s),
            NextState::Halt => NextState::HALT_SENTINEL,
        }
    }
}

impl TryFrom<i64> for NextState {
    type Error = String;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        if v == NextState::HALT_SENTINEL {
            return Ok(NextState::Halt);
        }
        StateId::try_from(v)
            .map(NextState::State)
            .map_err(|_| format!("next state {v} is neither a valid state id nor -1"))
    }
}

impl fmt::Display for NextState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextState::State(s) => write!(f, "{s}"),
            NextState::Halt => f.write_str("halt"),
        }
    }
}

/// A single turmite instruction: write a color, step, change state.
///
/// `write_color` is written to the cell the ant is *leaving*.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    /// Color index written to the current cell before moving.
    pub write_color: u32,
    /// Unit step taken after writing.
    #[serde(rename = "move")]
    pub step: Move,
    /// State entered after the step.
    pub next_state: NextState,
}

/// Rules emitted for one state. Compiled programs always hold exactly one.
pub type RuleList = SmallVec<[Rule; 1]>;

/// Mapping from state to the rules executed in that state.
///
/// Serializes as a JSON object keyed by state number, which is the format
/// the external turmite simulator consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleProgram {
    states: BTreeMap<StateId, RuleList>,
}

impl RuleProgram {
    /// An empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the single rule for a fresh state.
    ///
    /// Returns `false` and leaves the program untouched if `state` already
    /// has rules.
    pub fn insert(&mut self, state: StateId, rule: Rule) -> bool {
        if self.states.contains_key(&state) {
            return false;
        }
        let mut list = RuleList::new();
        list.push(rule);
        self.states.insert(state, list);
        true
    }

    /// Append a rule to a state's list, creating the state if needed.
    ///
    /// This is the entry point for externally authored branching rules;
    /// the compiler itself only uses [`insert`](Self::insert).
    pub fn push_rule(&mut self, state: StateId, rule: Rule) {
        self.states.entry(state).or_default().push(rule);
    }

    /// Rules for `state`, if any.
    pub fn get(&self, state: StateId) -> Option<&[Rule]> {
        self.states.get(&state).map(|l| l.as_slice())
    }

    /// Whether `state` has any rules.
    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains_key(&state)
    }

    /// Number of states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// `true` if the program has no states.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Total number of rules across all states.
    pub fn rule_count(&self) -> usize {
        self.states.values().map(|l| l.len()).sum()
    }

    /// Iterate states in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &[Rule])> + '_ {
        self.states.iter().map(|(&s, l)| (s, l.as_slice()))
    }

    /// Highest state that has rules.
    pub fn last_state(&self) -> Option<StateId> {
        self.states.keys().next_back().copied()
    }

    /// Mutable access to the last rule of `state`.
    pub fn last_rule_mut(&mut self, state: StateId) -> Option<&mut Rule> {
        self.states.get_mut(&state).and_then(|l| l.last_mut())
    }

    /// Lowest state in `range` that already has rules.
    pub fn first_occupied(&self, range: Range<StateId>) -> Option<StateId> {
        self.states.range(range).next().map(|(&s, _)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(color: u32, step: Move, next: StateId) -> Rule {
        Rule {
            write_color: color,
            step,
            next_state: NextState::State(next),
        }
    }

    #[test]
    fn insert_refuses_occupied_state() {
        let mut p = RuleProgram::new();
        assert!(p.insert(3, rule(1, Move::PositiveX, 4)));
        assert!(!p.insert(3, rule(2, Move::NegativeX, 4)));
        assert_eq!(p.get(3).unwrap()[0].write_color, 1);
    }

    #[test]
    fn push_rule_builds_branching_lists() {
        let mut p = RuleProgram::new();
        p.push_rule(0, rule(0, Move::PositiveX, 1));
        p.push_rule(0, rule(1, Move::NegativeY, 2));
        assert_eq!(p.len(), 1);
        assert_eq!(p.rule_count(), 2);
    }

    #[test]
    fn last_rule_mut_targets_one_state() {
        let mut p = RuleProgram::new();
        p.insert(5, rule(0, Move::PositiveX, 6));
        p.insert(2, rule(0, Move::PositiveX, 3));
        p.last_rule_mut(5).unwrap().next_state = NextState::Halt;
        assert!(p.last_rule_mut(4).is_none());
        assert_eq!(p.last_state(), Some(5));
        assert_eq!(p.get(5).unwrap()[0].next_state, NextState::Halt);
        assert_eq!(p.get(2).unwrap()[0].next_state, NextState::State(3));
    }

    #[test]
    fn first_occupied_respects_half_open_range() {
        let mut p = RuleProgram::new();
        p.insert(5, rule(0, Move::PositiveX, 6));
        p.insert(9, rule(0, Move::PositiveX, 10));
        assert_eq!(p.first_occupied(0..5), None);
        assert_eq!(p.first_occupied(0..6), Some(5));
        assert_eq!(p.first_occupied(6..20), Some(9));
    }

    #[test]
    fn serializes_in_simulator_format() {
        let mut p = RuleProgram::new();
        p.insert(0, rule(2, Move::PositiveX, 1));
        p.insert(
            1,
            Rule {
                write_color: 0,
                step: Move::NegativeY,
                next_state: NextState::Halt,
            },
        );
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(
            json,
            r#"{"0":[{"writeColor":2,"move":">","nextState":1}],"1":[{"writeColor":0,"move":"^","nextState":-1}]}"#
        );
        let back: RuleProgram = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn next_state_rejects_other_negatives() {
        assert!(NextState::try_from(-2).is_err());
        assert_eq!(NextState::try_from(-1).unwrap(), NextState::Halt);
        assert_eq!(NextState::try_from(7).unwrap(), NextState::State(7));
    }
}
