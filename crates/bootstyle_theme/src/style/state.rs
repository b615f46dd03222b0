//! Widget states and state predicates
//!
//! A [`StateSpec`] is a conjunction of states, each possibly negated. Its
//! text form is the one the toolkit uses: `"active !selected"`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use smallvec::SmallVec;

/// A toolkit widget state
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum State {
    Active,
    Alternate,
    Background,
    Disabled,
    Focus,
    Hover,
    Invalid,
    Pressed,
    Readonly,
    Selected,
}

impl State {
    pub const ALL: [State; 10] = [
        State::Active,
        State::Alternate,
        State::Background,
        State::Disabled,
        State::Focus,
        State::Hover,
        State::Invalid,
        State::Pressed,
        State::Readonly,
        State::Selected,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Alternate => "alternate",
            Self::Background => "background",
            Self::Disabled => "disabled",
            Self::Focus => "focus",
            Self::Hover => "hover",
            Self::Invalid => "invalid",
            Self::Pressed => "pressed",
            Self::Readonly => "readonly",
            Self::Selected => "selected",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for State {
    type Err = InvalidStateSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        State::ALL
            .into_iter()
            .find(|state| state.name() == s)
            .ok_or_else(|| InvalidStateSpec(s.to_string()))
    }
}

/// A state name that the toolkit does not know
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown widget state: {0}")]
pub struct InvalidStateSpec(pub String);

/// One term of a predicate
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct StateTerm {
    pub state: State,
    pub negated: bool,
}

/// Conjunction of possibly negated states.
///
/// The empty predicate matches every state set.
#[derive(Clone, Debug, Default, Hash, Eq, PartialEq)]
pub struct StateSpec {
    terms: SmallVec<[StateTerm; 2]>,
}

impl StateSpec {
    /// Require `state`
    pub fn and(mut self, state: State) -> Self {
        self.terms.push(StateTerm { state, negated: false });
        self
    }

    /// Require the absence of `state`
    pub fn and_not(mut self, state: State) -> Self {
        self.terms.push(StateTerm { state, negated: true });
        self
    }

    /// Predicate matching widgets that are not in `state`
    pub fn not(state: State) -> Self {
        Self::default().and_not(state)
    }

    pub fn terms(&self) -> &[StateTerm] {
        &self.terms
    }

    /// Does a widget whose current states are `active` satisfy this predicate?
    pub fn matches(&self, active: &[State]) -> bool {
        self.terms
            .iter()
            .all(|term| active.contains(&term.state) != term.negated)
    }
}

impl From<State> for StateSpec {
    fn from(state: State) -> Self {
        Self::default().and(state)
    }
}

impl fmt::Display for StateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            if term.negated {
                f.write_str("!")?;
            }
            f.write_str(term.state.name())?;
        }
        Ok(())
    }
}

impl FromStr for StateSpec {
    type Err = InvalidStateSpec;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().try_fold(Self::default(), |spec, token| {
            Ok(match token.strip_prefix('!') {
                Some(name) => spec.and_not(name.parse()?),
                None => spec.and(token.parse()?),
            })
        })
    }
}

impl Serialize for StateSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
