//! JSON dump of an automaton.

use serde::Serialize;

use crate::automaton::{Automaton, StateId, Symbol};

#[derive(Debug, Clone, Serialize)]
pub struct AutomatonDto<'a> {
    pub initial: &'a str,
    pub alphabet: Vec<char>,
    pub states: Vec<StateDto<'a>>,
    pub transitions: Vec<TransitionDto<'a>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateDto<'a> {
    pub name: &'a str,
    #[serde(rename = "final")]
    pub is_final: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransitionDto<'a> {
    pub from: &'a str,
    /// `None` for epsilon.
    pub symbol: Option<char>,
    pub to: &'a str,
}

impl<'a> From<&'a Automaton> for AutomatonDto<'a> {
    fn from(automaton: &'a Automaton) -> Self {
        let name = move |id: StateId| automaton.state(id).name();
        Self {
            initial: name(automaton.initial()),
            alphabet: automaton.alphabet().iter().copied().collect(),
            states: automaton
                .states()
                .iter()
                .map(|s| StateDto {
                    name: s.name(),
                    is_final: s.is_final(),
                })
                .collect(),
            transitions: automaton
                .transitions()
                .iter()
                .map(|t| TransitionDto {
                    from: name(t.from),
                    symbol: match t.symbol {
                        Symbol::Epsilon => None,
                        Symbol::Char(c) => Some(c),
                    },
                    to: name(t.to),
                })
                .collect(),
        }
    }
}

pub fn to_json(automaton: &Automaton, pretty: bool) -> serde_json::Result<String> {
    let dto = AutomatonDto::from(automaton);
    if pretty {
        serde_json::to_string_pretty(&dto)
    } else {
        serde_json::to_string(&dto)
    }
}
