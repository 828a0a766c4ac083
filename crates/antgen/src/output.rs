//! JSON output in the format the turmite simulator loads.

use antgen_core::RuleProgram;

/// Compact JSON: `{"0":[{"writeColor":2,"move":">","nextState":1}],...}`.
pub fn program_json(program: &RuleProgram) -> Result<String, serde_json::Error> {
    serde_json::to_string(program)
}

/// Indented JSON, for files meant to be read by people.
pub fn program_json_pretty(program: &RuleProgram) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(program)
}

/// Parse a program previously written by [`program_json`].
pub fn parse_program(json: &str) -> Result<RuleProgram, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use antgen_core::{Move, NextState, Rule};

    #[test]
    fn compact_output_is_exact() {
        let mut p = RuleProgram::new();
        p.insert(
            0,
            Rule {
                write_color: 2,
                step: Move::PositiveX,
                next_state: NextState::State(1),
            },
        );
        p.insert(
            1,
            Rule {
                write_color: 0,
                step: Move::NegativeY,
                next_state: NextState::Halt,
            },
        );
        assert_eq!(
            program_json(&p).unwrap(),
            r#"{"0":[{"writeColor":2,"move":">","nextState":1}],"1":[{"writeColor":0,"move":"^","nextState":-1}]}"#
        );
        assert_eq!(parse_program(&program_json_pretty(&p).unwrap()).unwrap(), p);
    }

    #[test]
    fn bad_next_state_is_rejected() {
        let err = parse_program(r#"{"0":[{"writeColor":1,"move":"<","nextState":-2}]}"#);
        assert!(err.is_err());
    }
}
