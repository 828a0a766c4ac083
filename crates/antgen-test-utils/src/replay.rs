//! A minimal turmite interpreter for checking compiled programs.

use antgen_core::{NextState, Point, RuleProgram, StateId};
use antgen_space::GridSpec;

/// One cell write performed during a replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Write {
    pub at: Point,
    pub color: u32,
}

/// Outcome of [`replay`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    /// Cell the ant stopped on.
    pub position: Point,
    /// Rules executed.
    pub steps: usize,
    /// Whether the run ended on the halt sentinel rather than a missing
    /// state or the step limit.
    pub halted: bool,
    /// State the ant was in (or would enter) when the run ended.
    pub last_state: Option<StateId>,
    /// Every write, in order.
    pub writes: Vec<Write>,
    /// Every position visited after a step, in order.
    pub trail: Vec<Point>,
}

/// Run `program` from `start` in `first_state`.
///
/// Each step executes the first rule of the current state: write its
/// color to the current cell, move one cell (wrapped or clamped by
/// `spec`), enter its next state. The run ends on the halt sentinel, on a
/// state with no rules, or after `program.rule_count() + 1` steps so a
/// cyclic program cannot spin forever.
pub fn replay(program: &RuleProgram, spec: &GridSpec, start: Point, first_state: StateId) -> Replay {
    let limit = program.rule_count() + 1;
    let mut out = Replay {
        position: spec.normalize(start),
        steps: 0,
        halted: false,
        last_state: Some(first_state),
        writes: Vec::new(),
        trail: Vec::new(),
    };
    let mut state = first_state;
    while out.steps < limit {
        let Some(rule) = program.get(state).and_then(|rules| rules.first()) else {
            break;
        };
        out.writes.push(Write {
            at: out.position,
            color: rule.write_color,
        });
        out.position = spec.step(out.position, rule.step);
        out.trail.push(out.position);
        out.steps += 1;
        match rule.next_state {
            NextState::State(next) => {
                state = next;
                out.last_state = Some(next);
            }
            NextState::Halt => {
                out.halted = true;
                out.last_state = None;
                break;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use antgen_core::{Move, Rule};
    use antgen_space::EdgeBehavior;

    #[test]
    fn replays_until_halt() {
        let spec = GridSpec::new(4, 4, EdgeBehavior::Wrap).unwrap();
        let mut program = RuleProgram::new();
        program.insert(
            0,
            Rule {
                write_color: 2,
                step: Move::NegativeX,
                next_state: NextState::State(1),
            },
        );
        program.insert(
            1,
            Rule {
                write_color: 3,
                step: Move::NegativeY,
                next_state: NextState::Halt,
            },
        );
        let run = replay(&program, &spec, Point::new(0, 0), 0);
        assert!(run.halted);
        assert_eq!(run.steps, 2);
        assert_eq!(run.position, Point::new(3, 3));
        assert_eq!(
            run.writes,
            vec![
                Write { at: Point::new(0, 0), color: 2 },
                Write { at: Point::new(3, 0), color: 3 },
            ]
        );
    }

    #[test]
    fn missing_state_stops_without_halting() {
        let spec = GridSpec::new(4, 4, EdgeBehavior::Clamp).unwrap();
        let run = replay(&RuleProgram::new(), &spec, Point::new(1, 1), 5);
        assert!(!run.halted);
        assert_eq!(run.steps, 0);
        assert_eq!(run.last_state, Some(5));
    }
}
