//! Tour to rule program compilation.

use crate::epilogue::alignment;
use crate::error::CompileError;
use antgen_core::{Heading, NextState, Point, Rule, RuleProgram, StateId};
use antgen_space::GridContext;
use antgen_tour::Tour;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-compilation settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// State id of the first emitted rule.
    pub start_state: StateId,
    /// Final heading. `None` uses the heading of the grid's end anchor.
    pub heading: Option<Heading>,
    /// Make the final rule halt the simulator.
    pub stop_after_done: bool,
}

impl CompileOptions {
    /// Set the final heading from its name (`right`, `left`, `up`, `down`).
    pub fn with_heading_name(mut self, name: &str) -> Result<Self, CompileError> {
        self.heading = Some(name.parse()?);
        Ok(self)
    }
}

/// Counts describing one compilation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CompileSummary {
    /// State of the first emitted rule.
    pub first_state: StateId,
    /// The next unused state after the last emitted rule.
    pub next_state: StateId,
    /// Rules emitted for path moves.
    pub path_rules: usize,
    /// Rules emitted for the alignment epilogue.
    pub epilogue_rules: usize,
    /// The heading the ant finishes facing.
    pub heading: Heading,
}

/// A freshly compiled program and its summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CompiledProgram {
    /// The rules.
    pub program: RuleProgram,
    /// Counts.
    pub summary: CompileSummary,
}

/// Compiles tours over a single grid.
#[derive(Clone, Copy, Debug)]
pub struct ProgramCompiler<'g> {
    grid: &'g GridContext,
    options: CompileOptions,
}

impl<'g> ProgramCompiler<'g> {
    /// A compiler reading colors and the end anchor from `grid`.
    pub fn new(grid: &'g GridContext, options: CompileOptions) -> Self {
        Self { grid, options }
    }

    /// The options in use.
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compile `tour` into a new program.
    pub fn compile(&self, tour: &Tour) -> Result<CompiledProgram, CompileError> {
        let mut program = RuleProgram::new();
        let summary = self.compile_into(tour, &mut program)?;
        Ok(CompiledProgram { program, summary })
    }

    /// Compile `tour` into an existing program.
    ///
    /// Fails with [`CompileError::StateCollision`] before writing anything
    /// if any state the compilation needs is already present.
    pub fn compile_into(
        &self,
        tour: &Tour,
        program: &mut RuleProgram,
    ) -> Result<CompileSummary, CompileError> {
        let spec = self.grid.spec();
        let anchor = self
            .grid
            .end()
            .ok_or(CompileError::UninitializedState { anchor: "end" })?;
        let tour_end = spec.normalize(tour.end());
        if tour_end != anchor.point {
            return Err(CompileError::EndpointMismatch {
                tour_end,
                anchor: anchor.point,
            });
        }
        let heading = self.options.heading.unwrap_or(anchor.heading);

        let points: Vec<Point> = tour.points().iter().map(|&p| spec.normalize(p)).collect();
        let moves = spec.expand_path(&points);
        let path_rules = moves.len();
        let epilogue = alignment(heading);
        let needed = path_rules + epilogue.len();
        let first = self.options.start_state;
        let next_state = StateId::try_from(needed)
            .ok()
            .and_then(|n| first.checked_add(n))
            .ok_or(CompileError::StateOverflow {
                start: first,
                needed,
            })?;
        if let Some(taken) = program.first_occupied(first..next_state) {
            return Err(CompileError::StateCollision(taken));
        }

        let mut state = first;
        let mut emit = |program: &mut RuleProgram, at: Point, step| {
            program.insert(
                state,
                Rule {
                    write_color: self.grid.get(at),
                    step,
                    next_state: NextState::State(state + 1),
                },
            );
            state += 1;
        };

        // Each rule rewrites the color of the cell it leaves.
        let mut pos = points[0];
        for step in moves {
            emit(program, pos, step);
            pos = spec.step(pos, step);
        }
        for a in epilogue {
            let at = spec.normalize(anchor.point.offset(a.offset.0, a.offset.1));
            emit(program, at, a.step);
        }

        if self.options.stop_after_done {
            if let Some(rule) = program.last_rule_mut(next_state - 1) {
                rule.next_state = NextState::Halt;
            }
        }

        debug!(
            first_state = first,
            next_state,
            path_rules,
            epilogue_rules = epilogue.len(),
            %heading,
            halts = self.options.stop_after_done,
            "compiled rule program"
        );

        Ok(CompileSummary {
            first_state: first,
            next_state,
            path_rules,
            epilogue_rules: epilogue.len(),
            heading,
        })
    }
}
