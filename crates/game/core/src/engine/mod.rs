//! Turn orchestration and command execution.
//!
//! The [`TurnEngine`] is the sole mutator of [`BattleState`]. It alternates
//! player and enemy turns, resolves each side's queued commands in roster
//! order, and plans enemy commands before an enemy pass. Execution is a
//! cooperative step machine: every [`TurnEngine::step`] resolves at most one
//! command and returns control, so the embedder can insert pacing delays
//! between commands and turns without the core knowing about time.
//!
//! Enemy turns are autonomous. When a pass flips the turn to the enemy side
//! the engine arms itself and the next `step` call plans and executes the
//! enemy turn without any external input.

use std::collections::VecDeque;

use crate::ai::AiPlanner;
use crate::command::{Command, CommandError};
use crate::config::BattleConfig;
use crate::event::BattleEvent;
use crate::state::{BattleState, Team, UnitId};

/// Result of resolving one queued command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommandReport {
    /// Unit the command belonged to.
    pub unit: UnitId,
    /// The command as it was queued.
    pub command: Command,
    /// Validation outcome. A failure forfeits the command's action points
    /// and never aborts the rest of the pass.
    pub result: Result<(), CommandError>,
}

impl CommandReport {
    pub fn succeeded(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcome of a single engine step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepOutcome {
    /// One command was resolved; a pacing gap belongs after it.
    Command(CommandReport),

    /// The execution pass finished and the turn flipped to `side`.
    TurnChanged { side: Team },

    /// Nothing in flight; the engine is waiting for player input.
    Idle,
}

/// Cursor over the executing side's roster during a pass.
#[derive(Clone, Debug)]
struct ExecutionPass {
    order: Vec<UnitId>,
    index: usize,
}

/// Turn engine: owns the battle state and drives the turn cycle.
///
/// Constructed from the grid and roster via [`BattleState`]; holds the
/// config the AI planner reads its command parameters from.
pub struct TurnEngine {
    state: BattleState,
    config: BattleConfig,
    outbox: VecDeque<BattleEvent>,
    pass: Option<ExecutionPass>,
    /// Armed after a flip to the enemy side: the next step starts the
    /// autonomous enemy pass.
    pending_auto: bool,
}

impl TurnEngine {
    pub fn new(state: BattleState, config: BattleConfig) -> Self {
        Self {
            state,
            config,
            outbox: VecDeque::new(),
            pass: None,
            pending_auto: false,
        }
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// True when the player may enter commands.
    pub fn is_player_turn(&self) -> bool {
        self.state.turn.accepts_player_input() && !self.pending_auto
    }

    /// Drains the accumulated presentation events.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        self.outbox.drain(..).collect()
    }

    // ========================================================================
    // Command entry (input collaborator surface)
    // ========================================================================

    /// Queues a command onto its owner's queue. Returns whether it was
    /// accepted; rejection (unknown owner, or the action-point budget is
    /// exhausted) is silent beyond the boolean.
    pub fn queue_command(&mut self, command: Command) -> bool {
        let owner = command.owner();
        let accepted = self
            .state
            .unit_mut(owner)
            .is_some_and(|unit| unit.add_command(command));
        if accepted {
            self.outbox.push_back(BattleEvent::CommandQueued { unit: owner });
        }
        accepted
    }

    /// Removes the command at `index` from `unit`'s queue. Out of bounds is
    /// a silent no-op.
    pub fn remove_command(&mut self, unit: UnitId, index: usize) -> bool {
        let removed = self
            .state
            .unit_mut(unit)
            .is_some_and(|state| state.remove_command(index));
        if removed {
            self.outbox.push_back(BattleEvent::CommandRemoved { unit });
        }
        removed
    }

    /// Empties `unit`'s queue. Fires the removal notification even when the
    /// queue was already empty.
    pub fn clear_commands(&mut self, unit: UnitId) {
        if let Some(state) = self.state.unit_mut(unit) {
            state.clear_commands();
            self.outbox.push_back(BattleEvent::CommandRemoved { unit });
        }
    }

    /// Delegates the highlight classification pass to the state.
    pub fn highlight_valid_moves(&mut self, unit: UnitId) {
        self.state.highlight_valid_moves(unit);
    }

    pub fn reset_highlights(&mut self) {
        self.state.reset_highlights();
    }

    // ========================================================================
    // Turn cycle
    // ========================================================================

    /// Ends the current idle turn and starts an execution pass. No-op while
    /// a pass is executing or the autonomous enemy turn is pending; returns
    /// whether a pass actually started.
    pub fn end_turn(&mut self) -> bool {
        if self.state.turn.executing || self.pass.is_some() || self.pending_auto {
            return false;
        }
        self.begin_pass();
        true
    }

    /// Resolves at most one command and returns control to the caller.
    pub fn step(&mut self) -> StepOutcome {
        if self.pass.is_none() {
            if self.pending_auto {
                self.pending_auto = false;
                self.begin_pass();
            } else {
                return StepOutcome::Idle;
            }
        }

        loop {
            let Some(pass) = self.pass.as_mut() else {
                return StepOutcome::Idle;
            };

            let Some(&unit) = pass.order.get(pass.index) else {
                return self.finish_pass();
            };

            let alive = self.state.unit(unit).is_some_and(|u| u.is_alive());
            if !alive {
                // Killed earlier in the pass: its remaining queue is skipped.
                pass.index += 1;
                continue;
            }

            let Some(command) = self
                .state
                .unit_mut(unit)
                .and_then(|u| u.pop_next_command())
            else {
                pass.index += 1;
                continue;
            };

            let result = command.execute(&mut self.state);
            return StepOutcome::Command(CommandReport {
                unit,
                command,
                result,
            });
        }
    }

    /// Steps until the engine goes idle, collecting every outcome. Headless
    /// convenience for tests and tools; hosted apps drive [`Self::step`]
    /// directly so they can pace between outcomes.
    pub fn run_until_idle(&mut self) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        loop {
            match self.step() {
                StepOutcome::Idle => return outcomes,
                outcome => outcomes.push(outcome),
            }
        }
    }

    /// Freezes command entry, clears highlights, plans the enemy side if it
    /// is acting, and builds the execution order.
    fn begin_pass(&mut self) {
        self.state.turn.executing = true;
        self.state.reset_highlights();

        let side = self.state.turn.side;
        if side == Team::Enemy {
            self.plan_enemy_turn();
        }

        self.pass = Some(ExecutionPass {
            order: self.state.units.living_ids(side),
            index: 0,
        });
    }

    /// One planning invocation per living enemy: stale queue cleared first,
    /// then at most one command queued. Both go through the regular entry
    /// points so the usual notifications fire.
    fn plan_enemy_turn(&mut self) {
        for unit in self.state.units.living_ids(Team::Enemy) {
            self.clear_commands(unit);
            if let Some(command) = AiPlanner::plan(&self.state, unit, &self.config) {
                self.queue_command(command);
            }
        }
    }

    /// Flips the turn and arms the autonomous enemy pass when the enemy side
    /// is up next.
    fn finish_pass(&mut self) -> StepOutcome {
        self.pass = None;
        let side = self.state.turn.side.opponent();
        self.state.turn.side = side;
        self.state.turn.executing = false;
        self.pending_auto = side == Team::Enemy;
        self.outbox.push_back(BattleEvent::TurnChanged { side });
        StepOutcome::TurnChanged { side }
    }
}
