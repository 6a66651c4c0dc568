//! Hosted battle session: the surface the embedding application talks to.
//!
//! [`BattleSession`] wraps the core [`TurnEngine`] with everything the
//! simulation deliberately leaves out: pacing between execution steps,
//! structured logging, and fan-out of events to presentation subscribers.
//! Command entry and snapshot queries pass straight through to the engine.

use std::collections::HashMap;
use std::sync::Arc;

use battle_core::{
    BattleEvent, BattleState, Command, Highlight, Position, StepOutcome, Team, TurnEngine, UnitId,
};

use crate::error::{Result, RuntimeError};
use crate::events::{Event, EventBus, ExecutionEvent, QueueEvent, TurnEvent};
use crate::pacing::Pacer;

pub struct BattleSession {
    engine: TurnEngine,
    names: HashMap<UnitId, String>,
    bus: EventBus,
    pacer: Arc<dyn Pacer>,
}

impl BattleSession {
    pub fn new(engine: TurnEngine, names: HashMap<UnitId, String>, pacer: Arc<dyn Pacer>) -> Self {
        Self {
            engine,
            names,
            bus: EventBus::new(),
            pacer,
        }
    }

    /// Event bus handle for presentation subscribers.
    pub fn events(&self) -> EventBus {
        self.bus.clone()
    }

    // ========================================================================
    // Snapshot queries (presentation collaborator surface)
    // ========================================================================

    pub fn state(&self) -> &BattleState {
        self.engine.state()
    }

    pub fn is_player_turn(&self) -> bool {
        self.engine.is_player_turn()
    }

    /// Display name from roster data, if the unit has one.
    pub fn unit_name(&self, unit: UnitId) -> Option<&str> {
        self.names.get(&unit).map(String::as_str)
    }

    pub fn remaining_action_points(&self, unit: UnitId) -> Result<u32> {
        self.engine
            .state()
            .unit(unit)
            .map(|state| state.remaining_action_points())
            .ok_or(RuntimeError::UnknownUnit(unit))
    }

    /// Ordered snapshot of a unit's queued commands.
    pub fn commands(&self, unit: UnitId) -> Result<Vec<Command>> {
        self.engine
            .state()
            .unit(unit)
            .map(|state| state.commands().to_vec())
            .ok_or(RuntimeError::UnknownUnit(unit))
    }

    /// Current highlight tags in row-major tile order.
    pub fn highlights(&self) -> Vec<(Position, Highlight)> {
        self.engine
            .state()
            .grid
            .tiles()
            .map(|tile| (tile.position(), tile.highlight()))
            .collect()
    }

    // ========================================================================
    // Command entry (input collaborator surface)
    // ========================================================================

    /// Queues a command for its owner. Rejected with `NotPlayersTurn` outside
    /// the player's idle turn; returns whether the action-point budget
    /// accepted the command.
    pub fn queue_command(&mut self, command: Command) -> Result<bool> {
        if !self.engine.is_player_turn() {
            return Err(RuntimeError::NotPlayersTurn);
        }
        let accepted = self.engine.queue_command(command);
        if !accepted {
            tracing::debug!(
                unit = %command.owner(),
                command = command.name(),
                "command rejected by action point budget"
            );
        }
        self.pump_core_events();
        Ok(accepted)
    }

    /// Removes the command at `index` from `unit`'s queue.
    pub fn remove_command(&mut self, unit: UnitId, index: usize) -> bool {
        let removed = self.engine.remove_command(unit, index);
        self.pump_core_events();
        removed
    }

    /// Clears `unit`'s queue.
    pub fn clear_commands(&mut self, unit: UnitId) {
        self.engine.clear_commands(unit);
        self.pump_core_events();
    }

    /// Runs the highlight classification pass for `unit`.
    pub fn highlight_valid_moves(&mut self, unit: UnitId) {
        self.engine.highlight_valid_moves(unit);
    }

    pub fn reset_highlights(&mut self) {
        self.engine.reset_highlights();
    }

    // ========================================================================
    // Turn cycle
    // ========================================================================

    /// Ends the player's turn and drives the full execution cycle: the
    /// player pass, the turn flip, and the autonomous enemy turn, pacing
    /// between steps. Returns once the engine is idle on the player side
    /// again.
    pub async fn end_turn(&mut self) -> Result<()> {
        if !self.engine.end_turn() {
            return Err(RuntimeError::ExecutionInProgress);
        }

        loop {
            match self.engine.step() {
                StepOutcome::Command(report) => {
                    self.publish_report(&report);
                    self.pump_core_events();
                    self.pacer.after_command().await;
                }
                StepOutcome::TurnChanged { side } => {
                    tracing::info!(side = %side, "turn ended");
                    self.pump_core_events();
                    if side == Team::Enemy {
                        // Brief gap so the UI can settle before the enemy acts.
                        self.pacer.after_turn().await;
                    }
                }
                StepOutcome::Idle => break,
            }
        }
        Ok(())
    }

    fn publish_report(&self, report: &battle_core::CommandReport) {
        let unit = report.unit;
        let command = report.command.name().to_string();
        match &report.result {
            Ok(()) => {
                tracing::info!(unit = %unit, command = %command, "command resolved");
                self.bus.publish(Event::Execution(ExecutionEvent::CommandExecuted {
                    unit,
                    command,
                }));
            }
            Err(error) => {
                tracing::info!(unit = %unit, command = %command, %error, "command failed");
                self.bus.publish(Event::Execution(ExecutionEvent::CommandFailed {
                    unit,
                    command,
                    error: error.to_string(),
                }));
            }
        }
    }

    /// Forwards the engine's outbox onto the bus.
    fn pump_core_events(&mut self) {
        for event in self.engine.drain_events() {
            let event = match event {
                BattleEvent::CommandQueued { unit } => {
                    Event::Queue(QueueEvent::CommandQueued { unit })
                }
                BattleEvent::CommandRemoved { unit } => {
                    Event::Queue(QueueEvent::CommandRemoved { unit })
                }
                BattleEvent::TurnChanged { side } => Event::Turn(TurnEvent { side }),
            };
            self.bus.publish(event);
        }
    }
}
