use std::collections::HashMap;
use std::sync::Arc;

use battle_core::{
    BattleConfig, BattleState, Command, Grid, Position, RosterState, Team, TurnEngine, UnitId,
    UnitState,
};
use runtime::{BattleSession, Event, ExecutionEvent, NoPacing, QueueEvent, Topic};
use tokio::sync::broadcast::Receiver;

fn session() -> BattleSession {
    let roster = RosterState::new(vec![
        UnitState::new(UnitId(0), Team::Player, 100, 3),
        UnitState::new(UnitId(1), Team::Enemy, 30, 3),
    ]);
    let mut state = BattleState::new(Grid::new(5, 5), roster);
    state.place_unit(UnitId(0), Position::new(0, 0));
    state.place_unit(UnitId(1), Position::new(1, 0));
    let engine = TurnEngine::new(state, BattleConfig::default());
    BattleSession::new(engine, HashMap::new(), Arc::new(NoPacing))
}

fn drain(rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn queue_topic_reports_adds_removes_and_clears() {
    let mut session = session();
    let mut rx = session.events().subscribe(Topic::Queue);

    assert!(session.queue_command(Command::heal(UnitId(0), 5, 1)).unwrap());
    assert!(session.remove_command(UnitId(0), 0));
    assert!(!session.remove_command(UnitId(0), 0));
    session.clear_commands(UnitId(0));

    let events = drain(&mut rx);
    assert!(matches!(
        events[0],
        Event::Queue(QueueEvent::CommandQueued { unit: UnitId(0) })
    ));
    assert!(matches!(
        events[1],
        Event::Queue(QueueEvent::CommandRemoved { unit: UnitId(0) })
    ));
    // Clear fires even though the queue was already empty; the out-of-bounds
    // remove fired nothing.
    assert_eq!(events.len(), 3);
}

#[tokio::test]
async fn turn_topic_announces_both_flips() {
    let mut session = session();
    let mut rx = session.events().subscribe(Topic::Turn);

    session.end_turn().await.unwrap();

    let sides: Vec<Team> = drain(&mut rx)
        .into_iter()
        .map(|event| match event {
            Event::Turn(turn) => turn.side,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    assert_eq!(sides, vec![Team::Enemy, Team::Player]);
}

#[tokio::test]
async fn execution_topic_reports_success_and_failure() {
    let mut session = session();
    let mut rx = session.events().subscribe(Topic::Execution);

    // Occupied destination: fails at execution time, then the heal runs.
    session
        .queue_command(Command::move_to(
            UnitId(0),
            Position::new(0, 0),
            Position::new(1, 0),
            1,
        ))
        .unwrap();
    session.queue_command(Command::heal(UnitId(0), 5, 1)).unwrap();

    session.end_turn().await.unwrap();

    let events = drain(&mut rx);
    let player_events: Vec<&ExecutionEvent> = events
        .iter()
        .filter_map(|event| match event {
            Event::Execution(exec) => Some(exec),
            _ => None,
        })
        .filter(|exec| {
            matches!(
                exec,
                ExecutionEvent::CommandExecuted { unit: UnitId(0), .. }
                    | ExecutionEvent::CommandFailed { unit: UnitId(0), .. }
            )
        })
        .collect();

    assert!(matches!(
        player_events[0],
        ExecutionEvent::CommandFailed { command, .. } if command == "move"
    ));
    assert!(matches!(
        player_events[1],
        ExecutionEvent::CommandExecuted { command, .. } if command == "heal"
    ));
}

#[tokio::test]
async fn events_serialize_for_the_engine_bridge() {
    let mut session = session();
    let mut rx = session.events().subscribe(Topic::Queue);

    session.queue_command(Command::heal(UnitId(0), 5, 1)).unwrap();

    let events = drain(&mut rx);
    let json = serde_json::to_string(&events[0]).unwrap();
    let round_trip: Event = serde_json::from_str(&json).unwrap();
    assert!(matches!(
        round_trip,
        Event::Queue(QueueEvent::CommandQueued { unit: UnitId(0) })
    ));
}

#[tokio::test]
async fn adjacent_enemy_attacks_through_the_full_cycle() {
    let mut session = session();
    let mut rx = session.events().subscribe(Topic::Execution);

    session.end_turn().await.unwrap();

    // The enemy at (1, 0) is adjacent to the player and attacks.
    let attacked = drain(&mut rx).iter().any(|event| {
        matches!(
            event,
            Event::Execution(ExecutionEvent::CommandExecuted {
                unit: UnitId(1),
                command,
            }) if command == "attack"
        )
    });
    assert!(attacked);
    assert_eq!(
        session.state().unit(UnitId(0)).unwrap().health.current,
        100 - BattleConfig::DEFAULT_ATTACK_DAMAGE
    );
}
