//! End-to-end sessions over the built-in desert content.

use std::io::Write;

use game_content::loaders::SpawnLoader;
use game_content::tables::{EPEE, HYENE, SCORPION};
use game_core::{
    ArchetypeId, GameConfig, GameEvent, GameState, Intent, Mode, PlayerAction, Position,
    Resolution,
};
use runtime::{
    IdleIntentProvider, OracleManager, Runtime, RuntimeConfig, RuntimeError, RuntimeHandle,
    ScriptedIntentProvider, TablesOracleImpl, Topic,
};
use std::sync::Arc;
use tokio::time::{Duration, timeout};

const SHOP_SPOT: Position = Position::new(200.0, 20.0);

async fn start_runtime() -> Runtime {
    Runtime::builder()
        .oracles(OracleManager::from_content())
        .build()
        .await
        .expect("runtime builds with content oracles")
}

async fn position_of(handle: &RuntimeHandle, archetype: ArchetypeId) -> Position {
    let state = handle.query_state().await.expect("state query");
    state
        .roster
        .iter()
        .find(|hostile| hostile.archetype == archetype)
        .map(|hostile| hostile.position)
        .expect("hostile is on the map")
}

#[tokio::test]
async fn complete_session_buy_fight_and_win() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();
    let mut combat_rx = handle.subscribe(Topic::Combat);

    let report = handle.tick(vec![Intent::StartGame]).await.unwrap();
    assert_eq!(report.snapshot.mode, Mode::World);

    // Walk into the merchant stall and buy a sword.
    let report = handle.tick(vec![Intent::Move(SHOP_SPOT)]).await.unwrap();
    assert!(report.outcome.events.contains(&GameEvent::ShopOpened));
    let report = handle.tick(vec![Intent::Buy(EPEE)]).await.unwrap();
    assert_eq!(report.snapshot.money, 9_950);
    assert_eq!(report.snapshot.inventory, vec!["Épée".to_string()]);

    // Step onto the scorpion.
    let target = position_of(&handle, SCORPION).await;
    let report = handle.tick(vec![Intent::Move(target)]).await.unwrap();
    assert_eq!(report.snapshot.mode, Mode::Combat);
    assert_eq!(
        report.snapshot.hostile.as_ref().map(|view| view.name.as_str()),
        Some("Scorpion")
    );

    let mut resolved = None;
    for _ in 0..20 {
        let report = handle
            .tick(vec![Intent::Combat(PlayerAction::WeaponAttack)])
            .await
            .unwrap();
        resolved = report.outcome.events.iter().find_map(|event| match event {
            GameEvent::EncounterResolved {
                resolution, reward, ..
            } => Some((*resolution, *reward)),
            _ => None,
        });
        if resolved.is_some() {
            assert_eq!(report.snapshot.mode, Mode::World);
            assert_eq!(report.snapshot.money, 10_000);
            break;
        }
    }
    assert_eq!(resolved, Some((Resolution::Victory, 50)));

    let state = handle.query_state().await.unwrap();
    assert!(state.roster.iter().all(|hostile| hostile.archetype != SCORPION));
    assert!(state.player.stats.health.current < state.player.stats.health.maximum);

    let first = timeout(Duration::from_secs(1), combat_rx.recv())
        .await
        .expect("combat event published")
        .unwrap();
    assert!(matches!(
        first.payload,
        GameEvent::EncounterStarted { archetype, .. } if archetype == SCORPION
    ));
}

#[tokio::test]
async fn fleeing_leaves_the_hostile_and_does_not_reengage() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();
    handle.tick(vec![Intent::StartGame]).await.unwrap();

    let target = position_of(&handle, HYENE).await;
    handle.tick(vec![Intent::Move(target)]).await.unwrap();
    let report = handle
        .tick(vec![Intent::Combat(PlayerAction::Flee)])
        .await
        .unwrap();

    assert!(report.outcome.events.iter().any(|event| matches!(
        event,
        GameEvent::EncounterResolved {
            resolution: Resolution::Fled,
            reward: 0,
            ..
        }
    )));
    assert_eq!(report.snapshot.mode, Mode::World);

    // Still overlapping, but the trigger ignores the hostile we ran from.
    let report = handle.tick(Vec::new()).await.unwrap();
    assert_eq!(report.snapshot.mode, Mode::World);
    let state = handle.query_state().await.unwrap();
    assert!(state.roster.iter().any(|hostile| hostile.archetype == HYENE));
}

#[tokio::test]
async fn set_position_is_rejected_in_menu() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();

    let result = handle.set_position(SHOP_SPOT).await;
    assert!(matches!(result, Err(RuntimeError::Rejected(_))));

    handle.tick(vec![Intent::StartGame]).await.unwrap();
    let events = handle.set_position(SHOP_SPOT).await.unwrap();
    assert_eq!(events, vec![GameEvent::ShopOpened]);
    assert!(handle.snapshot().await.unwrap().shop_open);
}

#[tokio::test]
async fn rejected_intents_reach_the_session_topic() {
    let runtime = start_runtime().await;
    let handle = runtime.handle();
    let mut session_rx = handle.subscribe(Topic::Session);

    handle.tick(vec![Intent::StartGame]).await.unwrap();
    let report = handle.tick(vec![Intent::Buy(EPEE)]).await.unwrap();

    let rejections: Vec<_> = report
        .outcome
        .events
        .iter()
        .filter(|event| event.is_rejection())
        .collect();
    assert_eq!(rejections.len(), 1);
    assert_eq!(report.snapshot.money, 10_000);

    let mut saw_rejection = false;
    while let Ok(event) = session_rx.try_recv() {
        saw_rejection |= event.payload.is_rejection();
    }
    assert!(saw_rejection);
}

#[tokio::test]
async fn run_drains_the_scripted_provider() {
    let mut runtime = Runtime::builder()
        .oracles(OracleManager::from_content())
        .intent_provider(ScriptedIntentProvider::new(vec![
            vec![Intent::StartGame],
            vec![Intent::Move(SHOP_SPOT)],
            Vec::new(),
        ]))
        .build()
        .await
        .unwrap();

    let ticks = runtime.run().await.unwrap();
    assert_eq!(ticks, 3);

    let snapshot = runtime.handle().snapshot().await.unwrap();
    assert_eq!(snapshot.clock.0, 3 * GameConfig::DEFAULT_TICK_MS);
    assert!(snapshot.shop_open);

    runtime.shutdown().await.unwrap();
}

#[tokio::test]
async fn idle_provider_keeps_ticking_the_menu() {
    let mut runtime = Runtime::builder()
        .oracles(OracleManager::from_content())
        .intent_provider(IdleIntentProvider)
        .build()
        .await
        .unwrap();

    for _ in 0..5 {
        let report = runtime.step().await.unwrap().expect("idle provider never stops");
        assert_eq!(report.snapshot.mode, Mode::Menu);
        assert!(report.outcome.events.is_empty());
    }
}

#[tokio::test]
async fn builder_requires_oracles_and_step_requires_provider() {
    let missing = Runtime::builder().build().await;
    assert!(matches!(missing, Err(RuntimeError::MissingOracles)));

    let mut runtime = start_runtime().await;
    assert!(matches!(runtime.step().await, Err(RuntimeError::ProviderNotSet)));
}

#[tokio::test]
async fn spawn_table_loaded_from_disk_starts_in_world() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
        [[spawn]]
        archetype = 3
        position = {{ x = 900.0, y = 900.0 }}
        direction = {{ dx = 0.0, dy = 0.0 }}
        "#
    )
    .unwrap();

    let spawns = SpawnLoader::load(file.path()).unwrap();
    let tables = TablesOracleImpl::from_content().with_spawn_table(spawns);
    let oracles = OracleManager::new(
        Arc::new(runtime::ItemOracleImpl::from_content()),
        Arc::new(tables),
    );

    let runtime = Runtime::builder()
        .oracles(oracles)
        .start_in_world(true)
        .build()
        .await
        .unwrap();

    let state = runtime.handle().query_state().await.unwrap();
    assert_eq!(state.mode, Mode::World);
    assert_eq!(state.roster.len(), 1);
    assert_eq!(state.roster.iter().next().map(|h| h.archetype), Some(HYENE));
}

#[tokio::test]
async fn unknown_archetype_fails_the_build() {
    let tables = TablesOracleImpl::from_content().with_spawn_table(vec![game_core::SpawnEntry::new(
        ArchetypeId(99),
        Position::new(0.0, 0.0),
        game_core::Direction::STILL,
    )]);
    let oracles = OracleManager::new(
        Arc::new(runtime::ItemOracleImpl::from_content()),
        Arc::new(tables),
    );

    let result = Runtime::builder()
        .oracles(oracles)
        .start_in_world(true)
        .build()
        .await;
    assert!(matches!(result, Err(RuntimeError::InitialState(_))));
}

#[tokio::test]
async fn provided_state_wins_over_start_flag() {
    let state = GameState::new(GameConfig::default().with_starting_money(5));
    let runtime = Runtime::builder()
        .oracles(OracleManager::from_content())
        .initial_state(state)
        .start_in_world(true)
        .build()
        .await
        .unwrap();

    let snapshot = runtime.handle().snapshot().await.unwrap();
    assert_eq!(snapshot.mode, Mode::Menu);
}
