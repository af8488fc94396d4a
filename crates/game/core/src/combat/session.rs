use super::{CombatError, CombatPhase, PlayerAction, Resolution};
use crate::economy::{self, EffectOutcome, Inventory};
use crate::env::{CombatRules, ItemOracle};
use crate::state::{EntityId, Tick};
use crate::stats::{DamageReport, StatBlock};
use crate::world::Hostile;

/// What a successful player action did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionEffect {
    /// Damage dealt to the hostile.
    Struck(DamageReport),
    /// Health actually restored to the player.
    Healed(u32),
    /// Shield actually added to the player.
    ShieldReinforced(u32),
    Fled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionReport {
    pub action: PlayerAction,
    pub effect: ActionEffect,
    /// Phase after the action.
    pub phase: CombatPhase,
}

/// The hostile's automatic attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileStrike {
    pub hostile: EntityId,
    pub damage: DamageReport,
    pub phase: CombatPhase,
}

/// A running turn-based confrontation with one hostile.
///
/// The session only refers to its hostile by id; both stat blocks are passed
/// in by the caller on every transition so the game state stays their single
/// owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSession {
    hostile: EntityId,
    phase: CombatPhase,
    item_used_this_turn: bool,
    started_at: Tick,
    /// Completed player/hostile exchanges.
    rounds: u32,
}

impl EncounterSession {
    /// `Idle -> PlayerTurn` against `hostile`.
    pub fn start(hostile: &Hostile, now: Tick) -> Self {
        Self {
            hostile: hostile.id,
            phase: CombatPhase::PlayerTurn,
            item_used_this_turn: false,
            started_at: now,
            rounds: 0,
        }
    }

    pub fn hostile(&self) -> EntityId {
        self.hostile
    }

    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    pub fn started_at(&self) -> Tick {
        self.started_at
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn item_used_this_turn(&self) -> bool {
        self.item_used_this_turn
    }

    /// Resolves one player command.
    ///
    /// `Flee` is accepted from either turn. Everything else requires
    /// `PlayerTurn`, and a failed action never consumes the turn.
    pub fn player_action(
        &mut self,
        action: PlayerAction,
        player: &mut StatBlock,
        bag: &Inventory,
        hostile: &mut Hostile,
        rules: CombatRules,
        items: &(impl ItemOracle + ?Sized),
    ) -> Result<ActionReport, CombatError> {
        if self.phase.is_resolved() || self.phase == CombatPhase::Idle {
            return Err(CombatError::InvalidTransition { phase: self.phase });
        }

        if action == PlayerAction::Flee {
            self.phase = CombatPhase::Resolved(Resolution::Fled);
            return Ok(self.report(action, ActionEffect::Fled));
        }

        if self.phase != CombatPhase::PlayerTurn {
            return Err(CombatError::InvalidTransition { phase: self.phase });
        }
        if player.is_exhausted() {
            return Err(CombatError::PlayerExhausted);
        }

        let effect = match action {
            PlayerAction::BasicAttack => {
                ActionEffect::Struck(hostile.stats.apply_damage(rules.basic_attack))
            }
            PlayerAction::WeaponAttack => {
                let weapon =
                    economy::best_weapon(bag, items).ok_or(CombatError::NoWeaponEquipped)?;
                ActionEffect::Struck(hostile.stats.apply_damage(weapon.damage))
            }
            PlayerAction::UseShieldPotionSlot => {
                ActionEffect::ShieldReinforced(player.reinforce_shield(rules.shield_potion))
            }
            PlayerAction::UseHealPotionSlot => {
                ActionEffect::Healed(player.heal(rules.heal_potion))
            }
            PlayerAction::Flee => ActionEffect::Fled,
        };

        self.phase = if hostile.stats.is_defeated() {
            CombatPhase::Resolved(Resolution::Victory)
        } else {
            CombatPhase::HostileTurn
        };

        Ok(self.report(action, effect))
    }

    /// `HostileTurn -> PlayerTurn`: the hostile's single fixed-damage attack.
    ///
    /// Ends the encounter as a defeat when the player is left with neither
    /// health nor shield.
    pub fn hostile_turn(
        &mut self,
        player: &mut StatBlock,
        hostile: &Hostile,
    ) -> Result<HostileStrike, CombatError> {
        if self.phase != CombatPhase::HostileTurn {
            return Err(CombatError::InvalidTransition { phase: self.phase });
        }

        let damage = player.apply_damage(hostile.stats.damage);
        self.rounds += 1;
        self.item_used_this_turn = false;
        self.phase = if player.is_exhausted() {
            CombatPhase::Resolved(Resolution::Defeat)
        } else {
            CombatPhase::PlayerTurn
        };

        Ok(HostileStrike {
            hostile: hostile.id,
            damage,
            phase: self.phase,
        })
    }

    /// Uses one inventory item during the player's turn without ending it.
    pub fn use_item(
        &mut self,
        index: usize,
        bag: &mut Inventory,
        player: &mut StatBlock,
        items: &(impl ItemOracle + ?Sized),
    ) -> Result<EffectOutcome, CombatError> {
        if self.phase != CombatPhase::PlayerTurn {
            return Err(CombatError::InvalidTransition { phase: self.phase });
        }
        if self.item_used_this_turn {
            return Err(CombatError::ItemAlreadyUsed);
        }

        let outcome = economy::consume(index, bag, player, items)?;
        self.item_used_this_turn = true;
        Ok(outcome)
    }

    fn report(&self, action: PlayerAction, effect: ActionEffect) -> ActionReport {
        ActionReport {
            action,
            effect,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TablesOracle;
    use crate::error::GameError;
    use crate::state::{Direction, Position, Size};
    use crate::testing::{EPEE, EPEE_AMELIOREE, PLANTE_CURATIVE, SCORPION, TestItems, TestTables};

    fn scorpion() -> Hostile {
        Hostile {
            id: EntityId(2),
            archetype: SCORPION,
            stats: StatBlock::new(100, 0, 10),
            position: Position::new(220.0, 350.0),
            direction: Direction::STILL,
            speed: 2.0,
            size: Size::new(96.0, 96.0),
        }
    }

    fn player() -> StatBlock {
        StatBlock::new(100, 100, 0)
    }

    fn act(
        session: &mut EncounterSession,
        action: PlayerAction,
        player: &mut StatBlock,
        bag: &Inventory,
        hostile: &mut Hostile,
    ) -> Result<ActionReport, CombatError> {
        let rules = TestTables.combat_rules();
        session.player_action(action, player, bag, hostile, rules, &TestItems)
    }

    #[test]
    fn start_enters_player_turn() {
        let session = EncounterSession::start(&scorpion(), Tick(32));
        assert_eq!(session.phase(), CombatPhase::PlayerTurn);
        assert_eq!(session.hostile(), EntityId(2));
        assert_eq!(session.started_at(), Tick(32));
    }

    #[test]
    fn turns_alternate_strictly() {
        let mut hostile = scorpion();
        let mut player = player();
        let bag = Inventory::empty();
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        let report = act(&mut session, PlayerAction::BasicAttack, &mut player, &bag, &mut hostile)
            .expect("player turn");
        assert_eq!(report.phase, CombatPhase::HostileTurn);
        assert_eq!(hostile.stats.health.current, 90);

        let err = act(&mut session, PlayerAction::BasicAttack, &mut player, &bag, &mut hostile)
            .unwrap_err();
        assert_eq!(
            err,
            CombatError::InvalidTransition {
                phase: CombatPhase::HostileTurn
            }
        );

        let strike = session.hostile_turn(&mut player, &hostile).expect("hostile turn");
        assert_eq!(strike.phase, CombatPhase::PlayerTurn);
        assert_eq!(strike.damage.requested, 10);
        assert_eq!(session.rounds(), 1);

        assert!(session.hostile_turn(&mut player, &hostile).is_err());
    }

    #[test]
    fn ten_basic_attacks_defeat_a_scorpion() {
        let mut hostile = scorpion();
        let mut player = player();
        let bag = Inventory::empty();
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        for round in 1..=10 {
            let report = act(
                &mut session,
                PlayerAction::BasicAttack,
                &mut player,
                &bag,
                &mut hostile,
            )
            .expect("player turn");
            if round < 10 {
                assert_eq!(report.phase, CombatPhase::HostileTurn);
                session.hostile_turn(&mut player, &hostile).expect("hostile turn");
            } else {
                assert_eq!(report.phase, CombatPhase::Resolved(Resolution::Victory));
            }
        }
        assert!(hostile.stats.is_defeated());
    }

    #[test]
    fn weapon_attack_without_weapon_keeps_the_turn() {
        let mut hostile = scorpion();
        let mut player = player();
        let bag = Inventory::new(vec![PLANTE_CURATIVE]);
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        let err = act(&mut session, PlayerAction::WeaponAttack, &mut player, &bag, &mut hostile)
            .unwrap_err();

        assert_eq!(err, CombatError::NoWeaponEquipped);
        assert_eq!(session.phase(), CombatPhase::PlayerTurn);
        assert_eq!(hostile.stats.health.current, 100);
    }

    #[test]
    fn weapon_attack_uses_best_weapon() {
        let mut hostile = scorpion();
        let mut player = player();
        let bag = Inventory::new(vec![EPEE, EPEE_AMELIOREE]);
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        act(&mut session, PlayerAction::WeaponAttack, &mut player, &bag, &mut hostile)
            .expect("armed");
        assert_eq!(hostile.stats.health.current, 50);
    }

    #[test]
    fn potion_slots_target_the_right_meter() {
        let mut hostile = scorpion();
        let mut player = StatBlock::new(100, 100, 0).with_current(20, 0);
        let bag = Inventory::empty();
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        let report = act(
            &mut session,
            PlayerAction::UseShieldPotionSlot,
            &mut player,
            &bag,
            &mut hostile,
        )
        .expect("player turn");
        assert_eq!(report.effect, ActionEffect::ShieldReinforced(30));
        assert_eq!(player.shield.current, 30);
        assert_eq!(player.health.current, 20);

        session.hostile_turn(&mut player, &hostile).expect("hostile turn");
        let report = act(
            &mut session,
            PlayerAction::UseHealPotionSlot,
            &mut player,
            &bag,
            &mut hostile,
        )
        .expect("player turn");
        assert_eq!(report.effect, ActionEffect::Healed(50));
        assert_eq!(player.health.current, 70);
    }

    #[test]
    fn flee_is_accepted_from_either_turn() {
        let mut hostile = scorpion();
        let mut player = player();
        let bag = Inventory::empty();

        let mut session = EncounterSession::start(&hostile, Tick::ZERO);
        act(&mut session, PlayerAction::BasicAttack, &mut player, &bag, &mut hostile)
            .expect("player turn");
        let report = act(&mut session, PlayerAction::Flee, &mut player, &bag, &mut hostile)
            .expect("flee during hostile turn");
        assert_eq!(report.phase, CombatPhase::Resolved(Resolution::Fled));

        let err = act(&mut session, PlayerAction::Flee, &mut player, &bag, &mut hostile)
            .unwrap_err();
        assert!(matches!(err, CombatError::InvalidTransition { .. }));
    }

    #[test]
    fn exhausting_hostile_strike_is_a_defeat() {
        let mut hostile = scorpion();
        let mut player = StatBlock::new(100, 100, 0).with_current(5, 0);
        let bag = Inventory::empty();
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        act(&mut session, PlayerAction::BasicAttack, &mut player, &bag, &mut hostile)
            .expect("player turn");
        let strike = session.hostile_turn(&mut player, &hostile).expect("hostile turn");

        assert_eq!(strike.damage.health_lost, 5);
        assert_eq!(strike.phase, CombatPhase::Resolved(Resolution::Defeat));
    }

    #[test]
    fn exhausted_player_may_only_flee() {
        let mut hostile = scorpion();
        let mut player = StatBlock::new(100, 100, 0).with_current(0, 0);
        let bag = Inventory::empty();
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        let err = act(&mut session, PlayerAction::BasicAttack, &mut player, &bag, &mut hostile)
            .unwrap_err();
        assert_eq!(err, CombatError::PlayerExhausted);
        assert_eq!(session.phase(), CombatPhase::PlayerTurn);

        act(&mut session, PlayerAction::Flee, &mut player, &bag, &mut hostile)
            .expect("flee always succeeds");
    }

    #[test]
    fn one_item_per_player_turn() {
        let hostile = scorpion();
        let mut player = StatBlock::new(100, 100, 0).with_current(10, 0);
        let mut bag = Inventory::new(vec![PLANTE_CURATIVE, PLANTE_CURATIVE]);
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        session
            .use_item(0, &mut bag, &mut player, &TestItems)
            .expect("first item");
        assert_eq!(session.phase(), CombatPhase::PlayerTurn);
        assert_eq!(player.health.current, 60);

        let err = session.use_item(0, &mut bag, &mut player, &TestItems).unwrap_err();
        assert_eq!(err, CombatError::ItemAlreadyUsed);
        assert_eq!(bag.len(), 1);
    }

    #[test]
    fn failed_item_use_does_not_spend_the_allowance() {
        let hostile = scorpion();
        let mut player = player();
        let mut bag = Inventory::new(vec![EPEE, PLANTE_CURATIVE]);
        let mut session = EncounterSession::start(&hostile, Tick::ZERO);

        let err = session.use_item(0, &mut bag, &mut player, &TestItems).unwrap_err();
        assert_eq!(err.error_code(), "NOT_USABLE");
        assert!(!session.item_used_this_turn());

        session
            .use_item(1, &mut bag, &mut player, &TestItems)
            .expect("heal still allowed");
    }
}
