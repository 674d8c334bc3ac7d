//! Property-Based Tests for the decision engine.
//!
//! Random opponent sequences against stubbed and real memories.

mod common;

use proptest::prelude::*;

use common::Amnesia;
use recall_core::config::EngineConfig;
use recall_core::{ChunkStore, FixedNoise, LogisticNoise, RecallConfig};
use recall_pd::payoff::payoff;
use recall_pd::{DeclarativeEngine, Move};

fn arb_moves(max: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(prop_oneof![Just(Move::Cooperate), Just(Move::Defect)], 0..max)
}

// ---------------------------------------------------------------------------
// Property: totals are the sum of per-round payoffs
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn totals_equal_sum_of_payoffs(opponent in arb_moves(60), seed in any::<u64>()) {
        let mut config = RecallConfig::default();
        config.general.seed = Some(seed);
        let mut engine = DeclarativeEngine::from_config(&config).expect("valid config");
        engine.reset();

        let (mut agent_sum, mut opponent_sum) = (0, 0);
        for opp in opponent {
            let outcome = engine.observe_opponent_move(opp).expect("pending");
            let p = payoff(outcome.agent_move, outcome.opponent_move);
            agent_sum += p.agent;
            opponent_sum += p.opponent;
            prop_assert_eq!(outcome.agent_total, agent_sum);
            prop_assert_eq!(outcome.opponent_total, opponent_sum);
        }
        prop_assert_eq!(engine.scores().agent, agent_sum);
        prop_assert_eq!(engine.scores().opponent, opponent_sum);
    }
}

// ---------------------------------------------------------------------------
// Property: swapping both moves swaps the payoffs
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn payoff_matrix_is_antisymmetric(a in prop_oneof![Just(Move::Cooperate), Just(Move::Defect)],
                                      o in prop_oneof![Just(Move::Cooperate), Just(Move::Defect)]) {
        prop_assert_eq!(payoff(a, o).agent, payoff(o, a).opponent);
    }
}

// ---------------------------------------------------------------------------
// Property: with memory that never recalls, play is pure tit for tat
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn amnesia_means_tit_for_tat(opponent in arb_moves(60), opening in prop_oneof![Just(1.0), Just(-1.0)]) {
        let mut engine = DeclarativeEngine::new(Amnesia::default(), FixedNoise(opening), EngineConfig::default());
        engine.reset();
        for opp in opponent {
            let outcome = engine.observe_opponent_move(opp).expect("pending");
            prop_assert_eq!(outcome.next_move, opp);
        }
    }
}

// ---------------------------------------------------------------------------
// Property: one experience per scored round after the first
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn store_grows_by_one_per_round(opponent in arb_moves(40)) {
        let mut engine = DeclarativeEngine::new(Amnesia::default(), FixedNoise(1.0), EngineConfig::default());
        engine.reset();
        let rounds = opponent.len();
        for opp in opponent {
            engine.observe_opponent_move(opp);
        }
        prop_assert_eq!(engine.memory().stored.len(), rounds.saturating_sub(1));
        let times: Vec<f64> = engine.memory().stored.iter().map(|(_, t)| *t).collect();
        prop_assert!(times.windows(2).all(|w| w[0] < w[1]));
    }
}

// ---------------------------------------------------------------------------
// Property: the simulated clock never runs backwards
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn clock_is_monotone(opponent in arb_moves(40), seed in any::<u64>()) {
        let mut engine = DeclarativeEngine::new(
            ChunkStore::new(RecallConfig::default().memory, Some(seed)),
            LogisticNoise::seeded(seed),
            EngineConfig::default(),
        );
        engine.reset();
        let mut last = engine.time();
        for opp in opponent {
            engine.observe_opponent_move(opp);
            prop_assert!(engine.time() >= last + 2.0 - 1e-9);
            last = engine.time();
        }
    }
}
