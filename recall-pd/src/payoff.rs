//! Payoff matrix and running scores.
//!
//! | agent \ opponent | coop      | defect    |
//! |------------------|-----------|-----------|
//! | coop             | +1 / +1   | −10 / +10 |
//! | defect           | +10 / −10 | −1 / −1   |
//!
//! Entries are `agent / opponent`. Swapping both moves swaps the payoffs.

use serde::{Deserialize, Serialize};

use crate::moves::Move;

/// Points awarded to each player for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payoff {
    /// Points for the agent.
    pub agent: i32,
    /// Points for the opponent.
    pub opponent: i32,
}

/// Look up the payoff for one round.
#[must_use]
pub fn payoff(agent: Move, opponent: Move) -> Payoff {
    let (agent, opponent) = match (agent, opponent) {
        (Move::Cooperate, Move::Cooperate) => (1, 1),
        (Move::Cooperate, Move::Defect) => (-10, 10),
        (Move::Defect, Move::Cooperate) => (10, -10),
        (Move::Defect, Move::Defect) => (-1, -1),
    };
    Payoff { agent, opponent }
}

/// Cumulative totals for one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// The agent's total.
    pub agent: i32,
    /// The opponent's total.
    pub opponent: i32,
    /// Payoff of the most recent round.
    pub last: Option<Payoff>,
    /// Rounds scored so far.
    pub rounds: u32,
}

impl Scoreboard {
    /// Score one round and return its payoff.
    pub fn record(&mut self, agent: Move, opponent: Move) -> Payoff {
        let p = payoff(agent, opponent);
        self.agent += p.agent;
        self.opponent += p.opponent;
        self.last = Some(p);
        self.rounds += 1;
        p
    }

    /// Player-facing summary of the round just recorded.
    #[must_use]
    pub fn feedback(&self, agent_move: Move) -> String {
        let p = self.last.unwrap_or(Payoff {
            agent: 0,
            opponent: 0,
        });
        format!(
            "The agent chooses {agent_move}\nYou get {} and I get {}\nAgent score is {} and the opponent's score is {}\n",
            p.opponent, p.agent, self.agent, self.opponent
        )
    }
}
