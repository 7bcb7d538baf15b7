use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

use super::agent::Agent;
use super::search::Position;

/// An agent that selects uniformly at random from the legal successors.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Position> Agent<S> for RandomAgent {
    fn select_move(&mut self, state: &S, _deadline: Instant) -> S {
        let mut successors = state.successors();
        if successors.is_empty() {
            return state.pass();
        }
        let idx = self.rng.random_range(0..successors.len());
        successors.swap_remove(idx)
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn test_random_agent_selects_legal_successor() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let successors = state.successors();

        for _ in 0..100 {
            let chosen = agent.select_move(&state, Instant::now());
            assert!(successors.contains(&chosen));
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            state = if turn % 2 == 0 {
                agent1.select_move(&state, Instant::now())
            } else {
                agent2.select_move(&state, Instant::now())
            };
            turn += 1;
        }

        assert!(state.outcome().is_some());
        assert!(turn <= 16);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(Agent::<GameState>::name(&agent), "Random");
    }
}
