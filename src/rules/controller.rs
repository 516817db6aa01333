//! Round and game sequencing.
//!
//! Each round runs consolidate, draw, react, cost, resolve, in that order,
//! stopping early if the game is lost. Between rounds `advance_round`
//! moves the counter and declares the win after the last round.

use serde::{Deserialize, Serialize};

use crate::core::{DrawnCard, EngineError, GameState, Outcome, RandomSource};
use crate::engine::{
    apply_cost, apply_reactions, consolidate, draw_for_round, resolve_remaining, ReactionSelection,
};
use crate::events::ResolutionEvent;

use super::decision::ReactionDecider;

/// What happened in one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: i32,
    /// Whether step zero rearranged the piles.
    pub consolidated: bool,
    pub drawn: Vec<DrawnCard>,
    pub reacted: ReactionSelection,
    pub cost: i64,
    pub power_after: i64,
    /// Reaction events followed by resolution events.
    pub events: Vec<ResolutionEvent>,
    pub outcome: Outcome,
}

/// How a whole game went.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub outcome: Outcome,
    pub rounds_played: usize,
    pub final_power: i64,
    pub reports: Vec<RoundReport>,
}

/// Move to the next round.
///
/// Reaching the configured round count while still in progress wins the
/// game. A finished game is left as it is.
pub fn advance_round<R>(state: &mut GameState<R>) -> Outcome {
    let outcome = state.step_round();
    match outcome {
        Outcome::InProgress => log::info!("round {} begins, power {}", state.round() + 1, state.power()),
        Outcome::Won => log::info!("survived all {} rounds", state.config().rounds),
        Outcome::Lost => {}
    }
    outcome
}

/// Drives rounds, asking a `ReactionDecider` for the player's choices.
///
/// ```
/// use night_shift::core::{GameState, Outcome};
/// use night_shift::rules::{PassiveDecider, RoundController};
///
/// let mut state = GameState::new(42);
/// let summary = RoundController::new(PassiveDecider).play_game(&mut state);
/// assert_ne!(summary.outcome, Outcome::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct RoundController<D> {
    decider: D,
}

impl<D: ReactionDecider> RoundController<D> {
    pub fn new(decider: D) -> Self {
        Self { decider }
    }

    pub fn decider(&self) -> &D {
        &self.decider
    }

    pub fn decider_mut(&mut self) -> &mut D {
        &mut self.decider
    }

    pub fn into_decider(self) -> D {
        self.decider
    }

    /// Play the current round.
    ///
    /// Panics if called before the first `advance_round`.
    pub fn play_round<R: RandomSource>(
        &mut self,
        state: &mut GameState<R>,
    ) -> Result<RoundReport, EngineError> {
        if !state.in_progress() {
            return Err(EngineError::GameFinished(state.outcome()));
        }
        assert!(state.round() >= 0, "advance_round must run before the first round");

        let consolidated = state.round() > 0 && consolidate(state);

        let drawn = draw_for_round(state);

        let selection = if state.can_react() && drawn.iter().any(|d| d.card.is_reactable()) {
            self.request_reactions(&drawn, state.power(), state.config().max_reactions)
        } else {
            ReactionSelection::none()
        };

        let mut events = apply_reactions(state, &drawn, &selection);
        let cost = apply_cost(state, &selection, &drawn);
        events.extend(resolve_remaining(state, selection.remaining(&drawn)));

        match state.outcome() {
            Outcome::Lost => log::info!("lost in round {}", state.round() + 1),
            _ => log::debug!(
                "round {} done: {} drawn, {} reacted, power {}",
                state.round() + 1,
                drawn.len(),
                selection.len(),
                state.power()
            ),
        }

        Ok(RoundReport {
            round: state.round(),
            consolidated,
            drawn,
            reacted: selection,
            cost,
            power_after: state.power(),
            events,
            outcome: state.outcome(),
        })
    }

    /// Play rounds until the game is won or lost.
    pub fn play_game<R: RandomSource>(&mut self, state: &mut GameState<R>) -> GameSummary {
        let mut reports = Vec::new();

        while advance_round(state) == Outcome::InProgress {
            let Ok(report) = self.play_round(state) else {
                break;
            };
            reports.push(report);
        }

        GameSummary {
            outcome: state.outcome(),
            rounds_played: reports.len(),
            final_power: state.power(),
            reports,
        }
    }

    /// Ask until the decider gives a valid response.
    fn request_reactions(
        &mut self,
        drawn: &[DrawnCard],
        power: i64,
        max_reactions: usize,
    ) -> ReactionSelection {
        loop {
            let response = self.decider.choose(drawn, power);
            match ReactionSelection::validate(drawn, &response, max_reactions) {
                Ok(selection) => return selection,
                Err(error) => {
                    log::warn!("reaction selection rejected: {}", error);
                    self.decider.rejected(&error);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, GameConfig, GameRng, PileId, SelectionError};
    use crate::engine::ReactionPick;
    use crate::piles::PileSet;
    use crate::rules::decision::{PassiveDecider, ScriptedDecider};

    fn state(piles: [Vec<Card>; 4]) -> GameState {
        GameState::from_piles(GameConfig::default(), PileSet::from_cards(piles), GameRng::new(0))
    }

    #[test]
    #[should_panic(expected = "advance_round")]
    fn test_play_round_requires_advance() {
        let mut state = GameState::new(1);
        let _ = RoundController::new(PassiveDecider).play_round(&mut state);
    }

    #[test]
    fn test_finished_game_is_rejected() {
        let mut state = state([vec![], vec![], vec![], vec![Card::Animatronic]]);
        let mut controller = RoundController::new(PassiveDecider);

        advance_round(&mut state);
        let report = controller.play_round(&mut state).unwrap();
        assert_eq!(report.outcome, Outcome::Lost);

        assert_eq!(
            controller.play_round(&mut state),
            Err(EngineError::GameFinished(Outcome::Lost))
        );
        assert_eq!(advance_round(&mut state), Outcome::Lost);
    }

    #[test]
    fn test_invalid_selection_is_reasked() {
        let mut state = state([
            vec![Card::ArrowDown, Card::EmptyRoom],
            vec![Card::EmptyRoom],
            vec![],
            vec![],
        ]);
        let decider = ScriptedDecider::new([
            vec![ReactionPick::Card(1)],
            vec![ReactionPick::Card(0), ReactionPick::Card(0)],
            vec![ReactionPick::Card(0)],
        ]);
        let mut controller = RoundController::new(decider);

        advance_round(&mut state);
        let report = controller.play_round(&mut state).unwrap();

        let decider = controller.into_decider();
        assert_eq!(
            decider.rejections,
            vec![SelectionError::NotReactable(1), SelectionError::Duplicate(0)]
        );
        assert_eq!(decider.requests, 3);
        assert_eq!(report.reacted.picks(), &[0]);
        // Reacted arrow is discarded, the empty room resolves normally
        assert_eq!(state.piles.to_vecs()[0], vec![Card::EmptyRoom]);
        assert_eq!(state.discarded(), 2);
        assert!(state.check_invariants());
    }

    #[test]
    fn test_depleted_power_skips_decider() {
        let config = GameConfig::default().with_starting_power(0);
        let piles = PileSet::from_cards([vec![Card::ArrowDown, Card::EmptyRoom], vec![], vec![], vec![]]);
        let mut state = GameState::from_piles(config, piles, GameRng::new(0));
        let mut controller = RoundController::new(ScriptedDecider::new([vec![ReactionPick::Card(0)]]));

        advance_round(&mut state);
        let report = controller.play_round(&mut state).unwrap();

        assert_eq!(controller.decider().requests, 0);
        assert!(report.reacted.is_empty());
        assert_eq!(report.cost, 0);
        assert!(state.piles.is_empty(PileId::new(0)));
    }

    #[test]
    fn test_report_shows_draw_when_decider_not_asked() {
        let piles = PileSet::from_cards([
            vec![Card::ArrowDown, Card::EmptyRoom],
            vec![Card::EmptyRoom],
            vec![Card::PowerDrain],
            vec![Card::EmptyRoom],
        ]);
        let config = GameConfig::default().with_starting_power(5);
        let mut state = GameState::from_piles(config, piles, GameRng::new(0));
        let mut controller = RoundController::new(ScriptedDecider::new([vec![ReactionPick::Card(0)]]));

        advance_round(&mut state);
        let first = controller.play_round(&mut state).unwrap();
        assert_eq!(std::mem::take(&mut controller.decider_mut().requests), 1);
        assert!(first.power_after <= 0);

        advance_round(&mut state);
        let second = controller.play_round(&mut state).unwrap();
        assert_eq!(controller.decider().requests, 0);
        // The leftover empty room was consolidated into the last pile
        assert_eq!(second.drawn, vec![DrawnCard::new(Card::EmptyRoom, PileId::LAST)]);
    }

    #[test]
    fn test_first_round_skips_consolidation() {
        let mut state = state([vec![], vec![Card::EmptyRoom], vec![], vec![Card::EmptyRoom]]);
        let mut controller = RoundController::new(PassiveDecider);

        advance_round(&mut state);
        let first = controller.play_round(&mut state).unwrap();
        assert!(!first.consolidated);
        assert_eq!(first.drawn[0].pile, PileId::new(1));
    }

    #[test]
    fn test_later_rounds_consolidate() {
        let mut state = state([
            vec![Card::EmptyRoom, Card::EmptyRoom],
            vec![],
            vec![Card::EmptyRoom],
            vec![Card::EmptyRoom, Card::EmptyRoom],
        ]);
        let mut controller = RoundController::new(PassiveDecider);

        advance_round(&mut state);
        controller.play_round(&mut state).unwrap();
        advance_round(&mut state);
        let second = controller.play_round(&mut state).unwrap();

        // Before round two: [E], [], [], [E] -> [], [], [E], [E]
        assert!(second.consolidated);
        let piles: Vec<_> = second.drawn.iter().map(|d| d.pile.index()).collect();
        assert_eq!(piles, vec![2, 3]);
    }

    #[test]
    fn test_win_after_last_round() {
        let config = GameConfig::default().with_rounds(2);
        let piles = PileSet::from_cards([vec![Card::EmptyRoom; 3], vec![], vec![], vec![]]);
        let mut state = GameState::from_piles(config, piles, GameRng::new(0));

        let summary = RoundController::new(PassiveDecider).play_game(&mut state);

        assert_eq!(summary.outcome, Outcome::Won);
        assert_eq!(summary.rounds_played, 2);
        assert_eq!(state.round(), 2);
        assert_eq!(state.piles.total_cards(), 1);
    }
}
