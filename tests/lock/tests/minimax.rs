//! Minimax agent behaviour over whole games.

use tilepath_harness::worlds::tic_tac_toe::{GameState, Mark, MinimaxAgent};

/// Play `state` out with minimax for `agent` and every reply for the opponent,
/// returning the worst final utility the agent can be forced into.
fn worst_case(agent: MinimaxAgent, state: GameState) -> i8 {
    match state.to_move() {
        None => state.utility(agent.symbol()),
        Some(mover) if mover == agent.symbol() => {
            let position = agent.action(&state).unwrap();
            worst_case(agent, state.result(position).unwrap())
        }
        Some(_) => state
            .actions()
            .into_iter()
            .map(|p| worst_case(agent, state.result(p).unwrap()))
            .min()
            .unwrap(),
    }
}

#[test]
fn second_player_never_loses() {
    let agent = MinimaxAgent::new(Mark::O);
    assert!(worst_case(agent, GameState::new()) >= 0);
}

#[test]
fn first_player_never_loses_after_any_reply() {
    let agent = MinimaxAgent::new(Mark::X);
    let opening = GameState::new().result(agent.action(&GameState::new()).unwrap()).unwrap();
    for reply in opening.actions() {
        let state = opening.result(reply).unwrap();
        assert!(worst_case(agent, state) >= 0, "lost after reply {reply}");
    }
}

#[test]
fn empty_board_is_a_draw_under_optimal_play() {
    let (value, position) = MinimaxAgent::new(Mark::X).minimax(&GameState::new());
    assert_eq!(value, 0);
    // Every opening draws, so the first position wins the tie.
    assert_eq!(position, Some(0));
}

#[test]
fn agent_takes_the_win() {
    let state = GameState::parse("XX_/OO_/___").unwrap();
    assert_eq!(state.to_move(), Some(Mark::X));
    assert_eq!(MinimaxAgent::new(Mark::X).action(&state), Some(2));
}
