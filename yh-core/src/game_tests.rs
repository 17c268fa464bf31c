#[cfg(test)]
mod tests {
    use crate::category::Category;
    use crate::config::{GameConfig, GameMode};
    use crate::error::GameError;
    use crate::game::{Game, OpponentEvent};
    use crate::policy;
    use crate::state::Player;

    fn solo_game(seed: u64) -> Game {
        Game::new(GameConfig {
            mode: GameMode::Solo,
            seed: Some(seed),
        })
    }

    #[test]
    fn same_seed_same_actions_same_snapshots() {
        let mut a = Game::from_seed(999);
        let mut b = Game::from_seed(999);

        for game in [&mut a, &mut b] {
            game.roll().unwrap();
            game.toggle_hold(2).unwrap();
            game.roll().unwrap();
            game.score_category(Category::Chance).unwrap();
        }

        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn reset_replays_a_fixed_seed_game() {
        let mut game = solo_game(31);
        game.roll().unwrap();
        let first = game.roll().unwrap();
        game.score_category(Category::Chance).unwrap();

        game.reset();
        assert_eq!(game.snapshot(), solo_game(31).snapshot());

        game.roll().unwrap();
        let replay = game.roll().unwrap();
        assert_eq!(first, replay);
    }

    #[test]
    fn thirteen_turns_complete_a_solo_card() {
        let mut game = solo_game(7);
        let mut committed = Vec::new();

        for category in Category::ALL {
            game.roll().unwrap();
            let event = game.score_category(category).unwrap();
            committed.push(event.score);
        }

        let snapshot = game.snapshot();
        assert!(snapshot.game_over);
        assert_eq!(snapshot.winner, None);
        assert_eq!(snapshot.score_cards.len(), 1);

        let card = &snapshot.score_cards[0];
        assert!(card.complete);

        // Grand total must equal the independently summed commitments plus
        // both bonuses.
        let recorded: u32 = committed.iter().sum();
        let expected = recorded + card.upper_bonus + card.yahtzee_bonus_count * 100;
        assert_eq!(card.grand_total, expected);
        assert_eq!(
            card.upper_bonus,
            if card.upper_total >= 63 { 35 } else { 0 }
        );
    }

    #[test]
    fn a_versus_game_runs_to_a_winner() {
        let mut game = Game::from_seed(42);

        for _ in 0..13 {
            // Human: one roll, then the same greedy policy the opponent uses.
            game.roll().unwrap();
            let category =
                policy::choose_category(&game.potential_scores(), game.state().card(Player::Human));
            game.score_category(category).unwrap();
            if game.is_over() {
                break;
            }

            let events = game.play_opponent_turn().unwrap();
            assert!(matches!(events.first(), Some(OpponentEvent::Rolled { .. })));
            assert!(matches!(events.last(), Some(OpponentEvent::Scored { .. })));
            let rolls = events
                .iter()
                .filter(|e| matches!(e, OpponentEvent::Rolled { .. }))
                .count();
            assert_eq!(rolls, 3);
        }

        let snapshot = game.snapshot();
        assert!(snapshot.game_over);
        assert_eq!(snapshot.score_cards.len(), 2);
        assert!(snapshot.score_cards.iter().all(|c| c.complete));

        let human = snapshot.score_cards[0].grand_total;
        let opponent = snapshot.score_cards[1].grand_total;
        let expected = match human.cmp(&opponent) {
            std::cmp::Ordering::Greater => crate::Winner::Human,
            std::cmp::Ordering::Less => crate::Winner::Opponent,
            std::cmp::Ordering::Equal => crate::Winner::Tie,
        };
        assert_eq!(snapshot.winner, Some(expected));
    }

    #[test]
    fn opponent_turn_is_a_no_op_on_the_humans_move() {
        let mut game = Game::from_seed(5);
        assert_eq!(game.play_opponent_turn().unwrap(), vec![]);

        let mut solo = solo_game(5);
        solo.roll().unwrap();
        assert_eq!(solo.play_opponent_turn().unwrap(), vec![]);
    }

    #[test]
    fn a_rejected_commit_leaves_the_game_untouched() {
        let mut game = solo_game(11);
        game.roll().unwrap();
        game.score_category(Category::Chance).unwrap();
        game.roll().unwrap();

        let before = game.snapshot();
        let err = game.score_category(Category::Chance).unwrap_err();
        assert_eq!(
            err,
            GameError::AlreadyScored {
                category: Category::Chance
            }
        );
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn finished_games_reject_every_operation() {
        let mut game = solo_game(3);
        for category in Category::ALL {
            game.roll().unwrap();
            game.score_category(category).unwrap();
        }
        assert!(game.is_over());

        assert_eq!(game.roll().unwrap_err(), GameError::GameAlreadyOver);
        assert_eq!(game.toggle_hold(0).unwrap_err(), GameError::GameAlreadyOver);
        assert_eq!(
            game.score_category(Category::Chance).unwrap_err(),
            GameError::GameAlreadyOver
        );
        assert_eq!(
            game.play_opponent_turn().unwrap_err(),
            GameError::GameAlreadyOver
        );
    }

    #[test]
    fn category_names_reach_the_engine() {
        let mut game = solo_game(1);
        game.roll().unwrap();

        let err = game.score_category_by_name("grand_slam").unwrap_err();
        assert!(matches!(err, GameError::UnknownCategory { .. }));

        let event = game.score_category_by_name("full_house").unwrap();
        assert_eq!(event.category, Category::FullHouse);
    }

    #[test]
    fn snapshots_round_trip_through_json() {
        let mut game = Game::from_seed(17);
        game.roll().unwrap();
        game.toggle_hold(4).unwrap();

        let snapshot = game.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: crate::GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
