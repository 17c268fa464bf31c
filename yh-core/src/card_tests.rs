#[cfg(test)]
mod tests {
    use crate::card::ScoreCard;
    use crate::category::Category;
    use crate::error::GameError;

    fn record_upper(card: &mut ScoreCard, per_face: [u32; 6]) {
        let upper = [
            Category::Ones,
            Category::Twos,
            Category::Threes,
            Category::Fours,
            Category::Fives,
            Category::Sixes,
        ];
        for (cat, value) in upper.into_iter().zip(per_face) {
            card.record(cat, value).unwrap();
        }
    }

    #[test]
    fn upper_bonus_at_exactly_63() {
        let mut card = ScoreCard::new();
        record_upper(&mut card, [3, 6, 9, 12, 15, 18]);
        assert_eq!(card.upper_total(), 63);
        assert_eq!(card.upper_bonus(), 35);
    }

    #[test]
    fn no_upper_bonus_at_62() {
        let mut card = ScoreCard::new();
        record_upper(&mut card, [2, 6, 9, 12, 15, 18]);
        assert_eq!(card.upper_total(), 62);
        assert_eq!(card.upper_bonus(), 0);
    }

    #[test]
    fn record_rejects_a_second_write_and_leaves_the_card_unchanged() {
        let mut card = ScoreCard::new();
        card.record(Category::FullHouse, 25).unwrap();

        let before = card;
        let err = card.record(Category::FullHouse, 0).unwrap_err();
        assert_eq!(
            err,
            GameError::AlreadyScored {
                category: Category::FullHouse
            }
        );
        assert_eq!(card, before);
        assert_eq!(card.score(Category::FullHouse), Some(25));
    }

    #[test]
    fn grand_total_sums_sections_and_bonuses() {
        let mut card = ScoreCard::new();
        record_upper(&mut card, [3, 6, 9, 12, 15, 18]); // 63 + bonus 35
        card.record(Category::ThreeOfAKind, 20).unwrap();
        card.record(Category::Yahtzee, 50).unwrap();
        card.add_yahtzee_bonus();
        card.add_yahtzee_bonus();

        assert_eq!(card.lower_total(), 70);
        assert_eq!(card.yahtzee_bonus_count(), 2);
        assert_eq!(card.grand_total(), 63 + 35 + 70 + 200);
    }

    #[test]
    fn unset_categories_score_zero_in_totals() {
        let mut card = ScoreCard::new();
        card.record(Category::Sixes, 24).unwrap();
        assert_eq!(card.upper_total(), 24);
        assert_eq!(card.lower_total(), 0);
        assert_eq!(card.grand_total(), 24);
    }

    #[test]
    fn bonus_eligibility_follows_the_recorded_yahtzee() {
        let mut fifty = ScoreCard::new();
        assert!(!fifty.bonus_eligible());
        fifty.record(Category::Yahtzee, 50).unwrap();
        assert!(fifty.bonus_eligible());

        // A sacrificed Yahtzee fills the slot but never earns bonuses.
        let mut sacrificed = ScoreCard::new();
        sacrificed.record(Category::Yahtzee, 0).unwrap();
        assert!(!sacrificed.bonus_eligible());
    }

    #[test]
    fn completeness_needs_all_13_categories() {
        let mut card = ScoreCard::new();
        for cat in Category::ALL.iter().take(12) {
            card.record(*cat, 1).unwrap();
            assert!(!card.is_complete());
        }
        card.record(Category::Chance, 7).unwrap();
        assert!(card.is_complete());
        assert_eq!(card.unset_categories().count(), 0);
    }
}
