#[cfg(test)]
mod tests {
    use crate::{
        is_terminal, state_key, Category, CompactState, CoreError, Dice, FullState, RulesConfig,
        TurnState,
    };

    #[test]
    fn fresh_full_state() {
        let s = FullState::new();
        for cat in Category::ALL {
            assert!(!s.is_category_used(cat));
            assert_eq!(s.category_score(cat), None);
        }
        assert_eq!(s.remaining_rerolls(), 2);
        assert_eq!(s.dice(), &Dice::new());
        assert_eq!(s.remaining_upper_bonus(), 63);
        assert!(!s.is_yahtzee_recorded());
        assert!(!is_terminal(&s));
    }

    #[test]
    fn zero_score_counts_as_used() {
        let mut s = FullState::new();
        s.record_score(Category::Yahtzee, 0);
        assert!(s.is_category_used(Category::Yahtzee));
        assert_eq!(s.category_score(Category::Yahtzee), Some(0));
        // Used with a zero is not "recorded".
        assert!(!s.is_yahtzee_recorded());
    }

    #[test]
    fn scores_accumulate() {
        let mut s = FullState::new();
        s.record_score(Category::Yahtzee, 50);
        s.record_score(Category::Yahtzee, 50);
        assert_eq!(s.category_score(Category::Yahtzee), Some(100));
        assert!(s.is_yahtzee_recorded());
        assert_eq!(s.total_score(), 100);
    }

    #[test]
    fn remaining_upper_bonus_floors_at_zero() {
        let mut s = FullState::new();
        s.record_score(Category::Fives, 25);
        s.record_score(Category::Sixes, 30);
        // Lower categories do not count.
        s.record_score(Category::Chance, 30);
        assert_eq!(s.upper_total(), Some(55));
        assert_eq!(s.remaining_upper_bonus(), 8);

        s.record_score(Category::Fours, 20);
        assert_eq!(s.remaining_upper_bonus(), 0);
    }

    #[test]
    fn rerolls_bounded() {
        let mut s = FullState::new();
        for n in 0..=3 {
            s.set_remaining_rerolls(n).unwrap();
            assert_eq!(s.remaining_rerolls(), n);
        }
        let err = s.set_remaining_rerolls(4).unwrap_err();
        assert!(matches!(err, CoreError::OutOfRange { value: 4, max: 3, .. }));
        assert_eq!(s.remaining_rerolls(), 3);

        let mut c = CompactState::default();
        assert!(c.set_remaining_rerolls(4).is_err());
        assert_eq!(c.remaining_rerolls(), 2);
    }

    #[test]
    fn with_rules_sets_initial_rerolls() {
        let rules = RulesConfig {
            initial_rerolls: 3,
            ..RulesConfig::default()
        };
        assert_eq!(FullState::with_rules(&rules).unwrap().remaining_rerolls(), 3);

        let bad = RulesConfig {
            initial_rerolls: 9,
            ..RulesConfig::default()
        };
        assert!(FullState::with_rules(&bad).is_err());
    }

    #[test]
    fn compact_projection_copies_flags() {
        let mut full = FullState::new();
        full.record_score(Category::Threes, 9);
        full.record_score(Category::Yahtzee, 50);
        full.record_score(Category::Chance, 0);
        full.set_dice(Dice::from_faces([2, 2, 3, 4, 5]).unwrap());
        full.set_remaining_rerolls(1).unwrap();

        let c = CompactState::from(&full);
        for cat in Category::ALL {
            assert_eq!(c.is_category_used(cat), full.is_category_used(cat), "{}", cat);
        }
        assert_eq!(c.dice(), full.dice());
        assert_eq!(c.remaining_rerolls(), 1);
        assert_eq!(c.remaining_upper_bonus(), 54);
        assert!(c.is_yahtzee_recorded());
        assert_eq!(c.upper_total(), None);
        assert_eq!(c.used_count(), 3);
    }

    #[test]
    fn compact_upper_bonus_is_frozen_at_projection() {
        let mut c = CompactState::from(&FullState::new());
        c.record_score(Category::Sixes, 30);
        assert!(c.is_category_used(Category::Sixes));
        assert_eq!(c.remaining_upper_bonus(), 63);
    }

    #[test]
    fn compact_yahtzee_flag_requires_positive_score() {
        let mut c = CompactState::default();
        c.record_score(Category::Yahtzee, 0);
        assert!(c.is_category_used(Category::Yahtzee));
        assert!(!c.is_yahtzee_recorded());

        let mut c = CompactState::default();
        c.record_score(Category::Yahtzee, 50);
        assert!(c.is_yahtzee_recorded());
    }

    #[test]
    fn terminal_when_all_used() {
        let mut s = FullState::new();
        for cat in Category::ALL {
            assert!(!is_terminal(&s));
            s.record_score(cat, 0);
        }
        assert!(is_terminal(&s));
        assert!(is_terminal(&CompactState::from(&s)));
    }

    #[test]
    fn state_key_distinguishes_fields() {
        let base = CompactState::default();
        let k0 = state_key(&base).unwrap();

        let mut used = base;
        used.record_score(Category::Chance, 0);
        let mut rolled = base;
        rolled.set_dice(Dice::from_faces([1, 1, 6]).unwrap());
        let mut spent = base;
        spent.consume_reroll();
        let mut yahtzee = base;
        yahtzee.record_score(Category::Yahtzee, 50);

        let keys = [
            k0,
            state_key(&used).unwrap(),
            state_key(&rolled).unwrap(),
            state_key(&spent).unwrap(),
            state_key(&yahtzee).unwrap(),
        ];
        for i in 0..keys.len() {
            for j in (i + 1)..keys.len() {
                assert_ne!(keys[i], keys[j], "keys {} and {} collide", i, j);
            }
        }
        assert_eq!(state_key(&CompactState::default()), Ok(k0));
    }

    #[test]
    fn state_key_fits_47_bits() {
        let mut full = FullState::new();
        for cat in Category::ALL {
            full.record_score(cat, 0);
        }
        full.set_dice(Dice::from_faces([6, 6, 6, 6, 6]).unwrap());
        full.set_remaining_rerolls(3).unwrap();
        let k = state_key(&CompactState::from(&full)).unwrap();
        assert!(k < (1u64 << 47));
    }

    #[test]
    fn state_key_rejects_counts_past_four_bits() {
        let mut c = CompactState::default();
        c.set_dice(Dice::from_faces(vec![1u8; 15]).unwrap());
        assert!(state_key(&c).is_ok());

        c.set_dice(Dice::from_faces(vec![1u8; 16]).unwrap());
        assert_eq!(
            state_key(&c),
            Err(CoreError::OutOfRange {
                what: "die count",
                value: 16,
                max: 15
            })
        );

        // 17 twos would alias a single two if the count were masked.
        let mut one = CompactState::default();
        one.set_dice(Dice::from_faces([2]).unwrap());
        let mut many = CompactState::default();
        many.set_dice(Dice::from_faces(vec![2u8; 17]).unwrap());
        assert!(state_key(&one).is_ok());
        assert!(state_key(&many).is_err());
    }

    #[test]
    fn states_serialize_roundtrip() {
        let mut full = FullState::new();
        full.record_score(Category::FullHouse, 25);
        full.set_dice(Dice::from_faces([1, 3, 3]).unwrap());
        let json = serde_json::to_string(&full).unwrap();
        let back: FullState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, full);

        let c = CompactState::from(&full);
        let json = serde_json::to_string(&c).unwrap();
        let back: CompactState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
