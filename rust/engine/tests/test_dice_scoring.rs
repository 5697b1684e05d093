use parlor_engine::combination::{best, classify, score, Category};
use parlor_engine::dice::cup_of;
use parlor_engine::scorecard::{ScoreCard, UPPER_BONUS, YAHTZEE_BONUS};

fn categories(values: &[u8]) -> Vec<Category> {
    classify(cup_of(values).as_slice())
        .into_iter()
        .map(|s| s.category)
        .collect()
}

#[test]
fn five_of_a_kind_lists_every_satisfied_box() {
    let found = categories(&[4, 4, 4, 4, 4]);
    for expected in [
        Category::Yahtzee,
        Category::FourOfAKind,
        Category::ThreeOfAKind,
        Category::Fours,
        Category::Chance,
    ] {
        assert!(found.contains(&expected), "missing {expected}");
    }
    for absent in [
        Category::SmallStraight,
        Category::LargeStraight,
        Category::FullHouse,
        Category::Ones,
    ] {
        assert!(!found.contains(&absent), "unexpected {absent}");
    }
    assert_eq!(found[0], Category::Yahtzee);
}

#[test]
fn large_straight_outranks_its_small_straight() {
    let roll = cup_of(&[2, 3, 4, 5, 6]);
    let top = best(roll.as_slice());
    assert_eq!(top.category, Category::LargeStraight);
    assert_eq!(top.score, 40);
    assert_eq!(score(Category::SmallStraight, roll.as_slice()), 30);
    assert_eq!(score(Category::Chance, roll.as_slice()), 20);
}

#[test]
fn kinds_score_the_whole_roll() {
    let roll = cup_of(&[5, 5, 5, 5, 2]);
    assert_eq!(score(Category::FourOfAKind, roll.as_slice()), 22);
    assert_eq!(score(Category::ThreeOfAKind, roll.as_slice()), 22);
    assert_eq!(score(Category::Fives, roll.as_slice()), 20);
    assert_eq!(score(Category::FullHouse, roll.as_slice()), 0);
}

#[test]
fn short_cup_yields_only_the_sentinel() {
    assert_eq!(categories(&[6, 6, 6]), vec![Category::NoCombination]);
    assert_eq!(best(cup_of(&[]).as_slice()).score, 0);
}

#[test]
fn fill_is_idempotent() {
    let card = ScoreCard::new();
    let once = card.fill(Category::Sixes, 18);
    assert_eq!(once.fill(Category::Sixes, 12), once);
    assert_eq!(once.get(Category::Sixes), Some(18));
    assert_eq!(card.get(Category::Sixes), None);
}

#[test]
fn upper_bonus_applies_at_threshold() {
    let card = ScoreCard::new()
        .fill(Category::Fours, 12)
        .fill(Category::Fives, 15)
        .fill(Category::Sixes, 18)
        .fill(Category::Threes, 9)
        .fill(Category::Twos, 6);
    assert_eq!(card.upper_total(), 60);
    assert_eq!(card.upper_bonus(), 0);

    let card = card.fill(Category::Ones, 3);
    assert_eq!(card.upper_total(), 63);
    assert_eq!(card.upper_bonus(), UPPER_BONUS);
    assert_eq!(card.total(), 63 + UPPER_BONUS);
}

#[test]
fn apply_best_takes_highest_open_box() {
    let roll = cup_of(&[3, 3, 3, 5, 5]);
    let (card, fill) = ScoreCard::new().apply_best(roll.as_slice());
    let fill = fill.expect("open card");
    assert_eq!(fill.category, Category::FullHouse);
    assert_eq!(fill.score, 25);

    let (card, fill) = card.apply_best(roll.as_slice());
    let fill = fill.expect("open card");
    assert_eq!(fill.category, Category::ThreeOfAKind);
    assert_eq!(fill.score, 19);
    assert_eq!(card.total(), 44);
}

#[test]
fn exhausted_roll_scratches_first_open_box() {
    // Every box this roll qualifies for is already taken.
    let roll = cup_of(&[1, 1, 1, 1, 1]);
    let card = [
        Category::Ones,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::Yahtzee,
        Category::Chance,
    ]
    .into_iter()
    .fold(ScoreCard::new(), |card, c| card.fill(c, 0));

    let (card, fill) = card.apply_best(roll.as_slice());
    let fill = fill.expect("open card");
    assert_eq!(fill.category, Category::Twos);
    assert_eq!(fill.score, 0);
    assert_eq!(fill.bonus, 0, "a scratched Yahtzee box never pays the bonus");
    assert_eq!(card.get(Category::Twos), Some(0));
}

#[test]
fn yahtzee_bonus_requires_a_scored_yahtzee_box() {
    let roll = cup_of(&[6, 6, 6, 6, 6]);
    let (card, first) = ScoreCard::new().apply_best(roll.as_slice());
    let first = first.expect("open card");
    assert_eq!(first.category, Category::Yahtzee);
    assert_eq!(first.bonus, 0);
    assert_eq!(card.yahtzee_bonus(), 0);

    let (card, second) = card.apply_best(roll.as_slice());
    let second = second.expect("open card");
    assert_eq!(second.bonus, YAHTZEE_BONUS);
    // Four of a Kind, Three of a Kind, Sixes and Chance all score 30.
    assert_eq!(second.category, Category::FourOfAKind);
    assert_eq!(card.yahtzee_bonus(), YAHTZEE_BONUS);
    assert_eq!(card.total(), 50 + 30 + YAHTZEE_BONUS);
}
