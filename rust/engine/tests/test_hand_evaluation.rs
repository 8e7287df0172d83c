use headsup_engine::cards::{parse_cards, Card, Rank as R, Suit as S};
use headsup_engine::hand::{compare, evaluate, evaluate_holding, HandRank};

fn c(s: S, r: R) -> Card {
    Card::new(r, s)
}

fn rank_of(s: &str) -> HandRank {
    evaluate(&parse_cards(s).unwrap()).unwrap().rank
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let hs = evaluate(&cards).unwrap();
    assert_eq!(hs.rank, HandRank::RoyalFlush);
    assert_eq!(hs.kickers, vec![14, 13, 12, 11, 10]);
}

#[test]
fn every_category_is_recognized() {
    assert_eq!(rank_of("9s 8s 7s 6s 5s 2d 2c"), HandRank::StraightFlush);
    assert_eq!(rank_of("Ac Ad Ah As Kc Qd 2h"), HandRank::FourOfAKind);
    assert_eq!(rank_of("Kc Kd Kh Qc Qd 2h 3s"), HandRank::FullHouse);
    assert_eq!(rank_of("2h 7h Jh Qh 9h 3c 4d"), HandRank::Flush);
    assert_eq!(rank_of("5c 6h 7c 8h 9d 2s 3c"), HandRank::Straight);
    assert_eq!(rank_of("Qc Qh Qd 2s 3c 4h 9d"), HandRank::ThreeOfAKind);
    assert_eq!(rank_of("Qc Qh 4d 4s 3c 8h 9d"), HandRank::TwoPair);
    assert_eq!(rank_of("Qc Qh 4d 5s 3c 8h 9d"), HandRank::OnePair);
    assert_eq!(rank_of("Qc Jh 4d 5s 3c 8h 9d"), HandRank::HighCard);
}

#[test]
fn category_ordering_is_correct() {
    let quads = evaluate(&parse_cards("Ac Ad Ah As Kc Qd 2h").unwrap()).unwrap();
    let full_house = evaluate(&parse_cards("Kc Kd Kh Qc Qd 2h 3s").unwrap()).unwrap();
    assert!(compare(&quads, &full_house).is_gt());
    assert!(quads > full_house);
}

#[test]
fn wheel_is_five_high_and_loses_to_six_high() {
    let wheel = evaluate(&parse_cards("Ac 2d 3h 4s 5c").unwrap()).unwrap();
    let six_high = evaluate(&parse_cards("2c 3d 4h 5s 6c").unwrap()).unwrap();
    assert_eq!(wheel.rank, HandRank::Straight);
    assert_eq!(wheel.kickers, vec![5, 4, 3, 2, 1]);
    assert!(compare(&wheel, &six_high).is_lt());
}

#[test]
fn steel_wheel_is_a_straight_flush() {
    let e = evaluate(&parse_cards("As 2s 3s 4s 5s Kd Qd").unwrap()).unwrap();
    assert_eq!(e.rank, HandRank::StraightFlush);
    assert_eq!(e.kickers, vec![5, 4, 3, 2, 1]);
}

#[test]
fn two_pair_compares_high_pair_then_low_pair_then_kicker() {
    let kings_up = evaluate(&parse_cards("Kc Kd 3h 3s 2c").unwrap()).unwrap();
    let queens_up = evaluate(&parse_cards("Qc Qd Jh Js Ac").unwrap()).unwrap();
    assert!(kings_up > queens_up);

    let low_fours = evaluate(&parse_cards("Kc Kd 4h 4s 2c").unwrap()).unwrap();
    assert!(low_fours > kings_up);

    let better_kicker = evaluate(&parse_cards("Kh Ks 4d 4c 9c").unwrap()).unwrap();
    assert!(better_kicker > low_fours);
}

#[test]
fn kickers_break_one_pair_ties() {
    let a = evaluate(&parse_cards("Ah Ad Kc 7s 3d").unwrap()).unwrap();
    let b = evaluate(&parse_cards("As Ac Qc Js Td").unwrap()).unwrap();
    assert_eq!(a.kickers, vec![14, 14, 13, 7, 3]);
    assert!(a > b);
}

#[test]
fn board_plays_for_both_is_a_tie() {
    let board = parse_cards("Ts Js Qs Ks As").unwrap();
    let a = evaluate_holding(&parse_cards("2c 2d").unwrap(), &board).unwrap();
    let b = evaluate_holding(&parse_cards("3c 4d").unwrap(), &board).unwrap();
    assert_eq!(a.rank, HandRank::RoyalFlush);
    assert!(compare(&a, &b).is_eq());
}

#[test]
fn fewer_than_five_cards_is_an_error() {
    let err = evaluate_holding(&parse_cards("As Ad").unwrap(), &parse_cards("Kc Kd").unwrap());
    assert!(err.is_err());
}
