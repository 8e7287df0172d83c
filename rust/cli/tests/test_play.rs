//! Interactive play driven through an in-memory stdin.

use std::io::Cursor;

use headsup_cli::CliError;
use headsup_cli::cli::Vs;
use headsup_cli::commands::handle_play_command;
use headsup_cli::wallet::{TransactionKind, Wallet};

fn play(
    vs: Vs,
    hands: u32,
    wallet: Option<&std::path::Path>,
    input: &str,
) -> (Result<(), CliError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let result = handle_play_command(
        vs,
        Some(hands),
        Some(42),
        wallet.map(|p| p.to_string_lossy().into_owned()),
        &mut out,
        &mut err,
        &mut stdin,
    );
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn blinds_are_announced_before_the_first_prompt() {
    let (result, out, _) = play(Vs::Human, 1, None, "q\n");
    assert!(result.is_ok());
    let blinds = out.find("posts big blind 10").unwrap();
    let prompt = out.find("Enter action").unwrap();
    assert!(blinds < prompt);
}

#[test]
fn an_illegal_check_is_refused_and_reprompted() {
    // The button posts the small blind and owes 5 more, so checking is illegal.
    let (result, out, err) = play(Vs::Human, 1, None, "check\nfold\n");
    assert!(result.is_ok());
    assert!(err.contains("Invalid action"), "{}", err);
    assert!(out.contains("you: folds"));
    assert!(out.contains("Stacks: you 995, guest 1005"));
}

#[test]
fn hot_seat_hand_plays_to_showdown() {
    let line = "call\ncheck\n";
    let streets = "check\ncheck\n".repeat(3);
    let (result, out, _) = play(Vs::Human, 1, None, &format!("{line}{streets}"));
    assert!(result.is_ok());
    assert!(out.contains("shows"), "{}", out);
    assert!(out.contains("Hands played: 1"));
}

#[test]
fn wallet_books_every_finished_hand() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    let mut wallet = Wallet::new("you", 5_000);
    wallet.save(&path).unwrap();

    let (result, out, _) = play(Vs::Human, 2, Some(&path), "fold\nfold\n");
    assert!(result.is_ok());
    assert!(out.contains("Hands played: 2"));

    let wallet = Wallet::load(&path).unwrap();
    let bets: Vec<u64> = wallet
        .by_kind(TransactionKind::Bet)
        .map(|t| t.amount)
        .collect();
    // Hand 1: the wallet seat has the button and folds its small blind.
    // Hand 2: the button moves, the other seat folds and the big blind wins 15.
    assert_eq!(bets, vec![5, 10]);
    assert_eq!(wallet.by_kind(TransactionKind::Loss).count(), 1);
    assert_eq!(wallet.by_kind(TransactionKind::Win).count(), 1);
    assert_eq!(wallet.balance(), 5_000);
    assert_eq!(wallet.net_profit(), 0);
}

#[test]
fn wallet_below_buy_in_refuses_to_play() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wallet.json");
    Wallet::new("you", 100).save(&path).unwrap();

    let (result, _, err) = play(Vs::Ai, 1, Some(&path), "");
    assert!(matches!(result, Err(CliError::Wallet(_))));
    assert!(err.contains("below the buy-in"));
}

#[test]
fn bot_answers_between_human_turns() {
    let (result, out, _) = play(Vs::Ai, 1, None, &"call\n".repeat(10));
    assert!(result.is_ok() || matches!(result, Err(CliError::Interrupted(_))));
    assert!(out.contains("bot: "), "{}", out);
}
