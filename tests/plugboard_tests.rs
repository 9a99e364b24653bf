mod common;

use common::{board, letter, pair};
use rstest::rstest;
use stecker::alphabet::{Alphabet, Letter};
use stecker::error::SteckerError;
use stecker::plugboard::{PlugPair, Plugboard};

#[test]
fn test_pair_is_normalised() {
    let p = PlugPair::new(letter('Q'), letter('C')).unwrap();
    assert_eq!(p.letters(), (letter('C'), letter('Q')));
    assert_eq!(p.to_string(), "CQ");
    assert_eq!(p, pair("qc"));
}

#[test]
fn test_self_pair_is_rejected() {
    let err = PlugPair::new(letter('E'), letter('E')).unwrap_err();
    assert!(matches!(err, SteckerError::InvalidConfig(_)));
}

#[rstest]
#[case("A")]
#[case("ABC")]
#[case("A1")]
#[case("AA")]
#[case("")]
fn test_bad_pair_tokens(#[case] token: &str) {
    let err = token.parse::<PlugPair>().unwrap_err();
    assert!(matches!(err, SteckerError::InvalidConfig(_)), "{}", token);
}

#[test]
fn test_parse_accepts_joined_and_split_tokens() {
    let split = board(&["AB", "cd"]);
    let joined = board(&["AB CD"]);
    assert_eq!(split, joined);
    assert_eq!(split.to_string(), "AB CD");
    assert_eq!(split.len(), 2);
}

#[test]
fn test_letters_are_used_once() {
    let mut b = board(&["AB"]);
    let err = b.try_push(pair("BC")).unwrap_err();
    assert!(matches!(err, SteckerError::InvalidConfig(_)));
    assert_eq!(b.len(), 1);

    assert!(Plugboard::parse(&["AB", "CA"]).is_err());
}

#[test]
fn test_with_pair_leaves_original_untouched() {
    let base = board(&["AB"]);
    let trial = base.with_pair(pair("CD")).unwrap();
    assert_eq!(base.len(), 1);
    assert_eq!(trial.to_string(), "AB CD");
    assert!(base.with_pair(pair("AZ")).is_err());
}

#[test]
fn test_wiring_is_an_involution() {
    let table = board(&["AZ", "MQ", "EX"]).wiring();
    for (i, &j) in table.iter().enumerate() {
        assert_eq!(table[j as usize] as usize, i);
    }
    assert_eq!(table[0], 25);
    assert_eq!(table[1], 1);
}

#[test]
fn test_full_board() {
    let tokens: Vec<String> = Letter::all()
        .collect::<Vec<_>>()
        .chunks(2)
        .map(|c| format!("{}{}", c[0], c[1]))
        .collect();
    let full = Plugboard::parse(&tokens).unwrap();
    assert_eq!(full.len(), 13);
    assert!(full.is_full());
    assert!(Letter::all().all(|l| full.contains_letter(l)));
}

#[test]
fn test_json_form_is_a_list_of_pairs() {
    let b = board(&["ET", "AQ"]);
    let json = serde_json::to_string(&b).unwrap();
    assert_eq!(json, r#"["ET","AQ"]"#);
    let back: Plugboard = serde_json::from_str(&json).unwrap();
    assert_eq!(back, b);
    assert!(serde_json::from_str::<Plugboard>(r#"["ET","TA"]"#).is_err());
}

#[test]
fn test_alphabet_pairs_in_order() {
    let alphabet = Alphabet::full();
    let pairs = alphabet.pairs();
    assert_eq!(pairs.len(), 325);
    assert_eq!(pairs[0], pair("AB"));
    assert_eq!(pairs[1], pair("AC"));
    assert_eq!(pairs[25], pair("BC"));
    assert_eq!(pairs[324], pair("YZ"));
}

#[test]
fn test_alphabet_remove_pair() {
    let mut alphabet = Alphabet::full();
    alphabet.remove_pair(pair("AB")).unwrap();
    assert_eq!(alphabet.len(), 24);
    assert!(!alphabet.contains(letter('A')));
    assert_eq!(alphabet.pairs()[0], pair("CD"));
    assert_eq!(alphabet.pairs().len(), 276);

    let err = alphabet.remove_pair(pair("AC")).unwrap_err();
    assert!(matches!(err, SteckerError::InvalidConfig(_)));
    assert_eq!(alphabet.len(), 24);
}

#[test]
fn test_letter_indices() {
    assert_eq!(Letter::from_index(0), Some(letter('A')));
    assert_eq!(Letter::from_index(25), Some(letter('Z')));
    assert_eq!(Letter::from_index(26), None);
    let all: String = Letter::all().map(|l| l.to_char()).collect();
    assert_eq!(all, "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
}
