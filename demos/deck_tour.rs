//! Console walkthrough of the deck's sequence operations.

use std::time::{SystemTime, UNIX_EPOCH};

use deckseq::{Card, CardList, Deck, Sequence, Slice};

fn main() {
    let deck = Deck::new();

    println!("ranks: {}", deck.ranks().len());
    println!("suits: {}", deck.suits().len());
    println!("cards: {}", deck.len());

    match deck.get(3) {
        Ok(card) => println!("deck[3] = {card}"),
        Err(err) => println!("deck[3]: {err}"),
    }
    match deck.get(-1) {
        Ok(card) => println!("deck[-1] = {card}"),
        Err(err) => println!("deck[-1]: {err}"),
    }
    if let Err(err) = deck.get(52) {
        println!("deck[52]: {err}");
    }

    println!("deck[1:3] = {}", CardList(&deck.slice(Slice::new(1, 3))));
    println!("deck[50:100] = {}", CardList(&deck.slice(Slice::new(50, 100))));

    for probe in ["2s", "Qh", "2a"] {
        match probe.parse::<Card>() {
            Ok(card) => println!("{probe} in deck: {}", deck.contains(&card)),
            Err(err) => println!("{probe}: {err}"),
        }
    }
    for record in [("2", "s"), ("2", "a")] {
        match deck.try_contains(&record) {
            Ok(present) => println!("{record:?} in deck: {present}"),
            Err(err) => println!("{record:?}: {err}"),
        }
    }
    if let Err(err) = deck.try_contains(&"2s") {
        println!("\"2s\" as a raw string: {err}");
    }

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let hand: Vec<Card> = deck.shuffled(seed).into_iter().take(5).collect();
    println!("random hand: {}", CardList(&hand));

    println!("{deck}");
}
