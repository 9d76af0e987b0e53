//! Search-suggestion demo: simulates a user typing a query letter by letter
//! and shows the dropdown of matching keys shrinking as the prefix grows.

use compressed_trie::CompressedTrie;

fn main() {
    tracing_subscriber::fmt::init();

    println!("Search suggestions");

    let mut search_terms = CompressedTrie::new();
    search_terms.batch_insert(
        [
            "mobile",
            "mandala",
            "mousy brown hair dye",
            "moneypot",
            "mexican sombrero",
            "muscle cars",
            "mouthguard",
            "monitor",
            "mousepad",
            "mauve eraser",
        ],
        true,
        false,
    );

    let mut typed = String::new();
    for ch in "mouse".chars() {
        typed.push(ch);

        let mut matches: Vec<String> = search_terms.enumerate_prefix(&typed, None).collect();
        matches.sort_unstable();

        println!("Search results, for typed text: {typed:?} ---> {matches:?}");
    }
}
