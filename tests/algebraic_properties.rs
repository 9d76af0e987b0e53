//! End-to-end scenarios and algebraic properties shared by both trie
//! variants: round-trip, prefix soundness/completeness, insert idempotence,
//! delete as insert's inverse, and order-independence of a batch.

use proptest::prelude::*;

use compressed_trie::{CompressedTrie, Normalizer, PrefixTrie, StandardTrie};

fn inserted<T: PrefixTrie + Default>(words: &[&str]) -> T {
    let mut t = T::default();
    for w in words.iter().copied() {
        t.insert(w);
    }
    t
}

#[test]
fn round_trip_every_inserted_key_is_found() {
    let words = ["apple", "app", "application", "apt", "banana"];
    let compressed: CompressedTrie = inserted(&words);
    let standard: StandardTrie = inserted(&words);
    for w in words {
        assert!(compressed.search(w));
        assert!(standard.search(w));
    }
}

#[test]
fn prefix_soundness_and_completeness() {
    let mut t = CompressedTrie::new();
    for w in ["car", "cart", "care", "cat", "dog"] {
        t.insert(w);
    }
    let under_ca: Vec<String> = t.enumerate_prefix("ca", None).collect();
    // Soundness: every yielded key actually starts with the prefix and is stored.
    for key in &under_ca {
        assert!(key.starts_with("ca"));
        assert!(t.search(key));
    }
    // Completeness: every stored key with that prefix was yielded.
    for w in ["car", "cart", "care", "cat"] {
        assert!(under_ca.iter().any(|k| k == w));
    }
    assert!(!under_ca.iter().any(|k| k == "dog"));
}

#[test]
fn insert_is_idempotent() {
    let mut t = CompressedTrie::new();
    t.insert("international");
    let before = t.count_nodes();
    t.insert("international");
    assert_eq!(t.count_nodes(), before);
    assert_eq!(t.len(), 1);
}

#[test]
fn delete_is_inserts_inverse_on_a_fresh_trie() {
    let mut t = CompressedTrie::new();
    assert!(t.is_empty());
    t.insert("banana");
    assert!(t.delete("banana"));
    assert!(t.is_empty());
    assert!(!t.search("banana"));
}

#[test]
fn coalescing_scenario_international_internet() {
    let mut t = CompressedTrie::new();
    t.insert("international");
    t.insert("internet");
    assert!(t.search("international"));
    assert!(t.search("internet"));

    assert!(t.delete("international"));
    assert!(!t.search("international"));
    assert!(t.search("internet"));
    // After the split introduced by "international" collapses back, the
    // shared "intern" edge should have recombined with "et" into a single
    // "internet" edge from the root.
    assert_eq!(t.count_nodes(), 2);
}

#[test]
fn mid_edge_prefix_location_reports_pending_suffix() {
    let mut t = CompressedTrie::new();
    t.insert("application");
    let loc = t.prefix_locate("applicat").unwrap();
    assert_eq!(loc.pending, "ion");
    assert!(loc.terminal);
}

#[test]
fn empty_prefix_enumerates_the_whole_trie() {
    let words = ["a", "ab", "abc", "b"];
    let mut t = CompressedTrie::new();
    for w in words {
        t.insert(w);
    }
    let mut all: Vec<String> = t.enumerate_prefix("", None).collect();
    all.sort();
    assert_eq!(all, words.to_vec());
}

#[test]
fn empty_key_round_trips() {
    let mut t = CompressedTrie::new();
    assert!(!t.search(""));
    t.insert("");
    assert!(t.search(""));
    assert!(t.delete(""));
    assert!(!t.search(""));
}

#[test]
fn fanout_hysteresis_does_not_lose_keys_across_the_switch_boundary() {
    use compressed_trie::compressed::TrieConfig;
    let mut t = CompressedTrie::with_config(TrieConfig { fanout_switch: 4 });
    let letters = ["ant", "bee", "cat", "dog", "eel", "fox", "gnu"];
    for w in letters {
        t.insert(w);
    }
    for w in letters {
        assert!(t.search(w));
    }
    for w in &letters[..3] {
        assert!(t.delete(w));
    }
    for w in &letters[3..] {
        assert!(t.search(w));
    }
}

#[test]
fn case_folding_normalizer_unifies_variants_by_default() {
    let mut t = CompressedTrie::new();
    t.insert("Straße");
    assert!(t.search("STRASSE") || t.search("strasse"));
}

#[test]
fn identity_normalizer_preserves_distinct_casing() {
    let mut t = CompressedTrie::with_normalizer(Normalizer::identity());
    t.insert("Apple");
    t.insert("apple");
    assert_eq!(t.len(), 2);
}

#[test]
fn batch_delete_of_the_first_half_of_a_large_batch_reports_no_misses() {
    let words: Vec<String> = (0..1500).map(|i| format!("key{i:04}")).collect();

    let mut t = CompressedTrie::with_normalizer(Normalizer::identity());
    t.batch_insert(words.clone(), true, false);
    assert_eq!(t.len(), words.len());

    let first_half = &words[..words.len() / 2];
    let (deleted, missing) = t.batch_delete(first_half.to_vec(), true, false);
    assert_eq!((deleted, missing), (first_half.len(), 0));
    assert_eq!(t.len(), words.len() - first_half.len());

    for w in first_half {
        assert!(!t.search(w));
    }
    for w in &words[words.len() / 2..] {
        assert!(t.search(w));
    }
}

#[test]
fn batch_delete_reports_missing_count_for_absent_keys() {
    let mut t = CompressedTrie::new();
    t.batch_insert(["apple", "banana", "cherry"], true, false);

    let (deleted, missing) = t.batch_delete(["apple", "kiwi", "mango"], true, false);
    assert_eq!(deleted, 1);
    assert_eq!(missing, 2);
}

proptest! {
    #[test]
    fn every_inserted_key_in_an_arbitrary_multiset_is_found(
        words in prop::collection::vec("[a-z]{1,12}", 0..60)
    ) {
        let mut t = CompressedTrie::with_normalizer(Normalizer::identity());
        for w in &words {
            t.insert(w);
        }
        for w in &words {
            prop_assert!(t.search(w));
        }
        prop_assert!(t.len() <= words.len());
    }

    #[test]
    fn batch_insert_order_does_not_affect_membership(
        mut words in prop::collection::vec("[a-z]{1,10}", 1..40)
    ) {
        let mut sorted_trie = CompressedTrie::with_normalizer(Normalizer::identity());
        sorted_trie.batch_insert(words.clone(), true, false);

        words.reverse();
        let mut reversed_trie = CompressedTrie::with_normalizer(Normalizer::identity());
        reversed_trie.batch_insert(words, true, false);

        prop_assert_eq!(sorted_trie.len(), reversed_trie.len());
    }

    #[test]
    fn delete_after_insert_always_removes_the_key(
        words in prop::collection::vec("[a-z]{1,10}", 1..40)
    ) {
        let mut t = CompressedTrie::with_normalizer(Normalizer::identity());
        for w in &words {
            t.insert(w);
        }
        for w in &words {
            t.delete(w);
            prop_assert!(!t.search(w));
        }
        prop_assert!(t.is_empty());
    }

    #[test]
    fn standard_and_compressed_tries_agree_on_membership(
        words in prop::collection::vec("[a-z]{1,10}", 0..40),
        probes in prop::collection::vec("[a-z]{1,10}", 0..20)
    ) {
        let mut compressed = CompressedTrie::with_normalizer(Normalizer::identity());
        let mut standard = StandardTrie::with_normalizer(Normalizer::identity());
        for w in &words {
            compressed.insert(w);
            standard.insert(w);
        }
        for p in &probes {
            prop_assert_eq!(compressed.search(p), standard.search(p));
        }
    }
}
