//! Scenario tests for `Seq`, exercising the combinator surface the way
//! calling code uses it, including interoperation with `Opt`.

use imseq::prelude::*;
use rstest::rstest;

// =============================================================================
// Slicing Scenarios
// =============================================================================

#[rstest]
fn drop_skips_leading_primes() {
    let primes = seq![2, 3, 5, 7, 11];
    assert_eq!(primes.drop(2), seq![5, 7, 11]);
}

#[rstest]
fn drop_while_stops_at_first_multiple_of_three() {
    let values = seq![1, 2, 3, 4, 5, 6, 7, 8, 9];
    assert_eq!(
        values.drop_while(|value, _| value % 3 != 0),
        seq![3, 4, 5, 6, 7, 8, 9]
    );
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(4)]
#[case(5)]
#[case(100)]
fn take_and_drop_always_partition(#[case] n: usize) {
    let values = seq![2, 3, 5, 7, 11];
    assert_eq!(values.take(n).append(&values.drop(n)), values);
}

#[rstest]
fn slicing_an_empty_sequence_stays_canonical() {
    let empty: Seq<i32> = Seq::empty();
    assert!(empty.take(3).ptr_eq(&Seq::empty()));
    assert!(empty.drop(3).ptr_eq(&Seq::empty()));
    assert!(empty.take_right(3).ptr_eq(&Seq::empty()));
    assert!(empty.drop_right(3).ptr_eq(&Seq::empty()));
}

// =============================================================================
// Dedup Scenarios
// =============================================================================

#[rstest]
fn distinct_by_length_keeps_first_seen_per_key() {
    let languages = seq![
        "PHP",
        "Go",
        "Java",
        "JavaScript",
        "Kotlin",
        "Python",
        "Ruby",
        "Rust",
        "Scala"
    ];
    assert_eq!(
        languages.distinct_by(|name, _| name.len()),
        seq!["PHP", "Go", "Java", "JavaScript", "Kotlin", "Scala"]
    );
}

#[rstest]
fn distinct_keeps_first_occurrence_in_original_order() {
    let values = seq![3, 1, 3, 2, 1, 2];
    assert_eq!(values.distinct(), seq![3, 1, 2]);
}

// =============================================================================
// Failure Scenarios
// =============================================================================

#[rstest]
fn empty_sequence_selectors_fail() {
    let empty: Seq<i32> = Seq::empty();
    assert_eq!(
        empty.head(),
        Err(CollectionError::EmptyCollection { operation: "head" })
    );
    assert_eq!(
        empty.last(),
        Err(CollectionError::EmptyCollection { operation: "last" })
    );
    assert_eq!(
        empty.min(),
        Err(CollectionError::EmptyCollection { operation: "min" })
    );
    assert_eq!(
        empty.max(),
        Err(CollectionError::EmptyCollection { operation: "max" })
    );
    assert!(empty.tail().is_err());
    assert!(empty.init().is_err());
}

#[rstest]
fn out_of_range_reads_fail_with_index_and_len() {
    let values = seq![1, 2, 3];
    assert_eq!(
        values.get(7),
        Err(CollectionError::IndexOutOfRange { index: 7, len: 3 })
    );
}

// =============================================================================
// Flattening Scenarios
// =============================================================================

#[rstest]
fn flatten_concatenates_nested_sequences_in_order() {
    let nested = seq![seq![2, 3], seq![5, 7], Opt::some(11).to_seq()];
    assert_eq!(nested.flatten(), seq![2, 3, 5, 7, 11]);
}

#[rstest]
fn flatten_skips_absent_options() {
    let options = seq![Opt::some(2), Opt::none(), Opt::some(3), Opt::none()];
    assert_eq!(options.flatten(), seq![2, 3]);
}

#[rstest]
fn flat_map_concatenates_callback_results() {
    let values = seq![1, 2, 3];
    let expanded = values.flat_map(|value, _| vec![*value; *value as usize]);
    assert_eq!(expanded, seq![1, 2, 2, 3, 3, 3]);
}

// =============================================================================
// Opt Interoperation
// =============================================================================

#[rstest]
fn find_feeds_into_option_combinators() {
    let values = seq![1, 2, 3, 4];
    let result = values
        .find(|value, _| value % 2 == 0)
        .map(|value| value * 10)
        .get_or_else_value(0);
    assert_eq!(result, 20);

    let missing = values
        .find(|value, _| *value > 100)
        .map(|value| value * 10)
        .get_or_else_value(0);
    assert_eq!(missing, 0);
}

#[rstest]
fn head_option_of_filtered_sequence() {
    let words = seq!["apple", "fig", "cherry"];
    let short = words.filter(|word, _| word.len() <= 3);
    assert_eq!(short.head_option(), Opt::some(&"fig"));
    assert_eq!(
        words.filter(|word, _| word.len() > 9).head_option(),
        Opt::none()
    );
}

// =============================================================================
// Aggregation Scenarios
// =============================================================================

#[rstest]
fn sum_of_measures_word_lengths() {
    let words = seq!["a", "bb", "ccc"];
    assert_eq!(words.sum_of(|word, _| word.len()), 6);
}

#[rstest]
fn mk_string_renders_like_display() {
    let values = seq![1, 2, 3];
    assert_eq!(format!("[{}]", values.mk_string(", ")), format!("{values}"));
}

#[rstest]
fn fold_builds_a_report_in_order() {
    let values = seq!["b", "c"];
    let report = values.fold_left("a".to_string(), |mut accumulator, value, index| {
        accumulator.push_str(value);
        accumulator.push_str(&index.to_string());
        accumulator
    });
    assert_eq!(report, "ab0c1");
}

// =============================================================================
// Immutability
// =============================================================================

#[rstest]
fn combinators_never_disturb_the_receiver() {
    let values = seq![3, 1, 2];
    let _ = values.sorted();
    let _ = values.reverse();
    let _ = values.filter(|value, _| *value > 1);
    let _ = values.map(|value, _| value * 2);
    let _ = values.drop(1);
    assert_eq!(values, seq![3, 1, 2]);
}

#[rstest]
fn derived_sequences_are_independent_snapshots() {
    let source = seq![1, 2, 3];
    let doubled = source.map(|value, _| value * 2);
    let reversed = source.reverse();
    assert_eq!(source, seq![1, 2, 3]);
    assert_eq!(doubled, seq![2, 4, 6]);
    assert_eq!(reversed, seq![3, 2, 1]);
}
