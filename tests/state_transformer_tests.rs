#![cfg(feature = "effect")]
//! Tests for `StateT` over `Option`.
//!
//! The state in most tests is a token stack, the shape of state a parser
//! threads through its steps.

use felis::effect::StateT;
use rstest::rstest;

type Tokens = Vec<&'static str>;
type Step<A> = StateT<Tokens, Option<(A, Tokens)>>;

/// Pops the last token, failing on an empty stack.
fn pop() -> Step<&'static str> {
    StateT::new(|mut tokens: Tokens| tokens.pop().map(|token| (token, tokens)))
}

/// Pops the last token only if it equals `expected`.
fn expect(expected: &'static str) -> Step<&'static str> {
    pop().flat_map_option(move |token| {
        if token == expected {
            StateT::pure_option(token)
        } else {
            StateT::empty_option()
        }
    })
}

// =============================================================================
// Basic Structure Tests
// =============================================================================

#[rstest]
fn state_transformer_new_and_run_with_option() {
    let state_transformer: StateT<i32, Option<(String, i32)>> =
        StateT::new(|state: i32| Some((format!("state: {state}"), state + 1)));
    assert_eq!(
        state_transformer.run(10),
        Some(("state: 10".to_string(), 11))
    );
}

#[rstest]
fn state_transformer_run_returns_none_when_inner_is_none() {
    let state_transformer: StateT<i32, Option<(String, i32)>> =
        StateT::new(|_state: i32| None::<(String, i32)>);
    assert_eq!(state_transformer.run(10), None);
}

#[rstest]
#[case(vec!["b", "a"], Some("a"))]
#[case(vec![], None)]
fn state_transformer_eval_returns_value_only(
    #[case] tokens: Tokens,
    #[case] expected: Option<&'static str>,
) {
    assert_eq!(pop().eval(tokens), expected);
}

#[rstest]
fn state_transformer_exec_returns_state_only() {
    assert_eq!(pop().exec(vec!["b", "a"]), Some(vec!["b"]));
}

// =============================================================================
// pure / empty Tests
// =============================================================================

#[rstest]
fn state_transformer_pure_leaves_state_untouched() {
    let step: Step<i32> = StateT::pure_option(1);
    assert_eq!(step.run(vec!["x"]), Some((1, vec!["x"])));
}

#[rstest]
fn state_transformer_empty_always_fails() {
    let step: Step<i32> = StateT::empty_option();
    assert_eq!(step.run(vec!["x"]), None);
}

// =============================================================================
// fmap / flat_map Tests
// =============================================================================

#[rstest]
fn state_transformer_fmap_option_some() {
    let lengths = pop().fmap_option(str::len);
    assert_eq!(lengths.run(vec!["abc"]), Some((3, vec![])));
}

#[rstest]
fn state_transformer_flat_map_sequences_steps() {
    let pair = pop().flat_map_option(|first| pop().fmap_option(move |second| (first, second)));
    assert_eq!(pair.run(vec!["c", "b", "a"]), Some((("a", "b"), vec!["c"])));
    assert_eq!(pair.run(vec!["a"]), None);
}

#[rstest]
fn state_transformer_flat_map_option_none_short_circuits() {
    let chained = StateT::<i32, Option<(i32, i32)>>::empty_option()
        .flat_map_option(|value| StateT::new(move |state: i32| Some((value + state, state * 2))));
    assert_eq!(chained.run(10), None);
}

// =============================================================================
// alt Tests
// =============================================================================

#[rstest]
#[case(vec!["let"], Some(("let", vec![])))]
#[case(vec!["fn"], Some(("fn", vec![])))]
#[case(vec!["struct"], None)]
fn state_transformer_alt_tries_each_branch(
    #[case] tokens: Tokens,
    #[case] expected: Option<(&'static str, Tokens)>,
) {
    let keyword = expect("let").alt_option(expect("fn"));
    assert_eq!(keyword.run(tokens), expected);
}

#[rstest]
fn state_transformer_alt_restores_state_after_partial_success() {
    // "x" then "y" consumes one token before failing on the second.
    let xy = expect("x").flat_map_option(|_| expect("y"));
    let xz = expect("x").flat_map_option(|_| expect("z"));
    assert_eq!(xy.alt_option(xz).run(vec!["z", "x"]), Some(("z", vec![])));
}

// =============================================================================
// gets Tests
// =============================================================================

#[rstest]
fn state_transformer_gets_option() {
    let remaining: Step<usize> = StateT::gets_option(Vec::len);
    assert_eq!(remaining.run(vec!["a", "b"]), Some((2, vec!["a", "b"])));
}

#[rstest]
fn state_transformer_gets_then_pop_sees_the_same_stack() {
    let size: Step<usize> = StateT::gets_option(Vec::len);
    let counted = size.flat_map_option(|count| pop().fmap_option(move |token| (count, token)));
    assert_eq!(counted.run(vec!["b", "a"]), Some(((2, "a"), vec!["b"])));
}

// =============================================================================
// Clone Tests
// =============================================================================

#[rstest]
fn state_transformer_clone_runs_independently() {
    let original = pop();
    let cloned = original.clone();
    assert_eq!(original.run(vec!["a"]), Some(("a", vec![])));
    assert_eq!(cloned.run(vec!["b"]), Some(("b", vec![])));
}
