//! End-to-end solver tests: scope construction, variable resolution and
//! expression evaluation through the public surface.

use ahash::AHashMap;
use pretty_assertions::assert_eq;
use solvent_formula::{
    apply_chain, apply_one, resolve_variables, reverse_chain, reverse_one, solve_formula,
    solve_with_scope, ScopeChain,
};

fn scope(pairs: &[(&str, &str)]) -> ScopeChain {
    let map: AHashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ScopeChain::new().with_scope(map)
}

#[test]
fn solves_plain_arithmetic() {
    assert_eq!(solve_formula("2+3*4").as_deref(), Some("14"));
    assert_eq!(solve_formula("(2+3)*4").as_deref(), Some("20"));
    assert_eq!(solve_formula("5*-2").as_deref(), Some("-10"));
    assert_eq!(solve_formula("2^-1").as_deref(), Some("0.5"));
}

#[test]
fn solves_nested_brackets() {
    assert_eq!(solve_formula("((2+3)*(4-2))^2").as_deref(), Some("100"));
    assert_eq!(solve_formula("(1+(2*(3+4)))").as_deref(), Some("15"));
}

#[test]
fn negative_bracket_results_carry_into_higher_tiers() {
    // Bracket groups substitute as text, so a negative result's sign binds
    // at the additive level of the surrounding expression.
    assert_eq!(solve_formula("(-4)^2").as_deref(), Some("-16"));
    assert_eq!(solve_formula("(5-9)%3").as_deref(), Some("-1"));
    assert_eq!(solve_formula("2*(3-5)^2").as_deref(), Some("-8"));
}

#[test]
fn malformed_input_yields_none() {
    assert_eq!(solve_formula("(2+3"), None);
    assert_eq!(solve_formula(")2+3("), None);
    assert_eq!(solve_formula("2++"), None);
    assert_eq!(solve_formula("hello world"), None);
}

#[test]
fn resolves_hex_variable_then_solves() {
    let scope = scope(&[("A", "0x10")]);
    assert_eq!(resolve_variables("A+1", &scope).as_deref(), Some("16+1"));
    assert_eq!(solve_with_scope("A+1", &scope).as_deref(), Some("17"));
}

#[test]
fn resolves_layered_scopes_first_match_wins() {
    let inner: AHashMap<String, String> = [("X".to_string(), "2".to_string())]
        .into_iter()
        .collect();
    let outer: AHashMap<String, String> = [
        ("X".to_string(), "9".to_string()),
        ("Y".to_string(), "3".to_string()),
    ]
    .into_iter()
    .collect();
    let chain = ScopeChain::new().with_scope(inner).with_scope(outer);

    assert_eq!(solve_with_scope("X*Y", &chain).as_deref(), Some("6"));
}

#[test]
fn negative_variable_value_normalizes_signs() {
    let scope = scope(&[("delta", "-5")]);
    // Substitution produces "10+-5"; sign normalization turns it into "10-5".
    assert_eq!(solve_with_scope("10+delta", &scope).as_deref(), Some("5"));
}

#[test]
fn quoted_text_packs_before_solving() {
    // "A" packs to 65.
    assert_eq!(
        solve_with_scope("\"A\"+1", &ScopeChain::new()).as_deref(),
        Some("66")
    );
}

#[test]
fn unresolved_variable_fails_the_solve() {
    let empty = ScopeChain::new();
    assert_eq!(solve_with_scope("missing+1", &empty), None);
}

#[test]
fn date_time_expression_becomes_epoch_seconds() {
    let scope = scope(&[("start", "1958-01-01 00:00:25")]);
    // One minute past the reference epoch 1957-12-31T23:59:25.
    assert_eq!(solve_with_scope("start", &scope).as_deref(), Some("60"));
}

#[test]
fn chain_apply_and_reverse() {
    assert_eq!(apply_chain(10.0, "+5 *2"), 30.0);
    assert_eq!(reverse_chain(30.0, "+5 *2"), 10.0);
    assert_eq!(apply_one(16.0, "sqrt"), 4.0);
    assert_eq!(reverse_one(4.0, "sqrt"), 16.0);
}

#[test]
fn independent_evaluations_share_nothing() {
    // Each call gets its own chain; concurrent solves over different chains
    // must not interfere.
    let a = scope(&[("V", "1")]);
    let b = scope(&[("V", "2")]);

    let handle = std::thread::spawn(move || solve_with_scope("V+1", &b));
    let here = solve_with_scope("V+1", &a);

    assert_eq!(here.as_deref(), Some("2"));
    assert_eq!(handle.join().unwrap().as_deref(), Some("3"));
}
