//! Tests for if/else inversion and statement shuffling

use crate::test_utils::{GO_BUSY, PYTHON_BUSY, assert_reparses, entity, extract};
use bugsmith_providers::modifiers::{
    ControlIfElseInvertModifier, ControlShuffleLinesModifier, ModifierConfig, ModifierKind,
    ProceduralModifier,
};
use bugsmith_providers::{CodeEntity, Language};

const GO_PICK: &str = r#"package pick

func Pick(x int) int {
    if y := x * 2; y > 10 {
        return y
    } else {
        return x
    }
}
"#;

const GO_CHAINED: &str = r#"package grade

func Grade(x int) string {
    if x > 90 {
        return "a"
    } else if x > 80 {
        return "b"
    }
    return "c"
}
"#;

/// Invert-if configuration that admits the small fixtures
fn invert_config(likelihood: f64) -> ModifierConfig {
    ControlIfElseInvertModifier::default_config()
        .with_likelihood(likelihood)
        .with_min_complexity(1)
}

fn go(source: &str, name: &str) -> CodeEntity {
    entity(&extract(Language::Go, source), name)
}

#[test]
fn test_invert_swaps_bodies_keeping_initializer() {
    let pick = go(GO_PICK, "Pick");
    let mut modifier = ControlIfElseInvertModifier::new(invert_config(1.0)).unwrap();
    assert!(modifier.can_change(&pick));

    let bug = modifier.modify(&pick).unwrap();
    assert_eq!(
        bug.rewrite,
        "func Pick(x int) int {
    if y := x * 2; y > 10 {
        return x
    } else {
        return y
    }
}"
    );
    assert_eq!(bug.strategy, "func_pm_ctrl_invert_if");
    assert_eq!(
        bug.explanation,
        "The if-else bodies are swapped while keeping the condition the same."
    );
    assert_reparses(&pick, &bug.rewrite);
}

#[test]
fn test_invert_at_zero_likelihood_yields_nothing() {
    let pick = go(GO_PICK, "Pick");
    let mut modifier = ControlIfElseInvertModifier::new(invert_config(0.0)).unwrap();
    assert!(modifier.modify(&pick).is_none());
}

#[test]
fn test_default_bounds_reject_simple_entities() {
    let pick = go(GO_PICK, "Pick");
    assert_eq!(pick.complexity(), 2);
    let modifier = ControlIfElseInvertModifier::with_likelihood(1.0).unwrap();
    assert!(!modifier.can_change(&pick));

    let capped = ControlIfElseInvertModifier::new(invert_config(1.0).with_max_complexity(1)).unwrap();
    assert!(!capped.can_change(&pick));
}

#[test]
fn test_chained_else_if_never_inverted() {
    let grade = go(GO_CHAINED, "Grade");
    let mut modifier = ControlIfElseInvertModifier::new(invert_config(1.0)).unwrap();
    assert!(!modifier.can_change(&grade));
    assert!(modifier.modify(&grade).is_none());
}

#[test]
fn test_final_else_of_chain_is_inverted_alone() {
    let source = r#"package grade

func Grade(x int) string {
    if x > 90 {
        return "a"
    } else if x > 80 {
        return "b"
    } else {
        return "c"
    }
}
"#;
    let grade = go(source, "Grade");
    let mut modifier = ControlIfElseInvertModifier::new(invert_config(1.0)).unwrap();
    let bug = modifier.modify(&grade).unwrap();
    assert!(bug.rewrite.contains("if x > 90 {\n        return \"a\"\n    } else if x > 80 {\n        return \"c\"\n    } else {\n        return \"b\"\n    }"));
}

#[test]
fn test_python_final_elif_else_is_inverted_alone() {
    let source = "def grade(x):\n    if x > 90:\n        return 1\n    elif x > 80:\n        return 2\n    else:\n        return 3\n";
    let grade = entity(&extract(Language::Python, source), "grade");
    let mut modifier = ControlIfElseInvertModifier::new(invert_config(1.0)).unwrap();
    assert!(modifier.can_change(&grade));
    let bug = modifier.modify(&grade).unwrap();
    assert!(bug.rewrite.contains(
        "if x > 90:\n        return 1\n    elif x > 80:\n        return 3\n    else:\n        return 2"
    ));
    assert_reparses(&grade, &bug.rewrite);
}

#[test]
fn test_python_bodies_laid_out_differently_stay_put() {
    let source = "def f(x):\n    if x: return 1\n    else:\n        y = 2\n        return y\n";
    let f = entity(&extract(Language::Python, source), "f");
    let mut modifier = ControlIfElseInvertModifier::new(invert_config(1.0)).unwrap();
    assert!(modifier.modify(&f).is_none());

    let source = "def g(x, y):\n    if x: return 1\n    else: return 2\n    if y:\n        z = 1\n        return z\n    else:\n        return 3\n";
    let g = entity(&extract(Language::Python, source), "g");
    let bug = modifier.modify(&g).unwrap();
    assert!(bug.rewrite.contains("if x: return 1\n    else: return 2\n"));
    assert!(bug.rewrite.contains(
        "if y:\n        return 3\n    else:\n        z = 1\n        return z"
    ));
    assert_reparses(&g, &bug.rewrite);
}

#[test]
fn test_python_invert() {
    let python = entity(&extract(Language::Python, PYTHON_BUSY), "process");
    let mut modifier = ControlIfElseInvertModifier::with_likelihood(1.0).unwrap();
    assert!(modifier.can_change(&python));
    let bug = modifier.modify(&python).unwrap();
    assert!(bug.rewrite.contains(
        "if item > limit or limit < 0:\n            total += item\n        else:\n            total += limit"
    ));
    assert_reparses(&python, &bug.rewrite);
}

#[test]
fn test_shuffle_swaps_adjacent_pairs() {
    let source = "package steps\n\nfunc Steps() {\n    a()\n    b()\n    c()\n}\n";
    let steps = go(source, "Steps");
    let mut modifier = ControlShuffleLinesModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&steps).unwrap();
    // (a, b) swap, then c has no partner left
    assert_eq!(bug.rewrite, "func Steps() {\n    b()\n    a()\n    c()\n}");
}

#[test]
fn test_shuffle_composes_nested_swaps() {
    let source = "package nested\n\nfunc F(x int) {\n    if x > 0 {\n        a()\n        b()\n    }\n    c()\n}\n";
    let f = go(source, "F");
    let mut modifier = ControlShuffleLinesModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&f).unwrap();
    assert_eq!(
        bug.rewrite,
        "func F(x int) {\n    c()\n    if x > 0 {\n        b()\n        a()\n    }\n}"
    );
    assert_reparses(&f, &bug.rewrite);
}

#[test]
fn test_shuffle_single_statement_yields_nothing() {
    let source = "def only(x):\n    return x\n";
    let only = entity(&extract(Language::Python, source), "only");
    let mut modifier = ControlShuffleLinesModifier::with_likelihood(1.0).unwrap();
    assert!(modifier.modify(&only).is_none());
}

#[test]
fn test_control_flow_rewrites_reparse() {
    let entities = [
        entity(&extract(Language::Go, GO_BUSY), "Process"),
        entity(&extract(Language::Python, PYTHON_BUSY), "process"),
    ];
    for target in &entities {
        for kind in [ModifierKind::InvertIf, ModifierKind::ShuffleLines] {
            let mut modifier = kind.build(1.0, 7).unwrap();
            assert!(modifier.can_change(target));
            let bug = modifier.modify(target).unwrap();
            assert_reparses(target, &bug.rewrite);
        }
    }
}
