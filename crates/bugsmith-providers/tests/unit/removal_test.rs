//! Tests for the removal modifier family

use crate::test_utils::{GO_BUSY, PYTHON_BUSY, assert_reparses, entity, extract};
use bugsmith_providers::modifiers::{
    ModifierKind, ProceduralModifier, RemoveAssignModifier, RemoveConditionalModifier,
    RemoveLoopModifier, RemoveWrapperModifier,
};
use bugsmith_providers::{CodeEntity, Language};

const GO_TWO_ASSIGNMENTS: &str = r#"package sum

func Sum(a []int) int {
    total := 0
    count := 0
    for _, v := range a {
        total += v
    }
    count = count + 1
    return total + count
}
"#;

fn sum_entity() -> CodeEntity {
    entity(&extract(Language::Go, GO_TWO_ASSIGNMENTS), "Sum")
}

#[test]
fn test_both_assignments_removed_at_full_likelihood() {
    let sum = sum_entity();
    let mut modifier = RemoveAssignModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&sum).unwrap();

    assert_eq!(
        bug.rewrite,
        "func Sum(a []int) int {
    total := 0
    count := 0
    for _, v := range a {
    }
    return total + count
}"
    );
    assert_eq!(bug.strategy, "func_pm_remove_assign");
    assert_reparses(&sum, &bug.rewrite);
}

#[test]
fn test_nothing_removed_at_zero_likelihood() {
    let sum = sum_entity();
    let mut modifier = RemoveAssignModifier::with_likelihood(0.0).unwrap();
    assert!(modifier.modify(&sum).is_none());
}

#[test]
fn test_declarations_are_not_assignments() {
    let source = "package decl\n\nfunc Decl() int {\n    x := 1\n    var y = 2\n    return x + y\n}\n";
    let decl = entity(&extract(Language::Go, source), "Decl");
    let mut modifier = RemoveAssignModifier::with_likelihood(1.0).unwrap();
    assert!(modifier.modify(&decl).is_none());
}

#[test]
fn test_remove_loop_drops_whole_statement() {
    let sum = sum_entity();
    let mut modifier = RemoveLoopModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&sum).unwrap();
    assert!(!bug.rewrite.contains("for _, v"));
    assert!(!bug.rewrite.contains("total += v"));
    assert!(bug.rewrite.contains("count = count + 1"));
    assert_reparses(&sum, &bug.rewrite);
}

#[test]
fn test_line_emptied_by_several_removals_is_dropped() {
    let go_source = "package pair\n\nfunc Pair() int {\n    x := 0\n    x = 1; x = 2\n    return x\n}\n";
    let pair = entity(&extract(Language::Go, go_source), "Pair");
    let mut modifier = RemoveAssignModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&pair).unwrap();
    assert_eq!(bug.rewrite, "func Pair() int {\n    x := 0\n    return x\n}");
    assert_reparses(&pair, &bug.rewrite);

    let python_source = "def pair():\n    x = 0\n    x = 1; x = 2\n    return x\n";
    let pair = entity(&extract(Language::Python, python_source), "pair");
    let mut modifier = RemoveAssignModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&pair).unwrap();
    assert_eq!(bug.rewrite, "def pair():\n    return x");
    assert_reparses(&pair, &bug.rewrite);
}

#[test]
fn test_remove_conditional_takes_else_branch_along() {
    let source = "def f(x):\n    y = 0\n    if x:\n        y = 1\n    else:\n        y = 2\n    return y\n";
    let f = entity(&extract(Language::Python, source), "f");
    let mut modifier = RemoveConditionalModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&f).unwrap();
    assert_eq!(bug.rewrite, "def f(x):\n    y = 0\n    return y");
}

#[test]
fn test_python_block_emptied_gets_pass() {
    let source = "def reset(items):\n    for item in items:\n        item.count = 0\n    return items\n";
    let reset = entity(&extract(Language::Python, source), "reset");
    let mut modifier = RemoveAssignModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&reset).unwrap();
    assert_eq!(
        bug.rewrite,
        "def reset(items):\n    for item in items:\n        pass\n    return items"
    );
    assert_reparses(&reset, &bug.rewrite);
}

#[test]
fn test_remove_wrappers() {
    let python = entity(&extract(Language::Python, PYTHON_BUSY), "process");
    let mut modifier = RemoveWrapperModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&python).unwrap();
    assert!(!bug.rewrite.contains("with open"));
    assert!(!bug.rewrite.contains("try:"));
    assert!(!bug.rewrite.contains("except"));
    assert_reparses(&python, &bug.rewrite);

    let go = entity(&extract(Language::Go, GO_BUSY), "Process");
    let mut modifier = RemoveWrapperModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&go).unwrap();
    assert!(!bug.rewrite.contains("defer cleanup()"));
    assert_reparses(&go, &bug.rewrite);
}

#[test]
fn test_removed_subtree_not_revisited() {
    // the inner `if` lives inside the removed loop and costs no extra draw
    let source = "def f(xs):\n    for x in xs:\n        if x:\n            print(x)\n    return xs\n";
    let f = entity(&extract(Language::Python, source), "f");
    let mut modifier = RemoveLoopModifier::with_likelihood(1.0).unwrap();
    let bug = modifier.modify(&f).unwrap();
    assert_eq!(bug.rewrite, "def f(xs):\n    return xs");
}

#[test]
fn test_every_removal_reparses_at_full_likelihood() {
    let entities = [
        entity(&extract(Language::Go, GO_BUSY), "Process"),
        entity(&extract(Language::Python, PYTHON_BUSY), "process"),
    ];
    let removals = [
        ModifierKind::RemoveLoop,
        ModifierKind::RemoveConditional,
        ModifierKind::RemoveAssign,
        ModifierKind::RemoveWrapper,
    ];
    for target in &entities {
        for kind in removals {
            let mut modifier = kind.build(1.0, 24).unwrap();
            assert!(modifier.can_change(target), "{kind} should accept {}", target.name());
            let bug = modifier
                .modify(target)
                .unwrap_or_else(|| panic!("{kind} produced nothing for {}", target.name()));
            assert_ne!(bug.rewrite, target.src_code());
            assert_reparses(target, &bug.rewrite);
        }
    }
}
