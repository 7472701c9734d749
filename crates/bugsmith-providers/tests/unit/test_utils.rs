//! Shared fixtures for modifier and extraction tests

use bugsmith_providers::language::{EntityExtractor, has_syntax_errors};
use bugsmith_providers::{CodeEntity, Language};
use std::path::Path;

/// Extract every entity from an in-memory source
pub fn extract(language: Language, source: &str) -> Vec<CodeEntity> {
    let file = match language {
        Language::Go => "fixture.go",
        Language::Python => "fixture.py",
    };
    EntityExtractor::new()
        .extract(source, Path::new(file), language)
        .unwrap()
}

/// Entity with the given qualified name
pub fn entity(entities: &[CodeEntity], name: &str) -> CodeEntity {
    entities
        .iter()
        .find(|e| e.name() == name)
        .cloned()
        .unwrap_or_else(|| {
            let names: Vec<&str> = entities.iter().map(CodeEntity::name).collect();
            panic!("no entity named {name}, found {names:?}")
        })
}

/// The file with `rewrite` spliced in must still parse cleanly
pub fn assert_reparses(entity: &CodeEntity, rewrite: &str) {
    let file = entity.splice_into_file(rewrite);
    assert!(
        !has_syntax_errors(entity.language(), &file).unwrap(),
        "rewrite of {} does not parse:\n{file}",
        entity.name()
    );
}

pub const GO_SAMPLE: &str = r#"package pool

type Pool struct {
    size  int
    items []int
}

func (p *Pool) Resize(n int) {
    if n > 0 {
        p.size = n
    }
}

func Pick(x int) int {
    if x > 0 {
        return 1
    } else {
        return 2
    }
}

func Walk(items []int) int {
    total := 0
    for _, v := range items {
        total += v
    }
    handler := func() {
        for i := 0; i < 3; i++ {
        }
    }
    handler()
    return total
}
"#;

pub const PYTHON_SAMPLE: &str = r#"class Cache:
    def get(self, key):
        if key in self.data:
            return self.data[key]
        return None


def top(x):
    def inner(y):
        return y
    return inner(x)
"#;

/// Entity exercising every structural category
pub const GO_BUSY: &str = r#"package busy

func Process(items []int, limit int) (int, error) {
    total := 0
    count := 0
    defer cleanup()
    for _, v := range items {
        if v > limit && limit > 0 {
            total += limit
        } else {
            total += v
        }
        count = count + 1
    }
    switch {
    case total > 100:
        total = 100
    default:
        count++
    }
    if count == 0 {
        return 0, nil
    }
    return total / count, nil
}
"#;

pub const PYTHON_BUSY: &str = r#"def process(items, limit):
    total = 0
    count = 0
    with open("log") as log:
        log.write("start")
    for item in items:
        if item > limit or limit < 0:
            total += limit
        else:
            total += item
        count = count + 1
    if count == 0:
        return 0
    try:
        average = total / count
    except ZeroDivisionError:
        average = 0
    while count > 10:
        count -= 1
    return average
"#;
