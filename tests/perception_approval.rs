mod common;

use typecrab::{PerceptionMode, Perceiver};

use common::MolEntry;

fn run(
    mode: PerceptionMode,
    expected: impl Fn(&MolEntry) -> Option<&[String]>,
) -> (usize, Vec<String>) {
    let data = common::load();
    let perceiver = Perceiver::new(mode);

    let mut checked = 0;
    let mut failures = Vec::new();
    for entry in &data {
        let Some(want) = expected(entry) else {
            continue;
        };
        checked += 1;
        let mol = common::build(entry);
        let got: Vec<&str> = perceiver.perceive_all(&mol).map(|t| t.id.as_str()).collect();
        if got != want {
            failures.push(format!("{}: expected {:?}, got {:?}", entry.name, want, got));
        }
    }
    (checked, failures)
}

fn report(mode: &str, checked: usize, failures: &[String]) {
    for f in failures {
        eprintln!("FAIL: {f}");
    }
    eprintln!(
        "{} passed, {} failed out of {checked} total ({mode})",
        checked - failures.len(),
        failures.len()
    );
}

#[test]
fn approval_atom_types() {
    let (checked, failures) = run(PerceptionMode::ImplicitHydrogenTolerant, |e| {
        Some(e.types.as_slice())
    });
    report("tolerant", checked, &failures);
    assert!(checked > 0);
    assert!(failures.is_empty(), "{} molecules failed atom type approval", failures.len());
}

#[test]
fn approval_atom_types_strict() {
    let (checked, failures) = run(PerceptionMode::StrictNeighbours, |e| e.strict.as_deref());
    report("strict", checked, &failures);
    assert!(checked > 0);
    assert!(failures.is_empty(), "{} molecules failed strict approval", failures.len());
}
