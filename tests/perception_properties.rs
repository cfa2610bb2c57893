mod common;

use petgraph::graph::NodeIndex;
use typecrab::{Element, HasAtomicNum, HasFormalCharge, PerceptionMode, Perceiver, UNKNOWN_TYPE};

const MODES: [PerceptionMode; 2] = [
    PerceptionMode::ImplicitHydrogenTolerant,
    PerceptionMode::StrictNeighbours,
];

#[test]
fn assigned_types_satisfy_their_contract() {
    for mode in MODES {
        let perceiver = Perceiver::new(mode);
        for entry in common::load() {
            let mol = common::build(&entry);
            for (i, ty) in perceiver.perceive_all(&mol).enumerate() {
                if ty.is_unknown() {
                    continue;
                }
                let check = perceiver.check_type(&mol, NodeIndex::new(i), &ty.id);
                assert_eq!(check, Some(Ok(())), "{} atom {i} ({mode:?}): {}", entry.name, ty.id);
            }
        }
    }
}

#[test]
fn assigned_types_match_element_and_charge() {
    let perceiver = Perceiver::default();
    for entry in common::load() {
        let mol = common::build(&entry);
        for (idx, ty) in mol.atoms().zip(perceiver.perceive_all(&mol)) {
            if ty.id == UNKNOWN_TYPE {
                continue;
            }
            let atom = mol.atom(idx);
            let symbol = Element::from_atomic_num(atom.atomic_num()).map(|e| e.symbol());
            assert_eq!(ty.element.as_deref(), symbol, "{}: {}", entry.name, ty.id);
            if let Some(charge) = atom.formal_charge() {
                assert_eq!(ty.formal_charge, Some(charge), "{}: {}", entry.name, ty.id);
            }
        }
    }
}

#[test]
fn single_atom_perception_matches_full_pass() {
    let perceiver = Perceiver::default();
    for entry in common::load() {
        let mol = common::build(&entry);
        for (idx, ty) in mol.atoms().zip(perceiver.perceive_all(&mol)) {
            assert_eq!(perceiver.perceive_one(&mol, idx).id, ty.id, "{}", entry.name);
        }
    }
}

#[test]
fn types_do_not_depend_on_atom_order() {
    let perceiver = Perceiver::default();
    for entry in common::load() {
        let forward: Vec<String> = perceiver
            .perceive_all(&common::build(&entry))
            .map(|t| t.id.clone())
            .collect();

        let reversed: Vec<usize> = (0..entry.atoms.len()).rev().collect();
        let (mol, position) = common::build_in_order(&entry, &reversed);
        let types = perceiver.assign_types(&mol);
        for (i, want) in forward.iter().enumerate() {
            assert_eq!(&types[position[i]].id, want, "{} atom {i}", entry.name);
        }
    }
}

#[test]
fn shared_perceiver_agrees_with_fresh_one() {
    for mode in MODES {
        let shared = Perceiver::shared(mode);
        let fresh = Perceiver::new(mode);
        for entry in common::load() {
            let mol = common::build(&entry);
            let a: Vec<&str> = shared.perceive_all(&mol).map(|t| t.id.as_str()).collect();
            let b: Vec<&str> = fresh.perceive_all(&mol).map(|t| t.id.as_str()).collect();
            assert_eq!(a, b, "{}", entry.name);
        }
    }
}

#[test]
fn one_type_per_atom_every_pass() {
    let perceiver = Perceiver::default();
    for entry in common::load() {
        let mol = common::build(&entry);
        let first = perceiver.assign_types(&mol);
        let second = perceiver.assign_types(&mol);
        assert_eq!(first.len(), mol.atom_count(), "{}", entry.name);
        assert_eq!(perceiver.perceive_all(&mol).len(), mol.atom_count());
        assert!(first.iter().zip(&second).all(|(a, b)| std::ptr::eq(*a, *b)), "{}", entry.name);
    }
}

#[test]
fn perceiver_is_shared_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Perceiver>();

    let perceiver = Perceiver::shared(PerceptionMode::default());
    let data = common::load();
    let expected: Vec<Vec<&str>> = data
        .iter()
        .map(|e| e.types.iter().map(String::as_str).collect())
        .collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    data.iter()
                        .map(|e| {
                            let mol = common::build(e);
                            perceiver.perceive_all(&mol).map(|t| t.id.as_str()).collect::<Vec<_>>()
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
