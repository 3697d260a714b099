//! Property tests for the compound selector state machine.

use lynx_css::{CompoundSelector, PartKind, SelectorPart};
use quickcheck_macros::quickcheck;
use strum::IntoEnumIterator;

fn kind_from(n: u8) -> PartKind {
    PartKind::iter()
        .nth(usize::from(n % 6))
        .unwrap_or(PartKind::Element)
}

/// Apply every step, keeping the last good selector whenever an add fails.
fn build(steps: &[(u8, String)]) -> CompoundSelector {
    steps
        .iter()
        .fold(CompoundSelector::new(), |compound, (n, value)| {
            compound.add(kind_from(*n), value.clone()).unwrap_or(compound)
        })
}

fn render_in_rank_order(parts: &[SelectorPart]) -> String {
    PartKind::iter()
        .flat_map(|kind| parts.iter().filter(move |part| part.kind() == kind))
        .map(ToString::to_string)
        .collect()
}

#[quickcheck]
fn accepted_parts_are_rank_ordered(steps: Vec<(u8, String)>) -> bool {
    let compound = build(&steps);
    compound
        .parts()
        .windows(2)
        .all(|pair| pair[0].kind().rank() <= pair[1].kind().rank())
}

#[quickcheck]
fn singletons_occur_at_most_once(steps: Vec<(u8, String)>) -> bool {
    let compound = build(&steps);
    PartKind::iter()
        .filter(|kind| kind.is_singleton())
        .all(|kind| compound.parts_of(kind).count() <= 1)
}

#[quickcheck]
fn output_is_rank_grouped_concatenation(steps: Vec<(u8, String)>) -> bool {
    let compound = build(&steps);
    compound.stringify() == render_in_rank_order(compound.parts())
}

#[quickcheck]
fn failed_add_leaves_receiver_unchanged(steps: Vec<(u8, String)>, next: u8) -> bool {
    let compound = build(&steps);
    let before = compound.clone();
    match compound.add(kind_from(next), "probe") {
        Ok(grown) => grown.len() == before.len() + 1 && compound == before,
        Err(_) => compound == before && compound.stringify() == before.stringify(),
    }
}

#[quickcheck]
fn sorted_steps_always_succeed(steps: Vec<(u8, String)>) -> bool {
    let mut steps = steps;
    steps.sort_by_key(|(n, _)| kind_from(*n));
    let mut seen = Vec::new();
    steps.retain(|(n, _)| {
        let kind = kind_from(*n);
        if kind.is_singleton() && seen.contains(&kind) {
            return false;
        }
        seen.push(kind);
        true
    });

    let built = steps
        .iter()
        .try_fold(CompoundSelector::new(), |compound, (n, value)| {
            compound.add(kind_from(*n), value.clone())
        });

    let expected: String = steps
        .iter()
        .map(|(n, value)| SelectorPart::new(kind_from(*n), value.clone()).to_string())
        .collect();

    built.is_ok_and(|compound| compound.stringify() == expected)
}

#[quickcheck]
fn stringify_is_idempotent(steps: Vec<(u8, String)>) -> bool {
    let compound = build(&steps);
    compound.stringify() == compound.stringify()
}
