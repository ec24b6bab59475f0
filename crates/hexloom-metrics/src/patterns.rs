//! Grouping wires into repeatable cable patterns.
//!
//! Cables are cut and bundled per pattern: two racks whose outgoing wires
//! have identical relative shapes can be cabled from the same loom. The
//! grouping uses ordered maps of ordered sets throughout, so pattern
//! numbering is stable across runs of the same configuration.

use std::collections::{BTreeMap, BTreeSet};

use hexloom_layout::{CabinetCoord, CabinetDelta, Placements};
use hexloom_topology::Direction;
use serde::Serialize;

use crate::classification::WireScope;

/// Every installed wire as its source position plus relative displacement.
pub fn relative_wires(placements: &Placements) -> Vec<(Direction, CabinetCoord, CabinetDelta)> {
    let mut wires = Vec::with_capacity(placements.cabinets().len() * Direction::PRINCIPAL.len());
    for (board, &here) in placements.cabinets().iter() {
        for direction in Direction::PRINCIPAL {
            let neighbour = placements.torus().follow_wire(board, direction);
            let there = *placements.cabinets().coord(neighbour);
            wires.push((direction, here, there - here));
        }
    }
    wires
}

/// Collect wires into groups, each reduced to a canonical element set.
pub fn group_patterns<W, K, E>(
    wires: impl IntoIterator<Item = W>,
    mut group_key: impl FnMut(&W) -> K,
    mut elem_key: impl FnMut(&W) -> E,
) -> BTreeMap<K, BTreeSet<E>>
where
    K: Ord,
    E: Ord,
{
    let mut groups: BTreeMap<K, BTreeSet<E>> = BTreeMap::new();
    for wire in wires {
        groups
            .entry(group_key(&wire))
            .or_default()
            .insert(elem_key(&wire));
    }
    groups
}

/// Number the distinct element sets, in group-key order.
///
/// Groups sharing a set share an id; ids are dense from zero. Returns the
/// per-group assignment and the number of distinct patterns.
pub fn assign_pattern_ids<K, E>(groups: BTreeMap<K, BTreeSet<E>>) -> (BTreeMap<K, usize>, usize)
where
    K: Ord,
    E: Ord,
{
    let mut ids: BTreeMap<BTreeSet<E>, usize> = BTreeMap::new();
    let mut assigned = BTreeMap::new();
    for (key, set) in groups {
        let next = ids.len();
        let id = *ids.entry(set).or_insert(next);
        assigned.insert(key, id);
    }
    (assigned, ids.len())
}

/// Distinct per-rack cable patterns across the whole machine.
///
/// A rack's pattern is the set of (direction, source slot, displacement)
/// triples of the wires leaving its boards.
pub fn rack_pattern_count(placements: &Placements) -> usize {
    let groups = group_patterns(
        relative_wires(placements),
        |&(_, source, _)| (source.cabinet, source.rack),
        |&(direction, source, delta)| (direction, source.slot, delta),
    );
    assign_pattern_ids(groups).1
}

/// One board position's pattern id within a scope/direction family.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternAssignment {
    pub position: CabinetCoord,
    pub pattern: usize,
}

/// Distinct cable shapes for one scope family and one principal direction.
///
/// The assignment is the colouring the wiring diagrams draw: equal ids mean
/// the wire leaving that position has an identical relative shape.
#[derive(Debug, Clone, Serialize)]
pub struct PatternSummary {
    pub direction: Direction,
    pub scope: WireScope,
    pub num_patterns: usize,
    pub assignments: Vec<PatternAssignment>,
}

/// Enumerate distinct cable shapes per scope family and principal direction.
///
/// Nine summaries, one per scope and principal direction. Wires are filtered
/// to the family first, so a single-cabinet machine reports zero
/// between-cabinet patterns rather than failing.
pub fn scope_patterns(placements: &Placements) -> Vec<PatternSummary> {
    let wires = relative_wires(placements);
    let mut summaries = Vec::with_capacity(Direction::PRINCIPAL.len() * WireScope::ALL.len());
    for direction in Direction::PRINCIPAL {
        for scope in WireScope::ALL {
            let family = wires
                .iter()
                .copied()
                .filter(|&(d, _, delta)| d == direction && WireScope::of_delta(delta) == scope);
            let groups = group_patterns(family, |&(_, source, _)| source, |&(_, _, delta)| delta);
            let (assigned, num_patterns) = assign_pattern_ids(groups);
            summaries.push(PatternSummary {
                direction,
                scope,
                num_patterns,
                assignments: assigned
                    .into_iter()
                    .map(|(position, pattern)| PatternAssignment { position, pattern })
                    .collect(),
            });
        }
    }
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{small_placements, two_rack_placements};

    #[test]
    fn identical_groups_share_one_pattern() {
        // Three "racks" with the same wire shapes, one different.
        let wires = vec![
            (0u32, 1i64),
            (0, 2),
            (1, 1),
            (1, 2),
            (2, 1),
            (2, 2),
            (3, 7),
        ];
        let groups = group_patterns(wires, |&(rack, _)| rack, |&(_, shape)| shape);
        let (assigned, num_patterns) = assign_pattern_ids(groups);
        assert_eq!(num_patterns, 2);
        assert_eq!(assigned[&0], 0);
        assert_eq!(assigned[&1], 0);
        assert_eq!(assigned[&2], 0);
        assert_eq!(assigned[&3], 1);
    }

    #[test]
    fn no_wires_means_no_patterns() {
        let groups = group_patterns(Vec::<(u32, i64)>::new(), |&(r, _)| r, |&(_, s)| s);
        let (assigned, num_patterns) = assign_pattern_ids(groups);
        assert!(assigned.is_empty());
        assert_eq!(num_patterns, 0);
    }

    #[test]
    fn single_rack_machine_has_one_pattern() {
        assert_eq!(rack_pattern_count(&small_placements()), 1);
    }

    #[test]
    fn scope_families_partition_every_wire() {
        let summaries = scope_patterns(&two_rack_placements());
        assert_eq!(summaries.len(), 9);
        // Every board has exactly one wire per principal direction, landing
        // in exactly one scope family.
        for direction in Direction::PRINCIPAL {
            let assigned: usize = summaries
                .iter()
                .filter(|s| s.direction == direction)
                .map(|s| s.assignments.len())
                .sum();
            assert_eq!(assigned, 12, "direction {direction}");
        }
    }

    #[test]
    fn two_rack_machine_splits_patterns_by_scope() {
        let summaries = scope_patterns(&two_rack_placements());
        let between_racks: usize = summaries
            .iter()
            .filter(|s| s.scope == WireScope::BetweenRacks)
            .map(|s| s.assignments.len())
            .sum();
        assert!(between_racks > 0);

        for summary in &summaries {
            if summary.scope == WireScope::BetweenCabinets {
                // Single cabinet: nothing crosses, and that is not an error.
                assert_eq!(summary.num_patterns, 0);
                assert!(summary.assignments.is_empty());
            }
            // Ids are dense from zero within each family.
            for assignment in &summary.assignments {
                assert!(assignment.pattern < summary.num_patterns);
            }
        }
    }

    #[test]
    fn relative_wires_cover_every_principal_wire() {
        let placements = small_placements();
        let wires = relative_wires(&placements);
        assert_eq!(wires.len(), 36);
        // Single rack: every displacement stays inside it.
        for (_, _, delta) in wires {
            assert_eq!(delta.cabinets, 0);
            assert_eq!(delta.racks, 0);
        }
    }
}
