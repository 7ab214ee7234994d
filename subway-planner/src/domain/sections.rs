//! Per-line section topology.
//!
//! A line's track is a single unbranched chain of sections. [`Sections`]
//! owns that chain and is the only place it can change: new sections are
//! spliced in (splitting the section they land inside), and removing a
//! station either drops a terminal section or merges the two sections that
//! meet at it. Every change is validated before anything is touched, so a
//! rejected change leaves the chain as it was.

use std::collections::HashSet;

use tracing::debug;

use super::{Section, SectionError, StationId};

/// A line never shrinks below this many sections.
const MINIMUM_SECTIONS: usize = 1;

/// The ordered, branch-free chain of sections making up one line.
///
/// Invariants, upheld by every operation:
/// - there is at least one section;
/// - no station is the upstream endpoint of more than one section, nor the
///   downstream endpoint of more than one section;
/// - the sections form exactly one path with no cycle, so walking from the
///   head of the line visits every station once.
///
/// The sections are stored in insertion order, not travel order. Use
/// [`Sections::stations`] for the stop sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    sections: Vec<Section>,
}

impl Sections {
    /// Start a new chain from its first section.
    pub fn new(first: Section) -> Self {
        Self {
            sections: vec![first],
        }
    }

    /// Number of sections on the line.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Always false: a line keeps at least one section.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterate the sections in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// The section that starts at `station`, if any.
    pub fn section_starting_at(&self, station: StationId) -> Option<&Section> {
        self.sections.iter().find(|s| s.up() == station)
    }

    /// The section that ends at `station`, if any.
    pub fn section_ending_at(&self, station: StationId) -> Option<&Section> {
        self.sections.iter().find(|s| s.down() == station)
    }

    /// Whether some section starts at `station`.
    pub fn starts_at(&self, station: StationId) -> bool {
        self.section_starting_at(station).is_some()
    }

    /// Whether some section ends at `station`.
    pub fn ends_at(&self, station: StationId) -> bool {
        self.section_ending_at(station).is_some()
    }

    /// Whether `station` is an endpoint of any section.
    pub fn contains(&self, station: StationId) -> bool {
        self.sections.iter().any(|s| s.touches(station))
    }

    /// The distinct stations on the line, in no particular order.
    pub fn station_set(&self) -> HashSet<StationId> {
        self.sections
            .iter()
            .flat_map(|s| [s.up(), s.down()])
            .collect()
    }

    /// The stations on the line in travel order, head to tail.
    pub fn stations(&self) -> Vec<StationId> {
        let Some(head) = self.head() else {
            return Vec::new();
        };

        let mut stations = Vec::with_capacity(self.sections.len() + 1);
        stations.push(head);

        let mut current = head;
        for _ in 0..self.sections.len() {
            match self.section_starting_at(current) {
                Some(section) => {
                    current = section.down();
                    stations.push(current);
                }
                None => break,
            }
        }

        stations
    }

    /// Sum of all section distances, i.e. the length of the line.
    pub fn total_distance(&self) -> u64 {
        self.sections.iter().map(|s| u64::from(s.distance())).sum()
    }

    /// Add a section to the line.
    ///
    /// Exactly one endpoint of `candidate` must already be on the line. If
    /// the new section starts where an existing section starts, or ends where
    /// an existing section ends, it lands inside that section, which is cut
    /// down to the remaining stretch. Otherwise the line is extended at one
    /// of its ends.
    pub fn add(&mut self, candidate: Section) -> Result<(), SectionError> {
        self.validate_addition(&candidate)?;

        if let Some(idx) = self.position_starting_at(candidate.up()) {
            let existing = self.sections[idx];
            let rest = existing
                .after_prefix(candidate.down(), candidate.distance())
                .ok_or(SectionError::InvalidSectionDistance {
                    existing: existing.distance(),
                    requested: candidate.distance(),
                })?;
            debug!(
                up = %candidate.up(),
                inserted = %candidate.down(),
                down = %existing.down(),
                original = %existing.distance(),
                remaining = %rest.distance(),
                "Split section at upstream end"
            );
            self.sections[idx] = rest;
        }

        if let Some(idx) = self.position_ending_at(candidate.down()) {
            let existing = self.sections[idx];
            let rest = existing
                .before_suffix(candidate.up(), candidate.distance())
                .ok_or(SectionError::InvalidSectionDistance {
                    existing: existing.distance(),
                    requested: candidate.distance(),
                })?;
            debug!(
                up = %existing.up(),
                inserted = %candidate.up(),
                down = %candidate.down(),
                original = %existing.distance(),
                remaining = %rest.distance(),
                "Split section at downstream end"
            );
            self.sections[idx] = rest;
        }

        self.sections.push(candidate);
        Ok(())
    }

    /// Remove a station from the line.
    ///
    /// An interior station disappears by merging its two adjacent sections
    /// into one spanning both. A terminal station takes its only section
    /// with it, shortening the line.
    pub fn remove(&mut self, station: StationId) -> Result<(), SectionError> {
        if self.sections.len() <= MINIMUM_SECTIONS {
            return Err(SectionError::NotFoundRemoveStation);
        }

        let incoming = self.position_ending_at(station);
        let outgoing = self.position_starting_at(station);

        match (incoming, outgoing) {
            (Some(i), Some(o)) => {
                let merged = Section::merge(&self.sections[i], &self.sections[o])
                    .ok_or(SectionError::DistanceOverflow)?;
                debug!(
                    %station,
                    up = %merged.up(),
                    down = %merged.down(),
                    distance = %merged.distance(),
                    "Merged sections around removed station"
                );
                let (first, second) = if i > o { (i, o) } else { (o, i) };
                self.sections.remove(first);
                self.sections.remove(second);
                self.sections.push(merged);
            }
            (None, Some(o)) => {
                debug!(%station, "Removed head section");
                self.sections.remove(o);
            }
            (Some(i), None) => {
                debug!(%station, "Removed tail section");
                self.sections.remove(i);
            }
            (None, None) => return Err(SectionError::NotMatchRemoveStation(station)),
        }

        Ok(())
    }

    fn validate_addition(&self, candidate: &Section) -> Result<(), SectionError> {
        let known = self.station_set();
        let up_known = known.contains(&candidate.up());
        let down_known = known.contains(&candidate.down());

        if up_known && down_known {
            return Err(SectionError::AlreadyRegisteredStation {
                up: candidate.up(),
                down: candidate.down(),
            });
        }

        if !known.is_empty() && !up_known && !down_known {
            return Err(SectionError::UnregisteredStation {
                up: candidate.up(),
                down: candidate.down(),
            });
        }

        Ok(())
    }

    /// The station no section ends at.
    fn head(&self) -> Option<StationId> {
        self.sections
            .iter()
            .map(Section::up)
            .find(|&up| !self.ends_at(up))
    }

    fn position_starting_at(&self, station: StationId) -> Option<usize> {
        self.sections.iter().position(|s| s.up() == station)
    }

    fn position_ending_at(&self, station: StationId) -> Option<usize> {
        self.sections.iter().position(|s| s.down() == station)
    }
}

impl<'a> IntoIterator for &'a Sections {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Distance;

    fn s(id: u64) -> StationId {
        StationId::new(id)
    }

    fn section(up: u64, down: u64, distance: u32) -> Section {
        Section::new(s(up), s(down), Distance::new(distance).unwrap()).unwrap()
    }

    fn ids(ids: &[u64]) -> Vec<StationId> {
        ids.iter().copied().map(s).collect()
    }

    fn distance_between(sections: &Sections, up: u64, down: u64) -> Option<u32> {
        sections
            .iter()
            .find(|x| x.up() == s(up) && x.down() == s(down))
            .map(|x| x.distance().get())
    }

    /// 1 -10- 2 -10- 3
    fn three_stop_line() -> Sections {
        let mut sections = Sections::new(section(1, 2, 10));
        sections.add(section(2, 3, 10)).unwrap();
        sections
    }

    #[test]
    fn new_line_has_one_section() {
        let sections = Sections::new(section(1, 2, 10));
        assert_eq!(sections.len(), 1);
        assert!(!sections.is_empty());
        assert_eq!(sections.stations(), ids(&[1, 2]));
    }

    #[test]
    fn extend_at_tail() {
        let sections = three_stop_line();
        assert_eq!(sections.stations(), ids(&[1, 2, 3]));
        assert_eq!(sections.total_distance(), 20);
    }

    #[test]
    fn extend_at_head() {
        let mut sections = three_stop_line();
        sections.add(section(0, 1, 4)).unwrap();
        assert_eq!(sections.stations(), ids(&[0, 1, 2, 3]));
        assert_eq!(sections.total_distance(), 24);
    }

    #[test]
    fn insert_after_shared_upstream_splits() {
        let mut sections = Sections::new(section(1, 3, 10));
        sections.add(section(1, 2, 4)).unwrap();

        assert_eq!(sections.stations(), ids(&[1, 2, 3]));
        assert_eq!(distance_between(&sections, 1, 2), Some(4));
        assert_eq!(distance_between(&sections, 2, 3), Some(6));
        assert_eq!(sections.total_distance(), 10);
    }

    #[test]
    fn insert_before_shared_downstream_splits() {
        let mut sections = Sections::new(section(1, 3, 10));
        sections.add(section(2, 3, 3)).unwrap();

        assert_eq!(sections.stations(), ids(&[1, 2, 3]));
        assert_eq!(distance_between(&sections, 1, 2), Some(7));
        assert_eq!(distance_between(&sections, 2, 3), Some(3));
        assert_eq!(sections.total_distance(), 10);
    }

    #[test]
    fn reject_both_endpoints_registered() {
        let mut sections = three_stop_line();
        let err = sections.add(section(1, 3, 5)).unwrap_err();
        assert_eq!(
            err,
            SectionError::AlreadyRegisteredStation { up: s(1), down: s(3) }
        );

        // Same in the other direction
        let err = sections.add(section(3, 1, 5)).unwrap_err();
        assert!(matches!(err, SectionError::AlreadyRegisteredStation { .. }));
        assert_eq!(sections, three_stop_line());
    }

    #[test]
    fn reject_unregistered_endpoints() {
        let mut sections = three_stop_line();
        let err = sections.add(section(8, 9, 5)).unwrap_err();
        assert_eq!(err, SectionError::UnregisteredStation { up: s(8), down: s(9) });
        assert_eq!(sections, three_stop_line());
    }

    #[test]
    fn reject_split_longer_than_existing() {
        let mut sections = Sections::new(section(1, 3, 10));

        let err = sections.add(section(1, 2, 10)).unwrap_err();
        assert_eq!(
            err,
            SectionError::InvalidSectionDistance {
                existing: Distance::new(10).unwrap(),
                requested: Distance::new(10).unwrap(),
            }
        );

        let err = sections.add(section(2, 3, 11)).unwrap_err();
        assert!(matches!(err, SectionError::InvalidSectionDistance { .. }));

        // Nothing changed
        assert_eq!(sections, Sections::new(section(1, 3, 10)));
    }

    #[test]
    fn remove_interior_merges() {
        let mut sections = three_stop_line();
        sections.remove(s(2)).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections.stations(), ids(&[1, 3]));
        assert_eq!(distance_between(&sections, 1, 3), Some(20));
    }

    #[test]
    fn remove_head_drops_first_section() {
        let mut sections = three_stop_line();
        sections.remove(s(1)).unwrap();
        assert_eq!(sections.stations(), ids(&[2, 3]));
        assert_eq!(sections.total_distance(), 10);
    }

    #[test]
    fn remove_tail_drops_last_section() {
        let mut sections = three_stop_line();
        sections.remove(s(3)).unwrap();
        assert_eq!(sections.stations(), ids(&[1, 2]));
        assert_eq!(sections.total_distance(), 10);
    }

    #[test]
    fn reject_removal_from_single_section_line() {
        let mut sections = Sections::new(section(1, 2, 10));
        assert_eq!(
            sections.remove(s(1)).unwrap_err(),
            SectionError::NotFoundRemoveStation
        );
        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn reject_removal_of_unknown_station() {
        let mut sections = three_stop_line();
        assert_eq!(
            sections.remove(s(9)).unwrap_err(),
            SectionError::NotMatchRemoveStation(s(9))
        );
        assert_eq!(sections, three_stop_line());
    }

    #[test]
    fn lookups() {
        let sections = three_stop_line();
        assert_eq!(sections.section_starting_at(s(2)).map(|x| x.down()), Some(s(3)));
        assert_eq!(sections.section_ending_at(s(2)).map(|x| x.up()), Some(s(1)));
        assert!(sections.starts_at(s(1)));
        assert!(!sections.starts_at(s(3)));
        assert!(sections.ends_at(s(3)));
        assert!(!sections.ends_at(s(1)));
        assert!(sections.contains(s(2)));
        assert!(!sections.contains(s(4)));
        assert_eq!(sections.station_set().len(), 3);
    }

    #[test]
    fn stop_order_survives_out_of_order_storage() {
        // Build 1-2-3-4-5 by repeatedly splitting 1-5
        let mut sections = Sections::new(section(1, 5, 40));
        sections.add(section(1, 3, 20)).unwrap();
        sections.add(section(4, 5, 10)).unwrap();
        sections.add(section(1, 2, 5)).unwrap();

        assert_eq!(sections.stations(), ids(&[1, 2, 3, 4, 5]));
        assert_eq!(sections.total_distance(), 40);
        assert_eq!(distance_between(&sections, 2, 3), Some(15));
        assert_eq!(distance_between(&sections, 3, 4), Some(10));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::Distance;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Add { up: u64, down: u64, distance: u32 },
        Remove(u64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            3 => (0u64..10, 0u64..10, 1u32..30)
                .prop_map(|(up, down, distance)| Op::Add { up, down, distance }),
            1 => (0u64..10).prop_map(Op::Remove),
        ]
    }

    fn initial() -> Sections {
        Sections::new(
            Section::new(StationId::new(0), StationId::new(1), Distance::new(50).unwrap()).unwrap(),
        )
    }

    /// The chain is one simple path covering exactly its endpoint set.
    fn assert_simple_path(sections: &Sections) -> Result<(), TestCaseError> {
        let stations = sections.stations();
        let set = sections.station_set();

        prop_assert!(sections.len() >= MINIMUM_SECTIONS);
        prop_assert_eq!(stations.len(), sections.len() + 1);
        prop_assert_eq!(set.len(), stations.len());
        prop_assert_eq!(stations.iter().copied().collect::<HashSet<_>>(), set);

        for pair in stations.windows(2) {
            prop_assert!(
                sections.iter().any(|s| s.up() == pair[0] && s.down() == pair[1]),
                "no section between consecutive stops {} and {}",
                pair[0],
                pair[1]
            );
        }
        Ok(())
    }

    proptest! {
        /// Any sequence of changes keeps the line a single simple path, and
        /// rejected changes leave it untouched.
        #[test]
        fn invariant_holds_under_random_changes(ops in prop::collection::vec(op_strategy(), 1..40)) {
            let mut sections = initial();

            for op in ops {
                let before = sections.clone();
                let result = match op {
                    Op::Add { up, down, distance } => {
                        match Section::new(StationId::new(up), StationId::new(down), Distance::new(distance).unwrap()) {
                            Ok(candidate) => sections.add(candidate),
                            Err(_) => continue,
                        }
                    }
                    Op::Remove(station) => sections.remove(StationId::new(station)),
                };

                if result.is_err() {
                    prop_assert_eq!(&sections, &before);
                }
                assert_simple_path(&sections)?;
            }
        }

        /// Splitting conserves line length; extending adds exactly the new
        /// section's length.
        #[test]
        fn add_conserves_distance(ops in prop::collection::vec(op_strategy(), 1..40)) {
            let mut sections = initial();

            for op in ops {
                let Op::Add { up, down, distance } = op else { continue };
                let Ok(candidate) = Section::new(StationId::new(up), StationId::new(down), Distance::new(distance).unwrap()) else {
                    continue;
                };

                let before = sections.total_distance();
                let splits = sections.starts_at(candidate.up()) || sections.ends_at(candidate.down());

                if sections.add(candidate).is_ok() {
                    let expected = if splits { before } else { before + u64::from(candidate.distance()) };
                    prop_assert_eq!(sections.total_distance(), expected);
                }
            }
        }

        /// Merging conserves line length; dropping a terminal removes exactly
        /// that section's length.
        #[test]
        fn remove_conserves_distance(
            adds in prop::collection::vec((0u64..10, 1u32..30), 1..20),
            removals in prop::collection::vec(0u64..10, 1..20),
        ) {
            // Grow a line by appending at the tail
            let mut sections = initial();
            let mut tail = StationId::new(1);
            for (offset, distance) in adds {
                let next = StationId::new(100 + offset);
                let Ok(candidate) = Section::new(tail, next, Distance::new(distance).unwrap()) else {
                    continue;
                };
                if sections.add(candidate).is_ok() {
                    tail = next;
                }
            }

            for station in removals {
                let station = sections.stations().get(station as usize % (sections.len() + 1)).copied();
                let Some(station) = station else { continue };

                let before = sections.total_distance();
                let incoming = sections.section_ending_at(station).copied();
                let outgoing = sections.section_starting_at(station).copied();

                if sections.remove(station).is_ok() {
                    let expected = match (incoming, outgoing) {
                        (Some(_), Some(_)) => before,
                        (Some(s), None) | (None, Some(s)) => before - u64::from(s.distance()),
                        (None, None) => unreachable!("removal succeeded for unknown station"),
                    };
                    prop_assert_eq!(sections.total_distance(), expected);
                }
            }
        }

        /// Re-adding a section between two registered stations always fails.
        #[test]
        fn readding_registered_pair_rejected(a in 0usize..20, b in 0usize..20, distance in 1u32..100) {
            let mut sections = initial();
            for next in 2..8u64 {
                let candidate = Section::new(StationId::new(next - 1), StationId::new(next), Distance::new(5).unwrap()).unwrap();
                sections.add(candidate).unwrap();
            }

            let stations = sections.stations();
            let up = stations[a % stations.len()];
            let down = stations[b % stations.len()];
            prop_assume!(up != down);

            let candidate = Section::new(up, down, Distance::new(distance).unwrap()).unwrap();
            let is_already_registered = matches!(
                sections.add(candidate),
                Err(SectionError::AlreadyRegisteredStation { .. })
            );
            prop_assert!(is_already_registered);
        }
    }
}
