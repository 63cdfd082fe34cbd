//! Lesson 2: Constructors and Destructors
//!
//! An `Apartment` owns its `Building` instead of re-declaring the address and
//! floor fields, so there is only ever one copy of them. Drop order is outer
//! first: the apartment announces itself, then its building field is dropped.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Shared, append-only record of lifecycle messages.
///
/// `Drop` has no access to an output stream, so every value keeps a clone of
/// the journal and the lesson writes it out once everything is gone.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Rc<RefCell<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, line: impl Into<String>) {
        let line = line.into();
        tracing::debug!(target: "object_basics::lifecycle", "{}", line);
        self.entries.borrow_mut().push(line);
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in self.entries.borrow().iter() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// Something with an address that can be renamed through a trait object.
pub trait Structure {
    fn address(&self) -> &str;
    fn floors(&self) -> u32;
    fn set_address(&mut self, address: &str);
}

#[derive(Debug)]
pub struct Building {
    floors: u32,
    address: String,
    journal: Journal,
}

impl Building {
    pub fn unspecified(journal: &Journal) -> Self {
        journal.record("Unspecified building created");
        Self {
            floors: 0,
            address: "Unknown".to_string(),
            journal: journal.clone(),
        }
    }

    pub fn new(floors: u32, address: impl Into<String>, journal: &Journal) -> Self {
        let address = address.into();
        journal.record(format!(
            "Building constructed at {} with {} floors.",
            address, floors
        ));
        Self {
            floors,
            address,
            journal: journal.clone(),
        }
    }
}

impl Structure for Building {
    fn address(&self) -> &str {
        &self.address
    }

    fn floors(&self) -> u32 {
        self.floors
    }

    fn set_address(&mut self, address: &str) {
        self.address = address.to_string();
        self.journal.record("Address set from Building class");
    }
}

impl Drop for Building {
    fn drop(&mut self) {
        self.journal
            .record(format!("Building at {} is being destroyed.", self.address));
    }
}

#[derive(Debug)]
pub struct Apartment {
    building: Building,
    units: u32,
    inhabitants: u32,
}

impl Apartment {
    pub fn unspecified(journal: &Journal) -> Self {
        let building = Building::unspecified(journal);
        journal.record("Unspecified apartment created");
        Self {
            building,
            units: 0,
            inhabitants: 0,
        }
    }

    /// Occupancy only; the building part stays unspecified.
    pub fn with_occupancy(units: u32, inhabitants: u32, journal: &Journal) -> Self {
        Self::constructed(Building::unspecified(journal), units, inhabitants)
    }

    pub fn new(
        floors: u32,
        address: impl Into<String>,
        units: u32,
        inhabitants: u32,
        journal: &Journal,
    ) -> Self {
        Self::constructed(Building::new(floors, address, journal), units, inhabitants)
    }

    fn constructed(building: Building, units: u32, inhabitants: u32) -> Self {
        building.journal.record(format!(
            "Apartment constructed at {} with {} floors, {} units and {} inhabitants.",
            building.address, building.floors, units, inhabitants
        ));
        Self {
            building,
            units,
            inhabitants,
        }
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    pub fn inhabitants(&self) -> u32 {
        self.inhabitants
    }

    pub fn building(&self) -> &Building {
        &self.building
    }
}

impl Structure for Apartment {
    fn address(&self) -> &str {
        &self.building.address
    }

    fn floors(&self) -> u32 {
        self.building.floors
    }

    fn set_address(&mut self, address: &str) {
        self.building.address = address.to_string();
        self.building
            .journal
            .record("Address set from Apartment class");
    }
}

impl Drop for Apartment {
    fn drop(&mut self) {
        self.building.journal.record(format!(
            "Apartment at {} is being destroyed.",
            self.building.address
        ));
    }
}

/// Heap-allocates two structures for the caller. The scratch apartment is
/// released when this function returns.
fn allocate(journal: &Journal) -> [Box<dyn Structure>; 2] {
    let _scratch: Box<dyn Structure> = Box::new(Apartment::unspecified(journal));

    [
        Box::new(Apartment::new(3, "Main St", 8, 30, journal)),
        Box::new(Building::new(2, "Second St", journal)),
    ]
}

pub fn scenario(journal: &Journal) {
    let mut hamlin_hall = Apartment::unspecified(journal);
    let [main_st, second_st] = allocate(journal);

    hamlin_hall.set_address("Hamlin Hall, 123 Main St");

    drop(main_st);
    drop(second_st);
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    let journal = Journal::new();
    scenario(&journal);
    journal.write_to(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unspecified_building_defaults() {
        let journal = Journal::new();
        let building = Building::unspecified(&journal);
        assert_eq!(building.address(), "Unknown");
        assert_eq!(building.floors(), 0);
        assert_eq!(journal.entries(), ["Unspecified building created"]);
    }

    #[test]
    fn test_building_drop_announces_address() {
        let journal = Journal::new();
        {
            let _b = Building::new(2, "Second St", &journal);
        }
        assert_eq!(
            journal.entries(),
            [
                "Building constructed at Second St with 2 floors.",
                "Building at Second St is being destroyed.",
            ]
        );
    }

    #[test]
    fn test_apartment_constructs_building_first() {
        let journal = Journal::new();
        let apt = Apartment::new(3, "Main St", 8, 30, &journal);
        assert_eq!(apt.units(), 8);
        assert_eq!(apt.inhabitants(), 30);
        assert_eq!(
            journal.entries(),
            [
                "Building constructed at Main St with 3 floors.",
                "Apartment constructed at Main St with 3 floors, 8 units and 30 inhabitants.",
            ]
        );
    }

    #[test]
    fn test_occupancy_only_reports_inherited_fields() {
        let journal = Journal::new();
        let apt = Apartment::with_occupancy(4, 12, &journal);
        assert_eq!(apt.address(), "Unknown");
        assert_eq!(apt.floors(), 0);
        assert_eq!(
            journal.entries()[1],
            "Apartment constructed at Unknown with 0 floors, 4 units and 12 inhabitants."
        );
    }

    #[test]
    fn test_apartment_drops_outer_then_inner() {
        let journal = Journal::new();
        drop(Apartment::new(1, "Elm St", 2, 3, &journal));
        let entries = journal.entries();
        assert_eq!(entries[2], "Apartment at Elm St is being destroyed.");
        assert_eq!(entries[3], "Building at Elm St is being destroyed.");
    }

    #[test]
    fn test_set_address_is_shared_with_building() {
        let journal = Journal::new();
        let mut apt = Apartment::unspecified(&journal);
        apt.set_address("Hamlin Hall");
        assert_eq!(apt.address(), "Hamlin Hall");
        assert_eq!(apt.building().address(), "Hamlin Hall");
        assert_eq!(
            journal.entries().last().map(String::as_str),
            Some("Address set from Apartment class")
        );
    }

    #[test]
    fn test_set_address_dispatches_through_trait_object() {
        let journal = Journal::new();
        let mut items: Vec<Box<dyn Structure>> = vec![
            Box::new(Building::unspecified(&journal)),
            Box::new(Apartment::unspecified(&journal)),
        ];
        for item in items.iter_mut() {
            item.set_address("Renamed");
        }

        let entries = journal.entries();
        assert!(entries.contains(&"Address set from Building class".to_string()));
        assert!(entries.contains(&"Address set from Apartment class".to_string()));
        assert!(items.iter().all(|s| s.address() == "Renamed"));
    }

    #[test]
    fn test_boxed_apartment_runs_full_drop() {
        let journal = Journal::new();
        let boxed: Box<dyn Structure> = Box::new(Apartment::new(3, "Main St", 8, 30, &journal));
        let before = journal.len();
        drop(boxed);
        assert_eq!(journal.len(), before + 2);
    }

    #[test]
    fn test_scenario_releases_everything() {
        let journal = Journal::new();
        scenario(&journal);
        let entries = journal.entries();
        let created = entries.iter().filter(|l| l.contains("created") || l.contains("constructed")).count();
        let destroyed = entries.iter().filter(|l| l.ends_with("is being destroyed.")).count();
        assert_eq!(created, destroyed);
    }

    #[test]
    fn test_empty_journal() {
        let journal = Journal::new();
        assert!(journal.is_empty());
        let mut buf = Vec::new();
        journal.write_to(&mut buf).unwrap();
        assert!(buf.is_empty());
    }
}
