use super::{Institution, InstitutionId};
use std::collections::HashMap;
use tracing::warn;

/// Institutions deduplicated by name, with ids assigned in first-seen order.
#[derive(Debug, Default)]
pub struct InstitutionRegistry {
    by_name: HashMap<String, InstitutionId>,
    institutions: Vec<Institution>,
}

impl InstitutionRegistry {
    pub fn new() -> InstitutionRegistry {
        InstitutionRegistry::default()
    }

    /// Record one occurrence of an institution and return its id. The first
    /// occurrence wins: later rows with the same name keep the original
    /// city, state and country even when they disagree.
    pub fn resolve(&mut self, name: &str, city: &str, state: &str, country: &str) -> InstitutionId {
        if let Some(&id) = self.by_name.get(name) {
            let existing = self.institution(id);
            if existing.city != city || existing.state != state || existing.country != country {
                warn!(
                    "institution {} listed with conflicting details, keeping {}/{}/{}",
                    name, existing.city, existing.state, existing.country
                );
            }
            return id;
        }
        let id = InstitutionId(self.institutions.len());
        self.institutions.push(Institution {
            id,
            name: name.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            country: country.to_owned(),
        });
        self.by_name.insert(name.to_owned(), id);
        id
    }

    pub fn id_of(&self, name: &str) -> Option<InstitutionId> {
        self.by_name.get(name).copied()
    }

    pub fn institution(&self, InstitutionId(institution): InstitutionId) -> &Institution {
        &self.institutions[institution]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Institution> {
        self.institutions.iter()
    }

    pub fn len(&self) -> usize {
        self.institutions.len()
    }
}

#[test]
fn test_first_occurrence_wins() {
    let mut institutions = InstitutionRegistry::new();
    let mit = institutions.resolve("MIT", "Cambridge", "MA", "USA");
    assert_eq!(institutions.resolve("MIT", "Boston", "MA", "USA"), mit);
    assert_eq!(institutions.institution(mit).city, "Cambridge");
    assert_eq!(institutions.len(), 1);
}

#[test]
fn test_ids_follow_first_seen_order() {
    let mut institutions = InstitutionRegistry::new();
    assert_eq!(
        institutions.resolve("MIT", "Cambridge", "MA", "USA"),
        InstitutionId(0)
    );
    assert_eq!(
        institutions.resolve("Harvard", "Cambridge", "MA", "USA"),
        InstitutionId(1)
    );
    assert_eq!(
        institutions.resolve("MIT", "Cambridge", "MA", "USA"),
        InstitutionId(0)
    );
    assert_eq!(
        institutions.resolve("Caltech", "Pasadena", "CA", "USA"),
        InstitutionId(2)
    );
    let names = institutions
        .iter()
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>();
    assert_eq!(names, ["MIT", "Harvard", "Caltech"]);
}
