use crate::model::{InstitutionRegistry, Team};
use crate::stats;

pub fn display_summary(institutions: &InstitutionRegistry, teams: &[Team]) {
    println!(
        "Teams/institutions: {}/{}",
        teams.len(),
        institutions.len()
    );
}

pub fn display_shared_institutions(institutions: &InstitutionRegistry, teams: &[Team]) {
    let counts = stats::teams_per_institution(institutions, teams);
    let mut shared = institutions
        .iter()
        .filter(|i| counts[i.id.0] > 1)
        .collect::<Vec<_>>();
    shared.sort_by_key(|i| i.name.clone());
    if !shared.is_empty() {
        println!("Institutions fielding several teams:");
        for institution in shared {
            println!("  - {} ({} teams)", institution.name, counts[institution.id.0]);
        }
    }
}
