use crate::model::{InstitutionRegistry, Team};

/// Number of teams fielded by each institution, indexed by institution id.
pub fn teams_per_institution(institutions: &InstitutionRegistry, teams: &[Team]) -> Vec<usize> {
    let mut counts = vec![0; institutions.len()];
    for team in teams {
        counts[team.institution.0] += 1;
    }
    counts
}

#[test]
fn test_teams_per_institution() {
    let mut institutions = InstitutionRegistry::new();
    let mit = institutions.resolve("MIT", "Cambridge", "MA", "USA");
    let harvard = institutions.resolve("Harvard", "Cambridge", "MA", "USA");
    let team = |number, institution| Team {
        number,
        advisor: "Dr. A".to_owned(),
        problem: "P1".to_owned(),
        ranking: "1st".to_owned(),
        institution,
    };
    let teams = [team(1, mit), team(2, mit), team(3, harvard)];
    assert_eq!(teams_per_institution(&institutions, &teams), [2, 1]);
}
