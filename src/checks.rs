use crate::model::{InstitutionRegistry, Team};
use eyre::{Result, bail};

/// Every team must reference an institution resolved from the same file.
pub fn ensure_institutions_resolved(
    institutions: &InstitutionRegistry,
    teams: &[Team],
) -> Result<()> {
    if let Some(team) = teams
        .iter()
        .find(|t| t.institution.0 >= institutions.len())
    {
        bail!(
            "team {} references institution {} which has not been resolved",
            team.number,
            team.institution.0
        );
    }
    Ok(())
}

#[test]
fn test_ensure_institutions_resolved() {
    use crate::model::InstitutionId;

    let mut institutions = InstitutionRegistry::new();
    let mit = institutions.resolve("MIT", "Cambridge", "MA", "USA");
    let team = |institution| Team {
        number: 1,
        advisor: "Dr. A".to_owned(),
        problem: "P1".to_owned(),
        ranking: "1st".to_owned(),
        institution,
    };
    assert!(ensure_institutions_resolved(&institutions, &[team(mit)]).is_ok());
    assert!(ensure_institutions_resolved(&institutions, &[team(InstitutionId(1))]).is_err());
}
