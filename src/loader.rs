use crate::model::{InstitutionRegistry, Team};
use csv::{Position, StringRecord};
use eyre::{Result, WrapErr, eyre};
use std::fs::File;
use std::path::{Path, PathBuf};

// Column layout of the raw results file.
const NAME: usize = 0;
const TEAM_NUMBER: usize = 1;
const CITY: usize = 2;
const STATE: usize = 3;
const COUNTRY: usize = 4;
const ADVISOR: usize = 5;
const PROBLEM: usize = 6;
const RANKING: usize = 7;
const COLUMNS: usize = RANKING + 1;

pub struct Loader {
    path: PathBuf,
}

impl Loader {
    pub fn new<P: AsRef<Path>>(path: P) -> Loader {
        Loader {
            path: path.as_ref().to_owned(),
        }
    }

    /// Load the deduplicated institutions, then the teams referencing them.
    /// The results file is read once per pass so that every team resolves
    /// against the complete registry.
    pub fn load(&self) -> Result<(InstitutionRegistry, Vec<Team>)> {
        let institutions = self
            .load_institutions()
            .wrap_err("cannot load institutions")?;
        let teams = self
            .load_teams(&institutions)
            .wrap_err("cannot load teams")?;
        Ok((institutions, teams))
    }

    fn reader(&self) -> Result<csv::Reader<File>> {
        csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .wrap_err_with(|| format!("cannot open {}", self.path.display()))
    }

    fn load_institutions(&self) -> Result<InstitutionRegistry> {
        let mut institutions = InstitutionRegistry::new();
        for record in self.reader()?.records() {
            let record = record?;
            institutions.resolve(
                field(&record, NAME)?,
                field(&record, CITY)?,
                field(&record, STATE)?,
                field(&record, COUNTRY)?,
            );
        }
        Ok(institutions)
    }

    fn load_teams(&self, institutions: &InstitutionRegistry) -> Result<Vec<Team>> {
        let mut teams = Vec::new();
        for record in self.reader()?.records() {
            teams.push(team_from_record(&record?, institutions)?);
        }
        Ok(teams)
    }
}

fn team_from_record(record: &StringRecord, institutions: &InstitutionRegistry) -> Result<Team> {
    let name = field(record, NAME)?;
    let number = field(record, TEAM_NUMBER)?;
    let number = number
        .parse()
        .wrap_err_with(|| format!("invalid team number {:?} on line {}", number, line(record)))?;
    let institution = institutions
        .id_of(name)
        .ok_or_else(|| eyre!("unknown institution {:?} on line {}", name, line(record)))?;
    Ok(Team {
        number,
        advisor: field(record, ADVISOR)?.to_owned(),
        problem: field(record, PROBLEM)?.to_owned(),
        ranking: field(record, RANKING)?.to_owned(),
        institution,
    })
}

fn field<'r>(record: &'r StringRecord, index: usize) -> Result<&'r str> {
    record.get(index).ok_or_else(|| {
        eyre!(
            "line {} has {} fields instead of at least {}",
            line(record),
            record.len(),
            COLUMNS
        )
    })
}

fn line(record: &StringRecord) -> u64 {
    record.position().map_or(0, Position::line)
}

#[cfg(test)]
fn sample_registry() -> InstitutionRegistry {
    let mut institutions = InstitutionRegistry::new();
    institutions.resolve("MIT", "Cambridge", "MA", "USA");
    institutions
}

#[test]
fn test_team_from_record() {
    let institutions = sample_registry();
    let record = StringRecord::from(vec![
        "MIT", "42", "Cambridge", "MA", "USA", "Dr. A", "P1", "1st",
    ]);
    let team = team_from_record(&record, &institutions).unwrap();
    assert_eq!(team.number, 42);
    assert_eq!(team.advisor, "Dr. A");
    assert_eq!(team.problem, "P1");
    assert_eq!(team.ranking, "1st");
    assert_eq!(team.institution, institutions.id_of("MIT").unwrap());
}

#[test]
fn test_non_numeric_team_number_is_rejected() {
    let institutions = sample_registry();
    let record = StringRecord::from(vec![
        "MIT",
        "forty-two",
        "Cambridge",
        "MA",
        "USA",
        "Dr. A",
        "P1",
        "1st",
    ]);
    assert!(team_from_record(&record, &institutions).is_err());
}

#[test]
fn test_short_row_is_rejected() {
    let institutions = sample_registry();
    let record = StringRecord::from(vec!["MIT", "42", "Cambridge", "MA", "USA"]);
    assert!(team_from_record(&record, &institutions).is_err());
}

#[test]
fn test_unresolved_institution_is_rejected() {
    let institutions = InstitutionRegistry::new();
    let record = StringRecord::from(vec![
        "MIT", "42", "Cambridge", "MA", "USA", "Dr. A", "P1", "1st",
    ]);
    assert!(team_from_record(&record, &institutions).is_err());
}
