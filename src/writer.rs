use crate::model::{InstitutionRegistry, Team};
use csv::{QuoteStyle, Writer, WriterBuilder};
use eyre::{Result, WrapErr};
use std::io::Write;

pub const TEAMS_FILENAME: &str = "teams.csv";
pub const INSTITUTIONS_FILENAME: &str = "institutions.csv";

/// Overwrite the teams file in the working directory.
pub fn write_teams(teams: &[Team]) -> Result<()> {
    let mut writer = builder()
        .from_path(TEAMS_FILENAME)
        .wrap_err("cannot create teams file")?;
    write_teams_to(&mut writer, teams).wrap_err("cannot write teams")
}

/// Overwrite the institutions file in the working directory.
pub fn write_institutions(institutions: &InstitutionRegistry) -> Result<()> {
    let mut writer = builder()
        .from_path(INSTITUTIONS_FILENAME)
        .wrap_err("cannot create institutions file")?;
    write_institutions_to(&mut writer, institutions).wrap_err("cannot write institutions")
}

// Fields are written as-is, embedded delimiters included, and institution
// rows carry one more field than their header.
fn builder() -> WriterBuilder {
    let mut builder = WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quote_style(QuoteStyle::Never);
    builder
}

fn write_teams_to<W: Write>(writer: &mut Writer<W>, teams: &[Team]) -> Result<()> {
    writer.write_record(["Team", "Advisor", "Problem", "Ranking", "Institution"])?;
    for team in teams {
        writer.serialize(team)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_institutions_to<W: Write>(
    writer: &mut Writer<W>,
    institutions: &InstitutionRegistry,
) -> Result<()> {
    writer.write_record(["Name", "City", "State", "Country"])?;
    for institution in institutions.iter() {
        writer.serialize(institution)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
fn teams_to_string(teams: &[Team]) -> String {
    let mut buffer = Vec::new();
    let mut writer = builder().from_writer(&mut buffer);
    write_teams_to(&mut writer, teams).unwrap();
    drop(writer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
fn institutions_to_string(institutions: &InstitutionRegistry) -> String {
    let mut buffer = Vec::new();
    let mut writer = builder().from_writer(&mut buffer);
    write_institutions_to(&mut writer, institutions).unwrap();
    drop(writer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
fn team(
    number: u32,
    advisor: &str,
    problem: &str,
    ranking: &str,
    institution: crate::model::InstitutionId,
) -> Team {
    Team {
        number,
        advisor: advisor.to_owned(),
        problem: problem.to_owned(),
        ranking: ranking.to_owned(),
        institution,
    }
}

#[test]
fn test_teams_output() {
    let mut institutions = InstitutionRegistry::new();
    let mit = institutions.resolve("MIT", "Cambridge", "MA", "USA");
    let teams = [
        team(1, "Dr. A", "P1", "1st", mit),
        team(2, "Dr. B", "P2", "2nd", mit),
    ];
    assert_eq!(
        teams_to_string(&teams),
        "Team,Advisor,Problem,Ranking,Institution\n1,Dr. A,P1,1st,0\n2,Dr. B,P2,2nd,0\n"
    );
}

#[test]
fn test_institutions_output() {
    let mut institutions = InstitutionRegistry::new();
    institutions.resolve("MIT", "Cambridge", "MA", "USA");
    institutions.resolve("Harvard", "Cambridge", "MA", "USA");
    assert_eq!(
        institutions_to_string(&institutions),
        "Name,City,State,Country\n0,MIT,Cambridge,MA,USA\n1,Harvard,Cambridge,MA,USA\n"
    );
}

#[test]
fn test_empty_collections_keep_headers_only() {
    assert_eq!(teams_to_string(&[]), "Team,Advisor,Problem,Ranking,Institution\n");
    assert_eq!(
        institutions_to_string(&InstitutionRegistry::new()),
        "Name,City,State,Country\n"
    );
}

#[test]
fn test_embedded_delimiters_are_not_quoted() {
    let mut institutions = InstitutionRegistry::new();
    let mit = institutions.resolve("MIT", "Cambridge", "MA", "USA");
    let teams = [team(1, "Dr. A, PhD", "P1", "1st", mit)];
    assert_eq!(
        teams_to_string(&teams),
        "Team,Advisor,Problem,Ranking,Institution\n1,Dr. A, PhD,P1,1st,0\n"
    );
}
