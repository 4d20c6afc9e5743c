use super::InstitutionId;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Team {
    pub number: u32,
    pub advisor: String,
    pub problem: String,
    pub ranking: String,
    pub institution: InstitutionId,
}
