use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct InstitutionId(pub usize);

#[derive(Debug, Serialize)]
pub struct Institution {
    pub id: InstitutionId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
}
