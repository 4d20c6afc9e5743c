pub use self::institution::{Institution, InstitutionId};
pub use self::registry::InstitutionRegistry;
pub use self::team::Team;

mod institution;
mod registry;
mod team;
