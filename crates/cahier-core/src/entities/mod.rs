//! Entity structs for every backend record.
//!
//! Records are parsed at the gateway boundary; a missing required field is a
//! decode error rather than a silently absent value. Extra fields the backend
//! adds are ignored.

mod assignment;
mod filiere;
mod groupe;
mod logbook;
mod matiere;
mod module;
mod professor;
mod professor_assignment;
mod user;

pub use assignment::Assignment;
pub use filiere::Filiere;
pub use groupe::Groupe;
pub use logbook::Logbook;
pub use matiere::Matiere;
pub use module::Module;
pub use professor::Professor;
pub use professor_assignment::ProfessorAssignment;
pub use user::{NamedRef, SessionUser};
