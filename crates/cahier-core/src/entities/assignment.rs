use serde::{Deserialize, Serialize};

/// Binds one professor to a (module, matière, groupe) triple.
///
/// The matière is expected to belong to the module; that is checked by the
/// view layer before creation (see [`crate::validation`]), never here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Assignment {
    pub id: u64,
    pub user_id: u64,
    pub module_id: u64,
    pub matiere_id: u64,
    pub groupe_id: u64,
}
