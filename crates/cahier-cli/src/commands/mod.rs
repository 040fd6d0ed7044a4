pub mod assignments;
pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod filieres;
pub mod groupes;
pub mod logbooks;
pub mod matieres;
pub mod me;
pub mod modules;
pub mod professors;
pub mod shared;
