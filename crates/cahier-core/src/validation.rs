//! Form validation run by the view layer before a create/update call.
//!
//! The API client never calls these; it sends whatever it is given. Messages
//! are user-facing and shown verbatim by the CLI.

use crate::drafts::{AssignmentDraft, FiliereDraft, GroupeDraft, MatiereDraft, ModuleDraft, ProfessorDraft};
use crate::entities::Matiere;
use crate::errors::CoreError;

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 8;
const HOURS_RANGE: std::ops::RangeInclusive<f64> = 0.0..=500.0;
const COEFFICIENT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=10.0;
const CAPACITY_RANGE: std::ops::RangeInclusive<i64> = 1..=200;

/// Whether a form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

fn check_name(name: &str) -> Result<(), CoreError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(CoreError::validation(
            "Name must be at least 2 characters long.",
        ));
    }
    Ok(())
}

fn check_code(code: &str) -> Result<(), CoreError> {
    if code.trim().is_empty() {
        return Err(CoreError::validation("Code is required."));
    }
    Ok(())
}

/// `local@domain.tld`, no whitespace, exactly one `@`.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    // At least one dot with something on both sides somewhere in the domain.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

impl ProfessorDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] on an invalid email, a short name, or
    /// a short password (required on create, checked on edit only if given).
    pub fn validate(&self, mode: FormMode) -> Result<(), CoreError> {
        if !is_valid_email(&self.email) {
            return Err(CoreError::validation("Please enter a valid email address."));
        }
        check_name(&self.name)?;

        let password_len = self.password.as_deref().map_or(0, |p| p.chars().count());
        let too_short = match mode {
            FormMode::Create => password_len < MIN_PASSWORD_LEN,
            FormMode::Edit => password_len > 0 && password_len < MIN_PASSWORD_LEN,
        };
        if too_short {
            return Err(CoreError::validation(
                "Password must be at least 8 characters long.",
            ));
        }
        Ok(())
    }
}

impl FiliereDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the name is too short.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_name(&self.name)
    }
}

impl ModuleDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] on a short name, a blank code or a
    /// missing filière.
    pub fn validate(&self) -> Result<(), CoreError> {
        check_name(&self.name)?;
        check_code(&self.code)?;
        if self.filiere_id.is_none() {
            return Err(CoreError::validation("Please select a filière."));
        }
        Ok(())
    }
}

impl MatiereDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] on out-of-range hours or coefficient,
    /// a short name, a blank code or a missing module.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.hours.is_some_and(|h| !HOURS_RANGE.contains(&h)) {
            return Err(CoreError::validation("Hours must be between 0 and 500."));
        }
        if self.coefficient.is_some_and(|c| !COEFFICIENT_RANGE.contains(&c)) {
            return Err(CoreError::validation(
                "Coefficient must be between 0 and 10.",
            ));
        }
        check_name(&self.name)?;
        check_code(&self.code)?;
        if self.module_id.is_none() {
            return Err(CoreError::validation("Please select a module."));
        }
        Ok(())
    }
}

impl GroupeDraft {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] on an out-of-range capacity, a short
    /// name, a blank code or a missing filière.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.capacity.is_some_and(|c| !CAPACITY_RANGE.contains(&c)) {
            return Err(CoreError::validation("Capacity must be between 1 and 200."));
        }
        check_name(&self.name)?;
        check_code(&self.code)?;
        if self.filiere_id.is_none() {
            return Err(CoreError::validation("Please select a filière."));
        }
        Ok(())
    }
}

impl AssignmentDraft {
    /// Check that every selection is made and that the matière belongs to the
    /// selected module. `matieres` must contain the selected matière for the
    /// module check to run (fetch it by id rather than relying on a list
    /// page); a matière absent from it is left for the backend to reject.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first missing selection,
    /// or a module/matière mismatch.
    pub fn validate(&self, matieres: &[Matiere]) -> Result<(), CoreError> {
        if self.user_id.is_none() {
            return Err(CoreError::validation("Please select a professor."));
        }
        let Some(module_id) = self.module_id else {
            return Err(CoreError::validation("Please select a module."));
        };
        let Some(matiere_id) = self.matiere_id else {
            return Err(CoreError::validation("Please select a matière."));
        };
        if self.groupe_id.is_none() {
            return Err(CoreError::validation("Please select a group."));
        }

        if let Some(matiere) = matieres.iter().find(|m| m.id == matiere_id) {
            if matiere.module_id != module_id {
                return Err(CoreError::validation(
                    "Selected matière does not belong to the selected module.",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Role;
    use rstest::rstest;

    fn professor(email: &str, name: &str, password: Option<&str>) -> ProfessorDraft {
        ProfessorDraft {
            name: name.into(),
            email: email.into(),
            password: password.map(str::to_string),
            role: Role::Professeur,
        }
    }

    fn message(result: Result<(), CoreError>) -> String {
        result.unwrap_err().to_string()
    }

    #[rstest]
    #[case("a@x.com", true)]
    #[case("first.last@faculty.univ.ma", true)]
    #[case("no-at-sign.com", false)]
    #[case("two@@x.com", false)]
    #[case("a@x", false)]
    #[case("a @x.com", false)]
    #[case("@x.com", false)]
    #[case("a@.com", false)]
    fn email_shape(#[case] email: &str, #[case] valid: bool) {
        assert_eq!(is_valid_email(email), valid, "{email}");
    }

    #[test]
    fn professor_create_requires_password() {
        let draft = professor("a@x.com", "Amal", None);
        assert_eq!(
            message(draft.validate(FormMode::Create)),
            "Password must be at least 8 characters long."
        );
        assert!(draft.validate(FormMode::Edit).is_ok());
    }

    #[test]
    fn professor_edit_checks_password_only_when_given() {
        let draft = professor("a@x.com", "Amal", Some("short"));
        assert!(draft.validate(FormMode::Edit).is_err());

        let draft = professor("a@x.com", "Amal", Some("long enough"));
        assert!(draft.validate(FormMode::Edit).is_ok());
        assert!(draft.validate(FormMode::Create).is_ok());
    }

    #[test]
    fn professor_checks_email_before_name() {
        let draft = professor("bad", "A", Some("password123"));
        assert_eq!(
            message(draft.validate(FormMode::Create)),
            "Please enter a valid email address."
        );

        let draft = professor("a@x.com", " A ", Some("password123"));
        assert_eq!(
            message(draft.validate(FormMode::Create)),
            "Name must be at least 2 characters long."
        );
    }

    #[rstest]
    #[case(Some(-1.0), None, "Hours must be between 0 and 500.")]
    #[case(Some(500.5), None, "Hours must be between 0 and 500.")]
    #[case(None, Some(10.5), "Coefficient must be between 0 and 10.")]
    fn matiere_ranges(
        #[case] hours: Option<f64>,
        #[case] coefficient: Option<f64>,
        #[case] expected: &str,
    ) {
        let draft = MatiereDraft {
            name: "Algèbre".into(),
            code: "ALG".into(),
            module_id: Some(1),
            hours,
            coefficient,
            description: None,
        };
        assert_eq!(message(draft.validate()), expected);
    }

    #[test]
    fn matiere_requires_module() {
        let draft = MatiereDraft {
            name: "Algèbre".into(),
            code: "ALG".into(),
            hours: Some(500.0),
            coefficient: Some(0.0),
            ..MatiereDraft::default()
        };
        assert_eq!(message(draft.validate()), "Please select a module.");
    }

    #[rstest]
    #[case(Some(0), "Capacity must be between 1 and 200.")]
    #[case(Some(201), "Capacity must be between 1 and 200.")]
    fn groupe_capacity(#[case] capacity: Option<i64>, #[case] expected: &str) {
        let draft = GroupeDraft {
            name: "G1".into(),
            code: "G1".into(),
            filiere_id: Some(1),
            capacity,
            description: None,
        };
        assert_eq!(message(draft.validate()), expected);
    }

    #[test]
    fn groupe_and_module_require_code_and_filiere() {
        let groupe = GroupeDraft {
            name: "G1".into(),
            code: " ".into(),
            filiere_id: Some(1),
            ..GroupeDraft::default()
        };
        assert_eq!(message(groupe.validate()), "Code is required.");

        let module = ModuleDraft {
            name: "Analyse".into(),
            code: "AN1".into(),
            ..ModuleDraft::default()
        };
        assert_eq!(message(module.validate()), "Please select a filière.");
    }

    #[test]
    fn filiere_requires_name() {
        let draft = FiliereDraft {
            name: "X".into(),
            ..FiliereDraft::default()
        };
        assert!(draft.validate().is_err());
    }

    fn matiere(id: u64, module_id: u64) -> Matiere {
        Matiere {
            id,
            name: format!("M{id}"),
            code: format!("M{id}"),
            module_id,
            hours: None,
            coefficient: None,
            description: None,
        }
    }

    #[test]
    fn assignment_reports_first_missing_selection() {
        let draft = AssignmentDraft {
            user_id: Some(1),
            module_id: Some(2),
            matiere_id: None,
            groupe_id: None,
        };
        assert_eq!(message(draft.validate(&[])), "Please select a matière.");
    }

    #[test]
    fn assignment_matiere_must_belong_to_module() {
        let catalog = [matiere(10, 2), matiere(11, 3)];
        let ok = AssignmentDraft {
            user_id: Some(1),
            module_id: Some(2),
            matiere_id: Some(10),
            groupe_id: Some(4),
        };
        assert!(ok.validate(&catalog).is_ok());

        let mismatched = AssignmentDraft {
            matiere_id: Some(11),
            ..ok
        };
        assert_eq!(
            message(mismatched.validate(&catalog)),
            "Selected matière does not belong to the selected module."
        );
    }
}
