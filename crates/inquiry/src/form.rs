use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

/// Values entered in the contact form.
///
/// `project_type` is free text unless the site restricts it to a fixed option
/// set, see [`InquiryForm::check`].
#[derive(Validate, Deserialize, Default, Clone, Debug, PartialEq)]
pub struct InquiryForm {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,
    #[validate(email)]
    #[serde(default)]
    pub email: String,
    #[serde(default, rename = "type")]
    pub project_type: String,
    #[serde(default)]
    pub message: String,
}

impl InquiryForm {
    /// Strip the email the way browsers sanitize `type=email` inputs. Every
    /// other field is composed exactly as entered.
    pub fn normalized(self) -> Self {
        Self {
            email: self.email.trim().to_owned(),
            ..self
        }
    }

    /// Validate field constraints and, when `options` is not empty, require
    /// `project_type` to be one of them.
    pub fn check(&self, options: &[String]) -> crate::Result<()> {
        let mut errors = match self.validate() {
            Ok(_) => ValidationErrors::new(),
            Err(errors) => errors,
        };

        if !options.is_empty() && !options.iter().any(|o| o == &self.project_type) {
            errors.add("project_type", ValidationError::new("one_of"));
        }

        if errors.errors().is_empty() {
            return Ok(());
        }

        Err(errors.into())
    }
}

/// Which fields failed validation, for inline feedback next to each control.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct InvalidFields {
    pub name: bool,
    pub email: bool,
    pub project_type: bool,
}

impl InvalidFields {
    pub fn any(&self) -> bool {
        self.name || self.email || self.project_type
    }
}

impl From<&ValidationErrors> for InvalidFields {
    fn from(errors: &ValidationErrors) -> Self {
        let fields = errors.field_errors();

        Self {
            name: fields.contains_key("name"),
            email: fields.contains_key("email"),
            project_type: fields.contains_key("project_type"),
        }
    }
}

impl From<&crate::Error> for InvalidFields {
    fn from(error: &crate::Error) -> Self {
        match error {
            crate::Error::Validate(errors) => errors.into(),
        }
    }
}
