use crate::{InquiryForm, encode_uri_component};

pub const SUBJECT_PREFIX: &str = "Session inquiry – ";

/// An email draft ready to be handed to the visitor's mail client.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl ComposedEmail {
    pub fn encoded_subject(&self) -> String {
        encode_uri_component(&self.subject)
    }

    pub fn encoded_body(&self) -> String {
        encode_uri_component(&self.body)
    }

    /// `mailto:<recipient>?subject=<subject>&body=<body>`
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            self.encoded_subject(),
            self.encoded_body()
        )
    }
}

/// Builds inquiry drafts addressed to the studio's booking address.
#[derive(Clone, Debug)]
pub struct Composer {
    recipient: String,
}

impl Composer {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn compose(&self, fields: &InquiryForm) -> ComposedEmail {
        ComposedEmail {
            recipient: self.recipient.to_owned(),
            subject: format!("{SUBJECT_PREFIX}{}", fields.name),
            body: format!(
                "Name: {}\nEmail: {}\nType: {}\n\nMessage:\n{}",
                fields.name, fields.email, fields.project_type, fields.message
            ),
        }
    }

    /// Validate then compose. Nothing is composed for an invalid form.
    pub fn submit(&self, fields: &InquiryForm, options: &[String]) -> crate::Result<ComposedEmail> {
        fields.check(options)?;

        let email = self.compose(fields);
        tracing::info!(project_type = %fields.project_type, "inquiry composed");

        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> InquiryForm {
        InquiryForm {
            name: "Jane Doe".to_owned(),
            email: "jane@example.com".to_owned(),
            project_type: "Mixing".to_owned(),
            message: "Need a 3-song EP mixed by March.".to_owned(),
        }
    }

    #[test]
    fn compose_fills_templates() {
        let email = Composer::new("tom@project-records.com").compose(&jane());

        assert_eq!(email.recipient, "tom@project-records.com");
        assert_eq!(email.subject, "Session inquiry – Jane Doe");
        assert_eq!(
            email.body,
            "Name: Jane Doe\nEmail: jane@example.com\nType: Mixing\n\nMessage:\nNeed a 3-song EP mixed by March."
        );
    }

    #[test]
    fn empty_message_keeps_heading() {
        let mut form = jane();
        form.message.clear();

        let email = Composer::new("a@b.co").compose(&form);
        assert!(email.body.ends_with("\n\nMessage:\n"));
    }

    #[test]
    fn mailto_uri_layout() {
        let email = Composer::new("tom@project-records.com").compose(&jane());

        assert_eq!(
            email.mailto_uri(),
            "mailto:tom@project-records.com\
             ?subject=Session%20inquiry%20%E2%80%93%20Jane%20Doe\
             &body=Name%3A%20Jane%20Doe%0AEmail%3A%20jane%40example.com%0AType%3A%20Mixing\
             %0A%0AMessage%3A%0ANeed%20a%203-song%20EP%20mixed%20by%20March."
        );
    }

    #[test]
    fn submit_rejects_invalid_form() {
        let mut form = jane();
        form.email = "not-an-email".to_owned();

        assert!(Composer::new("a@b.co").submit(&form, &[]).is_err());
    }
}
