//! Contact form state and the validation guard in front of the mail handoff.

/// Confirmation shown after a successful handoff to the mail client.
pub const CONFIRMATION: &str = "Thank you for your message! We will get back to you soon.";

/// Editable contact form fields.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIssue {
    /// At least one field was blank after trimming.
    MissingFields,
    /// The email field did not look like an address.
    InvalidEmail,
}

impl FormIssue {
    /// Blocking notice shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            FormIssue::MissingFields => "Please fill in all fields",
            FormIssue::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl ContactForm {
    /// Validate trimmed field values without mutating the editor state.
    /// Blank fields are reported before email shape problems.
    pub fn validate(&self) -> Result<(), FormIssue> {
        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();
        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(FormIssue::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(FormIssue::InvalidEmail);
        }
        Ok(())
    }

    /// Build the `mailto:` URL handed to the platform mail client.
    pub fn mailto_url(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            percent_encode(&format!("Message from {}", self.name.trim())),
            percent_encode(self.message.trim()),
        )
    }
}

/// Local part and domain separated by a single `@`, a dot somewhere in the
/// domain, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Minimal RFC 3986 unreserved-set encoder for mailto query values.
fn percent_encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn accepts_a_complete_submission() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn any_blank_field_blocks_with_fill_in_all_fields() {
        for blank in ["name", "email", "message"] {
            let mut form = filled();
            match blank {
                "name" => form.name.clear(),
                "email" => form.email.clear(),
                _ => form.message.clear(),
            }
            assert_eq!(form.validate(), Err(FormIssue::MissingFields));
            assert_eq!(
                FormIssue::MissingFields.message(),
                "Please fill in all fields"
            );
        }
    }

    #[test]
    fn whitespace_only_fields_count_as_blank() {
        let mut form = filled();
        form.message = "   \n\t".to_string();
        assert_eq!(form.validate(), Err(FormIssue::MissingFields));
    }

    #[test]
    fn email_shape_is_checked_after_presence() {
        let mut form = filled();
        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(), Err(FormIssue::InvalidEmail));
        assert_eq!(
            FormIssue::InvalidEmail.message(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn email_pattern_matches_the_documented_cases() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
    }

    #[test]
    fn mailto_url_encodes_subject_and_body() {
        let form = filled();
        let url = form.mailto_url("someone@example.org");
        assert!(url.starts_with("mailto:someone@example.org?subject="));
        assert!(url.contains("Message%20from%20Ada"));
        assert!(url.ends_with("body=Hello%20there"));
    }
}
