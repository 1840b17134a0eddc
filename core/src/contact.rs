use serde::{Deserialize, Serialize};

pub const CONTACT_PATH: &str = "/api/contact";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again later.";
pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Whitespace-only input counts as missing.
    pub fn validate(&self) -> Result<(), ContactError> {
        for field in ContactField::ALL {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field.as_str()));
            }
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("failed to encode contact payload: {0}")]
    Encode(String),
    #[error("contact endpoint returned status {0}")]
    Status(u16),
    #[error("contact request failed: {0}")]
    Transport(String),
}

impl ContactError {
    pub fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}

pub fn normalize_backend_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub fn contact_endpoint(base: &str) -> String {
    format!("{}{CONTACT_PATH}", normalize_backend_base(base))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    pub url: String,
    pub body: String,
}

impl ContactRequest {
    pub fn new(base: &str, fields: &ContactFields) -> Result<Self, ContactError> {
        fields.validate()?;
        let body =
            serde_json::to_string(fields).map_err(|err| ContactError::Encode(err.to_string()))?;
        Ok(Self {
            url: contact_endpoint(base),
            body,
        })
    }
}

#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    async fn post_json(&self, url: &str, body: &str) -> Result<u16, ContactError>;
}

pub async fn deliver<T: ContactTransport + ?Sized>(
    transport: &T,
    request: &ContactRequest,
) -> Result<(), ContactError> {
    let status = transport.post_json(&request.url, &request.body).await?;
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ContactError::Status(status))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.fields.set(field, value);
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Pending
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (self.status == SubmissionStatus::Error).then_some(GENERIC_ERROR_MESSAGE)
    }

    pub fn success_message(&self) -> Option<&'static str> {
        (self.status == SubmissionStatus::Success).then_some(SUCCESS_MESSAGE)
    }

    /// Moves to pending and builds the request. Incomplete fields or an
    /// in-flight submission leave the state untouched.
    pub fn begin(&mut self, base: &str) -> Result<ContactRequest, ContactError> {
        if self.is_submitting() {
            return Err(ContactError::InFlight);
        }
        let request = ContactRequest::new(base, &self.fields)?;
        self.status = SubmissionStatus::Pending;
        Ok(request)
    }

    pub fn finish(&mut self, outcome: &Result<(), ContactError>) {
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.fields.clear();
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
            }
        }
    }

    pub async fn submit<T: ContactTransport + ?Sized>(
        &mut self,
        transport: &T,
        base: &str,
    ) -> Result<(), ContactError> {
        let request = self.begin(base)?;
        let outcome = deliver(transport, &request).await;
        self.finish(&outcome);
        outcome
    }
}
