use crate::models::{CreateAlertRequest, RegisterRequest, SaveProfileRequest};

#[derive(Debug)]
pub enum ValidationError {
    MissingField { field: &'static str },
    InvalidEmail,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField { field } => {
                write!(f, "Missing required field '{}'", field)
            }
            ValidationError::InvalidEmail => {
                write!(f, "Invalid email address")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub fn validate_register(req: &RegisterRequest) -> Result<(), ValidationError> {
    if req.name.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }

    let has_email = req.email.as_deref().is_some_and(|e| !e.trim().is_empty());
    let has_phone = req.phone.as_deref().is_some_and(|p| !p.trim().is_empty());
    if !has_email && !has_phone {
        return Err(ValidationError::MissingField {
            field: "email or phone",
        });
    }

    if has_email && !req.email.as_deref().unwrap_or_default().contains('@') {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

pub fn validate_profile(req: &SaveProfileRequest) -> Result<(), ValidationError> {
    if req.user_id.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "user_id" });
    }
    if req.name.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "name" });
    }
    if req.date_of_birth.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "date_of_birth",
        });
    }
    if req.time_of_birth.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "time_of_birth",
        });
    }
    if req.place_of_birth.trim().is_empty() {
        return Err(ValidationError::MissingField {
            field: "place_of_birth",
        });
    }

    Ok(())
}

pub fn validate_alert(req: &CreateAlertRequest) -> Result<(), ValidationError> {
    if req.user_id.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "user_id" });
    }
    if req.title.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "title" });
    }
    if req.message.trim().is_empty() {
        return Err(ValidationError::MissingField { field: "message" });
    }

    Ok(())
}
