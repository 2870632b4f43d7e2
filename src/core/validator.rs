// Copyright 2026 gym-manager contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Member input validation
//!
//! Front-desk input is validated before it reaches the store:
//! - Name: non-empty after trimming, at most 100 characters
//! - Phone: digits with an optional leading `+`, 7 to 15 digits
//! - E-mail: optional, but must look like an address when present
//!
//! Validation failures never crash the UI; they surface as messages in
//! the member dialog.

use regex::Regex;
use thiserror::Error;

/// Validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// Name is empty or whitespace
    #[error("Member name must not be empty")]
    EmptyName,

    /// Name exceeds the storage limit
    #[error("Member name too long: {0} characters (max 100)")]
    NameTooLong(usize),

    /// Phone does not match the accepted shape
    #[error("Invalid phone number '{0}'")]
    InvalidPhone(String),

    /// E-mail does not look like an address
    #[error("Invalid e-mail address '{0}'")]
    InvalidEmail(String),
}

/// Validates member input fields.
///
/// Compiles its patterns once; create it at composition time and reuse.
pub struct MemberValidator {
    phone_pattern: Regex,
    email_pattern: Regex,
}

impl MemberValidator {
    /// Creates a validator with the standard patterns.
    // Both patterns are string literals; compilation cannot fail
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            phone_pattern: Regex::new(r"^\+?[0-9]{7,15}$")
                .expect("phone pattern should be valid regex"),
            email_pattern: Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
                .expect("e-mail pattern should be valid regex"),
        }
    }

    /// Validates a full set of member fields.
    ///
    /// Returns the first failure; the dialog shows one message at a time.
    pub fn validate(
        &self,
        name: &str,
        phone: &str,
        email: Option<&str>,
    ) -> Result<(), ValidationError> {
        self.validate_name(name)?;
        self.validate_phone(phone)?;

        if let Some(email) = email {
            self.validate_email(email)?;
        }

        Ok(())
    }

    /// Name: non-empty after trimming, at most 100 characters
    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let len = trimmed.chars().count();
        if len > 100 {
            return Err(ValidationError::NameTooLong(len));
        }

        Ok(())
    }

    /// Phone: optional `+`, then 7-15 digits
    pub fn validate_phone(&self, phone: &str) -> Result<(), ValidationError> {
        if self.phone_pattern.is_match(phone.trim()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidPhone(phone.to_string()))
        }
    }

    /// E-mail: local@domain.tld shape, nothing stricter
    pub fn validate_email(&self, email: &str) -> Result<(), ValidationError> {
        if self.email_pattern.is_match(email.trim()) {
            Ok(())
        } else {
            Err(ValidationError::InvalidEmail(email.to_string()))
        }
    }
}

impl Default for MemberValidator {
    fn default() -> Self {
        Self::new()
    }
}
