//! The fields of the contact form.
//!
//! Each [`Field`] maps to a stable input element id and a paired error
//! element id on the presentation surface.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three user-editable inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The sender's name.
    Name,
    /// The sender's email address.
    Email,
    /// The message body.
    Message,
}

impl Field {
    /// All fields, in focus priority order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Returns the id of the input element for this field.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Returns the id of the error-display element paired with this field.
    pub const fn error_id(self) -> &'static str {
        match self {
            Self::Name => "nameError",
            Self::Email => "emailError",
            Self::Message => "messageError",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
