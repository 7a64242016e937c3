//! Response envelopes.
//!
//! Every backend command answers with `{success, error, result}`. The flag
//! and message are copied as-is; only `result` goes through hydration.

use serde::Serialize;

use crate::core::domain::Secret;
use crate::core::hydrate::{hydrate, Fields, Hydrate};
use crate::core::payload::RawPayload;
use crate::error::{Error, HydrationError};

/// Envelope around a single record.
///
/// `result` is only meaningful when `success` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub error: String,
    pub result: T,
}

/// Envelope around an ordered list of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EnvelopeList<T> {
    pub success: bool,
    pub error: String,
    pub result: Vec<T>,
}

/// Response of the single-secret commands.
pub type SecretResult = Envelope<Secret>;

/// Response of the list command.
pub type SecretResultList = EnvelopeList<Secret>;

impl<T: Default> Envelope<T> {
    /// Successful envelope carrying `result`.
    pub fn ok(result: T) -> Self {
        Self {
            success: true,
            error: String::new(),
            result,
        }
    }

    /// Failed envelope with a default result.
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            result: T::default(),
        }
    }

    /// Convert into a `Result`, turning a failed envelope into
    /// `Error::Backend`.
    pub fn into_result(self) -> crate::error::Result<T> {
        if self.success {
            Ok(self.result)
        } else {
            Err(Error::Backend(self.error))
        }
    }
}

impl<T> EnvelopeList<T> {
    /// Successful envelope carrying `result`.
    pub fn ok(result: Vec<T>) -> Self {
        Self {
            success: true,
            error: String::new(),
            result,
        }
    }

    /// Failed envelope with an empty result.
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            result: Vec::new(),
        }
    }

    /// Convert into a `Result`, turning a failed envelope into
    /// `Error::Backend`.
    pub fn into_result(self) -> crate::error::Result<Vec<T>> {
        if self.success {
            Ok(self.result)
        } else {
            Err(Error::Backend(self.error))
        }
    }
}

impl<T: Hydrate> Hydrate for Envelope<T> {
    fn hydrate_fields(fields: &Fields<'_>) -> Result<Self, HydrationError> {
        Ok(Self {
            success: fields.boolean("success")?,
            error: fields.text("error")?,
            result: fields.record("result")?,
        })
    }
}

impl<T: Hydrate> Hydrate for EnvelopeList<T> {
    fn hydrate_fields(fields: &Fields<'_>) -> Result<Self, HydrationError> {
        Ok(Self {
            success: fields.boolean("success")?,
            error: fields.text("error")?,
            result: fields.list("result")?,
        })
    }
}

impl<T: Hydrate> From<RawPayload> for Envelope<T> {
    fn from(raw: RawPayload) -> Self {
        hydrate(raw)
    }
}

impl<T: Hydrate> From<RawPayload> for EnvelopeList<T> {
    fn from(raw: RawPayload) -> Self {
        hydrate(raw)
    }
}
