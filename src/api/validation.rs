//! Utilities to help with API request validation.

use derive_more::derive::{AsRef, Deref, Display};
use serde::Deserialize;
use serde_with::SerializeDisplay;
use thiserror::Error;

/// A todo's title. Must not be empty.
pub type TodoTitle = BoundedString<1, { usize::MAX }>;

/// A [`String`] newtype that guarantees its length in bytes is within a certain range.
#[derive(
    Deref,
    AsRef,
    Display,
    Deserialize,
    SerializeDisplay,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
)]
#[as_ref(forward)]
#[serde(try_from = "String")]
pub struct BoundedString<const MIN: usize, const MAX: usize>(String);

impl<const MIN: usize, const MAX: usize> BoundedString<MIN, MAX> {
    /// Consumes the [`BoundedString`], returning the wrapped [`String`].
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// An error constructing a [`BoundedString`].
#[derive(Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BoundedStringError<const MIN: usize, const MAX: usize> {
    /// The length was less than the [`BoundedString`]'s `MIN`.
    #[error("invalid length {0}, expected at least {MIN}")]
    TooShort(usize),

    /// The length was greater than the [`BoundedString`]'s `MAX`.
    #[error("invalid length {0}, expected at most {MAX}")]
    TooLong(usize),
}

impl<const MIN: usize, const MAX: usize> TryFrom<String> for BoundedString<MIN, MAX> {
    type Error = BoundedStringError<MIN, MAX>;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        if string.len() < MIN {
            Err(BoundedStringError::TooShort(string.len()))
        } else if string.len() > MAX {
            Err(BoundedStringError::TooLong(string.len()))
        } else {
            Ok(Self(string))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_todo_title_rejected() {
        assert_eq!(
            TodoTitle::try_from(String::new()),
            Err(BoundedStringError::TooShort(0)),
            "empty title should be too short"
        );

        serde_json::from_str::<TodoTitle>(r#""""#)
            .expect_err("empty title should fail to deserialize");
    }

    #[test]
    fn todo_title_accepted() -> anyhow::Result<()> {
        let title: TodoTitle = serde_json::from_str(r#""buy milk""#)?;

        assert_eq!(*title, "buy milk", "title should be unchanged");
        assert_eq!(
            serde_json::to_string(&title)?,
            r#""buy milk""#,
            "title should serialize as a plain string"
        );

        Ok(())
    }

    #[test]
    fn bounded_string_rejects_long_strings() {
        assert_eq!(
            BoundedString::<0, 3>::try_from("four".to_owned()),
            Err(BoundedStringError::TooLong(4)),
            "string over the maximum should be too long"
        );
    }
}
