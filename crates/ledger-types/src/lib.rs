/// Errors that can occur when validating comment text.
#[derive(Debug, thiserror::Error)]
pub enum BodyError {
    /// The input text was empty or contained only whitespace
    #[error("Comment body is required")]
    Empty,
}

/// The text of a comment, guaranteed non-empty.
///
/// Wraps a `String` and ensures it contains at least one non-whitespace
/// character. Leading and trailing whitespace is removed during construction,
/// so the stored text is exactly what a reader should see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    /// Creates a new `CommentBody` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(CommentBody)` if the trimmed input is non-empty,
    /// or `Err(BodyError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, BodyError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(BodyError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the wrapper and returns the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for CommentBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CommentBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for CommentBody {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for CommentBody {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CommentBody::new(&s).map_err(serde::de::Error::custom)
    }
}
