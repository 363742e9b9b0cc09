//! Field validation for submitted forms.
//!
//! Validators are pure: they take the raw submitted values and return every
//! failure found, each tagged with the [`Field`] it belongs to. An empty
//! [`ValidationErrors`] means the form is valid.
//!
//! ```rust
//! use vinyl_core::validation::{validate_album_fields, AlbumFieldError, AlbumForm, Field};
//!
//! let form = AlbumForm {
//!     title: "Blue Train".to_string(),
//!     artist: "John Coltrane".to_string(),
//!     year: "19x7".to_string(),
//!     genre_ids: vec![],
//! };
//! let errors = validate_album_fields(&form);
//! assert_eq!(errors.get(Field::Year), Some(&AlbumFieldError::InvalidYear));
//! assert_eq!(errors.get(Field::Genres), Some(&AlbumFieldError::NoGenres));
//! assert!(errors.get(Field::Title).is_none());
//! ```

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::{error::CabinetError, models::stars_in_range};

/// Form fields that can carry a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Title,
    Artist,
    Year,
    Genres,
    Stars,
    Username,
    Password,
    PasswordConfirmation,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Artist => "artist",
            Field::Year => "year",
            Field::Genres => "genres",
            Field::Stars => "stars",
            Field::Username => "username",
            Field::Password => "password",
            Field::PasswordConfirmation => "password_confirmation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation failure that knows which field it belongs to.
pub trait FieldError: fmt::Display {
    fn field(&self) -> Field;
}

/// Failures of the album add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum AlbumFieldError {
    #[error("Title is required.")]
    MissingTitle,
    #[error("Artist is required.")]
    MissingArtist,
    #[error("Year must be a number.")]
    InvalidYear,
    #[error("At least one genre is required.")]
    NoGenres,
}

impl FieldError for AlbumFieldError {
    fn field(&self) -> Field {
        match self {
            AlbumFieldError::MissingTitle => Field::Title,
            AlbumFieldError::MissingArtist => Field::Artist,
            AlbumFieldError::InvalidYear => Field::Year,
            AlbumFieldError::NoGenres => Field::Genres,
        }
    }
}

/// Failures of the review form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum ReviewFieldError {
    #[error("Rating must be between 1 and 5 stars.")]
    StarsOutOfRange,
}

impl FieldError for ReviewFieldError {
    fn field(&self) -> Field {
        match self {
            ReviewFieldError::StarsOutOfRange => Field::Stars,
        }
    }
}

/// Failures of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum RegistrationFieldError {
    #[error("Username is required.")]
    MissingUsername,
    #[error("Password is required.")]
    MissingPassword,
    #[error("Passwords do not match.")]
    PasswordMismatch,
}

impl FieldError for RegistrationFieldError {
    fn field(&self) -> Field {
        match self {
            RegistrationFieldError::MissingUsername => Field::Username,
            RegistrationFieldError::MissingPassword => Field::Password,
            RegistrationFieldError::PasswordMismatch => Field::PasswordConfirmation,
        }
    }
}

/// All failures found in one form, in field order of discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors<E> {
    errors: Vec<E>,
}

impl<E: FieldError> ValidationErrors<E> {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn push(&mut self, error: E) {
        self.errors.push(error);
    }

    /// True when the form passed validation.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The failure recorded for `field`, if any.
    pub fn get(&self, field: Field) -> Option<&E> {
        self.errors.iter().find(|e| e.field() == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.errors.iter()
    }

    /// Converts the first failure into [`CabinetError::InvalidInput`].
    pub fn into_result(self) -> Result<(), CabinetError> {
        match self.errors.first() {
            None => Ok(()),
            Some(e) => Err(CabinetError::invalid_input(e.field().as_str())
                .with_reason(e.to_string())),
        }
    }
}

impl<E: FieldError> fmt::Display for ValidationErrors<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.errors {
            writeln!(f, "- **{}**: {e}", e.field())?;
        }
        Ok(())
    }
}

/// Raw album form input, before any type coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlbumForm {
    pub title: String,
    pub artist: String,
    pub year: String,
    pub genre_ids: Vec<u64>,
}

impl AlbumForm {
    /// The year as a number, once [`validate_album_fields`] accepted it.
    pub fn year_value(&self) -> Option<i64> {
        self.year.trim().parse().ok()
    }
}

/// Checks title, artist, year and genre selection.
///
/// The year must consist only of ASCII digits; negative or decimal years are
/// rejected and there is no range check.
pub fn validate_album_fields(form: &AlbumForm) -> ValidationErrors<AlbumFieldError> {
    let mut errors = ValidationErrors::new();

    if form.title.trim().is_empty() {
        errors.push(AlbumFieldError::MissingTitle);
    }
    if form.artist.trim().is_empty() {
        errors.push(AlbumFieldError::MissingArtist);
    }

    let year = form.year.trim();
    let digits_only = !year.is_empty() && year.chars().all(|c| c.is_ascii_digit());
    if !digits_only || form.year_value().is_none() {
        errors.push(AlbumFieldError::InvalidYear);
    }

    if form.genre_ids.is_empty() {
        errors.push(AlbumFieldError::NoGenres);
    }

    errors
}

/// Checks the star rating of a review.
pub fn validate_review_fields(stars: i64) -> ValidationErrors<ReviewFieldError> {
    let mut errors = ValidationErrors::new();
    if !stars_in_range(stars) {
        errors.push(ReviewFieldError::StarsOutOfRange);
    }
    errors
}

/// Checks a registration form.
pub fn validate_registration(
    username: &str,
    password: &str,
    confirmation: &str,
) -> ValidationErrors<RegistrationFieldError> {
    let mut errors = ValidationErrors::new();
    if username.trim().is_empty() {
        errors.push(RegistrationFieldError::MissingUsername);
    }
    if password.is_empty() {
        errors.push(RegistrationFieldError::MissingPassword);
    } else if password != confirmation {
        errors.push(RegistrationFieldError::PasswordMismatch);
    }
    errors
}
