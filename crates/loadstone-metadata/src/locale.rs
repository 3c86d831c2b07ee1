//! Interface language identifiers and the canonical name fold.
//!
//! Plugin names are compared case-insensitively everywhere. [`fold_name`]
//! applies a fixed Unicode lowercase fold; a locale-sensitive fold would let
//! the active language change the fold of a name between runs, so the
//! [`Locale`] value records the requested language without influencing the
//! fold itself.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Folds a plugin name for case-insensitive comparison.
///
/// The fold is stable across runs and locales.
///
/// # Example
///
/// ```
/// use loadstone_metadata::fold_name;
///
/// assert_eq!(fold_name("Blank.ESP"), "blank.esp");
/// ```
#[must_use]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Supported interface languages.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Locale {
    /// English.
    #[default]
    English,
    /// Spanish.
    Spanish,
    /// Russian.
    Russian,
    /// French.
    French,
    /// Simplified Chinese.
    Chinese,
    /// Polish.
    Polish,
    /// Brazilian Portuguese.
    BrazilianPortuguese,
    /// Finnish.
    Finnish,
    /// German.
    German,
    /// Danish.
    Danish,
    /// Korean.
    Korean,
}

impl Locale {
    /// Returns the POSIX-style locale code for this language.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Spanish => "es",
            Self::Russian => "ru",
            Self::French => "fr",
            Self::Chinese => "zh_CN",
            Self::Polish => "pl",
            Self::BrazilianPortuguese => "pt_BR",
            Self::Finnish => "fi",
            Self::German => "de",
            Self::Danish => "da",
            Self::Korean => "ko",
        }
    }

    /// Folds `name` for comparison under this locale.
    ///
    /// Every locale currently delegates to [`fold_name`]; sort output must
    /// not depend on the active language.
    #[must_use]
    pub fn fold(self, name: &str) -> String {
        fold_name(name)
    }
}
