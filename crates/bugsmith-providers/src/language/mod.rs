//! Language support
//!
//! Each supported grammar contributes a [`LanguageProfile`]; the
//! [`EntityExtractor`] uses it to turn a file into tagged [`CodeEntity`]
//! values.

pub mod common;
pub mod engine;
pub mod entity;

#[cfg(feature = "lang-go")]
pub mod go;
#[cfg(feature = "lang-python")]
pub mod python;

pub use common::{ElseShape, LanguageProfile, Visit, walk_scope};
pub use engine::{EntityExtractor, ExtractionReport, has_syntax_errors};
pub use entity::{CodeEntity, ParsedSource};
#[cfg(feature = "lang-go")]
pub use go::GoProfile;
#[cfg(feature = "lang-python")]
pub use python::PythonProfile;

use bugsmith_domain::error::{Error, Result};
use bugsmith_domain::Language;

#[cfg(feature = "lang-go")]
static GO_PROFILE: GoProfile = GoProfile;
#[cfg(feature = "lang-python")]
static PYTHON_PROFILE: PythonProfile = PythonProfile;

/// Profile for a language, if its grammar is compiled in
pub fn profile_for(language: Language) -> Result<&'static dyn LanguageProfile> {
    match language {
        #[cfg(feature = "lang-go")]
        Language::Go => Ok(&GO_PROFILE),
        #[cfg(feature = "lang-python")]
        Language::Python => Ok(&PYTHON_PROFILE),
        #[allow(unreachable_patterns)]
        other => Err(Error::UnsupportedLanguage {
            name: other.name().to_string(),
        }),
    }
}

/// Languages whose grammar is compiled in
pub fn supported_languages() -> Vec<Language> {
    Language::ALL
        .into_iter()
        .filter(|language| profile_for(*language).is_ok())
        .collect()
}
