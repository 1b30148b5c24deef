use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    error::{CaseforgeError, ErrorKind, InvalidInputReason},
    intaker::RawInput,
    CaseforgeResult,
};

pub mod camelify;
pub mod dotify;
pub mod kebabify;
pub mod words;

use camelify::camelify;
use dotify::dotify;
use kebabify::kebabify;
use words::split_words;

/// The case styles a text can be converted into.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// `helloWorld`
    #[default]
    Camel,
    /// `hello-world`
    Kebab,
    /// `hello.world`
    Dot,
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Dot => "dot",
        };

        write!(f, "{}", name)
    }
}

impl FromStr for CaseStyle {
    type Err = CaseforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "camel" | "camelcase" => Ok(CaseStyle::Camel),
            "kebab" | "kebab-case" => Ok(CaseStyle::Kebab),
            "dot" | "dot.case" => Ok(CaseStyle::Dot),
            _ => Err(CaseforgeError::raise_general_error(
                ErrorKind::UnknownCaseStyle,
                &format!(
                    "Unknown case style `{}`. Available styles: 'camel', 'kebab' or 'dot'",
                    s
                ),
            )),
        }
    }
}

/// Where words are split apart besides explicit delimiters.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseBoundary {
    /// Split only on non-alphanumeric characters. `helloWorld` is one word.
    #[default]
    Delimiters,
    /// Additionally split where a lowercase letter is followed by an uppercase one.
    /// `helloWorld` becomes `hello` and `World`; `HTTPS` stays together.
    LowerToUpper,
}

/// A case converter bound to a word-splitting policy and a default target style.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Converter {
    boundary: CaseBoundary,
    default_style: CaseStyle,
}

impl Converter {
    pub fn new(boundary: CaseBoundary, default_style: CaseStyle) -> Self {
        Self {
            boundary,
            default_style,
        }
    }

    pub fn get_boundary(&self) -> CaseBoundary {
        self.boundary
    }

    pub fn get_default_style(&self) -> CaseStyle {
        self.default_style
    }

    /// Converts an untyped input into the requested case style.
    ///
    /// Validation is done up front: absent values, non-text values, blank text and text
    /// with no words left after normalization all fail with `CaseforgeError::InvalidInput`
    /// before anything is assembled.
    pub fn convert<I: Into<RawInput>>(
        &self,
        input: I,
        style: CaseStyle,
    ) -> CaseforgeResult<String> {
        let text = input.into().into_text()?;
        let words = split_words(&text, self.boundary);

        if words.is_empty() {
            return Err(CaseforgeError::raise_invalid_input_error(
                InvalidInputReason::NoValidWords,
            ));
        }

        tracing::trace!(
            "Assembling {} words into {} case with {:?} boundaries",
            words.len(),
            style,
            self.boundary
        );

        let output = match style {
            CaseStyle::Camel => camelify(&words),
            CaseStyle::Kebab => kebabify(&words),
            CaseStyle::Dot => dotify(&words),
        };

        Ok(output)
    }

    /// Converts an untyped input into the configured default style.
    pub fn convert_default<I: Into<RawInput>>(&self, input: I) -> CaseforgeResult<String> {
        self.convert(input, self.default_style)
    }
}

/// Converts `input` into `style`, splitting words on delimiters and punctuation only.
pub fn convert<I: Into<RawInput>>(input: I, style: CaseStyle) -> CaseforgeResult<String> {
    Converter::default().convert(input, style)
}

pub fn to_camel_case<I: Into<RawInput>>(input: I) -> CaseforgeResult<String> {
    convert(input, CaseStyle::Camel)
}

pub fn to_kebab_case<I: Into<RawInput>>(input: I) -> CaseforgeResult<String> {
    convert(input, CaseStyle::Kebab)
}

pub fn to_dot_case<I: Into<RawInput>>(input: I) -> CaseforgeResult<String> {
    convert(input, CaseStyle::Dot)
}
