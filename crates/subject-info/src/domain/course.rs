//! Course codes.
//!
//! Purpose: represent the closed set of academic programmes as a typed enum so
//! the option table can be matched exhaustively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Parse errors returned by [`CourseCode::from_str`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseCodeParseError {
    /// Returned when the provided code is empty.
    EmptyCode,
    /// Returned when the code does not name a known course.
    UnknownCode(String),
}

impl fmt::Display for CourseCodeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCode => write!(f, "course code must not be empty"),
            Self::UnknownCode(code) => write!(f, "unknown course code: {code}"),
        }
    }
}

impl std::error::Error for CourseCodeParseError {}

/// Academic programme a user enrols in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CourseCode {
    /// Bachelor of Arts.
    Ba,
    /// Bachelor of Commerce.
    BCom,
    /// Bachelor of Science.
    BSc,
}

impl CourseCode {
    /// Every course in presentation order.
    pub const ALL: [Self; 3] = [Self::Ba, Self::BCom, Self::BSc];

    /// Stable code shown to users and sent in submissions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ba => "BA",
            Self::BCom => "BCom",
            Self::BSc => "BSc",
        }
    }

    /// Human-readable programme title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Ba => "Bachelor of Arts",
            Self::BCom => "Bachelor of Commerce",
            Self::BSc => "Bachelor of Science",
        }
    }
}

impl FromStr for CourseCode {
    type Err = CourseCodeParseError;

    /// Codes match exactly; `"ba"` is not `"BA"`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.is_empty() {
            return Err(CourseCodeParseError::EmptyCode);
        }
        Self::ALL
            .into_iter()
            .find(|course| course.as_str() == raw)
            .ok_or_else(|| CourseCodeParseError::UnknownCode(raw.to_owned()))
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<CourseCode> for String {
    fn from(value: CourseCode) -> Self {
        value.as_str().to_owned()
    }
}

impl TryFrom<String> for CourseCode {
    type Error = CourseCodeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("BA", Ok(CourseCode::Ba))]
    #[case("BCom", Ok(CourseCode::BCom))]
    #[case("BSc", Ok(CourseCode::BSc))]
    #[case("", Err(CourseCodeParseError::EmptyCode))]
    #[case("ba", Err(CourseCodeParseError::UnknownCode("ba".to_owned())))]
    #[case("MBA", Err(CourseCodeParseError::UnknownCode("MBA".to_owned())))]
    #[case(" BA", Err(CourseCodeParseError::UnknownCode(" BA".to_owned())))]
    fn course_code_parsing(
        #[case] input: &str,
        #[case] expected: Result<CourseCode, CourseCodeParseError>,
    ) {
        assert_eq!(input.parse::<CourseCode>(), expected);
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for course in CourseCode::ALL {
            assert_eq!(course.to_string().parse::<CourseCode>(), Ok(course));
        }
    }

    #[test]
    fn serde_uses_the_code_string() {
        let json = serde_json::to_string(&CourseCode::BCom).expect("serialise");
        assert_eq!(json, "\"BCom\"");

        let err = serde_json::from_str::<CourseCode>("\"MBA\"").expect_err("unknown code");
        assert!(err.to_string().contains("unknown course code: MBA"));
    }
}
