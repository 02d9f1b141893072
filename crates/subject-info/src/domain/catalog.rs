//! Static course to subject option table.
//!
//! The built-in table is an exhaustive `match` over [`CourseCode`], so a new
//! course cannot be added without also supplying its subject lists. Every
//! catalog, built-in or custom, passes the same construction checks:
//!
//! - each course appears exactly once and no course is missing
//! - major and minor lists are non-empty
//! - neither list repeats a subject

use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use super::CourseCode;

/// Which option list a subject belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectRole {
    /// Primary subject of study.
    Major,
    /// Secondary subject of study.
    Minor,
}

impl SubjectRole {
    /// Lower-case label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
        }
    }
}

/// Errors raised while building or querying a [`SubjectCatalog`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A course has no subjects for one of its lists.
    #[error("course {course} has no {} options", role.label())]
    EmptyOptions {
        /// Course whose list is empty.
        course: CourseCode,
        /// List that is empty.
        role: SubjectRole,
    },

    /// A subject is listed more than once for the same course and role.
    #[error("course {course} lists {} option '{subject}' more than once", role.label())]
    DuplicateOption {
        /// Course whose list repeats a subject.
        course: CourseCode,
        /// List containing the repeat.
        role: SubjectRole,
        /// The repeated subject.
        subject: String,
    },

    /// The same course was supplied twice.
    #[error("course {course} is defined more than once")]
    DuplicateCourse {
        /// The repeated course.
        course: CourseCode,
    },

    /// A known course has no entry.
    #[error("course {course} has no subject options defined")]
    MissingCourse {
        /// The course without an entry.
        course: CourseCode,
    },

    /// The requested course is not in the catalog.
    #[error("unknown course '{course}'")]
    UnknownCourse {
        /// Raw course value that failed lookup.
        course: String,
    },
}

/// Ordered major and minor subject lists for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectOptions {
    major: Vec<String>,
    minor: Vec<String>,
}

impl SubjectOptions {
    /// Build the option lists for `course`, checking they are non-empty and
    /// free of repeats.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::EmptyOptions`] or
    /// [`CatalogError::DuplicateOption`] when a list is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use subject_info::domain::{CourseCode, SubjectOptions};
    ///
    /// let options = SubjectOptions::new(CourseCode::Ba, ["History"], ["Hindi"])
    ///     .expect("valid options");
    /// assert!(options.has_major("History"));
    /// assert!(!options.has_minor("History"));
    /// ```
    pub fn new<M, N>(course: CourseCode, major: M, minor: N) -> Result<Self, CatalogError>
    where
        M: IntoIterator,
        M::Item: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let major_list = collect_unique(course, SubjectRole::Major, major)?;
        let minor_list = collect_unique(course, SubjectRole::Minor, minor)?;
        Ok(Self {
            major: major_list,
            minor: minor_list,
        })
    }

    /// Major subjects in presentation order.
    #[must_use]
    pub fn major(&self) -> &[String] {
        &self.major
    }

    /// Minor subjects in presentation order.
    #[must_use]
    pub fn minor(&self) -> &[String] {
        &self.minor
    }

    /// Subjects for the given role.
    #[must_use]
    pub fn for_role(&self, role: SubjectRole) -> &[String] {
        match role {
            SubjectRole::Major => self.major(),
            SubjectRole::Minor => self.minor(),
        }
    }

    /// Whether `subject` is an allowed major. Comparison is case-sensitive.
    #[must_use]
    pub fn has_major(&self, subject: &str) -> bool {
        self.major.iter().any(|candidate| candidate == subject)
    }

    /// Whether `subject` is an allowed minor. Comparison is case-sensitive.
    #[must_use]
    pub fn has_minor(&self, subject: &str) -> bool {
        self.minor.iter().any(|candidate| candidate == subject)
    }
}

fn collect_unique<I>(
    course: CourseCode,
    role: SubjectRole,
    subjects: I,
) -> Result<Vec<String>, CatalogError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut seen = HashSet::new();
    let mut list = Vec::new();
    for subject in subjects.into_iter().map(Into::into) {
        if !seen.insert(subject.clone()) {
            return Err(CatalogError::DuplicateOption {
                course,
                role,
                subject,
            });
        }
        list.push(subject);
    }
    if list.is_empty() {
        return Err(CatalogError::EmptyOptions { course, role });
    }
    Ok(list)
}

const BA_MAJORS: &[&str] = &[
    "History",
    "Political Science",
    "Sociology",
    "Geography",
    "Economics",
];
const BA_MINORS: &[&str] = &["Hindi", "English", "Sanskrit", "Philosophy"];
const BCOM_MAJORS: &[&str] = &["Accountancy", "Business Studies", "Economics"];
const BCOM_MINORS: &[&str] = &["Mathematics", "Statistics", "English"];
const BSC_MAJORS: &[&str] = &[
    "Physics",
    "Chemistry",
    "Mathematics",
    "Biology",
    "Computer Science",
];
const BSC_MINORS: &[&str] = &["Environmental Science", "English", "Statistics"];

/// Built-in option lists for `course` as `(major, minor)`.
const fn builtin_options(course: CourseCode) -> (&'static [&'static str], &'static [&'static str]) {
    match course {
        CourseCode::Ba => (BA_MAJORS, BA_MINORS),
        CourseCode::BCom => (BCOM_MAJORS, BCOM_MINORS),
        CourseCode::BSc => (BSC_MAJORS, BSC_MINORS),
    }
}

/// Read-only mapping from course to its subject options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCatalog {
    ba: SubjectOptions,
    bcom: SubjectOptions,
    bsc: SubjectOptions,
}

impl SubjectCatalog {
    /// Build the catalog shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the built-in table breaks a construction
    /// invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use subject_info::domain::{CourseCode, SubjectCatalog};
    ///
    /// let catalog = SubjectCatalog::standard().expect("built-in catalog");
    /// assert_eq!(catalog.courses().count(), 3);
    /// assert!(catalog.options(CourseCode::BSc).has_major("Physics"));
    /// ```
    pub fn standard() -> Result<Self, CatalogError> {
        let entries = CourseCode::ALL
            .into_iter()
            .map(|course| {
                let (major, minor) = builtin_options(course);
                SubjectOptions::new(course, major.iter().copied(), minor.iter().copied())
                    .map(|options| (course, options))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Build a catalog from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateCourse`] when a course repeats and
    /// [`CatalogError::MissingCourse`] when a course has no entry.
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (CourseCode, SubjectOptions)>,
    {
        let mut map = BTreeMap::new();
        for (course, options) in entries {
            if map.insert(course, options).is_some() {
                return Err(CatalogError::DuplicateCourse { course });
            }
        }
        let mut take = |course: CourseCode| {
            map.remove(&course)
                .ok_or(CatalogError::MissingCourse { course })
        };
        Ok(Self {
            ba: take(CourseCode::Ba)?,
            bcom: take(CourseCode::BCom)?,
            bsc: take(CourseCode::BSc)?,
        })
    }

    /// Options for a typed course.
    #[must_use]
    pub const fn options(&self, course: CourseCode) -> &SubjectOptions {
        match course {
            CourseCode::Ba => &self.ba,
            CourseCode::BCom => &self.bcom,
            CourseCode::BSc => &self.bsc,
        }
    }

    /// Resolve a raw course string to its code and options.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownCourse`] when `course` is not a known
    /// code.
    pub fn lookup(&self, course: &str) -> Result<(CourseCode, &SubjectOptions), CatalogError> {
        let code = course
            .parse::<CourseCode>()
            .map_err(|_| CatalogError::UnknownCourse {
                course: course.to_owned(),
            })?;
        Ok((code, self.options(code)))
    }

    /// Courses in presentation order.
    pub fn courses(&self) -> impl Iterator<Item = CourseCode> {
        CourseCode::ALL.into_iter()
    }

    /// Courses paired with their options.
    pub fn iter(&self) -> impl Iterator<Item = (CourseCode, &SubjectOptions)> + '_ {
        self.courses().map(|course| (course, self.options(course)))
    }
}
