use std::fmt;

use non_empty_string::NonEmptyString;

/// A single course as read from a catalog line.
///
/// The course number is the identity key. It is compared case-insensitively
/// (see [`Course::number_matches`]) but stored exactly as it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    number: NonEmptyString,
    title: String,
    prerequisites: Vec<String>,
}

impl Course {
    /// Creates a course from its parts.
    ///
    /// Prerequisite codes are kept in the order given, including duplicates
    /// and codes that do not name any known course.
    #[must_use]
    pub const fn new(number: NonEmptyString, title: String, prerequisites: Vec<String>) -> Self {
        Self {
            number,
            title,
            prerequisites,
        }
    }

    /// Returns the course number as written in the source.
    #[must_use]
    pub fn number(&self) -> &str {
        self.number.as_str()
    }

    /// Returns the course title. May be empty.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the prerequisite course numbers in source order.
    #[must_use]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Checks whether `code` names this course, ignoring ASCII case.
    ///
    /// ```
    /// # use courses::Course;
    /// # use non_empty_string::NonEmptyString;
    /// let number = NonEmptyString::new("CSCI101".to_string()).unwrap();
    /// let course = Course::new(number, String::new(), Vec::new());
    ///
    /// assert!(course.number_matches("csci101"));
    /// assert!(!course.number_matches("CSCI1010"));
    /// ```
    #[must_use]
    pub fn number_matches(&self, code: &str) -> bool {
        self.number().eq_ignore_ascii_case(code)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.number, self.title)
    }
}
