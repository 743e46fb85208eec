use crate::Course;

/// An in-memory set of courses, kept in load order.
///
/// Course numbers are not required to be unique. Lookups return the first
/// matching course in load order, and listing order is computed on demand
/// without reordering the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            courses: Vec::new(),
        }
    }

    /// Returns the number of courses in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns `true` if no courses are loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterates over the courses in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Appends a course.
    pub fn push(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Finds a course by number, ignoring ASCII case.
    ///
    /// If several courses share the number, the first one loaded wins.
    #[must_use]
    pub fn find_by_number(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.number_matches(code))
    }

    /// Returns the courses sorted by number.
    ///
    /// The comparison is ordinal on the raw number, so case is significant
    /// (`"CSCI100"` sorts before `"csci100"`). The sort is stable: courses
    /// with identical numbers stay in load order.
    #[must_use]
    pub fn sorted_by_number(&self) -> Vec<&Course> {
        let mut sorted: Vec<&Course> = self.courses.iter().collect();
        sorted.sort_by(|a, b| a.number().cmp(b.number()));
        sorted
    }

    /// Resolves the prerequisites of `course` against this catalog.
    ///
    /// Every stored prerequisite code yields exactly one item, in stored
    /// order, whether or not it resolves.
    pub fn prerequisites_of<'a>(
        &'a self,
        course: &'a Course,
    ) -> impl Iterator<Item = Prerequisite<'a>> + 'a {
        course
            .prerequisites()
            .iter()
            .map(move |code| {
                self.find_by_number(code)
                    .map_or(Prerequisite::Missing(code.as_str()), Prerequisite::Known)
            })
    }
}

impl From<Vec<Course>> for Catalog {
    fn from(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

impl FromIterator<Course> for Catalog {
    fn from_iter<I: IntoIterator<Item = Course>>(iter: I) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Course;
    type IntoIter = std::slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.iter()
    }
}

/// A prerequisite code resolved against a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prerequisite<'a> {
    /// The code names a course in the catalog.
    Known(&'a Course),
    /// The code does not name any loaded course.
    Missing(&'a str),
}

#[cfg(test)]
mod tests {
    use non_empty_string::NonEmptyString;

    use super::*;

    fn course(number: &str, title: &str, prerequisites: &[&str]) -> Course {
        Course::new(
            NonEmptyString::new(number.to_string()).unwrap(),
            title.to_string(),
            prerequisites.iter().map(ToString::to_string).collect(),
        )
    }

    fn numbers<'a>(courses: &[&'a Course]) -> Vec<&'a str> {
        courses.iter().copied().map(Course::number).collect()
    }

    #[test]
    fn find_is_case_insensitive() {
        let catalog = Catalog::from(vec![course("CSCI101", "Programming", &[])]);

        let upper = catalog.find_by_number("CSCI101");
        let lower = catalog.find_by_number("csci101");

        assert!(upper.is_some());
        assert_eq!(upper, lower);
    }

    #[test]
    fn find_returns_first_duplicate() {
        let catalog = Catalog::from(vec![
            course("CSCI101", "First", &[]),
            course("csci101", "Second", &[]),
        ]);

        let found = catalog.find_by_number("Csci101").unwrap();
        assert_eq!(found.title(), "First");
    }

    #[test]
    fn find_misses_unknown_code() {
        let catalog = Catalog::from(vec![course("CSCI101", "Programming", &[])]);
        assert!(catalog.find_by_number("CSCI102").is_none());
        assert!(Catalog::new().find_by_number("CSCI101").is_none());
    }

    #[test]
    fn sort_is_ordinal_and_case_sensitive() {
        let catalog = Catalog::from(vec![
            course("csci100", "", &[]),
            course("MATH201", "", &[]),
            course("CSCI300", "", &[]),
            course("CSCI100", "", &[]),
        ]);

        let sorted = catalog.sorted_by_number();
        assert_eq!(
            numbers(&sorted),
            vec!["CSCI100", "CSCI300", "MATH201", "csci100"]
        );
    }

    #[test]
    fn sort_is_stable_for_duplicates() {
        let catalog = Catalog::from(vec![
            course("CSCI200", "b", &[]),
            course("CSCI100", "first", &[]),
            course("CSCI100", "second", &[]),
        ]);

        let titles: Vec<_> = catalog
            .sorted_by_number()
            .into_iter()
            .map(Course::title)
            .collect();
        assert_eq!(titles, vec!["first", "second", "b"]);
    }

    #[test]
    fn sort_is_idempotent_and_leaves_catalog_untouched() {
        let catalog = Catalog::from(vec![
            course("MATH201", "", &[]),
            course("CSCI100", "", &[]),
        ]);

        let once: Catalog = catalog.sorted_by_number().into_iter().cloned().collect();
        let twice = once.sorted_by_number();

        assert_eq!(numbers(&twice), numbers(&once.iter().collect::<Vec<_>>()));
        assert_eq!(catalog.iter().next().unwrap().number(), "MATH201");
    }

    #[test]
    fn prerequisites_resolve_in_order_with_missing_entries() {
        let catalog = Catalog::from(vec![
            course("CSCI100", "Intro", &[]),
            course("CSCI300", "Algorithms", &["CSCI100", "CSCI999", "csci100"]),
        ]);
        let target = catalog.find_by_number("CSCI300").unwrap();

        let resolved: Vec<_> = catalog.prerequisites_of(target).collect();

        let intro = catalog.find_by_number("CSCI100").unwrap();
        assert_eq!(
            resolved,
            vec![
                Prerequisite::Known(intro),
                Prerequisite::Missing("CSCI999"),
                Prerequisite::Known(intro),
            ]
        );
    }
}
