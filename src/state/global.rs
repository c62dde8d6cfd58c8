//! Global Application State
//!
//! Record types for the five backend collections and the reactive state
//! shared across the component tree, managed with Leptos signals.

use leptos::*;

/// Generic record envelope shared by all collections.
///
/// Every record carries an opaque, per-record-stable identifier and a
/// collection-specific field struct. All domain fields are optional on the
/// wire; field names are the backend's.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct Record<F> {
    pub record_id: String,
    pub fields: F,
}

/// Course fields (collection "kurse")
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct CourseFields {
    #[serde(default)]
    pub titel: Option<String>,
    /// ISO date string, `%Y-%m-%d`
    #[serde(default)]
    pub startdatum: Option<String>,
    /// ISO date string, `%Y-%m-%d`
    #[serde(default)]
    pub enddatum: Option<String>,
    /// Price in euros
    #[serde(default)]
    pub preis: Option<f64>,
}

/// Enrollment fields (collection "anmeldungen")
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct EnrollmentFields {
    #[serde(default)]
    pub kurs: Option<CourseRef>,
    /// Payment flag; only a strict `true` counts as paid
    #[serde(default)]
    pub bezahlt: Option<bool>,
}

/// Participant fields (collection "teilnehmer")
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct ParticipantFields {
    #[serde(default)]
    pub name: Option<String>,
}

/// Instructor fields (collection "dozenten")
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct InstructorFields {
    #[serde(default)]
    pub name: Option<String>,
}

/// Room fields (collection "raeume")
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize, PartialEq)]
pub struct RoomFields {
    #[serde(default)]
    pub name: Option<String>,
}

pub type Course = Record<CourseFields>;
pub type Enrollment = Record<EnrollmentFields>;
pub type Participant = Record<ParticipantFields>;
pub type Instructor = Record<InstructorFields>;
pub type Room = Record<RoomFields>;

/// Reference from an enrollment to a course.
///
/// The wire value is a path-like string whose final `/`-separated segment is
/// the referenced course's `record_id` (plain ids without slashes also
/// occur). The raw string is kept as received; [`CourseRef::course_id`]
/// extracts the id once so that lookups go through an id-keyed map instead
/// of re-parsing at every use site.
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(transparent)]
pub struct CourseRef(pub String);

impl CourseRef {
    /// The referenced course id: the final non-empty `/`-separated segment.
    ///
    /// Returns `None` for empty or trailing-slash references; such
    /// enrollments resolve to no course.
    pub fn course_id(&self) -> Option<&str> {
        self.0.rsplit('/').next().filter(|segment| !segment.is_empty())
    }
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Courses (Kurse)
    pub courses: RwSignal<Vec<Course>>,
    /// Enrollments (Anmeldungen)
    pub enrollments: RwSignal<Vec<Enrollment>>,
    /// Participants (Teilnehmer)
    pub participants: RwSignal<Vec<Participant>>,
    /// Instructors (Dozenten)
    pub instructors: RwSignal<Vec<Instructor>>,
    /// Rooms (Raeume)
    pub rooms: RwSignal<Vec<Room>>,
    /// True until the combined initial fetch settles
    pub loading: RwSignal<bool>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        courses: create_rw_signal(Vec::new()),
        enrollments: create_rw_signal(Vec::new()),
        participants: create_rw_signal(Vec::new()),
        instructors: create_rw_signal(Vec::new()),
        rooms: create_rw_signal(Vec::new()),
        // The initial fetch has not settled yet
        loading: create_rw_signal(true),
    };

    provide_context(state);
}

impl GlobalState {
    /// Total number of records across all five collections
    pub fn total_records(&self) -> usize {
        self.courses.get().len()
            + self.enrollments.get().len()
            + self.participants.get().len()
            + self.instructors.get().len()
            + self.rooms.get().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_ref_plain_id() {
        let reference = CourseRef("abc123".to_string());
        assert_eq!(reference.course_id(), Some("abc123"));
    }

    #[test]
    fn test_course_ref_path() {
        let reference = CourseRef("apps/42/records/abc123".to_string());
        assert_eq!(reference.course_id(), Some("abc123"));
    }

    #[test]
    fn test_course_ref_malformed() {
        assert_eq!(CourseRef(String::new()).course_id(), None);
        assert_eq!(CourseRef("apps/42/records/".to_string()).course_id(), None);
    }

    #[test]
    fn test_record_deserialize_with_missing_fields() {
        let course: Course =
            serde_json::from_str(r#"{"record_id":"k1","fields":{"titel":"Yoga"}}"#).unwrap();
        assert_eq!(course.record_id, "k1");
        assert_eq!(course.fields.titel.as_deref(), Some("Yoga"));
        assert_eq!(course.fields.startdatum, None);
        assert_eq!(course.fields.preis, None);

        let enrollment: Enrollment =
            serde_json::from_str(r#"{"record_id":"a1","fields":{"kurs":"apps/1/records/k1"}}"#)
                .unwrap();
        assert_eq!(
            enrollment.fields.kurs.as_ref().and_then(CourseRef::course_id),
            Some("k1")
        );
        assert_eq!(enrollment.fields.bezahlt, None);
    }
}
