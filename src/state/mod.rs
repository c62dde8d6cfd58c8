//! State Management
//!
//! Domain record types and global application state.

pub mod global;

pub use global::{
    provide_global_state, Course, CourseFields, CourseRef, Enrollment, EnrollmentFields,
    GlobalState, Instructor, Participant, Record, Room,
};
