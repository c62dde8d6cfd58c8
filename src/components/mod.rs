//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod enrollment_chart;
pub mod loading;
pub mod nav;
pub mod payment_progress;
pub mod stat_card;
pub mod upcoming_courses;

pub use enrollment_chart::EnrollmentChart;
pub use loading::{ChartSkeleton, Loading};
pub use nav::Nav;
pub use payment_progress::PaymentProgress;
pub use stat_card::{CardColor, StatCard};
pub use upcoming_courses::UpcomingCourses;
