//! Upcoming Courses Component
//!
//! List of the next scheduled courses.

use leptos::*;

use crate::format::{format_date_de, format_euro};
use crate::state::global::{Course, GlobalState};
use crate::stats;

/// List of the next courses starting after today
#[component]
pub fn UpcomingCourses() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            let courses = state.courses.get();
            let upcoming: Vec<Course> = stats::upcoming_courses(&courses, stats::today())
                .into_iter()
                .cloned()
                .collect();

            if upcoming.is_empty() {
                view! {
                    <div class="flex flex-col items-center justify-center py-8 gap-2">
                        <span class="text-3xl opacity-40">"📚"</span>
                        <p class="text-sm text-muted-foreground">"Keine zukünftigen Kurse"</p>
                    </div>
                }.into_view()
            } else {
                view! {
                    <div class="space-y-0">
                        {upcoming.into_iter().map(|course| {
                            view! { <UpcomingCourseRow course=course /> }
                        }).collect_view()}
                    </div>
                }.into_view()
            }
        }}
    }
}

/// Single row in the upcoming list
#[component]
fn UpcomingCourseRow(course: Course) -> impl IntoView {
    let title = course.fields.titel.clone().unwrap_or_else(|| "—".to_string());

    let date = course
        .fields
        .startdatum
        .as_deref()
        .and_then(format_date_de)
        .unwrap_or_else(|| "—".to_string());
    let detail = match course.fields.preis {
        Some(preis) => format!("{} · {}", date, format_euro(preis)),
        None => date,
    };

    view! {
        <div class="flex items-start gap-3 py-3 border-b border-border last:border-0">
            <div class="w-8 h-8 rounded-lg flex items-center justify-center shrink-0 icon-amber">
                "📖"
            </div>
            <div class="min-w-0 flex-1">
                <p class="text-sm font-medium text-foreground truncate">{title}</p>
                <p class="text-xs text-muted-foreground mt-0.5">{detail}</p>
            </div>
        </div>
    }
}
