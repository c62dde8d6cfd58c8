//! Dashboard Page
//!
//! Overview of courses, instructors, participants, enrollments, and rooms:
//! revenue hero, KPI cards, enrollment chart, upcoming courses, and payment
//! status.

use leptos::*;

use crate::api;
use crate::components::{
    CardColor, ChartSkeleton, EnrollmentChart, Loading, PaymentProgress, StatCard, UpcomingCourses,
};
use crate::format::format_euro;
use crate::state::global::GlobalState;
use crate::stats;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch all five collections on mount. The join either populates every
    // collection or none; a failure is logged and the view renders empty.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            match api::fetch_all_collections().await {
                Ok(collections) => {
                    state.courses.set(collections.courses);
                    state.enrollments.set(collections.enrollments);
                    state.participants.set(collections.participants);
                    state.instructors.set(collections.instructors);
                    state.rooms.set(collections.rooms);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Failed to load dashboard data: {}", e).into(),
                    );
                }
            }

            state.loading.set(false);
        });
    });

    let state_for_stats = state.clone();
    let state_for_chart = state.clone();
    let state_for_upcoming = state;

    view! {
        <div class="space-y-8">
            // Hero with revenue figures
            <Hero />

            // KPI cards
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-4">
                {move || {
                    stat_items(&state_for_stats).into_iter().map(|item| view! {
                        <StatCard
                            label=item.label
                            value=item.value
                            description=item.description
                            icon=item.icon
                            color=item.color
                        />
                    }).collect_view()
                }}
            </div>

            // Chart and upcoming courses
            <div class="grid grid-cols-1 lg:grid-cols-5 gap-6">
                <section class="lg:col-span-3 bg-card rounded-xl border p-6 card-shadow">
                    <h2 class="text-base font-semibold text-foreground mb-1">"Anmeldungen pro Kurs"</h2>
                    <p class="text-xs text-muted-foreground mb-5">"Belegung der angelegten Kurse"</p>
                    {move || {
                        if state_for_chart.loading.get() {
                            view! { <ChartSkeleton /> }.into_view()
                        } else if state_for_chart.courses.get().is_empty() {
                            view! {
                                <div class="h-48 flex flex-col items-center justify-center gap-2">
                                    <span class="text-3xl opacity-40">"📚"</span>
                                    <p class="text-sm text-muted-foreground">"Noch keine Kurse vorhanden"</p>
                                </div>
                            }.into_view()
                        } else {
                            view! { <EnrollmentChart /> }.into_view()
                        }
                    }}
                </section>

                <section class="lg:col-span-2 bg-card rounded-xl border p-6 card-shadow">
                    <h2 class="text-base font-semibold text-foreground mb-1">"Kommende Kurse"</h2>
                    <p class="text-xs text-muted-foreground mb-5">"Nächste geplante Kurse"</p>
                    {move || {
                        if state_for_upcoming.loading.get() {
                            view! { <Loading /> }.into_view()
                        } else {
                            view! { <UpcomingCourses /> }.into_view()
                        }
                    }}
                </section>
            </div>

            // Payment status
            <PaymentProgress />
        </div>
    }
}

/// Hero panel with branding and revenue figures
#[component]
fn Hero() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let state_for_revenue = state.clone();
    let revenue = create_memo(move |_| {
        stats::revenue_summary(
            &state_for_revenue.courses.get(),
            &state_for_revenue.enrollments.get(),
        )
    });

    let loading = state.loading;

    view! {
        <div class="hero-gradient rounded-2xl p-8 relative overflow-hidden text-hero-foreground">
            <div class="relative z-10 flex flex-col md:flex-row md:items-center justify-between gap-6">
                <div>
                    <p class="text-xs font-semibold tracking-widest uppercase mb-2 opacity-65">
                        "Kursverwaltungssystem"
                    </p>
                    <h1 class="text-4xl font-bold tracking-tight font-serif">"KursManager"</h1>
                    <p class="mt-2 text-sm max-w-md opacity-70">
                        "Kurse, Dozenten, Teilnehmer, Räume und Anmeldungen zentral verwalten."
                    </p>
                </div>
                <div class="flex flex-col gap-3 shrink-0 min-w-[180px]">
                    <div class="hero-figure rounded-xl px-5 py-3 text-center">
                        <p class="text-3xl font-bold">
                            {move || {
                                if loading.get() {
                                    "—".to_string()
                                } else {
                                    format_euro(revenue.get().paid)
                                }
                            }}
                        </p>
                        <p class="text-xs mt-0.5 opacity-65">"Eingegangene Zahlungen"</p>
                    </div>
                    <div class="hero-figure-muted rounded-xl px-5 py-2 text-center">
                        <p class="text-lg font-semibold opacity-85">
                            {move || {
                                if loading.get() {
                                    "—".to_string()
                                } else {
                                    format_euro(revenue.get().total)
                                }
                            }}
                        </p>
                        <p class="text-xs opacity-55">"Gesamtpotenzial"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One entry of the KPI card row
struct StatItem {
    label: &'static str,
    value: String,
    description: String,
    icon: &'static str,
    color: CardColor,
}

/// Build the five KPI entries from the current state.
///
/// Values show a dash placeholder until the combined fetch has settled.
fn stat_items(state: &GlobalState) -> Vec<StatItem> {
    let loading = state.loading.get();
    let courses = state.courses.get();
    let enrollments = state.enrollments.get();

    let count = |n: usize| {
        if loading {
            "—".to_string()
        } else {
            n.to_string()
        }
    };
    let active_label = if loading {
        "— aktiv".to_string()
    } else {
        format!("{} aktiv", stats::active_course_count(&courses, stats::today()))
    };
    let paid_label = if loading {
        "— bezahlt".to_string()
    } else {
        format!("{} bezahlt", stats::paid_count(&enrollments))
    };

    vec![
        StatItem {
            label: "Kurse",
            value: count(courses.len()),
            description: active_label,
            icon: "📚",
            color: CardColor::Amber,
        },
        StatItem {
            label: "Dozenten",
            value: count(state.instructors.get().len()),
            description: "Lehrpersonal".to_string(),
            icon: "🎓",
            color: CardColor::Violet,
        },
        StatItem {
            label: "Teilnehmer",
            value: count(state.participants.get().len()),
            description: "Registriert".to_string(),
            icon: "👥",
            color: CardColor::Sky,
        },
        StatItem {
            label: "Anmeldungen",
            value: count(enrollments.len()),
            description: paid_label,
            icon: "📋",
            color: CardColor::Teal,
        },
        StatItem {
            label: "Räume",
            value: count(state.rooms.get().len()),
            description: "Verfügbar".to_string(),
            icon: "🚪",
            color: CardColor::Rose,
        },
    ]
}
