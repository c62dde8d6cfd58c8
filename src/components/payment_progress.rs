//! Payment Progress Component
//!
//! Payment-status panel with progress bar and revenue figures.

use leptos::*;

use crate::format::format_euro;
use crate::state::global::GlobalState;
use crate::stats;

/// Payment-status panel.
///
/// Hidden while loading and when there are no enrollments at all.
#[component]
pub fn PaymentProgress() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        {move || {
            let enrollments = state.enrollments.get();
            if state.loading.get() || enrollments.is_empty() {
                return view! {}.into_view();
            }

            let summary = stats::revenue_summary(&state.courses.get(), &enrollments);
            let total_count = enrollments.len();
            let outstanding_count = total_count - summary.paid_count;
            let percent = summary.paid_count as f64 / total_count as f64 * 100.0;

            view! {
                <section class="bg-card rounded-xl border p-6 card-shadow">
                    <h2 class="text-base font-semibold text-foreground mb-5">"Zahlungsstatus"</h2>
                    <div class="flex flex-col md:flex-row md:items-center gap-6">
                        <div class="flex-1">
                            <div class="flex justify-between text-xs text-muted-foreground mb-2">
                                <span>{format!("{} von {} bezahlt", summary.paid_count, total_count)}</span>
                                <span>{format!("{} ausstehend", outstanding_count)}</span>
                            </div>
                            <div class="h-3 rounded-full bg-border overflow-hidden">
                                <div
                                    class="h-full rounded-full bg-progress transition-all duration-700"
                                    style=format!("width: {}%", percent)
                                />
                            </div>
                            <p class="text-xs text-muted-foreground mt-2">
                                {format!("{}% bezahlt", percent.round() as i64)}
                            </p>
                        </div>
                        <div class="flex gap-8 shrink-0">
                            <div class="text-center">
                                <p class="text-2xl font-bold icon-teal">{format_euro(summary.paid)}</p>
                                <p class="text-xs text-muted-foreground mt-0.5">"Eingegangen"</p>
                            </div>
                            <div class="text-center">
                                <p class="text-2xl font-bold icon-rose">
                                    {format_euro(summary.total - summary.paid)}
                                </p>
                                <p class="text-xs text-muted-foreground mt-0.5">"Ausstehend"</p>
                            </div>
                        </div>
                    </div>
                </section>
            }.into_view()
        }}
    }
}
