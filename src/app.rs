//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Nav;
use crate::pages::Dashboard;
use crate::state::global::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-background text-foreground flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Dashboard />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer with load status
                <Footer />
            </div>
        </Router>
    }
}

/// Footer component showing load status
#[component]
fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-card border-t border-border py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                <div class="text-muted-foreground">"KursManager"</div>

                {move || {
                    if state.loading.get() {
                        view! {
                            <div class="flex items-center space-x-2 text-muted-foreground">
                                <div class="loading-spinner w-4 h-4" />
                                <span>"Laden…"</span>
                            </div>
                        }.into_view()
                    } else {
                        view! {
                            <div class="text-muted-foreground">
                                {format!("{} Datensätze geladen", state.total_records())}
                            </div>
                        }.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Seite nicht gefunden"</h1>
            <p class="text-muted-foreground mb-6">"Diese Seite existiert nicht."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary hover:bg-primary-hover text-white rounded-lg font-medium transition-colors"
            >
                "Zur Übersicht"
            </A>
        </div>
    }
}
