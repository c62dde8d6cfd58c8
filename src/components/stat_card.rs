//! Stat Card Component
//!
//! Displays a single KPI with icon, value, and description.

use leptos::*;

/// Card color variant matching the dashboard palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardColor {
    Amber,
    Violet,
    Sky,
    Teal,
    Rose,
}

impl CardColor {
    fn card_class(self) -> &'static str {
        match self {
            CardColor::Amber => "stat-card-amber",
            CardColor::Violet => "stat-card-violet",
            CardColor::Sky => "stat-card-sky",
            CardColor::Teal => "stat-card-teal",
            CardColor::Rose => "stat-card-rose",
        }
    }

    fn icon_class(self) -> &'static str {
        match self {
            CardColor::Amber => "icon-amber",
            CardColor::Violet => "icon-violet",
            CardColor::Sky => "icon-sky",
            CardColor::Teal => "icon-teal",
            CardColor::Rose => "icon-rose",
        }
    }
}

/// KPI card component
#[component]
pub fn StatCard(
    /// Card label (e.g. "Kurse")
    #[prop(into)]
    label: String,
    /// Formatted value, or a placeholder while loading
    #[prop(into)]
    value: String,
    /// Short description line under the value
    #[prop(into)]
    description: String,
    /// Icon emoji
    icon: &'static str,
    /// Color variant
    #[prop(default = CardColor::Amber)]
    color: CardColor,
) -> impl IntoView {
    view! {
        <div class=format!(
            "{} rounded-xl border p-4 card-shadow transition-all duration-200 hover:scale-[1.02] cursor-default",
            color.card_class()
        )>
            <div class="flex items-start justify-between mb-3">
                <div class=format!(
                    "{} w-9 h-9 rounded-lg flex items-center justify-center text-lg",
                    color.icon_class()
                )>
                    {icon}
                </div>
            </div>
            <p class="text-3xl font-bold text-foreground">{value}</p>
            <p class="text-sm font-semibold text-foreground mt-0.5">{label}</p>
            <p class="text-xs text-muted-foreground mt-0.5">{description}</p>
        </div>
    }
}
