use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::nav::{default_sections, REQUEST_ACCESS_SECTION};

fn blurb(id: &str) -> &'static str {
    match id {
        "migrations" => "White-glove migrations from any provider, with zero-downtime cutovers planned by our engineers.",
        "ai-copilot" => "An operations co-pilot that watches your stack, explains incidents and drafts the fix.",
        "pricing" => "Flat, predictable pricing. No egress surprises.",
        _ => "",
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="pt-40 pb-24 text-center">
            <h1 class="text-5xl sm:text-7xl font-bold mb-6 leading-tight">
                "The AI First Managed Cloud Platform"
            </h1>
            <p class="text-lg text-gray-600">"Launching soon. Everything below is reachable from the header."</p>
        </section>
    }
}

#[component]
pub fn Landing() -> impl IntoView {
    let sections = default_sections()
        .into_iter()
        .map(|s| {
            view! {
                <section id=s.id.clone() class="py-24 border-t border-gray-200">
                    <h2 class="text-3xl font-bold mb-4">{s.label}</h2>
                    <p class="text-gray-700 leading-relaxed">{blurb(&s.id)}</p>
                </section>
            }
        })
        .collect_view();

    view! {
        <main class="max-w-6xl mx-auto px-6">
            <Hero/>
            {sections}
            <section id=REQUEST_ACCESS_SECTION class="py-24 border-t border-gray-200">
                <h2 class="text-3xl font-bold mb-4">"Request early access"</h2>
                <form class="flex gap-3">
                    <input
                        type="email"
                        name="email"
                        required=true
                        placeholder="you@company.com"
                        class="flex-1 rounded-md border border-gray-300 px-4"
                    />
                    <Button variant=ButtonVariant::Primary size=ButtonSize::Lg button_type="submit">
                        "Notify me"
                    </Button>
                </form>
            </section>
        </main>
    }
}
