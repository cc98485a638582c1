use leptos::prelude::*;

#[component]
pub fn Support() -> impl IntoView {
    view! {
        <main class="max-w-3xl mx-auto px-6 pt-40 pb-24">
            <h1 class="text-4xl font-bold mb-4">"Support"</h1>
            <p class="text-gray-700">
                "Our team is on call around the clock. Open a ticket from the customer portal or "
                "jump back to "<a href="/#pricing" class="underline">"pricing"</a>"."
            </p>
        </main>
    }
}

#[component]
pub fn Blog() -> impl IntoView {
    view! {
        <main class="max-w-3xl mx-auto px-6 pt-40 pb-24">
            <h1 class="text-4xl font-bold mb-4">"Blog"</h1>
            <p class="text-gray-700">"Nothing here yet. Use the header to head back to the landing sections."</p>
        </main>
    }
}
