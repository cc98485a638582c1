use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{component, view, IntoView};
use leptos_router::components::{Route, Routes};
use leptos_router::path;

use crate::pages::home::Landing;
use crate::pages::info::{Blog, Support};

#[component]
pub fn SiteRoutes() -> impl IntoView {
    view! {
      <Routes fallback=|| view! { <p class="pt-40 text-center">"404 – not found"</p> }>
        <Route path=path!("")          view=Landing />
        <Route path=path!("/support")  view=Support />
        <Route path=path!("/blog")     view=Blog    />
      </Routes>
    }
}
