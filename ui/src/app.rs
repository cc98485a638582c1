use leptos::prelude::ClassAttribute;
use leptos::prelude::ElementChild;
use leptos::{component, view, IntoView};
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::Router;

use crate::components::{Footer, Header};
use crate::routes::SiteRoutes;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
      <Title text="InMotion Cloud"/>
      <Router>
        <Header/>

        <div class="min-h-screen">
          <SiteRoutes/>
        </div>

        <Footer/>
      </Router>
    }
}
