use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::components::logo::{resolve_logo_src, LogoSource};
use crate::nav::{
    aux_link_clicked, close_on_location_change, default_sections, CtaOverride, Location,
    MenuState, NavPlacement, Section, SectionNavigator, SectionOverride,
};
use crate::utils::cn;

pub const DEFAULT_SUPPORT_HREF: &str = "/support";
pub const DEFAULT_BLOG_HREF: &str = "/blog";

const HEADER_CLASS: &str =
    "fixed left-0 right-0 z-50 bg-white backdrop-blur-sm border-b border-gray-200";
const CONTAINER_CLASS: &str =
    "container mx-auto px-6 py-4 flex items-center justify-between gap-4";
const NAV_LINK_CLASS: &str = "text-gray-900 hover:text-gray-600 transition-colors";
const FOCUS_RING: &str = "focus-visible:outline-none focus-visible:ring-2 \
    focus-visible:ring-primary focus-visible:ring-offset-2";

fn default_support_href() -> Option<String> {
    Some(DEFAULT_SUPPORT_HREF.to_owned())
}

fn default_blog_href() -> Option<String> {
    Some(DEFAULT_BLOG_HREF.to_owned())
}

/// Wires the live router and, in a browser, the window into a navigator.
fn build_navigator(
    on_section_navigate: Option<Callback<String>>,
    on_cta_click: Option<Callback<()>>,
) -> SectionNavigator {
    let navigate = use_navigate();
    let router = move |path: &str| -> anyhow::Result<()> {
        navigate(path, Default::default());
        Ok(())
    };

    let on_section = on_section_navigate
        .map(|cb| Rc::new(move |id: &str| cb.run(id.to_owned())) as SectionOverride);
    let on_cta = on_cta_click.map(|cb| Rc::new(move || cb.run(())) as CtaOverride);

    let location = use_location();
    let read_location = move || {
        Location::from_parts(
            location.pathname.get_untracked(),
            location.hash.get_untracked(),
            location.search.get_untracked(),
        )
    };

    let nav = SectionNavigator::new(Rc::new(router), Rc::new(read_location))
        .with_section_override(on_section)
        .with_cta_override(on_cta);

    #[cfg(feature = "web")]
    {
        if let Some(window) = crate::nav::browser::BrowserWindow::current() {
            let window = Rc::new(window);
            return nav
                .with_scroller(window.clone())
                .with_history(window.clone())
                .with_assigner(window);
        }
    }

    nav
}

#[component]
pub fn Header(
    #[prop(default = default_sections())] sections: Vec<Section>,
    /// `None` hides the link.
    #[prop(default = default_support_href())]
    support_href: Option<String>,
    #[prop(into, default = "Support".to_owned())] support_label: String,
    /// `None` hides the link.
    #[prop(default = default_blog_href())]
    blog_href: Option<String>,
    #[prop(into, default = "Blog".to_owned())] blog_label: String,
    #[prop(into, default = "Sign Up For Updates".to_owned())] cta_label: String,
    /// Replaces the built-in scroll/route policy for section links.
    #[prop(optional, into)]
    on_section_navigate: Option<Callback<String>>,
    /// Replaces the call-to-action behavior only.
    #[prop(optional, into)]
    on_cta_click: Option<Callback<()>>,
    /// Omitting this renders the packaged logo; a value that resolves to no
    /// path renders no logo at all.
    #[prop(optional, into)]
    logo_src: Option<LogoSource>,
    #[prop(into, default = "IMHCloud Logo".to_owned())] logo_alt_text: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] container_class: Option<String>,
    #[prop(optional, into)] nav_link_class: Option<String>,
) -> impl IntoView {
    let nav = StoredValue::new_local(build_navigator(on_section_navigate, on_cta_click));
    let menu = RwSignal::new(MenuState::Closed);

    // any route change (including hash-only) shuts the drawer
    let location = use_location();
    Effect::new(move |prev: Option<Location>| {
        let next = Location::from_parts(
            location.pathname.get(),
            location.hash.get(),
            location.search.get(),
        );
        close_on_location_change(&menu, prev.as_ref(), next)
    });

    let logo_src = logo_src.unwrap_or_default();
    let logo = resolve_logo_src(Some(&logo_src))
        .map(str::to_owned)
        .map(|src| {
            view! {
                <a href="/" aria-label="Return to homepage" class=cn([FOCUS_RING, "rounded"])>
                    <img src=src alt=logo_alt_text class="h-[46px] w-auto"/>
                </a>
            }
        });

    let link_class = cn([Some(NAV_LINK_CLASS), nav_link_class.as_deref()]);
    let mobile_link_class = cn([link_class.as_str(), "w-full text-left text-base"]);
    let mobile_aux_class = cn([link_class.as_str(), "text-base"]);

    let desktop_sections = sections
        .iter()
        .cloned()
        .map(|section| {
            let aria = section.aria_label();
            let Section { id, label } = section;
            view! {
                <button
                    class=link_class.clone()
                    type="button"
                    role="link"
                    aria-label=aria
                    on:click=move |_| nav.with_value(|n| n.resolve(&id))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let mobile_sections = sections
        .into_iter()
        .map(|section| {
            let aria = section.aria_label();
            let Section { id, label } = section;
            view! {
                <button
                    class=mobile_link_class.clone()
                    type="button"
                    role="link"
                    aria-label=aria
                    on:click=move |_| nav.with_value(|n| n.resolve_from_menu(&menu, &id))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let aux_link = |href: &Option<String>, label: &str, class: &str, placement: NavPlacement| {
        href.clone().map(|href| {
            let label = label.to_owned();
            view! {
                <a
                    href=href
                    class=class.to_owned()
                    on:click=move |_| aux_link_clicked(&menu, placement)
                >
                    {label}
                </a>
            }
        })
    };

    let desktop_support = aux_link(&support_href, &support_label, &link_class, NavPlacement::Desktop);
    let desktop_blog = aux_link(&blog_href, &blog_label, &link_class, NavPlacement::Desktop);
    let mobile_support = aux_link(&support_href, &support_label, &mobile_aux_class, NavPlacement::Mobile);
    let mobile_blog = aux_link(&blog_href, &blog_label, &mobile_aux_class, NavPlacement::Mobile);

    let mobile_cta_label = cta_label.clone();

    view! {
        <header
            class=cn([Some(HEADER_CLASS), class.as_deref()])
            style="top: var(--payload-admin-bar-offset, 0px)"
        >
            <div class=cn([Some(CONTAINER_CLASS), container_class.as_deref()])>
                <div class="flex items-center">{logo}</div>

                <div class="flex items-center gap-4">
                    <button
                        aria-controls="mobile-navigation"
                        aria-expanded=move || menu.get().is_open().to_string()
                        class=cn([
                            "md:hidden inline-flex h-10 w-10 items-center justify-center rounded-md",
                            "border border-gray-200 text-gray-900 transition hover:bg-gray-100",
                            FOCUS_RING,
                        ])
                        on:click=move |_| menu.update(MenuState::toggle)
                        type="button"
                    >
                        <span class="sr-only">"Toggle navigation"</span>
                        <svg
                            aria-hidden="true"
                            class="h-5 w-5"
                            fill="none"
                            stroke="currentColor"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            viewBox="0 0 24 24"
                        >
                            <path d=move || menu.get().icon_path()/>
                        </svg>
                    </button>

                    <nav class="hidden md:flex items-center space-x-8">
                        {desktop_sections}
                        {desktop_support}
                        {desktop_blog}
                        <Button
                            variant=ButtonVariant::Primary
                            size=ButtonSize::Sm
                            on_click=move |_| nav.with_value(|n| n.cta())
                        >
                            {cta_label}
                        </Button>
                    </nav>
                </div>
            </div>

            <nav
                aria-hidden=move || (!menu.get().is_open()).to_string()
                class=move || {
                    let shown = if menu.get().is_open() { "block" } else { "hidden" };
                    cn(["md:hidden border-t border-gray-200 bg-white", shown])
                }
                id="mobile-navigation"
            >
                <div class="container mx-auto flex flex-col gap-4 px-6 py-4">
                    {mobile_sections}
                    {mobile_support}
                    {mobile_blog}
                    <Button
                        class="w-full"
                        variant=ButtonVariant::Primary
                        on_click=move |_| nav.with_value(|n| n.cta_from_menu(&menu))
                    >
                        {mobile_cta_label}
                    </Button>
                </div>
            </nav>
        </header>
    }
}
