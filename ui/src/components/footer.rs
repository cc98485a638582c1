use leptos::children::ViewFn;
use leptos::prelude::*;

use crate::utils::cn;

pub const DEFAULT_TITLE: &str = "InMotion Cloud";
pub const DEFAULT_TAGLINE: &str = "The AI First Managed Cloud Platform";
pub const DEFAULT_COPYRIGHT: &str = "© 2025 InMotion Cloud. All Rights Reserved.";

const LINK_CLASS: &str = "underline hover:text-primary-foreground/80";

pub const LEGAL_LINKS: [(&str, &str); 3] = [
    (
        "Universal Terms of Service",
        "https://www.inmotionhosting.com/legal/universal-terms-of-service/",
    ),
    ("Privacy Policy", "https://www.inmotionhosting.com/legal/privacy-policy/"),
    ("Cookie Policy", "https://www.inmotionhosting.com/legal/cookie-policy/"),
];

fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

#[component]
fn DefaultLegalNotice() -> impl IntoView {
    let links = LEGAL_LINKS
        .iter()
        .map(|(label, href)| {
            view! {
                <a href=*href class=LINK_CLASS>{*label}</a>
                ", "
            }
        })
        .collect_view();

    view! {
        "By continuing to visit any webpage within this website, each visitor agrees to the use \
         of cookies and tracking technologies, and further agrees to abide by our "
        {links}
        "and any other terms and policies posted on this website. "
        <button
            type="button"
            class=cn([
                "ot-sdk-show-settings cookie-setting-link",
                LINK_CLASS,
                "focus-visible:outline-none focus-visible:ring-2",
                "focus-visible:ring-primary-foreground focus-visible:ring-offset-2",
                "focus-visible:ring-offset-primary rounded",
            ])
            aria-label="Manage cookie preferences"
        >
            "Cookie Settings"
        </button>
    }
}

#[component]
pub fn Footer(
    /// Blank or `None` omits the block, same for `tagline` and `copyright`.
    #[prop(default = Some(DEFAULT_TITLE.to_owned()))]
    title: Option<String>,
    #[prop(default = Some(DEFAULT_TAGLINE.to_owned()))] tagline: Option<String>,
    #[prop(default = Some(DEFAULT_COPYRIGHT.to_owned()))] copyright: Option<String>,
    /// Replaces the cookie/terms notice.
    #[prop(optional)]
    legal_notice: Option<ViewFn>,
    #[prop(default = true)] show_legal_notice: bool,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] container_class: Option<String>,
) -> impl IntoView {
    let title = non_blank(title).map(|t| view! { <div class="text-2xl font-bold mb-4">{t}</div> });
    let tagline = non_blank(tagline)
        .map(|t| view! { <div class="text-sm text-primary-foreground/80 mb-2">{t}</div> });
    let copyright = non_blank(copyright)
        .map(|t| view! { <div class="text-xs text-primary-foreground/60">{t}</div> });

    let legal = show_legal_notice.then(|| {
        let notice = match legal_notice {
            Some(f) => f.run(),
            None => view! { <DefaultLegalNotice/> }.into_any(),
        };
        view! {
            <div class="text-xs text-primary-foreground/60 mt-4 max-w-4xl mx-auto leading-relaxed">
                {notice}
            </div>
        }
    });

    view! {
        <footer class=cn([Some("py-12 bg-primary text-primary-foreground"), class.as_deref()])>
            <div class=cn([Some("container mx-auto px-6"), container_class.as_deref()])>
                <div class="text-center">
                    {title}
                    {tagline}
                    {copyright}
                    {legal}
                </div>
            </div>
        </footer>
    }
}
