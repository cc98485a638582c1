//! Section navigation for the page header.
//!
//! The header never talks to the router or the DOM directly. Everything goes
//! through the narrow traits below so the policy in [`SectionNavigator`] can
//! run (and be tested) without a browser.

#[cfg(feature = "web")]
pub mod browser;
pub mod menu;
pub mod section;

use std::rc::Rc;

use leptos::logging::error;

pub use menu::{aux_link_clicked, close_on_location_change, MenuHandle, MenuState, NavPlacement};
pub use section::{default_sections, Section, REQUEST_ACCESS_SECTION};

/// Read-only snapshot of where the router currently is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    pub hash: Option<String>,
    pub search: Option<String>,
}

impl Location {
    pub fn at(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            ..Self::default()
        }
    }

    /// Builds a snapshot from the router's raw strings, where "" means unset.
    pub fn from_parts(pathname: String, hash: String, search: String) -> Self {
        let non_empty = |s: String| (!s.is_empty()).then_some(s);
        Self {
            pathname,
            hash: non_empty(hash),
            search: non_empty(search),
        }
    }

    pub fn is_root(&self) -> bool {
        self.pathname == "/"
    }
}

pub trait RouteNavigator {
    fn navigate(&self, path: &str) -> anyhow::Result<()>;
}

impl<F> RouteNavigator for F
where
    F: Fn(&str) -> anyhow::Result<()>,
{
    fn navigate(&self, path: &str) -> anyhow::Result<()> {
        self(path)
    }
}

pub trait LocationReader {
    fn location(&self) -> Location;
}

impl<F> LocationReader for F
where
    F: Fn() -> Location,
{
    fn location(&self) -> Location {
        self()
    }
}

pub trait DocumentScroller {
    /// Smooth-scrolls the element with `id` into view. Returns `false` when no
    /// such element exists, which callers treat as a no-op.
    fn scroll_to(&self, id: &str) -> bool;
}

pub trait HistoryUpdater {
    /// Swaps the url fragment in place, without pushing a history entry.
    fn replace_hash(&self, hash: &str);
}

pub trait LocationAssigner {
    /// Full page load at `path`.
    fn assign(&self, path: &str) -> anyhow::Result<()>;
}

/// What a call to [`SectionNavigator::resolve`] is going to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    ScrollInPlace { section_id: String, hash: String },
    RouteThenScroll { path: String },
    DelegateToCaller,
}

pub fn section_hash(section_id: &str) -> String {
    format!("#{section_id}")
}

pub fn section_path(section_id: &str) -> String {
    format!("/{}", section_hash(section_id))
}

pub type SectionOverride = Rc<dyn Fn(&str)>;
pub type CtaOverride = Rc<dyn Fn()>;

pub struct SectionNavigator {
    router: Rc<dyn RouteNavigator>,
    location: Rc<dyn LocationReader>,
    scroller: Option<Rc<dyn DocumentScroller>>,
    history: Option<Rc<dyn HistoryUpdater>>,
    assigner: Option<Rc<dyn LocationAssigner>>,
    on_section: Option<SectionOverride>,
    on_cta: Option<CtaOverride>,
}

impl SectionNavigator {
    pub fn new(router: Rc<dyn RouteNavigator>, location: Rc<dyn LocationReader>) -> Self {
        Self {
            router,
            location,
            scroller: None,
            history: None,
            assigner: None,
            on_section: None,
            on_cta: None,
        }
    }

    pub fn with_scroller(mut self, scroller: Rc<dyn DocumentScroller>) -> Self {
        self.scroller = Some(scroller);
        self
    }

    pub fn with_history(mut self, history: Rc<dyn HistoryUpdater>) -> Self {
        self.history = Some(history);
        self
    }

    pub fn with_assigner(mut self, assigner: Rc<dyn LocationAssigner>) -> Self {
        self.assigner = Some(assigner);
        self
    }

    pub fn with_section_override(mut self, f: Option<SectionOverride>) -> Self {
        self.on_section = f;
        self
    }

    pub fn with_cta_override(mut self, f: Option<CtaOverride>) -> Self {
        self.on_cta = f;
        self
    }

    pub fn intent(&self, section_id: &str) -> NavigationIntent {
        if self.on_section.is_some() {
            return NavigationIntent::DelegateToCaller;
        }

        if self.location.location().is_root() {
            NavigationIntent::ScrollInPlace {
                section_id: section_id.to_owned(),
                hash: section_hash(section_id),
            }
        } else {
            NavigationIntent::RouteThenScroll {
                path: section_path(section_id),
            }
        }
    }

    pub fn resolve(&self, section_id: &str) {
        match self.intent(section_id) {
            NavigationIntent::DelegateToCaller => {
                if let Some(f) = &self.on_section {
                    f(section_id);
                }
            }
            NavigationIntent::ScrollInPlace { section_id, hash } => {
                // absent element is a no-op
                if !section_id.is_empty() {
                    if let Some(scroller) = &self.scroller {
                        scroller.scroll_to(&section_id);
                    }
                }
                if let Some(history) = &self.history {
                    history.replace_hash(&hash);
                }
            }
            NavigationIntent::RouteThenScroll { path } => {
                // router errors are never surfaced
                if self.router.navigate(&path).is_err() {
                    self.assign_fallback(&path);
                }
            }
        }
    }

    /// Call-to-action click. Goes through the section policy with the
    /// reserved `request-access` id unless a dedicated handler was given.
    pub fn cta(&self) {
        match &self.on_cta {
            Some(f) => f(),
            None => self.resolve(REQUEST_ACCESS_SECTION),
        }
    }

    /// Same as [`resolve`](Self::resolve), closing the mobile menu first.
    pub fn resolve_from_menu(&self, menu: &impl MenuHandle, section_id: &str) {
        menu.close_menu();
        self.resolve(section_id);
    }

    pub fn cta_from_menu(&self, menu: &impl MenuHandle) {
        menu.close_menu();
        self.cta();
    }

    fn assign_fallback(&self, path: &str) {
        let Some(assigner) = &self.assigner else {
            return;
        };
        if let Err(e) = assigner.assign(path) {
            error!("full page navigation to {path} failed: {e:#}");
        }
    }
}
