use std::cell::Cell;

use leptos::prelude::{RwSignal, Set};

use super::Location;

/// Visibility of the mobile navigation drawer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Path of the icon drawn inside the toggle button.
    pub fn icon_path(self) -> &'static str {
        match self {
            MenuState::Open => "M6 6l12 12M6 18L18 6",
            MenuState::Closed => "M4 6h16M4 12h16M4 18h16",
        }
    }
}

/// Anything that owns a [`MenuState`] and can shut it.
pub trait MenuHandle {
    fn close_menu(&self);
}

impl MenuHandle for Cell<MenuState> {
    fn close_menu(&self) {
        self.set(MenuState::Closed);
    }
}

impl MenuHandle for RwSignal<MenuState> {
    fn close_menu(&self) {
        self.set(MenuState::Closed);
    }
}

/// Which of the header's two navs a link is rendered in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavPlacement {
    Desktop,
    Mobile,
}

/// Support/blog link click. Only the mobile drawer closes.
pub fn aux_link_clicked(menu: &impl MenuHandle, placement: NavPlacement) {
    if placement == NavPlacement::Mobile {
        menu.close_menu();
    }
}

/// Closes the menu when the router moved (pathname, hash or search) since the
/// last snapshot. Returns `next` so it can be fed back in on the next change.
pub fn close_on_location_change(
    menu: &impl MenuHandle,
    prev: Option<&Location>,
    next: Location,
) -> Location {
    if prev != Some(&next) {
        menu.close_menu();
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(pathname: &str, hash: Option<&str>, search: Option<&str>) -> Location {
        Location {
            pathname: pathname.to_owned(),
            hash: hash.map(str::to_owned),
            search: search.map(str::to_owned),
        }
    }

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn double_toggle_is_identity() {
        for start in [MenuState::Open, MenuState::Closed] {
            let mut menu = start;
            menu.toggle();
            assert_ne!(menu, start);
            menu.toggle();
            assert_eq!(menu, start);
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::Open;
        menu.close();
        menu.close();
        assert_eq!(menu, MenuState::Closed);
    }

    #[test]
    fn icon_follows_state() {
        assert_ne!(MenuState::Open.icon_path(), MenuState::Closed.icon_path());
    }

    #[test]
    fn mobile_aux_link_closes_menu() {
        let menu = Cell::new(MenuState::Open);
        aux_link_clicked(&menu, NavPlacement::Mobile);
        assert_eq!(menu.get(), MenuState::Closed);
    }

    #[test]
    fn desktop_aux_link_leaves_menu_alone() {
        let menu = Cell::new(MenuState::Open);
        aux_link_clicked(&menu, NavPlacement::Desktop);
        assert_eq!(menu.get(), MenuState::Open);
    }

    #[test]
    fn any_location_part_changing_closes_menu() {
        let start = loc("/blog", None, None);
        for next in [
            loc("/support", None, None),
            loc("/blog", Some("#pricing"), None),
            loc("/blog", None, Some("?page=2")),
        ] {
            let menu = Cell::new(MenuState::Open);
            let seen = close_on_location_change(&menu, Some(&start), next.clone());
            assert_eq!(menu.get(), MenuState::Closed, "{next:?}");
            assert_eq!(seen, next);
        }
    }

    #[test]
    fn same_location_keeps_menu_open() {
        let here = loc("/blog", Some("#top"), None);
        let menu = Cell::new(MenuState::Open);
        close_on_location_change(&menu, Some(&here), here.clone());
        assert_eq!(menu.get(), MenuState::Open);
    }

    #[test]
    fn first_snapshot_closes_menu() {
        let menu = Cell::new(MenuState::Open);
        close_on_location_change(&menu, None, Location::at("/"));
        assert_eq!(menu.get(), MenuState::Closed);
    }

    #[test]
    fn signal_handle_closes_under_owner() {
        let owner = leptos::prelude::Owner::new();
        owner.with(|| {
            use leptos::prelude::GetUntracked;

            let menu = RwSignal::new(MenuState::Open);
            aux_link_clicked(&menu, NavPlacement::Mobile);
            assert_eq!(menu.get_untracked(), MenuState::Closed);

            menu.set(MenuState::Open);
            close_on_location_change(&menu, Some(&Location::at("/")), Location::at("/blog"));
            assert_eq!(menu.get_untracked(), MenuState::Closed);
        });
    }
}
