use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::utils::cn;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

const BASE: &str = "inline-flex items-center justify-center gap-2 rounded-md font-medium \
    transition-colors focus-visible:outline-none focus-visible:ring-2 \
    focus-visible:ring-primary focus-visible:ring-offset-2 \
    disabled:pointer-events-none disabled:opacity-50";

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            ButtonVariant::Outline => "border border-gray-300 bg-white text-gray-900 hover:bg-gray-100",
            ButtonVariant::Ghost => "text-gray-900 hover:bg-gray-100",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "h-9 px-3 text-sm",
            ButtonSize::Md => "h-10 px-4 py-2",
            ButtonSize::Lg => "h-11 px-8 text-lg",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    cn([Some(BASE), Some(variant.class()), Some(size.class()), extra])
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional)] disabled: bool,
    #[prop(optional, into)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = button_class(variant, size, class.as_deref());

    view! {
        <button
            type=button_type
            class=class
            disabled=disabled
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_primary_medium() {
        let class = button_class(ButtonVariant::default(), ButtonSize::default(), None);
        assert!(class.contains("bg-primary"));
        assert!(class.contains("h-10"));
    }

    #[test]
    fn extra_class_is_appended_last() {
        let class = button_class(ButtonVariant::Outline, ButtonSize::Sm, Some("w-full"));
        assert!(class.starts_with("inline-flex"));
        assert!(class.ends_with("w-full"));
        assert!(class.contains("border-gray-300"));
        assert!(class.contains("h-9"));
    }

    #[test]
    fn no_stray_whitespace() {
        let class = button_class(ButtonVariant::Ghost, ButtonSize::Lg, Some("  "));
        assert!(!class.contains("  "));
        assert_eq!(class, class.trim());
    }
}
