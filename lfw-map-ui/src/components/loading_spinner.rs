//! Loading indicator component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = String::from("Loading data..."))]
    pub label: String,
}

/// Simple loading indicator with an optional label.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 32px; color: #6B7280; font-size: 13px;",
            "{props.label}"
        }
    }
}
