//! Status Badge Component
//!
//! Open/closed ticket badge used in the client table and the chat header.

use leptos::*;

use crate::state::global::ClientStatus;

/// Ticket status badge
#[component]
pub fn StatusBadge(status: ClientStatus) -> impl IntoView {
    let color = if status.is_open() {
        "bg-red-600"
    } else {
        "bg-gray-600"
    };

    view! {
        <span class=format!("{} text-white text-xs px-2 py-0.5 rounded-full", color)>
            {status.label()}
        </span>
    }
}
