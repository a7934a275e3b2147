use leptos::prelude::*;

/// Collapsible panel. Closed at mount; the toggle button flips it and the
/// body stays in the DOM, hidden by class, so reopening is instant.
#[component]
pub fn Accordion(title: &'static str, children: Children) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="rounded-2xl border border-white/10 bg-white/[0.02]">
            <button
                class="w-full text-left px-4 py-3 flex items-center justify-between gap-3"
                aria-expanded=move || open().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <div class="font-medium text-neutral-200">{title}</div>
                <div class="text-neutral-400">{move || if open() { "−" } else { "+" }}</div>
            </button>
            <div class=move || {
                if open() { "px-4 pb-4 pt-0 text-sm text-neutral-300" } else { "hidden" }
            }>{children()}</div>
        </div>
    }
}
