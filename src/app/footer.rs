use leptos::prelude::*;

use crate::content::PROFILE;

// Stamped by build.rs; the copyright year comes from here so the server and
// the hydrated client render the same footer.
const BUILD_TIME: &str = env!("BUILD_TIME");

/// Closing call-to-action reused by several pages.
#[component]
pub fn ContactBanner(#[prop(optional, into)] heading: Option<&'static str>) -> impl IntoView {
    let heading = heading.unwrap_or("¿Trabajamos en tu próximo proyecto?");
    view! {
        <section id="contacto" class="mx-auto max-w-6xl w-full px-4 py-12 border-t border-white/10">
            <div class="rounded-3xl border border-white/10 p-6 md:p-8 bg-gradient-to-br from-white/[0.04] to-transparent">
                <div class="flex flex-col md:flex-row items-start md:items-center justify-between gap-6">
                    <div>
                        <h2 class="text-2xl md:text-3xl font-semibold tracking-tight">{heading}</h2>
                        <p class="mt-2 text-neutral-300">
                            "Consultas, presupuestos y colaboraciones. Respondo rápido."
                        </p>
                    </div>
                    <div class="flex flex-wrap gap-3">
                        <a
                            href=format!("https://wa.me/{}", PROFILE.whatsapp)
                            target="_blank"
                            rel="noreferrer"
                            class="inline-flex items-center gap-2 rounded-2xl bg-white text-neutral-900 px-4 py-2 font-medium hover:bg-neutral-200 transition"
                        >
                            "💬 WhatsApp"
                        </a>
                        <a
                            href=format!("mailto:{}", PROFILE.email)
                            class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-4 py-2 hover:bg-white/5 transition"
                        >
                            "📧 Email"
                        </a>
                        <a
                            href=PROFILE.linkedin
                            target="_blank"
                            rel="noreferrer"
                            class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-4 py-2 hover:bg-white/5 transition"
                        >
                            "LinkedIn"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = &BUILD_TIME[..4];
    view! {
        <footer class="mx-auto max-w-6xl w-full px-4 py-10 text-sm text-neutral-400">
            <div class="flex flex-wrap items-center gap-2">
                <span>{PROFILE.location}</span>
                <span class="opacity-50">"•"</span>
                <span>"© " {year} " " {PROFILE.name} ". Hecho con Rust + Leptos."</span>
            </div>
        </footer>
    }
}
