use leptos::prelude::*;
use leptos_router::components::*;

use crate::content::PROFILE;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-neutral-950/70 border-b border-white/10">
            <nav class="mx-auto max-w-6xl px-4 py-3 flex items-center justify-between">
                <A href="/" attr:class="font-semibold tracking-tight">
                    {PROFILE.name}
                </A>
                <div class="flex items-center gap-4">
                    <A
                        href="/proyectos"
                        attr:class="text-sm text-neutral-400 hover:text-neutral-200 transition-colors"
                    >
                        "Proyectos"
                    </A>
                    <A
                        href="/notas"
                        attr:class="text-sm text-neutral-400 hover:text-neutral-200 transition-colors"
                    >
                        "Notas técnicas"
                    </A>
                    <A
                        href="/sobre-mi"
                        attr:class="text-sm text-neutral-400 hover:text-neutral-200 transition-colors"
                    >
                        "Sobre mí"
                    </A>
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-3 py-1.5 text-sm hover:bg-white/5 transition"
                    >
                        "📧 Contacto"
                    </a>
                    <a
                        href=PROFILE.linkedin
                        target="_blank"
                        rel="noreferrer"
                        aria-label="LinkedIn"
                        class="p-2 rounded-xl border border-white/15 hover:bg-white/5"
                    >
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                    <a
                        href=PROFILE.github
                        target="_blank"
                        rel="noreferrer"
                        aria-label="GitHub"
                        class="p-2 rounded-xl border border-white/15 hover:bg-white/5"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                </div>
            </nav>
        </header>
    }
}
