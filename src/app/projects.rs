use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

use super::footer::ContactBanner;
use super::gallery::ImageCarousel;
use crate::content::{project_by_slug, projects, slugify, Project};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <Title text="Proyectos" />
        <div class="mx-auto max-w-6xl w-full px-4 py-12">
            <nav class="mb-8">
                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-3 py-1.5 text-sm hover:bg-white/5 transition"
                >
                    "← Volver al inicio"
                </A>
            </nav>
            <h1 class="text-3xl md:text-4xl font-bold text-neutral-100">"Proyectos"</h1>
            <p class="mt-2 text-neutral-300 text-lg">
                "Algunos proyectos seleccionados con descripción y stack tecnológico."
            </p>
            <div class="mt-8 grid sm:grid-cols-2 md:grid-cols-3 gap-6">
                {projects().iter().map(project_card).collect_view()}
            </div>
        </div>
        <ContactBanner />
    }
}

fn project_card(p: &'static Project) -> impl IntoView {
    view! {
        <div class="rounded-3xl border border-white/10 p-5 bg-white/[0.02] hover:bg-white/[0.04] transition">
            <h3 class="font-semibold text-lg text-neutral-100">{p.title}</h3>
            <p class="mt-2 text-neutral-300 text-sm">{p.summary}</p>
            {p
                .outcome
                .map(|o| {
                    view! { <p class="mt-2 text-xs text-neutral-400">"Impacto: " {o}</p> }
                })}
            <div class="mt-3 flex flex-wrap gap-2">
                {p
                    .stack
                    .iter()
                    .map(|s| {
                        view! {
                            <span class="text-xs rounded-full bg-white/5 border border-white/10 px-2 py-1">
                                {*s}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-4">
                <A
                    href=format!("/proyectos/{}", slugify(p.title))
                    attr:class="inline-flex items-center gap-2 text-sm underline hover:opacity-80"
                >
                    "Ver detalles →"
                </A>
            </div>
        </div>
    }
}

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let project = move || {
        params
            .get()
            .get("slug")
            .as_deref()
            .and_then(project_by_slug)
    };

    view! {
        <Title text="Proyecto" />
        <div class="mx-auto max-w-4xl w-full px-4 py-12">
            <nav class="mb-8">
                <A
                    href="/proyectos"
                    attr:class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-3 py-1.5 text-sm hover:bg-white/5 transition"
                >
                    "← Volver a proyectos"
                </A>
            </nav>
            {move || match project() {
                Some(p) => project_detail(p).into_any(),
                None => {
                    view! {
                        <p class="text-neutral-400">"Proyecto no encontrado."</p>
                    }
                        .into_any()
                }
            }}
        </div>
        <ContactBanner heading="¿Construimos tu próximo proyecto?" />
    }
}

fn project_detail(p: &'static Project) -> impl IntoView {
    view! {
        <h1 class="text-3xl md:text-4xl font-bold text-neutral-100">{p.title}</h1>
        <p class="mt-4 text-neutral-300 text-lg">{p.summary}</p>

        {(!p.images.is_empty())
            .then(|| {
                view! {
                    <div class="mt-8">
                        <h3 class="font-medium text-xl text-neutral-200 mb-4">
                            "Capturas del proyecto"
                        </h3>
                        <ImageCarousel
                            images=p.images.iter().map(|i| i.to_string()).collect::<Vec<_>>()
                            alt=p.title.to_string()
                            size=p.gallery_size
                        />
                    </div>
                }
            })}

        {p
            .details
            .map(|details| {
                view! {
                    <div class="mt-8">
                        <h3 class="font-medium text-xl text-neutral-200 mb-4">
                            "Detalles del proyecto"
                        </h3>
                        <div
                            class="prose prose-invert max-w-none text-neutral-300"
                            inner_html=details
                        ></div>
                    </div>
                }
            })}

        {p
            .outcome
            .map(|outcome| {
                view! {
                    <div class="mt-6 rounded-2xl border border-white/10 bg-white/[0.02] p-4">
                        <h3 class="font-medium text-neutral-200">"Impacto del proyecto"</h3>
                        <p class="mt-2 text-neutral-400">{outcome}</p>
                    </div>
                }
            })}

        <div class="mt-8">
            <h3 class="font-medium text-xl text-neutral-200">"Stack tecnológico"</h3>
            <div class="mt-3 flex flex-wrap gap-2">
                {p
                    .stack
                    .iter()
                    .map(|s| {
                        view! {
                            <span class="text-sm rounded-full bg-white/5 border border-white/10 px-3 py-1.5">
                                {*s}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>

        <div class="mt-8">
            <h3 class="font-medium text-xl text-neutral-200 mb-4">"Enlaces del proyecto"</h3>
            <div class="flex flex-wrap gap-3">
                {p
                    .links
                    .demo
                    .map(|demo| {
                        view! {
                            <a
                                href=demo
                                target="_blank"
                                rel="noreferrer"
                                class="inline-flex items-center gap-2 rounded-2xl bg-white text-neutral-900 px-4 py-2 font-medium hover:bg-neutral-200 transition"
                            >
                                "🌐 Ver demo"
                            </a>
                        }
                    })}
                {p
                    .links
                    .repo
                    .map(|repo| {
                        view! {
                            <a
                                href=repo
                                target="_blank"
                                rel="noreferrer"
                                class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-4 py-2 hover:bg-white/5 transition"
                            >
                                "Ver código"
                            </a>
                        }
                    })}
                {p
                    .links
                    .case_note
                    .map(|case_note| {
                        view! {
                            <div class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-4 py-2 bg-white/[0.02]">
                                <span class="text-sm text-neutral-400">{case_note}</span>
                            </div>
                        }
                    })}
            </div>
        </div>
    }
}
