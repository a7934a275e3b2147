use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::*};

#[cfg(feature = "ssr")]
use crate::notes::{note, note_meta, note_tags};
use crate::notes::{Note, NoteError, NoteMeta, META_CACHE, NOTE_CACHE};

#[component]
pub fn NotesWrapper() -> impl IntoView {
    let clicked = ArcTrigger::new();
    provide_context(clicked.clone());
    view! {
        <Title text="Notas Técnicas" />
        <div class="mx-auto max-w-6xl w-full px-4 py-8">
            <div class="mb-12">
                <h1 class="text-3xl md:text-4xl font-bold tracking-tight mb-4">
                    <a
                        href="/notas"
                        on:click=move |_| clicked.notify()
                        class="hover:text-neutral-300 transition-colors"
                    >
                        "Notas Técnicas"
                    </a>
                    <a
                        href="/rss.xml"
                        target="_blank"
                        class="relative top-1 ml-4 text-sm text-orange-400 hover:text-orange-300 transition-colors"
                        aria-label="Feed RSS"
                    >
                        "RSS"
                    </a>
                </h1>
                <p class="text-lg text-neutral-300 max-w-2xl">
                    "Artículos sobre desarrollo backend, mejores prácticas y soluciones técnicas aplicadas en proyectos reales."
                </p>
            </div>
            <Outlet />
        </div>
    }
}

#[server(input = GetUrl)]
pub async fn note_meta_server(tag: String) -> Result<Vec<NoteMeta>, ServerFnError> {
    note_meta(tag)
        .await
        .ok_or_else(|| ServerFnError::new(NoteError::Parse.to_string()))
}

#[server(input = GetUrl)]
pub async fn note_tags_server() -> Result<Vec<String>, ServerFnError> {
    note_tags()
        .await
        .ok_or_else(|| ServerFnError::new(NoteError::Parse.to_string()))
}

#[server(input = GetUrl)]
pub async fn note_server(name: String) -> Result<Note, ServerFnError> {
    let name = format!("{name}.md");
    note(name)
        .await
        .ok_or_else(|| ServerFnError::new(NoteError::NotFound.to_string()))
}

/// Cached metadata fetch shared by the index and the homepage teaser.
fn note_meta_resource(tag: impl Fn() -> String + Send + Sync + 'static) -> Resource<Vec<NoteMeta>> {
    Resource::new(tag, move |tag| async move {
        let cache = &*META_CACHE;
        if let Some(metas) = cache.get(&tag) {
            return (*metas).clone();
        }
        let metas = note_meta_server(tag.clone()).await.unwrap_or_default();
        // only fill the cache from resources on the browser; the server
        // variant populates its own cache inside note_meta
        #[cfg(feature = "hydrate")]
        cache.insert(tag, metas.clone());
        metas
    })
}

#[component]
pub fn NotesHome() -> impl IntoView {
    let (tag, set_tag) = signal(String::new());
    let notas = note_meta_resource(move || tag.get());
    let tags = Resource::new(|| (), move |_| async move {
        note_tags_server().await.unwrap_or_default()
    });

    // clicking the wrapper heading resets the active filter
    let header_clicked = expect_context::<ArcTrigger>();
    Effect::watch(
        move || header_clicked.track(),
        move |_, _, _| set_tag(String::new()),
        false,
    );

    view! {
        <div class="mb-6 flex flex-wrap items-center gap-2">
            <span class="font-medium text-neutral-400 whitespace-nowrap">"Filtrar por tema:"</span>
            <button
                class=move || chip_class(tag.with(|t| t.is_empty()))
                on:click=move |_| set_tag(String::new())
            >
                "Todas"
            </button>
            <Suspense>
                {move || Suspend::new(async move {
                    let tags = tags.await;
                    tags.into_iter()
                        .map(|t| {
                            let is_active = {
                                let t = t.clone();
                                move || tag.with(|cur| *cur == t)
                            };
                            let value = t.clone();
                            view! {
                                <button
                                    class=move || chip_class(is_active())
                                    on:click=move |_| set_tag(value.clone())
                                >
                                    {t}
                                </button>
                            }
                        })
                        .collect_view()
                })}
            </Suspense>
        </div>
        <Transition fallback=move || {
            view! {
                <div class="space-y-4">
                    <div class="loading-skeleton h-8 rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-3/4"></div>
                    <div class="loading-skeleton h-8 rounded"></div>
                    <div class="loading-skeleton h-6 rounded w-2/3"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let notas = notas.await;
                if notas.is_empty() {
                    return view! {
                        <p class="text-neutral-400">"No hay notas para ese tema."</p>
                    }
                        .into_any();
                }
                view! {
                    <div class="grid md:grid-cols-2 gap-6">
                        {notas.into_iter().map(note_card).collect_view()}
                    </div>
                }
                    .into_any()
            })}
        </Transition>
    }
}

fn chip_class(active: bool) -> &'static str {
    if active {
        "text-xs rounded-full bg-white text-neutral-900 border border-white px-3 py-1 transition"
    } else {
        "text-xs rounded-full bg-white/5 border border-white/10 px-3 py-1 hover:bg-white/10 transition"
    }
}

fn note_card(nota: NoteMeta) -> impl IntoView {
    view! {
        <article class="rounded-3xl border border-white/10 p-6 bg-white/[0.02] hover:bg-white/[0.04] transition">
            <div class="text-sm text-neutral-400 mb-2">
                {nota.date.format("%d/%m/%Y").to_string()}
            </div>
            <h2 class="text-xl font-semibold mb-3">{nota.title}</h2>
            <p class="text-neutral-300 mb-4">{nota.summary}</p>
            <div class="flex flex-wrap gap-2 mb-4">
                {nota
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="text-xs rounded-full bg-white/5 border border-white/10 px-2 py-1">
                                {tag.to_string()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <A
                href=nota.name
                attr:class="inline-flex items-center gap-2 text-sm text-neutral-200 hover:text-white transition-colors"
            >
                "Leer más →"
            </A>
        </article>
    }
}

#[component]
pub fn NotePage() -> impl IntoView {
    let params = use_params_map();
    let note_name = move || params.get().get("nota").unwrap_or_default();
    let nota = Resource::new(note_name, move |name| async {
        // take ownership of name
        let name = name;
        let cache = &*NOTE_CACHE;
        if let Some(n) = cache.get(&name) {
            return (*n)
                .clone()
                .ok_or(ServerFnError::new(NoteError::NotFound.to_string()));
        }
        let nota = note_server(name.clone()).await;
        cache.insert(name, nota.clone().ok());
        nota
    });

    view! {
        <Title text="Nota" />
        <nav class="mb-8">
            <A
                href="/notas"
                attr:class="text-sm text-neutral-400 hover:text-neutral-200 transition-colors"
            >
                "← Volver a las notas"
            </A>
        </nav>
        <Suspense>
            {move || Suspend::new(async move {
                let nota = nota.await;
                match nota {
                    Ok(n) => {
                        view! {
                            <div class="max-w-4xl">
                                <header class="mb-8">
                                    <div class="text-sm text-neutral-400 mb-2">
                                        {n.meta.date.format("%d/%m/%Y").to_string()}
                                    </div>
                                    <h1 class="text-3xl md:text-4xl font-bold tracking-tight mb-4">
                                        {n.meta.title}
                                    </h1>
                                    <p class="text-lg text-neutral-300 mb-6">{n.meta.summary}</p>
                                    <div class="flex flex-wrap gap-2">
                                        {n
                                            .meta
                                            .tags
                                            .into_iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="text-sm rounded-full bg-white/5 border border-white/10 px-3 py-1">
                                                        {tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </header>
                                <article class="prose prose-invert prose-lg max-w-none">
                                    <div inner_html=n.content></div>
                                </article>
                            </div>
                        }
                            .into_any()
                    }
                    Err(_) => {
                        view! { <p class="text-neutral-400">"Nota no encontrada."</p> }.into_any()
                    }
                }
            })}
        </Suspense>
    }
}

/// Newest two notes, shown on the homepage.
#[component]
pub fn LatestNotes() -> impl IntoView {
    let notas = note_meta_resource(String::new);

    view! {
        <Transition fallback=move || {
            view! {
                <div class="mt-6 grid md:grid-cols-2 gap-6">
                    <div class="loading-skeleton h-32 rounded-3xl"></div>
                    <div class="loading-skeleton h-32 rounded-3xl"></div>
                </div>
            }
        }>
            {move || Suspend::new(async move {
                let notas = notas.await;
                view! {
                    <div class="mt-6 grid md:grid-cols-2 gap-6">
                        {notas
                            .into_iter()
                            .take(2)
                            .map(|nota| {
                                view! {
                                    <article class="rounded-3xl border border-white/10 p-5 bg-white/[0.02] hover:bg-white/[0.04] transition">
                                        <div class="text-xs text-neutral-400">
                                            {nota.date.format("%d/%m/%Y").to_string()}
                                        </div>
                                        <h3 class="mt-1 text-lg font-medium">{nota.title}</h3>
                                        <p class="mt-2 text-neutral-300">{nota.summary}</p>
                                        <div class="mt-3 text-sm">
                                            <A
                                                href=format!("/notas/{}", nota.name)
                                                attr:class="inline-flex items-center gap-1 underline hover:opacity-80"
                                            >
                                                "Leer más →"
                                            </A>
                                        </div>
                                    </article>
                                }
                            })
                            .collect_view()}
                    </div>
                }
            })}
        </Transition>
    }
}
