use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::accordion::Accordion;
use super::footer::ContactBanner;
use super::notes::LatestNotes;
use crate::content::{projects, slugify, PROFILE};

const SKILLS: &[(&str, &[&str])] = &[
    (
        "🔧 Backend",
        &["Python", "Django", "FastAPI", "REST APIs", "JWT Auth", "DRF", "WebSockets"],
    ),
    (
        "🗄️ Bases de Datos",
        &[
            "PostgreSQL",
            "MySQL/MariaDB",
            "MongoDB",
            "SQLite",
            "Modelado relacional",
            "Índices",
            "ORM",
        ],
    ),
    (
        "☁️ DevOps & Deploy",
        &[
            "Docker",
            "Docker Compose",
            "NGINX (básico)",
            "Render",
            "Vercel",
            "Cloudflare DNS",
            "SSL",
            "Linux (Ubuntu)",
        ],
    ),
    (
        "💻 Frontend",
        &["Next.js", "React", "Tailwind CSS", "TypeScript (básico)"],
    ),
    (
        "🛠️ Herramientas",
        &["Git", "GitHub", "Postman", "Insomnia", "pgAdmin", "DBeaver"],
    ),
];

const APPLIED_PRACTICES: &[(&str, &[&str])] = &[
    (
        "Manejo de entornos",
        &[".env", "variables de entorno", "settings de producción"],
    ),
    (
        "Seguridad backend",
        &["CORS", "CSRF", "Hash de passwords", "HTTPS"],
    ),
    (
        "Arquitectura",
        &[
            "Servicios REST",
            "MVC",
            "Limpieza de endpoints",
            "Serializers",
            "Dockerizar apps",
        ],
    ),
    (
        "QA",
        &[
            "Pruebas manuales",
            "documentación con README",
            "endpoints probados con Postman",
        ],
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Backend Developer" />
        <section id="inicio" class="mx-auto max-w-6xl w-full px-4 pt-12 pb-10">
            <div class="grid md:grid-cols-[1.2fr_0.8fr] gap-8 items-center">
                <div>
                    <h1 class="text-3xl md:text-5xl font-bold tracking-tight">{PROFILE.role}</h1>
                    <p class="mt-3 text-lg text-neutral-300">{PROFILE.headline}</p>
                    <p class="mt-4 text-neutral-400 max-w-2xl">{PROFILE.summary}</p>
                    <div class="mt-6 flex flex-wrap gap-3">
                        <A
                            href="/sobre-mi"
                            attr:class="inline-flex items-center gap-2 rounded-2xl bg-blue-600 text-white px-4 py-2 font-medium hover:bg-blue-700 transition"
                        >
                            "Conocé más sobre mí"
                        </A>
                        <a
                            href=format!("mailto:{}", PROFILE.email)
                            class="inline-flex items-center gap-2 rounded-2xl bg-white text-neutral-900 px-4 py-2 font-medium hover:bg-neutral-200 transition"
                        >
                            "📧 Escribime"
                        </a>
                        <a
                            href=format!("https://wa.me/{}", PROFILE.whatsapp)
                            target="_blank"
                            rel="noreferrer"
                            class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-4 py-2 hover:bg-white/5 transition"
                        >
                            "💬 WhatsApp"
                        </a>
                        <A
                            href="/proyectos"
                            attr:class="inline-flex items-center gap-2 rounded-2xl border border-white/15 px-4 py-2 hover:bg-white/5 transition"
                        >
                            "Ver proyectos →"
                        </A>
                    </div>
                    <div class="mt-4 text-sm text-neutral-400">{PROFILE.location}</div>
                </div>
                <div class="flex md:justify-end">
                    <div class="relative w-48 h-48 md:w-64 md:h-64 rounded-3xl overflow-hidden border border-white/10 shadow-2xl shadow-black/40">
                        <img
                            src=PROFILE.photo
                            alt="Foto profesional"
                            class="w-full h-full object-cover"
                        />
                        <div class="absolute inset-0 ring-1 ring-white/10"></div>
                    </div>
                </div>
            </div>

            <div class="mt-10 grid sm:grid-cols-3 gap-3">
                <Highlight
                    icon="🌐"
                    title="APIs confiables"
                    desc="Diseño endpoints limpios, versionados y documentados."
                />
                <Highlight
                    icon="🗄️"
                    title="Modelado de datos"
                    desc="Esquemas sólidos, índices y consultas optimizadas."
                />
                <Highlight
                    icon="🐳"
                    title="Docker & Deploy"
                    desc="Contenedores reproducibles y despliegues simples."
                />
            </div>
        </section>

        <section id="proyectos" class="mx-auto max-w-6xl w-full px-4 py-10 border-t border-white/10">
            <h2 class="text-2xl md:text-3xl font-semibold tracking-tight">"Proyectos destacados"</h2>
            <div class="mt-6 grid md:grid-cols-2 gap-6">
                {projects()
                    .iter()
                    .map(|p| {
                        view! {
                            <article class="rounded-3xl border border-white/10 p-5 bg-white/[0.02] hover:bg-white/[0.04] transition">
                                <h3 class="text-lg font-semibold">{p.title}</h3>
                                <p class="mt-2 text-neutral-300">{p.summary}</p>
                                {p
                                    .outcome
                                    .map(|o| {
                                        view! {
                                            <p class="mt-2 text-sm text-neutral-400">"Impacto: " {o}</p>
                                        }
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
                                <div class="mt-4 flex flex-wrap gap-3 text-sm">
                                    {p
                                        .links
                                        .demo
                                        .map(|d| {
                                            view! {
                                                <a
                                                    class="underline hover:opacity-80"
                                                    href=d
                                                    target="_blank"
                                                    rel="noreferrer"
                                                >
                                                    "Demo"
                                                </a>
                                            }
                                        })}
                                    {p
                                        .links
                                        .repo
                                        .map(|r| {
                                            view! {
                                                <a
                                                    class="underline hover:opacity-80"
                                                    href=r
                                                    target="_blank"
                                                    rel="noreferrer"
                                                >
                                                    "Repo"
                                                </a>
                                            }
                                        })}
                                    {p
                                        .links
                                        .case_note
                                        .map(|c| {
                                            view! { <span class="text-sm text-neutral-400">{c}</span> }
                                        })}
                                    <A
                                        href=format!("/proyectos/{}", slugify(p.title))
                                        attr:class="underline hover:opacity-80"
                                    >
                                        "Ver detalles"
                                    </A>
                                </div>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>

        <section id="skills" class="mx-auto max-w-6xl w-full px-4 py-10 border-t border-white/10">
            <h2 class="text-2xl md:text-3xl font-semibold tracking-tight">"Habilidades"</h2>
            <div class="mt-6 grid md:grid-cols-5 gap-6">
                {SKILLS
                    .iter()
                    .map(|(group, list)| {
                        view! {
                            <div class="rounded-3xl border border-white/10 p-5 bg-white/[0.02]">
                                <h3 class="font-medium text-neutral-200">{*group}</h3>
                                <ul class="mt-3 grid gap-1.5 text-sm text-neutral-300">
                                    {list
                                        .iter()
                                        .map(|s| view! { <li>"• " {*s}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="mt-6">
                <Accordion title="🔥 Experiencia Técnica Aplicada">
                    <div class="space-y-3">
                        {APPLIED_PRACTICES
                            .iter()
                            .map(|(title, items)| {
                                view! {
                                    <div>
                                        <div class="font-medium text-neutral-200">{*title}</div>
                                        <div class="text-sm text-neutral-400 mt-1">
                                            {items.join(" · ")}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Accordion>
            </div>
        </section>

        <section id="notas" class="mx-auto max-w-6xl w-full px-4 py-10 border-t border-white/10">
            <div class="flex items-end justify-between gap-4">
                <h2 class="text-2xl md:text-3xl font-semibold tracking-tight">"Notas técnicas"</h2>
                <A href="/notas" attr:class="text-sm underline underline-offset-4">
                    "Ver todas"
                </A>
            </div>
            <LatestNotes />
        </section>

        <ContactBanner />
    }
}

#[component]
fn Highlight(icon: &'static str, title: &'static str, desc: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-3xl border border-white/10 p-4 bg-white/[0.02]">
            <div class="flex items-center gap-2 text-neutral-200">
                <span class="inline-flex items-center justify-center w-8 h-8 rounded-xl bg-white/5 border border-white/10">
                    {icon}
                </span>
                <span class="font-medium">{title}</span>
            </div>
            <p class="mt-2 text-sm text-neutral-400">{desc}</p>
        </div>
    }
}
