use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::content::PROFILE;

const TECH_GROUPS: &[(&str, &[&str])] = &[
    ("Lenguajes", &["Python", "JavaScript"]),
    ("Backend", &["Django", "Django REST", "FastAPI"]),
    ("Bases de Datos", &["PostgreSQL", "MySQL", "SQLite", "SQL"]),
    ("DevOps", &["Docker", "Docker Compose", "Nginx"]),
    ("Frontend", &["React", "Next.js", "TailwindCSS"]),
    ("Herramientas", &["Git", "GitHub", "VS Code", "Linux"]),
];

struct Experience {
    title: &'static str,
    summary: &'static str,
    stack: &'static str,
    points: &'static [&'static str],
}

const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Desarrollador Backend – Sistema de Control de Ventas (2024)",
        summary: "Diseño y desarrollo backend para sistema completo de gestión comercial: \
                  ventas, clientes, inventario, caja, estadísticas y usuarios.",
        stack: "Python, Django, PostgreSQL, Docker",
        points: &[
            "Modelado de base de datos relacional y lógica de negocio",
            "Implementación de autenticación y autorización",
            "Generación de reportes y comprobantes",
            "API REST para uso interno y aplicación móvil",
            "Contenedores con Docker y despliegue productivo",
        ],
    },
    Experience {
        title: "Desarrollador Full Stack – Coruja Casas Serranas (2025)",
        summary: "Sitio web profesional para alquiler turístico con sistema de reservas y \
                  consultas.",
        stack: "Next.js, React, TailwindCSS, Django REST",
        points: &[
            "Desarrollo frontend moderno responsive",
            "Integración de backend y formularios funcionales",
            "SEO técnico para posicionamiento en Google",
            "Optimización de tiempos de carga",
        ],
    },
    Experience {
        title: "Automatización Python – Bot de Trading (2023)",
        summary: "Automatización de ejecución de órdenes para exchange mediante API en Python.",
        stack: "Python, REST APIs",
        points: &[
            "Integración con API de exchange",
            "Manejo y lectura de datos en tiempo real",
            "Control de riesgo y ejecución segura",
        ],
    },
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="Sobre mí" />
        <div class="mx-auto max-w-4xl w-full px-4 py-8">
            <nav class="mb-8">
                <A
                    href="/"
                    attr:class="text-sm text-neutral-400 hover:text-neutral-200 transition-colors"
                >
                    "← Volver al inicio"
                </A>
            </nav>

            <header class="mb-12 text-center">
                <h1 class="text-4xl md:text-5xl font-bold tracking-tight mb-4">{PROFILE.name}</h1>
                <p class="text-xl text-neutral-300 max-w-2xl mx-auto">
                    "Backend Developer – Python & SQL"
                </p>
                <p class="text-lg text-neutral-400 mt-2">{PROFILE.location}</p>
            </header>

            <div class="text-center mb-12">
                <A
                    href="/cv"
                    attr:class="inline-flex items-center gap-2 bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg font-medium transition-colors"
                >
                    "⬇ Descargar CV en PDF"
                </A>
            </div>

            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-6">"Información Personal"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    <div class="space-y-4">
                        <div class="flex items-center gap-3">
                            <span class="text-blue-400">"📧"</span>
                            <span>{PROFILE.email}</span>
                        </div>
                        <div class="flex items-center gap-3">
                            <span class="text-blue-400">"📞"</span>
                            <span>{PROFILE.phone}</span>
                        </div>
                        <div class="flex items-center gap-3">
                            <span class="text-blue-400">"📍"</span>
                            <span>{PROFILE.location}</span>
                        </div>
                    </div>
                    <div class="space-y-4">
                        <div class="flex items-center gap-3">
                            <i class="devicon-github-plain text-blue-400"></i>
                            <a href=PROFILE.github class="hover:underline">
                                "github.com/matiasvagli"
                            </a>
                        </div>
                        <div class="flex items-center gap-3">
                            <i class="devicon-linkedin-plain text-blue-400"></i>
                            <a href=PROFILE.linkedin class="hover:underline">
                                "LinkedIn"
                            </a>
                        </div>
                        <div class="flex items-center gap-3">
                            <span class="text-blue-400">"📅"</span>
                            <span>"Disponible para proyectos"</span>
                        </div>
                    </div>
                </div>
            </section>

            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-6">"Perfil Profesional"</h2>
                <div class="prose prose-invert max-w-none">
                    <p class="text-lg leading-relaxed">
                        "Desarrollador Backend con experiencia progresiva desde "
                        <strong>"2020"</strong>
                        " en Python y bases de datos. Me especializo en el desarrollo de APIs, automatización de procesos, integración de servicios y diseño de sistemas backend orientados al negocio."
                    </p>
                    <p class="text-lg leading-relaxed">
                        "Trabajo con " <strong>"Django"</strong> ", " <strong>"FastAPI"</strong>
                        " y " <strong>"PostgreSQL"</strong>
                        ", priorizando calidad, escalabilidad y buenas prácticas. Experiencia real trabajando con PyMEs y proyectos freelance."
                    </p>
                </div>
            </section>

            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-6">"Experiencia Freelance"</h2>
                <div class="space-y-6">
                    {EXPERIENCE
                        .iter()
                        .map(|exp| {
                            view! {
                                <div class="border border-white/10 rounded-lg p-6 bg-white/[0.02]">
                                    <h3 class="text-xl font-semibold mb-2">{exp.title}</h3>
                                    <p class="text-neutral-300 mb-3">{exp.summary}</p>
                                    <p class="text-sm text-blue-400 mb-3">
                                        <strong>"Tecnologías: "</strong>
                                        {exp.stack}
                                    </p>
                                    <ul class="list-disc list-inside space-y-1 text-neutral-300 ml-4">
                                        {exp
                                            .points
                                            .iter()
                                            .map(|point| view! { <li>{*point}</li> })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-6">"Tecnologías"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {TECH_GROUPS
                        .iter()
                        .map(|(group, skills)| {
                            view! {
                                <div>
                                    <h3 class="text-lg font-semibold mb-3 text-blue-400">
                                        {*group}
                                    </h3>
                                    <div class="flex flex-wrap gap-2">
                                        {skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <span class="px-3 py-1 bg-white/5 border border-white/10 rounded-full text-sm">
                                                        {*skill}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-6">"Educación y Formación"</h2>
                <div class="space-y-4">
                    <div class="border border-white/10 rounded-lg p-4 bg-white/[0.02]">
                        <h3 class="text-lg font-semibold mb-1">
                            "SQL Avanzado y Optimización de Consultas"
                        </h3>
                        <p class="text-neutral-400 text-sm">"Udemy (2025)"</p>
                    </div>
                    <div class="border border-white/10 rounded-lg p-4 bg-white/[0.02]">
                        <h3 class="text-lg font-semibold mb-1">
                            "Docker y DevOps para Desarrollo Backend"
                        </h3>
                        <p class="text-neutral-400 text-sm">"Udemy (2024)"</p>
                    </div>
                    <div class="border border-white/10 rounded-lg p-4 bg-white/[0.02]">
                        <h3 class="text-lg font-semibold mb-1">
                            "Python Backend Profesional (Django / FastAPI)"
                        </h3>
                        <p class="text-neutral-400 text-sm">"CoderHouse (2023)"</p>
                    </div>
                    <div class="border border-white/10 rounded-lg p-4 bg-white/[0.02]">
                        <h3 class="text-lg font-semibold mb-1">
                            "Capacitación continua en arquitectura de software y bases de datos"
                        </h3>
                    </div>
                </div>
            </section>

            <section class="mb-12">
                <h2 class="text-2xl font-bold mb-6">"Idiomas"</h2>
                <div class="space-y-2">
                    <p class="text-neutral-300">"• Español (nativo)"</p>
                    <p class="text-neutral-300">"• Inglés (intermedio técnico)"</p>
                </div>
            </section>

            <section class="text-center">
                <h2 class="text-2xl font-bold mb-6">"¿Trabajamos juntos?"</h2>
                <p class="text-lg text-neutral-300 mb-6">
                    "Si tenés un proyecto en mente o necesitás un desarrollador backend, no dudes en contactarme."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href=format!("mailto:{}", PROFILE.email)
                        class="inline-flex items-center justify-center gap-2 bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg font-medium transition-colors"
                    >
                        "📧 Enviar email"
                    </a>
                    <a
                        href=format!("https://wa.me/{}", PROFILE.whatsapp)
                        target="_blank"
                        rel="noreferrer"
                        class="inline-flex items-center justify-center gap-2 bg-green-600 hover:bg-green-700 text-white px-6 py-3 rounded-lg font-medium transition-colors"
                    >
                        "💬 WhatsApp"
                    </a>
                </div>
            </section>
        </div>
    }
}
