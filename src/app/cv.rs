use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::PROFILE;

/// Printable CV. The button triggers the browser's print dialog; saving as
/// PDF from there is the download path. Everything marked `no-print`
/// disappears from the printed page.
#[component]
pub fn CvPage() -> impl IntoView {
    view! {
        <Title text="CV" />
        <style>
            "@media print {
                body { margin: 0; background: #ffffff; }
                header, footer, .no-print { display: none !important; }
                .page-break { page-break-before: always; }
            }"
        </style>
        <div class="w-full bg-white text-black p-8">
            <div class="no-print text-center mb-8">
                <button
                    class="inline-flex items-center gap-2 bg-blue-600 hover:bg-blue-700 text-white px-6 py-3 rounded-lg font-medium transition-colors"
                    onclick="window.print()"
                >
                    "⬇ Descargar PDF"
                </button>
                <p class="text-sm text-gray-600 mt-2">
                    "Hacé clic en \"Descargar PDF\" y luego \"Imprimir\" → \"Guardar como PDF\""
                </p>
            </div>

            <div class="max-w-4xl mx-auto">
                <div class="flex items-start gap-6 mb-8">
                    <div class="w-32 h-32 rounded-lg overflow-hidden border-2 border-gray-300">
                        <img
                            src="/personal/p3.jpg"
                            alt=PROFILE.name
                            class="w-full h-full object-cover"
                        />
                    </div>
                    <div class="flex-1">
                        <h1 class="text-3xl font-bold text-gray-900 mb-2">{PROFILE.name}</h1>
                        <h2 class="text-xl text-blue-600 mb-2">
                            "Backend Developer | Python · TypeScript · AI Explorer"
                        </h2>
                        <p class="text-gray-600 mb-4">{PROFILE.location}</p>
                        <div class="grid grid-cols-2 gap-4 text-sm">
                            <div>
                                <p>
                                    <strong>"Email: "</strong>
                                    {PROFILE.email}
                                </p>
                                <p>
                                    <strong>"Teléfono: "</strong>
                                    {PROFILE.phone}
                                </p>
                            </div>
                            <div>
                                <p>
                                    <strong>"LinkedIn: "</strong>
                                    <a
                                        href=PROFILE.linkedin
                                        target="_blank"
                                        rel="noreferrer"
                                        class="text-blue-600 hover:underline"
                                    >
                                        "LinkedIn"
                                    </a>
                                </p>
                                <p>
                                    <strong>"GitHub: "</strong>
                                    <a
                                        href=PROFILE.github
                                        target="_blank"
                                        rel="noreferrer"
                                        class="text-blue-600 hover:underline"
                                    >
                                        "GitHub"
                                    </a>
                                </p>
                            </div>
                        </div>
                    </div>
                </div>

                <CvSection title="PERFIL PROFESIONAL">
                    <p class="text-gray-700 leading-relaxed">
                        "Desarrollador Backend especializado en el ecosistema Python (FastAPI, Django) y TypeScript (NestJS). Mi enfoque principal es la creación de APIs robustas y escalables bajo principios SOLID, Clean Architecture y DDD."
                    </p>
                    <p class="text-gray-700 leading-relaxed mt-4">
                        "Actualmente estoy integrando herramientas de Inteligencia Artificial (LLMs) en flujos de backend para optimizar la toma de decisiones y la experiencia de usuario. Soy el creador de "
                        <strong>"CRUDfull"</strong>
                        ", una herramienta CLI open source diseñada para estandarizar y acelerar el desarrollo de microservicios con calidad de producción."
                    </p>
                </CvSection>

                <CvSection title="EXPERIENCIA RELEVANTE">
                    <div class="mb-6">
                        <h4 class="text-lg font-semibold text-gray-900">
                            "Desarrollador Backend (Freelance)"
                        </h4>
                        <p class="text-blue-600 font-medium mb-2">"2025 – Actualidad"</p>
                        <p class="text-gray-700 font-medium mb-2">
                            "Sistema de Control de Ventas e Inventario Inteligente"
                        </p>
                        <ul class="list-disc list-inside text-gray-700 space-y-1 ml-4">
                            <li>
                                "Diseñé y desarrollé el núcleo del sistema utilizando Django y PostgreSQL."
                            </li>
                            <li>
                                <strong>"Integración de IA: "</strong>
                                "implementé un asistente con LangChain que permite consultar estadísticas de ventas y stock mediante lenguaje natural (Text-to-SQL)."
                            </li>
                            <li>
                                <strong>"Performance y seguridad: "</strong>
                                "integridad de datos aplicando el Principio de Menor Privilegio (RBAC), con usuarios de base de datos de solo lectura para el motor de IA."
                            </li>
                            <li>
                                <strong>"Arquitectura: "</strong>
                                "backend modular con separación de la lógica de negocio de las vistas y una capa de servicios que centraliza las reglas de negocio."
                            </li>
                        </ul>
                    </div>
                    <div class="mb-6">
                        <h4 class="text-lg font-semibold text-gray-900">
                            "Creador de CRUDfull (Proyecto Open Source)"
                        </h4>
                        <p class="text-blue-600 font-medium mb-2">"2025"</p>
                        <ul class="list-disc list-inside text-gray-700 space-y-1 ml-4">
                            <li>
                                "Herramienta CLI en Python que automatiza la generación de boilerplate para proyectos FastAPI (Modelos, Schemas, Repositorios, Tests y Docker)."
                            </li>
                            <li>
                                "Enfocada en la estandarización de código y la aceleración de tiempos de desarrollo para otros desarrolladores."
                            </li>
                        </ul>
                    </div>
                    <div class="mb-6">
                        <h4 class="text-lg font-semibold text-gray-900">
                            "Automatización de Trading (Proyecto Personal)"
                        </h4>
                        <p class="text-blue-600 font-medium mb-2">"2023"</p>
                        <ul class="list-disc list-inside text-gray-700 space-y-1 ml-4">
                            <li>"Bot de ejecución de órdenes mediante REST APIs."</li>
                            <li>
                                "Manejo de datos en tiempo real y gestión de errores críticos en entornos financieros."
                            </li>
                        </ul>
                    </div>
                </CvSection>

                <CvSection title="TECNOLOGÍAS">
                    <ul class="space-y-2 text-gray-700">
                        <li>
                            <strong>"Lenguajes: "</strong>
                            "Python, TypeScript, JavaScript (explorando Go y Rust)."
                        </li>
                        <li>
                            <strong>"Backend: "</strong>
                            "FastAPI, Django, NestJS, Node.js."
                        </li>
                        <li>
                            <strong>"IA & Data: "</strong>
                            "LangChain, OpenAI API, Prompt Engineering, Text-to-SQL."
                        </li>
                        <li>
                            <strong>"Bases de Datos: "</strong>
                            "PostgreSQL (modelado y permisos), MySQL, Redis (caching), SQLite."
                        </li>
                        <li>
                            <strong>"Infraestructura: "</strong>
                            "Docker, Docker Compose, Git, Linux."
                        </li>
                    </ul>
                </CvSection>

                <CvSection title="EDUCACIÓN Y FORMACIÓN">
                    <ul class="space-y-2 text-gray-700">
                        <li>"• " <strong>"Arquitectura Hexagonal"</strong> " – Codely (2025)"</li>
                        <li>"• " <strong>"SQL y Gestión de Datos"</strong> " – Udemy (2025)"</li>
                        <li>
                            "• " <strong>"Docker y DevOps para Backend"</strong> " – Udemy (2024)"
                        </li>
                        <li>
                            "• " <strong>"Python Backend Profesional"</strong>
                            " – Coderhouse (2023)"
                        </li>
                    </ul>
                </CvSection>

                <CvSection title="HABILIDADES & IDIOMAS">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div>
                            <h4 class="font-semibold text-gray-900 mb-2">"Soft Skills"</h4>
                            <p class="text-gray-700">
                                "Resolución de problemas complejos, mentalidad de arquitecto, aprendizaje autodidacta constante."
                            </p>
                        </div>
                        <div>
                            <h4 class="font-semibold text-gray-900 mb-2">"Inglés"</h4>
                            <p class="text-gray-700">
                                "Intermedio técnico (lectura de documentación y escritura técnica)."
                            </p>
                        </div>
                    </div>
                </CvSection>
            </div>
        </div>
    }
}

#[component]
fn CvSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="mb-8">
            <h3 class="text-xl font-bold text-gray-900 mb-4 border-b-2 border-blue-600 pb-2">
                {title}
            </h3>
            {children()}
        </section>
    }
}
