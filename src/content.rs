//! Static site content: the author profile and the project catalog.
//!
//! Projects are plain data compiled into both the server and the WASM
//! bundle; detail pages look them up by the slug of their title, so slugs
//! must stay stable across redesigns of the title formatting.

use crate::gallery::GallerySize;

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub whatsapp: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub photo: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Matías Vagliviello",
    role: "Backend Developer",
    headline: "APIs sólidas, datos confiables y despliegues simples",
    summary: "Desarrollo y escalo backends en Python (Django/FastAPI), diseño bases de \
              datos (PostgreSQL/MySQL) y automatizo despliegues con Docker. Experiencia \
              con Pymes y proyectos reales de negocio.",
    location: "Buenos Aires, Argentina",
    email: "vaglimatias@gmail.com",
    phone: "+54 9 11 6846-5477",
    whatsapp: "5491168465477",
    linkedin: "https://www.linkedin.com/in/matias-vagliviello-07403736b/",
    github: "https://github.com/matiasvagli",
    photo: "/personal/p3.webp",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLinks {
    pub demo: Option<&'static str>,
    pub repo: Option<&'static str>,
    /// Shown instead of a link when the code cannot be published.
    pub case_note: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub summary: &'static str,
    /// Long-form body rendered with `inner_html` on the detail page.
    pub details: Option<&'static str>,
    pub stack: &'static [&'static str],
    pub outcome: Option<&'static str>,
    pub links: ProjectLinks,
    pub images: &'static [&'static str],
    pub gallery_size: GallerySize,
}

pub fn projects() -> &'static [Project] {
    PROJECTS
}

pub fn project_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| slugify(p.title) == slug)
}

/// URL slug for a project title: lowercased, Spanish accents folded to
/// ASCII, every run of non-alphanumerics collapsed to a single `-`, no
/// leading or trailing dash. "App Móvil Huevo de Oro" → "app-movil-huevo-de-oro".
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars().flat_map(char::to_lowercase) {
        let c = match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            c => c,
        };
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

static PROJECTS: &[Project] = &[
    Project {
        title: "CRUDfull – Generador modular de APIs con FastAPI",
        summary: "Mini framework CLI en Python que permite crear APIs completas en segundos \
                  con FastAPI, generando módulos, recursos CRUD, modelos, servicios, rutas, \
                  tests e infraestructura Docker. Arquitectura modular, soporte JWT y \
                  compatibilidad con PostgreSQL, MongoDB e in-memory.",
        details: Some(
            r#"<h3>Descripción</h3>
<p>Herramienta CLI desarrollada en Python que automatiza la creación de APIs con FastAPI: genera proyectos y recursos CRUD completos (módulos, modelos, esquemas, servicios, rutas, tests) e infraestructura opcional con Docker. Compatible con PostgreSQL, MongoDB y modo in-memory, con arquitectura modular y autenticación JWT. Pensada para acelerar proyectos reales manteniendo buenas prácticas (Clean Architecture y organización por capas).</p>
<h3>Características principales</h3>
<ul>
<li>Generación automática de APIs CRUD completas</li>
<li>Soporte para múltiples bases de datos (PostgreSQL, MongoDB, in-memory)</li>
<li>Autenticación JWT integrada</li>
<li>Generación de tests y dockerización automática</li>
<li>CLI intuitiva, organización por capas</li>
</ul>
<h3>Impacto</h3>
<p>Acelera el desarrollo backend, reduce errores repetitivos y estandariza la estructura de proyectos profesionales. Proyecto en evolución activa orientado a la comunidad.</p>"#,
        ),
        stack: &[
            "Python",
            "FastAPI",
            "SQLAlchemy",
            "Beanie/MongoDB",
            "PostgreSQL",
            "Pytest",
            "Docker",
            "CLI (Typer)",
            "Pydantic",
            "MkDocs",
        ],
        outcome: Some(
            "Acelera el desarrollo backend, reduce errores repetitivos y estandariza la \
             estructura de proyectos profesionales.",
        ),
        links: ProjectLinks {
            demo: None,
            repo: Some("https://github.com/matiasvagli/crudfull"),
            case_note: None,
        },
        images: &[],
        gallery_size: GallerySize::Large,
    },
    Project {
        title: "Sistema de Control de Ventas (Distribuidora Avícola)",
        summary: "Ecosistema completo de gestión empresarial desarrollado en Django + React \
                  Native para una distribuidora avícola. Sistema web con módulos de \
                  inventario, ventas, caja por turnos, finanzas y empleados, complementado \
                  con app móvil para ventas en campo, entrada de productos por QR y envío \
                  automático de tickets por WhatsApp.",
        details: Some(
            r#"<h3>Desafío del proyecto</h3>
<p>La distribuidora trabajaba con planillas dispersas, sin control en tiempo real del inventario ni de la caja, con equipos de campo y oficina descoordinados y gastos innecesarios en papel.</p>
<h3>Solución implementada</h3>
<h4>Sistema web</h4>
<ul>
<li><strong>Inventario:</strong> productos, proveedores, alertas de bajo stock y movimientos históricos por granja y categoría</li>
<li><strong>Ventas:</strong> catálogo interactivo, pedidos con múltiples medios de pago, comprobantes PDF automáticos</li>
<li><strong>Caja:</strong> administración por turnos, arqueos automáticos, registro de gastos y retiros</li>
<li><strong>Finanzas:</strong> dashboard con métricas clave, rentabilidad y reportes exportables</li>
<li><strong>Empleados:</strong> liquidaciones y comisiones automatizadas</li>
</ul>
<h4>App móvil complementaria</h4>
<ul>
<li>Ventas desde cualquier ubicación con sincronización en tiempo real</li>
<li>Entrada de productos mediante código QR</li>
<li>Tareas asignadas con alertas personalizadas</li>
</ul>
<h3>Arquitectura técnica</h3>
<ul>
<li><strong>Backend:</strong> Django con modelos relacionales optimizados y APIs REST</li>
<li><strong>Base de datos:</strong> PostgreSQL con índices estratégicos</li>
<li><strong>Móvil:</strong> React Native con sincronización bidireccional</li>
<li><strong>Infraestructura:</strong> servidor dockerizado con túnel Cloudflare para acceso externo seguro</li>
<li><strong>Integraciones:</strong> WhatsApp API para tickets y comprobantes</li>
</ul>
<h3>Impacto y resultados</h3>
<p>Digitalización completa del negocio: control financiero en tiempo real, trazabilidad de inventario y ventas, coordinación entre campo y oficina, y eliminación del papel. Sistema en producción con cliente real.</p>"#,
        ),
        stack: &[
            "Django",
            "PostgreSQL",
            "Docker",
            "React Native",
            "WhatsApp API",
            "QR Scanner",
            "HTML/Tailwind",
            "Cloudflare Tunnel",
        ],
        outcome: Some(
            "Digitalización completa del negocio, reducción de errores manuales, control \
             financiero en tiempo real y mejora en trazabilidad operativa. Sistema en \
             producción con cliente real.",
        ),
        links: ProjectLinks {
            demo: None,
            repo: None,
            case_note: Some("Código privado por ética profesional - Sistema en producción"),
        },
        images: &[
            "/proyectos/sistema/s1.png",
            "/proyectos/sistema/s2.png",
            "/proyectos/sistema/s3.png",
            "/proyectos/sistema/s4.png",
            "/proyectos/sistema/s5.png",
            "/proyectos/sistema/s6.png",
            "/proyectos/sistema/s7.png",
            "/proyectos/sistema/s8.png",
            "/proyectos/sistema/s9.png",
            "/proyectos/sistema/s10.png",
            "/proyectos/sistema/s11.png",
            "/proyectos/sistema/s12.png",
        ],
        gallery_size: GallerySize::Large,
    },
    Project {
        title: "Coruja Casas Serranas – Sitio de alquiler Vacacional",
        summary: "Plataforma web para el alquiler de cabañas en las sierras de \
                  Córdoba/Traslasierra: sitio rápido y responsive, optimizado para SEO y \
                  conversión, con fichas visuales de cada cabaña, mapas integrados y \
                  consultas conectadas a email y WhatsApp.",
        details: Some(
            r#"<h3>Desafío del proyecto</h3>
<p>Coruja necesitaba presencia digital profesional para competir en el mercado de alquileres vacacionales: mostrar las propiedades de manera atractiva y convertir visitantes en consultas reales.</p>
<h3>Solución implementada</h3>
<ul>
<li><strong>Diseño responsive</strong> para desktop, tablet y móvil</li>
<li><strong>Galería de imágenes</strong> con navegación intuitiva por cabaña</li>
<li><strong>Mapas integrados</strong> con la ubicación de cada propiedad</li>
<li><strong>Formularios de contacto</strong> conectados a email y WhatsApp</li>
<li><strong>SEO técnico</strong> y optimización de tiempos de carga</li>
</ul>
<h3>Impacto y resultados</h3>
<p>Aumento notable de consultas online frente a los canales tradicionales, mejor posicionamiento en búsquedas locales y facilidad para sumar nuevas propiedades.</p>"#,
        ),
        stack: &["Next.js", "Tailwind", "Vercel"],
        outcome: Some("Mejor visibilidad y captación de consultas."),
        links: ProjectLinks {
            demo: Some("https://corujacasasserranas.com.ar/"),
            repo: None,
            case_note: None,
        },
        images: &[
            "/proyectos/coruja/c1.png",
            "/proyectos/coruja/c2.png",
            "/proyectos/coruja/c3.png",
        ],
        gallery_size: GallerySize::Large,
    },
    Project {
        title: "App Móvil Huevo de Oro",
        summary: "Aplicación móvil profesional desarrollada con React Native + Expo para la \
                  gestión operativa de una distribuidora: ventas, inventario, despachos, \
                  empleados y tareas, con sincronización en tiempo real contra un backend \
                  Django REST y distribución por APK.",
        details: Some(
            r#"<h3>Descripción del proyecto</h3>
<p>Aplicación móvil que complementa el sistema de gestión de la distribuidora. Permite a los vendedores operar desde cualquier lugar, consultar información en tiempo real y enviar comprobantes directamente al cliente.</p>
<h3>Características principales</h3>
<ul>
<li>Login seguro con autenticación por token</li>
<li>Consulta de clientes y comprobantes desde el celular</li>
<li>Descarga de facturas y boletas en PDF</li>
<li>Envío directo por WhatsApp</li>
<li>Administración de stock en tiempo real con alertas</li>
<li>Entregas por despacho mediante QR seguras</li>
<li>Sección encargados para administrar empleados y tareas</li>
</ul>
<h3>Stack técnico</h3>
<ul>
<li><strong>Frontend móvil:</strong> React Native / Expo</li>
<li><strong>Backend:</strong> Django REST Framework</li>
<li><strong>Autenticación:</strong> Token Auth</li>
<li><strong>Base de datos:</strong> PostgreSQL</li>
</ul>"#,
        ),
        stack: &["React Native", "Django REST", "QR", "Expo", "Android APK"],
        outcome: Some(
            "Build real con EAS + Android APK para instalación. Entrega rápida y \
             mantenimiento simple.",
        ),
        links: ProjectLinks {
            demo: None,
            repo: Some("https://github.com/matiasvagli/pagina-personal"),
            case_note: None,
        },
        images: &[
            "/proyectos/appmovil/a1.png",
            "/proyectos/appmovil/a3.png",
            "/proyectos/appmovil/a4.png",
            "/proyectos/appmovil/a5.png",
            "/proyectos/appmovil/a6.png",
            "/proyectos/appmovil/a7.png",
            "/proyectos/appmovil/a8.png",
        ],
        gallery_size: GallerySize::Small,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_match_published_urls() {
        assert_eq!(
            slugify("Sistema de Control de Ventas (Distribuidora Avícola)"),
            "sistema-de-control-de-ventas-distribuidora-avicola"
        );
        assert_eq!(
            slugify("Coruja Casas Serranas – Sitio de alquiler Vacacional"),
            "coruja-casas-serranas-sitio-de-alquiler-vacacional"
        );
        assert_eq!(slugify("App Móvil Huevo de Oro"), "app-movil-huevo-de-oro");
        assert_eq!(
            slugify("CRUDfull – Generador modular de APIs con FastAPI"),
            "crudfull-generador-modular-de-apis-con-fastapi"
        );
    }

    #[test]
    fn slugify_trims_and_collapses_separators() {
        assert_eq!(slugify("  ¡Hola, Ñandú!  "), "hola-nandu");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn slugs_are_unique_across_the_catalog() {
        let mut slugs: Vec<String> = projects().iter().map(|p| slugify(p.title)).collect();
        slugs.sort();
        let len = slugs.len();
        slugs.dedup();
        assert_eq!(slugs.len(), len);
    }

    #[test]
    fn lookup_by_slug() {
        let p = project_by_slug("app-movil-huevo-de-oro").expect("known project");
        assert_eq!(p.title, "App Móvil Huevo de Oro");
        assert!(project_by_slug("no-existe").is_none());
    }

    #[test]
    fn mobile_project_uses_small_gallery() {
        let p = project_by_slug("app-movil-huevo-de-oro").expect("known project");
        assert_eq!(p.gallery_size, crate::gallery::GallerySize::Small);
    }
}
