mod about;
mod accordion;
mod cv;
mod footer;
mod gallery;
mod header;
mod homepage;
mod notes;
mod projects;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use cv::CvPage;
use footer::SiteFooter;
use header::SiteHeader;
use homepage::HomePage;
use notes::{NotePage, NotesHome, NotesWrapper};
use projects::{ProjectPage, ProjectsPage};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/pagina-personal.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-neutral-950 text-neutral-100">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Matías Vagliviello - {title}") />

        <Router>
            <SiteHeader />
            <main class="flex flex-col flex-grow w-full">
                <Routes fallback=|| "Página no encontrada.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/proyectos") view=ProjectsPage />
                    <Route path=path!("/proyectos/:slug") view=ProjectPage />
                    <ParentRoute path=path!("/notas") view=NotesWrapper>
                        <Route path=path!("") view=NotesHome />
                        <Route path=path!(":nota") view=NotePage />
                    </ParentRoute>
                    <Route path=path!("/sobre-mi") view=AboutPage />
                    <Route path=path!("/cv") view=CvPage />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}
