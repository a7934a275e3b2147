#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use pagina_personal::app::*;

    let conf = get_configuration(None).expect("leptos configuration should be present");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    tracing::info!("escuchando en http://{}", &addr);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("should be able to bind the site address");
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server should run");
}

#[cfg(feature = "rss")]
#[tokio::main]
async fn main() {
    use pagina_personal::notes::note_meta;
    use rss::{
        extension::atom::{AtomExtensionBuilder, Link},
        ChannelBuilder, GuidBuilder, ItemBuilder,
    };
    use std::fs::File;

    let notas = note_meta(String::new())
        .await
        .expect("should be able to read the notes");
    let items = notas
        .into_iter()
        .map(|n| {
            let link = format!("https://matiasvagli.dev/notas/{}", n.name);
            let guid = GuidBuilder::default().value(&link).permalink(true).build();
            ItemBuilder::default()
                .title(n.title)
                .description(n.summary)
                .pub_date(n.date.to_rfc2822())
                .link(link)
                .guid(guid)
                .build()
        })
        .collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href("https://matiasvagli.dev/rss.xml");
    atom_link.set_mime_type("application/rss+xml".to_string());

    let channel = ChannelBuilder::default()
        .title("Notas Técnicas – Matías Vagliviello")
        .description("Artículos sobre desarrollo backend, mejores prácticas y soluciones técnicas aplicadas en proyectos reales.")
        .link("https://matiasvagli.dev/notas")
        .language("es-ar".to_string())
        .ttl("60".to_string())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build();

    let file = File::create("public/rss.xml").expect("should be able to create the feed file");
    channel
        .pretty_write_to(file, b' ', 2)
        .expect("should be able to write the feed");
}

#[cfg(not(any(feature = "ssr", feature = "rss")))]
pub fn main() {
    // no client-side main function; see lib.rs for the hydration entry point
}
