//! Technical notes ("notas técnicas"): embedded markdown with YAML front
//! matter, rendered to HTML on the server and cached on both sides.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};
#[cfg(any(feature = "ssr", feature = "rss"))]
use pulldown_cmark::{Options, Parser};

#[cfg(any(feature = "ssr", feature = "rss"))]
use crate::highlight::highlight;

/// Rendered notes by file name. Populated lazily per note.
pub static NOTE_CACHE: LazyLock<DashMap<String, Option<Note>>> = LazyLock::new(DashMap::new);
/// Metadata lists by tag filter ("" = all). The tag set is closed, so every
/// key can be cached safely.
pub static META_CACHE: LazyLock<DashMap<String, Vec<NoteMeta>>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "notas"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(any(feature = "ssr", feature = "rss"))]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    summary: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteMeta {
    /// File stem, which is also the route segment under `/notas/`.
    pub name: String,
    pub title: String,
    pub summary: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub meta: NoteMeta,
    /// Markdown body rendered to HTML, code blocks already highlighted.
    pub content: String,
}

#[derive(Error, Debug, Clone)]
pub enum NoteError {
    #[error("nota no encontrada")]
    NotFound,
    #[error("no se pudieron leer las notas")]
    Parse,
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn parse_meta(matter: &Matter<YAML>, name: &str, content: &str) -> Option<NoteMeta> {
    let fm = matter.parse_with_struct::<FrontMatter>(content)?;
    Some(NoteMeta {
        name: name.trim_end_matches(".md").to_string(),
        title: fm.data.title,
        summary: fm.data.summary,
        date: fm.data.date,
        tags: fm.data.tags,
    })
}

/// Metadata for every note carrying `tag`, newest first. An empty tag
/// selects the whole set. Returns `None` only when a note fails to parse.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn note_meta(tag: String) -> Option<Vec<NoteMeta>> {
    let cache = &*META_CACHE;
    if let Some(cached) = cache.get(&tag) {
        return Some(cached.clone());
    }

    let matter = Matter::<YAML>::new();
    let mut metas = Assets::iter()
        .map(|name| {
            let file = Assets::get(&name).expect("embedded note should be readable");
            let content = String::from_utf8(file.data.into()).ok()?;
            parse_meta(&matter, &name, &content)
        })
        .collect::<Option<Vec<NoteMeta>>>()?;
    metas.sort_by(|a, b| b.date.cmp(&a.date));
    if !tag.is_empty() {
        metas.retain(|m| m.tags.iter().any(|t| t == &tag));
    }

    cache.insert(tag, metas.clone());
    Some(metas)
}

/// Every tag used by at least one note, sorted and deduplicated. Drives the
/// filter chips on the notes index.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn note_tags() -> Option<Vec<String>> {
    let mut tags = note_meta(String::new())
        .await?
        .into_iter()
        .flat_map(|m| m.tags)
        .collect::<Vec<_>>();
    tags.sort();
    tags.dedup();
    Some(tags)
}

/// Load and render one note by file name (`<name>.md`).
#[cfg(any(feature = "ssr", feature = "rss"))]
pub async fn note(name: String) -> Option<Note> {
    let file = Assets::get(&name)?;

    let cache = &*NOTE_CACHE;
    cache
        .entry(name.clone())
        .or_insert_with(move || {
            let content = String::from_utf8(file.data.into()).ok()?;
            let matter = Matter::<YAML>::new();
            let meta = parse_meta(&matter, &name, &content)?;

            // Options::all() includes YAML metadata blocks, so the front
            // matter never reaches the HTML output
            let events = highlight(Parser::new_ext(&content, Options::all()));
            let mut html = String::new();
            pulldown_cmark::html::push_html(&mut html, events);

            Some(Note { meta, content: html })
        })
        .clone()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn all_notes_parse_and_sort_newest_first() {
        let metas = note_meta(String::new()).await.expect("notes should parse");
        assert!(metas.len() >= 2);
        for pair in metas.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
        for meta in &metas {
            assert!(!meta.title.is_empty());
            assert!(!meta.tags.is_empty());
            assert!(!meta.name.ends_with(".md"));
        }
    }

    #[tokio::test]
    async fn tag_filter_narrows_the_list() {
        let all = note_meta(String::new()).await.expect("notes should parse");
        let docker = note_meta("Docker".to_string())
            .await
            .expect("notes should parse");
        assert!(!docker.is_empty());
        assert!(docker.len() < all.len());
        assert!(docker.iter().all(|m| m.tags.iter().any(|t| t == "Docker")));

        let none = note_meta("NoSuchTag".to_string())
            .await
            .expect("notes should parse");
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn tags_are_sorted_and_unique() {
        let tags = note_tags().await.expect("notes should parse");
        let mut expected = tags.clone();
        expected.sort();
        expected.dedup();
        assert_eq!(tags, expected);
        assert!(tags.iter().any(|t| t == "Django"));
    }

    #[tokio::test]
    async fn note_renders_html_without_front_matter() {
        let metas = note_meta(String::new()).await.expect("notes should parse");
        let name = format!("{}.md", metas[0].name);
        let note = note(name).await.expect("known note should render");
        assert_eq!(note.meta.title, metas[0].title);
        assert!(note.content.contains("<h2"));
        assert!(!note.content.contains("title:"));
    }

    #[tokio::test]
    async fn missing_note_is_none() {
        assert!(note("no-existe.md".to_string()).await.is_none());
    }
}
