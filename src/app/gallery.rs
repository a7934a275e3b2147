use leptos::{
    ev::{KeyboardEvent, MouseEvent},
    prelude::*,
};
use leptos_use::{use_event_listener, use_window};

use crate::gallery::{GallerySize, GalleryState};

/// Thumbnail-strip carousel with a full-screen viewer.
///
/// Renders nothing for an empty image list. With a single image every
/// navigation affordance (arrows, dots, caption) is omitted; the image can
/// still be opened full screen.
#[component]
pub fn ImageCarousel(
    images: Vec<String>,
    alt: String,
    #[prop(optional)] size: GallerySize,
) -> impl IntoView {
    if images.is_empty() {
        return None;
    }
    let gallery = RwSignal::new(GalleryState::new(images, alt));
    let count = gallery.with_untracked(|g| g.len());

    let frame_class = match size {
        GallerySize::Small => "max-w-md mx-auto max-h-80",
        GallerySize::Medium => "max-w-lg mx-auto max-h-80",
        GallerySize::Large => "w-full max-h-96",
    };

    Some(view! {
        <div class="relative">
            <div
                class=format!(
                    "relative rounded-2xl overflow-hidden border border-white/10 bg-white/[0.02] cursor-pointer hover:opacity-90 transition-opacity {frame_class}",
                )
                on:click=move |_| gallery.update(|g| g.open_overlay())
            >
                <img
                    src=move || gallery.with(|g| g.current().map(str::to_owned))
                    alt=move || gallery.with(|g| g.current_alt())
                    class="w-full h-auto object-contain"
                />
                <Show when=move || gallery.with(|g| g.has_navigation())>
                    <div class="absolute inset-0 bg-black/20 opacity-0 hover:opacity-100 transition-opacity duration-300 flex items-center justify-between p-4">
                        <button
                            aria-label="Imagen anterior"
                            class="p-2 w-9 h-9 rounded-full bg-white/20 backdrop-blur-sm hover:bg-white/30 transition-colors text-white"
                            on:click=move |ev: MouseEvent| {
                                ev.stop_propagation();
                                gallery.update(|g| g.previous());
                            }
                        >
                            "‹"
                        </button>
                        <button
                            aria-label="Imagen siguiente"
                            class="p-2 w-9 h-9 rounded-full bg-white/20 backdrop-blur-sm hover:bg-white/30 transition-colors text-white"
                            on:click=move |ev: MouseEvent| {
                                ev.stop_propagation();
                                gallery.update(|g| g.next());
                            }
                        >
                            "›"
                        </button>
                    </div>
                </Show>
            </div>
            <Show when=move || gallery.with(|g| g.has_navigation())>
                <div class="flex justify-center mt-4 gap-2">
                    {(0..count)
                        .map(|i| {
                            view! {
                                <button
                                    aria-label=format!("Ir a la imagen {}", i + 1)
                                    class=move || {
                                        if gallery.with(|g| g.index()) == i {
                                            "w-2 h-2 rounded-full transition-colors bg-white"
                                        } else {
                                            "w-2 h-2 rounded-full transition-colors bg-white/30 hover:bg-white/50"
                                        }
                                    }
                                    on:click=move |_| gallery.update(|g| g.select(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="text-center mt-2 text-sm text-neutral-400">
                    {move || gallery.with(|g| g.position_caption())}
                </div>
            </Show>
            <Show when=move || gallery.with(|g| g.overlay_open())>
                <ImageOverlay gallery />
            </Show>
        </div>
    })
}

/// Full-screen presentation of the selected image.
///
/// Mounted only while the overlay is open. Page scrolling is suspended and a
/// window keydown listener attached for exactly as long as this component is
/// alive. Both are released through scope cleanup, so every exit path
/// (close button, backdrop click, Escape, or the host unmounting the whole
/// gallery) restores the page.
#[component]
fn ImageOverlay(gallery: RwSignal<GalleryState>) -> impl IntoView {
    let scroll_lock = StoredValue::new(None::<ScrollLock>);
    Effect::new(move |_| {
        scroll_lock.set_value(Some(ScrollLock::engage()));
    });
    on_cleanup(move || scroll_lock.set_value(None));

    let _ = use_event_listener(use_window(), leptos::ev::keydown, move |ev: KeyboardEvent| {
        match ev.key().as_str() {
            "Escape" => gallery.update(|g| g.close_overlay()),
            "ArrowLeft" => gallery.update(|g| g.previous()),
            "ArrowRight" => gallery.update(|g| g.next()),
            _ => {}
        }
    });

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/90 backdrop-blur-sm"
            on:click=move |_| gallery.update(|g| g.close_overlay())
        >
            <button
                aria-label="Cerrar"
                class="absolute top-4 right-4 z-10 p-2 rounded-full bg-white/20 backdrop-blur-sm hover:bg-white/30 transition-colors text-white"
                on:click=move |ev: MouseEvent| {
                    ev.stop_propagation();
                    gallery.update(|g| g.close_overlay());
                }
            >
                "✕"
            </button>
            <Show when=move || gallery.with(|g| g.has_navigation())>
                <button
                    aria-label="Imagen anterior"
                    class="absolute left-4 top-1/2 -translate-y-1/2 z-10 p-3 rounded-full bg-white/20 backdrop-blur-sm hover:bg-white/30 transition-colors text-white"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        gallery.update(|g| g.previous());
                    }
                >
                    "‹"
                </button>
                <button
                    aria-label="Imagen siguiente"
                    class="absolute right-4 top-1/2 -translate-y-1/2 z-10 p-3 rounded-full bg-white/20 backdrop-blur-sm hover:bg-white/30 transition-colors text-white"
                    on:click=move |ev: MouseEvent| {
                        ev.stop_propagation();
                        gallery.update(|g| g.next());
                    }
                >
                    "›"
                </button>
            </Show>
            <div
                class="relative max-w-[90vw] max-h-[90vh] p-4"
                on:click=move |ev: MouseEvent| ev.stop_propagation()
            >
                <img
                    src=move || gallery.with(|g| g.current().map(str::to_owned))
                    alt=move || gallery.with(|g| g.current_alt())
                    class="max-w-full max-h-full object-contain rounded-lg shadow-2xl"
                />
            </div>
            <Show when=move || gallery.with(|g| g.has_navigation())>
                <div class="absolute bottom-4 left-1/2 -translate-x-1/2 px-3 py-1 rounded-full bg-white/20 backdrop-blur-sm text-white text-sm">
                    {move || gallery.with(|g| g.position_caption())}
                </div>
            </Show>
        </div>
    }
}

/// Suspends page scrolling for as long as the value is alive. Whatever
/// inline `overflow` value was set before the overlay opened is restored
/// on drop.
struct ScrollLock {
    previous: Option<String>,
}

impl ScrollLock {
    fn engage() -> Self {
        let previous = document().body().map(|body| {
            let style = body.style();
            let prev = style.get_property_value("overflow").unwrap_or_default();
            let _ = style.set_property("overflow", "hidden");
            prev
        });
        Self { previous }
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        if let (Some(body), Some(prev)) = (document().body(), self.previous.take()) {
            let style = body.style();
            if prev.is_empty() {
                let _ = style.remove_property("overflow");
            } else {
                let _ = style.set_property("overflow", &prev);
            }
        }
    }
}
