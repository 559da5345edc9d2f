//! 拡大表示

use crate::app::LightboxImage;
use leptos::prelude::*;

#[component]
pub fn Lightbox<FC>(image: RwSignal<Option<LightboxImage>>, on_close: FC) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    move || {
        image.get().map(|image| {
            let close_overlay = on_close.clone();
            let close_button = on_close.clone();
            let caption = image.caption();
            view! {
                <div class="lightbox-overlay" on:click=move |_| close_overlay(())>
                    <div class="lightbox" on:click=|ev| ev.stop_propagation()>
                        <button
                            class="btn btn-tertiary lightbox-close"
                            on:click=move |_| close_button(())
                        >
                            "✕"
                        </button>
                        <img src=image.url.clone() alt=caption.clone() />
                        <p class="lightbox-caption">{caption}</p>
                    </div>
                </div>
            }
        })
    }
}
