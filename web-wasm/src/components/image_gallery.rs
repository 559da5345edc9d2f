//! 生成画像ギャラリーコンポーネント
//!
//! 名前ごとにセクションを分け、月の画像を完了順に並べる。
//! 生成中の項目は該当セクションの末尾に仮のカードを出す。

use crate::app::LightboxImage;
use crate::download::download_all;
use leptos::prelude::*;
use log::warn;
use season_art_common::{GenerationResult, WorkItem};

/// セクションとして並べる名前。生成中の名前がまだ無ければ末尾に加える
pub fn section_names(
    images: &GenerationResult<String>,
    pending: Option<&WorkItem>,
) -> Vec<String> {
    let mut names: Vec<String> = images.names().into_iter().map(String::from).collect();
    if let Some(item) = pending {
        if !names.contains(&item.name) {
            names.push(item.name.clone());
        }
    }
    names
}

#[component]
pub fn ImageGallery<FO>(
    images: RwSignal<GenerationResult<String>>,
    pending: RwSignal<Option<WorkItem>>,
    on_open_image: FO,
) -> impl IntoView
where
    FO: Fn(LightboxImage) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="image-gallery">
            <For
                each=move || {
                    pending.with(|item| images.with(|r| section_names(r, item.as_ref())))
                }
                key=|name| name.clone()
                children=move |name| {
                    view! {
                        <NameSection
                            name=name
                            images=images
                            pending=pending
                            on_open_image=on_open_image.clone()
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn NameSection<FO>(
    name: String,
    images: RwSignal<GenerationResult<String>>,
    pending: RwSignal<Option<WorkItem>>,
    on_open_image: FO,
) -> impl IntoView
where
    FO: Fn(LightboxImage) + 'static + Clone + Send + Sync,
{
    let name_download = name.clone();
    let name_months = name.clone();
    let name_pending = name.clone();

    let on_download = move |_: leptos::ev::MouseEvent| {
        let months = images.with_untracked(|r| r.months(&name_download).to_vec());
        if let Err(e) = download_all(&name_download, &months) {
            warn!("download failed for {}: {:?}", name_download, e);
        }
    };

    view! {
        <section class="name-section">
            <div class="name-section-header">
                <h2>{name}</h2>
                <button class="btn btn-secondary" on:click=on_download>
                    "⬇ Download All"
                </button>
            </div>

            <div class="image-grid">
                <For
                    each={
                        let name = name_months.clone();
                        move || images.with(|r| r.months(&name).to_vec())
                    }
                    key=|(month, url)| (*month, url.clone())
                    children=move |(month, url)| {
                        let image = LightboxImage {
                            url: url.clone(),
                            name: name_months.clone(),
                            month,
                        };
                        let alt = image.caption();
                        let on_open_image = on_open_image.clone();
                        view! {
                            <figure class="image-card">
                                <div
                                    class="image-thumb"
                                    on:click=move |_| on_open_image(image.clone())
                                >
                                    <img src=url alt=alt />
                                </div>
                                <figcaption>{month.name()}</figcaption>
                            </figure>
                        }
                    }
                />
                {move || {
                    pending
                        .get()
                        .filter(|item| item.name == name_pending)
                        .map(|item| {
                            view! {
                                <figure class="image-card image-card-pending">
                                    <div class="image-thumb">
                                        <span class="spinner">"⏳"</span>
                                    </div>
                                    <figcaption>
                                        {format!("{} - generating...", item.month.name())}
                                    </figcaption>
                                </figure>
                            }
                        })
                }}
            </div>
        </section>
    }
}
