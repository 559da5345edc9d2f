//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"AI Image Generator"</h1>
            <p class="text-muted">"名前リストから月ごとの季節画像を生成"</p>
        </header>
    }
}
