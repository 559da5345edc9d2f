//! カスタム生成の名前・月選択コンポーネント

use leptos::prelude::*;
use season_art_common::{Month, SelectionState};

pub fn months_selected_label(count: usize) -> String {
    format!("{} months selected", count)
}

pub fn total_label(total: usize) -> String {
    format!("Total images to generate: {}", total)
}

#[component]
pub fn CustomSelection<FG>(
    names: ReadSignal<Vec<String>>,
    selection: RwSignal<SelectionState>,
    api_token: ReadSignal<String>,
    is_generating: ReadSignal<bool>,
    on_generate: FG,
) -> impl IntoView
where
    FG: Fn(()) + 'static + Clone + Send + Sync,
{
    let can_generate = move || {
        !is_generating.get()
            && !api_token.get().is_empty()
            && selection.with(SelectionState::has_selections)
    };

    view! {
        <div class="custom-selection">
            <For
                each=move || names.get()
                key=|name| name.clone()
                children=move |name| view! { <NameCard name=name selection=selection /> }
            />

            <div class="custom-footer">
                <p class="text-muted">
                    {move || total_label(selection.with(SelectionState::total_selected))}
                </p>
                <button
                    class="btn btn-primary"
                    disabled=move || !can_generate()
                    on:click=move |_| on_generate(())
                >
                    "Generate Selected Images"
                </button>
            </div>
        </div>
    }
}

#[component]
fn NameCard(name: String, selection: RwSignal<SelectionState>) -> impl IntoView {
    let is_selected = {
        let name = name.clone();
        move || selection.with(|s| s.is_name_selected(&name))
    };
    let name_toggle = name.clone();
    let name_count = name.clone();
    let name_months = name.clone();

    view! {
        <div class="name-card">
            <div class="name-card-header">
                <button
                    class="btn btn-toggle btn-small"
                    class:active=is_selected.clone()
                    on:click=move |_| selection.update(|s| s.toggle_name(&name_toggle))
                >
                    {name}
                </button>
                <Show when=is_selected.clone()>
                    <span class="text-muted">
                        {
                            let name = name_count.clone();
                            move || {
                                let count = selection.with(|s| s.months_for(&name).len());
                                months_selected_label(count)
                            }
                        }
                    </span>
                </Show>
            </div>

            <Show when=is_selected.clone()>
                <div class="month-grid">
                    {
                        let name = name_months.clone();
                        Month::ALL
                            .iter()
                            .map(|&month| {
                                let name_for_class = name.clone();
                                let name_for_click = name.clone();
                                view! {
                                    <button
                                        class="btn btn-month btn-small"
                                        class:active=move || {
                                            selection.with(|s| {
                                                s.is_month_selected(&name_for_class, month)
                                            })
                                        }
                                        on:click=move |_| {
                                            selection.update(|s| {
                                                s.toggle_month(&name_for_click, month)
                                            })
                                        }
                                    >
                                        {month.name()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(months_selected_label(3), "3 months selected");
        assert_eq!(total_label(0), "Total images to generate: 0");
    }
}
