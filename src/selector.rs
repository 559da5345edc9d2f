//! カスタムモードの名前・月選択
//!
//! 対話式（dialoguer）と `--select` 引数の両方から `SelectionState` を組み立てる。

use crate::error::Result;
use dialoguer::MultiSelect;
use log::warn;
use season_art_common::{Month, SelectionState};

/// `--select NAME=MONTH,...` の内容を反映
///
/// 読み込まれていない名前は無視する。
pub fn apply_selections(state: &mut SelectionState, selections: &[(String, Vec<Month>)]) {
    for (name, months) in selections {
        if !state.loaded_names().iter().any(|n| n == name) {
            warn!("ignoring selection for unknown name: {}", name);
            continue;
        }
        if !state.is_name_selected(name) {
            state.toggle_name(name);
        }
        for &month in months {
            if !state.is_month_selected(name, month) {
                state.toggle_month(name, month);
            }
        }
    }
}

/// 対話式で選び直した名前を現在の選択に合わせる
///
/// 外された名前は月ごと解除し、新しく選ばれた名前を追加する。
pub fn reconcile_names(state: &mut SelectionState, picked: &[String]) {
    let current: Vec<String> = state.selected_names().into_iter().map(String::from).collect();
    for name in current.iter().filter(|n| !picked.contains(n)) {
        state.toggle_name(name);
    }
    for name in picked {
        if !state.is_name_selected(name) {
            state.toggle_name(name);
        }
    }
}

/// 対話式で選び直した月を現在の選択に合わせる
///
/// 外された月を解除し、新しく選ばれた月を選んだ順に追加する。
pub fn reconcile_months(state: &mut SelectionState, name: &str, picked: &[Month]) {
    let current = state.months_for(name).to_vec();
    for month in current.into_iter().filter(|m| !picked.contains(m)) {
        state.toggle_month(name, month);
    }
    for &month in picked {
        if !state.is_month_selected(name, month) {
            state.toggle_month(name, month);
        }
    }
}

/// 対話式で名前と月を選ぶ
///
/// `--select` 済みの内容を初期チェックとして表示する。
pub fn select_interactive(state: &mut SelectionState) -> Result<()> {
    let names = state.loaded_names().to_vec();
    if names.is_empty() {
        return Ok(());
    }

    let name_flags: Vec<bool> = names.iter().map(|n| state.is_name_selected(n)).collect();
    let picked = MultiSelect::new()
        .with_prompt("名前を選択 (Spaceで選択, Enterで決定)")
        .items(&names[..])
        .defaults(&name_flags)
        .interact()?;
    let picked: Vec<String> = picked.into_iter().map(|i| names[i].clone()).collect();
    reconcile_names(state, &picked);

    let month_labels: Vec<&str> = Month::ALL.iter().map(Month::name).collect();
    for name in &picked {
        let flags: Vec<bool> = Month::ALL
            .iter()
            .map(|&m| state.is_month_selected(name, m))
            .collect();
        let months = MultiSelect::new()
            .with_prompt(format!("{} の月を選択", name))
            .items(&month_labels[..])
            .defaults(&flags)
            .interact()?;

        if months.is_empty() {
            println!("  → 月が未選択のため {} はスキップされます", name);
        }
        let months: Vec<Month> = months.into_iter().map(|i| Month::ALL[i]).collect();
        reconcile_months(state, name, &months);
    }
    Ok(())
}
