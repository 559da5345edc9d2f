//! カスタム生成の選択状態
//!
//! 選択中の名前（クリック順）と、名前ごとの選択月（クリック順）を保持する。
//! すべての操作はトグルで、読み込み済みリストにない名前は無視する。

use crate::month::Month;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct NameSelection {
    name: String,
    months: Vec<Month>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    loaded: Vec<String>,
    selected: Vec<NameSelection>,
}

impl SelectionState {
    pub fn new(loaded: Vec<String>) -> Self {
        Self {
            loaded,
            selected: Vec::new(),
        }
    }

    /// 名前リストを差し替える（リストから消えた名前の選択は破棄）
    pub fn set_loaded_names(&mut self, loaded: Vec<String>) {
        self.selected.retain(|s| loaded.contains(&s.name));
        self.loaded = loaded;
    }

    pub fn loaded_names(&self) -> &[String] {
        &self.loaded
    }

    /// 名前の選択/解除。解除時は月の選択も破棄する
    pub fn toggle_name(&mut self, name: &str) {
        if !self.is_loaded(name) {
            return;
        }
        if let Some(pos) = self.position(name) {
            self.selected.remove(pos);
        } else {
            self.selected.push(NameSelection {
                name: name.to_string(),
                months: Vec::new(),
            });
        }
    }

    /// 月の選択/解除。名前が未選択なら何もしない
    pub fn toggle_month(&mut self, name: &str, month: Month) {
        let Some(pos) = self.position(name) else {
            return;
        };
        let months = &mut self.selected[pos].months;
        if let Some(i) = months.iter().position(|m| *m == month) {
            months.remove(i);
        } else {
            months.push(month);
        }
    }

    /// 名前は選択したまま月の選択だけ消す
    pub fn reset_months(&mut self, name: &str) {
        if let Some(pos) = self.position(name) {
            self.selected[pos].months.clear();
        }
    }

    pub fn is_name_selected(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn is_month_selected(&self, name: &str, month: Month) -> bool {
        self.months_for(name).contains(&month)
    }

    pub fn months_for(&self, name: &str) -> &[Month] {
        self.position(name)
            .map(|pos| self.selected[pos].months.as_slice())
            .unwrap_or(&[])
    }

    pub fn selected_names(&self) -> Vec<&str> {
        self.selected.iter().map(|s| s.name.as_str()).collect()
    }

    /// 選択順に (名前, 月) を返す
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Month])> {
        self.selected
            .iter()
            .map(|s| (s.name.as_str(), s.months.as_slice()))
    }

    /// 生成予定の画像枚数
    pub fn total_selected(&self) -> usize {
        self.selected.iter().map(|s| s.months.len()).sum()
    }

    pub fn has_selections(&self) -> bool {
        self.total_selected() > 0
    }

    fn is_loaded(&self, name: &str) -> bool {
        self.loaded.iter().any(|n| n == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.selected.iter().position(|s| s.name == name)
    }
}
