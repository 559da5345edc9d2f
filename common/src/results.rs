//! 生成結果・エラーログ・進捗

use crate::month::Month;

/// 名前 → 月 → 画像ハンドル
///
/// 挿入順は完了順。既存の (名前, 月) への再挿入はその場で置き換える。
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult<H> {
    entries: Vec<(String, Vec<(Month, H)>)>,
}

impl<H> Default for GenerationResult<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> GenerationResult<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加（置き換えた場合は古いハンドルを返す）
    pub fn insert(&mut self, name: &str, month: Month, handle: H) -> Option<H> {
        let months = match self.entries.iter().position(|(n, _)| n == name) {
            Some(pos) => &mut self.entries[pos].1,
            None => {
                self.entries.push((name.to_string(), Vec::new()));
                let last = self.entries.len() - 1;
                &mut self.entries[last].1
            }
        };
        match months.iter_mut().find(|(m, _)| *m == month) {
            Some((_, existing)) => Some(std::mem::replace(existing, handle)),
            None => {
                months.push((month, handle));
                None
            }
        }
    }

    pub fn get(&self, name: &str, month: Month) -> Option<&H> {
        self.months(name)
            .iter()
            .find(|(m, _)| *m == month)
            .map(|(_, h)| h)
    }

    pub fn months(&self, name: &str) -> &[(Month, H)] {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, months)| months.as_slice())
            .unwrap_or(&[])
    }

    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(Month, H)])> {
        self.entries
            .iter()
            .map(|(n, months)| (n.as_str(), months.as_slice()))
    }

    /// 画像の総数
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, months)| months.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 全件取り出して空にする
    pub fn drain(&mut self) -> Vec<(String, Month, H)> {
        std::mem::take(&mut self.entries)
            .into_iter()
            .flat_map(|(name, months)| {
                months
                    .into_iter()
                    .map(move |(month, handle)| (name.clone(), month, handle))
            })
            .collect()
    }
}

/// 失敗メッセージの記録（実行ごとにクリア）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorLog(Vec<String>);

impl ErrorLog {
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// 実行の進捗
///
/// 割合は成功件数 / 総数。総数は実行開始時に確定する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunProgress {
    pub completed: usize,
    pub failed: usize,
    pub total: usize,
}

impl RunProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// 0.0〜100.0
    pub fn percent(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.completed as f32 / self.total as f32 * 100.0
    }

    /// 成功・失敗を合わせた処理済み件数
    pub fn processed(&self) -> usize {
        self.completed + self.failed
    }

    pub fn is_finished(&self) -> bool {
        self.processed() >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_completion_order() {
        let mut result = GenerationResult::new();
        result.insert("Bob", Month::May, "b5");
        result.insert("Alice", Month::March, "a3");
        result.insert("Bob", Month::January, "b1");

        assert_eq!(result.names(), vec!["Bob", "Alice"]);
        assert_eq!(result.months("Bob"), &[(Month::May, "b5"), (Month::January, "b1")]);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut result = GenerationResult::new();
        result.insert("Alice", Month::March, "old");
        result.insert("Alice", Month::April, "april");
        let replaced = result.insert("Alice", Month::March, "new");

        assert_eq!(replaced, Some("old"));
        assert_eq!(result.months("Alice")[0], (Month::March, "new"));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_get_missing() {
        let result: GenerationResult<&str> = GenerationResult::new();
        assert!(result.get("Alice", Month::March).is_none());
        assert!(result.months("Alice").is_empty());
        assert!(result.is_empty());
    }

    #[test]
    fn test_drain() {
        let mut result = GenerationResult::new();
        result.insert("Alice", Month::March, 1);
        result.insert("Bob", Month::June, 2);

        let drained = result.drain();
        assert_eq!(
            drained,
            vec![
                ("Alice".to_string(), Month::March, 1),
                ("Bob".to_string(), Month::June, 2),
            ]
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_progress_percent() {
        let mut progress = RunProgress::new(24);
        assert_eq!(progress.percent(), 0.0);
        progress.completed = 12;
        assert_eq!(progress.percent(), 50.0);
        progress.completed = 24;
        assert_eq!(progress.percent(), 100.0);
        assert!(progress.is_finished());
    }

    #[test]
    fn test_progress_empty_total() {
        assert_eq!(RunProgress::new(0).percent(), 0.0);
    }

    #[test]
    fn test_error_log() {
        let mut log = ErrorLog::default();
        log.push("first");
        log.push(String::from("second"));
        assert_eq!(log.entries(), &["first".to_string(), "second".to_string()]);
        log.clear();
        assert!(log.is_empty());
    }
}
