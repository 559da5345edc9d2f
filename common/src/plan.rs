//! 作業計画
//!
//! 生成モード（全件/カスタム）から (名前, 月) の作業項目列を組み立てる。
//! 要求順 = 名前リスト順 × 暦順、またはカスタム選択順。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::month::Month;
use crate::selection::SelectionState;

/// 作業項目（名前と月の組で識別）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkItem {
    pub name: String,
    pub month: Month,
}

impl WorkItem {
    pub fn new(name: impl Into<String>, month: Month) -> Self {
        Self {
            name: name.into(),
            month,
        }
    }
}

impl fmt::Display for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.month)
    }
}

/// 生成モード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// 全名前 × 全12か月
    #[default]
    All,
    /// 名前ごとに選択した月のみ
    Custom,
}

impl FromStr for GenerationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(GenerationMode::All),
            "custom" => Ok(GenerationMode::Custom),
            _ => Err(format!("Unknown mode: {}. Use all or custom", s)),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::All => write!(f, "all"),
            GenerationMode::Custom => write!(f, "custom"),
        }
    }
}

/// 名前単位にまとめた作業計画
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkPlan {
    groups: Vec<(String, Vec<Month>)>,
}

impl WorkPlan {
    /// 全件モード: 全名前 × 暦順の12か月
    pub fn all(names: &[String]) -> Self {
        Self {
            groups: names
                .iter()
                .map(|name| (name.clone(), Month::ALL.to_vec()))
                .collect(),
        }
    }

    /// カスタムモード: 選択順に、月が1つもない名前は飛ばす
    pub fn custom(selection: &SelectionState) -> Self {
        Self {
            groups: selection
                .iter()
                .filter(|(_, months)| !months.is_empty())
                .map(|(name, months)| (name.to_string(), months.to_vec()))
                .collect(),
        }
    }

    pub fn for_mode(mode: GenerationMode, names: &[String], selection: &SelectionState) -> Self {
        match mode {
            GenerationMode::All => Self::all(names),
            GenerationMode::Custom => Self::custom(selection),
        }
    }

    pub fn groups(&self) -> &[(String, Vec<Month>)] {
        &self.groups
    }

    /// 要求順に並べた作業項目
    pub fn items(&self) -> Vec<WorkItem> {
        self.groups
            .iter()
            .flat_map(|(name, months)| months.iter().map(move |m| WorkItem::new(name.clone(), *m)))
            .collect()
    }

    /// 作業項目の総数
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, months)| months.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
