//! 月ごとの季節テーマ
//!
//! プロンプト生成の入力としてのみ使用する。

use crate::month::Month;

/// 月に対応するテーマ文字列
pub fn season_theme(month: Month) -> &'static str {
    match month {
        Month::January => "Calm snowy clearing, grazing reindeer, Northen lights, pine forest backdrop, moonlit snow drifts, clear starry night sky, distant cabin lights",
        Month::February => "Soft winter landscape, gentle snow-covered field, bare trees, pale blue sky, distant pink horizon at sunset.",
        Month::March => "Spring, cherry blossoms, new growth, warm sunshine",
        Month::April => "Spring, rain showers, green meadows, fresh buds",
        Month::May => "Spring, warm winds, bright flowers, blue skies",
        Month::June => "Vibrant tropical beach scene, crystal-clear waters, swaying palm trees, golden sunset, colorful coral reefs.",
        Month::July => "African savanna sunset, handcrafted text on weathered wooden fence post, tall golden grass plains, warm orange sky, gentle evening breeze",
        Month::August => "Gentle monsoon shower, bright green paddy fields, white egrets in flight, simple village road, coconut palms swaying, clear puddles reflecting sky, peaceful afternoon light",
        Month::September => "Fall harvest farm, golden fields, red barn, pumpkins, autumn foliage, sunset glow, tranquil landscape.",
        Month::October => "Misty village morning, golden rice fields, old banyan tree, clay house with blue doors, marigold flowers in the garden, village path, calm pond, warm sunlight, peaceful countryside",
        Month::November => "Misty dawn light, harvested wheat fields, scattered hay bales, dry golden grass, earthy soil path, soft morning horizon, pale autumn sky",
        Month::December => "German Christmas market, festive stalls, snow-covered houses, mulled wine, tree decorations, magical joyful ambiance.",
    }
}
