//! プロンプト生成モジュール
//!
//! CLIとWeb(WASM)で共有されるプロンプト生成ロジック:
//! - build_prompt: 名前・月・テーマから画像生成用プロンプトを組み立てる
//! - prompt_for: テーマカタログを引いてbuild_promptを呼ぶ

use crate::month::Month;
use crate::themes::season_theme;

/// 画像生成用プロンプト生成
///
/// 名前を風景の一部として描き込ませるための指示文。
/// 3つの入力はすべてそのまま埋め込まれる（テーマは空でもよい）。
///
/// # Arguments
/// * `name` - 画像に描き込む名前
/// * `month` - 月ラベル
/// * `theme` - 季節テーマの説明文
pub fn build_prompt(name: &str, month: &str, theme: &str) -> String {
    format!(
        r#"Artistic Nature Photography: {theme}

        Landscape Composition:
        - Capture a breathtaking, immersive scene that embodies the {month} & {theme}
        - Create a dynamic, high-detail landscape with vivid, natural colors
        - Integrate the name {name} organically into the scene

        Text Integration Guidelines:
        - The name {name} MUST be completely grounded within the natural environment
        - Text should not appear artificial or digitally overlaid
        - Text should be written in uppercase letters
        - Letters must emerge naturally from landscape elements of {theme}
        - Text should be an artistic focal point that harmonizes with the scene

        Seasonal Text Transformation Techniques:
        - Winter Scene:
        * Letters carved in frost
        * Formed by snow patterns
        * Shaped by ice crystals
        * Emerging from snowy branches or frozen lake textures

        - Spring Scene:
        * Composed of blooming flowers
        * Created by fresh green shoots
        * Outlined by delicate plant stems
        * Integrated with new spring foliage

        - Summer Scene:
        * Sculpted by sunlight and shadows
        * Formed in beach sand or rocky terrain
        * Created by cloud formations
        * Emerging from natural landscape contours

        - Autumn Scene:
        * Constructed from falling leaves
        * Shaped by autumn tree bark
        * Outlined by forest floor textures
        * Integrated with harvest landscape elements

        - October Scene:
        * Letters formed by moss-covered stone textures
        * Created by delicate mushroom ring formations

        - November Scene:
        * Letters crafted through snow drift sculptural patterns
        * Formed by pine tree branch and needle arrangements

        Technical Specifications:
        - Ultra-high resolution
        - Hyper-realistic details
        - Natural lighting
        - Cinematic composition
        - Color palette true to the seasonal theme
        - Sharp focus on landscape and textual elements
        - Minimal post-processing
        - Authentic, unmanipulated appearance

        Photography Style:
        - Nature photography
        - Landscape cinematography
        - Organic, seamless integration
        - Artistic interpretation of natural scenery

        Mood and Atmosphere:
        - Capture the essence of {month}'s unique {theme}
        - Evoke emotional connection with the landscape
        - Create a sense of wonder and artistic discovery

        Avoid:
        - Digital text overlays
        - Artificial text placements
        - Forced or unnatural letter formations
        - Repeated text, merging text and missing text
        - Disconnected text elements or space between text"#
    )
}

/// 月のテーマを使ってプロンプトを生成
pub fn prompt_for(name: &str, month: Month) -> String {
    build_prompt(name, month.name(), season_theme(month))
}
