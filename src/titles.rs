//! 作品タイトル付け
//!
//! 作品から読み取った文字を入力すると、既知の詩句ならその詩題を、
//! それ以外は最初の一句をタイトルにする。

use crate::error::{GalleryError, Result};
use dialoguer::Input;
use kaihan_gallery_common::{Artwork, ArtworkCollection, PoemSource, UNTITLED_SENTINEL};
use std::path::Path;

/// (詩句, 詩題, 作者)
const POEMS: &[(&str, &str, &str)] = &[
    ("床前明月光", "静夜思", "李白"),
    ("疑是地上霜", "静夜思", "李白"),
    ("举头望明月", "静夜思", "李白"),
    ("低头思故乡", "静夜思", "李白"),
    ("白日依山尽", "登鹳雀楼", "王之涣"),
    ("黄河入海流", "登鹳雀楼", "王之涣"),
    ("欲穷千里目", "登鹳雀楼", "王之涣"),
    ("更上一层楼", "登鹳雀楼", "王之涣"),
    ("春眠不觉晓", "春晓", "孟浩然"),
    ("处处闻啼鸟", "春晓", "孟浩然"),
    ("夜来风雨声", "春晓", "孟浩然"),
    ("花落知多少", "春晓", "孟浩然"),
    ("锄禾日当午", "悯农", "李绅"),
    ("汗滴禾下土", "悯农", "李绅"),
    ("谁知盘中餐", "悯农", "李绅"),
    ("粒粒皆辛苦", "悯农", "李绅"),
    ("离离原上草", "赋得古原草送别", "白居易"),
    ("一岁一枯荣", "赋得古原草送别", "白居易"),
    ("野火烧不尽", "赋得古原草送别", "白居易"),
    ("春风吹又生", "赋得古原草送别", "白居易"),
    ("鹅鹅鹅", "咏鹅", "骆宾王"),
    ("曲项向天歌", "咏鹅", "骆宾王"),
    ("白毛浮绿水", "咏鹅", "骆宾王"),
    ("红掌拨清波", "咏鹅", "骆宾王"),
    ("日照香炉生紫烟", "望庐山瀑布", "李白"),
    ("遥看瀑布挂前川", "望庐山瀑布", "李白"),
    ("飞流直下三千尺", "望庐山瀑布", "李白"),
    ("疑是银河落九天", "望庐山瀑布", "李白"),
    ("两个黄鹂鸣翠柳", "绝句", "杜甫"),
    ("一行白鹭上青天", "绝句", "杜甫"),
    ("窗含西岭千秋雪", "绝句", "杜甫"),
    ("门泊东吴万里船", "绝句", "杜甫"),
    ("远看山有色", "画", "王维"),
    ("近听水无声", "画", "王维"),
    ("春去花还在", "画", "王维"),
    ("人来鸟不惊", "画", "王维"),
    ("一去二三里", "山村咏怀", "邵康节"),
    ("烟村四五家", "山村咏怀", "邵康节"),
    ("亭台六七座", "山村咏怀", "邵康节"),
    ("八九十枝花", "山村咏怀", "邵康节"),
    ("解落三秋叶", "风", "李峤"),
    ("能开二月花", "风", "李峤"),
    ("过江千尺浪", "风", "李峤"),
    ("入竹万竿斜", "风", "李峤"),
    ("众鸟高飞尽", "独坐敬亭山", "李白"),
    ("孤云独去闲", "独坐敬亭山", "李白"),
    ("相看两不厌", "独坐敬亭山", "李白"),
    ("只有敬亭山", "独坐敬亭山", "李白"),
    ("松下问童子", "寻隐者不遇", "贾岛"),
    ("言师采药去", "寻隐者不遇", "贾岛"),
    ("只在此山中", "寻隐者不遇", "贾岛"),
    ("云深不知处", "寻隐者不遇", "贾岛"),
    ("千山鸟飞绝", "江雪", "柳宗元"),
    ("万径人踪灭", "江雪", "柳宗元"),
    ("孤舟蓑笠翁", "江雪", "柳宗元"),
    ("独钓寒江雪", "江雪", "柳宗元"),
    ("墙角数枝梅", "梅花", "王安石"),
    ("凌寒独自开", "梅花", "王安石"),
    ("遥知不是雪", "梅花", "王安石"),
    ("为有暗香来", "梅花", "王安石"),
    ("泉眼无声惜细流", "小池", "杨万里"),
    ("树阴照水爱晴柔", "小池", "杨万里"),
    ("小荷才露尖尖角", "小池", "杨万里"),
    ("早有蜻蜓立上头", "小池", "杨万里"),
    ("碧玉妆成一树高", "咏柳", "贺知章"),
    ("万条垂下绿丝绦", "咏柳", "贺知章"),
    ("不知细叶谁裁出", "咏柳", "贺知章"),
    ("二月春风似剪刀", "咏柳", "贺知章"),
    ("天地玄黄", "千字文", "周兴嗣"),
    ("宇宙洪荒", "千字文", "周兴嗣"),
    ("人之初", "三字经", "王应麟"),
    ("性本善", "三字经", "王应麟"),
    ("横平竖直", "书法练习", ""),
    ("永字八法", "永字八法", ""),
    ("上善若水", "上善若水", "老子"),
    ("厚德载物", "厚德载物", "《周易》"),
    ("宁静致远", "宁静致远", "诸葛亮"),
    ("淡泊明志", "淡泊明志", "诸葛亮"),
    ("海纳百川", "海纳百川", "林则徐"),
    ("有容乃大", "海纳百川", "林则徐"),
];

/// 句の区切り
const CLAUSE_BREAKS: &[char] = &['，', '。', '！', '？', '；', '：', '、', '\n'];

const TITLE_MAX_CHARS: usize = 10;

fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| !CLAUSE_BREAKS.contains(c) && !c.is_whitespace())
        .collect()
}

/// 既知の詩句を含む（または詩句の一部である）なら出典を返す
pub fn find_poem(text: &str) -> Option<PoemSource> {
    let clean = strip_punctuation(text);
    if clean.is_empty() {
        return None;
    }

    POEMS
        .iter()
        .find(|(line, _, _)| clean.contains(line) || line.contains(clean.as_str()))
        .map(|(_, title, author)| PoemSource {
            title: title.to_string(),
            author: author.to_string(),
        })
}

/// 読み取った文字からタイトルを作る
pub fn generate_title(text: &str) -> String {
    if let Some(poem) = find_poem(text) {
        return poem.title;
    }

    let first_clause = text.trim().split(CLAUSE_BREAKS).next().unwrap_or_default();
    let title: String = first_clause.chars().take(TITLE_MAX_CHARS).collect();
    if title.is_empty() {
        UNTITLED_SENTINEL.to_string()
    } else {
        title
    }
}

/// 読み取った文字を作品に反映
pub fn apply_reading(artwork: &mut Artwork, text: &str) {
    artwork.title = Some(generate_title(text));
    artwork.content = Some(text.to_string());
    artwork.poem_source = find_poem(text);
}

/// 対話アクション
#[derive(Debug, PartialEq, Eq)]
pub enum TitleAction {
    /// 読み取った文字
    Text(String),
    /// この作品をスキップ
    Skip,
    /// 保存して終了
    Quit,
}

pub fn parse_action(input: &str) -> TitleAction {
    match input.trim() {
        "" => TitleAction::Skip,
        ":q" => TitleAction::Quit,
        text => TitleAction::Text(text.to_string()),
    }
}

/// タイトル付けの対象（`include_titled` でなければ未命名のみ）
pub fn pending_artworks(collection: &ArtworkCollection, include_titled: bool) -> Vec<usize> {
    collection
        .artworks
        .iter()
        .enumerate()
        .filter(|(_, a)| include_titled || a.ocr_title().is_none())
        .map(|(i, _)| i)
        .collect()
}

/// 対話式でタイトルを付ける
pub fn run_interactive_titles(
    input_path: &Path,
    output_path: Option<&Path>,
    include_titled: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(input_path)?;
    let mut collection: ArtworkCollection = serde_json::from_str(&content)?;

    let pending = pending_artworks(&collection, include_titled);
    if pending.is_empty() {
        println!("✓ 所有作品都已有标题");
        return Ok(());
    }

    println!("📝 待命名作品: {} 幅", pending.len());
    println!("---");
    println!("输入作品上的文字 [Enter]跳过 [:q]保存并退出");
    println!("---\n");

    let mut updated = 0;
    for (count, &idx) in pending.iter().enumerate() {
        let artwork = &collection.artworks[idx];
        println!(
            "[{}/{}] {} ({})",
            count + 1,
            pending.len(),
            artwork.filename,
            artwork.date_display
        );

        match prompt_action()? {
            TitleAction::Text(text) => {
                let artwork = &mut collection.artworks[idx];
                apply_reading(artwork, &text);
                let source = artwork
                    .poem_source
                    .as_ref()
                    .map(|p| format!(" (来源: {})", p.author))
                    .unwrap_or_default();
                println!("  → 标题: {}{}\n", artwork.title.as_deref().unwrap_or_default(), source);
                updated += 1;
            }
            TitleAction::Skip => println!("  → 跳过\n"),
            TitleAction::Quit => {
                println!("保存并退出...");
                break;
            }
        }
    }

    let output = output_path.unwrap_or(input_path);
    let json = serde_json::to_string_pretty(&collection)?;
    std::fs::write(output, json)?;

    println!("\n✓ 已命名 {} 幅，保存到: {}", updated, output.display());
    Ok(())
}

fn prompt_action() -> Result<TitleAction> {
    let input: String = Input::new()
        .with_prompt("文字")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| GalleryError::Prompt(e.to_string()))?;
    Ok(parse_action(&input))
}
