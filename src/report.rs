//! 生成結果のレポート

use crate::error::{GalleryError, Result};
use kaihan_gallery_common::{parse_collection, ArtworkCollection, TimeSource};
use std::path::Path;

const RULE: &str = "============================================================";
const MAX_WARNINGS_SHOWN: usize = 5;

/// 時刻の根拠ごとの件数（初出順）
pub fn source_counts(collection: &ArtworkCollection) -> Vec<(TimeSource, usize)> {
    let mut counts: Vec<(TimeSource, usize)> = Vec::new();
    for artwork in &collection.artworks {
        match counts.iter_mut().find(|(source, _)| *source == artwork.time_source) {
            Some((_, count)) => *count += 1,
            None => counts.push((artwork.time_source.clone(), 1)),
        }
    }
    counts
}

pub fn render_report(collection: &ArtworkCollection, output: &Path) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "  凯晗书画作品集 - 数据生成报告".to_string(),
        RULE.to_string(),
        String::new(),
        format!("✅ 成功处理: {} 张图片", collection.total_count),
        format!("📁 输出文件: {}", output.display()),
        String::new(),
        "⏱️ 时间来源统计:".to_string(),
    ];

    for (source, count) in source_counts(collection) {
        lines.push(format!(
            "   • {} ({}): {} 张",
            source.label(),
            source.confidence().as_str(),
            count
        ));
    }
    lines.push(String::new());

    if collection.warnings.is_empty() {
        lines.push("✅ 无警告".to_string());
    } else {
        lines.push(format!("⚠️ 警告 ({}项):", collection.warnings.len()));
        for warning in collection.warnings.iter().take(MAX_WARNINGS_SHOWN) {
            let fallback = warning
                .fallback
                .as_ref()
                .map(|f| format!(" -> 使用{}", f.as_str()))
                .unwrap_or_default();
            lines.push(format!("   • {} - {}{}", warning.file, warning.issue.as_str(), fallback));
        }
        if collection.warnings.len() > MAX_WARNINGS_SHOWN {
            lines.push(format!(
                "   ... 还有 {} 项警告",
                collection.warnings.len() - MAX_WARNINGS_SHOWN
            ));
        }
    }

    if let (Some(newest), Some(oldest)) = (collection.artworks.first(), collection.artworks.last()) {
        lines.push(String::new());
        lines.push(format!("📅 作品时间范围: {} ~ {}", oldest.date_display, newest.date_display));
    }

    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn print_report(collection: &ArtworkCollection, output: &Path) {
    println!("\n{}", render_report(collection, output));
}

/// 既存の作品データを読み込んでレポート表示
pub fn run_report(input: &Path) -> Result<()> {
    if !input.is_file() {
        return Err(GalleryError::FileNotFound(input.display().to_string()));
    }
    let content = std::fs::read_to_string(input)?;
    let collection =
        parse_collection(&content).map_err(|e| GalleryError::InvalidData(e.to_string()))?;
    print_report(&collection, input);
    Ok(())
}
