//! 作品データ(artworks.json)の生成

use crate::dating::{self, YearWindow};
use crate::error::{GalleryError, Result};
use crate::scanner::{self, ImageInfo};
use chrono::SecondsFormat;
use indicatif::{ProgressBar, ProgressStyle};
use kaihan_gallery_common::{
    Artwork, ArtworkCollection, Clock, DateIssue, GenerationWarning,
};
use rayon::prelude::*;
use std::path::Path;

/// ページから見た画像の置き場所
pub const IMAGE_URL_PREFIX: &str = "images";

/// 1枚分の推定結果と警告
struct DatedImage {
    artwork: Artwork,
    warnings: Vec<GenerationWarning>,
}

fn date_image(image: &ImageInfo, window: YearWindow, clock: &impl Clock) -> DatedImage {
    let inference = dating::infer_capture_time(&image.path, window, clock);
    let capture = inference.capture;

    let mut warnings = Vec::new();
    if let Some(fallback) = inference.no_exif_fallback {
        warnings.push(GenerationWarning {
            file: image.file_name.clone(),
            issue: DateIssue::NoExif,
            fallback: Some(fallback),
        });
    }

    let issues = dating::validate(capture.millis, clock);
    warnings.extend(issues.iter().map(|issue| GenerationWarning {
        file: image.file_name.clone(),
        issue: issue.clone(),
        fallback: None,
    }));

    DatedImage {
        artwork: Artwork {
            id: String::new(),
            filename: image.file_name.clone(),
            path: format!("{}/{}", IMAGE_URL_PREFIX, image.file_name),
            title: None,
            timestamp: capture.millis,
            date_display: dating::format_date_display(capture.millis, clock),
            confidence: capture.source.confidence(),
            time_source: capture.source,
            issues: (!issues.is_empty()).then_some(issues),
            content: None,
            poem_source: None,
        },
        warnings,
    }
}

fn progress_bar(len: usize) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-");
    pb.set_style(style);
    pb
}

/// 画像一覧から作品コレクションを組み立てる（新しい順、IDは artwork_001 から）
pub fn build_collection<C: Clock + Sync>(
    images: &[ImageInfo],
    window: YearWindow,
    clock: &C,
) -> ArtworkCollection {
    let pb = progress_bar(images.len());

    let dated: Vec<DatedImage> = images
        .par_iter()
        .map(|image| {
            let dated = date_image(image, window, clock);
            pb.inc(1);
            dated
        })
        .collect();
    pb.finish_and_clear();

    // 警告はスキャン順
    let mut warnings = Vec::new();
    let mut artworks = Vec::with_capacity(dated.len());
    for item in dated {
        warnings.extend(item.warnings);
        artworks.push(item.artwork);
    }

    artworks.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| a.filename.cmp(&b.filename))
    });
    for (idx, artwork) in artworks.iter_mut().enumerate() {
        artwork.id = format!("artwork_{:03}", idx + 1);
    }

    ArtworkCollection {
        generated_at: clock
            .to_local(clock.now_millis())
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, false)),
        total_count: artworks.len(),
        warnings,
        artworks,
    }
}

/// フォルダをスキャンして作品コレクションを生成
pub fn generate<C: Clock + Sync>(
    images_dir: &Path,
    window: YearWindow,
    clock: &C,
) -> Result<ArtworkCollection> {
    let images = scanner::scan_folder(images_dir)?;
    if images.is_empty() {
        return Err(GalleryError::NoImagesFound(images_dir.display().to_string()));
    }
    tracing::info!(count = images.len(), "dating images");

    Ok(build_collection(&images, window, clock))
}

/// JSONとして保存（親ディレクトリも作成）
pub fn write_collection(collection: &ArtworkCollection, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(collection)?;
    std::fs::write(output, json)?;
    tracing::debug!(path = %output.display(), "collection written");
    Ok(())
}
