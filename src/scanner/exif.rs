use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// 撮影日時として見るタグ（先に見つかったものを使う）
const DATE_TAGS: [exif::Tag; 3] = [
    exif::Tag::DateTimeOriginal,
    exif::Tag::DateTime,
    exif::Tag::DateTimeDigitized,
];

/// EXIFの撮影日時（ローカル時刻、タイムゾーンなし）
pub fn extract_datetime(path: &Path) -> Option<NaiveDateTime> {
    let file = File::open(path).ok()?;
    let mut bufreader = BufReader::new(file);
    let exif = exif::Reader::new().read_from_container(&mut bufreader).ok()?;

    DATE_TAGS.iter().find_map(|tag| {
        let field = exif.get_field(*tag, exif::In::PRIMARY)?;
        match &field.value {
            exif::Value::Ascii(parts) => parts
                .first()
                .and_then(|bytes| parse_exif_datetime(std::str::from_utf8(bytes).ok()?)),
            _ => None,
        }
    })
}

/// "YYYY:MM:DD HH:MM:SS" 形式
pub fn parse_exif_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim_end_matches('\0').trim(), "%Y:%m:%d %H:%M:%S").ok()
}
