//! 凯晗书画作品集 生成ツール
//!
//! 画像フォルダから作品データ(artworks.json)を作り、Webギャラリーに渡す。

pub mod cli;
pub mod config;
pub mod dating;
pub mod error;
pub mod generator;
pub mod logging;
pub mod report;
pub mod scanner;
pub mod titles;
