use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("目录不存在: {0}")]
    FolderNotFound(String),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("未找到图片: {0}")]
    NoImagesFound(String),

    #[error("作品数据无效: {0}")]
    InvalidData(String),

    #[error("JSON解析错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("输入中断: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
