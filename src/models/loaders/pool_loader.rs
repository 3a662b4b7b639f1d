use crate::error::{AppError, AppResult, FileError, PoolError};
use crate::models::pool::{PoolFile, PoolRecord, QuestionPool};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 读取单个题库文件（`.json` 为记录数组，`.toml` 为 `[[questions]]` 表）
///
/// 文件整体无法解析时返回错误；单条记录类型不对、选项数不是 5
/// 或正答不在 "1"〜"5" 时跳过该条并计数
pub async fn load_pool_file(path: &Path) -> AppResult<QuestionPool> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_str, e))?;

    let parsed: Vec<Result<PoolRecord, String>> = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => {
            let file: PoolFile = toml::from_str(&content).map_err(|source| PoolError::TomlParseFailed {
                path: path_str.clone(),
                source,
            })?;
            file.questions
                .into_iter()
                .map(|value| value.try_into::<PoolRecord>().map_err(|e| e.to_string()))
                .collect()
        }
        _ => {
            let values: Vec<serde_json::Value> =
                serde_json::from_str(&content).map_err(|source| PoolError::JsonParseFailed {
                    path: path_str.clone(),
                    source,
                })?;
            values
                .into_iter()
                .map(|value| serde_json::from_value::<PoolRecord>(value).map_err(|e| e.to_string()))
                .collect()
        }
    };

    let mut pool = QuestionPool::default();
    for (index, record) in parsed.into_iter().enumerate() {
        match record {
            Ok(record) if record.is_well_formed() => pool.records.push(record),
            Ok(record) => {
                tracing::debug!(
                    "跳过格式不正确的记录: 第{}回 {} 第{}問",
                    record.round,
                    record.part,
                    record.number
                );
                pool.skipped += 1;
            }
            Err(e) => {
                tracing::debug!("跳过无法解析的记录 {}#{}: {}", path_str, index + 1, e);
                pool.skipped += 1;
            }
        }
    }

    Ok(pool)
}

/// 从目录中读取所有题库文件
///
/// - 按文件名顺序读取 `.json` / `.toml`
/// - 无法解析的文件记录警告后跳过
/// - 单条记录的跳过规则见 [`load_pool_file`]
pub async fn load_pool(folder_path: &str) -> AppResult<QuestionPool> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }
        .into());
    }

    let mut files = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?
    {
        let path = entry.path();
        if matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("json") | Some("toml")
        ) {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到题库文件", folder_path);
    }

    let mut pool = QuestionPool::default();
    for path in files {
        tracing::info!(
            "正在加载: {}",
            path.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_pool_file(&path).await {
            Ok(file_pool) => {
                tracing::info!("成功加载 {} 个题目", file_pool.len());
                pool.records.extend(file_pool.records);
                pool.skipped += file_pool.skipped;
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", path.display(), e);
            }
        }
    }

    if pool.skipped > 0 {
        tracing::info!("共跳过 {} 条格式不正确的记录", pool.skipped);
    }

    Ok(pool)
}
