use crate::models::profile::LayoutProfile;
use crate::models::question::ExamMetadata;
use crate::error::AppError;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 从 TOML 文件加载版式配置
///
/// 文件中缺失的字段使用 SES-PE 默认值
pub async fn load_profile(toml_file_path: &Path) -> Result<LayoutProfile> {
    let path = toml_file_path.display().to_string();
    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path, e))?;

    let profile: LayoutProfile =
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&path, e))?;

    tracing::info!(
        "成功加载版式 {} ({} 个噪声模式)",
        profile.name,
        profile.noise_patterns.len()
    );

    Ok(profile)
}

/// PDF 同名的试卷信息文件路径（`prova.pdf` → `prova.toml`）
pub fn metadata_sidecar_path(pdf_path: &Path) -> PathBuf {
    pdf_path.with_extension("toml")
}

/// 加载 PDF 旁边的试卷信息文件
///
/// # 返回
/// 文件不存在时返回 `None`，调用方使用全局配置中的试卷信息
pub async fn load_metadata_sidecar(pdf_path: &Path) -> Result<Option<ExamMetadata>> {
    let sidecar = metadata_sidecar_path(pdf_path);

    if !fs::try_exists(&sidecar).await.unwrap_or(false) {
        return Ok(None);
    }

    let path = sidecar.display().to_string();
    let content = fs::read_to_string(&sidecar)
        .await
        .map_err(|e| AppError::file_read_failed(&path, e))?;

    let metadata: ExamMetadata =
        toml::from_str(&content).map_err(|e| AppError::toml_parse_failed(&path, e))?;

    tracing::info!(
        "正在使用试卷信息: {}",
        sidecar.file_name().unwrap_or_default().to_string_lossy()
    );

    Ok(Some(metadata))
}

/// 收集待处理的 PDF
///
/// 输入可以是单个 PDF，也可以是目录（按文件名排序，不递归）
pub async fn collect_pdf_files(input_path: &Path) -> Result<Vec<PathBuf>> {
    if !fs::try_exists(input_path).await.unwrap_or(false) {
        anyhow::bail!("输入路径不存在: {}", input_path.display());
    }

    let metadata = fs::metadata(input_path)
        .await
        .with_context(|| format!("无法读取输入路径: {}", input_path.display()))?;

    if metadata.is_file() {
        return Ok(vec![input_path.to_path_buf()]);
    }

    let mut pdf_files = Vec::new();
    let mut entries = fs::read_dir(input_path)
        .await
        .with_context(|| format!("无法读取文件夹: {}", input_path.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_pdf = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if is_pdf {
            pdf_files.push(path);
        }
    }

    pdf_files.sort();

    if pdf_files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到 PDF 文件", input_path.display());
    }

    Ok(pdf_files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FileError;

    #[test]
    fn test_partial_profile_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perfil.toml");
        std::fs::write(
            &path,
            "name = \"outra-banca\"\nboundary = 'Quest[aã]o \\d+'\n",
        )
        .unwrap();

        let profile = tokio_test::block_on(load_profile(&path)).unwrap();

        assert_eq!(profile.name, "outra-banca");
        assert_eq!(profile.boundary, r"Quest[aã]o \d+");
        assert_eq!(profile.answer_key, LayoutProfile::ses_pe().answer_key);
        assert!(profile.compile().is_ok());
    }

    #[test]
    fn test_broken_profile_is_toml_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perfil.toml");
        std::fs::write(&path, "name = \"sem aspas\nboundary =").unwrap();

        let err = tokio_test::block_on(load_profile(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::File(FileError::TomlParseFailed { .. }))
        ));
    }

    #[test]
    fn test_missing_profile_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = tokio_test::block_on(load_profile(&dir.path().join("nao-existe.toml"))).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::File(FileError::ReadFailed { .. }))
        ));
    }

    #[test]
    fn test_missing_sidecar_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let pdf = dir.path().join("prova.pdf");
        let loaded = tokio_test::block_on(load_metadata_sidecar(&pdf)).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_collect_pdf_files_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.pdf", "a.PDF", "notas.txt"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let files = tokio_test::block_on(collect_pdf_files(dir.path())).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }
}
