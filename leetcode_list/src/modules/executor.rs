use async_trait::async_trait;
use leetcode_list_libs::{ListOptions, ListingSource, ProblemMetadata, SourceError};
use std::ffi::OsString;
use std::path::PathBuf;
use tokio::process::Command;

/// `leetcode`コマンドを実行して問題一覧を取得する実装
///
/// 企業情報とタグ情報は`{"companies": {...}, "tags": {...}}`形式のJSONファイルから読み込む
pub struct CliListingSource {
    program: OsString,
    metadata_path: PathBuf,
}

impl CliListingSource {
    pub fn new(program: impl Into<OsString>, metadata_path: impl Into<PathBuf>) -> Self {
        CliListingSource {
            program: program.into(),
            metadata_path: metadata_path.into(),
        }
    }

    /// `leetcode list`に渡す引数を組み立てるメソッド
    ///
    /// - 翻訳を使わないときは`-T`を付ける
    /// - ロックされた問題を表示しないときは`-q L`を付ける
    pub fn list_arguments(options: &ListOptions) -> Vec<&'static str> {
        let mut args = vec!["list"];
        if !options.use_endpoint_translation {
            args.push("-T");
        }
        if !options.show_locked {
            args.push("-q");
            args.push("L");
        }
        args
    }
}

#[async_trait]
impl ListingSource for CliListingSource {
    async fn list_problems(&self, options: &ListOptions) -> Result<String, SourceError> {
        let args = CliListingSource::list_arguments(options);
        tracing::info!("Run {:?} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!("listing command failed with {}: {}", output.status, stderr);
            return Err(SourceError::CommandError {
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn companies_and_tags(&self) -> Result<ProblemMetadata, SourceError> {
        tracing::debug!("Read problem metadata from {:?}", self.metadata_path);
        let content = tokio::fs::read_to_string(&self.metadata_path).await?;
        let metadata: ProblemMetadata = serde_json::from_str(&content)?;

        tracing::info!(
            "Metadata for {} companies entries and {} tags entries loaded.",
            metadata.companies.len(),
            metadata.tags.len()
        );

        Ok(metadata)
    }
}
