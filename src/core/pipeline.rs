use crate::core::{locate, normalize};
use crate::core::{ConfigProvider, PathwayRecord, Pipeline, Storage, TransformResult};
use crate::utils::error::{EtlError, Result};

/// The one concrete pipeline: JS data file in, three-column TSV out.
pub struct PathwayPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PathwayPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for PathwayPipeline<S, C> {
    fn extract(&self) -> Result<String> {
        tracing::debug!("Reading input file: {}", self.config.input_path());
        let content = self.storage.read_file(self.config.input_path())?;

        let lines: Vec<&str> = content.lines().collect();
        let (start, end) = locate::locate_block(&lines, self.config.array_name()).ok_or_else(
            || EtlError::BlockNotLocated {
                array_name: self.config.array_name().to_string(),
                input_path: self.config.input_path().to_string(),
            },
        )?;

        tracing::debug!(
            "Declaration block spans lines {}..={}",
            start + 1,
            end + 1
        );
        Ok(lines[start..=end].join("\n"))
    }

    fn transform(&self, block: String) -> Result<TransformResult> {
        let json = normalize::normalize(&block)?;
        let records: Vec<PathwayRecord> = serde_json::from_str(&json)?;
        tracing::debug!("Parsed {} records", records.len());

        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(vec![]);
        writer.write_record(["id", "category", "subcategory"])?;
        for record in &records {
            writer.write_record([
                record.id.to_string(),
                record.category.clone(),
                record.subcategory.clone(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| EtlError::ProcessingError {
                message: format!("TSV buffer error: {}", e),
            })?;
        let tsv_output = String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
            message: format!("TSV output is not valid UTF-8: {}", e),
        })?;

        Ok(TransformResult {
            records,
            tsv_output,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        tracing::debug!(
            "Writing {} bytes to {}",
            result.tsv_output.len(),
            self.config.output_path()
        );
        self.storage
            .write_file(self.config.output_path(), result.tsv_output.as_bytes())?;
        Ok(self.config.output_path().to_string())
    }
}
