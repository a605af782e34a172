use crate::domain::model::TransformResult;
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn array_name(&self) -> &str;
}

pub trait Pipeline {
    /// Read the input file and slice out the raw declaration block.
    fn extract(&self) -> Result<String>;
    /// Normalize the block to strict JSON, parse it, render the TSV.
    fn transform(&self, block: String) -> Result<TransformResult>;
    /// Write the TSV to the configured output path, returning that path.
    fn load(&self, result: TransformResult) -> Result<String>;
}
