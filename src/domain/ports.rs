use crate::utils::error::Result;

/// Destination for exported scorecards.
pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// Match settings supplied by the command line or a TOML file.
pub trait ConfigProvider {
    fn batting_first_name(&self) -> &str;
    fn batting_first_players(&self) -> Vec<String>;
    fn bowling_first_name(&self) -> &str;
    fn bowling_first_players(&self) -> Vec<String>;
    fn max_overs(&self) -> u32;
    fn output_path(&self) -> &str;
}
