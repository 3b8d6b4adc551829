//! CSV Data Loader Module
//! Loads registry extracts with Polars and exposes columns as cleaned values.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
}

/// Holds one loaded CSV table; records are read-only once loaded.
pub struct DataLoader {
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self { df: None }
    }

    /// Load a CSV file using Polars, every column as text.
    ///
    /// Fails with [`LoaderError::FileNotFound`] before touching Polars when the
    /// path does not exist. Schema inference is disabled: a column of plain
    /// digits may still hold codes like `2C` far down the file.
    pub fn load_csv(&mut self, file_path: &Path) -> Result<&DataFrame, LoaderError> {
        if !file_path.is_file() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(0))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;
        debug!(rows = df.height(), cols = df.width(), "csv loaded");

        Ok(&*self.df.insert(df))
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First column, in file order, whose name contains `needle`.
    pub fn find_column_containing(&self, needle: &str) -> Option<String> {
        self.get_columns()
            .into_iter()
            .find(|name| name.contains(needle))
    }

    /// Column values as text, or `None` when the column is absent. Empty cells are `None`.
    pub fn text_values(&self, column: &str) -> Result<Option<Vec<Option<String>>>, LoaderError> {
        let Some(col) = self.df.as_ref().and_then(|df| df.column(column).ok()) else {
            return Ok(None);
        };

        let as_str = col.cast(&DataType::String)?;
        let values = as_str
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_string))
            .collect();
        Ok(Some(values))
    }

    /// Column values as integer codes, or `None` when the column is absent.
    ///
    /// Text is parsed on the fly; cells that are not an integer become `None`.
    pub fn code_values(&self, column: &str) -> Result<Option<Vec<Option<i64>>>, LoaderError> {
        let Some(col) = self.df.as_ref().and_then(|df| df.column(column).ok()) else {
            return Ok(None);
        };

        let as_int = col.cast(&DataType::Int64)?;
        let values = as_int.i64()?.into_iter().collect();
        Ok(Some(values))
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }
}
