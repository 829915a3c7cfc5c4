//! Models with their fit state carried in the type.
//!
//! Fitting moves a model from [`Unfitted`] to [`Fitted`]; only fitted models implement
//! [`InferenceModel`], which also provides bincode persistence of the learned parameters.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

pub mod linear;
pub mod state;

pub use state::{Fitted, Unfitted};

/// Prediction and persistence for a fitted model.
pub trait InferenceModel: Sized {
    type Input;
    type Output;

    /// Plain-data form of the learned parameters.
    type ParamsRepr: Serialize + DeserializeOwned;

    fn predict(&self, input: &Self::Input) -> Result<Self::Output>;

    fn extract_params(&self) -> Self::ParamsRepr;

    fn from_params(params: Self::ParamsRepr) -> Result<Self>;

    /// Writes the parameters to `path` with bincode.
    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let bytes = bincode::serialize(&self.extract_params())?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Restores a model written by [`InferenceModel::save_to_file`].
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        let params: Self::ParamsRepr = bincode::deserialize(&bytes)?;
        Self::from_params(params)
    }
}
