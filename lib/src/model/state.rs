/// Marker for a model that has **not been fitted**.
///
/// `LinearModel<Unfitted>` only exposes `fit`; it has no `predict`, so an untrained
/// model cannot be used for inference.
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// Marker for a model that has been **fitted exactly once**.
///
/// Fitting consumes the unfitted model, so a `LinearModel<Fitted>` cannot be fitted
/// again. It holds only inference parameters, never solver settings.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
