use super::*;

/// Configured artifact path plus the process-wide cached network, loaded on
/// first use and immutable afterwards. A racing double-load is tolerated;
/// the loser's network is dropped.
pub(crate) struct ModelHost {
  path: PathBuf,
  network: OnceLock<Network>,
}

impl ModelHost {
  pub(crate) fn new(path: PathBuf) -> Self {
    Self {
      path,
      network: OnceLock::new(),
    }
  }

  pub(crate) fn network(&self) -> Result<&Network, ClassifyError> {
    if let Some(network) = self.network.get() {
      return Ok(network);
    }

    let loaded = Network::load_weights(&self.path)
      .map_err(ClassifyError::ModelUnavailable)?;

    // Artifact dimensions are a contract with the class table and the
    // preprocessor.
    if loaded.class_count() != CLASS_NAMES.len() {
      return Err(ClassifyError::ModelUnavailable(anyhow!(
        "weights produce {} classes, expected {}",
        loaded.class_count(),
        CLASS_NAMES.len(),
      )));
    }

    if loaded.input_len() != TENSOR_LEN {
      return Err(ClassifyError::ModelUnavailable(anyhow!(
        "weights expect {} inputs, preprocessor produces {}",
        loaded.input_len(),
        TENSOR_LEN,
      )));
    }

    info!(path = %self.path.display(), "loaded classifier weights");

    Ok(self.network.get_or_init(|| loaded))
  }

  /// Single forward pass over a preprocessed tensor. Returns the raw
  /// probability vector; interpretation is the caller's business.
  pub(crate) fn classify(
    &self,
    tensor: ArrayView4<f32>,
  ) -> Result<Array1<f32>, ClassifyError> {
    let network = self.network()?;

    let input = Array1::from_iter(tensor.iter().copied());

    Ok(network.forward(input.view()))
  }
}
