use super::*;

/// Two-layer perceptron over the flattened image tensor. The hidden layer is
/// ReLU, the output layer is softmax, so `forward` returns a probability
/// vector over the species classes.
#[derive(Clone, Debug)]
pub(crate) struct Network {
  config: NetworkConfig,
}

impl Network {
  pub(crate) fn new(config: NetworkConfig) -> Self {
    Self { config }
  }

  /// Width of the flattened input the weights were trained for.
  pub(crate) fn input_len(&self) -> usize {
    self.config.weight_input_hidden.ncols()
  }

  /// Number of output classes the weights produce.
  pub(crate) fn class_count(&self) -> usize {
    self.config.weight_hidden_output.nrows()
  }

  pub(crate) fn forward(&self, input: ArrayView1<f32>) -> Array1<f32> {
    let hidden = self.config.weight_input_hidden.dot(&input).mapv(relu);

    softmax(self.config.weight_hidden_output.dot(&hidden))
  }

  pub(crate) fn save_weights(&self, path: &Path) -> Result {
    let serializable_config: SerializableNetworkConfig =
      self.config.clone().into();

    let file = File::create(path).context("failed to create weights file")?;

    serde_json::to_writer(file, &serializable_config)
      .context("failed to serialize network weights")?;

    Ok(())
  }

  pub(crate) fn load_weights(path: &Path) -> Result<Self> {
    let file = File::open(path).context("failed to open weights file")?;

    let serializable_config: SerializableNetworkConfig =
      serde_json::from_reader(file)
        .context("failed to deserialize network weights")?;

    let config = NetworkConfig::try_from(serializable_config)?;

    Ok(Self::new(config))
  }
}
