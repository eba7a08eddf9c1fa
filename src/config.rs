use super::*;

/// On-disk mirror of [`NetworkConfig`]. The weight matrices are flattened
/// row-major with their shapes stored alongside.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SerializableNetworkConfig {
  weight_input_hidden: Vec<f32>,
  weight_hidden_output: Vec<f32>,
  input_hidden_shape: (usize, usize),
  hidden_output_shape: (usize, usize),
}

#[derive(Clone, Debug)]
pub(crate) struct NetworkConfig {
  pub(crate) weight_input_hidden: Array2<f32>,
  pub(crate) weight_hidden_output: Array2<f32>,
}

impl Into<SerializableNetworkConfig> for NetworkConfig {
  fn into(self) -> SerializableNetworkConfig {
    SerializableNetworkConfig {
      weight_input_hidden: self
        .weight_input_hidden
        .clone()
        .into_raw_vec_and_offset()
        .0,
      weight_hidden_output: self
        .weight_hidden_output
        .clone()
        .into_raw_vec_and_offset()
        .0,
      input_hidden_shape: self.weight_input_hidden.dim(),
      hidden_output_shape: self.weight_hidden_output.dim(),
    }
  }
}

impl TryFrom<SerializableNetworkConfig> for NetworkConfig {
  type Error = anyhow::Error;

  fn try_from(config: SerializableNetworkConfig) -> Result<Self> {
    Ok(Self {
      weight_input_hidden: Array2::from_shape_vec(
        config.input_hidden_shape,
        config.weight_input_hidden,
      )?,
      weight_hidden_output: Array2::from_shape_vec(
        config.hidden_output_shape,
        config.weight_hidden_output,
      )?,
    })
  }
}
