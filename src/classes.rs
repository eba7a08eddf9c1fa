use super::*;

/// Species names in model output order. The order is a contract with the
/// trained weights: index i of the output vector is the probability of
/// `CLASS_NAMES[i]`. The "Hourse" spelling matches the training data.
pub(crate) const CLASS_NAMES: [&str; 9] = [
  "Black Sea Sprat",
  "Gilt Head Bream",
  "Hourse Mackerel",
  "Red Mullet",
  "Red Sea Bream",
  "Sea Bass",
  "Shrimp",
  "Striped Red Mullet",
  "Trout",
];

#[derive(Debug)]
pub(crate) struct Prediction {
  pub(crate) label: &'static str,
  /// Probability of the predicted class as a percentage.
  pub(crate) confidence: f32,
  pub(crate) probabilities: Array1<f32>,
}

impl Prediction {
  pub(crate) fn from_probabilities(probabilities: Array1<f32>) -> Self {
    let index = argmax(&probabilities.view());

    Self {
      label: CLASS_NAMES[index],
      confidence: probabilities[index] * 100.0,
      probabilities,
    }
  }
}

/// Maps a sample-data directory name to a class index. Directory names carry
/// cosmetic formatting ("fish sea_food trout" for "Trout"), so both sides are
/// reduced to lowercase alphanumerics and the longest class name that is a
/// suffix of the directory name wins. The longest-match rule keeps
/// "striped red mullet" directories from landing on "Red Mullet".
pub(crate) fn class_for_directory(name: &str) -> Option<usize> {
  let normalized = normalize(name);

  CLASS_NAMES
    .iter()
    .enumerate()
    .filter(|(_, class)| normalized.ends_with(&normalize(class)))
    .max_by_key(|(_, class)| class.len())
    .map(|(index, _)| index)
}

fn normalize(name: &str) -> String {
  name
    .chars()
    .filter(|c| c.is_ascii_alphanumeric())
    .map(|c| c.to_ascii_lowercase())
    .collect()
}
