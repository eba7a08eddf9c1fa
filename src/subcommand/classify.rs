use super::*;

#[derive(Debug, Parser)]
pub(crate) struct Classify {
  #[clap(short, long, default_value = "models/fish-classifier.json")]
  model: PathBuf,
  #[clap(short, long)]
  image: PathBuf,
}

impl Classify {
  pub(crate) fn run(self) -> Result {
    let host = ModelHost::new(self.model);

    let bytes = read(&self.image)
      .with_context(|| format!("failed to read {}", self.image.display()))?;

    let tensor = preprocess(&decode_image(&bytes)?);

    let prediction =
      Prediction::from_probabilities(host.classify(tensor.view())?);

    println!(
      "Prediction: {} ({:.2}%)",
      prediction.label, prediction.confidence
    );

    println!("Raw probabilities:");

    for (name, probability) in
      CLASS_NAMES.iter().zip(prediction.probabilities.iter())
    {
      println!("  {name}: {probability:.4}");
    }

    Ok(())
  }
}
