use super::*;

#[derive(Debug, Parser)]
pub(crate) struct SampleTest {
  #[clap(short, long, default_value = "models/fish-classifier.json")]
  model: PathBuf,
  #[clap(short, long, default_value = "data/val")]
  data: PathBuf,
  #[clap(short, long, default_value = "3")]
  count: usize,
}

impl SampleTest {
  pub(crate) fn run(self) -> Result {
    let host = ModelHost::new(self.model);

    // Force the lazy load up front so a broken artifact is reported once
    // instead of once per worker.
    host.network().context("classifier is unavailable")?;

    let samples = SampleSet::scan(&self.data)?;

    let tasks: Vec<(usize, PathBuf)> = samples
      .classes
      .iter()
      .flat_map(|class| {
        class
          .images
          .iter()
          .take(self.count)
          .map(|path| (class.class, path.clone()))
      })
      .collect();

    if tasks.is_empty() {
      bail!("no sample images found under {}", self.data.display());
    }

    let progress_bar = ProgressBar::new(tasks.len() as u64);

    progress_bar.set_style(
      ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} Images")?
        .progress_chars("=>-"),
    );

    let results: Vec<(usize, PathBuf, Result<Prediction>)> = tasks
      .into_par_iter()
      .map(|(class, path)| {
        let outcome = Self::classify_file(&host, &path);

        progress_bar.inc(1);

        (class, path, outcome)
      })
      .collect();

    progress_bar.finish_and_clear();

    let total = results.len();
    let mut hits = 0;

    for (class, path, outcome) in results {
      let expected = CLASS_NAMES[class];

      match outcome {
        Ok(prediction) => {
          let mark = if prediction.label == expected {
            hits += 1;
            "  ok"
          } else {
            "MISS"
          };

          println!(
            "[{mark}] {} -> {} ({:.2}%), expected {expected}",
            path.display(),
            prediction.label,
            prediction.confidence,
          );
        }
        Err(error) => {
          println!("[ ERR] {}: {error}", path.display());
        }
      }
    }

    println!("Correct: {hits}/{total}");

    Ok(())
  }

  fn classify_file(host: &ModelHost, path: &Path) -> Result<Prediction> {
    let bytes = read(path)?;

    let tensor = preprocess(&decode_image(&bytes)?);

    Ok(Prediction::from_probabilities(host.classify(tensor.view())?))
  }
}
