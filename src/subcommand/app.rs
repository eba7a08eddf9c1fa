use super::*;

#[derive(Debug, Parser)]
pub(crate) struct App {
  #[clap(short, long, default_value = "models/fish-classifier.json")]
  model: PathBuf,
  #[clap(short, long, help = "Sample image directory to browse in the app")]
  data: Option<PathBuf>,
}

impl App {
  pub(crate) fn run(self) -> Result {
    let samples = match &self.data {
      Some(data) => Some(SampleSet::scan(data)?),
      None => None,
    };

    let app = Interface::new(ModelHost::new(self.model), samples);

    let native_options = NativeOptions {
      centered: true,
      hardware_acceleration: HardwareAcceleration::Preferred,
      viewport: egui::ViewportBuilder {
        inner_size: Some(egui::vec2(960.0, 640.0)),
        ..Default::default()
      },
      ..Default::default()
    };

    eframe::run_native(
      env!("CARGO_PKG_NAME"),
      native_options,
      Box::new(|_| Ok(Box::new(app))),
    )
    .unwrap();

    Ok(())
  }
}
