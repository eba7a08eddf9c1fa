use super::*;

const PREVIEW_SIZE: u32 = 320;
const GALLERY_LIMIT: usize = 8;

pub struct Interface {
  host: ModelHost,
  samples: Option<SampleSet>,
  path_input: String,
  image: Option<LoadedImage>,
  prediction: Option<Prediction>,
  error: Option<String>,
  model_failed: bool,
}

struct LoadedImage {
  name: String,
  texture: egui::TextureHandle,
  tensor: Array4<f32>,
}

impl eframe::App for Interface {
  fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
    let dropped = ctx.input(|input| input.raw.dropped_files.clone());

    if let Some(file) = dropped.into_iter().next() {
      if let Some(path) = file.path {
        self.path_input = path.display().to_string();
        self.load_from_path(ctx, &path);
      } else if let Some(bytes) = file.bytes {
        self.load_image(ctx, file.name, &bytes);
      }
    }

    egui::CentralPanel::default().show(ctx, |ui| {
      self.ui(ui);
    });
  }
}

impl Interface {
  pub fn new(host: ModelHost, samples: Option<SampleSet>) -> Self {
    Self {
      host,
      samples,
      path_input: String::new(),
      image: None,
      prediction: None,
      error: None,
      model_failed: false,
    }
  }

  fn load_from_path(&mut self, ctx: &egui::Context, path: &Path) {
    match read(path) {
      Ok(bytes) => {
        self.load_image(ctx, path.display().to_string(), &bytes);
      }
      Err(error) => {
        self.error =
          Some(format!("failed to read {}: {error}", path.display()));
      }
    }
  }

  fn load_image(&mut self, ctx: &egui::Context, name: String, bytes: &[u8]) {
    self.prediction = None;

    match decode_image(bytes) {
      Ok(decoded) => {
        let preview = decoded.thumbnail(PREVIEW_SIZE, PREVIEW_SIZE).to_rgb8();

        let size = [preview.width() as usize, preview.height() as usize];

        let texture = ctx.load_texture(
          name.clone(),
          egui::ColorImage::from_rgb(size, preview.as_raw()),
          egui::TextureOptions::LINEAR,
        );

        self.image = Some(LoadedImage {
          name,
          texture,
          tensor: preprocess(&decoded),
        });

        self.error = None;
      }
      Err(error) => {
        self.image = None;
        self.error = Some(error.to_string());
      }
    }
  }

  fn classify(&mut self) {
    let Some(image) = &self.image else {
      return;
    };

    match self.host.classify(image.tensor.view()) {
      Ok(probabilities) => {
        self.prediction = Some(Prediction::from_probabilities(probabilities));
        self.error = None;
      }
      Err(error) => {
        if matches!(error, ClassifyError::ModelUnavailable(_)) {
          self.model_failed = true;
        }

        self.prediction = None;
        self.error = Some(error.to_string());
      }
    }
  }

  pub fn ui(&mut self, ui: &mut egui::Ui) {
    ui.heading("Fish species classifier");
    ui.label("Drop a fish photo onto the window or enter a path below.");

    ui.horizontal(|ui| {
      ui.text_edit_singleline(&mut self.path_input);

      if ui.button("Load").clicked() {
        let path = PathBuf::from(self.path_input.trim());
        let ctx = ui.ctx().clone();
        self.load_from_path(&ctx, &path);
      }
    });

    let mut classify_clicked = false;

    if let Some(image) = &self.image {
      ui.separator();

      ui.add(
        egui::Image::new(&image.texture)
          .max_size(egui::vec2(PREVIEW_SIZE as f32, PREVIEW_SIZE as f32)),
      );

      ui.label(&image.name);

      classify_clicked = ui
        .add_enabled(!self.model_failed, egui::Button::new("Classify"))
        .clicked();
    }

    if classify_clicked {
      self.classify();
    }

    if let Some(prediction) = &self.prediction {
      ui.separator();

      ui.heading(format!(
        "{} ({:.2}%)",
        prediction.label, prediction.confidence
      ));

      for (name, &probability) in
        CLASS_NAMES.iter().zip(prediction.probabilities.iter())
      {
        ui.add(
          egui::ProgressBar::new(probability)
            .desired_width(360.0)
            .text(format!("{name}: {:.1}%", probability * 100.0)),
        );
      }
    }

    if let Some(error) = &self.error {
      ui.separator();
      ui.colored_label(egui::Color32::RED, error.as_str());
    }

    ui.separator();

    ui.collapsing("Species catalog", |ui| {
      for name in CLASS_NAMES {
        ui.label(name);
      }
    });

    let mut gallery_pick = None;

    if let Some(samples) = &self.samples {
      ui.collapsing("Sample gallery", |ui| {
        for class in &samples.classes {
          ui.collapsing(CLASS_NAMES[class.class], |ui| {
            for path in class.images.iter().take(GALLERY_LIMIT) {
              let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default();

              if ui.button(name).clicked() {
                gallery_pick = Some(path.clone());
              }
            }
          });
        }
      });
    }

    if let Some(path) = gallery_pick {
      self.path_input = path.display().to_string();
      let ctx = ui.ctx().clone();
      self.load_from_path(&ctx, &path);
    }
  }
}
