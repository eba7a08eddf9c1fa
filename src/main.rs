use {
  crate::{
    app::Interface,
    arguments::Arguments,
    classes::{class_for_directory, Prediction, CLASS_NAMES},
    config::*,
    dataset::SampleSet,
    error::ClassifyError,
    math::*,
    model::ModelHost,
    network::Network,
    preprocess::{decode_image, preprocess, TENSOR_LEN},
    subcommand::Subcommand,
  },
  anyhow::{anyhow, bail, Context},
  clap::Parser,
  eframe::{egui, HardwareAcceleration, NativeOptions},
  image::DynamicImage,
  indicatif::{ProgressBar, ProgressStyle},
  ndarray::{Array1, Array2, Array4, ArrayView, ArrayView1, ArrayView4},
  rayon::prelude::*,
  serde::{Deserialize, Serialize},
  std::{
    fs::{self, read, File},
    path::{Path, PathBuf},
    process,
    sync::OnceLock,
  },
  thiserror::Error,
  tracing::{info, warn},
};

mod app;
mod arguments;
mod classes;
mod config;
mod dataset;
mod error;
mod math;
mod model;
mod network;
mod preprocess;
mod subcommand;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  tracing_subscriber::fmt::init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
