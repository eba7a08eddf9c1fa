use {super::*, app::App, classify::Classify, sample_test::SampleTest};

mod app;
mod classify;
mod sample_test;

#[derive(Debug, Parser)]
pub(crate) enum Subcommand {
  #[clap(name = "app", about = "Run the interactive classifier application")]
  App(App),
  #[clap(name = "classify", about = "Classify a single image file")]
  Classify(Classify),
  #[clap(
    name = "sample-test",
    about = "Classify sample images and report how many were right"
  )]
  SampleTest(SampleTest),
}

impl Subcommand {
  pub(crate) fn run(self) -> Result {
    match self {
      Self::App(app) => app.run(),
      Self::Classify(classify) => classify.run(),
      Self::SampleTest(sample_test) => sample_test.run(),
    }
  }
}
