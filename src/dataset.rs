use super::*;

/// Sample images laid out one class per subdirectory, as shipped with the
/// training data. Used for the gallery and manual spot checks only; the
/// classifier itself never reads it.
#[derive(Debug)]
pub struct SampleSet {
  pub(crate) classes: Vec<SampleClass>,
}

#[derive(Debug)]
pub(crate) struct SampleClass {
  pub(crate) class: usize,
  pub(crate) images: Vec<PathBuf>,
}

impl SampleSet {
  pub(crate) fn scan(root: &Path) -> Result<SampleSet> {
    let mut directories = Vec::new();

    let entries = fs::read_dir(root).with_context(|| {
      format!("failed to read sample directory {}", root.display())
    })?;

    for entry in entries {
      let path = entry?.path();

      if path.is_dir() {
        directories.push(path);
      }
    }

    directories.sort();

    let mut classes = Vec::new();

    for directory in directories {
      let name = directory
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

      let Some(class) = class_for_directory(&name) else {
        warn!(
          directory = %directory.display(),
          "skipping directory that matches no class"
        );
        continue;
      };

      let mut images = Vec::new();

      for entry in fs::read_dir(&directory)? {
        let path = entry?.path();

        if is_image_file(&path) {
          images.push(path);
        }
      }

      images.sort();

      classes.push(SampleClass { class, images });
    }

    Ok(SampleSet { classes })
  }
}

fn is_image_file(path: &Path) -> bool {
  path.is_file()
    && path
      .extension()
      .map(|extension| {
        let extension = extension.to_string_lossy().to_ascii_lowercase();
        matches!(extension.as_str(), "jpg" | "jpeg" | "png")
      })
      .unwrap_or(false)
}

#[cfg(test)]
mod tests {
  use {super::*, tempdir::TempDir};

  #[test]
  fn scan_collects_images_per_class() {
    let dir = TempDir::new("samples").unwrap();

    let trout = dir.path().join("fish sea_food trout");
    fs::create_dir(&trout).unwrap();
    fs::write(trout.join("a.jpg"), b"x").unwrap();
    fs::write(trout.join("b.PNG"), b"x").unwrap();
    fs::write(trout.join("notes.txt"), b"x").unwrap();

    let shrimp = dir.path().join("fish sea_food shrimp");
    fs::create_dir(&shrimp).unwrap();
    fs::write(shrimp.join("c.jpeg"), b"x").unwrap();

    fs::create_dir(dir.path().join("thumbnails")).unwrap();

    let samples = SampleSet::scan(dir.path()).unwrap();

    assert_eq!(samples.classes.len(), 2);

    assert_eq!(samples.classes[0].class, 6);
    assert_eq!(samples.classes[0].images.len(), 1);

    assert_eq!(samples.classes[1].class, 8);
    assert_eq!(samples.classes[1].images.len(), 2);
  }

  #[test]
  fn scan_fails_on_missing_directory() {
    assert!(SampleSet::scan(Path::new("no/such/directory")).is_err());
  }
}
