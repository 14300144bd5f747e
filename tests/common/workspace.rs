//! Scratch directory with helpers for laying out input trees.

use image::RgbImage;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory that is removed when dropped
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write an image, creating parent directories
    pub fn write_image(&self, relative: &str, image: &RgbImage) -> PathBuf {
        let path = self.path(relative);
        create_parent(&path);
        image.save(&path).expect("Failed to write image");
        path
    }

    /// Write an nfp (or any text) file, creating parent directories
    pub fn write_text(&self, relative: &str, text: &str) -> PathBuf {
        let path = self.path(relative);
        create_parent(&path);
        std::fs::write(&path, text).expect("Failed to write text file");
        path
    }

    pub fn read_text(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("Failed to read text file")
    }

    pub fn read_image(&self, relative: &str) -> RgbImage {
        image::open(self.path(relative))
            .expect("Failed to open image")
            .to_rgb8()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }
}

fn create_parent(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
}
