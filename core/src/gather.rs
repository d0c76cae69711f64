use std::fs::{self, File};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::codec::Codec;
use crate::error::ConvertError;

/// Collects the files under a directory whose contents match the source
/// codec's signatures. Extensions play no role; detection is by content.
pub struct Gatherer<'a> {
    pub decoder: &'a dyn Codec,
}

impl Gatherer<'_> {
    /// Walk `root` depth-first in lexical order and return every regular
    /// file the source codec recognizes, in walk order.
    ///
    /// A missing root or an unopenable candidate aborts the whole gather;
    /// a directory with no matching files yields an empty list.
    pub fn gather(&self, root: &Path) -> Result<Vec<PathBuf>, ConvertError> {
        fs::symlink_metadata(root).map_err(|e| ConvertError::ReadFile {
            path: root.to_path_buf(),
            source: e,
        })?;

        let mut found = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();

            let mut fp = File::open(&path).map_err(|e| ConvertError::ReadFile {
                path: path.clone(),
                source: e,
            })?;

            match self.decoder.is_decodable(&mut fp) {
                Ok(true) => found.push(path),
                Ok(false) => {}
                // Shorter than the signature, cannot be a match.
                Err(ConvertError::UnexpectedEof(_)) => {}
                Err(e) => return Err(e),
            }
        }

        log::debug!("gathered {} file(s) under {}", found.len(), root.display());

        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use image::ImageFormat;

    use super::*;
    use crate::codec::{Gif, Jpeg, Png};
    use crate::testutil;

    fn write(dir: &Path, name: &str, data: &[u8]) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, data).unwrap();
    }

    fn populate(root: &Path) {
        write(root, "jpeg/sample1.jpg", &testutil::encoded(ImageFormat::Jpeg));
        write(root, "jpeg/sample2.jpg", &testutil::encoded(ImageFormat::Jpeg));
        write(root, "jpeg/sample3.jpeg", &testutil::encoded(ImageFormat::Jpeg));
        write(root, "png/sample1.png", &testutil::encoded(ImageFormat::Png));
        write(root, "png/sample2.png", &testutil::encoded(ImageFormat::Png));
        write(root, "gif/sample1.gif", &testutil::encoded(ImageFormat::Gif));
    }

    #[test]
    fn gathers_each_format_in_lexical_walk_order() {
        let tmp = tempfile::tempdir().unwrap();
        populate(tmp.path());

        let cases: [(&dyn Codec, &[&str]); 3] = [
            (
                &Jpeg::default(),
                &["jpeg/sample1.jpg", "jpeg/sample2.jpg", "jpeg/sample3.jpeg"],
            ),
            (&Png::default(), &["png/sample1.png", "png/sample2.png"]),
            (&Gif::default(), &["gif/sample1.gif"]),
        ];

        for (decoder, expected) in cases {
            let gatherer = Gatherer { decoder };
            let found = gatherer.gather(tmp.path()).unwrap();
            let expected: Vec<_> = expected.iter().map(|p| tmp.path().join(p)).collect();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn detects_by_content_not_extension() {
        let tmp = tempfile::tempdir().unwrap();
        // JPEG content mislabeled as PNG.
        write(
            tmp.path(),
            "disguised.png",
            &testutil::encoded(ImageFormat::Jpeg),
        );
        write(tmp.path(), "real.png", &testutil::encoded(ImageFormat::Png));

        let gatherer = Gatherer {
            decoder: &Jpeg::default(),
        };
        let found = gatherer.gather(tmp.path()).unwrap();
        assert_eq!(found, vec![tmp.path().join("disguised.png")]);
    }

    #[test]
    fn skips_files_shorter_than_the_signature() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "tiny.jpg", b"\xFF");
        write(tmp.path(), "empty.jpg", b"");
        write(tmp.path(), "sample.jpg", &testutil::encoded(ImageFormat::Jpeg));

        let gatherer = Gatherer {
            decoder: &Jpeg::default(),
        };
        let found = gatherer.gather(tmp.path()).unwrap();
        assert_eq!(found, vec![tmp.path().join("sample.jpg")]);
    }

    #[cfg(unix)]
    #[test]
    fn unopenable_candidate_aborts_the_gather() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "sample.jpg", &testutil::encoded(ImageFormat::Jpeg));

        let locked = tmp.path().join("unopenable.jpg");
        write(tmp.path(), "unopenable.jpg", &testutil::encoded(ImageFormat::Jpeg));
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Root ignores file modes; nothing to exercise in that case.
        if fs::File::open(&locked).is_ok() {
            return;
        }

        let gatherer = Gatherer {
            decoder: &Jpeg::default(),
        };
        // No partial list: sample.jpg sorts before the unopenable file and
        // is already matched when the open failure aborts the walk.
        let err = gatherer.gather(tmp.path()).unwrap_err();
        match err {
            ConvertError::ReadFile { path, .. } => assert_eq!(path, locked),
            other => panic!("expected ReadFile, got {other}"),
        }
    }

    #[test]
    fn empty_directory_yields_empty_list() {
        let tmp = tempfile::tempdir().unwrap();
        let gatherer = Gatherer {
            decoder: &Jpeg::default(),
        };
        assert!(gatherer.gather(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_root_is_an_error() {
        let gatherer = Gatherer {
            decoder: &Jpeg::default(),
        };
        let err = gatherer.gather(Path::new("nonexistent_path")).unwrap_err();
        assert!(matches!(err, ConvertError::ReadFile { .. }));
    }
}
