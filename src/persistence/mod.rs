//! Frame persistence
//!
//! Every frame is its own `frameNNNNN.jgr` file. A frame is rendered in
//! memory, written to `frameNNNNN.jgr.tmp` and renamed into place, so a
//! visible frame file is always complete.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MetaballsError, Result};
use crate::frame::Frame;
use crate::renderer::render_frame;

/// Output directory for a run's frames
#[derive(Debug, Clone)]
pub struct FrameStore {
    dir: PathBuf,
}

impl FrameStore {
    /// Open `dir`, creating it (and parents) when missing
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| MetaballsError::io(&dir, e))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for a frame: `frame00042.jgr`
    pub fn file_name(index: u32) -> String {
        format!("frame{index:05}.jgr")
    }

    pub fn path_for(&self, index: u32) -> PathBuf {
        self.dir.join(Self::file_name(index))
    }

    /// Write one frame atomically, returning its final path
    pub fn write(&self, frame: &Frame) -> Result<PathBuf> {
        let path = self.path_for(frame.index);
        let tmp = path.with_extension("jgr.tmp");

        let script = render_frame(frame);
        if let Err(e) = fs::write(&tmp, script.as_bytes()) {
            let _ = fs::remove_file(&tmp);
            return Err(MetaballsError::io(&tmp, e));
        }
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(MetaballsError::io(&path, e));
        }

        log::debug!("Wrote {} ({} bytes)", path.display(), script.len());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FrameDriver, render_run};
    use crate::settings::Settings;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "metaballs-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_names_are_zero_padded() {
        assert_eq!(FrameStore::file_name(0), "frame00000.jgr");
        assert_eq!(FrameStore::file_name(42), "frame00042.jgr");
        assert_eq!(FrameStore::file_name(123456), "frame123456.jgr");
    }

    #[test]
    fn test_write_frame_leaves_no_tmp() {
        let dir = scratch_dir("store");
        let store = FrameStore::create(dir.join("nested")).unwrap();

        let settings = Settings {
            frames: 2,
            ..Default::default()
        };
        for frame in FrameDriver::from_settings(&settings, 9) {
            let path = store.write(&frame).unwrap();
            let text = fs::read_to_string(&path).unwrap();
            assert_eq!(text, render_frame(&frame));
        }

        let mut names: Vec<String> = fs::read_dir(store.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["frame00000.jgr", "frame00001.jgr"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_failed_rename_removes_tmp() {
        let dir = scratch_dir("blocked");
        let store = FrameStore::create(&dir).unwrap();

        // A non-empty directory squatting on the frame path blocks the rename
        let blocker = store.path_for(0);
        fs::create_dir_all(blocker.join("x")).unwrap();

        let settings = Settings {
            frames: 1,
            ..Default::default()
        };
        let frame = FrameDriver::from_settings(&settings, 3)
            .next()
            .expect("one frame");
        assert!(matches!(
            store.write(&frame),
            Err(MetaballsError::Io { .. })
        ));
        assert!(!blocker.with_extension("jgr.tmp").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_run_is_reproducible() {
        let settings = Settings {
            frames: 4,
            seed: Some(77),
            ..Default::default()
        };

        let dir_a = scratch_dir("run-a");
        let dir_b = scratch_dir("run-b");
        let store_a = FrameStore::create(&dir_a).unwrap();
        let store_b = FrameStore::create(&dir_b).unwrap();

        let sa = render_run(&settings, 77, &store_a).unwrap();
        let sb = render_run(&settings, 77, &store_b).unwrap();
        assert_eq!(sa, sb);
        assert_eq!(sa.frames, 4);
        assert_eq!(sa.circles, 4 * 6);

        for i in 0..4 {
            let a = fs::read(store_a.path_for(i)).unwrap();
            let b = fs::read(store_b.path_for(i)).unwrap();
            assert_eq!(a, b, "frame {i} differs");
        }

        fs::remove_dir_all(&dir_a).unwrap();
        fs::remove_dir_all(&dir_b).unwrap();
    }

    #[test]
    fn test_render_run_rejects_invalid_settings() {
        let settings = Settings {
            frames: 0,
            ..Default::default()
        };
        let dir = scratch_dir("invalid");
        let store = FrameStore::create(&dir).unwrap();
        assert!(matches!(
            render_run(&settings, 1, &store),
            Err(MetaballsError::InvalidSettings(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
