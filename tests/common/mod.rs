use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::write::FileOptions;

/// Write `members` (name, contents) into a new zip archive at `dir/name`.
pub fn write_zip(dir: &Path, name: &str, members: &[(&str, &str)]) -> PathBuf {
    let path = dir.join(name);
    let mut zw = zip::ZipWriter::new(File::create(&path).unwrap());
    for (member, contents) in members {
        zw.start_file(*member, FileOptions::default()).unwrap();
        zw.write_all(contents.as_bytes()).unwrap();
    }
    zw.finish().unwrap();
    path
}
