use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use log::debug;
use plotsave_encode::DownloadSink;
use plotsave_encode::ExportFile;

/// Saves exported files into a directory, replacing files of the same name.
pub(crate) struct DirectorySink {
    directory: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectorySink {
    pub(crate) fn new(directory: PathBuf) -> DirectorySink {
        Self {
            directory,
            written: Vec::new(),
        }
    }

    /// The paths of the files saved so far.
    pub(crate) fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path_of(&self, file: &ExportFile) -> PathBuf {
        self.directory.join(Path::new(file.filename))
    }
}

impl DownloadSink for DirectorySink {
    fn download(&mut self, files: Vec<ExportFile>) -> io::Result<()> {
        for file in files {
            let path = self.path_of(&file);
            fs::write(&path, &file.content)?;

            debug!("saved {} ({}) to `{}`", file.filename, file.mime, path.display());
            self.written.push(path);
        }

        Ok(())
    }
}
