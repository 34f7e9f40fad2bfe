//! Recording dialog shown after a screencast finishes.
//!
//! Three steps are visible at once: preview the recording, export it to
//! disk, and a closing hint. Media handling (turning the byte blob into
//! a playable source, saving a file) goes through the injected
//! [`MediaEnv`] capability so the component stays independent of any
//! platform download API.

use std::io;
use std::path::PathBuf;

use plinth_dom::{Node, Role};

use crate::Widget;

/// Platform capability for media previews and file export.
pub trait MediaEnv {
    /// Derive a playable source reference from raw video bytes.
    fn object_url(&mut self, data: &[u8]) -> io::Result<String>;

    /// Persist `data` under `file_name` as a user-initiated save.
    fn save_file(&mut self, file_name: &str, data: &[u8]) -> io::Result<()>;
}

/// In-memory environment for tests: fabricates source urls and records
/// every save.
#[derive(Debug, Default)]
pub struct MemoryMediaEnv {
    /// Every `(file_name, data)` pair saved, oldest first.
    pub saved: Vec<(String, Vec<u8>)>,
    urls: u64,
}

impl MemoryMediaEnv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MediaEnv for MemoryMediaEnv {
    fn object_url(&mut self, _data: &[u8]) -> io::Result<String> {
        self.urls += 1;
        Ok(format!("mem://video/{}", self.urls))
    }

    fn save_file(&mut self, file_name: &str, data: &[u8]) -> io::Result<()> {
        self.saved.push((file_name.to_owned(), data.to_vec()));
        Ok(())
    }
}

/// Environment writing into a directory on the local disk.
#[derive(Debug)]
pub struct DiskMediaEnv {
    dir: PathBuf,
    previews: u64,
}

impl DiskMediaEnv {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            previews: 0,
        }
    }
}

impl MediaEnv for DiskMediaEnv {
    fn object_url(&mut self, data: &[u8]) -> io::Result<String> {
        // Per-call counter so dialogs sharing one directory never
        // clobber each other's preview.
        self.previews += 1;
        let path = self.dir.join(format!("preview-{}.webm", self.previews));
        std::fs::write(&path, data)?;
        Ok(format!("file://{}", path.display()))
    }

    fn save_file(&mut self, file_name: &str, data: &[u8]) -> io::Result<()> {
        std::fs::write(self.dir.join(file_name), data)
    }
}

/// Modal dialog offering preview, download and sharing of a recorded
/// video.
#[derive(Debug)]
pub struct VideoRecordedDialog {
    file_name: String,
    video: Vec<u8>,
    source: String,
    closed: bool,
}

impl VideoRecordedDialog {
    /// Build the dialog, deriving the preview source from the blob.
    ///
    /// The blob is assumed valid (a caller precondition); the only
    /// error path is the environment failing to materialize a source.
    pub fn new(
        file_name: impl Into<String>,
        video: Vec<u8>,
        env: &mut dyn MediaEnv,
    ) -> io::Result<Self> {
        let source = env.object_url(&video)?;
        Ok(Self {
            file_name: file_name.into(),
            video,
            source,
            closed: false,
        })
    }

    /// The derived preview source reference.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Close the dialog. Idempotent: closing an already closed dialog
    /// is a no-op, so callers may coalesce multiple invocations.
    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Export the recording as `<file_name>.webm` and close the dialog.
    pub fn handle_download(&mut self, env: &mut dyn MediaEnv) -> io::Result<()> {
        env.save_file(&format!("{}.webm", self.file_name), &self.video)?;
        self.close();
        Ok(())
    }

    fn step(number: u8, body: Node) -> Node {
        Node::new(Role::Container)
            .test_id("dialog-step")
            .attr("step", number.to_string())
            .child(body)
    }
}

impl Widget for VideoRecordedDialog {
    fn render(&self) -> Node {
        Node::new(Role::Dialog)
            .test_id("video-recorded-dialog")
            .attr("title", "Next steps")
            .child(Self::step(
                1,
                Node::new(Role::Container)
                    .child(Node::new(Role::Text).text("Preview your video below:"))
                    .child(
                        Node::new(Role::Video)
                            .test_id("recorded-video")
                            .attr("src", &self.source)
                            .attr("controls", "true"),
                    ),
            ))
            .child(Self::step(
                2,
                Node::new(Role::Container)
                    .child(
                        Node::new(Role::Button)
                            .test_id("save-video-button")
                            .attr("kind", "secondary")
                            .text("Save video to disk"),
                    )
                    .child(
                        Node::new(Role::Text)
                            .test_id("video-format-instructions")
                            .text(
                                "This video is encoded in the WebM format, which is only \
                                 supported by newer video players. You can also play it by \
                                 dragging the file directly into your browser.",
                            )
                            .child(
                                Node::new(Role::Link)
                                    .attr("href", "https://www.webmproject.org/")
                                    .text("WebM format"),
                            ),
                    ),
            ))
            .child(Self::step(
                3,
                Node::new(Role::Text).text(
                    "Share your video with the world on Twitter, LinkedIn, YouTube, \
                     or just plain email! 😀",
                ),
            ))
    }
}
