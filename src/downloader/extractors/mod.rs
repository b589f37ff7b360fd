// Extractor backends
//
// yt-dlp is the only backend. It runs either as `python3 -m yt_dlp` or as the
// native binary; see `command` for how one is picked.

mod command;
mod traits;
mod ytdlp;

pub use command::YtDlpCommand;
pub use traits::{ExtractorConfig, ExtractorMode, DEFAULT_FORMAT};
pub use ytdlp::YtDlpExtractor;
