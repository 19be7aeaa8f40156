pub mod clipboard;
pub mod report_file;

pub use clipboard::MemoryClipboard;
pub use report_file::FileReportAdapter;
