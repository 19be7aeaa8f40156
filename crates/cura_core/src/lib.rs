pub mod booking;
pub mod directory;
pub mod domain;
pub mod engine;
pub mod pathway;
pub mod ports;
pub mod summary;

pub use booking::{book, Booking, BookingError};
pub use directory::{find_doctor, list_doctors};
pub use domain::{
    Author, BookingRecord, ConversationState, DoctorRecord, Message, Notice, NoticeLevel, Step,
};
pub use engine::{advance, EngineReply};
pub use pathway::{Pathway, ReplyKind};
pub use ports::{ClipboardService, PortError, PortResult, ReportStore};
pub use summary::{format_report, report_file_name};
