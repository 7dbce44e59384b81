// Client module - outbound email delivery
pub mod email;

pub use email::{EmailError, EmailJsClient, EmailSender, LogOnlySender, sender_from_config};
