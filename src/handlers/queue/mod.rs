pub mod dispatch;
pub mod get_count;
pub mod receive_message;
pub mod send_message;
