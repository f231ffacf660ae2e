pub mod client;
pub mod commands;
pub mod history;
pub mod markup;
pub mod stdio;
pub mod view;

pub use client::{ChatClient, ClientConfig};
pub use view::{ChatForm, ChatView, DownloadLink, ViewStatus};
