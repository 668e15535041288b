pub mod channel_card;
pub mod chat_panel;
