//! Message entity <-> model mapper

use board_core::entities::Message;

use crate::models::MessageModel;

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id.to_string(),
            text: model.message_text,
            user_id: model.user_id,
            created_at: model.created_at,
        }
    }
}
