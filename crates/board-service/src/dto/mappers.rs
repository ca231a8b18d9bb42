//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use board_core::entities::{Message, Reaction};

use super::responses::{format_timestamp, ListMessagesResponse, MessageResponse, ReactionResponse};

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.clone(),
            text: message.text.clone(),
            user_id: message.user_id.clone(),
            created_at: format_timestamp(message.created_at),
        }
    }
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self::from(&message)
    }
}

impl From<Vec<Message>> for ListMessagesResponse {
    fn from(messages: Vec<Message>) -> Self {
        Self {
            messages: messages.iter().map(MessageResponse::from).collect(),
        }
    }
}

impl From<&Reaction> for ReactionResponse {
    fn from(reaction: &Reaction) -> Self {
        Self {
            id: reaction.id.clone(),
            message_id: reaction.message_id.clone(),
            kind: reaction.kind.clone(),
            score: reaction.score,
            user_id: reaction.user_id.clone(),
            created_at: format_timestamp(reaction.created_at),
        }
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self::from(&reaction)
    }
}
