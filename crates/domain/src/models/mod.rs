//! Resource models returned by the Elodan API.
//!
//! Wire names are camelCase; Mongo-style payloads may carry the id as
//! `_id`, which every model accepts via a serde alias.

mod billing;
mod chat;
mod generation;
mod user;

pub use billing::{Bundle, Offer, OfferTarget, OfferValidation, Plan, Subscription};
pub use chat::{ChatMessage, ChatRole, ChatSession, ChatTurn};
pub use generation::{
    EffectCategory, GenerationModel, ImageGeneration, Pagination, VideoEffectGeneration,
    VideoGeneration, VoiceGeneration, VoiceOption,
};
pub use user::User;
