//! Endpoint catalog for the Elodan REST API.
//!
//! Paths are relative to the configured base URL. Parameterized paths are
//! functions; everything else is a constant. The catalog is consumed by
//! the service wrappers; the gateway itself only knows about the refresh
//! endpoint and the refresh-exempt fragments.

#![allow(missing_docs)]

/// Authentication endpoints.
pub mod auth {
    pub const REGISTER: &str = "/auth/register";
    pub const LOGIN: &str = "/auth/login";
    pub const LOGOUT: &str = "/auth/logout";
    pub const LOGOUT_ALL: &str = "/auth/logout-all";
    pub const REFRESH: &str = "/auth/refresh";
    pub const GOOGLE: &str = "/auth/google";
    pub const RESET_PASSWORD_REQUEST: &str = "/auth/reset-password/request";
    pub const RESET_PASSWORD_CONFIRM: &str = "/auth/reset-password/confirm";
    pub const ME: &str = "/auth/me";
}

/// User profile endpoints.
pub mod users {
    pub const PROFILE: &str = "/users/me";
}

/// Subscription plan endpoints.
pub mod plans {
    pub const ALL: &str = "/plans";

    /// Path for a single plan.
    #[must_use]
    pub fn one(plan_id: &str) -> String {
        format!("/plans/{plan_id}")
    }
}

/// Subscription endpoints.
pub mod subscriptions {
    pub const SUBSCRIBE: &str = "/subscriptions/subscribe";
    pub const CURRENT: &str = "/subscriptions/current";
    pub const CHANGE_PLAN: &str = "/subscriptions/change-plan";
}

/// Credit bundle endpoints.
pub mod bundles {
    pub const ALL: &str = "/bundles";
    pub const PURCHASE: &str = "/bundles/purchase";
}

/// Chat endpoints.
pub mod chat {
    pub const MODELS: &str = "/chat/models";
    pub const SESSIONS: &str = "/chat/sessions";

    /// Path for a single chat session.
    #[must_use]
    pub fn session(session_id: &str) -> String {
        format!("/chat/sessions/{session_id}")
    }

    /// Path for a session's message feed.
    #[must_use]
    pub fn messages(session_id: &str) -> String {
        format!("/chat/{session_id}/messages")
    }
}

/// Image generation endpoints.
pub mod image {
    /// Model listing; carries its category filter in the path.
    pub const MODELS: &str = "/ai/models?category=image";
    pub const GENERATE: &str = "/image-generation";
    pub const IMPROVE_PROMPT: &str = "/image-generation/improve-prompt";
    pub const HISTORY: &str = "/image-generation";

    /// Path for saving a generation to the gallery.
    #[must_use]
    pub fn save(generation_id: &str) -> String {
        format!("/image-generation/{generation_id}/save")
    }

    /// Path for deleting a generation.
    #[must_use]
    pub fn delete(generation_id: &str) -> String {
        format!("/image-generation/{generation_id}")
    }
}

/// Video generation endpoints.
pub mod video {
    pub const MODELS: &str = "/video/models";
    pub const IMPROVE_PROMPT: &str = "/video/improve-prompt";
    pub const TEXT_TO_VIDEO: &str = "/video/text-to-video";
    pub const IMAGE_TO_VIDEO: &str = "/video/image-to-video";
    pub const SURPRISE_ME: &str = "/video/surprise-me";
    pub const HISTORY: &str = "/video/history";

    /// Path for saving a generation to the gallery.
    #[must_use]
    pub fn save(generation_id: &str) -> String {
        format!("/video/{generation_id}/save")
    }
}

/// Video effect template endpoints.
pub mod video_effects {
    pub const MODELS: &str = "/video-effects/available-models";
    pub const CATEGORIES: &str = "/video-effects/categories";
    pub const GENERATE: &str = "/video-effects/generate";
    pub const HISTORY: &str = "/video-effects/history";

    /// Path for saving an effect to the gallery.
    #[must_use]
    pub fn save(effect_id: &str) -> String {
        format!("/video-effects/{effect_id}/save")
    }

    /// Path for deleting an effect.
    #[must_use]
    pub fn delete(effect_id: &str) -> String {
        format!("/video-effects/{effect_id}")
    }
}

/// Voice generation endpoints.
pub mod voice {
    pub const MODELS: &str = "/voice/models";
    pub const VOICES: &str = "/voice/voices";
    pub const GENERATE: &str = "/voice/generate";
    pub const HISTORY: &str = "/voice/history";

    /// Path for saving a clip to the gallery.
    #[must_use]
    pub fn save(generation_id: &str) -> String {
        format!("/voice/save/{generation_id}")
    }

    /// Path for deleting a clip.
    #[must_use]
    pub fn delete(generation_id: &str) -> String {
        format!("/voice/{generation_id}")
    }
}

/// Media library endpoints.
pub mod media {
    /// Path for deleting a media item.
    #[must_use]
    pub fn delete(media_id: &str) -> String {
        format!("/media/{media_id}")
    }
}

/// Promotional offer endpoints.
pub mod offers {
    pub const ALL: &str = "/offers";
    pub const LATEST: &str = "/offers/latest";
    pub const VALIDATE: &str = "/offers/validate";
}

/// Returns true for endpoints whose 401 responses must never trigger a
/// session refresh: a 401 from login is a credential error, and a 401
/// from refresh means the session is already gone.
#[must_use]
pub fn is_refresh_exempt(endpoint: &str) -> bool {
    endpoint.contains(auth::LOGIN) || endpoint.contains(auth::REFRESH)
}
