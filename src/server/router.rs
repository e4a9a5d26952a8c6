use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, login, logout, signup},
        club::{create_club, get_club, get_club_events, get_clubs, get_tags},
        event::{create_event, get_event, get_events},
        group::{
            chat_link, complain, delete_entity, follow, get_members, leave, request_join,
            resolve_request, update_avatar,
        },
        user::{get_own_clubs, get_user_clubs, get_user_events},
    },
    model::group::{ClubKind, EventKind},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/user", get(get_user))
        .merge(club_router())
        .merge(event_router())
        .merge(user_router())
}

fn club_router() -> Router<AppState> {
    Router::new()
        .route("/api/clubs", post(create_club).get(get_clubs))
        .route("/api/clubs/tags", get(get_tags))
        .route("/api/clubs/{id}", get(get_club))
        .route("/api/clubs/{id}/events", get(get_club_events))
        .route("/api/clubs/{id}/participate", post(request_join::<ClubKind>))
        .route(
            "/api/clubs/{id}/participate/{uid}/{decision}",
            post(resolve_request::<ClubKind>),
        )
        .route("/api/clubs/{id}/subscribe", post(follow::<ClubKind>))
        .route("/api/clubs/{id}/members/{status}", get(get_members::<ClubKind>))
        .route("/api/clubs/{id}/leave", post(leave::<ClubKind>))
        .route("/api/clubs/{id}/delete", post(delete_entity::<ClubKind>))
        .route("/api/clubs/{id}/chat_link", get(chat_link::<ClubKind>))
        .route("/api/clubs/{id}/avatar", put(update_avatar::<ClubKind>))
        .route("/api/clubs/{id}/complain", post(complain::<ClubKind>))
}

fn event_router() -> Router<AppState> {
    Router::new()
        .route("/api/events", post(create_event).get(get_events))
        .route("/api/events/{id}", get(get_event))
        .route("/api/events/{id}/participate", post(request_join::<EventKind>))
        .route(
            "/api/events/{id}/participate/{uid}/{decision}",
            post(resolve_request::<EventKind>),
        )
        .route("/api/events/{id}/spectate", post(follow::<EventKind>))
        .route(
            "/api/events/{id}/members/{status}",
            get(get_members::<EventKind>),
        )
        .route("/api/events/{id}/leave", post(leave::<EventKind>))
        .route("/api/events/{id}/delete", post(delete_entity::<EventKind>))
        .route("/api/events/{id}/chat_link", get(chat_link::<EventKind>))
        .route("/api/events/{id}/avatar", put(update_avatar::<EventKind>))
        .route("/api/events/{id}/complain", post(complain::<EventKind>))
}

fn user_router() -> Router<AppState> {
    Router::new()
        .route("/api/users/own_clubs", get(get_own_clubs))
        .route("/api/users/{id}/clubs/{status}", get(get_user_clubs))
        .route("/api/users/{id}/events/{status}", get(get_user_events))
}
