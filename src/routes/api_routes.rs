/**
 * API Route Table
 *
 * Adds every REST endpoint to the router.
 *
 * # Routes
 *
 * ## Authentication / Profiles
 * - `POST /register` - user registration (public)
 * - `POST /login` - user login (public)
 * - `GET /me` - current user (bearer)
 * - `PUT /profile` - partial profile update (bearer)
 * - `GET /users` - user search by city/state/country/college (public)
 *
 * ## Connections
 * - `POST /connect/{user_id}` - send a connection request (bearer)
 * - `GET /connections` - list own requests, `?status=` filter (bearer)
 * - `PUT /connect/accept/{id}` - accept, receiver only (bearer)
 * - `DELETE /connect/reject/{id}` - reject, receiver only (bearer)
 * - `GET /friends` - accepted counterparts (bearer)
 *
 * ## Messaging / Blocks
 * - `POST /message/{user_id}` - send a DM, block-gated (bearer)
 * - `GET /chat/{user_id}` - conversation with a user (bearer)
 * - `GET /chats` - conversation peers (bearer)
 * - `POST /block/{user_id}` - block a user (bearer)
 *
 * ## Rooms
 * - `POST /rooms`, `POST /rooms/{id}/join`, `GET /rooms`,
 *   `POST /rooms/{id}/message`, `GET /rooms/{id}/messages` (bearer)
 *
 * Protected routes declare the `AuthUser` extractor in their handler
 * signature; there is no ad hoc header parsing anywhere else.
 */

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::auth::{get_me, login, register, search_users, update_profile};
use crate::blocks::block_user;
use crate::connections::{
    accept_connection_request, list_connections, list_friends, reject_connection_request,
    send_connection_request,
};
use crate::messaging::{list_conversation, list_conversation_peers, send_message};
use crate::rooms::{create_room, join_room, list_room_messages, list_rooms, post_room_message};
use crate::server::state::AppState;

/// Configure all API routes.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication and profiles
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(get_me))
        .route("/profile", put(update_profile))
        .route("/users", get(search_users))
        // Connection requests
        .route("/connect/{user_id}", post(send_connection_request))
        .route("/connections", get(list_connections))
        .route("/connect/accept/{id}", put(accept_connection_request))
        .route("/connect/reject/{id}", delete(reject_connection_request))
        .route("/friends", get(list_friends))
        // Messaging and blocks
        .route("/message/{user_id}", post(send_message))
        .route("/chat/{user_id}", get(list_conversation))
        .route("/chats", get(list_conversation_peers))
        .route("/block/{user_id}", post(block_user))
        // Rooms
        .route("/rooms", post(create_room).get(list_rooms))
        .route("/rooms/{id}/join", post(join_room))
        .route("/rooms/{id}/message", post(post_room_message))
        .route("/rooms/{id}/messages", get(list_room_messages))
}
