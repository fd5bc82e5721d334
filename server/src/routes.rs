use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::book;
use crate::stream;
use crate::App;

async fn get_welcome() -> Json<Value> {
	Json(json!({ "message": "Welcome to the Librillo catalog" }))
}

pub fn init(state: App) -> Router {
	Router::new()
		.route("/", get(get_welcome))
		.route("/api/book", get(book::handler::list_books).post(book::handler::post_book))
		.route(
			"/api/book/{book_id}",
			get(book::handler::get_book)
				.patch(book::handler::patch_book)
				.delete(book::handler::delete_book),
		)
		.route("/ws/book", get(stream::websocket::get_ws_book))
		.layer(TraceLayer::new_for_http())
		.with_state(state)
}

// vim: ts=4
