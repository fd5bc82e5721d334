//! App state type

use std::sync::Arc;

use crate::prelude::*;
use crate::routes;

use librillo_types::catalog_adapter::CatalogAdapter;
use librillo_types::mirror_adapter::MirrorAdapter;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct AppState {
	pub opts: AppBuilderOpts,

	pub catalog_adapter: Arc<dyn CatalogAdapter>,
	pub mirror_adapter: Arc<dyn MirrorAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug)]
pub struct AppBuilderOpts {
	listen: Box<str>,
	/// Mirror store collection the stream watches
	pub mirror_collection: Box<str>,
}

pub struct AppBuilder {
	opts: AppBuilderOpts,
	catalog_adapter: Option<Arc<dyn CatalogAdapter>>,
	mirror_adapter: Option<Arc<dyn MirrorAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		AppBuilder {
			opts: AppBuilderOpts {
				listen: "127.0.0.1:8080".into(),
				mirror_collection: "books".into(),
			},
			catalog_adapter: None,
			mirror_adapter: None,
		}
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self { self.opts.listen = listen.into(); self }
	pub fn mirror_collection(&mut self, collection: impl Into<Box<str>>) -> &mut Self { self.opts.mirror_collection = collection.into(); self }

	// Adapters
	pub fn catalog_adapter(&mut self, catalog_adapter: Arc<dyn CatalogAdapter>) -> &mut Self { self.catalog_adapter = Some(catalog_adapter); self }
	pub fn mirror_adapter(&mut self, mirror_adapter: Arc<dyn MirrorAdapter>) -> &mut Self { self.mirror_adapter = Some(mirror_adapter); self }

	/// Assemble the shared app state without starting the server.
	pub fn build(self) -> App {
		Arc::new(AppState {
			opts: self.opts,
			catalog_adapter: self.catalog_adapter.expect("FATAL: No catalog adapter"),
			mirror_adapter: self.mirror_adapter.expect("FATAL: No mirror adapter"),
		})
	}

	pub async fn run(self) -> LbResult<()> {
		tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.init();
		info!("Librillo V{}", VERSION);

		let app = self.build();
		let router = routes::init(app.clone());

		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await?;
		info!("Listening on {}", app.opts.listen);
		axum::serve(listener, router).await?;

		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self { Self::new() }
}

// vim: ts=4
