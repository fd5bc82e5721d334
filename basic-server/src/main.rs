use std::{env, path, sync::Arc};

use librillo_catalog_adapter_sqlite::CatalogAdapterSqlite;
use librillo_mirror_adapter_redb::MirrorAdapterRedb;

pub struct Config {
	pub data_dir: path::PathBuf,
	pub listen: String,
	pub mirror_collection: String,
}

#[tokio::main]
async fn main() {
	let config = Config {
		data_dir: path::PathBuf::from(env::var("DATA_DIR").unwrap_or("./data".to_string())),
		listen: env::var("LISTEN").unwrap_or("127.0.0.1:8080".to_string()),
		mirror_collection: env::var("MIRROR_COLLECTION").unwrap_or("books".to_string()),
	};

	let catalog_adapter =
		Arc::new(CatalogAdapterSqlite::new(config.data_dir.join("catalog.db")).await.unwrap());
	let mirror_adapter =
		Arc::new(MirrorAdapterRedb::new(config.data_dir.join("mirror")).await.unwrap());

	let mut builder = librillo::AppBuilder::new();
	builder
		.listen(config.listen)
		.mirror_collection(config.mirror_collection)
		.catalog_adapter(catalog_adapter)
		.mirror_adapter(mirror_adapter);

	builder.run().await.unwrap();
}

// vim: ts=4
