#![allow(dead_code)]

use blog_api::db::{DbPool, establish_connection_pool};
use blog_api::domain::post::NewPost;
use blog_api::domain::types::{AuthorName, PostBody, PostTitle};
use blog_api::repository::{DieselRepository, PostWriter};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// A migrated SQLite database living in a temporary directory.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("blog.db");
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        {
            let mut conn = pool.get().expect("get connection");
            let conn: &mut SqliteConnection = &mut conn;
            conn.run_pending_migrations(MIGRATIONS)
                .expect("run migrations");
        }

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool.clone())
    }
}

pub fn new_post(title: &str, author: &str) -> NewPost {
    NewPost {
        title: PostTitle::new(title).unwrap(),
        body: PostBody::new(format!("Body of {title}")).unwrap(),
        author: AuthorName::new(author).unwrap(),
    }
}

/// Inserts `count` posts titled `Post 1..=count`, alternating two authors.
pub fn seed_posts(repo: &DieselRepository, count: usize) {
    for n in 1..=count {
        let author = if n % 2 == 0 { "bob" } else { "ann" };
        repo.create_post(&new_post(&format!("Post {n}"), author))
            .unwrap();
    }
}
