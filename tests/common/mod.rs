#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::{json, Value};

use expat_blog_api::database::{MemoryArticleStore, MemoryUserStore};
use expat_blog_api::{app, AppConfig, AppState};

/// A server on a free local port backed by fresh in-memory stores.
pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub state: AppState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn create_user(&self, username: &str, password: &str) -> Result<()> {
        self.state
            .users
            .register(&json!({
                "username": username,
                "password": password,
                "firstName": "john",
                "lastName": "smith",
            }))
            .await
            .map_err(|e| anyhow::anyhow!("failed to seed user: {}", e))?;
        Ok(())
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<reqwest::Response> {
        let res = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&json!({ "username": username, "password": password }))
            .send()
            .await?;
        Ok(res)
    }

    pub async fn token_for(&self, username: &str, password: &str) -> Result<String> {
        let body: Value = self.login(username, password).await?.json().await?;
        body["authToken"]
            .as_str()
            .map(str::to_string)
            .context("login response carried no authToken")
    }
}

pub async fn spawn_app() -> Result<TestApp> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let addr = format!("127.0.0.1:{}", port);

    let state = AppState::new(
        AppConfig::test(),
        Arc::new(MemoryArticleStore::new()),
        Arc::new(MemoryUserStore::new()),
    )?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    let router = app(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .no_proxy()
        .build()?;

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        client,
        state,
    })
}

pub fn blog_data(i: usize) -> Value {
    let categories = ["Work_Abroad", "Study_Abroad", "Travel_Abroad", "Study_Abroad"];
    let titles = ["What is an Expat?", "Study Abroad", "Backpacking", "Language Exchange"];
    let captions = [
        "What is it like being an expat?",
        "Why study abroad?",
        "What to expect traveling abroad?",
        "Make the best of your Language Exchange.",
    ];
    let i = i % 4;
    json!({
        "category": categories[i],
        "featured": "Featured",
        "title": titles[i],
        "caption": captions[i],
        "blogEntry": format!("Entry number {}", i),
        "image": format!("https://example.com/assets/{}.jpg", i),
    })
}

/// Insert articles through the service, bypassing HTTP.
pub async fn seed_articles(app: &TestApp, count: usize) -> Result<Vec<String>> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count {
        let article = serde_json::from_value(blog_data(i))?;
        let created = app
            .state
            .articles
            .create(article)
            .await
            .map_err(|e| anyhow::anyhow!("failed to seed article: {}", e))?;
        ids.push(created.id.to_string());
    }
    Ok(ids)
}
