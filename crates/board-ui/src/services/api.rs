//! HTTP client helpers (REST).

use std::cell::RefCell;

use board_api_models::dashboard::{
    ConsumptionImpact, SnackBrandShare, WeeklyMoodTrend, WeeklyWorkoutTrend,
};
use board_api_models::{
    CreatePost, LoginRequest, LoginResponse, Post, PostListResponse, UpdatePost,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::logic::{
    COFFEE_CONSUMPTION_PATH, LOGIN_PATH, MOOD_TREND_PATH, SNACK_BRANDS_PATH, WORKOUT_TREND_PATH,
    post_path,
};
use crate::core::sync::FetchRequest;
use crate::services::error::ApiError;

/// REST client bound to one API origin.
#[derive(Debug)]
pub struct ApiClient {
    base_url: String,
    token: RefCell<Option<String>>,
}

impl ApiClient {
    /// Client for `base_url` with no credentials.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: RefCell::new(None),
        }
    }

    /// Replace the bearer token sent with every request.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token.filter(|value| !value.trim().is_empty());
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorize(&self, req: Request) -> Request {
        match self.token.borrow().as_deref() {
            Some(token) => req.header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    async fn send(&self, req: Request) -> Result<Response, ApiError> {
        let resp = self
            .authorize(req)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        let err = ApiError::from_response(status, &body);
        tracing::warn!(status, url = %resp.url(), error = %err, "request rejected");
        Err(err)
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let resp = self.send(Request::get(&self.url(path))).await?;
        Self::decode(resp).await
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        req: Request,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = req
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let resp = self.send(req).await?;
        Self::decode(resp).await
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send_json(Request::post(&self.url(LOGIN_PATH)), body)
            .await
    }

    /// `GET /posts` for one synchronizer request.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn list_posts(&self, request: &FetchRequest) -> Result<PostListResponse, ApiError> {
        self.get_json(&request.path()).await
    }

    /// `GET /posts/:id`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn fetch_post(&self, id: &str) -> Result<Post, ApiError> {
        self.get_json(&post_path(id)).await
    }

    /// `POST /posts`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn create_post(&self, body: &CreatePost) -> Result<Post, ApiError> {
        self.send_json(Request::post(&self.url("/posts")), body)
            .await
    }

    /// `PATCH /posts/:id`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn update_post(&self, id: &str, body: &UpdatePost) -> Result<Post, ApiError> {
        self.send_json(Request::patch(&self.url(&post_path(id))), body)
            .await
    }

    /// `DELETE /posts/:id`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn delete_post(&self, id: &str) -> Result<(), ApiError> {
        self.send(Request::delete(&self.url(&post_path(id))))
            .await
            .map(|_| ())
    }

    /// Weekly mood survey.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn fetch_mood_trend(&self) -> Result<Vec<WeeklyMoodTrend>, ApiError> {
        self.get_json(MOOD_TREND_PATH).await
    }

    /// Snack brand shares.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn fetch_snack_brands(&self) -> Result<Vec<SnackBrandShare>, ApiError> {
        self.get_json(SNACK_BRANDS_PATH).await
    }

    /// Weekly workout minutes.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn fetch_workout_trend(&self) -> Result<Vec<WeeklyWorkoutTrend>, ApiError> {
        self.get_json(WORKOUT_TREND_PATH).await
    }

    /// Coffee consumption impact per team.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or is rejected.
    pub async fn fetch_coffee_consumption(&self) -> Result<Vec<ConsumptionImpact>, ApiError> {
        self.get_json(COFFEE_CONSUMPTION_PATH).await
    }
}
