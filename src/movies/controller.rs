use super::model::{CreateMovieRequest, Movie, UpdateMovieRequest};
use super::service::MovieService;
use crate::di::{Container, Injectable};
use crate::error::Result;
use axum::{Json, Router, extract::Path, routing::get};
use std::sync::Arc;

/// HTTP surface of the movies collection.
///
/// Every handler hands its path id and body to the [`MovieService`] untouched
/// and returns whatever the service produced. Failures travel up with `?` and
/// become responses through `MoviesError`'s `IntoResponse`.
pub struct MoviesController {
    service: Arc<dyn MovieService>,
}

impl Injectable for MoviesController {
    fn inject(container: &Container) -> Result<Self> {
        Ok(Self {
            service: container.resolve::<dyn MovieService>()?,
        })
    }
}

impl MoviesController {
    pub fn new(service: Arc<dyn MovieService>) -> Self {
        Self { service }
    }

    pub fn base_path() -> &'static str {
        "/movies"
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_all(&self) -> Result<Json<Vec<Movie>>> {
        Ok(Json(self.service.get_all().await?))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn get_one(&self, id: String) -> Result<Json<Movie>> {
        Ok(Json(self.service.get_one(&id).await?))
    }

    #[tracing::instrument(level = "debug", skip(self, payload))]
    pub async fn create(&self, payload: CreateMovieRequest) -> Result<Json<Movie>> {
        Ok(Json(self.service.create(payload).await?))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn remove(&self, id: String) -> Result<Json<Movie>> {
        Ok(Json(self.service.delete_one(&id).await?))
    }

    #[tracing::instrument(level = "debug", skip(self, payload))]
    pub async fn update(&self, id: String, payload: UpdateMovieRequest) -> Result<Json<Movie>> {
        Ok(Json(self.service.update(&id, payload).await?))
    }

    /// Routes relative to [`MoviesController::base_path`].
    pub fn router<S>(controller: Arc<Self>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
            .route(
                "/",
                get({
                    let controller = controller.clone();
                    move || {
                        let controller = controller.clone();
                        async move { controller.get_all().await }
                    }
                })
                .post({
                    let controller = controller.clone();
                    move |Json(payload): Json<CreateMovieRequest>| {
                        let controller = controller.clone();
                        async move { controller.create(payload).await }
                    }
                }),
            )
            .route(
                "/{id}",
                get({
                    let controller = controller.clone();
                    move |Path(id): Path<String>| {
                        let controller = controller.clone();
                        async move { controller.get_one(id).await }
                    }
                })
                .delete({
                    let controller = controller.clone();
                    move |Path(id): Path<String>| {
                        let controller = controller.clone();
                        async move { controller.remove(id).await }
                    }
                })
                .patch({
                    let controller = controller.clone();
                    move |Path(id): Path<String>, Json(payload): Json<UpdateMovieRequest>| {
                        let controller = controller.clone();
                        async move { controller.update(id, payload).await }
                    }
                }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoviesError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        GetAll,
        GetOne(String),
        Create(CreateMovieRequest),
        DeleteOne(String),
        Update(String, UpdateMovieRequest),
    }

    /// Records every call and answers with a fixed movie, or fails on demand.
    #[derive(Default)]
    struct RecordingService {
        calls: Mutex<Vec<Call>>,
        fail: bool,
    }

    impl RecordingService {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn answer<T>(&self, call: Call, value: T) -> Result<T> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err(MoviesError::Internal("collaborator exploded".to_string()))
            } else {
                Ok(value)
            }
        }
    }

    fn sentinel() -> Movie {
        Movie {
            id: 77,
            title: "Sentinel".to_string(),
            year: 1977,
            genres: vec!["sci-fi".to_string()],
        }
    }

    #[async_trait]
    impl MovieService for RecordingService {
        async fn get_all(&self) -> Result<Vec<Movie>> {
            self.answer(Call::GetAll, vec![sentinel(), sentinel()])
        }

        async fn get_one(&self, id: &str) -> Result<Movie> {
            self.answer(Call::GetOne(id.to_string()), sentinel())
        }

        async fn create(&self, payload: CreateMovieRequest) -> Result<Movie> {
            self.answer(Call::Create(payload), sentinel())
        }

        async fn delete_one(&self, id: &str) -> Result<Movie> {
            self.answer(Call::DeleteOne(id.to_string()), sentinel())
        }

        async fn update(&self, id: &str, payload: UpdateMovieRequest) -> Result<Movie> {
            self.answer(Call::Update(id.to_string(), payload), sentinel())
        }
    }

    fn controller_with(service: Arc<RecordingService>) -> MoviesController {
        MoviesController::new(service)
    }

    #[tokio::test]
    async fn test_get_all_delegates_once() {
        let service = Arc::new(RecordingService::default());
        let Json(movies) = controller_with(service.clone()).get_all().await.unwrap();

        assert_eq!(movies, vec![sentinel(), sentinel()]);
        assert_eq!(service.calls(), vec![Call::GetAll]);
    }

    #[tokio::test]
    async fn test_get_one_forwards_id_verbatim() {
        let service = Arc::new(RecordingService::default());
        let controller = controller_with(service.clone());

        for id in ["1", "not-a-number", " 42 ", ""] {
            let Json(movie) = controller.get_one(id.to_string()).await.unwrap();
            assert_eq!(movie, sentinel());
        }
        assert_eq!(
            service.calls(),
            vec![
                Call::GetOne("1".into()),
                Call::GetOne("not-a-number".into()),
                Call::GetOne(" 42 ".into()),
                Call::GetOne("".into()),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_forwards_payload_unmodified() {
        let service = Arc::new(RecordingService::default());
        let payload = CreateMovieRequest {
            title: "  Untrimmed  ".to_string(),
            year: 0,
            genres: vec![],
        };

        let Json(movie) = controller_with(service.clone())
            .create(payload.clone())
            .await
            .unwrap();

        assert_eq!(movie, sentinel());
        assert_eq!(service.calls(), vec![Call::Create(payload)]);
    }

    #[tokio::test]
    async fn test_remove_forwards_id() {
        let service = Arc::new(RecordingService::default());
        let Json(movie) = controller_with(service.clone())
            .remove("5".to_string())
            .await
            .unwrap();

        assert_eq!(movie, sentinel());
        assert_eq!(service.calls(), vec![Call::DeleteOne("5".into())]);
    }

    #[tokio::test]
    async fn test_update_forwards_id_then_payload() {
        let service = Arc::new(RecordingService::default());
        let payload = UpdateMovieRequest {
            genres: Some(vec!["noir".to_string()]),
            ..Default::default()
        };

        let Json(movie) = controller_with(service.clone())
            .update("9".to_string(), payload.clone())
            .await
            .unwrap();

        assert_eq!(movie, sentinel());
        assert_eq!(service.calls(), vec![Call::Update("9".into(), payload)]);
    }

    #[tokio::test]
    async fn test_failures_propagate_unmodified() {
        let service = Arc::new(RecordingService::failing());
        let controller = controller_with(service.clone());

        let results = vec![
            controller.get_all().await.map(|_| ()),
            controller.get_one("1".into()).await.map(|_| ()),
            controller
                .create(CreateMovieRequest {
                    title: "x".into(),
                    year: 2000,
                    genres: vec![],
                })
                .await
                .map(|_| ()),
            controller.remove("1".into()).await.map(|_| ()),
            controller
                .update("1".into(), UpdateMovieRequest::default())
                .await
                .map(|_| ()),
        ];

        for result in results {
            match result {
                Err(MoviesError::Internal(message)) => {
                    assert_eq!(message, "collaborator exploded")
                }
                other => panic!("expected the collaborator's failure, got {other:?}"),
            }
        }
        assert_eq!(service.calls().len(), 5);
    }

    #[test]
    fn test_inject_requires_movie_service() {
        let container = Container::new();
        assert!(matches!(
            MoviesController::inject(&container),
            Err(MoviesError::DependencyNotFound { .. })
        ));
    }
}
