use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{ContactInfo, SessionId};
use super::repository::{AnalyticsPublisher, RepositoryError, SessionRepository};
use super::service::{QuizService, QuizServiceError};

/// Router builder exposing HTTP endpoints for the quiz lifecycle.
pub fn quiz_router<R, A>(service: Arc<QuizService<R, A>>) -> Router
where
    R: SessionRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    Router::new()
        .route("/api/v1/quiz/questions", get(questions_handler::<R, A>))
        .route("/api/v1/quiz/sessions", post(start_handler::<R, A>))
        .route(
            "/api/v1/quiz/sessions/:session_id",
            get(status_handler::<R, A>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/answers",
            post(answer_handler::<R, A>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/contact",
            post(contact_handler::<R, A>),
        )
        .route(
            "/api/v1/quiz/sessions/:session_id/result",
            post(result_handler::<R, A>),
        )
        .with_state(service)
}

/// Question list as presented to the UI: prompts and option texts only, never
/// the score vectors.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) id: u8,
    pub(crate) text: &'static str,
    pub(crate) options: Vec<OptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct OptionView {
    pub(crate) id: u8,
    pub(crate) text: &'static str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) question_id: u8,
    pub(crate) option_id: u8,
}

pub(crate) async fn questions_handler<R, A>(
    State(service): State<Arc<QuizService<R, A>>>,
) -> axum::Json<Vec<QuestionView>>
where
    R: SessionRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    let views = service
        .bank()
        .questions()
        .iter()
        .map(|question| QuestionView {
            id: question.id,
            text: question.text,
            options: question
                .options
                .iter()
                .map(|option| OptionView {
                    id: option.id,
                    text: option.text,
                })
                .collect(),
        })
        .collect();

    axum::Json(views)
}

pub(crate) async fn start_handler<R, A>(
    State(service): State<Arc<QuizService<R, A>>>,
) -> Response
where
    R: SessionRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    match service.start() {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.status_view())).into_response(),
        Err(error) => internal_error(error),
    }
}

pub(crate) async fn answer_handler<R, A>(
    State(service): State<Arc<QuizService<R, A>>>,
    Path(session_id): Path<String>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    let id = SessionId(session_id);
    match service.answer(&id, request.question_id, request.option_id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => quiz_error_response(error),
    }
}

pub(crate) async fn contact_handler<R, A>(
    State(service): State<Arc<QuizService<R, A>>>,
    Path(session_id): Path<String>,
    axum::Json(contact): axum::Json<ContactInfo>,
) -> Response
where
    R: SessionRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    let id = SessionId(session_id);
    match service.contact(&id, contact) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => quiz_error_response(error),
    }
}

pub(crate) async fn result_handler<R, A>(
    State(service): State<Arc<QuizService<R, A>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    let id = SessionId(session_id);
    match service.complete(&id) {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome.view())).into_response(),
        Err(error) => quiz_error_response(error),
    }
}

pub(crate) async fn status_handler<R, A>(
    State(service): State<Arc<QuizService<R, A>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    A: AnalyticsPublisher + 'static,
{
    let id = SessionId(session_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.status_view())).into_response(),
        Err(error) => quiz_error_response(error),
    }
}

fn quiz_error_response(error: QuizServiceError) -> Response {
    match error {
        QuizServiceError::Repository(RepositoryError::NotFound) => {
            let payload = json!({ "error": "session not found" });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        QuizServiceError::Answer(answer_error) => {
            let payload = json!({ "error": answer_error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        QuizServiceError::SessionCompleted => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        other => internal_error(other),
    }
}

fn internal_error(error: QuizServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
